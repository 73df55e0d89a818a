pub mod admin;
pub mod asset;
pub mod education;
pub mod investor;
pub mod legal;
pub mod product;
pub mod studio;
pub mod talent;
pub mod ticket;
pub mod uploads;
