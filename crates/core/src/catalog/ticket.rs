//! Event ticket listings.
//!
//! Tickets are the one vertical without ratings, so [`Listing::rating`]
//! always reports `None` and rating-based sorts leave the order as found.

use serde::{Deserialize, Serialize};
use validator::Validate;

use super::{haystack, seed_date};
use crate::listing::Listing;
use crate::types::{ListingId, Timestamp, UserId};
use crate::validation::non_blank;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TicketListing {
    pub id: ListingId,
    pub user_id: Option<UserId>,
    pub event_name: String,
    pub category: String,
    pub description: String,
    pub price: Option<f64>,
    pub venue: String,
    pub city: Option<String>,
    pub event_date: Timestamp,
    pub quantity: i32,
    #[serde(default)]
    pub image_urls: Vec<String>,
    pub created_at: Timestamp,
}

impl Listing for TicketListing {
    fn id(&self) -> ListingId {
        self.id
    }
    fn owner_id(&self) -> Option<UserId> {
        self.user_id
    }
    fn title(&self) -> &str {
        &self.event_name
    }
    fn category(&self) -> &str {
        &self.category
    }
    fn location(&self) -> Option<&str> {
        self.city.as_deref()
    }
    fn price(&self) -> Option<f64> {
        self.price
    }
    fn rating(&self) -> Option<f64> {
        None
    }
    fn created_at(&self) -> Timestamp {
        self.created_at
    }
    fn search_haystack(&self) -> String {
        haystack(&[
            &self.event_name,
            &self.category,
            &self.description,
            &self.venue,
            self.city.as_deref().unwrap_or(""),
        ])
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateTicketListing {
    #[validate(custom(function = non_blank, message = "must not be blank"))]
    pub event_name: String,
    #[validate(custom(function = non_blank, message = "must not be blank"))]
    pub category: String,
    #[validate(custom(function = non_blank, message = "must not be blank"))]
    pub description: String,
    #[validate(range(min = 0.0, message = "must not be negative"))]
    pub price: Option<f64>,
    #[validate(custom(function = non_blank, message = "must not be blank"))]
    pub venue: String,
    pub city: Option<String>,
    pub event_date: Timestamp,
    #[validate(range(min = 1, message = "must list at least one ticket"))]
    pub quantity: i32,
    #[serde(default)]
    pub image_urls: Vec<String>,
}

impl CreateTicketListing {
    pub fn into_listing(self, id: ListingId, user_id: UserId, created_at: Timestamp) -> TicketListing {
        TicketListing {
            id,
            user_id: Some(user_id),
            event_name: self.event_name,
            category: self.category,
            description: self.description,
            price: self.price,
            venue: self.venue,
            city: self.city,
            event_date: self.event_date,
            quantity: self.quantity,
            image_urls: self.image_urls,
            created_at,
        }
    }
}

pub fn categories() -> &'static [&'static str] {
    &["premiere", "festival", "screening", "panel", "workshop", "party"]
}

pub fn seed_tickets() -> Vec<TicketListing> {
    vec![
        TicketListing {
            id: 1,
            user_id: Some(102),
            event_name: "Midnight Static Premiere".to_string(),
            category: "premiere".to_string(),
            description: "Opening-night screening with cast Q&A and afterparty.".to_string(),
            price: Some(65.0),
            venue: "The Vista".to_string(),
            city: Some("Los Angeles, CA".to_string()),
            event_date: seed_date(2026, 9, 18),
            quantity: 2,
            image_urls: vec!["https://images.backlot.example/tickets/midnight-static.jpg"
                .to_string()],
            created_at: seed_date(2026, 7, 30),
        },
        TicketListing {
            id: 2,
            user_id: Some(101),
            event_name: "Harbor Docs Festival Pass".to_string(),
            category: "festival".to_string(),
            description: "Full weekend pass, all venues, includes industry lounge.".to_string(),
            price: Some(180.0),
            venue: "Harbor Arts Center".to_string(),
            city: Some("Portland, OR".to_string()),
            event_date: seed_date(2026, 10, 2),
            quantity: 1,
            image_urls: vec![],
            created_at: seed_date(2026, 8, 3),
        },
        TicketListing {
            id: 3,
            user_id: Some(103),
            event_name: "35mm Print Night: Chinatown".to_string(),
            category: "screening".to_string(),
            description: "Archival print, introduced by the restoration team.".to_string(),
            price: Some(18.0),
            venue: "Music Box Theatre".to_string(),
            city: Some("Chicago, IL".to_string()),
            event_date: seed_date(2026, 9, 5),
            quantity: 4,
            image_urls: vec![],
            created_at: seed_date(2026, 7, 14),
        },
        TicketListing {
            id: 4,
            user_id: Some(102),
            event_name: "Financing Indie Features Panel".to_string(),
            category: "panel".to_string(),
            description: "Producers and sales agents on closing the money gap.".to_string(),
            price: None,
            venue: "Film Society Hall".to_string(),
            city: Some("New York, NY".to_string()),
            event_date: seed_date(2026, 9, 26),
            quantity: 6,
            image_urls: vec![],
            created_at: seed_date(2026, 8, 10),
        },
        TicketListing {
            id: 5,
            user_id: Some(101),
            event_name: "Wrap Party: Glass Harbor".to_string(),
            category: "party".to_string(),
            description: "Crew-and-friends wrap party, open bar until midnight.".to_string(),
            price: Some(25.0),
            venue: "The Roof at Ember".to_string(),
            city: Some("Atlanta, GA".to_string()),
            event_date: seed_date(2026, 8, 29),
            quantity: 3,
            image_urls: vec![],
            created_at: seed_date(2026, 8, 1),
        },
    ]
}
