//! Production products and services.

use serde::{Deserialize, Serialize};
use validator::Validate;

use super::{haystack, seed_date};
use crate::listing::Listing;
use crate::types::{ListingId, Timestamp, UserId};
use crate::validation::non_blank;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductService {
    pub id: ListingId,
    pub user_id: Option<UserId>,
    pub title: String,
    pub category: String,
    pub description: String,
    pub price: Option<f64>,
    pub location: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    /// Typical turnaround for service listings.
    pub delivery_days: Option<i32>,
    pub rating: Option<f64>,
    pub created_at: Timestamp,
}

impl Listing for ProductService {
    fn id(&self) -> ListingId {
        self.id
    }
    fn owner_id(&self) -> Option<UserId> {
        self.user_id
    }
    fn title(&self) -> &str {
        &self.title
    }
    fn category(&self) -> &str {
        &self.category
    }
    fn location(&self) -> Option<&str> {
        self.location.as_deref()
    }
    fn price(&self) -> Option<f64> {
        self.price
    }
    fn rating(&self) -> Option<f64> {
        self.rating
    }
    fn created_at(&self) -> Timestamp {
        self.created_at
    }
    fn search_haystack(&self) -> String {
        let tags = self.tags.join(" ");
        haystack(&[
            &self.title,
            &self.category,
            &self.description,
            self.location.as_deref().unwrap_or(""),
            &tags,
        ])
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateProductService {
    #[validate(custom(function = non_blank, message = "must not be blank"))]
    pub title: String,
    #[validate(custom(function = non_blank, message = "must not be blank"))]
    pub category: String,
    #[validate(custom(function = non_blank, message = "must not be blank"))]
    pub description: String,
    #[validate(range(min = 0.0, message = "must not be negative"))]
    pub price: Option<f64>,
    pub location: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[validate(range(min = 1, message = "must be at least one day"))]
    pub delivery_days: Option<i32>,
}

impl CreateProductService {
    pub fn into_listing(self, id: ListingId, user_id: UserId, created_at: Timestamp) -> ProductService {
        ProductService {
            id,
            user_id: Some(user_id),
            title: self.title,
            category: self.category,
            description: self.description,
            price: self.price,
            location: self.location,
            tags: self.tags,
            delivery_days: self.delivery_days,
            rating: None,
            created_at,
        }
    }
}

pub fn categories() -> &'static [&'static str] {
    &[
        "post-production",
        "vfx",
        "sound-design",
        "transcription",
        "storyboards",
        "catering",
        "insurance",
    ]
}

pub fn seed_products() -> Vec<ProductService> {
    vec![
        ProductService {
            id: 1,
            user_id: Some(103),
            title: "Feature Color Grade Package".to_string(),
            category: "post-production".to_string(),
            description: "Full feature grade in Resolve, two revision passes included."
                .to_string(),
            price: Some(4_500.0),
            location: Some("Remote".to_string()),
            tags: vec!["resolve".to_string(), "hdr".to_string()],
            delivery_days: Some(21),
            rating: Some(4.8),
            created_at: seed_date(2026, 4, 20),
        },
        ProductService {
            id: 2,
            user_id: Some(101),
            title: "Screen Replacement VFX".to_string(),
            category: "vfx".to_string(),
            description: "Phone and monitor screen comps, tracked and graded per shot."
                .to_string(),
            price: Some(85.0),
            location: Some("Remote".to_string()),
            tags: vec!["compositing".to_string(), "tracking".to_string()],
            delivery_days: Some(5),
            rating: Some(4.5),
            created_at: seed_date(2026, 2, 28),
        },
        ProductService {
            id: 3,
            user_id: Some(102),
            title: "Dialogue Cleanup and Mix".to_string(),
            category: "sound-design".to_string(),
            description: "Noise reduction, ADR fitting, and a broadcast-ready stereo mix."
                .to_string(),
            price: Some(1_200.0),
            location: Some("Nashville, TN".to_string()),
            tags: vec!["izotope".to_string(), "mix".to_string()],
            delivery_days: Some(10),
            rating: Some(4.9),
            created_at: seed_date(2026, 6, 9),
        },
        ProductService {
            id: 4,
            user_id: Some(103),
            title: "Shooting Board Illustration".to_string(),
            category: "storyboards".to_string(),
            description: "Hand-drawn boards from your shot list, 40 to 60 frames a week."
                .to_string(),
            price: Some(900.0),
            location: Some("Remote".to_string()),
            tags: vec!["illustration".to_string()],
            delivery_days: Some(7),
            rating: None,
            created_at: seed_date(2025, 11, 5),
        },
        ProductService {
            id: 5,
            user_id: Some(102),
            title: "Set Catering, 30 Heads".to_string(),
            category: "catering".to_string(),
            description: "Hot lunch and crafty restock for up to thirty crew, per shoot day."
                .to_string(),
            price: Some(650.0),
            location: Some("Los Angeles, CA".to_string()),
            tags: vec!["crafty".to_string(), "dietary".to_string()],
            delivery_days: None,
            rating: Some(4.4),
            created_at: seed_date(2026, 7, 17),
        },
        ProductService {
            id: 6,
            user_id: Some(101),
            title: "Short Film Insurance Binder".to_string(),
            category: "insurance".to_string(),
            description: "General liability and equipment coverage for shoots under ten days."
                .to_string(),
            price: Some(320.0),
            location: None,
            tags: vec!["liability".to_string(), "equipment".to_string()],
            delivery_days: Some(2),
            rating: Some(4.6),
            created_at: seed_date(2026, 5, 26),
        },
    ]
}
