//! Studio space listings: stages, recording rooms, photo studios.

use serde::{Deserialize, Serialize};
use validator::Validate;

use super::{haystack, seed_date};
use crate::listing::Listing;
use crate::types::{ListingId, Timestamp, UserId};
use crate::validation::non_blank;

/// A bookable studio space.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Studio {
    pub id: ListingId,
    pub user_id: Option<UserId>,
    pub name: String,
    pub category: String,
    pub description: String,
    pub hourly_rate: Option<f64>,
    pub location: Option<String>,
    #[serde(default)]
    pub amenities: Vec<String>,
    /// Maximum crew size the space is rated for.
    pub capacity: Option<i32>,
    #[serde(default)]
    pub photo_urls: Vec<String>,
    pub rating: Option<f64>,
    pub created_at: Timestamp,
}

impl Listing for Studio {
    fn id(&self) -> ListingId {
        self.id
    }
    fn owner_id(&self) -> Option<UserId> {
        self.user_id
    }
    fn title(&self) -> &str {
        &self.name
    }
    fn category(&self) -> &str {
        &self.category
    }
    fn location(&self) -> Option<&str> {
        self.location.as_deref()
    }
    fn price(&self) -> Option<f64> {
        self.hourly_rate
    }
    fn rating(&self) -> Option<f64> {
        self.rating
    }
    fn created_at(&self) -> Timestamp {
        self.created_at
    }
    fn search_haystack(&self) -> String {
        let amenities = self.amenities.join(" ");
        haystack(&[
            &self.name,
            &self.category,
            &self.description,
            self.location.as_deref().unwrap_or(""),
            &amenities,
        ])
    }
}

/// Payload for listing a studio space.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateStudio {
    #[validate(custom(function = non_blank, message = "must not be blank"))]
    pub name: String,
    #[validate(custom(function = non_blank, message = "must not be blank"))]
    pub category: String,
    #[validate(custom(function = non_blank, message = "must not be blank"))]
    pub description: String,
    #[validate(range(min = 0.0, message = "must not be negative"))]
    pub hourly_rate: f64,
    pub location: Option<String>,
    #[serde(default)]
    pub amenities: Vec<String>,
    #[validate(range(min = 1, message = "must be at least 1"))]
    pub capacity: Option<i32>,
    #[serde(default)]
    pub photo_urls: Vec<String>,
}

impl CreateStudio {
    pub fn into_listing(self, id: ListingId, user_id: UserId, created_at: Timestamp) -> Studio {
        Studio {
            id,
            user_id: Some(user_id),
            name: self.name,
            category: self.category,
            description: self.description,
            hourly_rate: Some(self.hourly_rate),
            location: self.location,
            amenities: self.amenities,
            capacity: self.capacity,
            photo_urls: self.photo_urls,
            rating: None,
            created_at,
        }
    }
}

pub fn categories() -> &'static [&'static str] {
    &[
        "sound-stage",
        "recording",
        "photo",
        "rehearsal",
        "post-production",
        "green-screen",
    ]
}

pub fn seed_studios() -> Vec<Studio> {
    vec![
        Studio {
            id: 1,
            user_id: Some(102),
            name: "Echo Park Sound".to_string(),
            category: "recording".to_string(),
            description: "Two iso booths, Neve console, engineer available on request."
                .to_string(),
            hourly_rate: Some(120.0),
            location: Some("Los Angeles, CA".to_string()),
            amenities: vec![
                "engineer".to_string(),
                "parking".to_string(),
                "lounge".to_string(),
            ],
            capacity: Some(8),
            photo_urls: vec!["https://cdn.backlot.example/seed/echo-park-sound.jpg".to_string()],
            rating: Some(4.7),
            created_at: seed_date(2026, 4, 3),
        },
        Studio {
            id: 2,
            user_id: Some(101),
            name: "Stage 9 Burbank".to_string(),
            category: "sound-stage".to_string(),
            description: "8,000 sq ft stage with 40 ft grid, silent HVAC, drive-in door."
                .to_string(),
            hourly_rate: Some(450.0),
            location: Some("Burbank, CA".to_string()),
            amenities: vec![
                "grid".to_string(),
                "drive-in".to_string(),
                "makeup-room".to_string(),
                "production-office".to_string(),
            ],
            capacity: Some(60),
            photo_urls: vec!["https://cdn.backlot.example/seed/stage9.jpg".to_string()],
            rating: Some(4.9),
            created_at: seed_date(2026, 2, 11),
        },
        Studio {
            id: 3,
            user_id: Some(103),
            name: "Greenpoint Daylight Loft".to_string(),
            category: "photo".to_string(),
            description: "North-facing windows, white cyc wall, freight elevator.".to_string(),
            hourly_rate: Some(95.0),
            location: Some("Brooklyn, NY".to_string()),
            amenities: vec!["cyc-wall".to_string(), "freight-elevator".to_string()],
            capacity: Some(15),
            photo_urls: Vec::new(),
            rating: Some(4.5),
            created_at: seed_date(2026, 6, 28),
        },
        Studio {
            id: 4,
            user_id: Some(102),
            name: "Westside Mix Room B".to_string(),
            category: "post-production".to_string(),
            description: "Atmos-certified mix stage, 4K projection, machine room.".to_string(),
            hourly_rate: Some(210.0),
            location: Some("Santa Monica, CA".to_string()),
            amenities: vec!["atmos".to_string(), "projection".to_string()],
            capacity: Some(12),
            photo_urls: Vec::new(),
            rating: None,
            created_at: seed_date(2025, 12, 5),
        },
        Studio {
            id: 5,
            user_id: Some(101),
            name: "East Austin Green Screen Bay".to_string(),
            category: "green-screen".to_string(),
            description: "Pre-lit 30 ft chroma cyc, tracking markers, blackout option."
                .to_string(),
            hourly_rate: Some(140.0),
            location: Some("Austin, TX".to_string()),
            amenities: vec!["pre-lit".to_string(), "blackout".to_string()],
            capacity: Some(20),
            photo_urls: vec!["https://cdn.backlot.example/seed/atx-greenscreen.jpg".to_string()],
            rating: Some(4.3),
            created_at: seed_date(2026, 7, 19),
        },
    ]
}
