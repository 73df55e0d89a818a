//! Production asset listings: cameras, lighting, grip, wardrobe, props.

use serde::{Deserialize, Serialize};
use validator::Validate;

use super::{haystack, seed_date};
use crate::listing::Listing;
use crate::types::{ListingId, Timestamp, UserId};
use crate::validation::non_blank;

/// A piece of production gear or set inventory offered for rent or sale.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssetListing {
    pub id: ListingId,
    pub user_id: Option<UserId>,
    pub title: String,
    pub category: String,
    pub description: String,
    /// Day rate for rentals, sale price otherwise.
    pub price: Option<f64>,
    pub location: Option<String>,
    pub condition: Option<String>,
    #[serde(default)]
    pub image_urls: Vec<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    pub rating: Option<f64>,
    pub created_at: Timestamp,
}

impl Listing for AssetListing {
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

/// Payload for creating an asset listing.
///
/// Title, category, price, and description gate creation; the rest is
/// optional dressing.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateAsset {
    #[validate(custom(function = non_blank, message = "must not be blank"))]
    pub title: String,
    #[validate(custom(function = non_blank, message = "must not be blank"))]
    pub category: String,
    #[validate(custom(function = non_blank, message = "must not be blank"))]
    pub description: String,
    #[validate(range(min = 0.0, message = "must not be negative"))]
    pub price: f64,
    pub location: Option<String>,
    pub condition: Option<String>,
    #[serde(default)]
    pub image_urls: Vec<String>,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl CreateAsset {
    /// Build the stored record the backend would return for this payload.
    pub fn into_listing(self, id: ListingId, user_id: UserId, created_at: Timestamp) -> AssetListing {
        AssetListing {
            id,
            user_id: Some(user_id),
            title: self.title,
            category: self.category,
            description: self.description,
            price: Some(self.price),
            location: self.location,
            condition: self.condition,
            image_urls: self.image_urls,
            tags: self.tags,
            rating: None,
            created_at,
        }
    }
}

/// Categories offered by the asset listing form.
pub fn categories() -> &'static [&'static str] {
    &[
        "cameras",
        "lenses",
        "lighting",
        "grip",
        "audio",
        "wardrobe",
        "props",
        "vehicles",
    ]
}

/// Demo dataset served when the backend is unreachable or empty.
pub fn seed_assets() -> Vec<AssetListing> {
    vec![
        AssetListing {
            id: 1,
            user_id: Some(101),
            title: "Arri Alexa Mini LF package".to_string(),
            category: "cameras".to_string(),
            description: "Body, four LF primes, cage, three batteries, two 1TB drives. \
                          Serviced in June."
                .to_string(),
            price: Some(950.0),
            location: Some("Los Angeles, CA".to_string()),
            condition: Some("excellent".to_string()),
            image_urls: vec!["https://cdn.backlot.example/seed/alexa-mini-lf.jpg".to_string()],
            tags: vec!["large-format".to_string(), "netflix-approved".to_string()],
            rating: Some(4.9),
            created_at: seed_date(2026, 5, 14),
        },
        AssetListing {
            id: 2,
            user_id: Some(102),
            title: "Aputure LS 600d Pro kit".to_string(),
            category: "lighting".to_string(),
            description: "Daylight LED with light dome and lantern. Flight case included."
                .to_string(),
            price: Some(85.0),
            location: Some("Atlanta, GA".to_string()),
            condition: Some("good".to_string()),
            image_urls: vec!["https://cdn.backlot.example/seed/aputure-600d.jpg".to_string()],
            tags: vec!["led".to_string(), "daylight".to_string()],
            rating: Some(4.6),
            created_at: seed_date(2026, 6, 2),
        },
        AssetListing {
            id: 3,
            user_id: Some(101),
            title: "1970s detective office set dressing".to_string(),
            category: "props".to_string(),
            description: "Desk, rotary phones, filing cabinets, period paperwork, ashtrays. \
                          Sold as one lot."
                .to_string(),
            price: Some(1400.0),
            location: Some("Burbank, CA".to_string()),
            condition: Some("fair".to_string()),
            image_urls: Vec::new(),
            tags: vec!["period".to_string(), "set-dressing".to_string()],
            rating: None,
            created_at: seed_date(2026, 3, 21),
        },
        AssetListing {
            id: 4,
            user_id: Some(103),
            title: "Sennheiser MKH 416 + boom".to_string(),
            category: "audio".to_string(),
            description: "Shotgun mic, Rycote blimp, carbon boom pole. Daily or weekly."
                .to_string(),
            price: Some(40.0),
            location: Some("Brooklyn, NY".to_string()),
            condition: Some("excellent".to_string()),
            image_urls: vec!["https://cdn.backlot.example/seed/mkh416.jpg".to_string()],
            tags: vec!["location-sound".to_string()],
            rating: Some(4.8),
            created_at: seed_date(2026, 7, 9),
        },
        AssetListing {
            // Imported from the old classifieds board, owner unknown.
            id: 5,
            user_id: None,
            title: "Picture car: 1988 Crown Victoria".to_string(),
            category: "vehicles".to_string(),
            description: "Runs, registered for film use, removable police decals.".to_string(),
            price: Some(300.0),
            location: Some("Albuquerque, NM".to_string()),
            condition: Some("fair".to_string()),
            image_urls: Vec::new(),
            tags: vec!["picture-car".to_string(), "period".to_string()],
            rating: Some(4.1),
            created_at: seed_date(2025, 11, 30),
        },
        AssetListing {
            id: 6,
            user_id: Some(102),
            title: "Matthews C-stand package (x10)".to_string(),
            category: "grip".to_string(),
            description: "Ten 40\" C-stands with grip heads and arms, sandbags included."
                .to_string(),
            price: Some(60.0),
            location: Some("Atlanta, GA".to_string()),
            condition: Some("good".to_string()),
            image_urls: Vec::new(),
            tags: vec!["grip".to_string()],
            rating: Some(4.4),
            created_at: seed_date(2026, 1, 17),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::validate_payload;

    #[test]
    fn seeds_have_unique_ids_and_known_categories() {
        let seeds = seed_assets();
        assert!(seeds.len() >= 5);

        let mut ids: Vec<ListingId> = seeds.iter().map(|a| a.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), seeds.len(), "duplicate seed id");

        for seed in &seeds {
            assert!(
                categories().contains(&seed.category.as_str()),
                "unknown category {}",
                seed.category
            );
        }
    }

    #[test]
    fn creation_requires_title_category_price_description() {
        let payload = CreateAsset {
            title: "  ".to_string(),
            category: "cameras".to_string(),
            description: "".to_string(),
            price: -10.0,
            location: None,
            condition: None,
            image_urls: Vec::new(),
            tags: Vec::new(),
        };
        let message = match validate_payload(&payload) {
            Err(crate::CoreError::Validation(msg)) => msg,
            other => panic!("expected validation failure, got {other:?}"),
        };
        assert!(message.contains("title"));
        assert!(message.contains("description"));
        assert!(message.contains("price"));
    }

    #[test]
    fn into_listing_carries_the_owner() {
        let payload = CreateAsset {
            title: "Fog machine".to_string(),
            category: "grip".to_string(),
            description: "DF-50 hazer".to_string(),
            price: 45.0,
            location: Some("Austin, TX".to_string()),
            condition: None,
            image_urls: Vec::new(),
            tags: Vec::new(),
        };
        let listing = payload.into_listing(99, 101, seed_date(2026, 8, 1));
        assert_eq!(listing.id, 99);
        assert_eq!(listing.user_id, Some(101));
        assert_eq!(listing.price, Some(45.0));
        assert!(listing.rating.is_none());
    }
}
