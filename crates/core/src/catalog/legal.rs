//! Entertainment-law service listings.

use serde::{Deserialize, Serialize};
use validator::Validate;

use super::{haystack, seed_date};
use crate::listing::Listing;
use crate::types::{ListingId, Timestamp, UserId};
use crate::validation::non_blank;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LegalService {
    pub id: ListingId,
    pub user_id: Option<UserId>,
    pub firm_name: String,
    pub category: String,
    pub description: String,
    pub hourly_rate: Option<f64>,
    pub location: Option<String>,
    #[serde(default)]
    pub practice_areas: Vec<String>,
    pub years_experience: Option<i32>,
    pub rating: Option<f64>,
    pub created_at: Timestamp,
}

impl Listing for LegalService {
    fn id(&self) -> ListingId {
        self.id
    }
    fn owner_id(&self) -> Option<UserId> {
        self.user_id
    }
    fn title(&self) -> &str {
        &self.firm_name
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
        let areas = self.practice_areas.join(" ");
        haystack(&[
            &self.firm_name,
            &self.category,
            &self.description,
            self.location.as_deref().unwrap_or(""),
            &areas,
        ])
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateLegalService {
    #[validate(custom(function = non_blank, message = "must not be blank"))]
    pub firm_name: String,
    #[validate(custom(function = non_blank, message = "must not be blank"))]
    pub category: String,
    #[validate(custom(function = non_blank, message = "must not be blank"))]
    pub description: String,
    #[validate(range(min = 0.0, message = "must not be negative"))]
    pub hourly_rate: Option<f64>,
    pub location: Option<String>,
    #[serde(default)]
    pub practice_areas: Vec<String>,
    #[validate(range(min = 0, message = "must not be negative"))]
    pub years_experience: Option<i32>,
}

impl CreateLegalService {
    pub fn into_listing(self, id: ListingId, user_id: UserId, created_at: Timestamp) -> LegalService {
        LegalService {
            id,
            user_id: Some(user_id),
            firm_name: self.firm_name,
            category: self.category,
            description: self.description,
            hourly_rate: self.hourly_rate,
            location: self.location,
            practice_areas: self.practice_areas,
            years_experience: self.years_experience,
            rating: None,
            created_at,
        }
    }
}

pub fn categories() -> &'static [&'static str] {
    &[
        "contracts",
        "clearances",
        "production-counsel",
        "intellectual-property",
        "labor",
        "distribution",
    ]
}

pub fn seed_legal() -> Vec<LegalService> {
    vec![
        LegalService {
            id: 1,
            user_id: Some(102),
            firm_name: "Calloway Entertainment Law".to_string(),
            category: "contracts".to_string(),
            description: "Deal memos, crew agreements, and option contracts for independent film."
                .to_string(),
            hourly_rate: Some(350.0),
            location: Some("Los Angeles, CA".to_string()),
            practice_areas: vec!["options".to_string(), "crew-deals".to_string()],
            years_experience: Some(18),
            rating: Some(4.8),
            created_at: seed_date(2026, 4, 11),
        },
        LegalService {
            id: 2,
            user_id: Some(101),
            firm_name: "Mercer & Boyd LLP".to_string(),
            category: "clearances".to_string(),
            description: "Music licensing, archival clearances, and fair-use opinions.".to_string(),
            hourly_rate: Some(425.0),
            location: Some("New York, NY".to_string()),
            practice_areas: vec!["music".to_string(), "archival".to_string()],
            years_experience: Some(22),
            rating: Some(4.9),
            created_at: seed_date(2026, 2, 3),
        },
        LegalService {
            id: 3,
            user_id: Some(103),
            firm_name: "Riverbend Counsel".to_string(),
            category: "production-counsel".to_string(),
            description: "Flat-fee production counsel packages for features under two million."
                .to_string(),
            hourly_rate: Some(275.0),
            location: Some("Austin, TX".to_string()),
            practice_areas: vec!["production".to_string(), "insurance".to_string()],
            years_experience: Some(9),
            rating: Some(4.5),
            created_at: seed_date(2026, 6, 19),
        },
        LegalService {
            id: 4,
            user_id: Some(102),
            firm_name: "Hale IP Group".to_string(),
            category: "intellectual-property".to_string(),
            description: "Chain-of-title reviews, copyright registration, trademark work."
                .to_string(),
            hourly_rate: None,
            location: Some("Remote".to_string()),
            practice_areas: vec!["copyright".to_string(), "trademark".to_string()],
            years_experience: Some(15),
            rating: None,
            created_at: seed_date(2025, 11, 27),
        },
        LegalService {
            id: 5,
            user_id: Some(101),
            firm_name: "Union Square Labor Law".to_string(),
            category: "labor".to_string(),
            description: "Guild signatory paperwork and labor compliance for productions."
                .to_string(),
            hourly_rate: Some(390.0),
            location: Some("New York, NY".to_string()),
            practice_areas: vec!["guilds".to_string(), "compliance".to_string()],
            years_experience: Some(13),
            rating: Some(4.7),
            created_at: seed_date(2026, 7, 22),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::validate_payload;

    #[test]
    fn blank_description_is_rejected() {
        let payload = CreateLegalService {
            firm_name: "Calloway".to_string(),
            category: "contracts".to_string(),
            description: "   ".to_string(),
            hourly_rate: Some(300.0),
            location: None,
            practice_areas: vec![],
            years_experience: None,
        };
        assert!(validate_payload(&payload).is_err());
    }
}
