//! Courses and workshops.

use serde::{Deserialize, Serialize};
use validator::Validate;

use super::{haystack, seed_date};
use crate::listing::Listing;
use crate::types::{ListingId, Timestamp, UserId};
use crate::validation::non_blank;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CourseListing {
    pub id: ListingId,
    pub user_id: Option<UserId>,
    pub title: String,
    pub category: String,
    pub description: String,
    pub price: Option<f64>,
    /// City for in-person sessions. Online courses leave this unset.
    pub location: Option<String>,
    #[serde(default)]
    pub online: bool,
    pub duration_weeks: Option<i32>,
    pub instructor: String,
    #[serde(default)]
    pub topics: Vec<String>,
    pub rating: Option<f64>,
    pub created_at: Timestamp,
}

impl Listing for CourseListing {
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
        let topics = self.topics.join(" ");
        haystack(&[
            &self.title,
            &self.category,
            &self.description,
            &self.instructor,
            self.location.as_deref().unwrap_or(""),
            &topics,
        ])
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateCourseListing {
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
    pub online: bool,
    #[validate(range(min = 1, message = "must be at least one week"))]
    pub duration_weeks: Option<i32>,
    #[validate(custom(function = non_blank, message = "must not be blank"))]
    pub instructor: String,
    #[serde(default)]
    pub topics: Vec<String>,
}

impl CreateCourseListing {
    pub fn into_listing(self, id: ListingId, user_id: UserId, created_at: Timestamp) -> CourseListing {
        CourseListing {
            id,
            user_id: Some(user_id),
            title: self.title,
            category: self.category,
            description: self.description,
            price: self.price,
            location: self.location,
            online: self.online,
            duration_weeks: self.duration_weeks,
            instructor: self.instructor,
            topics: self.topics,
            rating: None,
            created_at,
        }
    }
}

pub fn categories() -> &'static [&'static str] {
    &[
        "directing",
        "cinematography",
        "editing",
        "screenwriting",
        "producing",
        "sound",
    ]
}

pub fn seed_courses() -> Vec<CourseListing> {
    vec![
        CourseListing {
            id: 1,
            user_id: Some(101),
            title: "Directing Actors Intensive".to_string(),
            category: "directing".to_string(),
            description: "Two weekends of scene work with professional actors on camera."
                .to_string(),
            price: Some(850.0),
            location: Some("Los Angeles, CA".to_string()),
            online: false,
            duration_weeks: Some(2),
            instructor: "Helen Marsh".to_string(),
            topics: vec!["blocking".to_string(), "performance".to_string()],
            rating: Some(4.9),
            created_at: seed_date(2026, 5, 30),
        },
        CourseListing {
            id: 2,
            user_id: Some(103),
            title: "Lighting for Low Budgets".to_string(),
            category: "cinematography".to_string(),
            description: "Build cinematic looks with small LED kits and practicals.".to_string(),
            price: Some(240.0),
            location: None,
            online: true,
            duration_weeks: Some(4),
            instructor: "Priya Raman".to_string(),
            topics: vec!["led".to_string(), "practicals".to_string()],
            rating: Some(4.7),
            created_at: seed_date(2026, 3, 7),
        },
        CourseListing {
            id: 3,
            user_id: Some(102),
            title: "The Feature Edit".to_string(),
            category: "editing".to_string(),
            description: "Structure, pacing, and the assembly-to-lock workflow for long form."
                .to_string(),
            price: Some(420.0),
            location: None,
            online: true,
            duration_weeks: Some(8),
            instructor: "Marcus Webb".to_string(),
            topics: vec!["structure".to_string(), "pacing".to_string()],
            rating: Some(4.6),
            created_at: seed_date(2026, 1, 12),
        },
        CourseListing {
            id: 4,
            user_id: Some(101),
            title: "Pitch Deck Lab".to_string(),
            category: "producing".to_string(),
            description: "Write and design a deck that gets your project financed.".to_string(),
            price: Some(180.0),
            location: Some("New York, NY".to_string()),
            online: false,
            duration_weeks: Some(1),
            instructor: "Dana Cole".to_string(),
            topics: vec!["financing".to_string(), "packaging".to_string()],
            rating: None,
            created_at: seed_date(2025, 12, 2),
        },
        CourseListing {
            id: 5,
            user_id: Some(103),
            title: "Location Sound Bootcamp".to_string(),
            category: "sound".to_string(),
            description: "Hands-on booming, mixing, and timecode over one weekend.".to_string(),
            price: None,
            location: Some("Chicago, IL".to_string()),
            online: false,
            duration_weeks: Some(1),
            instructor: "Dana Whitfield".to_string(),
            topics: vec!["boom".to_string(), "timecode".to_string()],
            rating: Some(4.4),
            created_at: seed_date(2026, 6, 24),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_week_duration_is_rejected() {
        let payload = CreateCourseListing {
            title: "The Feature Edit".to_string(),
            category: "editing".to_string(),
            description: "Long-form editing".to_string(),
            price: Some(100.0),
            location: None,
            online: true,
            duration_weeks: Some(0),
            instructor: "Marcus Webb".to_string(),
            topics: vec![],
        };
        assert!(crate::validation::validate_payload(&payload).is_err());
    }

    #[test]
    fn online_seeds_have_no_location() {
        for course in seed_courses() {
            if course.online {
                assert!(course.location.is_none(), "course {} is online", course.id);
            }
        }
    }
}
