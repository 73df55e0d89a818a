//! Crew and cast talent profiles.

use serde::{Deserialize, Serialize};
use validator::Validate;

use super::{haystack, seed_date};
use crate::listing::Listing;
use crate::types::{ListingId, Timestamp, UserId};
use crate::validation::non_blank;

/// A bookable crew member or performer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TalentProfile {
    pub id: ListingId,
    pub user_id: Option<UserId>,
    pub name: String,
    /// Discipline: the category the browse page groups by.
    pub category: String,
    pub bio: String,
    #[serde(default)]
    pub skills: Vec<String>,
    pub day_rate: Option<f64>,
    pub location: Option<String>,
    pub years_experience: Option<i32>,
    pub reel_url: Option<String>,
    #[serde(default = "default_available")]
    pub available: bool,
    pub rating: Option<f64>,
    pub created_at: Timestamp,
}

fn default_available() -> bool {
    true
}

impl Listing for TalentProfile {
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
        self.day_rate
    }
    fn rating(&self) -> Option<f64> {
        self.rating
    }
    fn created_at(&self) -> Timestamp {
        self.created_at
    }
    fn search_haystack(&self) -> String {
        let skills = self.skills.join(" ");
        haystack(&[
            &self.name,
            &self.category,
            &self.bio,
            self.location.as_deref().unwrap_or(""),
            &skills,
        ])
    }
}

/// Payload for publishing a talent profile.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateTalentProfile {
    #[validate(custom(function = non_blank, message = "must not be blank"))]
    pub name: String,
    #[validate(custom(function = non_blank, message = "must not be blank"))]
    pub category: String,
    #[validate(custom(function = non_blank, message = "must not be blank"))]
    pub bio: String,
    #[serde(default)]
    pub skills: Vec<String>,
    #[validate(range(min = 0.0, message = "must not be negative"))]
    pub day_rate: Option<f64>,
    pub location: Option<String>,
    #[validate(range(min = 0, message = "must not be negative"))]
    pub years_experience: Option<i32>,
    pub reel_url: Option<String>,
    #[serde(default = "default_available")]
    pub available: bool,
}

impl CreateTalentProfile {
    pub fn into_listing(self, id: ListingId, user_id: UserId, created_at: Timestamp) -> TalentProfile {
        TalentProfile {
            id,
            user_id: Some(user_id),
            name: self.name,
            category: self.category,
            bio: self.bio,
            skills: self.skills,
            day_rate: self.day_rate,
            location: self.location,
            years_experience: self.years_experience,
            reel_url: self.reel_url,
            available: self.available,
            rating: None,
            created_at,
        }
    }
}

pub fn categories() -> &'static [&'static str] {
    &[
        "director",
        "cinematographer",
        "editor",
        "gaffer",
        "sound-mixer",
        "production-designer",
        "actor",
        "colorist",
    ]
}

pub fn seed_talent() -> Vec<TalentProfile> {
    vec![
        TalentProfile {
            id: 1,
            user_id: Some(103),
            name: "Priya Raman".to_string(),
            category: "cinematographer".to_string(),
            bio: "Narrative features and high-end commercials. Owner-operator, Alexa 35."
                .to_string(),
            skills: vec![
                "steadicam".to_string(),
                "large-format".to_string(),
                "low-light".to_string(),
            ],
            day_rate: Some(1200.0),
            location: Some("Los Angeles, CA".to_string()),
            years_experience: Some(12),
            reel_url: Some("https://vimeo.com/priyaraman/reel".to_string()),
            available: true,
            rating: Some(4.9),
            created_at: seed_date(2026, 5, 2),
        },
        TalentProfile {
            id: 2,
            user_id: Some(101),
            name: "Marcus Webb".to_string(),
            category: "editor".to_string(),
            bio: "Documentary editor, two festival features. Avid and Resolve.".to_string(),
            skills: vec!["avid".to_string(), "resolve".to_string(), "story".to_string()],
            day_rate: Some(650.0),
            location: Some("Brooklyn, NY".to_string()),
            years_experience: Some(9),
            reel_url: None,
            available: true,
            rating: Some(4.6),
            created_at: seed_date(2026, 3, 15),
        },
        TalentProfile {
            id: 3,
            user_id: Some(102),
            name: "Sofia Delgado".to_string(),
            category: "gaffer".to_string(),
            bio: "Gaffer with a 3-ton package. Music videos, indies, commercials.".to_string(),
            skills: vec!["3-ton".to_string(), "rigging".to_string()],
            day_rate: Some(750.0),
            location: Some("Atlanta, GA".to_string()),
            years_experience: Some(14),
            reel_url: None,
            available: false,
            rating: Some(4.8),
            created_at: seed_date(2026, 1, 29),
        },
        TalentProfile {
            id: 4,
            user_id: Some(103),
            name: "Dana Whitfield".to_string(),
            category: "sound-mixer".to_string(),
            bio: "Location sound, 8-channel bag, timecode boxes for multicam.".to_string(),
            skills: vec!["boom".to_string(), "timecode".to_string(), "lavs".to_string()],
            day_rate: Some(550.0),
            location: Some("Chicago, IL".to_string()),
            years_experience: Some(7),
            reel_url: None,
            available: true,
            rating: None,
            created_at: seed_date(2025, 10, 8),
        },
        TalentProfile {
            id: 5,
            user_id: Some(101),
            name: "Theo Okafor".to_string(),
            category: "colorist".to_string(),
            bio: "Senior colorist, HDR delivery, remote sessions available.".to_string(),
            skills: vec!["resolve".to_string(), "hdr".to_string()],
            day_rate: Some(900.0),
            location: Some("Remote".to_string()),
            years_experience: Some(11),
            reel_url: Some("https://theookafor.example/work".to_string()),
            available: true,
            rating: Some(4.7),
            created_at: seed_date(2026, 7, 1),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::{process_filtered_data, ListingFilter, Page, SortKey};

    #[test]
    fn search_covers_skills_and_bio() {
        let filter = ListingFilter {
            search: Some("steadicam".into()),
            ..Default::default()
        };
        let out = process_filtered_data(seed_talent(), &filter, SortKey::Newest, Page::default());
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].name, "Priya Raman");
    }

    #[test]
    fn seeds_have_unique_ids() {
        let seeds = seed_talent();
        let mut ids: Vec<ListingId> = seeds.iter().map(|t| t.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), seeds.len());
    }
}
