//! Film-finance investor profiles.
//!
//! The price facet maps to the minimum check size, so "price: low to high"
//! surfaces the most accessible investors first.

use serde::{Deserialize, Serialize};
use validator::Validate;

use super::{haystack, seed_date};
use crate::listing::Listing;
use crate::types::{ListingId, Timestamp, UserId};
use crate::validation::non_blank;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InvestorProfile {
    pub id: ListingId,
    pub user_id: Option<UserId>,
    pub name: String,
    /// Investment focus, shown as the category facet.
    pub category: String,
    pub bio: String,
    pub min_investment: Option<f64>,
    pub location: Option<String>,
    #[serde(default)]
    pub stages: Vec<String>,
    pub portfolio_count: Option<i32>,
    pub rating: Option<f64>,
    pub created_at: Timestamp,
}

impl Listing for InvestorProfile {
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
        self.min_investment
    }
    fn rating(&self) -> Option<f64> {
        self.rating
    }
    fn created_at(&self) -> Timestamp {
        self.created_at
    }
    fn search_haystack(&self) -> String {
        let stages = self.stages.join(" ");
        haystack(&[
            &self.name,
            &self.category,
            &self.bio,
            self.location.as_deref().unwrap_or(""),
            &stages,
        ])
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateInvestorProfile {
    #[validate(custom(function = non_blank, message = "must not be blank"))]
    pub name: String,
    #[validate(custom(function = non_blank, message = "must not be blank"))]
    pub category: String,
    #[validate(custom(function = non_blank, message = "must not be blank"))]
    pub bio: String,
    #[validate(range(min = 0.0, message = "must not be negative"))]
    pub min_investment: Option<f64>,
    pub location: Option<String>,
    #[serde(default)]
    pub stages: Vec<String>,
    #[validate(range(min = 0, message = "must not be negative"))]
    pub portfolio_count: Option<i32>,
}

impl CreateInvestorProfile {
    pub fn into_listing(self, id: ListingId, user_id: UserId, created_at: Timestamp) -> InvestorProfile {
        InvestorProfile {
            id,
            user_id: Some(user_id),
            name: self.name,
            category: self.category,
            bio: self.bio,
            min_investment: self.min_investment,
            location: self.location,
            stages: self.stages,
            portfolio_count: self.portfolio_count,
            rating: None,
            created_at,
        }
    }
}

pub fn categories() -> &'static [&'static str] {
    &[
        "equity",
        "gap-financing",
        "tax-credit",
        "grants",
        "crowdfunding",
        "slate",
    ]
}

pub fn seed_investors() -> Vec<InvestorProfile> {
    vec![
        InvestorProfile {
            id: 1,
            user_id: Some(101),
            name: "Lantern Hill Capital".to_string(),
            category: "equity".to_string(),
            bio: "Equity checks for elevated genre features, 500k to 3M budgets.".to_string(),
            min_investment: Some(100_000.0),
            location: Some("Los Angeles, CA".to_string()),
            stages: vec!["packaged".to_string(), "pre-production".to_string()],
            portfolio_count: Some(14),
            rating: Some(4.6),
            created_at: seed_date(2026, 2, 17),
        },
        InvestorProfile {
            id: 2,
            user_id: Some(103),
            name: "Brightwater Media Fund".to_string(),
            category: "gap-financing".to_string(),
            bio: "Gap and bridge loans against presales and tax credits.".to_string(),
            min_investment: Some(250_000.0),
            location: Some("New York, NY".to_string()),
            stages: vec!["financed".to_string()],
            portfolio_count: Some(31),
            rating: Some(4.8),
            created_at: seed_date(2026, 4, 9),
        },
        InvestorProfile {
            id: 3,
            user_id: Some(102),
            name: "Georgia Screen Credits".to_string(),
            category: "tax-credit".to_string(),
            bio: "Tax-credit brokerage and lending for productions shooting in Georgia."
                .to_string(),
            min_investment: Some(50_000.0),
            location: Some("Atlanta, GA".to_string()),
            stages: vec!["production".to_string(), "post".to_string()],
            portfolio_count: Some(52),
            rating: Some(4.7),
            created_at: seed_date(2025, 12, 15),
        },
        InvestorProfile {
            id: 4,
            user_id: Some(101),
            name: "First Cut Collective".to_string(),
            category: "crowdfunding".to_string(),
            bio: "Community-backed micro-budgets. We run the campaign with you.".to_string(),
            min_investment: Some(5_000.0),
            location: Some("Remote".to_string()),
            stages: vec!["development".to_string()],
            portfolio_count: Some(8),
            rating: None,
            created_at: seed_date(2026, 6, 1),
        },
        InvestorProfile {
            id: 5,
            user_id: Some(103),
            name: "Northpoint Slate Partners".to_string(),
            category: "slate".to_string(),
            bio: "Multi-picture slate deals with established producers.".to_string(),
            min_investment: None,
            location: Some("Chicago, IL".to_string()),
            stages: vec!["packaged".to_string()],
            portfolio_count: Some(23),
            rating: Some(4.9),
            created_at: seed_date(2026, 7, 8),
        },
    ]
}
