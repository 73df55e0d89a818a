//! Aggregate stats shown on the admin dashboards.

use std::collections::HashMap;

use serde::Serialize;

use crate::listing::Listing;

/// Listing count for a single category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryCount {
    pub category: String,
    pub count: i64,
}

/// Aggregate block for a set of listings (typically one owner's records in
/// one vertical).
#[derive(Debug, Clone, Serialize)]
pub struct ListingStats {
    pub total: i64,
    /// Mean over records that carry a price; `None` when none do.
    pub average_price: Option<f64>,
    /// Mean over rated records; `None` when none are rated.
    pub average_rating: Option<f64>,
    /// Category breakdown, busiest first, ties alphabetical.
    pub by_category: Vec<CategoryCount>,
}

impl ListingStats {
    pub fn compute<T: Listing>(items: &[T]) -> Self {
        let total = items.len() as i64;

        let average_price = mean(items.iter().filter_map(|i| i.price()));
        let average_rating = mean(items.iter().filter_map(|i| i.rating()));

        let mut counts: HashMap<String, i64> = HashMap::new();
        for item in items {
            *counts.entry(item.category().to_string()).or_insert(0) += 1;
        }
        let mut by_category: Vec<CategoryCount> = counts
            .into_iter()
            .map(|(category, count)| CategoryCount { category, count })
            .collect();
        by_category.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.category.cmp(&b.category)));

        ListingStats {
            total,
            average_price,
            average_rating,
            by_category,
        }
    }
}

fn mean(values: impl Iterator<Item = f64>) -> Option<f64> {
    let collected: Vec<f64> = values.collect();
    if collected.is_empty() {
        return None;
    }
    Some(collected.iter().sum::<f64>() / collected.len() as f64)
}
