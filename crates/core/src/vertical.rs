//! The eight marketplace verticals and their REST resource names.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// A marketplace vertical. Each one maps to a backend REST resource and a
/// seed catalog in [`crate::catalog`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Vertical {
    Asset,
    Studio,
    Talent,
    Legal,
    Education,
    Ticket,
    Investor,
    ProductService,
}

impl Vertical {
    /// Display/iteration order used by cross-vertical views.
    pub const ALL: [Vertical; 8] = [
        Vertical::Asset,
        Vertical::Studio,
        Vertical::Talent,
        Vertical::Legal,
        Vertical::Education,
        Vertical::Ticket,
        Vertical::Investor,
        Vertical::ProductService,
    ];

    /// The backend resource path segment for this vertical.
    ///
    /// These are wire-level names and must not change: the external backend
    /// serves `GET /{resource}` and `POST /{resource}` for each of them.
    pub fn resource(&self) -> &'static str {
        match self {
            Vertical::Asset => "assets",
            Vertical::Studio => "studios",
            Vertical::Talent => "talents",
            Vertical::Legal => "legal",
            Vertical::Education => "education",
            Vertical::Ticket => "tickets",
            Vertical::Investor => "investors",
            Vertical::ProductService => "product-services",
        }
    }

    /// Stable singular name, used in logs and serialized overview rows.
    pub fn as_str(&self) -> &'static str {
        match self {
            Vertical::Asset => "asset",
            Vertical::Studio => "studio",
            Vertical::Talent => "talent",
            Vertical::Legal => "legal",
            Vertical::Education => "education",
            Vertical::Ticket => "ticket",
            Vertical::Investor => "investor",
            Vertical::ProductService => "product-service",
        }
    }

    /// Human-readable entity name for not-found errors.
    pub fn entity_name(&self) -> &'static str {
        match self {
            Vertical::Asset => "Asset",
            Vertical::Studio => "Studio",
            Vertical::Talent => "Talent profile",
            Vertical::Legal => "Legal service",
            Vertical::Education => "Course",
            Vertical::Ticket => "Ticket listing",
            Vertical::Investor => "Investor profile",
            Vertical::ProductService => "Product or service",
        }
    }

    /// Parse a resource path segment (`assets`, `product-services`, ...).
    pub fn from_resource(segment: &str) -> Option<Vertical> {
        Vertical::ALL.into_iter().find(|v| v.resource() == segment)
    }
}

impl fmt::Display for Vertical {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Vertical {
    type Err = String;

    /// Accepts either the singular name or the resource segment.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Vertical::ALL
            .into_iter()
            .find(|v| v.as_str() == s)
            .or_else(|| Vertical::from_resource(s))
            .ok_or_else(|| format!("unknown vertical: {s}"))
    }
}
