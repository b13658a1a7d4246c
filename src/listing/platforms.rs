//! Marketplace platforms and their title budgets.

use crate::error::ParseError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Supported marketplaces. `Generic` renders the plain fallback description.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    #[default]
    Ebay,
    #[serde(alias = "facebook")]
    FacebookMarketplace,
    Mercari,
    OfferUp,
    Generic,
}

impl Platform {
    /// Returns the human-readable marketplace name.
    pub fn name(&self) -> &'static str {
        match self {
            Platform::Ebay => "eBay",
            Platform::FacebookMarketplace => "Facebook Marketplace",
            Platform::Mercari => "Mercari",
            Platform::OfferUp => "OfferUp",
            Platform::Generic => "Generic",
        }
    }

    /// Character budget for full-length title variants.
    pub fn title_limit(&self) -> usize {
        match self {
            Platform::Ebay => 80,
            _ => 90,
        }
    }

    /// Placeholder shown for blank description fields.
    pub fn placeholder(&self) -> &'static str {
        match self {
            Platform::Ebay => "—",
            _ => "-",
        }
    }

    /// Returns all supported platforms.
    pub fn all() -> &'static [Platform] {
        &[
            Platform::Ebay,
            Platform::FacebookMarketplace,
            Platform::Mercari,
            Platform::OfferUp,
            Platform::Generic,
        ]
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let code = match self {
            Platform::Ebay => "ebay",
            Platform::FacebookMarketplace => "facebookmarketplace",
            Platform::Mercari => "mercari",
            Platform::OfferUp => "offerup",
            Platform::Generic => "generic",
        };
        write!(f, "{}", code)
    }
}

impl FromStr for Platform {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "ebay" => Ok(Platform::Ebay),
            "facebook" | "fb" | "facebook marketplace" | "facebookmarketplace"
            | "facebook-marketplace" => Ok(Platform::FacebookMarketplace),
            "mercari" => Ok(Platform::Mercari),
            "offerup" | "offer up" => Ok(Platform::OfferUp),
            "generic" | "other" => Ok(Platform::Generic),
            _ => Err(ParseError::Platform(s.to_string())),
        }
    }
}
