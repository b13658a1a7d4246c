//! Shipping cost estimates.
//!
//! A flat base plus a per-pound rate. This is a rough estimate for
//! comparing deals, not a carrier quote.

use crate::error::ParseError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Shipping service used for the estimate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum ShippingMethod {
    #[default]
    Ground,
    Priority,
    LocalPickup,
    Other,
}

impl ShippingMethod {
    /// Returns `(base, per_lb)` rates in dollars.
    pub fn rates(&self) -> (f64, f64) {
        match self {
            ShippingMethod::Ground => (6.50, 1.10),
            ShippingMethod::Priority => (9.50, 1.50),
            ShippingMethod::LocalPickup => (0.0, 0.0),
            ShippingMethod::Other => (7.50, 1.20),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ShippingMethod::Ground => "Ground (est.)",
            ShippingMethod::Priority => "Priority (est.)",
            ShippingMethod::LocalPickup => "Local pickup",
            ShippingMethod::Other => "Other (est.)",
        }
    }

    /// Returns all shipping methods.
    pub fn all() -> &'static [ShippingMethod] {
        &[
            ShippingMethod::Ground,
            ShippingMethod::Priority,
            ShippingMethod::LocalPickup,
            ShippingMethod::Other,
        ]
    }
}

impl fmt::Display for ShippingMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let code = match self {
            ShippingMethod::Ground => "ground",
            ShippingMethod::Priority => "priority",
            ShippingMethod::LocalPickup => "pickup",
            ShippingMethod::Other => "other",
        };
        write!(f, "{}", code)
    }
}

impl FromStr for ShippingMethod {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "ground" => Ok(ShippingMethod::Ground),
            "priority" => Ok(ShippingMethod::Priority),
            "pickup" | "local" | "local-pickup" | "local pickup" => Ok(ShippingMethod::LocalPickup),
            "other" => Ok(ShippingMethod::Other),
            _ => Err(ParseError::ShippingMethod(s.to_string())),
        }
    }
}

/// Estimates shipping for a parcel of `weight_lb` pounds. Negative weights count as zero.
pub fn estimate_shipping(method: ShippingMethod, weight_lb: f64) -> f64 {
    let weight = if weight_lb.is_finite() { weight_lb.max(0.0) } else { 0.0 };
    let (base, per_lb) = method.rates();
    base + per_lb * weight
}
