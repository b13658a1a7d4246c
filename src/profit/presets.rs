//! Quick fee presets for common selling channels.

use super::models::ProfitInput;
use super::shipping::ShippingMethod;
use crate::error::ParseError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Fee and shipping defaults for a selling channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum FeePreset {
    #[default]
    Ebay,
    FacebookMarketplace,
    LocalPickup,
    Custom,
}

/// The numbers a preset fills in.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FeeSchedule {
    pub platform_fee_pct: f64,
    pub processing_pct: f64,
    pub processing_fixed: f64,
    pub shipping_method: ShippingMethod,
}

impl FeePreset {
    pub fn label(&self) -> &'static str {
        match self {
            FeePreset::Ebay => "eBay (typical)",
            FeePreset::FacebookMarketplace => "Facebook Marketplace (no platform fee)",
            FeePreset::LocalPickup => "Local pickup (no shipping)",
            FeePreset::Custom => "Custom",
        }
    }

    /// Returns the fee schedule. `Custom` starts from the eBay numbers.
    pub fn schedule(&self) -> FeeSchedule {
        match self {
            FeePreset::FacebookMarketplace => FeeSchedule {
                platform_fee_pct: 0.0,
                processing_pct: 2.9,
                processing_fixed: 0.30,
                shipping_method: ShippingMethod::LocalPickup,
            },
            FeePreset::LocalPickup => FeeSchedule {
                platform_fee_pct: 13.25,
                processing_pct: 2.9,
                processing_fixed: 0.30,
                shipping_method: ShippingMethod::LocalPickup,
            },
            FeePreset::Ebay | FeePreset::Custom => FeeSchedule {
                platform_fee_pct: 13.25,
                processing_pct: 2.9,
                processing_fixed: 0.30,
                shipping_method: ShippingMethod::Ground,
            },
        }
    }

    /// Overwrites the fee fields and shipping method of `input`.
    pub fn apply(&self, input: &mut ProfitInput) {
        let s = self.schedule();
        input.platform_fee_pct = s.platform_fee_pct;
        input.processing_pct = s.processing_pct;
        input.processing_fixed = s.processing_fixed;
        input.shipping_method = s.shipping_method;
    }

    /// Returns all presets.
    pub fn all() -> &'static [FeePreset] {
        &[FeePreset::Ebay, FeePreset::FacebookMarketplace, FeePreset::LocalPickup, FeePreset::Custom]
    }
}

impl fmt::Display for FeePreset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let code = match self {
            FeePreset::Ebay => "ebay",
            FeePreset::FacebookMarketplace => "facebook",
            FeePreset::LocalPickup => "local-pickup",
            FeePreset::Custom => "custom",
        };
        write!(f, "{}", code)
    }
}

impl FromStr for FeePreset {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "ebay" => Ok(FeePreset::Ebay),
            "facebook" | "fb" | "facebook-marketplace" => Ok(FeePreset::FacebookMarketplace),
            "local-pickup" | "local" | "pickup" => Ok(FeePreset::LocalPickup),
            "custom" => Ok(FeePreset::Custom),
            _ => Err(ParseError::Preset(s.to_string())),
        }
    }
}
