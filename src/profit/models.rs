//! Data models for profit inputs and results.

use super::score::FlipBadge;
use super::shipping::ShippingMethod;
use serde::{Deserialize, Serialize};

/// Sale, cost and fee assumptions for one deal. Amounts are dollars, rates are percents.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProfitInput {
    pub sale_price: f64,
    /// Cost of goods sold
    pub cogs: f64,
    pub packaging_cost: f64,
    /// Manual shipping cost; when absent shipping is estimated from method and weight
    pub shipping_cost: Option<f64>,
    pub shipping_method: ShippingMethod,
    pub weight_lb: f64,
    pub platform_fee_pct: f64,
    pub processing_pct: f64,
    pub processing_fixed: f64,
}

impl Default for ProfitInput {
    fn default() -> Self {
        Self {
            sale_price: 0.0,
            cogs: 0.0,
            packaging_cost: 0.0,
            shipping_cost: None,
            shipping_method: ShippingMethod::Ground,
            weight_lb: 0.0,
            platform_fee_pct: 0.0,
            processing_pct: 0.0,
            processing_fixed: 0.0,
        }
    }
}

impl ProfitInput {
    /// Returns a copy with every amount clamped to a finite, non-negative value.
    pub fn clamped(&self) -> Self {
        Self {
            sale_price: non_negative(self.sale_price),
            cogs: non_negative(self.cogs),
            packaging_cost: non_negative(self.packaging_cost),
            shipping_cost: self.shipping_cost.map(non_negative),
            shipping_method: self.shipping_method,
            weight_lb: non_negative(self.weight_lb),
            platform_fee_pct: non_negative(self.platform_fee_pct),
            processing_pct: non_negative(self.processing_pct),
            processing_fixed: non_negative(self.processing_fixed),
        }
    }
}

/// Clamps to `[0, +inf)`; NaN and infinities become 0.
pub(crate) fn non_negative(v: f64) -> f64 {
    if v.is_finite() {
        v.max(0.0)
    } else {
        0.0
    }
}

/// Fee breakdown and verdict for one deal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfitOutput {
    /// Shipping actually used (manual or estimated)
    pub shipping_cost: f64,
    pub platform_fee: f64,
    pub processing_fee: f64,
    pub total_fees: f64,
    /// Everything spent: goods, shipping, packaging and fees
    pub total_cost: f64,
    pub profit: f64,
    /// Profit as a percent of sale price; 0 when the price is 0
    pub margin_pct: f64,
    /// 1.0 to 10.0
    pub flip_score: f64,
    pub flip_badge: FlipBadge,
}

impl ProfitOutput {
    pub fn is_profitable(&self) -> bool {
        self.profit > 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamped_removes_negatives_and_nan() {
        let input = ProfitInput {
            sale_price: -5.0,
            cogs: f64::NAN,
            packaging_cost: 1.5,
            shipping_cost: Some(-3.0),
            weight_lb: f64::INFINITY,
            platform_fee_pct: -13.25,
            ..ProfitInput::default()
        };

        let c = input.clamped();
        assert_eq!(c.sale_price, 0.0);
        assert_eq!(c.cogs, 0.0);
        assert_eq!(c.packaging_cost, 1.5);
        assert_eq!(c.shipping_cost, Some(0.0));
        assert_eq!(c.weight_lb, 0.0);
        assert_eq!(c.platform_fee_pct, 0.0);
    }

    #[test]
    fn test_profit_input_from_partial_toml() {
        let input: ProfitInput = toml::from_str(
            r#"
            sale_price = 79.99
            cogs = 25.0
            shipping_method = "priority"
            weight_lb = 3.0
            "#,
        )
        .unwrap();

        assert_eq!(input.sale_price, 79.99);
        assert_eq!(input.shipping_method, ShippingMethod::Priority);
        assert!(input.shipping_cost.is_none());
        assert_eq!(input.processing_fixed, 0.0);
    }
}
