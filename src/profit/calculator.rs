//! Fee and profit arithmetic.

use super::models::{ProfitInput, ProfitOutput};
use super::score::{flip_score, FlipBadge};
use super::shipping::estimate_shipping;
use tracing::debug;

/// Computes fees, profit, margin and the flip verdict.
///
/// Inputs are clamped to non-negative values first, so this never fails.
pub fn compute_profit(input: &ProfitInput) -> ProfitOutput {
    let input = input.clamped();

    let shipping_cost = input
        .shipping_cost
        .unwrap_or_else(|| estimate_shipping(input.shipping_method, input.weight_lb));

    let platform_fee = input.sale_price * (input.platform_fee_pct / 100.0);
    let processing_fee =
        input.sale_price * (input.processing_pct / 100.0) + input.processing_fixed;
    let total_fees = platform_fee + processing_fee;
    let total_cost = input.cogs + shipping_cost + input.packaging_cost + total_fees;
    let profit = input.sale_price - total_cost;
    let margin_pct =
        if input.sale_price > 0.0 { profit / input.sale_price * 100.0 } else { 0.0 };

    let flip_score = flip_score(profit, margin_pct, input.sale_price);
    let flip_badge = FlipBadge::from_score(flip_score);

    debug!(
        "Profit {:.2} on {:.2} ({:.1}% margin), score {} {}",
        profit, input.sale_price, margin_pct, flip_score, flip_badge
    );

    ProfitOutput {
        shipping_cost,
        platform_fee,
        processing_fee,
        total_fees,
        total_cost,
        profit,
        margin_pct,
        flip_score,
        flip_badge,
    }
}
