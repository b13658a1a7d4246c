//! Flip score heuristic and verdict badges.

use serde::{Deserialize, Serialize};
use std::fmt;

const BASELINE: f64 = 5.0;
const MIN_SCORE: f64 = 1.0;
const MAX_SCORE: f64 = 10.0;

/// Scores a deal from 1.0 to 10.0 (one decimal).
///
/// Each adjustment is independent; they all read the same three inputs.
pub fn flip_score(profit: f64, margin_pct: f64, sale_price: f64) -> f64 {
    let mut score = BASELINE;

    if profit >= 25.0 {
        score += 2.0;
    }
    if profit >= 50.0 {
        score += 3.0;
    }
    if margin_pct >= 40.0 {
        score += 2.0;
    }
    if margin_pct >= 60.0 {
        score += 3.0;
    }
    if profit < 10.0 {
        score -= 3.0;
    }
    if margin_pct < 20.0 {
        score -= 3.0;
    }
    if sale_price > 200.0 && profit < 20.0 {
        score -= 2.0;
    }

    let clamped = score.clamp(MIN_SCORE, MAX_SCORE);
    (clamped * 10.0).round() / 10.0
}

/// Qualitative verdict for a flip score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FlipBadge {
    BadFlip,
    Risky,
    GoodFlip,
    GreatFlip,
}

impl FlipBadge {
    /// Maps a score onto its badge. Upper bounds are inclusive.
    pub fn from_score(score: f64) -> Self {
        match score {
            s if s <= 3.0 => FlipBadge::BadFlip,
            s if s <= 6.0 => FlipBadge::Risky,
            s if s <= 8.0 => FlipBadge::GoodFlip,
            _ => FlipBadge::GreatFlip,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            FlipBadge::BadFlip => "Bad Flip",
            FlipBadge::Risky => "Risky",
            FlipBadge::GoodFlip => "Good Flip",
            FlipBadge::GreatFlip => "Great Flip",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            FlipBadge::BadFlip => "❌",
            FlipBadge::Risky => "⚠️",
            FlipBadge::GoodFlip => "✅",
            FlipBadge::GreatFlip => "🔥",
        }
    }
}

impl fmt::Display for FlipBadge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_baseline() {
        // profit in [10, 25), margin in [20, 40), cheap item
        assert_eq!(flip_score(15.0, 30.0, 50.0), 5.0);
    }

    #[test]
    fn test_all_bonuses_clamped_high() {
        assert_eq!(flip_score(100.0, 80.0, 125.0), 10.0);
    }

    #[test]
    fn test_all_penalties_clamped_low() {
        assert_eq!(flip_score(-50.0, -10.0, 500.0), 1.0);
    }

    #[test]
    fn test_individual_thresholds() {
        assert_eq!(flip_score(25.0, 30.0, 50.0), 7.0);
        assert_eq!(flip_score(50.0, 30.0, 100.0), 10.0);
        assert_eq!(flip_score(15.0, 40.0, 30.0), 7.0);
        assert_eq!(flip_score(15.0, 60.0, 25.0), 10.0);
        assert_eq!(flip_score(9.99, 30.0, 30.0), 2.0);
        assert_eq!(flip_score(15.0, 19.9, 80.0), 2.0);
    }

    #[test]
    fn test_expensive_thin_profit_penalty() {
        // 15 profit on 250: margin 6% (-3), expensive and thin (-2)
        assert_eq!(flip_score(15.0, 6.0, 250.0), 1.0);
        // Same deal at exactly 200 is not penalised for price
        assert_eq!(flip_score(15.0, 7.5, 200.0), 2.0);
    }

    #[test]
    fn test_score_always_in_range() {
        let values = [-1000.0, -10.0, 0.0, 9.0, 10.0, 24.0, 25.0, 49.0, 50.0, 1000.0];
        for &profit in &values {
            for &margin in &values {
                for &price in &[0.0, 50.0, 200.0, 201.0, 5000.0] {
                    let s = flip_score(profit, margin, price);
                    assert!((1.0..=10.0).contains(&s), "{} out of range", s);
                }
            }
        }
    }

    #[test]
    fn test_badge_boundaries() {
        assert_eq!(FlipBadge::from_score(1.0), FlipBadge::BadFlip);
        assert_eq!(FlipBadge::from_score(3.0), FlipBadge::BadFlip);
        assert_eq!(FlipBadge::from_score(3.1), FlipBadge::Risky);
        assert_eq!(FlipBadge::from_score(6.0), FlipBadge::Risky);
        assert_eq!(FlipBadge::from_score(6.1), FlipBadge::GoodFlip);
        assert_eq!(FlipBadge::from_score(8.0), FlipBadge::GoodFlip);
        assert_eq!(FlipBadge::from_score(8.1), FlipBadge::GreatFlip);
        assert_eq!(FlipBadge::from_score(10.0), FlipBadge::GreatFlip);
    }

    #[test]
    fn test_badge_labels() {
        assert_eq!(FlipBadge::GreatFlip.to_string(), "Great Flip");
        assert_eq!(FlipBadge::BadFlip.label(), "Bad Flip");
        let json = serde_json::to_string(&FlipBadge::GoodFlip).unwrap();
        assert_eq!(json, "\"good-flip\"");
    }
}
