//! Profit calculator: fees, margin and flip score.

pub mod calculator;
pub mod models;
pub mod presets;
pub mod score;
pub mod shipping;

pub use calculator::compute_profit;
pub use models::{ProfitInput, ProfitOutput};
pub use presets::{FeePreset, FeeSchedule};
pub use score::{flip_score, FlipBadge};
pub use shipping::{estimate_shipping, ShippingMethod};
