//! resale-kit - Listing writer and flip calculator for secondhand resellers
//!
//! Builds platform-tuned titles and descriptions for eBay, Facebook Marketplace,
//! Mercari and OfferUp, and checks whether a flip is worth it after fees and shipping.

pub mod commands;
pub mod config;
pub mod error;
pub mod format;
pub mod listing;
pub mod profit;

pub use config::{Config, OutputFormat};
pub use error::ParseError;
pub use listing::{build_listing, Condition, ListingInput, ListingOutput, Platform, SellerProfile};
pub use profit::{
    compute_profit, FeePreset, FlipBadge, ProfitInput, ProfitOutput, ShippingMethod,
};
