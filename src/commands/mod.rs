//! CLI command implementations.

pub mod listing;
pub mod profit;

pub use listing::{ListingArgs, ListingCommand};
pub use profit::{ProfitArgs, ProfitCommand};
