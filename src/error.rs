//! Parse errors for the closed value sets accepted on the command line and in config.

use thiserror::Error;

/// Returned when a user-supplied name does not map onto one of the known values.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error(
        "Unknown platform '{0}'. Valid platforms: ebay, facebook, mercari, offerup, generic"
    )]
    Platform(String),

    #[error(
        "Unknown condition '{0}'. Valid conditions: new, open-box, like-new, good, fair, poor, parts"
    )]
    Condition(String),

    #[error("Unknown shipping method '{0}'. Valid methods: ground, priority, pickup, other")]
    ShippingMethod(String),

    #[error("Unknown preset '{0}'. Valid presets: ebay, facebook, local-pickup, custom")]
    Preset(String),

    #[error("Unknown format '{0}'. Use: text, json, markdown, csv")]
    OutputFormat(String),
}
