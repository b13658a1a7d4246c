//! Data models for listing input and generated listing text.

use super::condition::Condition;
use super::platforms::Platform;
use serde::{Deserialize, Serialize};

/// Seller details appended to every description.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SellerProfile {
    /// City or area shown as the item location
    pub city: String,
    /// Local pickup arrangement
    pub pickup: String,
    /// Shipping coverage
    pub shipping: String,
    /// Handling time before dispatch
    pub handling_time: String,
    /// Returns policy
    pub returns: String,
}

impl Default for SellerProfile {
    fn default() -> Self {
        Self {
            city: String::new(),
            pickup: "Porch pickup / meetup".to_string(),
            shipping: "Ships within the US".to_string(),
            handling_time: "Same or next business day".to_string(),
            returns: "No returns (ask questions before buying)".to_string(),
        }
    }
}

/// Everything the seller typed into the listing form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ListingInput {
    pub platform: Platform,
    pub brand: String,
    pub item: String,
    /// Model or part number
    pub model: String,
    pub condition: Option<Condition>,
    pub category: Option<String>,
    /// Values below 1 are treated as 1
    pub quantity: u32,
    /// Key features, one per line
    pub features: Vec<String>,
    /// Notes and defects, one per line
    pub defects: Vec<String>,
    pub seller: SellerProfile,
    /// Append the condition's stock sentence to the notes
    pub use_condition_template: bool,
    /// Add the sold-as-is note for parts/repair items
    pub include_parts_repair_note: bool,
    /// Zero-based index of the title variant to build the description around.
    /// Missing or out of range picks the first variant.
    pub title_choice: Option<usize>,
}

impl Default for ListingInput {
    fn default() -> Self {
        Self {
            platform: Platform::Ebay,
            brand: String::new(),
            item: String::new(),
            model: String::new(),
            condition: None,
            category: None,
            quantity: 1,
            features: Vec::new(),
            defects: Vec::new(),
            seller: SellerProfile::default(),
            use_condition_template: true,
            include_parts_repair_note: true,
            title_choice: None,
        }
    }
}

impl ListingInput {
    /// Creates an input for the given platform with default seller details.
    pub fn new(platform: Platform) -> Self {
        Self { platform, ..Self::default() }
    }

    /// Replaces the features with the non-blank lines of `text`.
    pub fn with_feature_lines(mut self, text: &str) -> Self {
        self.features = split_lines(text);
        self
    }

    /// Replaces the defects with the non-blank lines of `text`.
    pub fn with_defect_lines(mut self, text: &str) -> Self {
        self.defects = split_lines(text);
        self
    }
}

/// A candidate title and the strategy that produced it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TitleVariant {
    pub label: String,
    pub text: String,
}

impl TitleVariant {
    pub fn new(label: impl Into<String>, text: impl Into<String>) -> Self {
        Self { label: label.into(), text: text.into() }
    }
}

/// Generated listing text, ready to copy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListingOutput {
    pub platform: Platform,
    /// Between one and six candidates, best first
    pub title_variants: Vec<TitleVariant>,
    pub chosen_title: String,
    pub description: String,
    pub features: Vec<String>,
    /// Defects after condition-template augmentation
    pub defects: Vec<String>,
    /// Empty unless the parts/repair note applies
    pub parts_repair_note: String,
}

impl ListingOutput {
    /// Returns the number of title candidates.
    pub fn variant_count(&self) -> usize {
        self.title_variants.len()
    }
}

/// Splits free text into trimmed lines, dropping blank ones.
pub fn split_lines(text: &str) -> Vec<String> {
    text.lines().map(str::trim).filter(|l| !l.is_empty()).map(String::from).collect()
}
