//! Listing builder: title variants and platform descriptions.

pub mod checklist;
pub mod condition;
pub mod description;
pub mod models;
pub mod platforms;
pub mod title;

pub use checklist::{photo_checklist, CategoryBucket, PhotoChecklist};
pub use condition::Condition;
pub use models::{split_lines, ListingInput, ListingOutput, SellerProfile, TitleVariant};
pub use platforms::Platform;

use description::{render_description, DescriptionFields};
use title::{build_title_variants, FALLBACK_TITLE};
use tracing::debug;

/// Protective note added to parts/repair listings.
pub const PARTS_REPAIR_NOTE: &str = "**Parts/repair note:** Sold as-is for parts/repair. \
     May have issues not listed. Please ask questions before purchase.";

/// Builds title candidates and the platform description for one item.
///
/// Never fails: blank or odd input degrades to placeholder text.
pub fn build_listing(input: &ListingInput) -> ListingOutput {
    let features: Vec<String> =
        input.features.iter().map(|f| f.trim()).filter(|f| !f.is_empty()).map(String::from).collect();
    let mut defects: Vec<String> =
        input.defects.iter().map(|d| d.trim()).filter(|d| !d.is_empty()).map(String::from).collect();

    if input.use_condition_template {
        if let Some(condition) = input.condition {
            let sentence = condition.template();
            if !defects.iter().any(|d| d == sentence) {
                defects.push(sentence.to_string());
            }
        }
    }

    let title_variants = build_title_variants(
        input.platform,
        &input.brand,
        &input.item,
        &input.model,
        input.condition,
        &features,
    );
    let chosen_title = input
        .title_choice
        .and_then(|i| title_variants.get(i))
        .or_else(|| title_variants.first())
        .map(|v| v.text.clone())
        .unwrap_or_else(|| FALLBACK_TITLE.to_string());

    let parts_repair_note = match input.condition {
        Some(c) if c.is_parts_repair() && input.include_parts_repair_note => {
            PARTS_REPAIR_NOTE.to_string()
        }
        _ => String::new(),
    };

    let category = input.category.as_deref().map(str::trim).filter(|c| !c.is_empty());

    let description = render_description(
        input.platform,
        &DescriptionFields {
            title: &chosen_title,
            condition: input.condition,
            category,
            quantity: input.quantity.max(1),
            features: &features,
            defects: &defects,
            seller: &input.seller,
            parts_repair_note: &parts_repair_note,
        },
    );

    debug!(
        "Built {} listing: {} chars, {} features, {} notes",
        input.platform.name(),
        description.chars().count(),
        features.len(),
        defects.len()
    );

    ListingOutput {
        platform: input.platform,
        title_variants,
        chosen_title,
        description,
        features,
        defects,
        parts_repair_note,
    }
}
