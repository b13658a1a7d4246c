//! Integration tests for listing generation through the public API.

use resale_kit::listing::{build_listing, photo_checklist, CategoryBucket};
use resale_kit::{Condition, ListingInput, Platform};
use std::collections::HashSet;

fn macbook(platform: Platform) -> ListingInput {
    ListingInput {
        brand: "Apple".to_string(),
        item: "MacBook Pro".to_string(),
        model: "A1990".to_string(),
        condition: Some(Condition::UsedGood),
        ..ListingInput::new(platform)
    }
    .with_feature_lines("16GB RAM\n512GB SSD")
}

fn long_input(platform: Platform) -> ListingInput {
    ListingInput {
        brand: "Hewlett Packard Enterprise Professional Series".to_string(),
        item: "Ultra Wide Curved Gaming Monitor With Speakers".to_string(),
        model: "XG-27Q-ProMax-2024-Edition-Black".to_string(),
        condition: Some(Condition::UsedLikeNew),
        ..ListingInput::new(platform)
    }
    .with_feature_lines("27 inch IPS panel\n165Hz refresh rate\nHeight adjustable stand")
}

#[test]
fn test_ebay_macbook_listing() {
    let output = build_listing(&macbook(Platform::Ebay));

    assert!(output.chosen_title.starts_with("Apple MacBook Pro A1990"));
    assert!(output.chosen_title.chars().count() <= 80);
    assert_eq!(output.chosen_title, output.title_variants[0].text);

    assert!(output.description.starts_with("## Apple MacBook Pro A1990"));
    assert!(output.description.contains("- 16GB RAM"));
    assert!(output.description.contains("Normal wear from use"));
    assert!(output.parts_repair_note.is_empty());
}

#[test]
fn test_parts_repair_note_toggle() {
    let mut input = ListingInput {
        brand: "Sony".to_string(),
        item: "PS4".to_string(),
        condition: Some(Condition::ForPartsRepair),
        ..ListingInput::new(Platform::FacebookMarketplace)
    };

    let output = build_listing(&input);
    assert!(output.description.contains("May have issues not listed"));
    assert!(!output.parts_repair_note.is_empty());
    assert!(output.title_variants.iter().any(|v| v.text.contains("For Parts/Repair")));

    input.include_parts_repair_note = false;
    let output = build_listing(&input);
    assert!(!output.description.contains("May have issues not listed"));
    assert!(output.parts_repair_note.is_empty());
}

#[test]
fn test_empty_input_falls_back() {
    for platform in Platform::all() {
        let output = build_listing(&ListingInput::new(*platform));
        assert_eq!(output.title_variants.len(), 1);
        assert_eq!(output.chosen_title, "Item for sale");
        assert!(!output.description.is_empty());
    }
}

#[test]
fn test_titles_respect_platform_limits() {
    for platform in Platform::all() {
        let output = build_listing(&long_input(*platform));
        let limit = if *platform == Platform::Ebay { 80 } else { 90 };

        assert!(!output.title_variants.is_empty());
        for variant in &output.title_variants {
            assert!(
                variant.text.chars().count() <= limit,
                "{} title over {}: {}",
                platform.name(),
                limit,
                variant.text
            );
        }
    }
}

#[test]
fn test_titles_unique_ignoring_case() {
    let input = ListingInput {
        brand: "NIKE".to_string(),
        item: "nike".to_string(),
        ..ListingInput::new(Platform::Mercari)
    };

    let output = build_listing(&input);
    let lowered: HashSet<String> =
        output.title_variants.iter().map(|v| v.text.to_lowercase()).collect();
    assert_eq!(lowered.len(), output.title_variants.len());
    assert!(output.title_variants.len() <= 6);
}

#[test]
fn test_condition_template_not_duplicated() {
    let input = ListingInput {
        condition: Some(Condition::New),
        defects: vec!["Brand new, unused. Ships fast.".to_string()],
        ..macbook(Platform::OfferUp)
    };

    let output = build_listing(&input);
    let count = output.defects.iter().filter(|d| *d == "Brand new, unused. Ships fast.").count();
    assert_eq!(count, 1);
}

#[test]
fn test_photo_checklist_lookup() {
    assert_eq!(photo_checklist("Gaming Laptop").bucket, CategoryBucket::Electronics);
    assert_eq!(photo_checklist("").bucket, CategoryBucket::Other);
    assert!(!photo_checklist("Running shoes").shots.is_empty());
}
