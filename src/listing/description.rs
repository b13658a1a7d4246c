//! Per-platform description templates.
//!
//! Every platform renders the same fields; only headings, bullets and
//! emphasis differ. eBay accepts markdown, the others are plain text.

use super::condition::Condition;
use super::models::SellerProfile;
use super::platforms::Platform;

/// Fields rendered into a description.
#[derive(Debug, Clone)]
pub struct DescriptionFields<'a> {
    pub title: &'a str,
    pub condition: Option<Condition>,
    pub category: Option<&'a str>,
    pub quantity: u32,
    pub features: &'a [String],
    pub defects: &'a [String],
    pub seller: &'a SellerProfile,
    /// Markdown-emphasised note; empty when not applicable
    pub parts_repair_note: &'a str,
}

/// Renders the description for `platform`.
pub fn render_description(platform: Platform, fields: &DescriptionFields<'_>) -> String {
    let text = match platform {
        Platform::Ebay => ebay(fields),
        Platform::FacebookMarketplace => facebook(fields),
        Platform::Mercari => mercari(fields),
        Platform::OfferUp => offerup(fields),
        Platform::Generic => generic(fields),
    };
    text.trim().to_string()
}

fn or_dash<'a>(value: &'a str, platform: Platform) -> &'a str {
    if value.trim().is_empty() {
        platform.placeholder()
    } else {
        value
    }
}

fn condition_label(fields: &DescriptionFields<'_>, platform: Platform) -> &'static str {
    fields.condition.map(|c| c.label()).unwrap_or(platform.placeholder())
}

/// Pushes a heading, the bulleted items and a blank line. Nothing when empty.
fn push_section(lines: &mut Vec<String>, heading: &str, items: &[String], bullet: &str) {
    if items.is_empty() {
        return;
    }
    lines.push(heading.to_string());
    lines.extend(items.iter().map(|x| format!("{}{}", bullet, x)));
    lines.push(String::new());
}

fn plain_note(note: &str) -> String {
    note.replace("**", "")
}

fn ebay(f: &DescriptionFields<'_>) -> String {
    let p = Platform::Ebay;
    let mut lines = Vec::new();

    lines.push(format!("## {}", f.title));
    lines.push(String::new());

    push_section(&mut lines, "### Key features", f.features, "- ");
    push_section(&mut lines, "### Notes / defects", f.defects, "- ");

    lines.push(format!("**Condition:** {}", condition_label(f, p)));
    lines.push(format!("**Quantity:** {}", f.quantity));
    lines.push(format!("**Category:** {}", or_dash(f.category.unwrap_or(""), p)));
    lines.push(String::new());

    lines.push(format!("**Location:** {}", or_dash(&f.seller.city, p)));
    lines.push(format!("**Pickup:** {}", or_dash(&f.seller.pickup, p)));
    lines.push(format!("**Shipping:** {}", or_dash(&f.seller.shipping, p)));
    lines.push(format!("**Handling time:** {}", or_dash(&f.seller.handling_time, p)));
    lines.push(format!("**Returns:** {}", or_dash(&f.seller.returns, p)));

    if !f.parts_repair_note.is_empty() {
        lines.push(String::new());
        lines.push(f.parts_repair_note.to_string());
    }

    lines.join("\n")
}

fn facebook(f: &DescriptionFields<'_>) -> String {
    let p = Platform::FacebookMarketplace;
    let mut lines = Vec::new();

    lines.push(f.title.to_string());
    lines.push(String::new());

    lines.push(format!("Condition: {}", condition_label(f, p)));
    lines.push(format!("Qty: {}", f.quantity));
    lines.push(format!("Category: {}", or_dash(f.category.unwrap_or(""), p)));
    lines.push(String::new());

    push_section(&mut lines, "Features:", f.features, "• ");
    push_section(&mut lines, "Notes/defects:", f.defects, "• ");

    lines.push(format!("Pickup: {}", or_dash(&f.seller.pickup, p)));
    lines.push(format!("Shipping: {}", or_dash(&f.seller.shipping, p)));
    lines.push(format!("Location: {}", or_dash(&f.seller.city, p)));
    lines.push(format!("Handling time: {}", or_dash(&f.seller.handling_time, p)));
    lines.push(format!("Returns: {}", or_dash(&f.seller.returns, p)));

    if !f.parts_repair_note.is_empty() {
        lines.push(String::new());
        lines.push(plain_note(f.parts_repair_note));
    }

    lines.join("\n")
}

fn mercari(f: &DescriptionFields<'_>) -> String {
    let p = Platform::Mercari;
    let mut lines = Vec::new();

    lines.push(f.title.to_string());
    lines.push(String::new());

    push_section(&mut lines, "Details:", f.features, "- ");
    push_section(&mut lines, "Condition notes:", f.defects, "- ");

    lines.push(format!("Condition: {}", condition_label(f, p)));
    lines.push(format!("Quantity: {}", f.quantity));
    lines.push(format!("Category: {}", or_dash(f.category.unwrap_or(""), p)));
    lines.push(String::new());

    lines.push(format!("Location: {}", or_dash(&f.seller.city, p)));
    lines.push(format!("Pickup: {}", or_dash(&f.seller.pickup, p)));
    lines.push(format!("Shipping: {}", or_dash(&f.seller.shipping, p)));
    lines.push(format!("Handling time: {}", or_dash(&f.seller.handling_time, p)));
    lines.push(format!("Returns: {}", or_dash(&f.seller.returns, p)));

    if !f.parts_repair_note.is_empty() {
        lines.push(plain_note(f.parts_repair_note));
    }

    lines.join("\n")
}

fn offerup(f: &DescriptionFields<'_>) -> String {
    let p = Platform::OfferUp;
    let mut lines = Vec::new();

    lines.push(f.title.to_string());
    lines.push(String::new());

    lines.push(format!("Condition: {}", condition_label(f, p)));
    lines.push(format!("Qty: {}", f.quantity));
    lines.push(format!("Category: {}", or_dash(f.category.unwrap_or(""), p)));
    lines.push(String::new());

    push_section(&mut lines, "Highlights:", f.features, "• ");
    push_section(&mut lines, "Notes:", f.defects, "• ");

    lines.push(format!("Pickup: {}", or_dash(&f.seller.pickup, p)));
    lines.push(format!("Location: {}", or_dash(&f.seller.city, p)));
    lines.push(format!("Shipping: {}", or_dash(&f.seller.shipping, p)));
    lines.push(format!("Handling time: {}", or_dash(&f.seller.handling_time, p)));
    lines.push(format!("Returns: {}", or_dash(&f.seller.returns, p)));

    if !f.parts_repair_note.is_empty() {
        lines.push(String::new());
        lines.push(plain_note(f.parts_repair_note));
    }

    lines.join("\n")
}

fn generic(f: &DescriptionFields<'_>) -> String {
    let p = Platform::Generic;
    let mut lines = Vec::new();

    lines.push(f.title.to_string());
    lines.push(String::new());

    lines.push(format!("Condition: {}", condition_label(f, p)));
    lines.push(format!("Quantity: {}", f.quantity));
    lines.push(format!("Category: {}", or_dash(f.category.unwrap_or(""), p)));
    lines.push(String::new());

    push_section(&mut lines, "Key features:", f.features, "- ");
    push_section(&mut lines, "Notes:", f.defects, "- ");

    lines.push(format!("Location: {}", or_dash(&f.seller.city, p)));
    lines.push(format!("Pickup: {}", or_dash(&f.seller.pickup, p)));
    lines.push(format!("Shipping: {}", or_dash(&f.seller.shipping, p)));
    lines.push(format!("Handling time: {}", or_dash(&f.seller.handling_time, p)));
    lines.push(format!("Returns: {}", or_dash(&f.seller.returns, p)));

    if !f.parts_repair_note.is_empty() {
        lines.push(String::new());
        lines.push(plain_note(f.parts_repair_note));
    }

    lines.join("\n")
}
