//! Output formatting for listings and profit checks (text, JSON, markdown, CSV).

use crate::config::OutputFormat;
use crate::listing::{ListingOutput, PhotoChecklist};
use crate::profit::{ProfitInput, ProfitOutput};
use serde::Serialize;

/// Formats dollars as `$1,234.56`; negatives as `-$5.00`.
pub fn money(amount: f64) -> String {
    let cents = (amount.abs() * 100.0).round() as u64;
    let dollars = (cents / 100).to_string();

    let mut grouped = String::with_capacity(dollars.len() + dollars.len() / 3);
    for (i, ch) in dollars.chars().enumerate() {
        if i > 0 && (dollars.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let sign = if amount < 0.0 && cents > 0 { "-" } else { "" };
    format!("{}${}.{:02}", sign, grouped, cents % 100)
}

#[derive(Serialize)]
struct ListingReport<'a> {
    #[serde(flatten)]
    listing: &'a ListingOutput,
    #[serde(skip_serializing_if = "Option::is_none")]
    photo_checklist: Option<&'a PhotoChecklist>,
}

#[derive(Serialize)]
struct ProfitReport<'a> {
    input: &'a ProfitInput,
    result: &'a ProfitOutput,
}

/// Formats results for output.
pub struct Formatter {
    format: OutputFormat,
}

impl Formatter {
    /// Creates a new formatter.
    pub fn new(format: OutputFormat) -> Self {
        Self { format }
    }

    /// Formats a generated listing, optionally with its photo checklist.
    pub fn format_listing(
        &self,
        listing: &ListingOutput,
        checklist: Option<&PhotoChecklist>,
    ) -> String {
        match self.format {
            OutputFormat::Json => self.json_listing(listing, checklist),
            OutputFormat::Text => self.text_listing(listing, checklist),
            OutputFormat::Markdown => self.markdown_listing(listing, checklist),
            OutputFormat::Csv => self.csv_listing(listing),
        }
    }

    /// Formats a profit check. `input` should be the values the result was computed from.
    pub fn format_profit(&self, input: &ProfitInput, result: &ProfitOutput) -> String {
        match self.format {
            OutputFormat::Json => self.json_profit(input, result),
            OutputFormat::Text => self.text_profit(input, result),
            OutputFormat::Markdown => self.markdown_profit(input, result),
            OutputFormat::Csv => self.csv_profit(input, result),
        }
    }

    // JSON formatting

    fn json_listing(&self, listing: &ListingOutput, checklist: Option<&PhotoChecklist>) -> String {
        let report = ListingReport { listing, photo_checklist: checklist };
        serde_json::to_string_pretty(&report).unwrap_or_else(|_| "{}".to_string())
    }

    fn json_profit(&self, input: &ProfitInput, result: &ProfitOutput) -> String {
        let report = ProfitReport { input, result };
        serde_json::to_string_pretty(&report).unwrap_or_else(|_| "{}".to_string())
    }

    // Text formatting

    fn text_listing(&self, listing: &ListingOutput, checklist: Option<&PhotoChecklist>) -> String {
        let mut lines = Vec::new();

        lines.push(format!("Platform: {}", listing.platform.name()));
        lines.push(String::new());
        lines.push("Title variants:".to_string());

        for (i, variant) in listing.title_variants.iter().enumerate() {
            lines.push(format!(
                "{:>3}. {:<14} {} ({} chars)",
                i + 1,
                format!("[{}]", variant.label),
                variant.text,
                variant.text.chars().count()
            ));
        }

        lines.push(String::new());
        lines.push(format!("Title:   {}", listing.chosen_title));
        lines.push(String::new());
        lines.push("Description:".to_string());
        lines.push(format!("{:-<60}", ""));
        lines.push(listing.description.clone());
        lines.push(format!("{:-<60}", ""));

        if let Some(checklist) = checklist {
            lines.push(String::new());
            lines.push(format!("Photo checklist ({}):", checklist.bucket));
            lines.extend(checklist.shots.iter().map(|s| format!("  [ ] {}", s)));
        }

        lines.join("\n")
    }

    fn text_profit(&self, input: &ProfitInput, result: &ProfitOutput) -> String {
        let rows = [
            ("Sale price", money(input.sale_price)),
            ("COGS", money(input.cogs)),
            ("Shipping", money(result.shipping_cost)),
            ("Packaging", money(input.packaging_cost)),
            ("Platform fee", money(result.platform_fee)),
            ("Processing fee", money(result.processing_fee)),
            ("Total fees", money(result.total_fees)),
            ("Total cost", money(result.total_cost)),
            ("Profit", money(result.profit)),
            ("Margin", format!("{:.1}%", result.margin_pct)),
            ("Flip score", format!("{:.1} / 10", result.flip_score)),
            ("Verdict", format!("{} {}", result.flip_badge.icon(), result.flip_badge)),
        ];

        rows.iter()
            .map(|(label, value)| format!("{:<16}{}", format!("{}:", label), value))
            .collect::<Vec<_>>()
            .join("\n")
    }

    // Markdown formatting

    fn markdown_listing(
        &self,
        listing: &ListingOutput,
        checklist: Option<&PhotoChecklist>,
    ) -> String {
        let mut lines = Vec::new();

        lines.push(format!("## {} listing", listing.platform.name()));
        lines.push(String::new());
        lines.push("| # | Label | Title | Chars |".to_string());
        lines.push("|---|-------|-------|-------|".to_string());

        for (i, variant) in listing.title_variants.iter().enumerate() {
            lines.push(format!(
                "| {} | {} | {} | {} |",
                i + 1,
                variant.label,
                variant.text.replace('|', "\\|"),
                variant.text.chars().count()
            ));
        }

        lines.push(String::new());
        lines.push(format!("- **Title:** {}", listing.chosen_title));
        lines.push(String::new());
        lines.push("### Description".to_string());
        lines.push(String::new());
        lines.push("```text".to_string());
        lines.push(listing.description.clone());
        lines.push("```".to_string());

        if let Some(checklist) = checklist {
            lines.push(String::new());
            lines.push(format!("### Photo checklist ({})", checklist.bucket));
            lines.push(String::new());
            lines.extend(checklist.shots.iter().map(|s| format!("- [ ] {}", s)));
        }

        lines.join("\n")
    }

    fn markdown_profit(&self, input: &ProfitInput, result: &ProfitOutput) -> String {
        let mut lines = Vec::new();

        lines.push(format!(
            "## {} {} ({:.1} / 10)",
            result.flip_badge.icon(),
            result.flip_badge,
            result.flip_score
        ));
        lines.push(String::new());
        lines.push("| Line | Amount |".to_string());
        lines.push("|------|-------:|".to_string());
        lines.push(format!("| Sale price | {} |", money(input.sale_price)));
        lines.push(format!("| COGS | {} |", money(input.cogs)));
        lines.push(format!("| Shipping | {} |", money(result.shipping_cost)));
        lines.push(format!("| Packaging | {} |", money(input.packaging_cost)));
        lines.push(format!("| Total fees | {} |", money(result.total_fees)));
        lines.push(format!("| Total cost | {} |", money(result.total_cost)));
        lines.push(format!("| **Profit** | **{}** |", money(result.profit)));
        lines.push(String::new());
        lines.push(format!("*Margin: {:.1}%*", result.margin_pct));

        lines.join("\n")
    }

    // CSV formatting

    fn csv_listing_header(&self) -> String {
        "rank,label,title,chars".to_string()
    }

    fn csv_listing(&self, listing: &ListingOutput) -> String {
        let mut lines = Vec::new();
        lines.push(self.csv_listing_header());

        for (i, variant) in listing.title_variants.iter().enumerate() {
            lines.push(format!(
                "{},{},{},{}",
                i + 1,
                Self::csv_escape(&variant.label),
                Self::csv_escape(&variant.text),
                variant.text.chars().count()
            ));
        }

        lines.join("\n")
    }

    fn csv_profit_header(&self) -> String {
        "sale_price,cogs,shipping,packaging,platform_fee,processing_fee,total_fees,total_cost,profit,margin_pct,flip_score,verdict"
            .to_string()
    }

    fn csv_profit(&self, input: &ProfitInput, result: &ProfitOutput) -> String {
        let row = format!(
            "{:.2},{:.2},{:.2},{:.2},{:.2},{:.2},{:.2},{:.2},{:.2},{:.1},{:.1},{}",
            input.sale_price,
            input.cogs,
            result.shipping_cost,
            input.packaging_cost,
            result.platform_fee,
            result.processing_fee,
            result.total_fees,
            result.total_cost,
            result.profit,
            result.margin_pct,
            result.flip_score,
            result.flip_badge
        );

        [self.csv_profit_header(), row].join("\n")
    }

    fn csv_escape(s: &str) -> String {
        if s.contains(',') || s.contains('"') || s.contains('\n') {
            format!("\"{}\"", s.replace('"', "\"\""))
        } else {
            s.to_string()
        }
    }
}
