//! Title variant generation.
//!
//! Each variant is a different trade-off between keyword coverage and length.
//! Variants are fitted to a per-label character budget by dropping trailing
//! parts first and hard-truncating only as a last resort.

use super::condition::Condition;
use super::models::TitleVariant;
use super::platforms::Platform;
use regex::Regex;
use std::collections::HashSet;
use std::sync::LazyLock;
use tracing::debug;

/// Title used when every field is blank.
pub const FALLBACK_TITLE: &str = "Item for sale";

/// Upper bound on returned variants.
pub const MAX_VARIANTS: usize = 6;

const SHORT_LIMIT: usize = 60;
const SUPER_SHORT_LIMIT: usize = 45;

const MAX_KEYWORDS: usize = 2;
const KEYWORD_SCAN_LINES: usize = 12;
const KEYWORD_MIN_LEN: usize = 2;
const KEYWORD_MAX_LEN: usize = 26;

/// Promotional words that waste title characters.
const FLUFF_WORDS: &[&str] =
    &["great", "amazing", "awesome", "nice", "wow", "look", "fast", "shipping", "must", "see", "hot"];

static WORD: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\w+").unwrap());
static INCHES: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"(?i)\b(\d{1,2})\s*(inches|inch)\b"#).unwrap());

/// Strategy that produced a title variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Strategy {
    Primary,
    FeatureFirst,
    Short,
    SuperShort,
    Condition,
    PartsRepair,
}

impl Strategy {
    fn label(&self) -> &'static str {
        match self {
            Strategy::Primary => "primary",
            Strategy::FeatureFirst => "feature-first",
            Strategy::Short => "short",
            Strategy::SuperShort => "super-short",
            Strategy::Condition => "condition",
            Strategy::PartsRepair => "parts/repair",
        }
    }

    fn limit(&self, platform: Platform) -> usize {
        match self {
            Strategy::Short => SHORT_LIMIT,
            Strategy::SuperShort => SUPER_SHORT_LIMIT,
            _ => platform.title_limit(),
        }
    }
}

/// Collapses runs of whitespace and trims the ends.
pub fn clean_token(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Removes fluff words (whole words, case-insensitive) and re-cleans the text.
///
/// Word boundaries are Unicode-aware, so `Nice限定` is one word and survives.
pub fn strip_fluff(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut last = 0;

    for word in WORD.find_iter(text) {
        out.push_str(&text[last..word.start()]);
        let lower = word.as_str().to_lowercase();
        if !FLUFF_WORDS.contains(&lower.as_str()) {
            out.push_str(word.as_str());
        }
        last = word.end();
    }
    out.push_str(&text[last..]);

    clean_token(&out)
}

/// Shortens a feature line for title use (`15 inch` becomes `15"`).
fn featureize(s: &str) -> String {
    let s = clean_token(s);
    INCHES.replace_all(&s, "${1}\"").into_owned()
}

/// Picks up to `max` short feature lines suitable for a title.
pub fn keywords_from_features(features: &[String], max: usize) -> Vec<String> {
    let mut keep = Vec::new();

    for line in features.iter().filter(|l| !l.trim().is_empty()).take(KEYWORD_SCAN_LINES) {
        if keep.len() >= max {
            break;
        }
        let keyword = featureize(&strip_fluff(line));
        let len = keyword.chars().count();
        if (KEYWORD_MIN_LEN..=KEYWORD_MAX_LEN).contains(&len) {
            keep.push(keyword);
        }
    }

    keep
}

/// Joins the non-empty parts and fits the result within `limit` characters.
pub fn fit_to_limit(parts: &[&str], limit: usize) -> String {
    let mut parts: Vec<String> =
        parts.iter().map(|p| strip_fluff(p)).filter(|p| !p.is_empty()).collect();

    if parts.is_empty() {
        return String::new();
    }

    let mut title = parts.join(" ");
    while parts.len() > 1 && title.chars().count() > limit {
        parts.pop();
        title = parts.join(" ");
    }

    if title.chars().count() <= limit {
        return title;
    }

    let truncated: String = title.chars().take(limit).collect();
    truncated.trim_end().to_string()
}

/// Builds the ranked, de-duplicated list of title candidates.
pub fn build_title_variants(
    platform: Platform,
    brand: &str,
    item: &str,
    model: &str,
    condition: Option<Condition>,
    features: &[String],
) -> Vec<TitleVariant> {
    let brand = strip_fluff(brand);
    let item = strip_fluff(item);
    let model = strip_fluff(model);
    let keywords = keywords_from_features(features, MAX_KEYWORDS);

    let (b, i, m) = (brand.as_str(), item.as_str(), model.as_str());
    let base = [b, i, m];

    let mut candidates: Vec<(Strategy, Vec<&str>)> = Vec::new();

    let mut primary = base.to_vec();
    primary.extend(keywords.iter().map(String::as_str));
    candidates.push((Strategy::Primary, primary));

    if let Some(first) = keywords.first() {
        candidates.push((Strategy::FeatureFirst, vec![b, i, m, first.as_str()]));
    }

    candidates.push((Strategy::Short, base.to_vec()));
    candidates.push((Strategy::SuperShort, vec![b, i]));

    match condition {
        Some(c) if c.is_parts_repair() => {
            candidates.push((Strategy::PartsRepair, vec![b, i, m, "For Parts/Repair"]));
        }
        Some(c) => candidates.push((Strategy::Condition, vec![b, i, m, c.label()])),
        None => {}
    }

    let mut seen = HashSet::new();
    let mut variants = Vec::new();

    for (strategy, parts) in candidates {
        let text = fit_to_limit(&parts, strategy.limit(platform));
        if text.is_empty() || !seen.insert(text.to_lowercase()) {
            continue;
        }

        variants.push(TitleVariant::new(strategy.label(), text));
        if variants.len() >= MAX_VARIANTS {
            break;
        }
    }

    if variants.is_empty() {
        variants.push(TitleVariant::new(Strategy::Primary.label(), FALLBACK_TITLE));
    }

    debug!("Generated {} title variants for {}", variants.len(), platform.name());
    variants
}
