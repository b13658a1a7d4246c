//! Listing command implementation.

use crate::config::Config;
use crate::format::Formatter;
use crate::listing::{
    build_listing, photo_checklist, split_lines, Condition, ListingInput, Platform,
};
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Field overrides collected from the command line.
#[derive(Debug, Clone, Default)]
pub struct ListingArgs {
    /// JSON file holding a full listing input
    pub input: Option<PathBuf>,
    pub platform: Option<Platform>,
    pub brand: Option<String>,
    pub item: Option<String>,
    pub model: Option<String>,
    pub condition: Option<Condition>,
    pub category: Option<String>,
    pub quantity: Option<u32>,
    /// Replaces the features when non-empty; values may hold several lines
    pub features: Vec<String>,
    /// Replaces the defects when non-empty; values may hold several lines
    pub defects: Vec<String>,
    pub no_condition_template: bool,
    pub no_parts_note: bool,
    /// Append the photo checklist for the category
    pub checklist: bool,
    /// One-based rank of the title variant to use, as printed in the output
    pub title: Option<usize>,
}

/// Builds listing text from config defaults and user fields.
pub struct ListingCommand {
    config: Config,
}

impl ListingCommand {
    /// Creates a new listing command.
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Builds the listing and returns formatted output.
    pub fn execute(&self, args: &ListingArgs) -> Result<String> {
        let input = self.resolve_input(args)?;
        info!("Building {} listing", input.platform.name());

        let listing = build_listing(&input);
        debug!(
            "Chosen title {} of {}: {}",
            input.title_choice.map_or(1, |i| i + 1),
            listing.variant_count(),
            listing.chosen_title
        );

        let checklist =
            args.checklist.then(|| photo_checklist(input.category.as_deref().unwrap_or("")));

        let formatter = Formatter::new(self.config.format);
        Ok(formatter.format_listing(&listing, checklist.as_ref()))
    }

    /// Merges the input file (or config defaults) with command-line overrides.
    pub fn resolve_input(&self, args: &ListingArgs) -> Result<ListingInput> {
        let mut input = match &args.input {
            Some(path) => Self::read_input(path)?,
            None => self.default_input(),
        };

        if let Some(platform) = args.platform {
            input.platform = platform;
        }
        if let Some(brand) = &args.brand {
            input.brand = brand.clone();
        }
        if let Some(item) = &args.item {
            input.item = item.clone();
        }
        if let Some(model) = &args.model {
            input.model = model.clone();
        }
        if let Some(condition) = args.condition {
            input.condition = Some(condition);
        }
        if let Some(category) = &args.category {
            input.category = Some(category.clone());
        }
        if let Some(quantity) = args.quantity {
            input.quantity = quantity.max(1);
        }
        if !args.features.is_empty() {
            input.features = args.features.iter().flat_map(|f| split_lines(f)).collect();
        }
        if !args.defects.is_empty() {
            input.defects = args.defects.iter().flat_map(|d| split_lines(d)).collect();
        }
        if args.no_condition_template {
            input.use_condition_template = false;
        }
        if args.no_parts_note {
            input.include_parts_repair_note = false;
        }
        if let Some(rank) = args.title {
            input.title_choice = rank.checked_sub(1);
        }

        Ok(input)
    }

    fn default_input(&self) -> ListingInput {
        ListingInput {
            seller: self.config.seller.clone(),
            use_condition_template: self.config.use_condition_template,
            include_parts_repair_note: self.config.include_parts_repair_note,
            ..ListingInput::new(self.config.platform)
        }
    }

    fn read_input(path: &Path) -> Result<ListingInput> {
        debug!("Reading listing input from: {}", path.display());

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read listing input: {}", path.display()))?;

        serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse listing input: {}", path.display()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::OutputFormat;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn make_test_config() -> Config {
        let mut config = Config::default();
        config.seller.city = "Jacksonville, FL".to_string();
        config
    }

    fn macbook_args() -> ListingArgs {
        ListingArgs {
            brand: Some("Apple".to_string()),
            item: Some("MacBook Pro".to_string()),
            model: Some("A1990".to_string()),
            condition: Some(Condition::UsedGood),
            features: vec!["16GB RAM\n512GB SSD".to_string()],
            ..ListingArgs::default()
        }
    }

    #[test]
    fn test_config_defaults_seed_input() {
        let mut config = make_test_config();
        config.platform = Platform::Mercari;
        config.use_condition_template = false;

        let cmd = ListingCommand::new(config);
        let input = cmd.resolve_input(&ListingArgs::default()).unwrap();

        assert_eq!(input.platform, Platform::Mercari);
        assert_eq!(input.seller.city, "Jacksonville, FL");
        assert!(!input.use_condition_template);
    }

    #[test]
    fn test_feature_values_split_into_lines() {
        let cmd = ListingCommand::new(make_test_config());
        let mut args = macbook_args();
        args.features.push("Includes charger".to_string());

        let input = cmd.resolve_input(&args).unwrap();
        assert_eq!(input.features, vec!["16GB RAM", "512GB SSD", "Includes charger"]);
    }

    #[test]
    fn test_flags_override_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"{{ "platform": "offerup", "brand": "Sony", "item": "PS4", "quantity": 3 }}"#
        )
        .unwrap();

        let cmd = ListingCommand::new(make_test_config());
        let args = ListingArgs {
            input: Some(file.path().to_path_buf()),
            item: Some("PS5".to_string()),
            no_parts_note: true,
            ..ListingArgs::default()
        };

        let input = cmd.resolve_input(&args).unwrap();
        assert_eq!(input.platform, Platform::OfferUp);
        assert_eq!(input.brand, "Sony");
        assert_eq!(input.item, "PS5");
        assert_eq!(input.quantity, 3);
        assert!(!input.include_parts_repair_note);
    }

    #[test]
    fn test_title_rank_picks_variant() {
        let cmd = ListingCommand::new(make_test_config());
        let args = ListingArgs { title: Some(3), ..macbook_args() };

        let input = cmd.resolve_input(&args).unwrap();
        assert_eq!(input.title_choice, Some(2));

        let output = cmd.execute(&args).unwrap();
        assert!(output.contains("Title:   Apple MacBook Pro A1990\n"));
        assert!(output.contains("## Apple MacBook Pro A1990\n"));
    }

    #[test]
    fn test_title_rank_zero_uses_first() {
        let cmd = ListingCommand::new(make_test_config());
        let args = ListingArgs { title: Some(0), ..macbook_args() };

        let input = cmd.resolve_input(&args).unwrap();
        assert_eq!(input.title_choice, None);
    }

    #[test]
    fn test_missing_input_file() {
        let cmd = ListingCommand::new(make_test_config());
        let args = ListingArgs {
            input: Some(PathBuf::from("/nonexistent/listing.json")),
            ..ListingArgs::default()
        };

        let err = cmd.execute(&args).unwrap_err().to_string();
        assert!(err.contains("Failed to read listing input"));
    }

    #[test]
    fn test_invalid_input_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "{{ not json").unwrap();

        let cmd = ListingCommand::new(make_test_config());
        let args = ListingArgs { input: Some(file.path().to_path_buf()), ..ListingArgs::default() };

        let err = cmd.execute(&args).unwrap_err().to_string();
        assert!(err.contains("Failed to parse listing input"));
    }

    #[test]
    fn test_execute_text() {
        let cmd = ListingCommand::new(make_test_config());
        let output = cmd.execute(&macbook_args()).unwrap();

        assert!(output.contains("Platform: eBay"));
        assert!(output.contains("Apple MacBook Pro A1990"));
        assert!(output.contains("**Location:** Jacksonville, FL"));
    }

    #[test]
    fn test_execute_json_with_checklist() {
        let mut config = make_test_config();
        config.format = OutputFormat::Json;

        let cmd = ListingCommand::new(config);
        let mut args = macbook_args();
        args.category = Some("Laptops".to_string());
        args.checklist = true;

        let output = cmd.execute(&args).unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value["photo_checklist"]["bucket"], "Electronics");
        assert_eq!(value["platform"], "ebay");
    }
}
