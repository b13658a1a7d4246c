//! Configuration management with TOML, environment variables, and CLI overrides.

use crate::error::ParseError;
use crate::listing::{Platform, SellerProfile};
use crate::profit::FeePreset;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

/// Application configuration with layered loading.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Default marketplace for listings
    #[serde(default)]
    pub platform: Platform,

    /// Output format
    #[serde(default)]
    pub format: OutputFormat,

    /// Default fee preset for profit checks
    #[serde(default)]
    pub preset: FeePreset,

    /// Append condition boilerplate to listing notes
    #[serde(default = "default_true")]
    pub use_condition_template: bool,

    /// Add the sold-as-is note to parts/repair listings
    #[serde(default = "default_true")]
    pub include_parts_repair_note: bool,

    /// Seller details added to every description
    #[serde(default)]
    pub seller: SellerProfile,
}

fn default_true() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            platform: Platform::Ebay,
            format: OutputFormat::Text,
            preset: FeePreset::Ebay,
            use_condition_template: true,
            include_parts_repair_note: true,
            seller: SellerProfile::default(),
        }
    }
}

impl Config {
    /// Loads configuration from a TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        debug!("Loading config from: {}", path.display());

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    /// Loads configuration with fallback to default locations.
    pub fn load(explicit_path: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit_path {
            return Self::from_file(path);
        }

        let local_config = Path::new("resale-kit.toml");
        if local_config.exists() {
            debug!("Found resale-kit.toml in current directory");
            return Self::from_file(local_config);
        }

        if let Some(config_dir) = dirs::config_dir() {
            let xdg_config = config_dir.join("resale-kit").join("config.toml");
            if xdg_config.exists() {
                debug!("Found config in XDG config directory");
                return Self::from_file(xdg_config);
            }
        }

        debug!("No config file found, using defaults");
        Ok(Self::default())
    }

    /// Applies environment variable overrides. Unparseable values are ignored.
    pub fn with_env(mut self) -> Self {
        if let Ok(platform) = std::env::var("RESALE_PLATFORM") {
            if let Ok(p) = platform.parse() {
                self.platform = p;
            }
        }

        if let Ok(format) = std::env::var("RESALE_FORMAT") {
            if let Ok(f) = format.parse() {
                self.format = f;
            }
        }

        if let Ok(preset) = std::env::var("RESALE_PRESET") {
            if let Ok(p) = preset.parse() {
                self.preset = p;
            }
        }

        if let Ok(city) = std::env::var("RESALE_CITY") {
            self.seller.city = city;
        }

        self
    }
}

/// Output format for results.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    Markdown,
    Csv,
}

impl std::str::FromStr for OutputFormat {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "txt" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            "markdown" | "md" => Ok(OutputFormat::Markdown),
            "csv" => Ok(OutputFormat::Csv),
            _ => Err(ParseError::OutputFormat(s.to_string())),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
            OutputFormat::Markdown => write!(f, "markdown"),
            OutputFormat::Csv => write!(f, "csv"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.platform, Platform::Ebay);
        assert_eq!(config.format, OutputFormat::Text);
        assert_eq!(config.preset, FeePreset::Ebay);
        assert!(config.use_condition_template);
        assert!(config.include_parts_repair_note);
        assert_eq!(config.seller, SellerProfile::default());
    }

    #[test]
    fn test_output_format_parsing() {
        assert_eq!("text".parse::<OutputFormat>().unwrap(), OutputFormat::Text);
        assert_eq!("TXT".parse::<OutputFormat>().unwrap(), OutputFormat::Text);
        assert_eq!("json".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
        assert_eq!("md".parse::<OutputFormat>().unwrap(), OutputFormat::Markdown);
        assert_eq!("CSV".parse::<OutputFormat>().unwrap(), OutputFormat::Csv);

        let err = "invalid".parse::<OutputFormat>().unwrap_err();
        assert!(err.to_string().contains("Unknown format"));
        assert!(err.to_string().contains("text, json, markdown, csv"));
    }

    #[test]
    fn test_output_format_display() {
        assert_eq!(OutputFormat::Text.to_string(), "text");
        assert_eq!(OutputFormat::Json.to_string(), "json");
        assert_eq!(OutputFormat::Markdown.to_string(), "markdown");
        assert_eq!(OutputFormat::Csv.to_string(), "csv");
    }

    #[test]
    fn test_config_from_toml() {
        let toml = r#"
            platform = "mercari"
            format = "json"
            preset = "facebook-marketplace"
            use_condition_template = false

            [seller]
            city = "Jacksonville, FL"
            returns = "30-day returns"
        "#;

        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.platform, Platform::Mercari);
        assert_eq!(config.format, OutputFormat::Json);
        assert_eq!(config.preset, FeePreset::FacebookMarketplace);
        assert!(!config.use_condition_template);
        assert!(config.include_parts_repair_note);
        assert_eq!(config.seller.city, "Jacksonville, FL");
        assert_eq!(config.seller.returns, "30-day returns");
        assert_eq!(config.seller.pickup, "Porch pickup / meetup");
    }

    #[test]
    fn test_config_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"
            platform = "offerup"
            "#
        )
        .unwrap();

        let config = Config::from_file(file.path()).unwrap();
        assert_eq!(config.platform, Platform::OfferUp);
        assert_eq!(config.format, OutputFormat::Text);
    }

    #[test]
    fn test_config_from_file_not_found() {
        let result = Config::from_file("/nonexistent/path/config.toml");
        let err = result.unwrap_err().to_string();
        assert!(err.contains("Failed to read config file"));
    }

    #[test]
    fn test_config_from_file_invalid_toml() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "not valid toml {{{{").unwrap();

        let err = Config::from_file(file.path()).unwrap_err().to_string();
        assert!(err.contains("Failed to parse config file"));
    }

    #[test]
    fn test_config_load_explicit_path() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "preset = \"local-pickup\"").unwrap();

        let config = Config::load(Some(file.path())).unwrap();
        assert_eq!(config.preset, FeePreset::LocalPickup);
    }

    #[test]
    fn test_config_with_env() {
        let orig_platform = std::env::var("RESALE_PLATFORM").ok();
        let orig_format = std::env::var("RESALE_FORMAT").ok();
        let orig_city = std::env::var("RESALE_CITY").ok();

        std::env::set_var("RESALE_PLATFORM", "facebook");
        std::env::set_var("RESALE_FORMAT", "not-a-format");
        std::env::set_var("RESALE_CITY", "Orlando, FL");

        let config = Config::default().with_env();
        assert_eq!(config.platform, Platform::FacebookMarketplace);
        // Invalid values are ignored
        assert_eq!(config.format, OutputFormat::Text);
        assert_eq!(config.seller.city, "Orlando, FL");

        for (key, orig) in [
            ("RESALE_PLATFORM", orig_platform),
            ("RESALE_FORMAT", orig_format),
            ("RESALE_CITY", orig_city),
        ] {
            match orig {
                Some(v) => std::env::set_var(key, v),
                None => std::env::remove_var(key),
            }
        }
    }
}
