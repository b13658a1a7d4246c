//! Item condition grades and their boilerplate sentences.

use crate::error::ParseError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Condition grade shown to buyers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Condition {
    New,
    OpenBox,
    UsedLikeNew,
    UsedGood,
    UsedFair,
    UsedPoor,
    ForPartsRepair,
}

impl Condition {
    /// Label used in titles and descriptions.
    pub fn label(&self) -> &'static str {
        match self {
            Condition::New => "New",
            Condition::OpenBox => "Open box",
            Condition::UsedLikeNew => "Used - Like New",
            Condition::UsedGood => "Used - Good",
            Condition::UsedFair => "Used - Fair",
            Condition::UsedPoor => "Used - Poor",
            Condition::ForPartsRepair => "For parts/repair",
        }
    }

    /// Stock sentence appended to the notes when condition templates are enabled.
    pub fn template(&self) -> &'static str {
        match self {
            Condition::New => "Brand new, unused. Ships fast.",
            Condition::OpenBox => "Open box item. Tested/inspected. Ships fast.",
            Condition::UsedLikeNew => "Lightly used. Clean and fully functional. Ships fast.",
            Condition::UsedGood => {
                "Normal wear from use. Fully functional unless noted. Ships fast."
            }
            Condition::UsedFair => {
                "Noticeable wear. Fully functional unless noted. Please review photos/notes."
            }
            Condition::UsedPoor => "Heavy wear. May have issues. Please read notes carefully.",
            Condition::ForPartsRepair => "For parts/repair. Sold as-is. No returns.",
        }
    }

    pub fn is_parts_repair(&self) -> bool {
        matches!(self, Condition::ForPartsRepair)
    }

    /// Returns all condition grades, best first.
    pub fn all() -> &'static [Condition] {
        &[
            Condition::New,
            Condition::OpenBox,
            Condition::UsedLikeNew,
            Condition::UsedGood,
            Condition::UsedFair,
            Condition::UsedPoor,
            Condition::ForPartsRepair,
        ]
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for Condition {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key: String = s
            .trim()
            .to_lowercase()
            .chars()
            .filter(|c| c.is_ascii_alphanumeric())
            .collect();

        match key.as_str() {
            "new" => Ok(Condition::New),
            "openbox" => Ok(Condition::OpenBox),
            "usedlikenew" | "likenew" => Ok(Condition::UsedLikeNew),
            "usedgood" | "good" => Ok(Condition::UsedGood),
            "usedfair" | "fair" => Ok(Condition::UsedFair),
            "usedpoor" | "poor" => Ok(Condition::UsedPoor),
            "forpartsrepair" | "partsrepair" | "parts" | "forparts" => {
                Ok(Condition::ForPartsRepair)
            }
            _ => Err(ParseError::Condition(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_condition_parsing_labels() {
        for condition in Condition::all() {
            assert_eq!(Condition::from_str(condition.label()).unwrap(), *condition);
        }
    }

    #[test]
    fn test_condition_parsing_aliases() {
        assert_eq!(Condition::from_str("open-box").unwrap(), Condition::OpenBox);
        assert_eq!(Condition::from_str("like new").unwrap(), Condition::UsedLikeNew);
        assert_eq!(Condition::from_str("GOOD").unwrap(), Condition::UsedGood);
        assert_eq!(Condition::from_str("parts").unwrap(), Condition::ForPartsRepair);
        assert!(Condition::from_str("mint").is_err());
        assert!(Condition::from_str("").is_err());
    }

    #[test]
    fn test_only_parts_repair_is_flagged() {
        let flagged: Vec<_> = Condition::all().iter().filter(|c| c.is_parts_repair()).collect();
        assert_eq!(flagged, vec![&Condition::ForPartsRepair]);
    }

    #[test]
    fn test_templates() {
        assert!(Condition::ForPartsRepair.template().contains("Sold as-is"));
        assert!(Condition::UsedGood.template().starts_with("Normal wear"));
    }

    #[test]
    fn test_serde_kebab_case() {
        let json = serde_json::to_string(&Condition::UsedLikeNew).unwrap();
        assert_eq!(json, "\"used-like-new\"");
    }
}
