//! Photo checklists keyed by a loose category match.

use serde::Serialize;
use std::fmt;

/// Broad category buckets with their own shot lists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum CategoryBucket {
    Electronics,
    ShoesClothing,
    Tools,
    HomeKitchen,
    ToysGames,
    Other,
}

impl CategoryBucket {
    /// Classifies free-text category input. First matching bucket wins.
    pub fn classify(category: &str) -> Self {
        let lower = category.to_lowercase();
        let has = |keys: &[&str]| keys.iter().any(|k| lower.contains(k));

        if has(&["electronic", "laptop", "phone", "camera", "tablet", "console"]) {
            CategoryBucket::Electronics
        } else if has(&["shoe", "sneaker", "shirt", "hoodie", "pants", "jacket"]) {
            CategoryBucket::ShoesClothing
        } else if has(&["tool", "drill", "dewalt", "milwaukee", "saw"]) {
            CategoryBucket::Tools
        } else if has(&["kitchen", "home", "decor", "plate", "mug", "bowl"]) {
            CategoryBucket::HomeKitchen
        } else if has(&["toy", "game", "puzzle", "lego"]) {
            CategoryBucket::ToysGames
        } else {
            CategoryBucket::Other
        }
    }

    /// Photos worth taking for this bucket.
    pub fn shots(&self) -> &'static [&'static str] {
        match self {
            CategoryBucket::Electronics => &[
                "Front & back",
                "Screen close-up (if applicable)",
                "Model/part number label",
                "Ports & buttons",
                "Power-on photo (if possible)",
                "Accessories included",
                "Any defects close-up",
            ],
            CategoryBucket::ShoesClothing => &[
                "Front, sides, back",
                "Size tag/label",
                "Soles/bottoms",
                "Stitching/inside",
                "Brand/logo close-up",
                "Any stains/tears close-up",
            ],
            CategoryBucket::Tools => &[
                "Full tool front/back",
                "Model/serial plate",
                "Battery/charger (if included)",
                "Bit/attachments (if included)",
                "Power-on/operation (if possible)",
                "Any cracks/damage close-up",
            ],
            CategoryBucket::HomeKitchen => &[
                "Front/back",
                "Underside/markings",
                "Measurements (if relevant)",
                "Set pieces (if bundle)",
                "Any chips/cracks close-up",
            ],
            CategoryBucket::ToysGames => &[
                "Front/back of box",
                "Contents laid out",
                "Piece/part count note (if known)",
                "Close-ups of wear/tears",
            ],
            CategoryBucket::Other => &[
                "Front/back",
                "Brand/model label",
                "Any included accessories",
                "Any defects close-up",
            ],
        }
    }
}

impl fmt::Display for CategoryBucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            CategoryBucket::Electronics => "Electronics",
            CategoryBucket::ShoesClothing => "Shoes/Clothing",
            CategoryBucket::Tools => "Tools",
            CategoryBucket::HomeKitchen => "Home/Kitchen",
            CategoryBucket::ToysGames => "Toys/Games",
            CategoryBucket::Other => "Other",
        };
        write!(f, "{}", name)
    }
}

/// Photos to take before listing an item.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PhotoChecklist {
    pub bucket: CategoryBucket,
    pub shots: Vec<String>,
}

/// Returns the photo checklist for a free-text category.
pub fn photo_checklist(category: &str) -> PhotoChecklist {
    let bucket = CategoryBucket::classify(category);
    PhotoChecklist { bucket, shots: bucket.shots().iter().map(|s| s.to_string()).collect() }
}
