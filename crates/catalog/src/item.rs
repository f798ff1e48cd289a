use serde::{Deserialize, Serialize};

use phonehub_core::Entity;

/// Upper bound of every capability score.
pub const MAX_CAPABILITY_SCORE: u8 = 100;

/// The four scored capabilities of an item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Capability {
    Camera,
    Battery,
    Performance,
    Display,
}

impl Capability {
    /// All capabilities, in weight-vector order.
    pub const ALL: [Capability; 4] = [
        Capability::Camera,
        Capability::Battery,
        Capability::Performance,
        Capability::Display,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Capability::Camera => "camera",
            Capability::Battery => "battery",
            Capability::Performance => "performance",
            Capability::Display => "display",
        }
    }
}

impl core::fmt::Display for Capability {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A catalog entry (a phone).
///
/// Identity is the `name`, which is unique within a catalog. The JSON shape
/// matches the catalog document: flat capability scores plus descriptive
/// fields that never take part in scoring.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub name: String,
    /// Price in whole currency units (e.g. dollars).
    pub price: u32,

    pub camera: u8,
    pub battery: u8,
    pub performance: u8,
    pub display: u8,

    pub brand: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub storage: String,
    #[serde(default)]
    pub ram: String,
    #[serde(default)]
    pub screen_size: String,
    #[serde(default)]
    pub camera_mp: String,
    #[serde(default)]
    pub battery_mah: String,
    #[serde(default)]
    pub os: String,

    /// Display order matters: explanations quote the first three.
    #[serde(default)]
    pub features: Vec<String>,
    #[serde(default)]
    pub pros: Vec<String>,
    #[serde(default)]
    pub cons: Vec<String>,
}

impl Item {
    pub fn capability(&self, capability: Capability) -> u8 {
        match capability {
            Capability::Camera => self.camera,
            Capability::Battery => self.battery,
            Capability::Performance => self.performance,
            Capability::Display => self.display,
        }
    }

    /// Case-insensitive substring match on the name.
    pub fn name_contains(&self, needle_lowercase: &str) -> bool {
        self.name.to_lowercase().contains(needle_lowercase)
    }
}

impl Entity for Item {
    type Id = String;

    fn id(&self) -> &Self::Id {
        &self.name
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn capability_accessor_matches_fields() {
        let item = fixtures::item("A", "Acme", 500, [90, 80, 70, 85]);
        assert_eq!(item.capability(Capability::Camera), 90);
        assert_eq!(item.capability(Capability::Battery), 80);
        assert_eq!(item.capability(Capability::Performance), 70);
        assert_eq!(item.capability(Capability::Display), 85);
    }

    #[test]
    fn descriptive_fields_default_when_missing() {
        let json = r#"{
            "name": "Bare", "price": 100,
            "camera": 1, "battery": 2, "performance": 3, "display": 4,
            "brand": "Acme"
        }"#;
        let item: Item = serde_json::from_str(json).unwrap();
        assert_eq!(item.id(), "Bare");
        assert!(item.features.is_empty());
        assert_eq!(item.storage, "");
    }

    #[test]
    fn missing_score_is_a_parse_error() {
        let json = r#"{ "name": "Broken", "price": 100, "camera": 1, "brand": "Acme" }"#;
        assert!(serde_json::from_str::<Item>(json).is_err());
    }

    #[test]
    fn name_match_is_case_insensitive() {
        let item = fixtures::item("Samsung Galaxy S24 Ultra", "Samsung", 1299, [96, 88, 95, 98]);
        assert!(item.name_contains("galaxy"));
        assert!(!item.name_contains("pixel"));
    }
}
