use core::str::FromStr;

use serde::{Deserialize, Serialize};

use phonehub_catalog::{Capability, Item};
use phonehub_core::{DomainError, ValueObject};

/// What the user mainly wants the phone for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PrimaryUse {
    #[default]
    #[serde(alias = "General", alias = "General Use")]
    General,
    #[serde(alias = "Photography")]
    Photography,
    #[serde(alias = "Gaming")]
    Gaming,
    #[serde(alias = "BatteryLife", alias = "Battery Life")]
    BatteryLife,
}

impl PrimaryUse {
    pub const ALL: [PrimaryUse; 4] = [
        PrimaryUse::General,
        PrimaryUse::Photography,
        PrimaryUse::Gaming,
        PrimaryUse::BatteryLife,
    ];

    /// User-facing label.
    pub fn label(self) -> &'static str {
        match self {
            PrimaryUse::General => "General Use",
            PrimaryUse::Photography => "Photography",
            PrimaryUse::Gaming => "Gaming",
            PrimaryUse::BatteryLife => "Battery Life",
        }
    }

    /// Weight vector applied to the capability scores.
    ///
    /// Every row sums to 1.0, so a score stays inside the range of its inputs.
    pub const fn weights(self) -> Weights {
        match self {
            PrimaryUse::Photography => Weights {
                camera: 0.50,
                battery: 0.00,
                performance: 0.20,
                display: 0.30,
            },
            PrimaryUse::Gaming => Weights {
                camera: 0.00,
                battery: 0.20,
                performance: 0.50,
                display: 0.30,
            },
            PrimaryUse::BatteryLife => Weights {
                camera: 0.20,
                battery: 0.50,
                performance: 0.30,
                display: 0.00,
            },
            PrimaryUse::General => Weights {
                camera: 0.25,
                battery: 0.25,
                performance: 0.30,
                display: 0.20,
            },
        }
    }
}

impl core::fmt::Display for PrimaryUse {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for PrimaryUse {
    type Err = DomainError;

    /// Accepts both the labels ("Battery Life") and the wire names ("battery_life").
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .trim()
            .chars()
            .filter(|c| !matches!(c, ' ' | '_' | '-'))
            .collect::<String>()
            .to_lowercase();

        match normalized.as_str() {
            "general" | "generaluse" => Ok(PrimaryUse::General),
            "photography" => Ok(PrimaryUse::Photography),
            "gaming" => Ok(PrimaryUse::Gaming),
            "batterylife" => Ok(PrimaryUse::BatteryLife),
            _ => Err(DomainError::validation(format!(
                "unknown primary use '{s}' (expected one of: general, photography, gaming, battery_life)"
            ))),
        }
    }
}

/// Per-capability weights of a scoring rule.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Weights {
    pub camera: f64,
    pub battery: f64,
    pub performance: f64,
    pub display: f64,
}

impl ValueObject for Weights {}

impl Weights {
    pub fn get(&self, capability: Capability) -> f64 {
        match capability {
            Capability::Camera => self.camera,
            Capability::Battery => self.battery,
            Capability::Performance => self.performance,
            Capability::Display => self.display,
        }
    }

    pub fn sum(&self) -> f64 {
        self.camera + self.battery + self.performance + self.display
    }

    /// Weighted combination of the item's capability scores.
    pub fn apply(&self, item: &Item) -> f64 {
        Capability::ALL
            .iter()
            .map(|&c| f64::from(item.capability(c)) * self.get(c))
            .sum()
    }
}
