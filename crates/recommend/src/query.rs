use serde::{Deserialize, Serialize};

use phonehub_catalog::{Item, ANY_BRAND, MAX_CAPABILITY_SCORE};
use phonehub_core::{DomainError, DomainResult, ValueObject};

use crate::usage::PrimaryUse;

/// Brand preference: any brand, or one exact brand.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum BrandFilter {
    #[default]
    Any,
    Only(String),
}

impl BrandFilter {
    pub fn matches(&self, brand: &str) -> bool {
        match self {
            BrandFilter::Any => true,
            BrandFilter::Only(wanted) => wanted == brand,
        }
    }

    pub fn is_any(&self) -> bool {
        matches!(self, BrandFilter::Any)
    }
}

impl From<String> for BrandFilter {
    fn from(value: String) -> Self {
        let trimmed = value.trim();
        if trimmed.is_empty() || trimmed.eq_ignore_ascii_case(ANY_BRAND) {
            BrandFilter::Any
        } else {
            BrandFilter::Only(value)
        }
    }
}

impl From<&str> for BrandFilter {
    fn from(value: &str) -> Self {
        BrandFilter::from(value.to_string())
    }
}

impl From<BrandFilter> for String {
    fn from(value: BrandFilter) -> Self {
        match value {
            BrandFilter::Any => ANY_BRAND.to_string(),
            BrandFilter::Only(brand) => brand,
        }
    }
}

impl core::fmt::Display for BrandFilter {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            BrandFilter::Any => f.write_str(ANY_BRAND),
            BrandFilter::Only(brand) => f.write_str(brand),
        }
    }
}

/// A recommendation request: hard filters plus the usage preference.
///
/// Built fresh for every request. Missing JSON fields take the defaults of a
/// new session (budget 800, general use, any brand, no minimums).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Query {
    /// Inclusive upper bound on price.
    pub budget: u32,
    pub primary_use: PrimaryUse,
    pub brand: BrandFilter,
    /// Inclusive lower bound on the camera score; 0 disables the filter.
    pub min_camera: u8,
    /// Inclusive lower bound on the battery score; 0 disables the filter.
    pub min_battery: u8,
}

impl ValueObject for Query {}

impl Default for Query {
    fn default() -> Self {
        Self::new(Self::DEFAULT_BUDGET, PrimaryUse::General)
    }
}

impl Query {
    /// Largest budget a query can carry.
    pub const MAX_BUDGET: u32 = 1500;
    pub const DEFAULT_BUDGET: u32 = 800;

    pub fn new(budget: u32, primary_use: PrimaryUse) -> Self {
        Self {
            budget,
            primary_use,
            brand: BrandFilter::Any,
            min_camera: 0,
            min_battery: 0,
        }
    }

    pub fn with_brand(mut self, brand: impl Into<BrandFilter>) -> Self {
        self.brand = brand.into();
        self
    }

    pub fn with_min_camera(mut self, min_camera: u8) -> Self {
        self.min_camera = min_camera;
        self
    }

    pub fn with_min_battery(mut self, min_battery: u8) -> Self {
        self.min_battery = min_battery;
        self
    }

    /// Reject values outside the query domain.
    pub fn validate(&self) -> DomainResult<()> {
        if self.budget > Self::MAX_BUDGET {
            return Err(DomainError::validation(format!(
                "budget must be <= {} (got {})",
                Self::MAX_BUDGET,
                self.budget
            )));
        }
        if self.min_camera > MAX_CAPABILITY_SCORE {
            return Err(DomainError::validation(format!(
                "min_camera must be <= {MAX_CAPABILITY_SCORE} (got {})",
                self.min_camera
            )));
        }
        if self.min_battery > MAX_CAPABILITY_SCORE {
            return Err(DomainError::validation(format!(
                "min_battery must be <= {MAX_CAPABILITY_SCORE} (got {})",
                self.min_battery
            )));
        }
        Ok(())
    }

    /// Hard filters, all AND'ed.
    pub fn admits(&self, item: &Item) -> bool {
        item.price <= self.budget
            && self.brand.matches(&item.brand)
            && (self.min_camera == 0 || item.camera >= self.min_camera)
            && (self.min_battery == 0 || item.battery >= self.min_battery)
    }

    /// Human-readable summary of the filters that narrow the catalog.
    ///
    /// A budget at [`Self::MAX_BUDGET`] and general use constrain nothing and
    /// are left out, so an unconstrained query yields an empty list.
    pub fn active_filters(&self) -> Vec<String> {
        let mut filters = Vec::new();
        if self.budget < Self::MAX_BUDGET {
            filters.push(format!("Budget: Up to ${}", self.budget));
        }
        if self.primary_use != PrimaryUse::General {
            filters.push(format!("Primary Use: {}", self.primary_use));
        }
        if let BrandFilter::Only(brand) = &self.brand {
            filters.push(format!("Brand: {brand}"));
        }
        if self.min_camera > 0 {
            filters.push(format!("Min Camera Score: {}/100", self.min_camera));
        }
        if self.min_battery > 0 {
            filters.push(format!("Min Battery Score: {}/100", self.min_battery));
        }
        filters
    }
}
