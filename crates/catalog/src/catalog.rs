use std::collections::{BTreeMap, HashSet};
use std::path::Path;

use serde::Serialize;

use crate::error::CatalogError;
use crate::item::{Capability, Item, MAX_CAPABILITY_SCORE};

/// Brand option meaning "no brand preference".
pub const ANY_BRAND: &str = "Any";

const BUILTIN_CATALOG: &str = include_str!("../data/phones.json");

/// Number of catalog items per brand.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BrandCount {
    pub brand: String,
    pub count: usize,
}

/// Immutable, ordered collection of items.
///
/// Input order is preserved: it is the tie-breaker for equal recommendation
/// scores and the result order of name searches.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Catalog {
    items: Vec<Item>,
}

impl Catalog {
    /// Build a catalog, failing fast on malformed entries.
    pub fn new(items: Vec<Item>) -> Result<Self, CatalogError> {
        validate(&items)?;
        Ok(Self { items })
    }

    pub fn empty() -> Self {
        Self::default()
    }

    /// Parse a JSON array of items.
    pub fn from_json_str(json: &str) -> Result<Self, CatalogError> {
        let items: Vec<Item> = serde_json::from_str(json)?;
        Self::new(items)
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)?;
        let catalog = Self::from_json_str(&raw)?;
        tracing::info!(path = %path.display(), items = catalog.len(), "catalog loaded");
        Ok(catalog)
    }

    /// The catalog shipped with the crate.
    pub fn builtin() -> Result<Self, CatalogError> {
        Self::from_json_str(BUILTIN_CATALOG)
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn iter(&self) -> impl Iterator<Item = &Item> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Exact-name lookup.
    pub fn get(&self, name: &str) -> Option<&Item> {
        self.items.iter().find(|item| item.name == name)
    }

    /// Brand selector options: [`ANY_BRAND`] followed by the sorted distinct brands.
    pub fn brand_options(&self) -> Vec<String> {
        let mut brands: Vec<String> = self.items.iter().map(|i| i.brand.clone()).collect();
        brands.sort();
        brands.dedup();

        let mut options = Vec::with_capacity(brands.len() + 1);
        options.push(ANY_BRAND.to_string());
        options.extend(brands);
        options
    }

    /// Items per brand, most common first (ties by brand name).
    pub fn brand_distribution(&self) -> Vec<BrandCount> {
        let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
        for item in &self.items {
            *counts.entry(item.brand.as_str()).or_default() += 1;
        }

        let mut out: Vec<BrandCount> = counts
            .into_iter()
            .map(|(brand, count)| BrandCount {
                brand: brand.to_string(),
                count,
            })
            .collect();
        // BTreeMap already yields brands ascending; a stable sort keeps that for ties.
        out.sort_by(|a, b| b.count.cmp(&a.count));
        out
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a Item;
    type IntoIter = std::slice::Iter<'a, Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

fn validate(items: &[Item]) -> Result<(), CatalogError> {
    let mut seen: HashSet<&str> = HashSet::with_capacity(items.len());

    for (index, item) in items.iter().enumerate() {
        if item.name.trim().is_empty() {
            return Err(CatalogError::EmptyName { index });
        }
        if !seen.insert(item.name.as_str()) {
            return Err(CatalogError::DuplicateName(item.name.clone()));
        }
        for capability in Capability::ALL {
            let value = item.capability(capability);
            if value > MAX_CAPABILITY_SCORE {
                return Err(CatalogError::ScoreOutOfRange {
                    item: item.name.clone(),
                    capability: capability.as_str(),
                    value,
                });
            }
        }
    }

    Ok(())
}
