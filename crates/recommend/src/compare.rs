use serde::Serialize;

use phonehub_catalog::{Catalog, Item};
use phonehub_core::{DomainError, DomainResult};

use crate::engine::ScoredItem;

/// Most items a comparison may hold.
pub const MAX_COMPARED: usize = 3;

/// Marker shown when an item has no overall score.
pub const NOT_AVAILABLE: &str = "N/A";

/// Anything that can appear as a comparison row.
pub trait Comparable {
    fn item(&self) -> &Item;

    /// Overall score, when the item was ranked against a query.
    fn overall_score(&self) -> Option<f64>;
}

impl Comparable for Item {
    fn item(&self) -> &Item {
        self
    }

    fn overall_score(&self) -> Option<f64> {
        None
    }
}

impl Comparable for ScoredItem {
    fn item(&self) -> &Item {
        &self.item
    }

    fn overall_score(&self) -> Option<f64> {
        Some(self.score)
    }
}

impl<T: Comparable + ?Sized> Comparable for &T {
    fn item(&self) -> &Item {
        (**self).item()
    }

    fn overall_score(&self) -> Option<f64> {
        (**self).overall_score()
    }
}

/// An item chosen for comparison, scored if it is part of the current ranking.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Candidate<'a> {
    Scored(&'a ScoredItem),
    Unscored(&'a Item),
}

impl Comparable for Candidate<'_> {
    fn item(&self) -> &Item {
        match self {
            Candidate::Scored(s) => &s.item,
            Candidate::Unscored(i) => *i,
        }
    }

    fn overall_score(&self) -> Option<f64> {
        match self {
            Candidate::Scored(s) => Some(s.score),
            Candidate::Unscored(_) => None,
        }
    }
}

/// Resolve user-chosen names against the current ranking, then the catalog.
///
/// Order follows `names`; repeated names are kept once. With no names, the
/// first [`MAX_COMPARED`] ranked items are compared.
pub fn pick_for_comparison<'a>(
    catalog: &'a Catalog,
    ranked: &'a [ScoredItem],
    names: &[String],
) -> DomainResult<Vec<Candidate<'a>>> {
    if names.is_empty() {
        return Ok(ranked.iter().take(MAX_COMPARED).map(Candidate::Scored).collect());
    }

    let mut picked: Vec<Candidate<'a>> = Vec::with_capacity(names.len().min(MAX_COMPARED));

    for name in names {
        if picked.iter().any(|c| &c.item().name == name) {
            continue;
        }
        if picked.len() == MAX_COMPARED {
            return Err(DomainError::validation(format!(
                "at most {MAX_COMPARED} items can be compared"
            )));
        }

        let candidate = match ranked.iter().find(|s| &s.item.name == name) {
            Some(scored) => Candidate::Scored(scored),
            None => match catalog.get(name) {
                Some(item) => Candidate::Unscored(item),
                None => return Err(DomainError::validation(format!("unknown item: {name}"))),
            },
        };
        picked.push(candidate);
    }

    Ok(picked)
}

/// One row of a side-by-side comparison; every cell is display-ready.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ComparisonRow {
    pub name: String,
    pub price: String,
    pub camera: String,
    pub battery: String,
    pub performance: String,
    pub display: String,
    pub storage: String,
    pub ram: String,
    pub screen_size: String,
    pub overall_score: String,
}

impl ComparisonRow {
    fn from_comparable<T: Comparable>(entry: &T) -> Self {
        let item = entry.item();
        Self {
            name: item.name.clone(),
            price: format!("${}", item.price),
            camera: out_of_100(item.camera),
            battery: out_of_100(item.battery),
            performance: out_of_100(item.performance),
            display: out_of_100(item.display),
            storage: item.storage.clone(),
            ram: item.ram.clone(),
            screen_size: item.screen_size.clone(),
            overall_score: match entry.overall_score() {
                Some(score) => format!("{score:.1}/100"),
                None => NOT_AVAILABLE.to_string(),
            },
        }
    }
}

fn out_of_100(value: u8) -> String {
    format!("{value}/100")
}

/// One row per input entry, in input order.
pub fn build_table<T: Comparable>(entries: &[T]) -> Vec<ComparisonRow> {
    entries.iter().map(ComparisonRow::from_comparable).collect()
}
