use serde::Serialize;

use phonehub_catalog::{Catalog, Item};

use crate::query::Query;
use crate::usage::PrimaryUse;

/// An item paired with its suitability score for a query.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoredItem {
    #[serde(flatten)]
    pub item: Item,
    pub score: f64,
}

/// Suitability of `item` for `primary_use`.
///
/// A convex combination of the four capability scores, so it stays in `[0, 100]`.
pub fn score(item: &Item, primary_use: PrimaryUse) -> f64 {
    primary_use.weights().apply(item)
}

/// Filter the catalog by the query's hard constraints, then rank by score.
///
/// Ranking is descending by score; equal scores keep catalog order (stable
/// sort). No item passing the filters yields an empty vector.
pub fn recommend(catalog: &Catalog, query: &Query) -> Vec<ScoredItem> {
    let mut ranked: Vec<ScoredItem> = catalog
        .iter()
        .filter(|item| query.admits(item))
        .map(|item| ScoredItem {
            item: item.clone(),
            score: score(item, query.primary_use),
        })
        .collect();

    ranked.sort_by(|a, b| b.score.total_cmp(&a.score));

    tracing::debug!(
        candidates = catalog.len(),
        matched = ranked.len(),
        budget = query.budget,
        primary_use = %query.primary_use,
        "ranked catalog"
    );

    ranked
}
