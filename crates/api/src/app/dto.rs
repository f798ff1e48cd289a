use serde::{Deserialize, Serialize};

use phonehub_catalog::{BrandCount, Item};
use phonehub_recommend::{explain, ComparisonRow, Query, Reason, ScoredItem};
use phonehub_session::{Focus, Rating};

// -------------------------
// Request DTOs
// -------------------------

#[derive(Debug, Deserialize)]
pub struct SelectItemRequest {
    pub name: String,
    /// Replaces the session's query context when present.
    pub query: Option<Query>,
}

#[derive(Debug, Deserialize)]
pub struct CompareRequest {
    /// Empty or missing compares the top of the current ranking.
    #[serde(default)]
    pub names: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub struct FeedbackRequest {
    #[serde(default)]
    pub rating: Rating,
    pub comment: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct SearchParams {
    pub q: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ExportParams {
    pub format: Option<String>,
}

// -------------------------
// Response DTOs
// -------------------------

#[derive(Debug, Serialize)]
pub struct CatalogResponse<'a> {
    pub count: usize,
    pub items: &'a [Item],
}

#[derive(Debug, Serialize)]
pub struct BrandsResponse {
    pub brands: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct BrandDistributionResponse {
    pub distribution: Vec<BrandCount>,
}

/// `searched` is false for a blank query; the caller shows no result section.
#[derive(Debug, Serialize)]
pub struct SearchResponse<'a> {
    pub searched: bool,
    pub count: usize,
    pub items: Vec<&'a Item>,
}

#[derive(Debug, Serialize)]
pub struct RankedRecommendation<'a> {
    pub rank: usize,
    #[serde(flatten)]
    pub scored: &'a ScoredItem,
    pub reasons: Vec<Reason>,
}

/// The whole match count, with only the top results explained.
#[derive(Debug, Serialize)]
pub struct RecommendationsResponse<'a> {
    pub filters: Vec<String>,
    pub count: usize,
    pub recommendations: Vec<RankedRecommendation<'a>>,
}

impl<'a> RecommendationsResponse<'a> {
    pub fn new(query: &Query, ranked: &'a [ScoredItem], top_n: usize) -> Self {
        let recommendations = ranked
            .iter()
            .take(top_n)
            .enumerate()
            .map(|(i, scored)| RankedRecommendation {
                rank: i + 1,
                scored,
                reasons: explain(&scored.item, query.primary_use, query.budget),
            })
            .collect();

        Self {
            filters: query.active_filters(),
            count: ranked.len(),
            recommendations,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct SelectionResponse {
    pub selected_item: String,
}

#[derive(Debug, Serialize)]
pub struct FocusResponse<'a> {
    pub focus: Option<Focus<'a>>,
}

#[derive(Debug, Serialize)]
pub struct ComparisonResponse {
    pub rows: Vec<ComparisonRow>,
}
