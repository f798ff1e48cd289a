use std::sync::Arc;

use axum::{
    extract::{Extension, Query as UrlQuery},
    response::IntoResponse,
    routing::get,
    Json, Router,
};

use phonehub_recommend::{is_blank, search};

use crate::app::dto;
use crate::app::services::AppServices;

pub fn router() -> Router {
    Router::new()
        .route("/", get(list_items))
        .route("/brands", get(list_brands))
        .route("/brands/distribution", get(brand_distribution))
}

pub async fn list_items(Extension(services): Extension<Arc<AppServices>>) -> axum::response::Response {
    let items = services.catalog().items();
    Json(dto::CatalogResponse {
        count: items.len(),
        items,
    })
    .into_response()
}

pub async fn list_brands(Extension(services): Extension<Arc<AppServices>>) -> impl IntoResponse {
    Json(dto::BrandsResponse {
        brands: services.catalog().brand_options(),
    })
}

pub async fn brand_distribution(Extension(services): Extension<Arc<AppServices>>) -> impl IntoResponse {
    Json(dto::BrandDistributionResponse {
        distribution: services.catalog().brand_distribution(),
    })
}

pub async fn search_items(
    Extension(services): Extension<Arc<AppServices>>,
    UrlQuery(params): UrlQuery<dto::SearchParams>,
) -> axum::response::Response {
    let text = params.q.unwrap_or_default();
    if is_blank(&text) {
        return Json(dto::SearchResponse {
            searched: false,
            count: 0,
            items: Vec::new(),
        })
        .into_response();
    }

    let items = search(services.catalog(), &text);
    tracing::debug!(query = %text, matches = items.len(), "catalog search");

    Json(dto::SearchResponse {
        searched: true,
        count: items.len(),
        items,
    })
    .into_response()
}
