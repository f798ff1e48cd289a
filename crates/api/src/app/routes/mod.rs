use axum::{routing::get, Router};

pub mod catalog;
pub mod sessions;
pub mod system;

/// Router for every endpoint except `/health`.
pub fn router() -> Router {
    Router::new()
        .route("/search", get(catalog::search_items))
        .nest("/catalog", catalog::router())
        .nest("/sessions", sessions::router())
}
