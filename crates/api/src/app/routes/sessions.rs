use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Extension, Path, Query as UrlQuery},
    http::{header, StatusCode},
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use chrono::Utc;

use phonehub_core::Entity;
use phonehub_export::{export, ExportFormat};
use phonehub_recommend::{build_table, is_blank, pick_for_comparison, Query};
use phonehub_session::{focus, SessionStore};

use crate::app::{dto, errors};
use crate::app::services::AppServices;

pub fn router() -> Router {
    Router::new()
        .route("/", post(create_session))
        .route("/:id", get(get_session).delete(end_session))
        .route("/:id/recommendations", post(run_recommendations))
        .route("/:id/selection", post(select_item))
        .route("/:id/focus", get(get_focus))
        .route("/:id/comparison", post(compare_items))
        .route("/:id/export", get(export_recommendations))
        .route("/:id/feedback", post(submit_feedback))
}

pub async fn create_session(Extension(services): Extension<Arc<AppServices>>) -> axum::response::Response {
    let session = services.sessions().create();
    (
        StatusCode::CREATED,
        Json(serde_json::json!({
            "id": session.id().to_string(),
            "started_at": session.started_at(),
        })),
    )
        .into_response()
}

pub async fn get_session(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
) -> axum::response::Response {
    let id = match errors::parse_session_id(&id) {
        Ok(v) => v,
        Err(resp) => return resp,
    };
    match services.sessions().get(id) {
        Some(session) => Json(session).into_response(),
        None => errors::session_not_found(id),
    }
}

pub async fn end_session(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
) -> axum::response::Response {
    let id = match errors::parse_session_id(&id) {
        Ok(v) => v,
        Err(resp) => return resp,
    };
    if services.sessions().remove(id) {
        StatusCode::NO_CONTENT.into_response()
    } else {
        errors::session_not_found(id)
    }
}

pub async fn run_recommendations(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
    body: Result<Json<Query>, JsonRejection>,
) -> axum::response::Response {
    let id = match errors::parse_session_id(&id) {
        Ok(v) => v,
        Err(resp) => return resp,
    };
    let query = match errors::json_body(body) {
        Ok(v) => v,
        Err(resp) => return resp,
    };
    if let Err(e) = query.validate() {
        return errors::domain_error_to_response(e);
    }

    let Some(ranked) = services.run_query(id, query.clone()) else {
        return errors::session_not_found(id);
    };

    tracing::info!(
        session_id = %id,
        matched = ranked.len(),
        primary_use = %query.primary_use,
        "recommendations served"
    );

    Json(dto::RecommendationsResponse::new(&query, &ranked, services.top_n())).into_response()
}

pub async fn select_item(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
    body: Result<Json<dto::SelectItemRequest>, JsonRejection>,
) -> axum::response::Response {
    let id = match errors::parse_session_id(&id) {
        Ok(v) => v,
        Err(resp) => return resp,
    };
    let body = match errors::json_body(body) {
        Ok(v) => v,
        Err(resp) => return resp,
    };
    if is_blank(&body.name) {
        return errors::json_error(StatusCode::BAD_REQUEST, "validation_error", "name must not be empty");
    }
    if let Some(query) = &body.query {
        if let Err(e) = query.validate() {
            return errors::domain_error_to_response(e);
        }
    }

    let name = body.name.trim().to_string();
    let selected = services.sessions().update(id, |session| {
        session.select_item(name.clone());
        if let Some(query) = body.query {
            session.remember_query(query);
        }
    });

    match selected {
        Some(()) => Json(dto::SelectionResponse { selected_item: name }).into_response(),
        None => errors::session_not_found(id),
    }
}

pub async fn get_focus(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
) -> axum::response::Response {
    let id = match errors::parse_session_id(&id) {
        Ok(v) => v,
        Err(resp) => return resp,
    };
    let Some(session) = services.sessions().get(id) else {
        return errors::session_not_found(id);
    };

    Json(dto::FocusResponse {
        focus: focus(services.catalog(), &session),
    })
    .into_response()
}

pub async fn compare_items(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
    body: Result<Json<dto::CompareRequest>, JsonRejection>,
) -> axum::response::Response {
    let id = match errors::parse_session_id(&id) {
        Ok(v) => v,
        Err(resp) => return resp,
    };
    let body = match errors::json_body(body) {
        Ok(v) => v,
        Err(resp) => return resp,
    };
    let Some(session) = services.sessions().get(id) else {
        return errors::session_not_found(id);
    };

    let ranked = services.current_ranking(&session);
    let picked = match pick_for_comparison(services.catalog(), &ranked, &body.names) {
        Ok(v) => v,
        Err(e) => return errors::domain_error_to_response(e),
    };

    Json(dto::ComparisonResponse {
        rows: build_table(&picked),
    })
    .into_response()
}

pub async fn export_recommendations(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
    UrlQuery(params): UrlQuery<dto::ExportParams>,
) -> axum::response::Response {
    let id = match errors::parse_session_id(&id) {
        Ok(v) => v,
        Err(resp) => return resp,
    };
    let format = match params.format.as_deref() {
        Some(raw) => match raw.parse::<ExportFormat>() {
            Ok(f) => f,
            Err(e) => return errors::export_error_to_response(e),
        },
        None => ExportFormat::default(),
    };
    let Some(session) = services.sessions().get(id) else {
        return errors::session_not_found(id);
    };

    let ranked = services.current_ranking(&session);
    let file = match export(&ranked, format, Utc::now()) {
        Ok(f) => f,
        Err(e) => return errors::export_error_to_response(e),
    };

    tracing::info!(session_id = %id, file = %file.file_name, rows = ranked.len(), "export served");

    (
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, file.mime.to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{}\"", file.file_name),
            ),
        ],
        file.body,
    )
        .into_response()
}

pub async fn submit_feedback(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
    body: Result<Json<dto::FeedbackRequest>, JsonRejection>,
) -> axum::response::Response {
    let id = match errors::parse_session_id(&id) {
        Ok(v) => v,
        Err(resp) => return resp,
    };
    let body = match errors::json_body(body) {
        Ok(v) => v,
        Err(resp) => return resp,
    };

    let feedback = services
        .sessions()
        .update(id, |session| session.submit_feedback(body.rating, body.comment, Utc::now()).clone());

    match feedback {
        Some(feedback) => (StatusCode::CREATED, Json(feedback)).into_response(),
        None => errors::session_not_found(id),
    }
}
