use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde_json::json;

use phonehub_core::{DomainError, SessionId};
use phonehub_export::ExportError;

pub fn domain_error_to_response(err: DomainError) -> axum::response::Response {
    match err {
        DomainError::Validation(msg) => json_error(StatusCode::BAD_REQUEST, "validation_error", msg),
        DomainError::InvalidId(msg) => json_error(StatusCode::BAD_REQUEST, "invalid_id", msg),
        DomainError::NotFound => json_error(StatusCode::NOT_FOUND, "not_found", "not found"),
        DomainError::InvariantViolation(msg) => {
            json_error(StatusCode::INTERNAL_SERVER_ERROR, "invariant_violation", msg)
        }
    }
}

pub fn export_error_to_response(err: ExportError) -> axum::response::Response {
    match err {
        ExportError::UnknownFormat(_) => {
            json_error(StatusCode::BAD_REQUEST, "invalid_format", err.to_string())
        }
        other => {
            tracing::error!(error = %other, "export failed");
            json_error(StatusCode::INTERNAL_SERVER_ERROR, "export_error", other.to_string())
        }
    }
}

pub fn json_error(
    status: StatusCode,
    code: &'static str,
    message: impl Into<String>,
) -> axum::response::Response {
    (
        status,
        axum::Json(json!({
            "error": code,
            "message": message.into(),
        })),
    )
        .into_response()
}

/// Unwrap a JSON body, turning any rejection (bad syntax, wrong types,
/// out-of-range integers, missing content type) into a 400 JSON error.
pub fn json_body<T>(
    body: Result<Json<T>, JsonRejection>,
) -> Result<T, axum::response::Response> {
    body.map(|Json(value)| value)
        .map_err(|rej| json_error(StatusCode::BAD_REQUEST, "validation_error", rej.body_text()))
}

pub fn parse_session_id(s: &str) -> Result<SessionId, axum::response::Response> {
    s.parse()
        .map_err(|_| json_error(StatusCode::BAD_REQUEST, "invalid_id", "invalid session id"))
}

pub fn session_not_found(id: SessionId) -> axum::response::Response {
    json_error(
        StatusCode::NOT_FOUND,
        "not_found",
        format!("session {id} not found"),
    )
}
