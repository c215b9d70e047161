use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
    Json, Router,
};
use serde_json::json;
use tracing::error;

use super::domain::ReviewForm;
use super::service::{ReviewService, ReviewServiceError};

/// JSON endpoints for analysis and export.
pub fn review_router(service: Arc<ReviewService>) -> Router {
    Router::new()
        .route("/api/v1/review/analysis", post(analysis_handler))
        .route("/api/v1/review/export", post(export_handler))
        .with_state(service)
}

pub(crate) async fn analysis_handler(
    State(service): State<Arc<ReviewService>>,
    Json(form): Json<ReviewForm>,
) -> Response {
    match service.analyze(&form) {
        Ok(outcome) => (StatusCode::OK, Json(outcome.view())).into_response(),
        Err(err) => error_response(StatusCode::BAD_REQUEST, err.to_string()),
    }
}

pub(crate) async fn export_handler(
    State(service): State<Arc<ReviewService>>,
    Json(form): Json<ReviewForm>,
) -> Response {
    match service.export(&form) {
        Ok((outcome, artifacts)) => {
            let payload = json!({
                "files": artifacts.file_names(),
                "review": outcome.view(),
            });
            (StatusCode::CREATED, Json(payload)).into_response()
        }
        Err(ReviewServiceError::Input(err)) => {
            error_response(StatusCode::BAD_REQUEST, err.to_string())
        }
        Err(ReviewServiceError::Export(err)) => {
            error!(error = %err, "review export failed");
            error_response(StatusCode::INTERNAL_SERVER_ERROR, err.to_string())
        }
    }
}

fn error_response(status: StatusCode, message: String) -> Response {
    (status, Json(json!({ "error": message }))).into_response()
}
