use crate::infra::AppState;
use crate::pages;
use axum::extract::{Path, Query};
use axum::http::{header, StatusCode};
use axum::response::{Html, IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Extension, Form, Json};
use pillar_review::error::AppError;
use pillar_review::workflows::review::{
    review_router, ReviewForm, ReviewService, ReviewServiceError,
};
use serde_json::json;
use std::io::ErrorKind;
use std::sync::Arc;
use tracing::{error, warn};

pub(crate) fn with_review_routes(service: Arc<ReviewService>) -> axum::Router {
    review_router(service.clone())
        .route("/", get(form_page))
        .route("/review/analysis", post(analysis_page))
        .route("/review/chart", get(chart_endpoint))
        .route("/review/export", post(export_page))
        .route("/downloads/:file", get(download_endpoint))
        .route("/health", get(healthcheck))
        .route("/ready", get(readiness_endpoint))
        .route("/metrics", get(metrics_endpoint))
        .layer(Extension(service))
}

pub(crate) async fn form_page(Extension(service): Extension<Arc<ReviewService>>) -> Html<String> {
    Html(pages::form_page(service.default_policy()))
}

pub(crate) async fn analysis_page(
    Extension(service): Extension<Arc<ReviewService>>,
    Form(form): Form<ReviewForm>,
) -> Response {
    match service.analyze(&form) {
        Ok(outcome) => Html(pages::analysis_page(&outcome)).into_response(),
        Err(err) => (
            StatusCode::BAD_REQUEST,
            Html(pages::error_page(&err.to_string())),
        )
            .into_response(),
    }
}

pub(crate) async fn export_page(
    Extension(service): Extension<Arc<ReviewService>>,
    Form(form): Form<ReviewForm>,
) -> Response {
    match service.export(&form) {
        Ok((outcome, artifacts)) => Html(pages::export_page(&outcome, &artifacts)).into_response(),
        Err(ReviewServiceError::Input(err)) => (
            StatusCode::BAD_REQUEST,
            Html(pages::error_page(&err.to_string())),
        )
            .into_response(),
        Err(ReviewServiceError::Export(err)) => {
            error!(error = %err, "review export failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Html(pages::error_page(&err.to_string())),
            )
                .into_response()
        }
    }
}

pub(crate) async fn chart_endpoint(
    Extension(service): Extension<Arc<ReviewService>>,
    Query(form): Query<ReviewForm>,
) -> Result<Response, AppError> {
    let png = service.chart_png(&form)?;
    Ok(([(header::CONTENT_TYPE, "image/png")], png).into_response())
}

pub(crate) async fn download_endpoint(
    Extension(service): Extension<Arc<ReviewService>>,
    Path(file): Path<String>,
) -> Response {
    let Some(path) = service.exporter().resolve_artifact(&file) else {
        warn!(file = %file, "rejected download path");
        return StatusCode::NOT_FOUND.into_response();
    };

    match tokio::fs::read(&path).await {
        Ok(bytes) => {
            let mime = mime_guess::from_path(&path).first_or_octet_stream();
            (
                [
                    (header::CONTENT_TYPE, mime.essence_str().to_string()),
                    (
                        header::CONTENT_DISPOSITION,
                        format!("attachment; filename=\"{file}\""),
                    ),
                ],
                bytes,
            )
                .into_response()
        }
        Err(err) if err.kind() == ErrorKind::NotFound => StatusCode::NOT_FOUND.into_response(),
        Err(err) => AppError::Io(err).into_response(),
    }
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(std::sync::atomic::Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body};
    use axum::http::Request;
    use metrics_exporter_prometheus::PrometheusBuilder;
    use pillar_review::workflows::review::{AnalysisConfig, NarrativePolicy, ReportExporter};
    use std::sync::atomic::AtomicBool;
    use tower::ServiceExt;

    const GOVERNANCE_FORM: &str =
        "pillar=governance&total=10&not_started=1&in_progress=3&completed=6&green=6&amber=3&red=1&policy=thresholds";

    fn app(dir: &std::path::Path, ready: bool) -> axum::Router {
        let exporter = ReportExporter::new(dir);
        exporter.ensure_output_dir().expect("output dir");
        let service = Arc::new(ReviewService::new(
            AnalysisConfig::with_policy(NarrativePolicy::Thresholds),
            exporter,
        ));
        let state = AppState {
            readiness: Arc::new(AtomicBool::new(ready)),
            metrics: Arc::new(PrometheusBuilder::new().build_recorder().handle()),
        };
        with_review_routes(service).layer(Extension(state))
    }

    fn form_post(uri: &str, body: &str) -> Request<Body> {
        Request::post(uri)
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(Body::from(body.to_string()))
            .expect("request builds")
    }

    async fn body_text(response: Response) -> String {
        let bytes = to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("body reads");
        String::from_utf8_lossy(&bytes).into_owned()
    }

    #[tokio::test]
    async fn form_page_renders() {
        let dir = tempfile::tempdir().expect("tempdir");
        let response = app(dir.path(), true)
            .oneshot(Request::get("/").body(Body::empty()).expect("request"))
            .await
            .expect("response");

        assert_eq!(response.status(), StatusCode::OK);
        assert!(body_text(response).await.contains("Generate Analysis"));
    }

    #[tokio::test]
    async fn analysis_page_shows_summary_and_chart_link() {
        let dir = tempfile::tempdir().expect("tempdir");
        let response = app(dir.path(), true)
            .oneshot(form_post("/review/analysis", GOVERNANCE_FORM))
            .await
            .expect("response");

        assert_eq!(response.status(), StatusCode::OK);
        let html = body_text(response).await;
        assert!(html.contains("Effective Governance Performance Summary"));
        assert!(html.contains("Green: 60.0%"));
        assert!(html.contains("/review/chart?pillar=governance"));
        assert!(html.contains("2025 Outlook"));
    }

    #[tokio::test]
    async fn analysis_page_rejects_unknown_pillar() {
        let dir = tempfile::tempdir().expect("tempdir");
        let response = app(dir.path(), true)
            .oneshot(form_post("/review/analysis", "pillar=space&total=1"))
            .await
            .expect("response");

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert!(body_text(response).await.contains("space"));
    }

    #[tokio::test]
    async fn cleared_number_fields_read_as_zero() {
        let dir = tempfile::tempdir().expect("tempdir");
        let router = app(dir.path(), true);

        let response = router
            .clone()
            .oneshot(form_post(
                "/review/analysis",
                "pillar=governance&total=10&not_started=&in_progress=&completed=6&green=6&amber=3&red=&policy=thresholds",
            ))
            .await
            .expect("response");
        assert_eq!(response.status(), StatusCode::OK);
        let html = body_text(response).await;
        assert!(html.contains("<tr><td>Not Started</td><td>0</td></tr>"));
        assert!(html.contains("<tr><td>Red Projects (0-59%)</td><td>0</td></tr>"));

        let response = router
            .oneshot(
                Request::get("/review/chart?pillar=economy&total=4&green=&amber=1&red=2")
                    .body(Body::empty())
                    .expect("request"),
            )
            .await
            .expect("response");
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn chart_endpoint_returns_png() {
        let dir = tempfile::tempdir().expect("tempdir");
        let response = app(dir.path(), true)
            .oneshot(
                Request::get("/review/chart?pillar=economy&total=4&green=1&amber=1&red=2")
                    .body(Body::empty())
                    .expect("request"),
            )
            .await
            .expect("response");

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.headers()[header::CONTENT_TYPE], "image/png");
        let bytes = to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("body");
        assert!(bytes.starts_with(&[0x89, b'P', b'N', b'G']));
    }

    #[tokio::test]
    async fn export_page_links_downloads_that_resolve() {
        let dir = tempfile::tempdir().expect("tempdir");
        let router = app(dir.path(), true);

        let response = router
            .clone()
            .oneshot(form_post("/review/export", GOVERNANCE_FORM))
            .await
            .expect("response");
        assert_eq!(response.status(), StatusCode::OK);
        let html = body_text(response).await;
        assert!(html.contains("/downloads/Effective_Governance_summary.pptx"));
        assert!(dir.path().join("Effective_Governance_chart.png").exists());

        let download = router
            .oneshot(
                Request::get("/downloads/Effective_Governance_summary.png")
                    .body(Body::empty())
                    .expect("request"),
            )
            .await
            .expect("response");
        assert_eq!(download.status(), StatusCode::OK);
        assert_eq!(download.headers()[header::CONTENT_TYPE], "image/png");
    }

    #[tokio::test]
    async fn download_rejects_traversal_and_missing_files() {
        let dir = tempfile::tempdir().expect("tempdir");
        let router = app(dir.path(), true);

        for uri in ["/downloads/..%2Fsecret.txt", "/downloads/Thriving_Economy_chart.png"] {
            let response = router
                .clone()
                .oneshot(Request::get(uri).body(Body::empty()).expect("request"))
                .await
                .expect("response");
            assert_eq!(response.status(), StatusCode::NOT_FOUND, "{uri}");
        }
    }

    #[tokio::test]
    async fn readiness_reflects_flag() {
        let dir = tempfile::tempdir().expect("tempdir");
        let response = app(dir.path(), false)
            .oneshot(Request::get("/ready").body(Body::empty()).expect("request"))
            .await
            .expect("response");
        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);

        let response = app(dir.path(), true)
            .oneshot(Request::get("/health").body(Body::empty()).expect("request"))
            .await
            .expect("response");
        assert_eq!(response.status(), StatusCode::OK);
    }
}
