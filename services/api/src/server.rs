use crate::cli::ServeArgs;
use crate::infra::AppState;
use crate::routes::with_review_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use pillar_review::config::AppConfig;
use pillar_review::error::AppError;
use pillar_review::telemetry;
use pillar_review::workflows::review::{AnalysisConfig, ReportExporter, ReviewService};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::info;

pub(crate) async fn run(mut args: ServeArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;

    if let Some(host) = args.host.take() {
        config.server.host = host;
    }
    if let Some(port) = args.port.take() {
        config.server.port = port;
    }

    telemetry::init(&config.telemetry)?;

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
    };

    let exporter = ReportExporter::new(config.review.output_dir.clone());
    exporter.ensure_output_dir()?;
    let review_service = Arc::new(ReviewService::new(
        AnalysisConfig::with_policy(config.review.narrative_policy),
        exporter,
    ));

    let app = with_review_routes(review_service)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(
        ?config.environment,
        %addr,
        output_dir = %config.review.output_dir.display(),
        policy = config.review.narrative_policy.label(),
        "pillar review service ready"
    );

    axum::serve(listener, app).await?;
    Ok(())
}
