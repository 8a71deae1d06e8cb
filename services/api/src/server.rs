use crate::cli::ServeArgs;
use crate::infra::AppState;
use crate::routes::with_gift_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use gift_engine::config::AppConfig;
use gift_engine::error::AppError;
use gift_engine::gifts::GiftAssessmentEngine;
use gift_engine::telemetry;
use std::sync::atomic::Ordering;
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
    if let Some(threshold) = args.threshold.take() {
        config.scoring.threshold_factor = threshold;
    }

    telemetry::init(&config.telemetry)?;

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(std::sync::atomic::AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
    };

    let engine = Arc::new(GiftAssessmentEngine::motivational(config.scoring));

    let app = with_gift_routes(engine)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(
        ?config.environment,
        %addr,
        threshold_factor = config.scoring.threshold_factor.value(),
        key_policy = ?config.scoring.key_policy,
        "gift assessment engine ready"
    );

    axum::serve(listener, app).await?;
    Ok(())
}
