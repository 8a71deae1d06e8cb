use gift_engine::config::parse_threshold;
use gift_engine::gifts::ThresholdFactor;
use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

pub(crate) fn parse_threshold_arg(raw: &str) -> Result<ThresholdFactor, String> {
    parse_threshold(raw).map_err(|err| err.to_string())
}
