use actix_web_prom::{PrometheusMetrics, PrometheusMetricsBuilder};
use lazy_static::lazy_static;
use prometheus::{IntCounter, IntCounterVec, Opts};

use crate::{Result, ServerError};

lazy_static! {
    pub static ref GITHUB_API_CALLS: IntCounter =
        IntCounter::new("phonehook_github_api_calls", "GitHub API calls").unwrap();
    pub static ref PIPELINE_RUNS: IntCounterVec = IntCounterVec::new(
        Opts::new("phonehook_pipeline_runs", "Release update pipeline runs"),
        &["outcome"]
    )
    .unwrap();
}

pub(crate) fn build_metrics_handler() -> Result<PrometheusMetrics> {
    let map_err = |e| ServerError::MetricsError { source: e };

    let prometheus = PrometheusMetricsBuilder::new("api")
        .endpoint("/metrics")
        .build()
        .map_err(map_err)?;

    setup_process_metrics(&prometheus)?;

    prometheus
        .registry
        .register(Box::new(GITHUB_API_CALLS.clone()))
        .map_err(|e| map_err(e.into()))?;
    prometheus
        .registry
        .register(Box::new(PIPELINE_RUNS.clone()))
        .map_err(|e| map_err(e.into()))?;

    Ok(prometheus)
}

#[cfg(target_os = "linux")]
fn setup_process_metrics(metrics: &PrometheusMetrics) -> Result<()> {
    use prometheus::process_collector::ProcessCollector;

    metrics
        .registry
        .register(Box::new(ProcessCollector::for_self()))
        .map_err(|e| ServerError::MetricsError { source: e.into() })
}

#[cfg(not(target_os = "linux"))]
fn setup_process_metrics(_metrics: &PrometheusMetrics) -> Result<()> {
    tracing::debug!("Process metrics are only supported on Linux.");
    Ok(())
}
