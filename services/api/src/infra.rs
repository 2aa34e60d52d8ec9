use frailty_screen::config::ScoringConfig;
use frailty_screen::eligibility::EligibilityEngine;
use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;
use std::time::Instant;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
    pub(crate) started_at: Instant,
}

impl AppState {
    pub(crate) fn new(metrics: PrometheusHandle) -> Self {
        Self {
            readiness: Arc::new(AtomicBool::new(false)),
            metrics: Arc::new(metrics),
            started_at: Instant::now(),
        }
    }

    pub(crate) fn uptime_seconds(&self) -> f64 {
        self.started_at.elapsed().as_secs_f64()
    }
}

pub(crate) fn build_engine(seed: Option<u64>) -> Arc<EligibilityEngine> {
    Arc::new(EligibilityEngine::from_config(&ScoringConfig {
        noise_seed: seed,
    }))
}
