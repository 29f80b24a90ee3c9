use meno_assess::assessment::AssessmentEngine;
use meno_assess::config::AssessmentConfig;
use meno_assess::error::AppError;
use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;
use tracing::info;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Engine built from the configured (or built-in) scoring thresholds.
pub(crate) fn load_engine(config: &AssessmentConfig) -> Result<AssessmentEngine, AppError> {
    let thresholds = config.thresholds()?;
    info!(
        thresholds_version = %thresholds.version,
        custom = config.thresholds_path.is_some(),
        "scoring thresholds loaded"
    );
    Ok(AssessmentEngine::new(thresholds))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn default_config_uses_builtin_thresholds() {
        let engine = load_engine(&AssessmentConfig::default()).expect("engine builds");
        assert_eq!(engine.thresholds().version, "2024.1");
    }

    #[test]
    fn unreadable_thresholds_surface_as_config_error() {
        let config = AssessmentConfig {
            thresholds_path: Some(PathBuf::from("/nonexistent/thresholds.json")),
        };

        let err = load_engine(&config).expect_err("missing file");
        assert!(matches!(err, AppError::Config(_)));
    }
}
