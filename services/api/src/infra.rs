use hackathon_judge::error::AppError;
use hackathon_judge::judging::{JudgingConfig, JudgingProfile};
use metrics_exporter_prometheus::PrometheusHandle;
use std::path::Path;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;
use tracing::info;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Reads a JSON judging configuration from `path`, or falls back to the built-in defaults.
pub(crate) fn load_judging_profile(path: Option<&Path>) -> Result<JudgingProfile, AppError> {
    let config = match path {
        Some(path) => {
            let raw = std::fs::read_to_string(path)?;
            let config: JudgingConfig = serde_json::from_str(&raw)?;
            info!(path = %path.display(), "loaded judging profile");
            config
        }
        None => JudgingConfig::default(),
    };

    Ok(JudgingProfile::from_config(config)?)
}
