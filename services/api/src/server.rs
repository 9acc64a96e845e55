use crate::cli::ServeArgs;
use crate::infra::{load_judging_profile, AppState};
use crate::routes::with_judging_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use hackathon_judge::config::AppConfig;
use hackathon_judge::error::AppError;
use hackathon_judge::judging::{JudgingState, ProfileHandle};
use hackathon_judge::telemetry;
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

    telemetry::init(&config.telemetry)?;

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(std::sync::atomic::AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
    };

    let profile = load_judging_profile(config.judging.profile_path.as_deref())?;
    let judging = JudgingState::new(ProfileHandle::new(profile))
        .with_podium_size(config.judging.podium_size);

    let app = with_judging_routes(judging)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, "hackathon judge ready");

    axum::serve(listener, app).await?;
    Ok(())
}
