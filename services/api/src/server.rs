use crate::cli::ServeArgs;
use crate::infra::{build_store, AppState};
use crate::routes::with_submission_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use profile_intake::config::AppConfig;
use profile_intake::error::AppError;
use profile_intake::submissions::{SubmissionService, SubmissionStore};
use profile_intake::telemetry;
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
        store_profile: config.store.profile,
    };

    let store = build_store(&config.store)?;
    let existing = store.all()?.len();
    let submission_service: Arc<SubmissionService<dyn SubmissionStore>> = Arc::new(
        SubmissionService::with_search_config(store, config.search),
    );

    let app = with_submission_routes(submission_service)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(
        ?config.environment,
        %addr,
        store_profile = %config.store.profile,
        data_file = ?config.store.data_file,
        existing,
        "profile intake service ready"
    );

    axum::serve(listener, app).await?;
    Ok(())
}
