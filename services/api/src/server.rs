use crate::cli::ServeArgs;
use crate::infra::{load_catalog, AppState};
use crate::routes::with_referee_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use land_referee::config::AppConfig;
use land_referee::error::AppError;
use land_referee::referee::RefereeEngine;
use land_referee::telemetry;
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
    if let Some(catalog) = args.catalog.take() {
        config.catalog.source = Some(catalog);
    }

    telemetry::init(&config.telemetry)?;

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(std::sync::atomic::AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
    };

    let catalog = load_catalog(config.catalog.source.as_deref())?;
    info!(properties = catalog.records().len(), "property catalog loaded");
    let engine = Arc::new(RefereeEngine::new(Arc::new(catalog)));

    let app = with_referee_routes(engine)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, "land referee service ready");

    axum::serve(listener, app).await?;
    Ok(())
}
