use land_referee::catalog::PropertyCatalog;
use land_referee::error::AppError;
use metrics_exporter_prometheus::PrometheusHandle;
use std::path::Path;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Load the property catalog from an operator-supplied CSV, falling back to
/// the built-in sample portfolio.
pub(crate) fn load_catalog(source: Option<&Path>) -> Result<PropertyCatalog, AppError> {
    match source {
        Some(path) => PropertyCatalog::from_path(path).map_err(AppError::from),
        None => Ok(PropertyCatalog::sample_portfolio()),
    }
}
