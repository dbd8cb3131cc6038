pub mod api;
pub mod config;
pub mod db;
pub mod errors;
pub mod metrics;
pub mod models;
pub mod store;
pub mod valuation;

use crate::config::AppConfig;
use crate::store::ProfileStore;

#[derive(Clone)]
pub struct AppState {
    /// Hosted catalog.
    pub db: sqlx::PgPool,
    pub config: AppConfig,
    /// The device-local profile.
    pub profiles: ProfileStore,
    pub metrics_handle: metrics_exporter_prometheus::PrometheusHandle,
}
