use sneakpeak::api::router::create_router;
use sneakpeak::config::{AppConfig, LogFormat};
use sneakpeak::db::{self, sneaker_repo};
use sneakpeak::metrics;
use sneakpeak::store::ProfileStore;
use sneakpeak::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config = AppConfig::from_env()?;
    init_tracing(config.log_format);

    let addr = format!("{}:{}", config.host, config.port);

    tracing::info!("Connecting to database...");
    let db = db::init_pool(&config.database_url, config.db_max_connections).await?;
    db::migrate(&db).await?;
    let catalog_size = sneaker_repo::count_sneakers(&db).await?;
    tracing::info!(catalog_size, "Database connected");

    let metrics_handle = metrics::init_metrics()?;

    let profiles = ProfileStore::open(&config.profile_path, &config.default_username).await?;
    let profile = profiles.snapshot().await;
    metrics::record_profile_gauges(profile.owned.len(), profile.wishlist.len());
    tracing::info!(
        path = %profiles.path().display(),
        username = %profile.username,
        "Profile store ready"
    );

    if !config.auth_enabled() {
        tracing::warn!("API_TOKEN not set, /api routes are unauthenticated");
    }

    let state = AppState {
        db,
        config,
        profiles,
        metrics_handle,
    };
    let router = create_router(state);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Server listening on {addr}");
    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
    }
}

fn init_tracing(format: LogFormat) {
    use tracing_subscriber::{fmt, EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

    let registry = tracing_subscriber::registry().with(EnvFilter::from_default_env());
    match format {
        LogFormat::Json => registry.with(fmt::layer().json()).init(),
        LogFormat::Pretty => registry.with(fmt::layer()).init(),
    }
}
