use metrics::{counter, gauge};
use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};

/// Install the Prometheus exporter and register all application metrics.
/// Returns a `PrometheusHandle` whose `render()` method produces the
/// text/plain Prometheus scrape payload.
pub fn init_metrics() -> anyhow::Result<PrometheusHandle> {
    let handle = PrometheusBuilder::new().install_recorder()?;

    // Pre-register counters so they appear even before the first increment.
    counter!("valuations_total").absolute(0);
    counter!("comparisons_total").absolute(0);
    counter!("wishlist_toggles_total").absolute(0);
    counter!("portfolio_items_added_total").absolute(0);
    counter!("catalog_mutations_total").absolute(0);

    gauge!("portfolio_items").set(0.0);
    gauge!("wishlist_size").set(0.0);

    Ok(handle)
}

/// A handle that renders without being installed as the global recorder.
pub fn detached_handle() -> PrometheusHandle {
    PrometheusBuilder::new().build_recorder().handle()
}

/// Record the profile's current shape.
pub fn record_profile_gauges(portfolio_items: usize, wishlist_size: usize) {
    gauge!("portfolio_items").set(portfolio_items as f64);
    gauge!("wishlist_size").set(wishlist_size as f64);
}
