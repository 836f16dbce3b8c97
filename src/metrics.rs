use std::sync::OnceLock;

use metrics::{counter, gauge};
use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};

static HANDLE: OnceLock<PrometheusHandle> = OnceLock::new();

/// Install the Prometheus exporter and register all application metrics.
/// Returns a `PrometheusHandle` whose `render()` method produces the
/// text/plain Prometheus scrape payload.
///
/// Only one recorder can exist per process, so repeated calls (e.g. from
/// integration tests building the app per test) reuse the first handle.
pub fn init_metrics() -> PrometheusHandle {
    HANDLE
        .get_or_init(|| {
            let handle = PrometheusBuilder::new()
                .install_recorder()
                .expect("failed to install Prometheus recorder");

            // Pre-register counters so they appear even before the first
            // increment.
            counter!("users_registered_total").absolute(0);
            counter!("logins_total").absolute(0);
            counter!("friend_edges_total").absolute(0);
            counter!("bets_posted_total").absolute(0);
            counter!("feed_requests_total").absolute(0);
            counter!("repo_searches_total").absolute(0);
            counter!("repo_search_failures_total").absolute(0);

            gauge!("registered_users").set(0.0);

            handle
        })
        .clone()
}
