pub mod builders;
pub mod fake_backend;

use std::sync::Once;
use std::time::Duration;

use tracing_subscriber::{fmt, EnvFilter};

static TRACING: Once = Once::new();

/// Per-test log capture for godeploy's `tracing` output.
///
/// Output goes through the test writer, so it only shows up for failing
/// tests or with `--nocapture`. The filter is read from `GODEPLOY_TEST_LOG`,
/// then `RUST_LOG`, and defaults to `warn`.
pub fn init_tracing() {
    TRACING.call_once(|| {
        let filter = EnvFilter::try_from_env("GODEPLOY_TEST_LOG")
            .or_else(|_| EnvFilter::try_from_default_env())
            .unwrap_or_else(|_| EnvFilter::new("warn"));

        fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .with_target(false)
            .init();
    });
}

/// Await `fut`, failing the test if it takes longer than five seconds.
pub async fn with_timeout<F, T>(fut: F) -> T
where
    F: std::future::Future<Output = T>,
{
    tokio::time::timeout(Duration::from_secs(5), fut)
        .await
        .expect("operation did not finish within 5s")
}
