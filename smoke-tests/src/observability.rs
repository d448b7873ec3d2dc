use std::sync::Once;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Install the global subscriber for the binary.
///
/// `RUST_LOG` wins over `log_level`. Logs are written to stderr so stdout
/// carries only the transcript.
pub fn init_tracing(log_level: &str, json: bool) {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false);

    let registry = tracing_subscriber::registry().with(env_filter);

    if json {
        registry
            .with(fmt_layer.json().flatten_event(true))
            .init();
    } else {
        registry.with(fmt_layer).init();
    }
}

static INIT: Once = Once::new();

/// Initialize tracing for tests (only once).
pub fn init_test_tracing() {
    INIT.call_once(|| {
        tracing_subscriber::fmt()
            .with_env_filter("info,smoke_tests=debug")
            .with_test_writer()
            .try_init()
            .ok();
    });
}
