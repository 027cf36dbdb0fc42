//! Console logging setup.
//!
//! Filtering follows `RUST_LOG`, e.g. `RUST_LOG=freezetable=debug` to see
//! layout and scroll events. Without it only warnings are printed.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    let console_layer = fmt::layer()
        .with_target(true)
        .with_line_number(true)
        .with_filter(filter);

    // A second init (tests, hot reload) keeps the first subscriber.
    let _ = tracing_subscriber::registry().with(console_layer).try_init();
}
