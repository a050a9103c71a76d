use tracing::info;
use tracing_subscriber::{
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter, Registry,
};

/// Log to stderr, filtered by `RUST_LOG` or by build profile when unset.
pub fn init_tracing(service_name: &'static str) {
    let is_release = cfg!(not(debug_assertions));
    let log_level = if is_release { "info" } else { "debug" };

    let filter_layer =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    let fmt_layer = fmt::layer()
        .with_span_events(FmtSpan::CLOSE)
        .with_target(true)
        .with_writer(std::io::stderr)
        .compact();

    // a second init (e.g. from tests) keeps the first subscriber
    let ret = Registry::default()
        .with(filter_layer)
        .with(fmt_layer)
        .try_init();

    if ret.is_ok() {
        info!(service = service_name, "Tracing initialized");
    }
}
