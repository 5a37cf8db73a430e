use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Directives used when `RUST_LOG` is unset or unparseable. Per-statement SQL
/// logs from the store stay off unless asked for.
pub const DEFAULT_DIRECTIVES: &str = "info,sea_orm=warn,sqlx=warn";

/// Build the filter from a raw `RUST_LOG` value, falling back to
/// [`DEFAULT_DIRECTIVES`].
pub fn filter_from(raw: Option<&str>) -> EnvFilter {
    raw.and_then(|directives| EnvFilter::try_new(directives).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_DIRECTIVES))
}

/// Install the JSON stdout subscriber. Later calls are no-ops.
pub fn init_tracing() {
    let raw = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    let _ = tracing_subscriber::registry()
        .with(filter_from(raw.as_deref()))
        .with(
            fmt::layer()
                .json()
                .flatten_event(true)
                .with_current_span(true)
                .with_span_list(false),
        )
        .try_init();
}
