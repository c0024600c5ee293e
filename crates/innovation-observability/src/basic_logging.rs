use tracing_subscriber::{EnvFilter, Layer, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Console filter shared by every subscriber setup.
///
/// `RUST_LOG` wins when set; otherwise `LOG_LEVEL` (default "info") applies to
/// our crates and noisy dependencies are held at warn.
pub(crate) fn console_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        let log_level = std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string());
        EnvFilter::new(format!(
            "{log_level},tower_http=warn,hyper=warn,tonic=warn,h2=warn,sqlx=warn"
        ))
    })
}

/// Initialize basic console logging.
///
/// Used when the `observability` feature is not compiled in, or when
/// `OBSERVABILITY_ENABLED=false`. All tracing macros still reach the console
/// in a compact format with file and line numbers.
pub fn init_basic_console_logging() {
    let console_layer = fmt::layer()
        .compact()
        .with_target(true)
        .with_thread_ids(false)
        .with_thread_names(false)
        .with_file(true)
        .with_line_number(true)
        .with_filter(console_filter());

    if tracing_subscriber::registry()
        .with(console_layer)
        .try_init()
        .is_err()
    {
        // A subscriber is already installed (tests, repeated init)
        return;
    }

    eprintln!("ℹ️  Observability disabled - console logging only");
}
