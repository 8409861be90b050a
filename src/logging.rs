//! Log setup shared by the binary and anything embedding the resolver.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Returns the default filter directive for a `-v` count.
pub fn default_directive(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "date_resolver=info,warn",
        _ => "date_resolver=debug,warn",
    }
}

/// Installs a compact stderr subscriber. `RUST_LOG` takes precedence over `verbosity`.
///
/// Stdout is left to the resolved date line. Calling this more than once keeps the first
/// subscriber.
pub fn init(verbosity: u8) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbosity)));

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .compact(),
        )
        .try_init();
}
