//! Tracing initialization.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

static INIT: Once = Once::new();

/// Environment variable holding the filter directives.
pub const LOG_ENV: &str = "CONFLUENT_LOG";

/// Initialize logging.
///
/// Reads `CONFLUENT_LOG` for per-crate levels, e.g.
/// `CONFLUENT_LOG=confluent_resolve=debug,confluent_render=info`.
/// Falls back to `confluent=info` if unset or invalid.
///
/// Idempotent: only the first call installs a subscriber. Output goes to
/// stderr so generated files piped to stdout stay clean.
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_env(LOG_ENV)
            .unwrap_or_else(|_| EnvFilter::new("confluent=info"));

        tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(true),
            )
            .with(filter)
            .init();
    });
}
