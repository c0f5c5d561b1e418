//! Subscriber installation for the CLI.

use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Filter variable read before `RUST_LOG`.
pub const LOG_ENV: &str = "STDHL_LOG";

/// Install a hierarchical stderr subscriber.
///
/// Does nothing unless `STDHL_LOG` or `RUST_LOG` is set. Safe to call more
/// than once; only the first call has any effect.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{prelude::*, EnvFilter};
        use tracing_tree::HierarchicalLayer;

        let filter = match EnvFilter::try_from_env(LOG_ENV) {
            Ok(filter) => filter,
            Err(_) if std::env::var_os("RUST_LOG").is_some() => EnvFilter::from_default_env(),
            Err(_) => return,
        };

        tracing_subscriber::registry()
            .with(
                HierarchicalLayer::new(2)
                    .with_targets(true)
                    .with_indent_lines(true),
            )
            .with(filter)
            .init();
    });
}
