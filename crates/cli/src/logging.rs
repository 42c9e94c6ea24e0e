//! Tracing subscriber setup.
//!
//! Logs go to stderr so stdout stays clean for command output. `RUST_LOG`
//! wins when set; otherwise the level is `info`, raised to `debug` once the
//! loaded settings enable `debug`.

use tracing_subscriber::{EnvFilter, Registry, fmt, prelude::*, reload};

/// Handle for adjusting the log filter after settings are loaded.
pub struct LogControl {
    handle: reload::Handle<EnvFilter, Registry>,
    from_env: bool,
}

impl LogControl {
    /// Install the global subscriber.
    pub fn init() -> Self {
        let env_filter = EnvFilter::try_from_default_env();
        let from_env = env_filter.is_ok();
        let filter = env_filter.unwrap_or_else(|_| EnvFilter::new("info"));

        let (filter_layer, handle) = reload::Layer::new(filter);
        tracing_subscriber::registry()
            .with(filter_layer)
            .with(fmt::layer().with_writer(std::io::stderr))
            .init();

        Self { handle, from_env }
    }

    /// Switch to debug logging unless `RUST_LOG` chose the level.
    pub fn enable_debug(&self) {
        if self.from_env {
            return;
        }
        if let Err(e) = self.handle.modify(|filter| *filter = EnvFilter::new("debug")) {
            eprintln!("Failed to enable debug logging: {}", e);
        }
    }
}
