//! Tracing initialization and subscriber setup.
//!
//! Configures the tracing subscriber with an environment filter and a
//! file-destination fmt layer. Logs go to a file rather than stdout because
//! stdout belongs to the full-screen renderer; interleaving log lines with
//! cursor-addressed output would corrupt the display.

use std::fs::OpenOptions;
use std::sync::Arc;

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::infrastructure::paths;
use crate::Config;

/// Initializes the tracing subscriber with file-based log output.
///
/// The filter level comes from `RUST_LOG` when set, falling back to
/// `config.trace_level` and then `"info"`. Log lines are appended to
/// `photofeed.log` in the [data directory](crate::infrastructure::data_dir)
/// with ANSI styling disabled.
///
/// Initialization is best-effort and idempotent: if the data directory or
/// log file cannot be created, or a subscriber is already installed, the
/// call returns silently and the widget runs without log output.
pub fn init_tracing(config: &Config) {
    let level = config
        .trace_level
        .clone()
        .unwrap_or_else(|| "info".to_string());

    let data_dir = paths::data_dir();
    if std::fs::create_dir_all(&data_dir).is_err() {
        return;
    }

    let Ok(log_file) = OpenOptions::new()
        .create(true)
        .append(true)
        .open(data_dir.join("photofeed.log"))
    else {
        return;
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let subscriber = tracing_subscriber::registry().with(filter).with(
        fmt::layer()
            .with_writer(Arc::new(log_file))
            .with_ansi(false)
            .with_target(false),
    );

    let _ = subscriber.try_init();
}
