use std::fs::{self, OpenOptions};

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;

/// Initialize tracing into the configured log file.
///
/// Output never goes to the terminal: the category screen owns it. `RUST_LOG`
/// overrides `log.level` when set. If the file cannot be opened, logging is
/// skipped with a warning on stderr.
pub fn init_tracing(config: &Config) {
    let log_path = config.log_path();
    if let Some(parent) = log_path.parent() {
        if let Err(err) = fs::create_dir_all(parent) {
            eprintln!(
                "Warning: Failed to create log directory {}: {}",
                parent.display(),
                err
            );
            return;
        }
    }

    let file = match OpenOptions::new().create(true).append(true).open(&log_path) {
        Ok(file) => file,
        Err(err) => {
            eprintln!(
                "Warning: Failed to open log file {}: {}",
                log_path.display(),
                err
            );
            return;
        }
    };

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log.level));

    let file_layer = fmt::layer()
        .with_writer(file)
        .with_ansi(false)
        .with_target(true)
        .with_level(true)
        .with_timer(fmt::time::UtcTime::rfc_3339());

    // A second init (e.g. from tests) keeps the first subscriber.
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(file_layer)
        .try_init();
}
