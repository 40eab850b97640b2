use std::fs::{self, OpenOptions};
use std::path::Path;
use std::sync::Mutex;

use tracing_subscriber::{fmt::layer, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Log to a file; the terminal UI owns stdout while it runs.
///
/// Falls back to no logging at all if the file cannot be opened, the UI is
/// still usable without it.
pub fn init_file(path: &Path) {
    if let Some(parent) = path.parent() {
        if fs::create_dir_all(parent).is_err() {
            return;
        }
    }
    let Ok(file) = OpenOptions::new().create(true).append(true).open(path) else {
        return;
    };

    let _ = tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(
            layer()
                .with_writer(Mutex::new(file))
                .with_ansi(false)
                .with_file(true)
                .with_line_number(true)
                .with_target(false),
        )
        .try_init();
}

/// Log to stderr for one-shot command line runs, quiet unless something
/// goes wrong.
pub fn init_stderr() {
    let _ = tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with(
            layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .try_init();
}
