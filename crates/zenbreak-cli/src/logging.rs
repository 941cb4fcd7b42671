use std::fs::OpenOptions;
use std::path::Path;

use tracing_subscriber::{fmt, EnvFilter};

/// Environment variable holding the log filter, e.g. `zenbreak_core=debug`.
pub const LOG_ENV: &str = "ZENBREAK_LOG";

fn filter() -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Log to stderr. Used by the headless commands.
pub fn init_stderr() {
    let _ = fmt()
        .with_env_filter(filter())
        .with_writer(std::io::stderr)
        .try_init();
}

/// Log to a file, appending. Used by the terminal UI so log lines never land
/// on the screen.
pub fn init_file(path: &Path) -> std::io::Result<()> {
    let file = OpenOptions::new().create(true).append(true).open(path)?;
    let _ = fmt()
        .with_env_filter(filter())
        .with_ansi(false)
        .with_writer(std::sync::Mutex::new(file))
        .try_init();
    Ok(())
}
