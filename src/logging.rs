use tracing_subscriber::EnvFilter;

use crate::config::BuildMode;

/// Default filter when `RUST_LOG` is unset.
pub fn default_filter(mode: BuildMode) -> &'static str {
    match mode {
        BuildMode::Development => "debug",
        BuildMode::Production => "warn",
    }
}

/// Install the global fmt subscriber. Output goes to stderr so stdout stays
/// free for command output. Calling it again is a no-op.
pub fn init_tracing(mode: BuildMode) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter(mode)));

    let installed = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_level(true)
        .with_timer(tracing_subscriber::fmt::time::UtcTime::rfc_3339())
        .try_init();

    if installed.is_err() {
        tracing::debug!("Tracing subscriber already installed");
    }
}
