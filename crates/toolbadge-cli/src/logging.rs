use is_terminal::IsTerminal;
use tracing_subscriber::EnvFilter;

use crate::types::LogLevel;

/// Install the stderr log subscriber
///
/// `RUST_LOG` takes precedence over `--log-level`.
pub fn init(level: LogLevel) {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(level.as_filter()))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_ansi(std::io::stderr().is_terminal())
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
