//! Logging setup using `tracing` + `tracing-subscriber`. The level comes
//! from the `JSH_LOG` environment variable and defaults to `warn` so that
//! the shell's own stderr diagnostics stay uncluttered.

use tracing_subscriber::fmt;

/// Initialise the global subscriber. Call once at startup.
pub fn init() {
	let level = std::env::var("JSH_LOG")
		.ok()
		.and_then(|s| parse_level(&s))
		.unwrap_or(tracing::Level::WARN);

	fmt()
		.with_max_level(level)
		.with_target(true)
		.with_writer(std::io::stderr)
		.init();
}

fn parse_level(s: &str) -> Option<tracing::Level> {
	match s.trim().to_lowercase().as_str() {
		"error" => Some(tracing::Level::ERROR),
		"warn" | "warning" => Some(tracing::Level::WARN),
		"info" => Some(tracing::Level::INFO),
		"debug" => Some(tracing::Level::DEBUG),
		"trace" => Some(tracing::Level::TRACE),
		_ => None,
	}
}
