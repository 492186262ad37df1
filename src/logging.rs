//! Tracing subscriber setup.
//!
//! The filter comes from `LOGVIEW_LOG` when set, otherwise from the verbosity
//! flag. The interactive table owns the terminal, so its logs go to a file.

use std::fs::{self, OpenOptions};
use std::path::PathBuf;
use std::sync::Mutex;

use anyhow::{Context, Result};
use tracing_subscriber::{filter::EnvFilter, fmt, prelude::*};

/// Environment variable holding an `EnvFilter` directive.
pub const LOG_ENV: &str = "LOGVIEW_LOG";
/// File name used inside the data directory.
pub const LOG_FILE_NAME: &str = "logview.log";

/// Where log lines are written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogTarget {
	Stderr,
	File(PathBuf),
}

/// Filter directive for a `-v` count.
#[must_use]
pub fn level_for(verbosity: u8) -> &'static str {
	match verbosity {
		0 => "warn",
		1 => "debug",
		_ => "trace",
	}
}

/// Install the global subscriber.
pub fn initialize(verbosity: u8, target: &LogTarget) -> Result<()> {
	let filter =
		EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(level_for(verbosity)));

	match target {
		LogTarget::Stderr => tracing_subscriber::registry()
			.with(fmt::layer().with_target(false).with_writer(std::io::stderr))
			.with(filter)
			.try_init()?,
		LogTarget::File(path) => {
			if let Some(parent) = path.parent().filter(|dir| !dir.as_os_str().is_empty()) {
				fs::create_dir_all(parent)
					.with_context(|| format!("failed to create log directory {}", parent.display()))?;
			}
			let file = OpenOptions::new()
				.create(true)
				.append(true)
				.open(path)
				.with_context(|| format!("failed to open log file {}", path.display()))?;
			tracing_subscriber::registry()
				.with(
					fmt::layer()
						.with_ansi(false)
						.with_writer(Mutex::new(file)),
				)
				.with(filter)
				.try_init()?;
		}
	}

	Ok(())
}
