use std::time::Duration;

use logview::{Schema, SourceBase, TableOptions};

mod errors;
mod sources;
mod summary;
mod validation;

pub(crate) use errors::ConfigError;
pub(crate) use sources::{ConfigSources, SettingSource};
pub(crate) use sources::{BASE_URL, PER_PAGE, SEARCH, THEME, TIMEOUT};

/// Application-ready configuration derived from user input, config files and
/// defaults.
#[derive(Debug)]
pub(crate) struct ResolvedConfig {
	/// Resource identifier handed to the loader.
	pub(crate) resource: String,
	pub(crate) source: SourceBase,
	pub(crate) timeout: Option<Duration>,
	pub(crate) table: TableOptions,
	pub(crate) schema: Schema,
}

impl ResolvedConfig {
	pub(super) fn validate(&self, sources: &ConfigSources) -> Result<(), ConfigError> {
		validation::validate(self, sources)
	}

	/// Print a human readable summary of the effective configuration.
	pub(crate) fn print_summary(&self) {
		print!("{}", summary::render_summary(self));
	}
}
