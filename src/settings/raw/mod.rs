use anyhow::Result;
use serde::Deserialize;

use crate::cli::CliArgs;

use super::resolved::{
	BASE_URL, ConfigSources, PER_PAGE, ResolvedConfig, SEARCH, THEME, TIMEOUT,
};

mod schema;
mod source;
mod table;

use schema::SchemaSection;
use source::SourceSection;
use table::TableSection;

/// Mirror of the configuration file representation before CLI overrides and
/// validation are applied.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct RawConfig {
	source: SourceSection,
	table: TableSection,
	schema: SchemaSection,
}

impl RawConfig {
	/// Apply CLI overrides on top of the raw configuration values.
	pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		self.source.apply_cli_overrides(cli);
		self.table.apply_cli_overrides(cli);
	}

	/// Convert the raw configuration into a [`ResolvedConfig`], validating and
	/// filling defaults where required.
	pub(super) fn resolve(self, cli: &CliArgs) -> Result<ResolvedConfig> {
		let sources = ConfigSources {
			base_url: BASE_URL.detect(cli.base_url.is_some(), self.source.base_url.is_some()),
			timeout: TIMEOUT.detect(cli.timeout.is_some(), self.source.timeout_secs.is_some()),
			per_page: PER_PAGE.detect(cli.per_page.is_some(), self.table.per_page.is_some()),
			search: SEARCH.detect(cli.search.is_some(), self.table.search.is_some()),
			theme: THEME.detect(cli.theme.is_some(), self.table.theme.is_some()),
		};

		let source = self.source.resolve(&sources)?;
		let table = self.table.resolve(&sources)?;
		let schema = self.schema.resolve()?;

		let config = ResolvedConfig {
			resource: source.resource,
			source: source.base,
			timeout: source.timeout,
			table,
			schema,
		};

		config.validate(&sources)?;

		Ok(config)
	}
}

#[cfg(test)]
mod tests;
