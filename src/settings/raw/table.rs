use std::str::FromStr;

use logview::{SearchMode, SortKey, TableOptions};
use logview_tui::DEFAULT_PER_PAGE;
use serde::Deserialize;

use super::super::resolved::{ConfigError, ConfigSources};
use super::super::util::{non_empty, sanitize_columns};
use crate::cli::CliArgs;

/// Table presentation settings as read from disk.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct TableSection {
	pub(super) title: Option<String>,
	pub(super) per_page: Option<usize>,
	pub(super) columns: Option<Vec<String>>,
	pub(super) sort: Option<String>,
	pub(super) descending: Option<bool>,
	pub(super) initial_query: Option<String>,
	pub(super) search: Option<String>,
	pub(super) theme: Option<String>,
}

impl TableSection {
	pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		if let Some(title) = cli.title.clone() {
			self.title = Some(title);
		}
		if let Some(per_page) = cli.per_page {
			self.per_page = Some(per_page);
		}
		if let Some(columns) = &cli.columns {
			self.columns = Some(columns.clone());
		}
		if let Some(sort) = cli.sort.clone() {
			self.sort = Some(sort);
			self.descending = Some(cli.descending);
		}
		if let Some(query) = cli.initial_query.clone() {
			self.initial_query = Some(query);
		}
		if let Some(search) = cli.search {
			self.search = Some(search.as_str().to_string());
		}
		if let Some(theme) = cli.theme.clone() {
			self.theme = Some(theme);
		}
	}

	pub(super) fn resolve(self, sources: &ConfigSources) -> Result<TableOptions, ConfigError> {
		let search_mode = match self.search {
			Some(raw) => SearchMode::from_str(&raw)
				.map_err(|reason| ConfigError::invalid("table.search", raw, sources.search(), reason))?,
			None => SearchMode::default(),
		};

		let sort = non_empty(self.sort).map(|column| {
			if self.descending.unwrap_or(false) {
				SortKey::descending(column)
			} else {
				SortKey::ascending(column)
			}
		});

		Ok(TableOptions {
			title: non_empty(self.title),
			columns: self
				.columns
				.map(sanitize_columns)
				.filter(|columns| !columns.is_empty()),
			preferred_order: Vec::new(),
			per_page: self.per_page.unwrap_or(DEFAULT_PER_PAGE),
			sort,
			initial_query: self.initial_query.unwrap_or_default(),
			search_mode,
			theme: non_empty(self.theme),
		})
	}
}
