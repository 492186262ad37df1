use std::fmt;
use std::str::FromStr;

use logview_dataset::{Dataset, Record};
use serde::{Deserialize, Serialize};

/// Rows per page when nothing else is configured.
pub const DEFAULT_PER_PAGE: usize = 10;

/// How the search query narrows the table.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchMode {
	/// Case-insensitive; every whitespace-separated term must appear in some cell.
	#[default]
	Substring,
	/// Fuzzy match over the whole row, best matches first.
	Fuzzy,
}

impl SearchMode {
	#[must_use]
	pub fn as_str(self) -> &'static str {
		match self {
			Self::Substring => "substring",
			Self::Fuzzy => "fuzzy",
		}
	}
}

impl fmt::Display for SearchMode {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

impl FromStr for SearchMode {
	type Err = String;

	fn from_str(input: &str) -> Result<Self, Self::Err> {
		match input.trim().to_ascii_lowercase().as_str() {
			"substring" | "text" => Ok(Self::Substring),
			"fuzzy" => Ok(Self::Fuzzy),
			other => Err(format!("unknown search mode `{other}`")),
		}
	}
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortDirection {
	#[default]
	Ascending,
	Descending,
}

impl SortDirection {
	/// Header marker for a column sorted in this direction.
	#[must_use]
	pub fn indicator(self) -> &'static str {
		match self {
			Self::Ascending => "▲",
			Self::Descending => "▼",
		}
	}
}

/// Column and direction the table is ordered by.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortKey {
	pub column: String,
	pub direction: SortDirection,
}

impl SortKey {
	#[must_use]
	pub fn ascending(column: impl Into<String>) -> Self {
		Self {
			column: column.into(),
			direction: SortDirection::Ascending,
		}
	}

	#[must_use]
	pub fn descending(column: impl Into<String>) -> Self {
		Self {
			column: column.into(),
			direction: SortDirection::Descending,
		}
	}
}

/// Presentation options for a table. Every field has a usable default.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableOptions {
	/// Title drawn on the table border.
	pub title: Option<String>,
	/// Exact columns to show, in order. `None` derives them from the data.
	pub columns: Option<Vec<String>>,
	/// Columns placed first when columns are derived from the data.
	pub preferred_order: Vec<String>,
	pub per_page: usize,
	pub sort: Option<SortKey>,
	pub initial_query: String,
	pub search_mode: SearchMode,
	/// Theme name; the default theme is used when unset or unknown.
	pub theme: Option<String>,
}

impl Default for TableOptions {
	fn default() -> Self {
		Self {
			title: None,
			columns: None,
			preferred_order: Vec::new(),
			per_page: DEFAULT_PER_PAGE,
			sort: None,
			initial_query: String::new(),
			search_mode: SearchMode::default(),
			theme: None,
		}
	}
}

/// Everything a [`TableDisplay`](crate::TableDisplay) needs: the backing
/// records plus presentation options.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TableConfig {
	pub dataset: Dataset,
	pub options: TableOptions,
}

impl TableConfig {
	#[must_use]
	pub fn new(dataset: Dataset) -> Self {
		Self {
			dataset,
			options: TableOptions::default(),
		}
	}

	#[must_use]
	pub fn with_options(mut self, options: TableOptions) -> Self {
		self.options = options;
		self
	}
}

/// Result of an interactive session.
#[derive(Debug, Clone, PartialEq)]
pub struct TableOutcome {
	/// Whether the user accepted a row rather than quitting.
	pub accepted: bool,
	pub selection: Option<Record>,
	/// Search text at the time the table closed.
	pub query: String,
}

impl TableOutcome {
	#[must_use]
	pub fn cancelled(query: impl Into<String>) -> Self {
		Self {
			accepted: false,
			selection: None,
			query: query.into(),
		}
	}
}
