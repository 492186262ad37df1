use ratatui::style::Style;

/// Styles applied to the table and its surrounding widgets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
	/// Column headers and the header separator.
	pub header: Style,
	/// Table border and scrollbar.
	pub border: Style,
	/// The selected row.
	pub row_highlight: Style,
	/// Search prompt.
	pub prompt: Style,
	/// "No records" placeholder.
	pub empty: Style,
	/// Query matches inside cells and the sort cursor.
	pub highlight: Style,
	/// Paging summary line.
	pub footer: Style,
}

/// A named theme and the alternate names it answers to.
#[derive(Debug, Clone)]
pub struct ThemeRegistration {
	pub name: String,
	pub theme: Theme,
	pub aliases: Vec<String>,
}

impl ThemeRegistration {
	pub fn new(name: impl Into<String>, theme: Theme) -> Self {
		Self {
			name: name.into(),
			theme,
			aliases: Vec::new(),
		}
	}

	/// Adds a single alias to this theme registration.
	pub fn alias(mut self, alias: impl Into<String>) -> Self {
		self.aliases.push(alias.into());
		self
	}

	/// Whether `name` refers to this theme, ignoring case and `-`/`_`.
	#[must_use]
	pub fn answers_to(&self, name: &str) -> bool {
		let wanted = normalize_name(name);
		normalize_name(&self.name) == wanted
			|| self
				.aliases
				.iter()
				.any(|alias| normalize_name(alias) == wanted)
	}
}

pub(crate) fn normalize_name(name: &str) -> String {
	name.trim()
		.to_ascii_lowercase()
		.chars()
		.map(|ch| if ch == '-' || ch == ' ' { '_' } else { ch })
		.collect()
}
