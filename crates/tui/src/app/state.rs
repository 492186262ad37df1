//! Core state container for the interactive table.

use anyhow::Result;
use logview_dataset::{Dataset, Record};
use ratatui::layout::Rect;
use ratatui::widgets::{ScrollbarState, TableState};
use tracing::{info, warn};

use crate::config::TableConfig;
use crate::input::QueryInput;
use crate::style::{Theme, by_name, default_theme};
use crate::view::TableView;

/// Produces a fresh dataset when the user asks for a reload.
pub type Reloader<'a> = Box<dyn FnMut() -> Result<Dataset> + 'a>;

/// Title used when the configuration does not name one.
pub(crate) const DEFAULT_TITLE: &str = "Records";

/// Aggregate state shared across the terminal UI.
pub struct App<'a> {
	/// Filter, sort and paging model.
	pub view: TableView,
	/// Text input widget for the search filter.
	pub search_input: QueryInput<'a>,
	pub(crate) title: String,
	pub(crate) theme: Theme,
	pub(crate) table_state: TableState,
	pub(crate) scrollbar_state: ScrollbarState,
	pub(crate) scrollbar_area: Option<Rect>,
	/// Last known results area on screen.
	pub(crate) results_area: Option<Rect>,
	pub(crate) results_hovered: bool,
	/// Column the sort keys act on.
	pub(crate) sort_cursor: usize,
	/// Transient message shown in the footer.
	pub(crate) status: Option<String>,
	pub(crate) reloader: Option<Reloader<'a>>,
}

impl<'a> App<'a> {
	/// Build the application state for a table configuration.
	pub fn new(config: TableConfig) -> Self {
		let TableConfig { dataset, options } = config;
		let theme = resolve_theme(options.theme.as_deref());
		let view = TableView::new(dataset, &options);

		let sort_cursor = options
			.sort
			.as_ref()
			.and_then(|key| view.columns().iter().position(|column| *column == key.column))
			.unwrap_or(0);

		let mut app = Self {
			view,
			search_input: QueryInput::new(options.initial_query.clone()),
			title: options.title.unwrap_or_else(|| DEFAULT_TITLE.to_string()),
			theme,
			table_state: TableState::default(),
			scrollbar_state: ScrollbarState::default(),
			scrollbar_area: None,
			results_area: None,
			results_hovered: false,
			sort_cursor,
			status: None,
			reloader: None,
		};
		app.search_input.set_style(theme.prompt);
		app.reset_selection();
		app
	}

	/// Enable `Ctrl+R` reloads through `reloader`.
	#[must_use]
	pub fn with_reloader(mut self, reloader: Reloader<'a>) -> Self {
		self.reloader = Some(reloader);
		self
	}

	/// Select the first row of the current page, or nothing on an empty page.
	pub(crate) fn reset_selection(&mut self) {
		*self.table_state.offset_mut() = 0;
		let selected = (self.view.visible_len() > 0).then_some(0);
		self.table_state.select(selected);
	}

	/// Keep the selection inside the current page.
	pub(crate) fn ensure_selection(&mut self) {
		let len = self.view.visible_len();
		match (len, self.table_state.selected()) {
			(0, _) => self.table_state.select(None),
			(len, Some(selected)) if selected >= len => self.table_state.select(Some(len - 1)),
			(_, None) => self.table_state.select(Some(0)),
			_ => {}
		}
	}

	/// Record under the selection, if any.
	#[must_use]
	pub fn current_selection(&self) -> Option<Record> {
		self.table_state
			.selected()
			.and_then(|offset| self.view.visible_record(offset))
			.cloned()
	}

	/// Re-run the reloader and swap in its dataset.
	///
	/// Failures leave the current table untouched and surface in the footer.
	pub(crate) fn reload(&mut self) {
		let Some(reloader) = self.reloader.as_mut() else {
			self.status = Some("Reload is not available".to_string());
			return;
		};

		match reloader() {
			Ok(dataset) => {
				let count = dataset.len();
				self.view.replace_dataset(dataset);
				self.sort_cursor = self
					.sort_cursor
					.min(self.view.columns().len().saturating_sub(1));
				self.reset_selection();
				info!(records = count, "dataset reloaded");
				self.status = Some(format!("Reloaded {count} records"));
			}
			Err(err) => {
				warn!("reload failed: {err:#}");
				self.status = Some(format!("Reload failed: {err:#}"));
			}
		}
	}
}

fn resolve_theme(name: Option<&str>) -> Theme {
	match name {
		Some(name) => by_name(name).unwrap_or_else(|| {
			warn!(theme = name, "unknown theme, using the default");
			default_theme()
		}),
		None => default_theme(),
	}
}
