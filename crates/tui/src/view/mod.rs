//! Table model behind both displays.
//!
//! [`TableView`] owns the dataset and derives the visible rows from it: the
//! search query filters, the sort key orders, and paging slices the result.
//! It holds no terminal state, so every behavior here is unit tested without
//! a backend.

mod cells;
mod search;

use logview_dataset::{Dataset, Record};

pub use cells::{cell_line, cell_text};
use cells::compare_cells;
pub(crate) use search::terms as search_terms;

use crate::config::{SearchMode, SortDirection, SortKey, TableOptions};

/// Filtered, sorted and paged view over a dataset.
#[derive(Debug, Clone)]
pub struct TableView {
	dataset: Dataset,
	explicit_columns: Option<Vec<String>>,
	preferred_order: Vec<String>,
	columns: Vec<String>,
	query: String,
	search_mode: SearchMode,
	sort: Option<SortKey>,
	/// Dataset indices that pass the filter, in display order.
	rows: Vec<usize>,
	page: usize,
	per_page: usize,
}

impl TableView {
	/// Build a view over `dataset` with the given presentation options.
	#[must_use]
	pub fn new(dataset: Dataset, options: &TableOptions) -> Self {
		let explicit_columns = options
			.columns
			.clone()
			.filter(|columns| !columns.is_empty());

		let mut view = Self {
			dataset,
			explicit_columns,
			preferred_order: options.preferred_order.clone(),
			columns: Vec::new(),
			query: options.initial_query.clone(),
			search_mode: options.search_mode,
			sort: options.sort.clone(),
			rows: Vec::new(),
			page: 0,
			per_page: options.per_page.max(1),
		};
		view.columns = view.resolve_columns();
		view.refresh();
		view
	}

	fn resolve_columns(&self) -> Vec<String> {
		if let Some(columns) = &self.explicit_columns {
			return columns.clone();
		}

		let discovered = self.dataset.field_names();
		let mut columns: Vec<String> = self
			.preferred_order
			.iter()
			.filter(|name| discovered.contains(name))
			.cloned()
			.collect();
		for name in discovered {
			if !columns.contains(&name) {
				columns.push(name);
			}
		}
		columns
	}

	/// Recompute the filtered row order from scratch.
	fn refresh(&mut self) {
		let mut rows = match self.search_mode {
			SearchMode::Substring => self.substring_rows(),
			SearchMode::Fuzzy => self.fuzzy_rows(),
		};

		if let Some(key) = &self.sort {
			let records = self.dataset.records();
			let column = key.column.as_str();
			let direction = key.direction;
			rows.sort_by(|&a, &b| {
				compare_cells(records[a].get(column), records[b].get(column), direction)
			});
		}

		self.rows = rows;
		self.page = self.page.min(self.page_count() - 1);
	}

	fn row_haystack(&self, record: &Record) -> String {
		self.columns
			.iter()
			.map(|column| cell_text(record, column))
			.collect::<Vec<_>>()
			.join("\n")
	}

	fn substring_rows(&self) -> Vec<usize> {
		let terms = search::terms(&self.query);
		if terms.is_empty() {
			return (0..self.dataset.len()).collect();
		}

		self.dataset
			.iter()
			.enumerate()
			.filter(|(_, record)| {
				let haystack = self.row_haystack(record).to_lowercase();
				search::matches_all_terms(&haystack, &terms)
			})
			.map(|(index, _)| index)
			.collect()
	}

	fn fuzzy_rows(&self) -> Vec<usize> {
		if self.query.trim().is_empty() {
			return (0..self.dataset.len()).collect();
		}

		let haystacks: Vec<String> = self
			.dataset
			.iter()
			.map(|record| self.row_haystack(record).replace('\n', " "))
			.collect();
		search::fuzzy_rank(&self.query, &haystacks)
			.into_iter()
			.map(|(index, _)| index)
			.collect()
	}

	#[must_use]
	pub fn dataset(&self) -> &Dataset {
		&self.dataset
	}

	#[must_use]
	pub fn columns(&self) -> &[String] {
		&self.columns
	}

	/// Number of records backing the table, regardless of the query.
	#[must_use]
	pub fn total_len(&self) -> usize {
		self.dataset.len()
	}

	/// Number of records passing the current query.
	#[must_use]
	pub fn filtered_len(&self) -> usize {
		self.rows.len()
	}

	#[must_use]
	pub fn query(&self) -> &str {
		&self.query
	}

	#[must_use]
	pub fn search_mode(&self) -> SearchMode {
		self.search_mode
	}

	#[must_use]
	pub fn sort(&self) -> Option<&SortKey> {
		self.sort.as_ref()
	}

	/// Replace the search query. Returns to the first page when it changes.
	pub fn set_query(&mut self, query: &str) -> bool {
		if self.query == query {
			return false;
		}
		self.query = query.to_string();
		self.page = 0;
		self.refresh();
		true
	}

	/// Sort by `column`, cycling ascending, descending, unsorted.
	///
	/// Choosing a different column starts over at ascending.
	pub fn sort_by(&mut self, column: &str) {
		let next = match &self.sort {
			Some(key) if key.column == column => match key.direction {
				SortDirection::Ascending => Some(SortKey::descending(column)),
				SortDirection::Descending => None,
			},
			_ => Some(SortKey::ascending(column)),
		};
		self.set_sort(next);
	}

	pub fn set_sort(&mut self, sort: Option<SortKey>) {
		self.sort = sort;
		self.page = 0;
		self.refresh();
	}

	/// Swap in a freshly loaded dataset.
	///
	/// The query and sort carry over; the previous records are dropped, never
	/// merged with the new ones.
	pub fn replace_dataset(&mut self, dataset: Dataset) {
		self.dataset = dataset;
		self.columns = self.resolve_columns();
		self.page = 0;
		self.refresh();
	}

	/// Zero-based index of the current page.
	#[must_use]
	pub fn page(&self) -> usize {
		self.page
	}

	#[must_use]
	pub fn per_page(&self) -> usize {
		self.per_page
	}

	/// Number of pages; an empty table still has one (empty) page.
	#[must_use]
	pub fn page_count(&self) -> usize {
		self.rows.len().div_ceil(self.per_page).max(1)
	}

	pub fn set_page(&mut self, page: usize) -> bool {
		let page = page.min(self.page_count() - 1);
		let changed = page != self.page;
		self.page = page;
		changed
	}

	pub fn next_page(&mut self) -> bool {
		self.set_page(self.page + 1)
	}

	pub fn prev_page(&mut self) -> bool {
		self.set_page(self.page.saturating_sub(1))
	}

	pub fn first_page(&mut self) -> bool {
		self.set_page(0)
	}

	pub fn last_page(&mut self) -> bool {
		self.set_page(self.page_count() - 1)
	}

	fn page_bounds(&self) -> (usize, usize) {
		let start = (self.page * self.per_page).min(self.rows.len());
		let end = (start + self.per_page).min(self.rows.len());
		(start, end)
	}

	/// Records on the current page, in display order.
	#[must_use]
	pub fn visible_rows(&self) -> Vec<&Record> {
		let (start, end) = self.page_bounds();
		self.rows[start..end]
			.iter()
			.filter_map(|&index| self.dataset.get(index))
			.collect()
	}

	/// Number of rows on the current page.
	#[must_use]
	pub fn visible_len(&self) -> usize {
		let (start, end) = self.page_bounds();
		end - start
	}

	/// Record at `offset` within the current page.
	#[must_use]
	pub fn visible_record(&self, offset: usize) -> Option<&Record> {
		let (start, end) = self.page_bounds();
		let position = start + offset;
		if position >= end {
			return None;
		}
		self.dataset.get(self.rows[position])
	}

	/// Every filtered record in display order, across all pages.
	pub fn all_rows(&self) -> impl Iterator<Item = &Record> + '_ {
		self.rows
			.iter()
			.filter_map(|&index| self.dataset.get(index))
	}

	/// Footer text describing the current page.
	#[must_use]
	pub fn summary(&self) -> String {
		let filtered = self.rows.len();
		let (start, end) = self.page_bounds();
		let from = if filtered == 0 { 0 } else { start + 1 };

		let mut text = format!("Showing {from} to {end} of {filtered} entries");
		if filtered != self.total_len() {
			text.push_str(&format!(" (filtered from {} total entries)", self.total_len()));
		}
		text
	}
}
