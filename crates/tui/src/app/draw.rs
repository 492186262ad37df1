use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::widgets::ScrollbarState;

use super::App;
use crate::components::rows::{
	build_headers, build_record_rows, column_widths, width_constraints,
};
use crate::components::{
	FooterContext, InputContext, TableRenderState, TableSpec, render_footer, render_input,
	render_table,
};
use crate::config::SearchMode;
use crate::view::search_terms;

const PLACEHOLDER: &str = "Type to filter records";

impl<'a> App<'a> {
	/// Render the prompt, the table and the footer.
	pub fn draw(&mut self, frame: &mut Frame) {
		let layout = Layout::default()
			.direction(Direction::Vertical)
			.constraints([
				Constraint::Length(1),
				Constraint::Min(3),
				Constraint::Length(1),
			])
			.split(frame.area());

		let counter = format!("{}/{}", self.view.filtered_len(), self.view.total_len());
		render_input(
			frame,
			InputContext {
				search_input: &self.search_input,
				placeholder: Some(PLACEHOLDER),
				counter: &counter,
				area: layout[0],
				theme: &self.theme,
			},
		);

		self.results_area = Some(layout[1]);
		self.draw_table(frame, layout[1]);

		let summary = self.view.summary();
		render_footer(
			frame,
			FooterContext {
				summary: &summary,
				status: self.status.as_deref(),
				page: self.view.page(),
				page_count: self.view.page_count(),
				area: layout[2],
				theme: &self.theme,
			},
		);
	}

	fn draw_table(&mut self, frame: &mut Frame, area: Rect) {
		self.ensure_selection();

		let visible = self.view.visible_rows();
		let columns = self.view.columns();
		let widths = column_widths(columns, &visible);
		let terms = match self.view.search_mode() {
			SearchMode::Substring => search_terms(self.view.query()),
			SearchMode::Fuzzy => Vec::new(),
		};
		let rows = build_record_rows(&visible, columns, &widths, &terms, self.theme.highlight);
		let headers = build_headers(
			columns,
			self.view.sort(),
			Some(self.sort_cursor),
			self.theme.highlight,
		);

		let empty_message = if self.view.total_len() == 0 {
			"No records"
		} else {
			"No matching records"
		};

		self.scrollbar_state = ScrollbarState::new(visible.len())
			.position(self.table_state.selected().unwrap_or(0));

		let spec = TableSpec {
			headers,
			widths: width_constraints(&widths),
			rows,
			title: Some(self.title.clone()),
			empty_message,
		};
		render_table(
			frame,
			area,
			TableRenderState {
				table_state: &mut self.table_state,
				scrollbar_state: &mut self.scrollbar_state,
				scrollbar_area: &mut self.scrollbar_area,
			},
			spec,
			&self.theme,
		);
	}
}
