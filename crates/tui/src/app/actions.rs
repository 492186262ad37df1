use ratatui::crossterm::event::{
	KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};

use super::App;
use crate::components::point_in_rect;
use crate::components::tables::TABLE_HEADER_ROWS;
use crate::config::TableOutcome;
use crate::view::TableView;

impl<'a> App<'a> {
	/// Process a keyboard event and return an outcome if the user exits.
	pub fn handle_key(&mut self, key: KeyEvent) -> Option<TableOutcome> {
		let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
		match key.code {
			KeyCode::Esc => return Some(self.outcome(false)),
			KeyCode::Char('c') if ctrl => return Some(self.outcome(false)),
			KeyCode::Enter => return Some(self.outcome(true)),
			KeyCode::Char('r') if ctrl => self.reload(),
			KeyCode::Char('s') if ctrl => self.sort_at_cursor(),
			KeyCode::Left => self.sort_cursor = self.sort_cursor.saturating_sub(1),
			KeyCode::Right => {
				let last = self.view.columns().len().saturating_sub(1);
				self.sort_cursor = (self.sort_cursor + 1).min(last);
			}
			KeyCode::Up => self.move_selection_up(),
			KeyCode::Down => self.move_selection_down(),
			KeyCode::PageUp => self.change_page(|view| view.prev_page()),
			KeyCode::PageDown => self.change_page(|view| view.next_page()),
			KeyCode::Home => self.change_page(|view| view.first_page()),
			KeyCode::End => self.change_page(|view| view.last_page()),
			_ => {
				if self.search_input.input(key) {
					self.apply_query();
				}
			}
		}
		None
	}

	pub fn handle_mouse(&mut self, mouse: MouseEvent) {
		self.results_hovered = self
			.results_area
			.is_some_and(|area| point_in_rect(mouse.column, mouse.row, area));

		match mouse.kind {
			MouseEventKind::ScrollUp if self.results_hovered => self.move_selection_up(),
			MouseEventKind::ScrollDown if self.results_hovered => self.move_selection_down(),
			MouseEventKind::Down(MouseButton::Left) if self.results_hovered => {
				self.select_row_at(mouse.row);
			}
			_ => {}
		}
	}

	fn outcome(&self, accepted: bool) -> TableOutcome {
		TableOutcome {
			accepted,
			selection: if accepted {
				self.current_selection()
			} else {
				None
			},
			query: self.search_input.text().to_string(),
		}
	}

	fn apply_query(&mut self) {
		let query = self.search_input.text().to_string();
		if self.view.set_query(&query) {
			self.status = None;
			self.reset_selection();
		}
	}

	fn sort_at_cursor(&mut self) {
		let Some(column) = self.view.columns().get(self.sort_cursor).cloned() else {
			return;
		};
		self.view.sort_by(&column);
		self.reset_selection();
	}

	fn change_page(&mut self, turn: impl FnOnce(&mut TableView) -> bool) {
		if turn(&mut self.view) {
			self.reset_selection();
		}
	}

	/// Move up one row, continuing onto the end of the previous page.
	pub(crate) fn move_selection_up(&mut self) {
		match self.table_state.selected() {
			Some(selected) if selected > 0 => self.table_state.select(Some(selected - 1)),
			_ => {
				if self.view.prev_page() {
					let last = self.view.visible_len().saturating_sub(1);
					self.table_state.select(Some(last));
				}
			}
		}
	}

	/// Move down one row, continuing onto the start of the next page.
	pub(crate) fn move_selection_down(&mut self) {
		let len = self.view.visible_len();
		match self.table_state.selected() {
			Some(selected) if selected + 1 < len => self.table_state.select(Some(selected + 1)),
			_ => {
				if self.view.next_page() {
					self.reset_selection();
				}
			}
		}
		self.ensure_selection();
	}

	fn select_row_at(&mut self, row: u16) {
		let Some(area) = self.results_area else {
			return;
		};
		// Border, then header and separator.
		let first_row = area.y + 1 + TABLE_HEADER_ROWS as u16;
		if row < first_row {
			return;
		}
		let offset = self.table_state.offset() + usize::from(row - first_row);
		if offset < self.view.visible_len() {
			self.table_state.select(Some(offset));
		}
	}
}
