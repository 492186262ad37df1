//! Single-line search input.

use ratatui::Frame;
use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::layout::Rect;
use ratatui::style::Style;
use tui_textarea::{CursorMove, TextArea};

/// Search field backed by a one-line [`TextArea`].
pub struct QueryInput<'a> {
	textarea: TextArea<'a>,
}

impl<'a> QueryInput<'a> {
	/// Create an input pre-filled with `initial`, cursor at the end.
	#[must_use]
	pub fn new(initial: impl Into<String>) -> Self {
		let initial: String = initial.into();
		let line = initial.replace(['\n', '\r'], " ");
		let mut textarea = TextArea::new(vec![line]);
		textarea.set_cursor_line_style(Style::default());
		textarea.move_cursor(CursorMove::End);
		Self { textarea }
	}

	/// Current query text.
	#[must_use]
	pub fn text(&self) -> &str {
		self.textarea
			.lines()
			.first()
			.map(String::as_str)
			.unwrap_or_default()
	}

	/// Feed a key to the text area. Returns `true` when the text changed.
	///
	/// Line breaks are swallowed so the query always stays on one line.
	pub fn input(&mut self, key: KeyEvent) -> bool {
		let newline = matches!(key.code, KeyCode::Enter)
			|| (key.modifiers.contains(KeyModifiers::CONTROL)
				&& matches!(key.code, KeyCode::Char('m' | 'j')));
		if newline {
			return false;
		}

		let before = self.text().to_string();
		self.textarea.input(key);
		before != self.text()
	}

	pub fn set_style(&mut self, style: Style) {
		self.textarea.set_style(style);
	}

	pub(crate) fn render_textarea(&self, frame: &mut Frame, area: Rect) {
		frame.render_widget(&self.textarea, area);
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn key(code: KeyCode) -> KeyEvent {
		KeyEvent::new(code, KeyModifiers::NONE)
	}

	#[test]
	fn typing_updates_text() {
		let mut input = QueryInput::new("");
		assert!(input.input(key(KeyCode::Char('w'))));
		assert!(input.input(key(KeyCode::Char('a'))));
		assert_eq!(input.text(), "wa");
		assert!(input.input(key(KeyCode::Backspace)));
		assert_eq!(input.text(), "w");
	}

	#[test]
	fn enter_never_adds_a_line() {
		let mut input = QueryInput::new("disk");
		assert!(!input.input(key(KeyCode::Enter)));
		assert_eq!(input.text(), "disk");
	}

	#[test]
	fn initial_text_keeps_cursor_at_end() {
		let mut input = QueryInput::new("err");
		input.input(key(KeyCode::Char('o')));
		assert_eq!(input.text(), "erro");
	}
}
