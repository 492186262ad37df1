use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};

use crate::input::QueryInput;
use crate::style::Theme;

const PROMPT_SYMBOL: &str = "> ";

/// Argument bundle for rendering the input area.
pub struct InputContext<'a, 'q> {
	/// The search input widget.
	pub search_input: &'a QueryInput<'q>,
	/// Placeholder text shown when input is empty.
	pub placeholder: Option<&'a str>,
	/// Right-aligned counter, e.g. `3/120`.
	pub counter: &'a str,
	/// Rendering area.
	pub area: Rect,
	/// Color theme.
	pub theme: &'a Theme,
}

/// Render the prompt symbol, the search input, its placeholder and the counter.
pub fn render_input(frame: &mut Frame, input: InputContext<'_, '_>) {
	let InputContext {
		search_input,
		placeholder,
		counter,
		area,
		theme,
	} = input;
	if area.width == 0 || area.height == 0 {
		return;
	}

	let prompt_width = (PROMPT_SYMBOL.len() as u16).min(area.width);
	frame.buffer_mut().set_line(
		area.left(),
		area.top(),
		&Line::from(Span::styled(PROMPT_SYMBOL, theme.prompt)),
		prompt_width,
	);

	let counter_width = counter.chars().count() as u16;
	let reserved = if counter_width == 0 { 0 } else { counter_width + 1 };
	let text_area = Rect {
		x: area.x + prompt_width,
		width: area
			.width
			.saturating_sub(prompt_width)
			.saturating_sub(reserved),
		height: 1,
		..area
	};
	search_input.render_textarea(frame, text_area);

	if let Some(placeholder_text) = placeholder.filter(|_| search_input.text().is_empty()) {
		render_placeholder(frame, text_area, placeholder_text, theme);
	}

	render_counter(frame, area, counter, theme);
}

fn render_placeholder(frame: &mut Frame, area: Rect, text: &str, theme: &Theme) {
	if area.width == 0 || area.height == 0 || text.is_empty() {
		return;
	}
	// Leave the first cell for the cursor.
	let x = area.left().saturating_add(1);
	let width = area.width.saturating_sub(1);
	let display_text: String = text.chars().take(width as usize).collect();
	frame.buffer_mut().set_line(
		x,
		area.top(),
		&Line::from(Span::styled(display_text, theme.empty)),
		width,
	);
}

fn render_counter(frame: &mut Frame, area: Rect, counter: &str, theme: &Theme) {
	let width = counter.chars().count() as u16;
	if width == 0 || width >= area.width {
		return;
	}
	let start_x = area.right().saturating_sub(width);
	frame.buffer_mut().set_line(
		start_x,
		area.top(),
		&Line::from(Span::styled(counter.to_string(), theme.footer)),
		width,
	);
}
