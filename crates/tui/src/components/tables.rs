use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{
	Block, Borders, Cell, HighlightSpacing, Paragraph, Row, ScrollbarState, Table, TableState,
};

use crate::components::render_scrollbar;
use crate::style::Theme;

pub(crate) const HIGHLIGHT_SYMBOL: &str = "▶ ";
pub(crate) const TABLE_COLUMN_SPACING: u16 = 1;
pub(crate) const TABLE_HIGHLIGHT_SPACING: HighlightSpacing = HighlightSpacing::Always;
/// Header row + separator height inside the table's viewport.
pub(crate) const TABLE_HEADER_ROWS: usize = 2;

/// Fully materialized table configuration.
pub struct TableSpec<'a> {
	/// Column headers, already styled.
	pub headers: Vec<Line<'a>>,
	/// Column width constraints.
	pub widths: Vec<Constraint>,
	/// Rendered table rows.
	pub rows: Vec<Row<'a>>,
	/// Optional title for the bordered table.
	pub title: Option<String>,
	/// Text shown in place of rows when there are none.
	pub empty_message: &'a str,
}

/// Mutable widget state threaded through a table render.
pub struct TableRenderState<'s> {
	pub table_state: &'s mut TableState,
	pub scrollbar_state: &'s mut ScrollbarState,
	pub scrollbar_area: &'s mut Option<Rect>,
}

/// Render a bordered table, scrollbar and header separator into `area`.
pub fn render_table(
	frame: &mut Frame,
	area: Rect,
	state: TableRenderState<'_>,
	spec: TableSpec<'_>,
	theme: &Theme,
) {
	*state.scrollbar_area = None;

	let mut block = Block::default()
		.borders(Borders::ALL)
		.border_set(ratatui::symbols::border::ROUNDED)
		.border_style(theme.border);

	if let Some(title) = spec.title.clone() {
		block = block.title(title);
	}

	let inner = block.inner(area);
	frame.render_widget(block, area);

	render_configured_table(frame, inner, state, theme, spec);
}

fn render_configured_table(
	frame: &mut Frame,
	area: Rect,
	state: TableRenderState<'_>,
	theme: &Theme,
	spec: TableSpec<'_>,
) {
	let header_cells = spec.headers.into_iter().map(Cell::from).collect::<Vec<_>>();
	let header = Row::new(header_cells)
		.style(theme.header)
		.height(1)
		.bottom_margin(1);

	let mut widths = spec.widths;
	if widths.is_empty() {
		widths = vec![Constraint::Fill(1)];
	}

	let available_rows = (area.height as usize).saturating_sub(TABLE_HEADER_ROWS);
	let total_rows = spec.rows.len();
	let is_empty = total_rows == 0;
	let needs_scrollbar = total_rows > available_rows && available_rows > 0;

	let table_area = if needs_scrollbar {
		Rect {
			width: area.width.saturating_sub(1),
			..area
		}
	} else {
		area
	};

	let table = Table::new(spec.rows, widths)
		.header(header)
		.column_spacing(TABLE_COLUMN_SPACING)
		.highlight_spacing(TABLE_HIGHLIGHT_SPACING)
		.row_highlight_style(theme.row_highlight)
		.highlight_symbol(HIGHLIGHT_SYMBOL);
	frame.render_stateful_widget(table, table_area, state.table_state);

	if needs_scrollbar {
		let scroll_area = Rect {
			y: area.y + TABLE_HEADER_ROWS as u16,
			height: area.height.saturating_sub(TABLE_HEADER_ROWS as u16),
			..area
		};
		render_scrollbar(
			frame,
			scroll_area,
			state.scrollbar_state,
			state.scrollbar_area,
			theme,
		);
	}

	render_header_separator(frame, table_area, theme, 1);

	if is_empty {
		render_empty_message(frame, area, spec.empty_message, theme);
	}
}

fn render_header_separator(frame: &mut Frame, area: Rect, theme: &Theme, header_height: u16) {
	if header_height >= area.height {
		return;
	}
	let sep_y = area.y + header_height;

	let width = area.width as usize;
	if width == 0 {
		return;
	}

	let sep_rect = Rect {
		x: area.x,
		y: sep_y,
		width: area.width,
		height: 1,
	};
	if width <= 2 {
		frame.render_widget(Paragraph::new(" ".repeat(width)), sep_rect);
		return;
	}

	let middle = "─".repeat(width - 2);
	let spans = vec![
		Span::raw(" "),
		Span::styled(middle, theme.border),
		Span::raw(" "),
	];
	frame.render_widget(Paragraph::new(Line::from(spans)), sep_rect);
}

fn render_empty_message(frame: &mut Frame, area: Rect, message: &str, theme: &Theme) {
	let header_height = TABLE_HEADER_ROWS as u16;
	if area.height <= header_height || message.is_empty() {
		return;
	}
	let message_area = Rect {
		y: area.y + header_height,
		height: 1,
		..area
	};
	let empty = Paragraph::new(Span::styled(message.to_string(), theme.empty))
		.alignment(Alignment::Center);
	frame.render_widget(empty, message_area);
}
