use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::text::Span;
use ratatui::widgets::Paragraph;

use crate::style::Theme;

/// Text shown beneath the table.
pub struct FooterContext<'a> {
	/// Paging summary, e.g. "Showing 1 to 10 of 57 entries".
	pub summary: &'a str,
	/// Transient status such as the outcome of a reload.
	pub status: Option<&'a str>,
	/// Zero-based current page.
	pub page: usize,
	pub page_count: usize,
	pub area: Rect,
	pub theme: &'a Theme,
}

/// Render the summary on the left and the page indicator on the right, with
/// any status message replacing the summary.
pub fn render_footer(frame: &mut Frame, footer: FooterContext<'_>) {
	let FooterContext {
		summary,
		status,
		page,
		page_count,
		area,
		theme,
	} = footer;
	if area.width == 0 || area.height == 0 {
		return;
	}

	let pages = page_label(page, page_count);
	let pages_width = pages.chars().count() as u16;
	let split = Layout::default()
		.direction(Direction::Horizontal)
		.constraints([Constraint::Min(0), Constraint::Length(pages_width)])
		.split(area);

	let left = status.unwrap_or(summary);
	frame.render_widget(
		Paragraph::new(Span::styled(left.to_string(), theme.footer)),
		split[0],
	);
	frame.render_widget(
		Paragraph::new(Span::styled(pages, theme.footer)).alignment(Alignment::Right),
		split[1],
	);
}

/// One-based page indicator.
#[must_use]
pub fn page_label(page: usize, page_count: usize) -> String {
	format!("Page {}/{}", page + 1, page_count.max(1))
}
