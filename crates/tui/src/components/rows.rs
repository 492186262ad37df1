use logview_dataset::Record;
use ratatui::layout::Constraint;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Cell, Row};
use unicode_truncate::UnicodeTruncateStr;
use unicode_width::UnicodeWidthStr;

use crate::config::SortKey;
use crate::view::cell_line;

/// Widest a column grows before its cells are truncated.
pub const MAX_COLUMN_WIDTH: usize = 48;
/// Marker appended to truncated cells.
const ELLIPSIS: &str = "…";

/// Display width of each column: the widest of header and visible cells,
/// capped at [`MAX_COLUMN_WIDTH`]. The header includes room for a sort marker.
#[must_use]
pub fn column_widths(columns: &[String], records: &[&Record]) -> Vec<usize> {
	natural_widths(columns, records)
		.into_iter()
		.map(|width| width.min(MAX_COLUMN_WIDTH))
		.collect()
}

/// Uncapped form of [`column_widths`].
#[must_use]
pub fn natural_widths(columns: &[String], records: &[&Record]) -> Vec<usize> {
	columns
		.iter()
		.map(|column| {
			let header = column.width() + 2;
			let widest_cell = records
				.iter()
				.map(|record| cell_line(record, column).width())
				.max()
				.unwrap_or(0);
			header.max(widest_cell)
		})
		.collect()
}

/// Constraints for the table: fixed widths with the last column filling the rest.
#[must_use]
pub fn width_constraints(widths: &[usize]) -> Vec<Constraint> {
	let last = widths.len().saturating_sub(1);
	widths
		.iter()
		.enumerate()
		.map(|(index, &width)| {
			let width = u16::try_from(width).unwrap_or(u16::MAX);
			if index == last {
				Constraint::Min(width)
			} else {
				Constraint::Length(width)
			}
		})
		.collect()
}

/// Cut `text` to `width` display columns, marking the cut with an ellipsis.
#[must_use]
pub fn truncate_to_width(text: &str, width: usize) -> String {
	if text.width() <= width {
		return text.to_string();
	}
	if width == 0 {
		return String::new();
	}
	let (kept, _) = text.unicode_truncate(width - ELLIPSIS.width());
	format!("{kept}{ELLIPSIS}")
}

/// Header labels, with the sort marker on the sorted column and the sort
/// cursor column drawn in `cursor_style`.
#[must_use]
pub fn build_headers<'a>(
	columns: &'a [String],
	sort: Option<&SortKey>,
	cursor: Option<usize>,
	cursor_style: Style,
) -> Vec<Line<'a>> {
	columns
		.iter()
		.enumerate()
		.map(|(index, column)| {
			let mut spans = vec![Span::raw(column.as_str())];
			if let Some(key) = sort.filter(|key| key.column == *column) {
				spans.push(Span::raw(" "));
				spans.push(Span::raw(key.direction.indicator()));
			}
			let line = Line::from(spans);
			if cursor == Some(index) {
				line.style(cursor_style)
			} else {
				line
			}
		})
		.collect()
}

/// Build table rows for the visible records, highlighting query terms.
#[must_use]
pub fn build_record_rows<'a>(
	records: &[&Record],
	columns: &[String],
	widths: &[usize],
	terms: &[String],
	highlight_style: Style,
) -> Vec<Row<'a>> {
	records
		.iter()
		.map(|record| {
			let cells = columns.iter().enumerate().map(|(index, column)| {
				let width = widths.get(index).copied().unwrap_or(MAX_COLUMN_WIDTH);
				let text = truncate_to_width(&cell_line(record, column), width);
				Cell::from(highlight_terms(text, terms, highlight_style))
			});
			Row::new(cells)
		})
		.collect()
}

/// Split `text` into spans, styling every case-insensitive occurrence of any term.
#[must_use]
pub fn highlight_terms<'a>(text: String, terms: &[String], style: Style) -> Line<'a> {
	let ranges = match_ranges(&text, terms);
	if ranges.is_empty() {
		return Line::from(text);
	}

	let mut spans = Vec::with_capacity(ranges.len() * 2 + 1);
	let mut cursor = 0;
	for (start, end) in ranges {
		if start > cursor {
			spans.push(Span::raw(text[cursor..start].to_string()));
		}
		spans.push(Span::styled(text[start..end].to_string(), style));
		cursor = end;
	}
	if cursor < text.len() {
		spans.push(Span::raw(text[cursor..].to_string()));
	}
	Line::from(spans)
}

/// Merged byte ranges of term matches in `text`.
///
/// Matching runs on a lowercased copy, so only characters whose lowercase
/// form has the same byte length can be mapped back; texts where that does
/// not hold are left unhighlighted.
fn match_ranges(text: &str, terms: &[String]) -> Vec<(usize, usize)> {
	let lowered = text.to_lowercase();
	if lowered.len() != text.len() {
		return Vec::new();
	}

	let mut ranges: Vec<(usize, usize)> = Vec::new();
	for term in terms.iter().filter(|term| !term.is_empty()) {
		for (start, matched) in lowered.match_indices(term.as_str()) {
			let end = start + matched.len();
			if text.is_char_boundary(start) && text.is_char_boundary(end) {
				ranges.push((start, end));
			}
		}
	}

	ranges.sort_unstable();
	let mut merged: Vec<(usize, usize)> = Vec::with_capacity(ranges.len());
	for (start, end) in ranges {
		match merged.last_mut() {
			Some(last) if start <= last.1 => last.1 = last.1.max(end),
			_ => merged.push((start, end)),
		}
	}
	merged
}
