//! Display capabilities that turn a [`TableConfig`] into something visible.

use std::io::Write;

use anyhow::Result;
use unicode_width::UnicodeWidthStr;

use crate::app::{App, Reloader};
use crate::components::rows::natural_widths;
use crate::config::{TableConfig, TableOutcome};
use crate::view::{TableView, cell_line};

/// Something that can present a table of records.
///
/// Implementations own searching, sorting and paging; callers only hand over
/// the dataset and its presentation options.
pub trait TableDisplay {
	fn display(&mut self, config: TableConfig) -> Result<TableOutcome>;
}

impl<T: TableDisplay + ?Sized> TableDisplay for &mut T {
	fn display(&mut self, config: TableConfig) -> Result<TableOutcome> {
		(**self).display(config)
	}
}

/// Full-screen interactive table on the controlling terminal.
#[derive(Default)]
pub struct TerminalDisplay<'a> {
	reloader: Option<Reloader<'a>>,
}

impl<'a> TerminalDisplay<'a> {
	#[must_use]
	pub fn new() -> Self {
		Self { reloader: None }
	}

	/// Enable `Ctrl+R` reloads for every table this display shows.
	#[must_use]
	pub fn with_reloader(mut self, reloader: Reloader<'a>) -> Self {
		self.reloader = Some(reloader);
		self
	}
}

impl TableDisplay for TerminalDisplay<'_> {
	fn display(&mut self, config: TableConfig) -> Result<TableOutcome> {
		let mut app = App::new(config);
		app.reloader = self.reloader.take();
		let outcome = app.run();
		self.reloader = app.reloader.take();
		outcome
	}
}

/// Writes the whole filtered and sorted table as aligned text.
pub struct PlainDisplay<W> {
	writer: W,
}

impl<W: Write> PlainDisplay<W> {
	pub fn new(writer: W) -> Self {
		Self { writer }
	}

	pub fn into_inner(self) -> W {
		self.writer
	}

	fn write_view(&mut self, view: &TableView) -> Result<()> {
		if view.total_len() == 0 {
			writeln!(self.writer, "No records")?;
			return Ok(());
		}

		let columns = view.columns();
		let rows: Vec<_> = view.all_rows().collect();
		let widths = natural_widths(columns, &rows);

		write_line(&mut self.writer, columns, &widths)?;

		let rule_width = widths.iter().sum::<usize>() + widths.len().saturating_sub(1);
		writeln!(self.writer, "{}", "─".repeat(rule_width))?;

		for record in &rows {
			let cells: Vec<String> = columns
				.iter()
				.map(|column| cell_line(record, column))
				.collect();
			write_line(&mut self.writer, &cells, &widths)?;
		}

		writeln!(
			self.writer,
			"{} of {} entries",
			view.filtered_len(),
			view.total_len()
		)?;
		Ok(())
	}
}

impl<W: Write> TableDisplay for PlainDisplay<W> {
	fn display(&mut self, config: TableConfig) -> Result<TableOutcome> {
		let TableConfig { dataset, options } = config;
		let view = TableView::new(dataset, &options);
		self.write_view(&view)?;
		self.writer.flush()?;
		Ok(TableOutcome::cancelled(view.query()))
	}
}

fn write_line(writer: &mut impl Write, cells: &[String], widths: &[usize]) -> Result<()> {
	let mut line = String::new();
	for (index, (cell, &width)) in cells.iter().zip(widths).enumerate() {
		if index > 0 {
			line.push(' ');
		}
		line.push_str(cell);
		line.push_str(&" ".repeat(width.saturating_sub(cell.width())));
	}
	writeln!(writer, "{}", line.trim_end())?;
	Ok(())
}

#[cfg(test)]
mod tests {
	use logview_dataset::Dataset;

	use super::*;
	use crate::config::{SortKey, TableOptions};

	fn plain(text: &str, options: TableOptions) -> (String, TableOutcome) {
		let dataset = Dataset::from_json_slice(text.as_bytes()).expect("parse");
		let mut display = PlainDisplay::new(Vec::new());
		let outcome = display
			.display(TableConfig::new(dataset).with_options(options))
			.expect("display");
		let output = String::from_utf8(display.into_inner()).expect("utf8");
		(output, outcome)
	}

	#[test]
	fn writes_header_rows_and_count() {
		let (output, outcome) = plain(
			r#"[{"id":1,"msg":"a"},{"id":2,"msg":"b"}]"#,
			TableOptions::default(),
		);
		let lines: Vec<&str> = output.lines().collect();
		assert_eq!(lines[0], "id   msg");
		assert!(lines[1].chars().all(|c| c == '─'));
		assert_eq!(lines[2], "1    a");
		assert_eq!(lines[3], "2    b");
		assert_eq!(lines[4], "2 of 2 entries");
		assert_eq!(lines.len(), 5);
		assert!(!outcome.accepted);
	}

	#[test]
	fn writes_every_page_sorted_and_filtered() {
		let rows: Vec<String> = (1..=25)
			.map(|id| format!(r#"{{"id":{id},"msg":"entry {id}"}}"#))
			.collect();
		let options = TableOptions {
			sort: Some(SortKey::descending("id")),
			initial_query: "entry 2".to_string(),
			..TableOptions::default()
		};
		let (output, outcome) = plain(&format!("[{}]", rows.join(",")), options);

		let lines: Vec<&str> = output.lines().collect();
		// 25..=20, 12 and 2
		assert_eq!(lines.len(), 2 + 8 + 1);
		assert!(lines[2].starts_with("25"));
		assert!(lines[8].starts_with("12"));
		assert!(lines[9].starts_with("2 "));
		assert_eq!(lines[10], "8 of 25 entries");
		assert_eq!(outcome.query, "entry 2");
	}

	#[test]
	fn long_cells_are_written_in_full() {
		let message = "disk usage crossed the configured threshold on every mounted volume";
		let (output, _) = plain(
			&format!(r#"[{{"id":1,"msg":"{message}"}},{{"id":2,"msg":"ok"}}]"#),
			TableOptions::default(),
		);
		let lines: Vec<&str> = output.lines().collect();
		assert_eq!(lines[2], format!("1    {message}"));
		assert!(!output.contains('…'));
		assert_eq!(lines[1].chars().count(), 4 + 1 + message.len());
	}

	#[test]
	fn empty_dataset_writes_placeholder() {
		let (output, _) = plain("[]", TableOptions::default());
		assert_eq!(output, "No records\n");
	}

	#[test]
	fn terminal_display_starts_without_reloader() {
		let display = TerminalDisplay::new();
		assert!(display.reloader.is_none());
	}
}
