use anyhow::anyhow;
use logview_dataset::Dataset;
use ratatui::Terminal;
use ratatui::backend::TestBackend;
use ratatui::buffer::Buffer;
use ratatui::crossterm::event::{
	KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use serde_json::json;

use super::App;
use crate::config::{SortDirection, SortKey, TableConfig, TableOptions};

fn dataset(text: &str) -> Dataset {
	Dataset::from_json_slice(text.as_bytes()).expect("parse")
}

fn numbered(count: usize) -> Dataset {
	let rows: Vec<String> = (1..=count)
		.map(|id| format!(r#"{{"id":{id},"msg":"entry {id}"}}"#))
		.collect();
	dataset(&format!("[{}]", rows.join(",")))
}

fn key(code: KeyCode) -> KeyEvent {
	KeyEvent::new(code, KeyModifiers::NONE)
}

fn ctrl(c: char) -> KeyEvent {
	KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
}

fn type_text(app: &mut App<'_>, text: &str) {
	for c in text.chars() {
		assert!(app.handle_key(key(KeyCode::Char(c))).is_none());
	}
}

fn mouse(kind: MouseEventKind, column: u16, row: u16) -> MouseEvent {
	MouseEvent {
		kind,
		column,
		row,
		modifiers: KeyModifiers::NONE,
	}
}

fn render_buffer(app: &mut App<'_>, width: u16, height: u16) -> Buffer {
	let backend = TestBackend::new(width, height);
	let mut terminal = Terminal::new(backend).expect("terminal");
	terminal.draw(|frame| app.draw(frame)).expect("draw");
	terminal.backend().buffer().clone()
}

fn render(app: &mut App<'_>, width: u16, height: u16) -> Vec<String> {
	buffer_lines(&render_buffer(app, width, height))
}

fn frame_text(app: &mut App<'_>) -> String {
	render(app, 40, 8).join("\n")
}

fn buffer_lines(buf: &Buffer) -> Vec<String> {
	(0..buf.area.height)
		.map(|y| {
			(0..buf.area.width)
				.map(|x| buf[(x, y)].symbol())
				.collect::<String>()
		})
		.collect()
}

fn line_containing(lines: &[String], needle: &str) -> Option<usize> {
	lines.iter().position(|line| line.contains(needle))
}

#[test]
fn renders_rows_in_order_with_summary() {
	let mut app = App::new(TableConfig::new(dataset(
		r#"[{"id":1,"msg":"alpha"},{"id":2,"msg":"beta"}]"#,
	)));
	let lines = render(&mut app, 80, 12);

	let alpha = line_containing(&lines, "alpha").expect("alpha row");
	let beta = line_containing(&lines, "beta").expect("beta row");
	assert!(alpha < beta);
	assert!(line_containing(&lines, "msg").expect("header") < alpha);
	assert!(lines[11].contains("Showing 1 to 2 of 2 entries"));
	assert!(lines[11].contains("Page 1/1"));
	assert!(lines[0].contains("2/2"));
	assert!(lines[1].contains("Records"));
}

#[test]
fn empty_dataset_renders_placeholder_message() {
	let mut app = App::new(TableConfig::new(Dataset::new()));
	let lines = render(&mut app, 60, 10);

	assert!(line_containing(&lines, "No records").is_some());
	assert!(lines[9].contains("Showing 0 to 0 of 0 entries"));
}

#[test]
fn filtered_table_reports_total_and_no_matches() {
	let mut app = App::new(TableConfig::new(numbered(3)));
	type_text(&mut app, "zzz");
	let lines = render(&mut app, 100, 10);

	assert!(line_containing(&lines, "No matching records").is_some());
	assert!(lines[9].contains("(filtered from 3 total entries)"));
}

#[test]
fn configured_title_is_drawn_on_the_border() {
	let options = TableOptions {
		title: Some("Build log".to_string()),
		..TableOptions::default()
	};
	let mut app = App::new(TableConfig::new(numbered(1)).with_options(options));
	let lines = render(&mut app, 60, 8);
	assert!(lines[1].contains("Build log"));
}

#[test]
fn typing_filters_and_resets_selection() {
	let mut app = App::new(TableConfig::new(numbered(12)));
	app.handle_key(key(KeyCode::Down));
	assert_eq!(app.table_state.selected(), Some(1));

	type_text(&mut app, "entry 1");
	// entry 1, 10, 11, 12
	assert_eq!(app.view.filtered_len(), 4);
	assert_eq!(app.view.query(), "entry 1");
	assert_eq!(app.table_state.selected(), Some(0));
}

#[test]
fn enter_accepts_the_selected_record() {
	let mut app = App::new(TableConfig::new(numbered(3)));
	app.handle_key(key(KeyCode::Down));

	let outcome = app.handle_key(key(KeyCode::Enter)).expect("outcome");
	assert!(outcome.accepted);
	let selection = outcome.selection.expect("selection");
	assert_eq!(selection.get("id"), Some(&json!(2)));
}

#[test]
fn escape_and_ctrl_c_cancel_with_query() {
	let mut app = App::new(TableConfig::new(numbered(3)));
	type_text(&mut app, "2");

	let outcome = app.handle_key(key(KeyCode::Esc)).expect("outcome");
	assert!(!outcome.accepted);
	assert!(outcome.selection.is_none());
	assert_eq!(outcome.query, "2");

	let outcome = app.handle_key(ctrl('c')).expect("outcome");
	assert!(!outcome.accepted);
}

#[test]
fn ctrl_s_cycles_sort_on_cursor_column() {
	let mut app = App::new(TableConfig::new(numbered(3)));
	app.handle_key(ctrl('s'));
	let sort = app.view.sort().expect("sorted");
	assert_eq!(sort.column, "id");
	assert_eq!(sort.direction, SortDirection::Ascending);

	app.handle_key(ctrl('s'));
	assert_eq!(
		app.view.sort().map(|sort| sort.direction),
		Some(SortDirection::Descending)
	);
	assert_eq!(
		app.current_selection().and_then(|record| record.get("id").cloned()),
		Some(json!(3))
	);

	app.handle_key(ctrl('s'));
	assert!(app.view.sort().is_none());

	app.handle_key(key(KeyCode::Right));
	app.handle_key(ctrl('s'));
	assert_eq!(app.view.sort().map(|sort| sort.column.as_str()), Some("msg"));

	app.handle_key(key(KeyCode::Right));
	assert_eq!(app.sort_cursor, 1);
}

#[test]
fn arrow_keys_cross_page_boundaries() {
	let mut app = App::new(TableConfig::new(numbered(15)));
	for _ in 0..9 {
		app.handle_key(key(KeyCode::Down));
	}
	assert_eq!(app.view.page(), 0);
	assert_eq!(app.table_state.selected(), Some(9));

	app.handle_key(key(KeyCode::Down));
	assert_eq!(app.view.page(), 1);
	assert_eq!(app.table_state.selected(), Some(0));

	app.handle_key(key(KeyCode::Up));
	assert_eq!(app.view.page(), 0);
	assert_eq!(app.table_state.selected(), Some(9));
}

#[test]
fn page_keys_move_between_pages() {
	let mut app = App::new(TableConfig::new(numbered(25)));
	app.handle_key(key(KeyCode::PageDown));
	assert_eq!(app.view.page(), 1);
	app.handle_key(key(KeyCode::End));
	assert_eq!(app.view.page(), 2);
	assert_eq!(app.view.visible_len(), 5);
	app.handle_key(key(KeyCode::PageUp));
	assert_eq!(app.view.page(), 1);
	app.handle_key(key(KeyCode::Home));
	assert_eq!(app.view.page(), 0);
}

#[test]
fn reload_replaces_the_dataset() {
	let mut calls = 0;
	let reloader = Box::new(move || -> anyhow::Result<Dataset> {
		calls += 1;
		Ok(numbered(4 + calls))
	});
	let mut app = App::new(TableConfig::new(numbered(2))).with_reloader(reloader);

	app.handle_key(ctrl('r'));
	assert_eq!(app.view.total_len(), 5);
	assert_eq!(app.status.as_deref(), Some("Reloaded 5 records"));

	app.handle_key(ctrl('r'));
	assert_eq!(app.view.total_len(), 6);
}

#[test]
fn failed_reload_keeps_the_current_table() {
	let reloader = Box::new(|| -> anyhow::Result<Dataset> { Err(anyhow!("source unreachable")) });
	let mut app = App::new(TableConfig::new(numbered(2))).with_reloader(reloader);

	app.handle_key(ctrl('r'));
	assert_eq!(app.view.total_len(), 2);
	let status = app.status.clone().expect("status");
	assert!(status.contains("source unreachable"));

	let lines = render(&mut app, 80, 8);
	assert!(lines[7].contains("Reload failed"));
}

#[test]
fn reload_without_a_source_reports_unavailable() {
	let mut app = App::new(TableConfig::new(numbered(2)));
	app.handle_key(ctrl('r'));
	assert_eq!(app.status.as_deref(), Some("Reload is not available"));
}

#[test]
fn unknown_theme_falls_back_to_default() {
	let options = TableOptions {
		theme: Some("no-such-theme".to_string()),
		..TableOptions::default()
	};
	let app = App::new(TableConfig::new(numbered(1)).with_options(options));
	assert_eq!(app.theme, crate::style::default_theme());
}

#[test]
fn two_records_frame_snapshot() {
	let mut app = App::new(TableConfig::new(dataset(
		r#"[{"id":1,"msg":"a"},{"id":2,"msg":"b"}]"#,
	)));
	let snapshot = frame_text(&mut app);
	insta::assert_snapshot!("two_records_frame", snapshot);
}

#[test]
fn sorted_descending_frame_snapshot() {
	let options = TableOptions {
		sort: Some(SortKey::descending("id")),
		..TableOptions::default()
	};
	let mut app = App::new(
		TableConfig::new(dataset(r#"[{"id":1,"msg":"a"},{"id":2,"msg":"b"}]"#)).with_options(options),
	);
	let snapshot = frame_text(&mut app);
	insta::assert_snapshot!("sorted_descending_frame", snapshot);
}

#[test]
fn empty_frame_snapshot() {
	let mut app = App::new(TableConfig::new(Dataset::new()));
	let snapshot = frame_text(&mut app);
	insta::assert_snapshot!("empty_frame", snapshot);
}

#[test]
fn same_dataset_renders_identical_buffers() {
	let text = r#"[{"id":1,"msg":"a"},{"id":2,"msg":"b"}]"#;
	let mut first = App::new(TableConfig::new(dataset(text)));
	let mut second = App::new(TableConfig::new(dataset(text)));

	assert_eq!(render_buffer(&mut first, 60, 10), render_buffer(&mut second, 60, 10));
}

#[test]
fn wheel_over_the_table_moves_the_selection() {
	let mut app = App::new(TableConfig::new(numbered(3)));
	render(&mut app, 60, 12);
	assert_eq!(app.table_state.selected(), Some(0));

	app.handle_mouse(mouse(MouseEventKind::ScrollDown, 10, 5));
	assert!(app.results_hovered);
	assert_eq!(app.table_state.selected(), Some(1));

	app.handle_mouse(mouse(MouseEventKind::ScrollUp, 10, 5));
	assert_eq!(app.table_state.selected(), Some(0));

	// The prompt line sits above the table.
	app.handle_mouse(mouse(MouseEventKind::ScrollDown, 10, 0));
	assert!(!app.results_hovered);
	assert_eq!(app.table_state.selected(), Some(0));
}

#[test]
fn click_selects_the_row_under_the_pointer() {
	let mut app = App::new(TableConfig::new(numbered(3)));
	render(&mut app, 60, 12);
	let area = app.results_area.expect("results area");
	// Border, header and separator come before the first row.
	let first_row = area.y + 3;

	app.handle_mouse(mouse(MouseEventKind::Down(MouseButton::Left), 10, first_row + 2));
	assert_eq!(app.table_state.selected(), Some(2));

	app.handle_mouse(mouse(MouseEventKind::Down(MouseButton::Left), 10, first_row));
	assert_eq!(app.table_state.selected(), Some(0));

	// Header and rows past the last record leave the selection alone.
	app.handle_mouse(mouse(MouseEventKind::Down(MouseButton::Left), 10, area.y + 1));
	assert_eq!(app.table_state.selected(), Some(0));
	app.handle_mouse(mouse(MouseEventKind::Down(MouseButton::Left), 10, first_row + 5));
	assert_eq!(app.table_state.selected(), Some(0));
}
