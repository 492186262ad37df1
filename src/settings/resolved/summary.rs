use logview::SourceBase;

use super::ResolvedConfig;

pub(super) fn render_summary(config: &ResolvedConfig) -> String {
	let mut lines = vec!["Effective configuration:".to_string()];
	lines.push(format!("  Resource: {}", display_or(&config.resource, "(none)")));
	lines.push(match &config.source {
		SourceBase::Url(url) => format!("  Base URL: {url}"),
		SourceBase::Directory(root) => format!("  Root: {}", root.display()),
	});
	lines.push(match config.timeout {
		Some(timeout) => format!("  Timeout: {}s", timeout.as_secs()),
		None => "  Timeout: none".to_string(),
	});

	let table = &config.table;
	if let Some(title) = &table.title {
		lines.push(format!("  Title: {title}"));
	}
	lines.push(format!("  Rows per page: {}", table.per_page));
	match &table.columns {
		Some(columns) => lines.push(format!("  Columns: {}", columns.join(", "))),
		None => lines.push("  Columns: (from data)".to_string()),
	}
	match &table.sort {
		Some(key) => lines.push(format!("  Sort: {} {}", key.column, key.direction.indicator())),
		None => lines.push("  Sort: (source order)".to_string()),
	}
	lines.push(format!("  Search: {}", table.search_mode));
	if !table.initial_query.is_empty() {
		lines.push(format!("  Initial query: {}", table.initial_query));
	}
	lines.push(format!(
		"  Theme: {}",
		table.theme.as_deref().unwrap_or("(use the library default)")
	));

	if config.schema.is_empty() {
		lines.push("  Schema: none".to_string());
	} else {
		let fields: Vec<String> = config
			.schema
			.fields()
			.iter()
			.map(|(name, field_type)| format!("{name}={field_type}"))
			.collect();
		lines.push(format!("  Schema: {}", fields.join(", ")));
	}

	let mut text = lines.join("\n");
	text.push('\n');
	text
}

fn display_or<'a>(value: &'a str, fallback: &'a str) -> &'a str {
	if value.trim().is_empty() {
		fallback
	} else {
		value
	}
}
