use anyhow::Result;
use logview::TableOutcome;
use logview_tui::cell_text;
use serde_json::{Value, json};

/// Plain-text representation of the outcome, one `field: value` line per field.
pub(crate) fn format_plain(outcome: &TableOutcome) -> String {
	if !outcome.accepted {
		return format!("Cancelled (query: '{}')", outcome.query);
	}

	match &outcome.selection {
		Some(record) => record
			.keys()
			.map(|field| format!("{field}: {}", cell_text(record, field)))
			.collect::<Vec<_>>()
			.join("\n"),
		None => "No selection".to_string(),
	}
}

pub(crate) fn print_plain(outcome: &TableOutcome) {
	println!("{}", format_plain(outcome));
}

/// Format the outcome as a JSON document.
pub(crate) fn format_outcome_json(outcome: &TableOutcome) -> Result<String> {
	let selection = match &outcome.selection {
		Some(record) => Value::Object(record.clone()),
		None => Value::Null,
	};

	let payload = json!({
		"accepted": outcome.accepted,
		"query": outcome.query,
		"selection": selection,
	});

	Ok(serde_json::to_string_pretty(&payload)?)
}

pub(crate) fn print_json(outcome: &TableOutcome) -> Result<()> {
	println!("{}", format_outcome_json(outcome)?);
	Ok(())
}
