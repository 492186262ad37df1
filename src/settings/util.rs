/// Trim column names and drop empty ones, keeping the first of any duplicates.
pub(super) fn sanitize_columns(columns: Vec<String>) -> Vec<String> {
	let mut cleaned: Vec<String> = Vec::with_capacity(columns.len());
	for column in columns {
		let column = column.trim();
		if column.is_empty() || cleaned.iter().any(|seen| seen == column) {
			continue;
		}
		cleaned.push(column.to_string());
	}
	cleaned
}

/// Trimmed text, or `None` when nothing is left.
pub(super) fn non_empty(value: Option<String>) -> Option<String> {
	value
		.map(|value| value.trim().to_string())
		.filter(|value| !value.is_empty())
}
