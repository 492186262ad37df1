//! Load a JSON log resource once and show it as a table.
//!
//! [`init`] is the entry point: it awaits the [`Loader`] for a single
//! resource and hands the resulting dataset to a [`TableDisplay`] through
//! [`render_table`]. Loading and display never run concurrently.

pub mod app_dirs;
pub mod logging;

use anyhow::{Context, Result, anyhow};
use tokio::runtime::Handle;

pub use logview_dataset::{
	Dataset, FieldType, LoadError, Loader, Record, ResourceResolver, Schema, SourceBase,
};
pub use logview_tui::{
	PlainDisplay, Reloader, SearchMode, SortDirection, SortKey, TableConfig, TableDisplay,
	TableOptions, TableOutcome, TerminalDisplay,
};

/// Fetch `resource` and render it once.
///
/// Returns `Ok(None)` without touching the display when the identifier is
/// blank. Load failures are returned before the display is invoked.
pub async fn init<D: TableDisplay>(
	resource: &str,
	loader: &Loader,
	display: &mut D,
	options: TableOptions,
) -> Result<Option<TableOutcome>> {
	let dataset = loader
		.fetch_dataset(resource)
		.await
		.with_context(|| format!("failed to load resource `{}`", resource.trim()))?;
	let Some(dataset) = dataset else {
		return Ok(None);
	};

	let options = with_schema_order(options, loader.schema());
	render_table(display, dataset, options).map(Some)
}

/// Hand a dataset and its presentation options to the display.
pub fn render_table(
	display: &mut impl TableDisplay,
	dataset: Dataset,
	options: TableOptions,
) -> Result<TableOutcome> {
	display.display(TableConfig::new(dataset).with_options(options))
}

/// Declared schema fields lead the column order unless columns are explicit.
fn with_schema_order(mut options: TableOptions, schema: Option<&Schema>) -> TableOptions {
	if let Some(schema) = schema
		&& options.columns.is_none()
		&& options.preferred_order.is_empty()
	{
		options.preferred_order = schema.field_names();
	}
	options
}

/// Build a reloader that re-fetches `resource` on the runtime behind `handle`.
///
/// Must be called from a thread driving a multi-threaded runtime, or from
/// outside any runtime.
pub fn reloader<'a>(handle: Handle, loader: &'a Loader, resource: &'a str) -> Reloader<'a> {
	Box::new(move || {
		let fetched =
			tokio::task::block_in_place(|| handle.block_on(loader.fetch_dataset(resource)))
				.with_context(|| format!("failed to reload resource `{}`", resource.trim()))?;
		fetched.ok_or_else(|| anyhow!("no resource to reload"))
	})
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn schema_order_fills_preferred_columns() {
		let schema = Schema::new()
			.with_field("level", FieldType::String)
			.with_field("id", FieldType::Number);
		let options = with_schema_order(TableOptions::default(), Some(&schema));
		assert_eq!(options.preferred_order, ["level", "id"]);
	}

	#[test]
	fn explicit_columns_ignore_schema_order() {
		let schema = Schema::new().with_field("level", FieldType::String);
		let options = TableOptions {
			columns: Some(vec!["msg".to_string()]),
			..TableOptions::default()
		};
		let options = with_schema_order(options, Some(&schema));
		assert!(options.preferred_order.is_empty());
	}
}
