use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use config::{Config, File, FileFormat};
use logview::{FieldType, SearchMode, SortDirection, SourceBase};

use super::RawConfig;
use crate::cli::CliArgs;

fn raw_from_toml(text: &str) -> RawConfig {
	Config::builder()
		.add_source(File::from_str(text, FileFormat::Toml))
		.build()
		.expect("build")
		.try_deserialize()
		.expect("deserialize")
}

fn cli(args: &[&str]) -> CliArgs {
	let mut argv = vec!["logview", "--no-config"];
	argv.extend_from_slice(args);
	CliArgs::parse_from(argv)
}

#[test]
fn defaults_read_refresh_from_the_current_directory() {
	let cli = cli(&[]);
	let resolved = RawConfig::default().resolve(&cli).expect("resolve");

	assert_eq!(resolved.resource, "refresh");
	assert!(matches!(resolved.source, SourceBase::Directory(ref root) if root.is_absolute()));
	assert_eq!(resolved.timeout, None);
	assert_eq!(resolved.table.per_page, 10);
	assert_eq!(resolved.table.search_mode, SearchMode::Substring);
	assert!(resolved.schema.is_empty());
}

#[test]
fn file_sections_are_resolved() {
	let raw = raw_from_toml(
		r#"
[source]
resource = "logs/today.json"
base_url = "http://127.0.0.1:5000/"
timeout_secs = 30

[table]
title = "Today"
per_page = 25
columns = [" id ", "msg", ""]
sort = "id"
descending = true
search = "fuzzy"
theme = "light"

[schema]
msg = "string"
id = "number"
"#,
	);
	let resolved = raw.resolve(&cli(&[])).expect("resolve");

	assert_eq!(resolved.resource, "logs/today.json");
	match &resolved.source {
		SourceBase::Url(url) => assert_eq!(url.as_str(), "http://127.0.0.1:5000/"),
		other => panic!("expected a URL base, got {other:?}"),
	}
	assert_eq!(resolved.timeout, Some(Duration::from_secs(30)));
	assert_eq!(resolved.table.title.as_deref(), Some("Today"));
	assert_eq!(resolved.table.per_page, 25);
	assert_eq!(
		resolved.table.columns,
		Some(vec!["id".to_string(), "msg".to_string()])
	);
	let sort = resolved.table.sort.expect("sort");
	assert_eq!(sort.column, "id");
	assert_eq!(sort.direction, SortDirection::Descending);
	assert_eq!(resolved.table.search_mode, SearchMode::Fuzzy);
	assert_eq!(
		resolved.schema.fields(),
		[
			("msg".to_string(), FieldType::String),
			("id".to_string(), FieldType::Number)
		]
	);
}

#[test]
fn cli_overrides_take_precedence() {
	let mut raw = raw_from_toml(
		r#"
[source]
resource = "from-file"
base_url = "http://example.invalid/"

[table]
per_page = 5
search = "fuzzy"
"#,
	);
	let cli = cli(&[
		"from-cli",
		"--root",
		"/var/log/app",
		"--per-page",
		"50",
		"--search",
		"substring",
		"--sort",
		"level",
		"--query",
		"error",
		"--theme",
		"slate",
	]);
	raw.apply_cli_overrides(&cli);
	let resolved = raw.resolve(&cli).expect("resolve");

	assert_eq!(resolved.resource, "from-cli");
	assert_eq!(
		resolved.source,
		SourceBase::Directory(PathBuf::from("/var/log/app"))
	);
	assert_eq!(resolved.table.per_page, 50);
	assert_eq!(resolved.table.search_mode, SearchMode::Substring);
	let sort = resolved.table.sort.expect("sort");
	assert_eq!(sort.column, "level");
	assert_eq!(sort.direction, SortDirection::Ascending);
	assert_eq!(resolved.table.initial_query, "error");
	assert_eq!(resolved.table.theme.as_deref(), Some("slate"));
}

#[test]
fn empty_resource_is_kept_for_the_loader() {
	let raw = raw_from_toml("[source]\nresource = \"\"\n");
	let resolved = raw.resolve(&cli(&[])).expect("resolve");
	assert_eq!(resolved.resource, "");
}

#[test]
fn unknown_search_mode_names_key_and_origin() {
	let raw = raw_from_toml("[table]\nsearch = \"regex\"\n");
	let err = raw.resolve(&cli(&[])).expect_err("invalid search");
	let message = err.to_string();
	assert!(message.contains("table.search"));
	assert!(message.contains("configuration key"));
	assert!(message.contains("regex"));
}

#[test]
fn zero_per_page_from_cli_is_rejected() {
	let mut raw = RawConfig::default();
	let cli = cli(&["--per-page", "0"]);
	raw.apply_cli_overrides(&cli);
	let message = raw.resolve(&cli).expect_err("zero per page").to_string();
	assert!(message.contains("table.per_page"));
	assert!(message.contains("CLI flag `--per-page`"));
}

#[test]
fn unparsable_base_url_is_rejected() {
	let mut raw = RawConfig::default();
	let cli = cli(&["--base-url", "not a url"]);
	raw.apply_cli_overrides(&cli);
	let message = raw.resolve(&cli).expect_err("bad url").to_string();
	assert!(message.contains("source.base_url"));
}

#[test]
fn non_http_base_url_is_rejected() {
	let raw = raw_from_toml("[source]\nbase_url = \"ftp://example.invalid/\"\n");
	let message = raw.resolve(&cli(&[])).expect_err("ftp").to_string();
	assert!(message.contains("only http and https"));
}

#[test]
fn unknown_schema_type_is_rejected() {
	let raw = raw_from_toml("[schema]\nid = \"integer\"\n");
	let message = raw.resolve(&cli(&[])).expect_err("bad type").to_string();
	assert!(message.contains("schema.id"));
	assert!(message.contains("integer"));
}
