use std::path::PathBuf;

use clap::{ArgAction, ColorChoice, Parser};

use super::options::{OutputFormat, SearchArg};
use super::styles::{cli_styles, long_version};

/// Command-line arguments accepted by the `logview` binary.
#[derive(Parser, Debug)]
#[command(
	name = "logview",
	version,
	long_version = long_version(),
	about = "Load a JSON log resource and browse it as a sortable, searchable table",
	color = ColorChoice::Auto,
	styles = cli_styles()
)]
pub(crate) struct CliArgs {
	#[arg(
		value_name = "RESOURCE",
		help = "Resource to load, relative to the base URL or root (default: refresh)"
	)]
	pub(crate) resource: Option<String>,
	#[arg(
		short,
		long = "config",
		value_name = "FILE",
		env = "LOGVIEW_CONFIG",
		action = ArgAction::Append,
		help = "Additional configuration file to merge (default: none)"
	)]
	pub(crate) config: Vec<PathBuf>,
	#[arg(
		short = 'n',
		long = "no-config",
		help = "Skip loading default configuration files (default: disabled)"
	)]
	pub(crate) no_config: bool,
	#[arg(
		short = 'u',
		long = "base-url",
		value_name = "URL",
		conflicts_with = "root",
		help = "Fetch the resource over HTTP from this base URL (default: none)"
	)]
	pub(crate) base_url: Option<String>,
	#[arg(
		short = 'r',
		long,
		value_name = "DIR",
		help = "Read the resource from this directory (default: current directory)"
	)]
	pub(crate) root: Option<PathBuf>,
	#[arg(
		long,
		value_name = "SECS",
		help = "Give up on the resource after this many seconds (default: no timeout)"
	)]
	pub(crate) timeout: Option<u64>,
	#[arg(
		short = 't',
		long,
		value_name = "TITLE",
		help = "Set the table title (default: Records)"
	)]
	pub(crate) title: Option<String>,
	#[arg(
		short = 'q',
		long = "query",
		value_name = "QUERY",
		help = "Provide an initial search query (default: empty)"
	)]
	pub(crate) initial_query: Option<String>,
	#[arg(
		long,
		value_name = "THEME",
		help = "Select a theme by name (default: slate)"
	)]
	pub(crate) theme: Option<String>,
	#[arg(
		long = "per-page",
		value_name = "NUM",
		help = "Rows per table page (default: 10)"
	)]
	pub(crate) per_page: Option<usize>,
	#[arg(
		long,
		value_delimiter = ',',
		value_name = "COLUMN",
		help = "Comma-separated columns to show, in order (default: every field)"
	)]
	pub(crate) columns: Option<Vec<String>>,
	#[arg(
		long,
		value_name = "COLUMN",
		help = "Sort by this column on start (default: source order)"
	)]
	pub(crate) sort: Option<String>,
	#[arg(
		long,
		requires = "sort",
		help = "Sort the --sort column in descending order (default: disabled)"
	)]
	pub(crate) descending: bool,
	#[arg(
		long = "search",
		value_enum,
		help = "Choose how the query matches rows (default: substring)"
	)]
	pub(crate) search: Option<SearchArg>,
	#[arg(
		short = 'P',
		long,
		help = "Print the table to stdout instead of opening the interface (default: disabled)"
	)]
	pub(crate) plain: bool,
	#[arg(
		short = 'o',
		long = "output",
		value_enum,
		default_value_t = OutputFormat::Plain,
		help = "Choose how to print the accepted record"
	)]
	pub(crate) output: OutputFormat,
	#[arg(
		short = 'p',
		long = "print-config",
		help = "Print the resolved configuration before running (default: disabled)"
	)]
	pub(crate) print_config: bool,
	#[arg(
		short = 'l',
		long = "list-themes",
		help = "List supported themes and exit (default: disabled)"
	)]
	pub(crate) list_themes: bool,
	#[arg(
		short = 'v',
		long = "verbose",
		action = ArgAction::Count,
		help = "Increase log verbosity; repeat for more (default: warnings only)"
	)]
	pub(crate) verbose: u8,
	#[arg(
		long = "log-file",
		value_name = "FILE",
		help = "Write logs to this file in interactive mode (default: data directory)"
	)]
	pub(crate) log_file: Option<PathBuf>,
}
