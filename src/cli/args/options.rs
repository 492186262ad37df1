use clap::ValueEnum;
use logview::SearchMode;

/// Search modes accepted via the command line.
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub(crate) enum SearchArg {
	Substring,
	Fuzzy,
}

impl SearchArg {
	/// Return the string representation consumed by configuration loading.
	pub(crate) fn as_str(self) -> &'static str {
		SearchMode::from(self).as_str()
	}
}

impl From<SearchArg> for SearchMode {
	fn from(arg: SearchArg) -> Self {
		match arg {
			SearchArg::Substring => SearchMode::Substring,
			SearchArg::Fuzzy => SearchMode::Fuzzy,
		}
	}
}

/// How the accepted selection is printed after the table closes.
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub(crate) enum OutputFormat {
	Plain,
	Json,
}
