use std::env;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum SettingSource {
	CliFlag(&'static str),
	Environment(&'static str),
	ConfigKey(&'static str),
}

impl fmt::Display for SettingSource {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::CliFlag(flag) => write!(f, "CLI flag `{flag}`"),
			Self::Environment(var) => write!(f, "environment variable `{var}`"),
			Self::ConfigKey(key) => write!(f, "configuration key `{key}`"),
		}
	}
}

/// A setting that can be supplied by a flag, the environment or a config key.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Setting {
	pub(crate) key: &'static str,
	pub(crate) env_var: &'static str,
	pub(crate) cli_flag: &'static str,
}

pub(crate) const BASE_URL: Setting = Setting {
	key: "source.base_url",
	env_var: "LOGVIEW__SOURCE__BASE_URL",
	cli_flag: "--base-url",
};
pub(crate) const TIMEOUT: Setting = Setting {
	key: "source.timeout_secs",
	env_var: "LOGVIEW__SOURCE__TIMEOUT_SECS",
	cli_flag: "--timeout",
};
pub(crate) const PER_PAGE: Setting = Setting {
	key: "table.per_page",
	env_var: "LOGVIEW__TABLE__PER_PAGE",
	cli_flag: "--per-page",
};
pub(crate) const SEARCH: Setting = Setting {
	key: "table.search",
	env_var: "LOGVIEW__TABLE__SEARCH",
	cli_flag: "--search",
};
pub(crate) const THEME: Setting = Setting {
	key: "table.theme",
	env_var: "LOGVIEW__TABLE__THEME",
	cli_flag: "--theme",
};

impl Setting {
	/// Work out which layer supplied the value, if one is present.
	pub(crate) fn detect(self, cli_present: bool, value_present: bool) -> Option<SettingSource> {
		if !value_present {
			return None;
		}

		if cli_present {
			return Some(SettingSource::CliFlag(self.cli_flag));
		}

		if env::var_os(self.env_var).is_some() {
			return Some(SettingSource::Environment(self.env_var));
		}

		Some(SettingSource::ConfigKey(self.key))
	}
}

/// Origins of the settings that can fail validation.
#[derive(Debug, Default, Clone)]
pub(crate) struct ConfigSources {
	pub(crate) base_url: Option<SettingSource>,
	pub(crate) timeout: Option<SettingSource>,
	pub(crate) per_page: Option<SettingSource>,
	pub(crate) search: Option<SettingSource>,
	pub(crate) theme: Option<SettingSource>,
}

impl ConfigSources {
	pub(crate) fn source_for(source: &Option<SettingSource>, setting: Setting) -> SettingSource {
		source
			.clone()
			.unwrap_or(SettingSource::ConfigKey(setting.key))
	}

	pub(crate) fn base_url(&self) -> SettingSource {
		Self::source_for(&self.base_url, BASE_URL)
	}

	pub(crate) fn timeout(&self) -> SettingSource {
		Self::source_for(&self.timeout, TIMEOUT)
	}

	pub(crate) fn per_page(&self) -> SettingSource {
		Self::source_for(&self.per_page, PER_PAGE)
	}

	pub(crate) fn search(&self) -> SettingSource {
		Self::source_for(&self.search, SEARCH)
	}

	pub(crate) fn theme(&self) -> SettingSource {
		Self::source_for(&self.theme, THEME)
	}
}
