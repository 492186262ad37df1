use logview_tui::style::by_name;

use super::{ConfigError, ConfigSources, ResolvedConfig};

pub(super) fn validate(
	config: &ResolvedConfig,
	sources: &ConfigSources,
) -> Result<(), ConfigError> {
	if config.table.per_page == 0 {
		return Err(ConfigError::invalid(
			"table.per_page",
			"0",
			sources.per_page(),
			"must be greater than zero",
		));
	}

	if config.timeout.is_some_and(|timeout| timeout.is_zero()) {
		return Err(ConfigError::invalid(
			"source.timeout_secs",
			"0",
			sources.timeout(),
			"must be greater than zero",
		));
	}

	if let Some(theme) = &config.table.theme
		&& by_name(theme).is_none()
	{
		return Err(ConfigError::invalid(
			"table.theme",
			theme.clone(),
			sources.theme(),
			"unknown theme; see --list-themes",
		));
	}

	Ok(())
}
