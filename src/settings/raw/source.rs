use std::env;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use logview::SourceBase;
use serde::Deserialize;
use url::Url;

use super::super::resolved::{ConfigError, ConfigSources};
use crate::cli::CliArgs;

/// Resource used when neither the CLI nor the configuration names one.
pub(crate) const DEFAULT_RESOURCE: &str = "refresh";

/// Where the dataset comes from, as read from disk.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct SourceSection {
	pub(super) resource: Option<String>,
	pub(super) base_url: Option<String>,
	pub(super) root: Option<PathBuf>,
	pub(super) timeout_secs: Option<u64>,
}

pub(super) struct SourceResolution {
	pub(super) resource: String,
	pub(super) base: SourceBase,
	pub(super) timeout: Option<Duration>,
}

impl SourceSection {
	pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		if let Some(resource) = cli.resource.clone() {
			self.resource = Some(resource);
		}
		// The two bases are exclusive; a flag for one clears the other.
		if let Some(base_url) = cli.base_url.clone() {
			self.base_url = Some(base_url);
			self.root = None;
		}
		if let Some(root) = cli.root.clone() {
			self.root = Some(root);
			self.base_url = None;
		}
		if let Some(timeout) = cli.timeout {
			self.timeout_secs = Some(timeout);
		}
	}

	pub(super) fn resolve(self, sources: &ConfigSources) -> Result<SourceResolution> {
		let base = match self.base_url {
			Some(raw) => SourceBase::Url(parse_base_url(&raw, sources)?),
			None => {
				let mut root = match self.root {
					Some(path) => path,
					None => env::current_dir().context("failed to determine working directory")?,
				};
				if root.is_relative() {
					root = env::current_dir()
						.context("failed to resolve current directory for root")?
						.join(root);
				}
				SourceBase::Directory(root)
			}
		};

		Ok(SourceResolution {
			resource: self
				.resource
				.unwrap_or_else(|| DEFAULT_RESOURCE.to_string()),
			base,
			timeout: self.timeout_secs.map(Duration::from_secs),
		})
	}
}

fn parse_base_url(raw: &str, sources: &ConfigSources) -> Result<Url, ConfigError> {
	let url = Url::parse(raw.trim()).map_err(|err| {
		ConfigError::invalid("source.base_url", raw, sources.base_url(), err.to_string())
	})?;
	if !matches!(url.scheme(), "http" | "https") {
		return Err(ConfigError::invalid(
			"source.base_url",
			raw,
			sources.base_url(),
			"only http and https URLs are supported",
		));
	}
	Ok(url)
}
