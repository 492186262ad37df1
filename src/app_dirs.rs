//! Resolve configuration and data directories for `logview`.
//!
//! The helpers in this module respect environment overrides while falling back
//! to platform-appropriate locations provided by the `directories` crate.

use std::env;
use std::path::PathBuf;

use anyhow::{Result, anyhow};
use directories::ProjectDirs;

const QUALIFIER: &str = "io";
const ORGANIZATION: &str = "albo";
const APPLICATION: &str = "logview";

pub const CONFIG_DIR_ENV: &str = "LOGVIEW_CONFIG_DIR";
pub const DATA_DIR_ENV: &str = "LOGVIEW_DATA_DIR";

fn project_dirs() -> Result<ProjectDirs> {
	ProjectDirs::from(QUALIFIER, ORGANIZATION, APPLICATION)
		.ok_or_else(|| anyhow!("unable to determine project directories for logview"))
}

/// Resolve an override directory from an environment variable.
///
/// An empty string is treated the same as an unset value.
fn dir_from_env(name: &str) -> Option<PathBuf> {
	let value = env::var_os(name)?;
	if value.is_empty() {
		None
	} else {
		Some(PathBuf::from(value))
	}
}

/// Directory holding `config.toml`.
pub fn get_config_dir() -> Result<PathBuf> {
	if let Some(dir) = dir_from_env(CONFIG_DIR_ENV) {
		return Ok(dir);
	}

	Ok(project_dirs()?.config_local_dir().to_path_buf())
}

/// Directory holding the log file.
pub fn get_data_dir() -> Result<PathBuf> {
	if let Some(dir) = dir_from_env(DATA_DIR_ENV) {
		return Ok(dir);
	}

	Ok(project_dirs()?.data_local_dir().to_path_buf())
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn unset_variable_has_no_override() {
		assert!(dir_from_env("LOGVIEW_TEST_DIR_THAT_IS_NEVER_SET").is_none());
	}

	#[test]
	fn environment_override_wins() {
		let dir = tempfile::tempdir().expect("tempdir");
		// SAFETY: the variable is unique to this test.
		unsafe {
			env::set_var("LOGVIEW_TEST_DATA_OVERRIDE", dir.path());
		}
		assert_eq!(
			dir_from_env("LOGVIEW_TEST_DATA_OVERRIDE").as_deref(),
			Some(dir.path())
		);
		// SAFETY: as above.
		unsafe {
			env::set_var("LOGVIEW_TEST_DATA_OVERRIDE", "");
		}
		assert!(dir_from_env("LOGVIEW_TEST_DATA_OVERRIDE").is_none());
	}
}
