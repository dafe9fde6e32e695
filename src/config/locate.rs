use crate::config::parser::parse_config_file;
use crate::config::types::LoadedConfig;
use crate::error::{Result, RetagError};
use std::path::{Path, PathBuf};

const CONFIG_FILE_NAME: &str = ".retag.toml";

/// Locate and load the effective config file.
///
/// A `.retag.toml` in the working directory wins; otherwise the user's
/// `~/.retag.toml` is consulted. No config at all is not an error.
pub fn discover_config(start_dir: &Path) -> Result<Option<LoadedConfig>> {
	let local = start_dir.join(CONFIG_FILE_NAME);
	if local.exists() {
		return Ok(Some(LoadedConfig {
			config: parse_config_file(&local)?,
			path: local,
		}));
	}

	let user = user_config_path()?;
	if user.exists() {
		return Ok(Some(LoadedConfig {
			config: parse_config_file(&user)?,
			path: user,
		}));
	}

	Ok(None)
}

/// Get the path to the user's config file.
pub fn user_config_path() -> Result<PathBuf> {
	let home_dir = dirs::home_dir().ok_or(RetagError::HomeDirectoryNotFound)?;
	Ok(home_dir.join(CONFIG_FILE_NAME))
}

#[cfg(test)]
mod tests {
	use super::*;
	use std::fs;

	#[test]
	fn test_user_config_path() {
		let path = user_config_path().unwrap();
		assert!(path.ends_with(".retag.toml"));
	}

	#[test]
	fn test_discover_prefers_local_config() {
		let dir = tempfile::tempdir().unwrap();
		fs::write(dir.path().join(".retag.toml"), "builtin-rules = true").unwrap();

		let loaded = discover_config(dir.path()).unwrap().unwrap();
		assert!(loaded.config.builtin_rules);
		assert_eq!(loaded.path, dir.path().join(".retag.toml"));
	}

	#[test]
	fn test_discover_malformed_local_config_fails() {
		let dir = tempfile::tempdir().unwrap();
		fs::write(dir.path().join(".retag.toml"), "rules = 3").unwrap();

		assert!(discover_config(dir.path()).is_err());
	}
}
