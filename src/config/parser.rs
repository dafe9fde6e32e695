use crate::config::types::Config;
use crate::error::{Result, RetagError};
use std::path::Path;

/// Parse a config file from the given path.
pub fn parse_config_file(path: &Path) -> Result<Config> {
	let content = std::fs::read_to_string(path).map_err(|source| RetagError::ConfigReadError {
		path: path.to_path_buf(),
		source,
	})?;

	parse_config_str(&content, path)
}

/// Parse a config from a string (useful for testing).
pub fn parse_config_str(content: &str, path: &Path) -> Result<Config> {
	toml::from_str(content).map_err(|source| RetagError::ConfigParseError {
		path: path.to_path_buf(),
		source,
	})
}

#[cfg(test)]
mod tests {
	use super::*;
	use std::path::PathBuf;

	#[test]
	fn test_parse_empty_config() {
		let config = parse_config_str("", &PathBuf::from("test.toml")).unwrap();
		assert!(!config.builtin_rules);
		assert!(config.rules.is_empty());
	}

	#[test]
	fn test_parse_basic_config() {
		let content = r#"
builtin-rules = true
rules = [
    '(?i)title/r:^\d+\.?\s*(.+)$/\1/',
    '(?i)album[_\s]?artist/m:album_artist/Various Artists/',
]
"#;
		let config = parse_config_str(content, &PathBuf::from("test.toml")).unwrap();
		assert!(config.builtin_rules);
		assert_eq!(config.rules.len(), 2);
		assert!(config.rules[0].starts_with("(?i)title"));
	}

	#[test]
	fn test_parse_invalid_toml() {
		let result = parse_config_str("rules = not-a-list", &PathBuf::from("test.toml"));
		assert!(matches!(
			result.unwrap_err(),
			RetagError::ConfigParseError { .. }
		));
	}
}
