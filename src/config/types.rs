use serde::Deserialize;
use std::path::PathBuf;

/// Top-level configuration from a `.retag.toml` file.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Config {
	/// If true, prepend the built-in cleanup rules before any configured
	/// rules.
	#[serde(default)]
	pub builtin_rules: bool,

	/// Textual rule definitions, applied in file order. A malformed rule
	/// aborts startup before any file is processed.
	#[serde(default)]
	pub rules: Vec<String>,
}

/// A loaded configuration with its source path for debugging/display.
#[derive(Debug, Clone)]
pub struct LoadedConfig {
	/// The parsed configuration.
	pub config: Config,

	/// The path this config was loaded from.
	pub path: PathBuf,
}
