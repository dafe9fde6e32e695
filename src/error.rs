use std::path::PathBuf;

/// Library-level structured errors for retag.
///
/// Use `thiserror` for structured errors that library consumers can match on.
/// The CLI binaries wrap these with `anyhow` for rich context chains.
#[derive(Debug, thiserror::Error)]
pub enum RetagError {
	#[error("Invalid rule definition `{text}`: {reason}")]
	RuleFormat { text: String, reason: String },

	#[error("Invalid pattern in rule: {pattern}")]
	InvalidPattern {
		pattern: String,
		#[source]
		source: regex::Error,
	},

	#[error("Failed to read config file: {path}")]
	ConfigReadError {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},

	#[error("Failed to parse config file: {path}")]
	ConfigParseError {
		path: PathBuf,
		#[source]
		source: toml::de::Error,
	},

	#[error("Failed to resolve home directory")]
	HomeDirectoryNotFound,

	#[error("Failed to run media inspector on {path}")]
	InspectorFailed {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},

	#[error("Media inspector rejected {path}: {detail}")]
	InspectorRejected { path: PathBuf, detail: String },

	#[error("Malformed media inspector output for {path}")]
	InspectorOutput {
		path: PathBuf,
		#[source]
		source: serde_json::Error,
	},

	#[error("Failed to run media mutator `{program}`")]
	MutatorFailed {
		program: String,
		#[source]
		source: std::io::Error,
	},

	#[error("Media mutator exited with {code}: {detail}")]
	MutatorRejected { code: i32, detail: String },

	#[error("Missing required tags: {}", .missing.join(", "))]
	MissingTags { missing: Vec<&'static str> },

	#[error("Lyrics lookup failed: HTTP {status}")]
	LookupStatus { status: u16 },

	#[error("Lyrics lookup request failed")]
	LookupTransport {
		#[source]
		source: Box<ureq::Error>,
	},

	#[error("Malformed lyrics lookup response")]
	LookupDecode {
		#[source]
		source: std::io::Error,
	},

	#[error("Failed to write {path}")]
	WriteFailed {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},

	#[error("Failed to replace {path}")]
	ReplaceFailed {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},
}

/// Result type alias using RetagError.
pub type Result<T> = std::result::Result<T, RetagError>;
