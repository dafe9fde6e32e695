use crate::error::{Result, RetagError};
use crate::rules::TagSet;
use serde::Deserialize;
use std::path::Path;
use std::process::Command;

/// Structured description of a media file, as reported by the inspector.
#[derive(Debug, Clone)]
pub struct MediaInfo {
	/// Tag name to tag value, in discovery order.
	pub tags: TagSet,

	/// Duration in seconds; 0.0 when the inspector reports none.
	pub duration: f64,
}

#[derive(Debug, Deserialize)]
struct ProbeOutput {
	#[serde(default)]
	format: ProbeFormat,
}

#[derive(Debug, Default, Deserialize)]
struct ProbeFormat {
	#[serde(default)]
	tags: TagSet,
	duration: Option<String>,
}

/// Boundary to the external media inspection tool.
#[derive(Debug, Clone)]
pub struct MediaInspector {
	program: String,
}

impl Default for MediaInspector {
	fn default() -> Self {
		Self::new()
	}
}

impl MediaInspector {
	pub fn new() -> Self {
		Self::with_program("ffprobe")
	}

	/// Use a different inspector program. Mainly useful for testing.
	pub fn with_program(program: impl Into<String>) -> Self {
		MediaInspector {
			program: program.into(),
		}
	}

	/// Read a file's tag set and duration.
	///
	/// Blocks until the inspector process exits. Launch failure, a non-zero
	/// exit, and unparseable output each surface as a distinct error.
	pub fn probe(&self, path: &Path) -> Result<MediaInfo> {
		let output = Command::new(&self.program)
			.args(["-v", "error", "-print_format", "json", "-show_format"])
			.arg(path)
			.output()
			.map_err(|source| RetagError::InspectorFailed {
				path: path.to_path_buf(),
				source,
			})?;

		if !output.status.success() {
			return Err(RetagError::InspectorRejected {
				path: path.to_path_buf(),
				detail: String::from_utf8_lossy(&output.stderr).trim().to_string(),
			});
		}

		let probe: ProbeOutput = serde_json::from_slice(&output.stdout).map_err(|source| {
			RetagError::InspectorOutput {
				path: path.to_path_buf(),
				source,
			}
		})?;

		let duration = probe
			.format
			.duration
			.as_deref()
			.and_then(|d| d.parse().ok())
			.unwrap_or(0.0);

		Ok(MediaInfo {
			tags: probe.format.tags,
			duration,
		})
	}
}
