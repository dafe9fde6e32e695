use crate::error::{Result, RetagError};
use crate::rules::TagSet;
use std::path::Path;
use std::process::Command;

/// Boundary to the external media muxing tool.
///
/// The mutator never edits a file in place: it reads the input and writes a
/// new file at the destination path.
#[derive(Debug, Clone)]
pub struct MediaMutator {
	program: String,
}

impl Default for MediaMutator {
	fn default() -> Self {
		Self::new()
	}
}

impl MediaMutator {
	pub fn new() -> Self {
		Self::with_program("ffmpeg")
	}

	/// Use a different mutator program. Mainly useful for testing.
	pub fn with_program(program: impl Into<String>) -> Self {
		MediaMutator {
			program: program.into(),
		}
	}

	/// Build the argument list for one invocation.
	///
	/// With `new_tags`, all existing metadata is dropped and only the given
	/// entries are set, in tag-set order. Without it the streams are copied
	/// as-is. `extra_args` are appended verbatim before the destination.
	pub fn build_args(
		input: &Path,
		new_tags: Option<&TagSet>,
		extra_args: &[String],
		dest: &Path,
	) -> Vec<String> {
		let mut args = vec![
			"-y".to_string(),
			"-i".to_string(),
			input.to_string_lossy().to_string(),
		];

		if let Some(tags) = new_tags {
			args.push("-map_metadata".to_string());
			args.push("-1".to_string());
			for (name, value) in tags {
				args.push("-metadata".to_string());
				args.push(format!("{name}={value}"));
			}
		}

		args.push("-codec".to_string());
		args.push("copy".to_string());
		args.extend(extra_args.iter().cloned());
		args.push(dest.to_string_lossy().to_string());
		args
	}

	/// Build the argument list for appending a single tag while keeping all
	/// existing metadata. Used by the lyrics embedding path.
	pub fn build_tag_append_args(input: &Path, name: &str, value: &str, dest: &Path) -> Vec<String> {
		vec![
			"-y".to_string(),
			"-i".to_string(),
			input.to_string_lossy().to_string(),
			"-codec".to_string(),
			"copy".to_string(),
			"-metadata".to_string(),
			format!("{name}={value}"),
			dest.to_string_lossy().to_string(),
		]
	}

	/// Run the mutator with a prebuilt argument list.
	///
	/// Blocks until the process exits; non-zero exit carries the captured
	/// stderr.
	pub fn run(&self, args: &[String]) -> Result<()> {
		let output = Command::new(&self.program).args(args).output().map_err(|source| {
			RetagError::MutatorFailed {
				program: self.program.clone(),
				source,
			}
		})?;

		if !output.status.success() {
			return Err(RetagError::MutatorRejected {
				code: output.status.code().unwrap_or(-1),
				detail: String::from_utf8_lossy(&output.stderr).trim().to_string(),
			});
		}

		Ok(())
	}
}
