//! Per-file orchestration: inspect, run the rule pipeline, mutate, classify.

use crate::error::RetagError;
use crate::media::{MediaInspector, MediaMutator};
use crate::rules::{TagRule, TagSet, pipeline};
use std::fs;
use std::path::{Path, PathBuf};

/// Outcome classification for one processed file.
#[derive(Debug)]
pub enum ProcessStatus {
	/// Tags changed; the mutator wrote the output with the new tag set.
	Success,

	/// Tags were already clean; the mutator still produced the output file.
	Skipped,

	/// Inspection or mutation failed; the batch continues.
	Error(RetagError),
}

/// One report per input file.
#[derive(Debug)]
pub struct ProcessingReport {
	pub input: PathBuf,
	pub output: PathBuf,

	/// The mutator argument list that was used, or that would have been
	/// used had processing reached the mutator.
	pub mutator_args: Vec<String>,

	pub status: ProcessStatus,

	/// Tag sets before and after the pipeline, when tags were actually read.
	pub tags_before: Option<TagSet>,
	pub tags_after: Option<TagSet>,
}

impl ProcessingReport {
	/// True iff both tag sets were captured and differ.
	pub fn has_changes(&self) -> bool {
		match (&self.tags_before, &self.tags_after) {
			(Some(before), Some(after)) => before != after,
			_ => false,
		}
	}

	/// One stdout line per file, stable format for scripting.
	pub fn summary_line(&self) -> String {
		match &self.status {
			ProcessStatus::Error(error) => {
				format!("ERROR: at file {} \"{}\"", self.input.display(), error)
			}
			ProcessStatus::Skipped => format!(
				"SKIPPED: file {} passed to {}",
				self.input.display(),
				self.output.display()
			),
			ProcessStatus::Success => format!(
				"SUCCESS: file {} saved to {}",
				self.input.display(),
				self.output.display()
			),
		}
	}
}

/// Drives one file through the inspect/rewrite/mutate cycle.
pub struct FileProcessor {
	inspector: MediaInspector,
	mutator: MediaMutator,
	rules: Vec<TagRule>,
	extra_args: Vec<String>,
}

impl FileProcessor {
	pub fn new(rules: Vec<TagRule>, extra_args: Vec<String>) -> Self {
		FileProcessor {
			inspector: MediaInspector::new(),
			mutator: MediaMutator::new(),
			rules,
			extra_args,
		}
	}

	/// Swap in alternative external tools. Mainly useful for testing.
	pub fn with_tools(mut self, inspector: MediaInspector, mutator: MediaMutator) -> Self {
		self.inspector = inspector;
		self.mutator = mutator;
		self
	}

	/// Process a single file, writing the result to `output`.
	///
	/// The mutator is invoked even when the pipeline changed nothing, so the
	/// output file always exists afterwards; an unchanged tag set is
	/// reported as skipped. Errors are captured in the report, never
	/// propagated.
	pub fn process(&self, input: &Path, output: &Path) -> ProcessingReport {
		let info = match self.inspector.probe(input) {
			Ok(info) => info,
			Err(error) => {
				return ProcessingReport {
					input: input.to_path_buf(),
					output: output.to_path_buf(),
					mutator_args: Vec::new(),
					status: ProcessStatus::Error(error),
					tags_before: None,
					tags_after: None,
				};
			}
		};

		let new_tags = pipeline::run(&info.tags, &self.rules);
		let has_changes = pipeline::changed(&info.tags, &new_tags);

		let mutator_args = MediaMutator::build_args(
			input,
			if has_changes { Some(&new_tags) } else { None },
			&self.extra_args,
			output,
		);

		let status = match self.write_output(output, &mutator_args) {
			Ok(()) if has_changes => ProcessStatus::Success,
			Ok(()) => ProcessStatus::Skipped,
			Err(error) => ProcessStatus::Error(error),
		};

		ProcessingReport {
			input: input.to_path_buf(),
			output: output.to_path_buf(),
			mutator_args,
			status,
			tags_before: Some(info.tags),
			tags_after: Some(new_tags),
		}
	}

	fn write_output(&self, output: &Path, mutator_args: &[String]) -> crate::Result<()> {
		if let Some(parent) = output.parent()
			&& !parent.as_os_str().is_empty()
		{
			fs::create_dir_all(parent).map_err(|source| RetagError::WriteFailed {
				path: parent.to_path_buf(),
				source,
			})?;
		}
		self.mutator.run(mutator_args)
	}
}
