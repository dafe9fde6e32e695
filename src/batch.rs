//! Batch driving: output path computation and the sequential file loop.

use crate::processor::{FileProcessor, ProcessingReport};
use std::path::{Component, Path, PathBuf};

/// Where and how output files are placed.
#[derive(Debug, Clone, Default)]
pub struct OutputLayout {
	/// Directory all outputs are written under.
	pub output_dir: PathBuf,

	/// Replacement file suffix, e.g. `"flac"` or `".flac"`.
	pub new_suffix: Option<String>,

	/// Mirror the inputs' directory structure below their common prefix
	/// instead of flattening everything into `output_dir`.
	pub strip_common_prefix: bool,
}

/// Longest common directory prefix shared by all input paths.
///
/// Returns `None` when the inputs share no common ancestor, e.g. a mix of
/// absolute and relative paths, or bare file names.
pub fn common_path(paths: &[PathBuf]) -> Option<PathBuf> {
	let mut iter = paths.iter();
	let first = iter.next()?;
	let mut common: Vec<Component> = first.parent()?.components().collect();

	for path in iter {
		let components: Vec<Component> = path.parent()?.components().collect();
		let shared = common
			.iter()
			.zip(components.iter())
			.take_while(|(a, b)| a == b)
			.count();
		common.truncate(shared);
		if common.is_empty() {
			return None;
		}
	}

	Some(common.iter().collect())
}

/// Compute the output path for one input.
///
/// With prefix stripping and a usable common prefix, the input's relative
/// path below that prefix is mirrored under the output directory; otherwise
/// only the file name is kept. The new suffix, when given, replaces the
/// file extension.
pub fn output_path(input: &Path, layout: &OutputLayout, common: Option<&Path>) -> PathBuf {
	let mut out = if layout.strip_common_prefix
		&& let Some(common) = common
		&& let Ok(relative) = input.strip_prefix(common)
	{
		layout.output_dir.join(relative)
	} else {
		match input.file_name() {
			Some(name) => layout.output_dir.join(name),
			None => layout.output_dir.join(input),
		}
	};

	if let Some(suffix) = &layout.new_suffix {
		out.set_extension(suffix.trim_start_matches('.'));
	}

	out
}

/// Drive the processor over every input, in input order.
///
/// The returned iterator is lazy: each file is fully processed when its
/// report is pulled, one at a time.
pub fn run_batch<'a>(
	inputs: &'a [PathBuf],
	processor: &'a FileProcessor,
	layout: &'a OutputLayout,
) -> impl Iterator<Item = ProcessingReport> + 'a {
	let common = if layout.strip_common_prefix {
		common_path(inputs)
	} else {
		None
	};

	inputs.iter().map(move |input| {
		let output = output_path(input, layout, common.as_deref());
		processor.process(input, &output)
	})
}
