use crate::error::{Result, RetagError};
use crate::lyrics::client::Lyrics;
use crate::media::MediaMutator;
use std::fs;
use std::path::{Path, PathBuf};

/// Sidecar path for a lyrics document: `.lrc` for synced text, `.txt` for
/// plain. Written next to the input unless an output directory is given.
pub fn sidecar_path(input: &Path, output_dir: Option<&Path>, lyrics: &Lyrics) -> PathBuf {
	let mut out = match output_dir {
		Some(dir) => match input.file_name() {
			Some(name) => dir.join(name),
			None => dir.join(input),
		},
		None => input.to_path_buf(),
	};
	out.set_extension(if lyrics.synced { "lrc" } else { "txt" });
	out
}

/// Write a lyrics sidecar file.
pub fn write_sidecar(path: &Path, lyrics: &Lyrics) -> Result<()> {
	fs::write(path, &lyrics.text).map_err(|source| RetagError::WriteFailed {
		path: path.to_path_buf(),
		source,
	})
}

/// Embed lyrics into the media file itself.
///
/// The original is never written in place: the mutator writes a tagged copy
/// to a temporary path in the same directory, the copy takes over the
/// original's permission bits and owner, and an atomic rename swaps it in.
/// On any failure the original is untouched and the temporary is removed.
pub fn embed_lyrics(mutator: &MediaMutator, input: &Path, lyrics: &Lyrics) -> Result<()> {
	let tmp = temp_path(input);
	let args = MediaMutator::build_tag_append_args(input, "lyrics", &lyrics.text, &tmp);

	if let Err(error) = mutator.run(&args) {
		let _ = fs::remove_file(&tmp);
		return Err(error);
	}

	let replaced = copy_file_identity(input, &tmp).and_then(|()| fs::rename(&tmp, input));
	if let Err(source) = replaced {
		let _ = fs::remove_file(&tmp);
		return Err(RetagError::ReplaceFailed {
			path: input.to_path_buf(),
			source,
		});
	}

	Ok(())
}

/// Temporary destination beside the input, keeping the original extension
/// so the mutator can infer the container format.
fn temp_path(input: &Path) -> PathBuf {
	let stem = input
		.file_stem()
		.map(|s| s.to_string_lossy().to_string())
		.unwrap_or_default();
	let name = match input.extension() {
		Some(ext) => format!(".{stem}.retag.{}", ext.to_string_lossy()),
		None => format!(".{stem}.retag"),
	};
	match input.parent() {
		Some(parent) => parent.join(name),
		None => PathBuf::from(name),
	}
}

#[cfg(unix)]
fn copy_file_identity(from: &Path, to: &Path) -> std::io::Result<()> {
	use std::os::unix::fs::MetadataExt;

	let metadata = fs::metadata(from)?;
	fs::set_permissions(to, metadata.permissions())?;
	std::os::unix::fs::chown(to, Some(metadata.uid()), Some(metadata.gid()))?;
	Ok(())
}

#[cfg(not(unix))]
fn copy_file_identity(from: &Path, to: &Path) -> std::io::Result<()> {
	let metadata = fs::metadata(from)?;
	fs::set_permissions(to, metadata.permissions())
}
