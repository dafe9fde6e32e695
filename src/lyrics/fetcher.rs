use crate::error::{Result, RetagError};
use crate::lyrics::client::{LyricsClient, LyricsQuery};
use crate::lyrics::store::{embed_lyrics, sidecar_path, write_sidecar};
use crate::media::{MediaInspector, MediaMutator};
use std::path::{Path, PathBuf};

/// Outcome of one lyrics fetch.
#[derive(Debug)]
pub enum FetchOutcome {
	/// Lyrics were found and written to `output`.
	Found { output: PathBuf, synced: bool },

	/// The lookup service does not know this track.
	NotFound,

	/// Inspection, lookup, or writing failed; the batch continues.
	Error(RetagError),
}

/// One report per input file.
#[derive(Debug)]
pub struct FetchReport {
	pub input: PathBuf,
	pub outcome: FetchOutcome,
}

impl FetchReport {
	/// One stdout line per file, stable format for scripting.
	pub fn summary_line(&self) -> String {
		match &self.outcome {
			FetchOutcome::Error(error) => format!("{} ERROR: {}", self.input.display(), error),
			FetchOutcome::NotFound => format!("{} NOT FOUND", self.input.display()),
			FetchOutcome::Found {
				output,
				synced: true,
			} => format!("{} FOUND SYNCED {}", self.input.display(), output.display()),
			FetchOutcome::Found {
				output,
				synced: false,
			} => format!("{} FOUND {}", self.input.display(), output.display()),
		}
	}
}

/// Drives one file through the inspect/lookup/store cycle.
pub struct LyricsFetcher {
	inspector: MediaInspector,
	mutator: MediaMutator,
	client: LyricsClient,
	output_dir: Option<PathBuf>,
	embed: bool,
}

impl LyricsFetcher {
	pub fn new(output_dir: Option<PathBuf>, embed: bool) -> Self {
		LyricsFetcher {
			inspector: MediaInspector::new(),
			mutator: MediaMutator::new(),
			client: LyricsClient::new(),
			output_dir,
			embed,
		}
	}

	/// Swap in alternative collaborators. Mainly useful for testing.
	pub fn with_tools(
		mut self,
		inspector: MediaInspector,
		mutator: MediaMutator,
		client: LyricsClient,
	) -> Self {
		self.inspector = inspector;
		self.mutator = mutator;
		self.client = client;
		self
	}

	/// Process a single file. Errors are captured in the report, never
	/// propagated.
	pub fn process(&self, input: &Path) -> FetchReport {
		let outcome = match self.fetch_one(input) {
			Ok(outcome) => outcome,
			Err(error) => FetchOutcome::Error(error),
		};
		FetchReport {
			input: input.to_path_buf(),
			outcome,
		}
	}

	fn fetch_one(&self, input: &Path) -> Result<FetchOutcome> {
		let info = self.inspector.probe(input)?;
		let query = LyricsQuery::from_tags(&info.tags, info.duration)?;

		let Some(lyrics) = self.client.fetch(&query)? else {
			return Ok(FetchOutcome::NotFound);
		};

		let output = if self.embed {
			embed_lyrics(&self.mutator, input, &lyrics)?;
			input.to_path_buf()
		} else {
			let path = sidecar_path(input, self.output_dir.as_deref(), &lyrics);
			write_sidecar(&path, &lyrics)?;
			path
		};

		Ok(FetchOutcome::Found {
			output,
			synced: lyrics.synced,
		})
	}
}
