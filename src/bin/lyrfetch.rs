use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;

use retag_cli::lyrics::LyricsFetcher;

#[derive(Parser)]
#[command(name = "lyrfetch")]
#[command(
	author,
	version,
	about = "Fetch lyrics for media files from the lrclib lookup service"
)]
#[command(arg_required_else_help = true)]
struct Cli {
	/// Input media files
	#[arg(required = true)]
	inputs: Vec<PathBuf>,

	/// Write sidecar files into this directory instead of next to the inputs
	#[arg(short, long, value_name = "DIR")]
	output_dir: Option<PathBuf>,

	/// Embed lyrics into the media files themselves instead of writing
	/// sidecars
	#[arg(long, conflicts_with = "output_dir")]
	embed: bool,
}

fn main() -> ExitCode {
	match run() {
		Ok(code) => code,
		Err(e) => {
			eprintln!("error: {e:?}");
			ExitCode::FAILURE
		}
	}
}

fn run() -> Result<ExitCode> {
	let cli = Cli::parse();

	if let Some(dir) = &cli.output_dir {
		std::fs::create_dir_all(dir)
			.with_context(|| format!("Failed to create output directory {}", dir.display()))?;
	}

	let fetcher = LyricsFetcher::new(cli.output_dir.clone(), cli.embed);

	// One line per file, in input order. Per-file failures are reported but
	// never abort the batch or change the exit status.
	for input in &cli.inputs {
		let report = fetcher.process(input);
		println!("{}", report.summary_line());
	}

	Ok(ExitCode::SUCCESS)
}
