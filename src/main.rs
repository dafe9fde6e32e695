use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;

use retag_cli::batch::{OutputLayout, run_batch};
use retag_cli::config::{Config, discover_config};
use retag_cli::processor::FileProcessor;
use retag_cli::rules::{TagRule, builtin_rules, parse_rule};

#[derive(Parser)]
#[command(name = "retag")]
#[command(
	author,
	version,
	about = "Bulk media tag editor driven by pattern rules"
)]
#[command(arg_required_else_help = true)]
struct Cli {
	/// Input media files to process
	#[arg(required = true)]
	inputs: Vec<PathBuf>,

	/// Directory where output files are written
	#[arg(short, long, value_name = "DIR")]
	output_dir: PathBuf,

	/// Replace the file suffix of every output path (e.g. "flac")
	#[arg(long, value_name = "SUFFIX")]
	suffix: Option<String>,

	/// Mirror the inputs' directory structure below their common prefix
	#[arg(long)]
	strip_common_prefix: bool,

	/// Rule definition such as "(?i)title/r:^(.+)\.mp3$/\1/" (repeatable,
	/// applied after config rules)
	#[arg(short, long = "rule", value_name = "RULE")]
	rules: Vec<String>,

	/// Apply the built-in cleanup rules before any other rules
	#[arg(long)]
	builtins: bool,

	/// Extra arguments passed through to the media mutator, placed before
	/// the destination path
	#[arg(last = true)]
	mutator_args: Vec<String>,
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

	let cwd = std::env::current_dir().context("Failed to get current directory")?;
	let config = discover_config(&cwd).context("Failed to load configuration")?;
	let rules = assemble_rules(&cli, config.as_ref().map(|loaded| &loaded.config))?;

	std::fs::create_dir_all(&cli.output_dir).with_context(|| {
		format!(
			"Failed to create output directory {}",
			cli.output_dir.display()
		)
	})?;

	let layout = OutputLayout {
		output_dir: cli.output_dir.clone(),
		new_suffix: cli.suffix.clone(),
		strip_common_prefix: cli.strip_common_prefix,
	};
	let processor = FileProcessor::new(rules, cli.mutator_args.clone());

	// One line per file, in input order. Per-file failures are reported but
	// never abort the batch or change the exit status.
	for report in run_batch(&cli.inputs, &processor, &layout) {
		println!("{}", report.summary_line());
	}

	Ok(ExitCode::SUCCESS)
}

/// Assemble the effective rule sequence: built-ins first (when enabled by
/// flag or config), then config rules, then command-line rules.
fn assemble_rules(cli: &Cli, config: Option<&Config>) -> Result<Vec<TagRule>> {
	let mut rules = Vec::new();

	let use_builtins = cli.builtins || config.is_some_and(|config| config.builtin_rules);
	if use_builtins {
		rules.extend(builtin_rules().context("Failed to build built-in rules")?);
	}

	if let Some(config) = config {
		for text in &config.rules {
			rules.push(
				parse_rule(text).with_context(|| format!("Invalid configured rule: {text}"))?,
			);
		}
	}

	for text in &cli.rules {
		rules.push(parse_rule(text).with_context(|| format!("Invalid rule: {text}"))?);
	}

	Ok(rules)
}
