#![allow(deprecated)] // assert_cmd::Command::cargo_bin is deprecated but replacement requires nightly

use predicates::prelude::*;
use std::fs;

fn retag_cmd(home: &std::path::Path) -> assert_cmd::Command {
	let mut cmd = assert_cmd::Command::cargo_bin("retag").unwrap();
	// Keep the user's ~/.retag.toml out of the test environment.
	cmd.env("HOME", home);
	cmd
}

fn lyrfetch_cmd(home: &std::path::Path) -> assert_cmd::Command {
	let mut cmd = assert_cmd::Command::cargo_bin("lyrfetch").unwrap();
	cmd.env("HOME", home);
	cmd
}

// ============================================================================
// retag CLI flag tests
// ============================================================================

#[test]
fn test_retag_help_flag() {
	let temp_dir = tempfile::tempdir().unwrap();
	retag_cmd(temp_dir.path())
		.arg("--help")
		.assert()
		.success()
		.stdout(predicate::str::contains("Bulk media tag editor"));
}

#[test]
fn test_retag_version_flag() {
	let temp_dir = tempfile::tempdir().unwrap();
	retag_cmd(temp_dir.path())
		.arg("--version")
		.assert()
		.success()
		.stdout(predicate::str::contains("retag"));
}

#[test]
fn test_retag_no_args_shows_help() {
	// With arg_required_else_help, no args should show help
	let temp_dir = tempfile::tempdir().unwrap();
	retag_cmd(temp_dir.path())
		.assert()
		.failure()
		.stderr(predicate::str::contains("Usage"));
}

// ============================================================================
// Rule handling tests
// ============================================================================

#[test]
fn test_retag_malformed_rule_aborts_before_processing() {
	let temp_dir = tempfile::tempdir().unwrap();
	let out_dir = temp_dir.path().join("out");

	retag_cmd(temp_dir.path())
		.current_dir(temp_dir.path())
		.args(["a.mp3", "-o"])
		.arg(&out_dir)
		.args(["--rule", "missing-trailing-slash"])
		.assert()
		.failure()
		.stderr(predicate::str::contains("Invalid rule"));

	// Nothing was processed, so the output directory was never created.
	assert!(!out_dir.exists());
}

#[test]
fn test_retag_malformed_config_rule_aborts() {
	let temp_dir = tempfile::tempdir().unwrap();
	fs::write(
		temp_dir.path().join(".retag.toml"),
		"rules = [\"broken\"]\n",
	)
	.unwrap();

	retag_cmd(temp_dir.path())
		.current_dir(temp_dir.path())
		.args(["a.mp3", "-o", "out"])
		.assert()
		.failure()
		.stderr(predicate::str::contains("Invalid configured rule"));
}

#[test]
fn test_retag_malformed_config_file_aborts() {
	let temp_dir = tempfile::tempdir().unwrap();
	fs::write(temp_dir.path().join(".retag.toml"), "rules = 3\n").unwrap();

	retag_cmd(temp_dir.path())
		.current_dir(temp_dir.path())
		.args(["a.mp3", "-o", "out"])
		.assert()
		.failure()
		.stderr(predicate::str::contains("configuration"));
}

// ============================================================================
// Batch report tests
// ============================================================================

#[test]
fn test_retag_unreadable_input_reports_error_line() {
	let temp_dir = tempfile::tempdir().unwrap();

	// The input does not exist, so inspection fails whether or not the
	// external inspector is installed; the batch still succeeds and emits
	// one report line.
	retag_cmd(temp_dir.path())
		.current_dir(temp_dir.path())
		.args(["no-such-file.mp3", "-o", "out", "--builtins"])
		.assert()
		.success()
		.stdout(predicate::str::contains("ERROR: at file no-such-file.mp3"));
}

#[test]
fn test_retag_reports_every_file_in_input_order() {
	let temp_dir = tempfile::tempdir().unwrap();

	let output = retag_cmd(temp_dir.path())
		.current_dir(temp_dir.path())
		.args(["b.mp3", "a.mp3", "-o", "out"])
		.output()
		.unwrap();

	assert!(output.status.success());
	let stdout = String::from_utf8_lossy(&output.stdout);
	let lines: Vec<&str> = stdout.lines().collect();
	assert_eq!(lines.len(), 2);
	assert!(lines[0].contains("b.mp3"));
	assert!(lines[1].contains("a.mp3"));
}

#[test]
fn test_retag_creates_output_directory() {
	let temp_dir = tempfile::tempdir().unwrap();
	let out_dir = temp_dir.path().join("nested").join("out");

	retag_cmd(temp_dir.path())
		.current_dir(temp_dir.path())
		.arg("no-such-file.mp3")
		.arg("-o")
		.arg(&out_dir)
		.assert()
		.success();

	assert!(out_dir.is_dir());
}

// ============================================================================
// lyrfetch CLI tests
// ============================================================================

#[test]
fn test_lyrfetch_help_flag() {
	let temp_dir = tempfile::tempdir().unwrap();
	lyrfetch_cmd(temp_dir.path())
		.arg("--help")
		.assert()
		.success()
		.stdout(predicate::str::contains("Fetch lyrics"));
}

#[test]
fn test_lyrfetch_version_flag() {
	let temp_dir = tempfile::tempdir().unwrap();
	lyrfetch_cmd(temp_dir.path())
		.arg("--version")
		.assert()
		.success()
		.stdout(predicate::str::contains("lyrfetch"));
}

#[test]
fn test_lyrfetch_no_args_shows_help() {
	let temp_dir = tempfile::tempdir().unwrap();
	lyrfetch_cmd(temp_dir.path())
		.assert()
		.failure()
		.stderr(predicate::str::contains("Usage"));
}

#[test]
fn test_lyrfetch_unreadable_input_reports_error_line() {
	let temp_dir = tempfile::tempdir().unwrap();

	lyrfetch_cmd(temp_dir.path())
		.current_dir(temp_dir.path())
		.arg("no-such-file.mp3")
		.assert()
		.success()
		.stdout(predicate::str::contains("no-such-file.mp3 ERROR:"));
}

#[test]
fn test_lyrfetch_embed_conflicts_with_output_dir() {
	let temp_dir = tempfile::tempdir().unwrap();

	lyrfetch_cmd(temp_dir.path())
		.args(["a.mp3", "--embed", "--output-dir", "out"])
		.assert()
		.failure()
		.stderr(predicate::str::contains("cannot be used with"));
}
