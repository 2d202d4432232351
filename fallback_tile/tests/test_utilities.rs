#![allow(unused)]

use assert_cmd::{Command, cargo};
use std::path::PathBuf;
use tempfile::{TempDir, tempdir};

#[cfg(windows)]
pub const BINARY_NAME: &str = "fallback_tile.exe";
#[cfg(not(windows))]
pub const BINARY_NAME: &str = "fallback_tile";

/// Helper to get a testdata file path.
pub fn get_testdata(filename: &str) -> PathBuf {
	PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("testdata").join(filename)
}

/// Helper to get a temp output file path.
pub fn get_temp_output(filename: &str) -> (TempDir, PathBuf) {
	let dir = tempdir().expect("failed to create temp dir");
	let path = dir.path().join(filename);
	(dir, path)
}

/// Helper to create a Command for the fallback_tile binary.
pub fn fallback_tile_cmd() -> Command {
	Command::new(cargo::cargo_bin!())
}
