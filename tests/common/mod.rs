//! Shared test utilities.

#![allow(dead_code, unused_imports)]

use launchargs::args::ArgProcessor;
use launchargs::config::LauncherMode;
use std::path::PathBuf;
use tempfile::TempDir;

/// Owned argument vector from string literals.
pub fn raw_args(args: Vec<&str>) -> Vec<String> {
    args.into_iter().map(String::from).collect()
}

/// Create a temp dir holding one argfile with the given content.
pub fn temp_argfile(name: &str, content: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join(name);
    std::fs::write(&path, content).expect("Failed to write argfile");
    (temp_dir, path)
}

/// `@path` reference for an argfile.
pub fn at(path: &std::path::Path) -> String {
    format!("@{}", path.display())
}

/// Create a temporary config file with the given TOML content.
pub fn temp_config(content: &str) -> (TempDir, PathBuf) {
    temp_argfile("config.toml", content)
}

/// Processor with default option sets, initialised for an application launch.
pub fn app_processor() -> ArgProcessor {
    let mut processor = ArgProcessor::default();
    processor.init(LauncherMode::Application, false);
    processor
}
