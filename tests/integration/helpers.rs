//! Test helpers for integration tests

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

/// A throwaway release repository: fragment store, manifest, changelog
pub struct TestRepo {
  _root: TempDir,
  pub path: PathBuf,
}

impl TestRepo {
  /// Create a repo at version 0.3.0 with one prior changelog section
  pub fn new() -> Result<Self> {
    let root = TempDir::new()?;
    let path = root.path().to_path_buf();

    std::fs::create_dir(path.join("changelog.d"))?;
    std::fs::write(path.join("changelog.d/.gitkeep"), "")?;

    std::fs::write(
      path.join("package.json"),
      r#"{
  "name": "demo-plugin",
  "version": "0.3.0",
  "description": "Test fixture"
}
"#,
    )?;

    std::fs::write(
      path.join("CHANGELOG.md"),
      r#"# Changelog

All notable changes to this project will be documented in this file.

## [0.3.0] - 2026-07-15

### Added

- Initial plugin marketplace

[0.3.0]: https://github.com/policyengine/policyengine-claude/compare/0.2.0...0.3.0
"#,
    )?;

    Ok(Self { _root: root, path })
  }

  /// Drop a fragment file into the store
  pub fn add_fragment(&self, name: &str, body: &str) -> Result<()> {
    std::fs::write(self.path.join("changelog.d").join(name), body)?;
    Ok(())
  }

  /// Read a file relative to the repo root
  pub fn read_file(&self, rel: &str) -> Result<String> {
    std::fs::read_to_string(self.path.join(rel)).with_context(|| format!("Failed to read {}", rel))
  }

  /// Check if a file exists relative to the repo root
  pub fn file_exists(&self, rel: &str) -> bool {
    self.path.join(rel).exists()
  }

  /// Sorted filenames currently in the fragment store
  pub fn fragment_files(&self) -> Result<Vec<String>> {
    let mut names: Vec<String> = std::fs::read_dir(self.path.join("changelog.d"))?
      .map(|entry| Ok(entry?.file_name().to_string_lossy().into_owned()))
      .collect::<Result<Vec<_>>>()?;
    names.sort();
    Ok(names)
  }
}

/// Run the relkit CLI, failing the test on a nonzero exit
pub fn run_relkit(cwd: &Path, args: &[&str]) -> Result<Output> {
  let output = run_relkit_raw(cwd, args)?;

  if !output.status.success() {
    let stderr = String::from_utf8_lossy(&output.stderr);
    let stdout = String::from_utf8_lossy(&output.stdout);
    anyhow::bail!(
      "relkit command failed: relkit {}\nstdout: {}\nstderr: {}",
      args.join(" "),
      stdout,
      stderr
    );
  }

  Ok(output)
}

/// Run the relkit CLI and return the output whatever the exit status
pub fn run_relkit_raw(cwd: &Path, args: &[&str]) -> Result<Output> {
  let relkit_bin = env!("CARGO_BIN_EXE_relkit");

  Command::new(relkit_bin)
    .current_dir(cwd)
    .args(args)
    .output()
    .context("Failed to run relkit")
}

/// Stdout of a successful run as a string
pub fn stdout_of(output: &Output) -> String {
  String::from_utf8_lossy(&output.stdout).into_owned()
}

/// Stderr of a run as a string
pub fn stderr_of(output: &Output) -> String {
  String::from_utf8_lossy(&output.stderr).into_owned()
}
