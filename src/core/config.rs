//! Configuration for relkit
//!
//! Every path and default the tools use is explicit configuration rather than a
//! process-wide constant, so tests can point a run at a temporary directory.
//! Loaded from `relkit.toml` in the working directory when present; every field
//! has a default, and a missing file means all-defaults.

use crate::core::error::{RelResult, ResultExt};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub const CONFIG_FILE: &str = "relkit.toml";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RelkitConfig {
  /// Directory of pending changelog fragments
  #[serde(default = "default_fragments_dir")]
  pub fragments_dir: PathBuf,

  /// Placeholder file kept in the fragments directory so it survives under
  /// version control when empty; never treated as a fragment, never deleted
  #[serde(default = "default_sentinel")]
  pub sentinel: String,

  /// JSON manifest holding the package's declared current version
  #[serde(default = "default_manifest")]
  pub manifest: PathBuf,

  /// Changelog document in Keep a Changelog format
  #[serde(default = "default_changelog")]
  pub changelog: PathBuf,

  /// Repository URL used to build `[version]: <url>/compare/old...new` links
  #[serde(default = "default_repo_url")]
  pub repo_url: String,

  /// Default tax year for situation builders
  #[serde(default = "default_year")]
  pub default_year: i32,
}

fn default_fragments_dir() -> PathBuf {
  PathBuf::from("changelog.d")
}

fn default_sentinel() -> String {
  ".gitkeep".to_string()
}

fn default_manifest() -> PathBuf {
  PathBuf::from("package.json")
}

fn default_changelog() -> PathBuf {
  PathBuf::from("CHANGELOG.md")
}

fn default_repo_url() -> String {
  "https://github.com/policyengine/policyengine-claude".to_string()
}

fn default_year() -> i32 {
  2026
}

impl Default for RelkitConfig {
  fn default() -> Self {
    Self {
      fragments_dir: default_fragments_dir(),
      sentinel: default_sentinel(),
      manifest: default_manifest(),
      changelog: default_changelog(),
      repo_url: default_repo_url(),
      default_year: default_year(),
    }
  }
}

impl RelkitConfig {
  /// Load configuration from `relkit.toml` under `root`, falling back to
  /// defaults when the file does not exist
  pub fn load(root: &Path) -> RelResult<Self> {
    let path = root.join(CONFIG_FILE);
    if !path.exists() {
      return Ok(Self::default());
    }

    let raw = fs::read_to_string(&path).with_context(|| format!("Failed to read {}", path.display()))?;
    let config: RelkitConfig = toml_edit::de::from_str(&raw)?;
    Ok(config)
  }
}
