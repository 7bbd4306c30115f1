//! Version bumper: manifest access and bump-level resolution
//!
//! The manifest is edited as raw text. A structured JSON round-trip would
//! reorder keys and normalize whitespace, so the new version is written by
//! replacing the exact `"version": "<old>"` text and nothing else. The
//! replacement fails loudly if that exact text is absent.

use crate::core::error::{ManifestError, RelError, RelResult, ResultExt};
use crate::core::version::{BumpLevel, parse_triple};
use crate::release::fragment::Fragment;
use semver::Version;
use std::fs;
use std::path::{Path, PathBuf};

/// The JSON manifest holding the package's declared current version
#[derive(Debug, Clone)]
pub struct Manifest {
  path: PathBuf,
  raw: String,
}

impl Manifest {
  pub fn load(path: &Path) -> RelResult<Self> {
    let raw = fs::read_to_string(path).with_context(|| format!("Failed to read manifest {}", path.display()))?;
    Ok(Self {
      path: path.to_path_buf(),
      raw,
    })
  }

  /// Parse the top-level `"version"` field as a strict dotted triple
  pub fn current_version(&self) -> RelResult<Version> {
    let value: serde_json::Value = serde_json::from_str(&self.raw)
      .map_err(|e| RelError::message(format!("Malformed manifest {}: {}", self.path.display(), e)))?;

    let Some(raw_version) = value.get("version").and_then(|v| v.as_str()) else {
      return Err(RelError::Manifest(ManifestError::MissingVersion {
        path: self.path.clone(),
      }));
    };

    parse_triple(raw_version).ok_or_else(|| {
      RelError::Manifest(ManifestError::InvalidVersion {
        path: self.path.clone(),
        value: raw_version.to_string(),
      })
    })
  }

  /// Replace `"version": "<old>"` with the new version in the raw text,
  /// preserving all other formatting verbatim
  pub fn replace_version(&mut self, old: &Version, new: &Version) -> RelResult<()> {
    let needle = format!("\"version\": \"{}\"", old);
    if !self.raw.contains(&needle) {
      return Err(RelError::Manifest(ManifestError::VersionNotInText {
        path: self.path.clone(),
        version: old.to_string(),
      }));
    }
    let replacement = format!("\"version\": \"{}\"", new);
    self.raw = self.raw.replacen(&needle, &replacement, 1);
    Ok(())
  }

  /// Rewrite the manifest file in place
  pub fn save(&self) -> RelResult<()> {
    fs::write(&self.path, &self.raw)
      .with_context(|| format!("Failed to write manifest {}", self.path.display()))?;
    Ok(())
  }
}

/// Minimum (highest-priority) bump level across a fragment set, or `None`
/// when no fragment matched the naming pattern
pub fn bump_level(fragments: &[Fragment]) -> Option<BumpLevel> {
  fragments.iter().map(|f| f.category.bump_level()).min()
}
