//! Changelog fragment store
//!
//! A fragment is a single pending changelog entry: a file named
//! `<slug>.<category>.md` holding freeform Markdown. The store is a flat
//! directory of such files plus a permanent sentinel placeholder. Files whose
//! names do not match the three-part pattern are ignored silently (stray
//! editor files are tolerated, not reported).

use crate::core::error::RelResult;
use crate::core::version::BumpLevel;
use std::fs;
use std::path::{Path, PathBuf};

/// Change category parsed from a fragment filename
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Category {
  Breaking,
  Added,
  Removed,
  Changed,
  Fixed,
  /// Unrecognized tag, kept verbatim; bumps as patch and renders under a
  /// capitalized fallback heading
  Other(String),
}

impl Category {
  /// Parse a raw category tag. Matching is exact: tags are lowercase by
  /// convention and anything else is its own ad-hoc category.
  pub fn parse(tag: &str) -> Self {
    match tag {
      "breaking" => Self::Breaking,
      "added" => Self::Added,
      "removed" => Self::Removed,
      "changed" => Self::Changed,
      "fixed" => Self::Fixed,
      _ => Self::Other(tag.to_string()),
    }
  }

  /// The semver bump this category requires
  pub fn bump_level(&self) -> BumpLevel {
    match self {
      Self::Breaking => BumpLevel::Major,
      Self::Added | Self::Removed => BumpLevel::Minor,
      Self::Changed | Self::Fixed | Self::Other(_) => BumpLevel::Patch,
    }
  }

  /// Display heading for the changelog section
  pub fn heading(&self) -> String {
    match self {
      Self::Breaking => "Breaking".to_string(),
      Self::Added => "Added".to_string(),
      Self::Removed => "Removed".to_string(),
      Self::Changed => "Changed".to_string(),
      Self::Fixed => "Fixed".to_string(),
      Self::Other(tag) => capitalize(tag),
    }
  }
}

/// Sub-heading render order for recognized categories
pub const HEADING_ORDER: [&str; 5] = ["Added", "Changed", "Fixed", "Removed", "Breaking"];

fn capitalize(s: &str) -> String {
  let mut chars = s.chars();
  match chars.next() {
    Some(first) => first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase(),
    None => String::new(),
  }
}

/// A parsed fragment: tagged record rather than a bare filename
#[derive(Debug, Clone)]
pub struct Fragment {
  pub slug: String,
  pub category: Category,
  /// Trimmed file contents; may be empty, in which case the fragment counts
  /// for bump purposes but contributes nothing to the changelog
  pub body: String,
}

/// Parse `<slug>.<category>.md` into (slug, raw category). The slug may itself
/// contain dots; only the last two components are structural.
pub fn parse_filename(name: &str) -> Option<(&str, &str)> {
  let (rest, ext) = name.rsplit_once('.')?;
  if ext != "md" {
    return None;
  }
  let (slug, category) = rest.rsplit_once('.')?;
  if slug.is_empty() {
    return None;
  }
  Some((slug, category))
}

/// The fragment directory and its sentinel
#[derive(Debug, Clone)]
pub struct FragmentStore {
  dir: PathBuf,
  sentinel: String,
}

impl FragmentStore {
  pub fn new(dir: impl Into<PathBuf>, sentinel: impl Into<String>) -> Self {
    Self {
      dir: dir.into(),
      sentinel: sentinel.into(),
    }
  }

  /// Non-sentinel filenames in lexicographic order, matching or not
  fn list_files(&self) -> RelResult<Vec<String>> {
    let mut names = Vec::new();
    for entry in fs::read_dir(&self.dir)? {
      let entry = entry?;
      let name = entry.file_name().to_string_lossy().into_owned();
      if name == self.sentinel {
        continue;
      }
      names.push(name);
    }
    names.sort();
    Ok(names)
  }

  /// Whether any non-sentinel file exists, regardless of naming pattern
  pub fn has_any_files(&self) -> RelResult<bool> {
    Ok(!self.list_files()?.is_empty())
  }

  /// Read all pattern-matching fragments in lexicographic filename order.
  /// Bodies are trimmed; empty bodies are kept (they still drive the bump).
  pub fn scan(&self) -> RelResult<Vec<Fragment>> {
    let mut fragments = Vec::new();
    for name in self.list_files()? {
      let Some((slug, category)) = parse_filename(&name) else {
        continue;
      };
      let body = fs::read_to_string(self.dir.join(&name))?;
      fragments.push(Fragment {
        slug: slug.to_string(),
        category: Category::parse(category),
        body: body.trim().to_string(),
      });
    }
    Ok(fragments)
  }

  /// Remove every non-sentinel file, matching the pattern or not
  pub fn delete_all(&self) -> RelResult<()> {
    for name in self.list_files()? {
      fs::remove_file(self.dir.join(&name))?;
    }
    Ok(())
  }
}
