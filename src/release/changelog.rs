//! Changelog builder: grouping, section rendering, and document splicing
//!
//! The changelog is edited line-by-line, not structurally parsed. The new
//! section goes immediately before the first pre-existing `## [` heading and
//! the new comparison link immediately before the first pre-existing
//! reference-style link; the two splice points are independent and each falls
//! back to appending when its marker is missing.

use crate::core::error::{ChangelogError, RelError, RelResult, ResultExt};
use crate::release::fragment::{Fragment, HEADING_ORDER};
use semver::Version;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

/// Group fragment bodies by display heading, dropping empty bodies. Entry
/// order within a heading follows fragment (filename) order, which the store
/// guarantees is lexicographic.
pub fn group_fragments(fragments: &[Fragment]) -> BTreeMap<String, Vec<String>> {
  let mut groups: BTreeMap<String, Vec<String>> = BTreeMap::new();
  for fragment in fragments {
    if fragment.body.is_empty() {
      continue;
    }
    groups
      .entry(fragment.category.heading())
      .or_default()
      .push(fragment.body.clone());
  }
  groups
}

/// Render a Keep a Changelog section for one release.
///
/// Recognized headings come out in the fixed priority order; ad-hoc headings
/// follow, alphabetically. Entry lines are bulleted unless already bulleted.
pub fn build_section(version: &Version, date: &str, groups: &BTreeMap<String, Vec<String>>) -> String {
  let mut lines = vec![format!("## [{}] - {}", version, date), String::new()];

  let fixed: Vec<&str> = HEADING_ORDER.to_vec();
  let ordered = fixed
    .iter()
    .copied()
    .filter(|h| groups.contains_key(*h))
    .map(str::to_string)
    .chain(groups.keys().filter(|k| !fixed.contains(&k.as_str())).cloned());

  for heading in ordered {
    lines.push(format!("### {}", heading));
    lines.push(String::new());
    for entry in &groups[&heading] {
      for raw_line in entry.lines() {
        let trimmed = raw_line.trim();
        if trimmed.is_empty() {
          continue;
        }
        if trimmed.starts_with("- ") {
          lines.push(trimmed.to_string());
        } else {
          lines.push(format!("- {}", trimmed));
        }
      }
    }
    lines.push(String::new());
  }

  lines.join("\n")
}

/// The changelog document, held in memory between load and save
#[derive(Debug, Clone)]
pub struct ChangelogDoc {
  path: PathBuf,
  text: String,
}

impl ChangelogDoc {
  pub fn load(path: &Path) -> RelResult<Self> {
    let text =
      fs::read_to_string(path).with_context(|| format!("Failed to read changelog {}", path.display()))?;
    Ok(Self {
      path: path.to_path_buf(),
      text,
    })
  }

  #[allow(dead_code)] // Used in tests
  pub fn text(&self) -> &str {
    &self.text
  }

  /// The most recent released version: the bracketed token of the first
  /// `## [` heading, or "0.0.0" for a virgin changelog
  pub fn previous_version(&self) -> String {
    for line in self.text.lines() {
      if let Some(rest) = line.strip_prefix("## [") {
        if let Some((version, _)) = rest.split_once(']') {
          return version.to_string();
        }
      }
    }
    "0.0.0".to_string()
  }

  /// Guard against duplicating a section on re-run after a partial failure
  pub fn ensure_no_section(&self, version: &Version) -> RelResult<()> {
    let heading = format!("## [{}]", version);
    if self.text.lines().any(|line| line.starts_with(&heading)) {
      return Err(RelError::Changelog(ChangelogError::SectionExists {
        version: version.to_string(),
      }));
    }
    Ok(())
  }

  /// Splice the new section immediately before the first existing `## [`
  /// heading, or append it after the header content when none exists
  pub fn insert_section(&mut self, section: &str) {
    if self.text.starts_with("## [") {
      self.text = format!("{}\n{}", section, self.text);
    } else if let Some(pos) = self.text.find("\n## [") {
      let (header, rest) = self.text.split_at(pos + 1);
      self.text = format!("{}{}\n{}", header, section, rest);
    } else {
      self.text = format!("{}\n\n{}\n", self.text.trim_end(), section);
    }
  }

  /// Insert the comparison link immediately before the first existing
  /// reference-style link line, or append it at document end when none exists
  pub fn insert_link(&mut self, link: &str) {
    let mut lines: Vec<String> = self.text.split('\n').map(str::to_string).collect();
    let insert_at = lines
      .iter()
      .position(|line| line.starts_with('[') && line.contains("]: https://"));

    match insert_at {
      Some(idx) => lines.insert(idx, link.to_string()),
      None => {
        lines.push(String::new());
        lines.push(link.to_string());
      }
    }

    self.text = lines.join("\n");
  }

  pub fn save(&self) -> RelResult<()> {
    fs::write(&self.path, &self.text)
      .with_context(|| format!("Failed to write changelog {}", self.path.display()))?;
    Ok(())
  }
}

/// Build the `[version]: <repo>/compare/<old>...<new>` reference link
pub fn compare_link(repo_url: &str, old_version: &str, new_version: &Version) -> String {
  format!(
    "[{}]: {}/compare/{}...{}",
    new_version,
    repo_url.trim_end_matches('/'),
    old_version,
    new_version
  )
}
