//! Integration tests for `relkit changelog` and the bump-then-build pipeline

use crate::helpers::{TestRepo, run_relkit, run_relkit_raw, stderr_of, stdout_of};
use anyhow::Result;

#[test]
fn test_pipeline_builds_section_and_clears_store() -> Result<()> {
  let repo = TestRepo::new()?;
  repo.add_fragment("a.added.md", "Add X\n")?;
  repo.add_fragment("b.fixed.md", "Fix Y\n")?;

  run_relkit(&repo.path, &["bump"])?;
  let output = run_relkit(&repo.path, &["changelog"])?;
  assert!(stdout_of(&output).contains("0.4.0"));

  let changelog = repo.read_file("CHANGELOG.md")?;

  // New section sits above the previous release
  let new_pos = changelog.find("## [0.4.0] - ").expect("new section");
  let old_pos = changelog.find("## [0.3.0] - ").expect("old section");
  assert!(new_pos < old_pos);

  // Added renders before Fixed, one bullet each
  let added = changelog.find("### Added").unwrap();
  let fixed = changelog.find("### Fixed").unwrap();
  assert!(added < fixed);
  assert!(changelog.contains("- Add X"));
  assert!(changelog.contains("- Fix Y"));

  // Comparison link inserted above the previous link
  let new_link = changelog
    .find("[0.4.0]: https://github.com/policyengine/policyengine-claude/compare/0.3.0...0.4.0")
    .expect("new link");
  let old_link = changelog.find("[0.3.0]: https://").expect("old link");
  assert!(new_link < old_link);

  // Store cleared down to the sentinel
  assert_eq!(repo.fragment_files()?, vec![".gitkeep".to_string()]);
  Ok(())
}

#[test]
fn test_changelog_empty_store_is_noop() -> Result<()> {
  let repo = TestRepo::new()?;
  let before = repo.read_file("CHANGELOG.md")?;

  let output = run_relkit(&repo.path, &["changelog"])?;
  assert!(stdout_of(&output).contains("Nothing to build"));
  assert_eq!(repo.read_file("CHANGELOG.md")?, before);
  Ok(())
}

#[test]
fn test_rerun_after_success_is_noop() -> Result<()> {
  let repo = TestRepo::new()?;
  repo.add_fragment("a.added.md", "Add X\n")?;

  run_relkit(&repo.path, &["bump"])?;
  run_relkit(&repo.path, &["changelog"])?;
  let after_first = repo.read_file("CHANGELOG.md")?;

  let output = run_relkit(&repo.path, &["changelog"])?;
  assert!(stdout_of(&output).contains("Nothing to build"));
  assert_eq!(repo.read_file("CHANGELOG.md")?, after_first);
  Ok(())
}

#[test]
fn test_empty_body_fragment_contributes_nothing() -> Result<()> {
  let repo = TestRepo::new()?;
  repo.add_fragment("a.added.md", "Add X\n")?;
  repo.add_fragment("b.fixed.md", "   \n\n")?;

  run_relkit(&repo.path, &["bump"])?;
  run_relkit(&repo.path, &["changelog"])?;

  let changelog = repo.read_file("CHANGELOG.md")?;
  let new_section = &changelog[..changelog.find("## [0.3.0]").unwrap()];
  assert!(new_section.contains("### Added"));
  // No empty Fixed sub-heading for the blank fragment
  assert!(!new_section.contains("### Fixed"));
  Ok(())
}

#[test]
fn test_unrecognized_category_gets_fallback_heading() -> Result<()> {
  let repo = TestRepo::new()?;
  repo.add_fragment("cve.security.md", "Patch a CVE\n")?;
  repo.add_fragment("a.added.md", "Add X\n")?;

  run_relkit(&repo.path, &["bump"])?;
  run_relkit(&repo.path, &["changelog"])?;

  let changelog = repo.read_file("CHANGELOG.md")?;
  let added = changelog.find("### Added").unwrap();
  let security = changelog.find("### Security").unwrap();
  // Ad-hoc headings render after the recognized ones
  assert!(added < security);
  assert!(changelog.contains("- Patch a CVE"));
  Ok(())
}

#[test]
fn test_virgin_changelog_appends_section_and_link() -> Result<()> {
  let repo = TestRepo::new()?;
  std::fs::write(repo.path.join("CHANGELOG.md"), "# Changelog\n\nNothing yet.\n")?;
  repo.add_fragment("a.added.md", "Add X\n")?;

  run_relkit(&repo.path, &["bump"])?;
  run_relkit(&repo.path, &["changelog"])?;

  let changelog = repo.read_file("CHANGELOG.md")?;
  assert!(changelog.starts_with("# Changelog"));
  assert!(changelog.contains("## [0.4.0] - "));
  // Previous version defaults to 0.0.0 when no heading exists
  assert!(changelog.contains("compare/0.0.0...0.4.0"));
  Ok(())
}

#[test]
fn test_duplicate_section_guard() -> Result<()> {
  let repo = TestRepo::new()?;
  repo.add_fragment("a.added.md", "Add X\n")?;

  run_relkit(&repo.path, &["bump"])?;
  run_relkit(&repo.path, &["changelog"])?;

  // Simulate a crash between changelog write and fragment deletion
  repo.add_fragment("a.added.md", "Add X\n")?;

  let output = run_relkit_raw(&repo.path, &["changelog"])?;
  assert_eq!(output.status.code(), Some(1));
  assert!(stderr_of(&output).contains("already contains a section for version 0.4.0"));

  // Nothing was consumed
  assert!(repo.file_exists("changelog.d/a.added.md"));
  Ok(())
}

#[test]
fn test_changelog_dry_run_writes_nothing() -> Result<()> {
  let repo = TestRepo::new()?;
  repo.add_fragment("a.added.md", "Add X\n")?;
  let before = repo.read_file("CHANGELOG.md")?;

  let output = run_relkit(&repo.path, &["changelog", "--dry-run"])?;
  assert!(stdout_of(&output).contains("### Added"));

  assert_eq!(repo.read_file("CHANGELOG.md")?, before);
  assert!(repo.file_exists("changelog.d/a.added.md"));
  Ok(())
}

#[test]
fn test_multiline_fragment_bodies_bulleted() -> Result<()> {
  let repo = TestRepo::new()?;
  repo.add_fragment("a.changed.md", "- Update docs\nRework layout\n")?;

  run_relkit(&repo.path, &["bump"])?;
  run_relkit(&repo.path, &["changelog"])?;

  let changelog = repo.read_file("CHANGELOG.md")?;
  assert!(changelog.contains("- Update docs"));
  assert!(changelog.contains("- Rework layout"));
  Ok(())
}

#[test]
fn test_paths_from_relkit_toml() -> Result<()> {
  let repo = TestRepo::new()?;
  std::fs::write(
    repo.path.join("relkit.toml"),
    "fragments_dir = \"fragments\"\nmanifest = \"plugin.json\"\nchangelog = \"HISTORY.md\"\n",
  )?;
  std::fs::create_dir(repo.path.join("fragments"))?;
  std::fs::write(repo.path.join("fragments/.gitkeep"), "")?;
  std::fs::write(repo.path.join("fragments/a.added.md"), "Add X\n")?;
  std::fs::write(repo.path.join("plugin.json"), "{\n  \"version\": \"1.0.0\"\n}\n")?;
  std::fs::write(repo.path.join("HISTORY.md"), "# History\n")?;

  run_relkit(&repo.path, &["bump"])?;
  run_relkit(&repo.path, &["changelog"])?;

  assert!(repo.read_file("plugin.json")?.contains("\"version\": \"1.1.0\""));
  assert!(repo.read_file("HISTORY.md")?.contains("## [1.1.0] - "));
  // The default-path fixtures are untouched
  assert!(repo.read_file("package.json")?.contains("\"version\": \"0.3.0\""));
  Ok(())
}
