//! Changelog command: consolidate pending fragments into a release section

use crate::core::config::RelkitConfig;
use crate::core::error::RelResult;
use crate::release::bump::Manifest;
use crate::release::changelog::{ChangelogDoc, build_section, compare_link, group_fragments};
use crate::release::fragment::FragmentStore;
use std::env;
use std::path::PathBuf;

/// Run the changelog command.
///
/// Expects the manifest to already hold the release version (the bump command
/// runs first). Splices the new section and comparison link, persists the
/// changelog, then clears the fragment store. Fragment deletion happens only
/// after the changelog write succeeds; there is no rollback of the write
/// itself, which the duplicate-section guard makes visible on re-run.
pub fn run_changelog(
  fragments_dir: Option<PathBuf>,
  manifest_path: Option<PathBuf>,
  changelog_path: Option<PathBuf>,
  dry_run: bool,
) -> RelResult<()> {
  let root = env::current_dir()?;
  let config = RelkitConfig::load(&root)?;

  let dir = root.join(fragments_dir.unwrap_or(config.fragments_dir));
  let manifest_path = root.join(manifest_path.unwrap_or(config.manifest));
  let changelog_path = root.join(changelog_path.unwrap_or(config.changelog));

  let store = FragmentStore::new(dir, config.sentinel);
  if !store.has_any_files()? {
    println!("No changelog fragments found. Nothing to build.");
    return Ok(());
  }

  let fragments = store.scan()?;
  let groups = group_fragments(&fragments);

  let manifest = Manifest::load(&manifest_path)?;
  let version = manifest.current_version()?;

  let mut doc = ChangelogDoc::load(&changelog_path)?;
  doc.ensure_no_section(&version)?;
  let old_version = doc.previous_version();

  let date = chrono::Local::now().format("%Y-%m-%d").to_string();
  let section = build_section(&version, &date, &groups);

  if dry_run {
    println!("🔍 Would add to {} (dry-run):\n", changelog_path.display());
    println!("{}", section);
    return Ok(());
  }

  doc.insert_section(&section);
  doc.insert_link(&compare_link(&config.repo_url, &old_version, &version));
  doc.save()?;

  store.delete_all()?;

  println!("✅ Built changelog for version {}", version);
  Ok(())
}
