//! Bump command: rewrite the manifest version from pending fragments

use crate::core::config::RelkitConfig;
use crate::core::error::RelResult;
use crate::release::bump::{Manifest, bump_level};
use crate::release::fragment::FragmentStore;
use std::env;
use std::path::PathBuf;

/// Run the bump command.
///
/// An empty fragment store, or a store with no pattern-matching files, is a
/// successful no-op: the manifest is left byte-for-byte untouched.
pub fn run_bump(
  fragments_dir: Option<PathBuf>,
  manifest_path: Option<PathBuf>,
  dry_run: bool,
) -> RelResult<()> {
  let root = env::current_dir()?;
  let config = RelkitConfig::load(&root)?;

  let dir = root.join(fragments_dir.unwrap_or(config.fragments_dir));
  let manifest_path = root.join(manifest_path.unwrap_or(config.manifest));

  let store = FragmentStore::new(dir, config.sentinel);
  if !store.has_any_files()? {
    println!("No changelog fragments found. Nothing to bump.");
    return Ok(());
  }

  let fragments = store.scan()?;
  let Some(level) = bump_level(&fragments) else {
    println!("No valid fragments found. Nothing to bump.");
    return Ok(());
  };

  let mut manifest = Manifest::load(&manifest_path)?;
  let old_version = manifest.current_version()?;
  let new_version = level.apply(&old_version);

  if dry_run {
    println!("🔍 Would bump version: {} → {} (dry-run)", old_version, new_version);
    return Ok(());
  }

  manifest.replace_version(&old_version, &new_version)?;
  manifest.save()?;

  println!("✅ Bumped version: {} → {}", old_version, new_version);
  Ok(())
}
