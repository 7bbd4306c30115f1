//! Release pipeline: fragment store, version bumper, changelog builder
//!
//! Two cooperating tools over a shared fragment directory and manifest. The
//! bumper runs first and rewrites the manifest's version; the builder then
//! reads the updated manifest, splices a new changelog section, and clears
//! the store. Both are no-ops on an empty store.

pub mod bump;
pub mod changelog;
pub mod fragment;
