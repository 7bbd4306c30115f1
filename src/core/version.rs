//! Semantic version bump levels

use semver::Version;

/// Version bump level, ordered by priority: `Major < Minor < Patch`, so the
/// minimum of a set of levels is the highest-priority bump required
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum BumpLevel {
  Major,
  Minor,
  Patch,
}

impl BumpLevel {
  /// Apply this bump to a version, producing the next release version
  pub fn apply(&self, current: &Version) -> Version {
    match self {
      BumpLevel::Major => Version::new(current.major + 1, 0, 0),
      BumpLevel::Minor => Version::new(current.major, current.minor + 1, 0),
      BumpLevel::Patch => Version::new(current.major, current.minor, current.patch + 1),
    }
  }
}

/// Parse a strict `MAJOR.MINOR.PATCH` triple. Pre-release and build metadata
/// are rejected: the manifest contract is a plain dotted triple.
pub fn parse_triple(raw: &str) -> Option<Version> {
  let version = Version::parse(raw.trim()).ok()?;
  if version.pre.is_empty() && version.build.is_empty() {
    Some(version)
  } else {
    None
  }
}
