//! Error types for relkit with contextual messages and exit codes
//!
//! This module provides a unified error type that categorizes errors and provides
//! contextual help messages to users. The two designated "nothing to do" states
//! (empty fragment store, no matching fragments) are not errors and never reach
//! this module; everything that does is fatal to the invoking process.

use std::fmt;
use std::io;
use std::path::PathBuf;

/// Exit codes for relkit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
  /// User error (config, invalid input, render failure)
  User = 1,
  /// System error (I/O)
  System = 2,
}

impl ExitCode {
  /// Convert to i32 for process exit
  pub fn as_i32(self) -> i32 {
    self as i32
  }
}

/// Main error type for relkit
#[derive(Debug)]
pub enum RelError {
  /// Manifest errors (missing or malformed version field)
  Manifest(ManifestError),

  /// Changelog document errors
  Changelog(ChangelogError),

  /// Situation builder input errors
  Situation(SituationError),

  /// Social image rendering errors
  Render(RenderError),

  /// I/O errors
  Io(io::Error),

  /// Generic error with message and optional context
  Message {
    message: String,
    context: Option<String>,
    help: Option<String>,
  },
}

impl RelError {
  /// Create a simple error message
  pub fn message(msg: impl Into<String>) -> Self {
    RelError::Message {
      message: msg.into(),
      context: None,
      help: None,
    }
  }

  /// Create an error with help text
  pub fn with_help(msg: impl Into<String>, help: impl Into<String>) -> Self {
    RelError::Message {
      message: msg.into(),
      context: None,
      help: Some(help.into()),
    }
  }

  /// Add context to an existing error
  pub fn context(self, ctx: impl Into<String>) -> Self {
    let ctx_str = ctx.into();
    match self {
      RelError::Message { message, context, help } => RelError::Message {
        message,
        context: Some(context.map(|c| format!("{}\n{}", ctx_str, c)).unwrap_or(ctx_str)),
        help,
      },
      RelError::Io(e) => RelError::Message {
        message: ctx_str,
        context: Some(e.to_string()),
        help: None,
      },
      _ => self,
    }
  }

  /// Get the appropriate exit code for this error
  pub fn exit_code(&self) -> ExitCode {
    match self {
      RelError::Io(_) => ExitCode::System,
      _ => ExitCode::User,
    }
  }

  /// Get contextual help message for this error
  pub fn help_message(&self) -> Option<String> {
    match self {
      RelError::Manifest(e) => e.help_message(),
      RelError::Changelog(e) => e.help_message(),
      RelError::Situation(e) => e.help_message(),
      RelError::Render(e) => e.help_message(),
      RelError::Message { help, .. } => help.clone(),
      RelError::Io(_) => None,
    }
  }
}

impl fmt::Display for RelError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      RelError::Manifest(e) => write!(f, "{}", e),
      RelError::Changelog(e) => write!(f, "{}", e),
      RelError::Situation(e) => write!(f, "{}", e),
      RelError::Render(e) => write!(f, "{}", e),
      RelError::Io(e) => write!(f, "I/O error: {}", e),
      RelError::Message { message, context, .. } => {
        write!(f, "{}", message)?;
        if let Some(ctx) = context {
          write!(f, "\n{}", ctx)?;
        }
        Ok(())
      }
    }
  }
}

impl std::error::Error for RelError {
  fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
    match self {
      RelError::Io(e) => Some(e),
      _ => None,
    }
  }
}

impl From<io::Error> for RelError {
  fn from(err: io::Error) -> Self {
    RelError::Io(err)
  }
}

impl From<String> for RelError {
  fn from(msg: String) -> Self {
    RelError::message(msg)
  }
}

impl From<&str> for RelError {
  fn from(msg: &str) -> Self {
    RelError::message(msg)
  }
}

impl From<serde_json::Error> for RelError {
  fn from(err: serde_json::Error) -> Self {
    RelError::message(format!("JSON error: {}", err))
  }
}

impl From<toml_edit::TomlError> for RelError {
  fn from(err: toml_edit::TomlError) -> Self {
    RelError::message(format!("TOML parse error: {}", err))
  }
}

impl From<toml_edit::de::Error> for RelError {
  fn from(err: toml_edit::de::Error) -> Self {
    RelError::message(format!("TOML deserialization error: {}", err))
  }
}

impl From<anyhow::Error> for RelError {
  fn from(err: anyhow::Error) -> Self {
    RelError::message(err.to_string())
  }
}

/// Manifest-related errors
#[derive(Debug)]
pub enum ManifestError {
  /// No top-level "version" field
  MissingVersion { path: PathBuf },

  /// Version field is not a dotted triple of non-negative integers
  InvalidVersion { path: PathBuf, value: String },

  /// The exact `"version": "<old>"` text was not found for replacement
  VersionNotInText { path: PathBuf, version: String },
}

impl ManifestError {
  fn help_message(&self) -> Option<String> {
    match self {
      ManifestError::MissingVersion { .. } | ManifestError::InvalidVersion { .. } => Some(
        "The manifest must contain a top-level field like: \"version\": \"1.2.3\"".to_string(),
      ),
      ManifestError::VersionNotInText { .. } => Some(
        "relkit edits the manifest as raw text to preserve its formatting; the version field must be written as \"version\": \"X.Y.Z\"".to_string(),
      ),
    }
  }
}

impl fmt::Display for ManifestError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      ManifestError::MissingVersion { path } => {
        write!(f, "Malformed manifest {}: no \"version\" field", path.display())
      }
      ManifestError::InvalidVersion { path, value } => {
        write!(
          f,
          "Malformed manifest {}: version '{}' is not a MAJOR.MINOR.PATCH triple",
          path.display(),
          value
        )
      }
      ManifestError::VersionNotInText { path, version } => {
        write!(
          f,
          "Could not find \"version\": \"{}\" in {} for replacement",
          version,
          path.display()
        )
      }
    }
  }
}

/// Changelog document errors
#[derive(Debug)]
pub enum ChangelogError {
  /// A `## [version]` section is already present
  SectionExists { version: String },
}

impl ChangelogError {
  fn help_message(&self) -> Option<String> {
    match self {
      ChangelogError::SectionExists { .. } => Some(
        "A previous run likely wrote the changelog but failed to delete the fragments. Remove the stale fragments (or the duplicate section) and re-run.".to_string(),
      ),
    }
  }
}

impl fmt::Display for ChangelogError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      ChangelogError::SectionExists { version } => {
        write!(f, "Changelog already contains a section for version {}", version)
      }
    }
  }
}

/// Situation builder input errors
#[derive(Debug)]
pub enum SituationError {
  /// Region/state code not in the allow-list
  UnknownCode {
    kind: &'static str,
    code: String,
    choices: Vec<&'static str>,
  },

  /// child_ages length does not match num_children
  ChildAgesMismatch { expected: usize, actual: usize },
}

impl SituationError {
  fn help_message(&self) -> Option<String> {
    match self {
      SituationError::UnknownCode { kind, choices, .. } => {
        Some(format!("Valid {} codes: {}", kind, choices.join(", ")))
      }
      SituationError::ChildAgesMismatch { .. } => None,
    }
  }
}

impl fmt::Display for SituationError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      SituationError::UnknownCode { kind, code, choices } => {
        write!(
          f,
          "Invalid {} '{}'. Must be one of: {}",
          kind,
          code,
          choices.join(", ")
        )
      }
      SituationError::ChildAgesMismatch { expected, actual } => {
        write!(
          f,
          "Length of child_ages ({}) must match num_children ({})",
          actual, expected
        )
      }
    }
  }
}

/// Social image rendering errors
#[derive(Debug)]
pub enum RenderError {
  /// No browser binary found on any probed path
  BrowserNotFound,

  /// Browser subprocess reported a nonzero exit
  RenderFailed { stderr: String },

  /// Browser exited cleanly but produced no output file
  OutputMissing { path: PathBuf },
}

impl RenderError {
  fn help_message(&self) -> Option<String> {
    match self {
      RenderError::BrowserNotFound => Some(
        "Install Google Chrome or Chromium, or make `google-chrome` available on PATH.".to_string(),
      ),
      _ => None,
    }
  }
}

impl fmt::Display for RenderError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      RenderError::BrowserNotFound => write!(f, "No headless browser found"),
      RenderError::RenderFailed { stderr } => {
        write!(f, "Failed to generate image")?;
        if !stderr.trim().is_empty() {
          write!(f, "\n{}", stderr.trim())?;
        }
        Ok(())
      }
      RenderError::OutputMissing { path } => {
        write!(f, "Browser exited successfully but {} was not created", path.display())
      }
    }
  }
}

/// Result type alias for relkit
pub type RelResult<T> = Result<T, RelError>;

/// Helper trait to add context to Results
pub trait ResultExt<T> {
  /// Add context to an error result
  fn context(self, ctx: impl Into<String>) -> RelResult<T>;

  /// Add context using a closure (lazy evaluation)
  fn with_context<F>(self, f: F) -> RelResult<T>
  where
    F: FnOnce() -> String;
}

impl<T, E> ResultExt<T> for Result<T, E>
where
  E: Into<RelError>,
{
  fn context(self, ctx: impl Into<String>) -> RelResult<T> {
    self.map_err(|e| e.into().context(ctx))
  }

  fn with_context<F>(self, f: F) -> RelResult<T>
  where
    F: FnOnce() -> String,
  {
    self.map_err(|e| e.into().context(f()))
  }
}

/// Pretty-print an error to stderr with help text
pub fn print_error(error: &RelError) {
  eprintln!("\n❌ {}\n", error);

  if let Some(help) = error.help_message() {
    eprintln!("💡 Help: {}\n", help);
  }
}
