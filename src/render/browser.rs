//! Headless browser discovery and screenshot rendering
//!
//! Probes a fixed list of known install locations for Chrome/Chromium, then
//! shells out with `--headless --screenshot`. A missing browser is a distinct
//! failure from a browser that ran and reported an error.

use crate::core::error::{RelError, RelResult, RenderError};
use std::path::{Path, PathBuf};
use std::process::Command;

/// Known browser install locations, probed in order. The bare command name at
/// the end is resolved through `which` for PATH installs.
const BROWSER_CANDIDATES: [&str; 4] = [
  "/Applications/Google Chrome.app/Contents/MacOS/Google Chrome",
  "/usr/bin/google-chrome",
  "/usr/bin/chromium-browser",
  "google-chrome",
];

/// Find a usable browser binary, or `None` when every probe misses
pub fn locate_browser() -> Option<PathBuf> {
  for candidate in BROWSER_CANDIDATES {
    if Path::new(candidate).exists() || resolves_on_path(candidate) {
      return Some(PathBuf::from(candidate));
    }
  }
  None
}

fn resolves_on_path(command: &str) -> bool {
  Command::new("which")
    .arg(command)
    .output()
    .map(|out| out.status.success())
    .unwrap_or(false)
}

/// Render an HTML file to an image via a headless browser screenshot
pub fn render_image(html_path: &Path, output_path: &Path, width: u32, height: u32) -> RelResult<()> {
  let browser = locate_browser().ok_or(RelError::Render(RenderError::BrowserNotFound))?;

  let html_abs = html_path.canonicalize()?;
  let output = Command::new(&browser)
    .arg("--headless")
    .arg("--disable-gpu")
    .arg(format!("--screenshot={}", output_path.display()))
    .arg(format!("--window-size={},{}", width, height))
    .arg("--hide-scrollbars")
    .arg(format!("file://{}", html_abs.display()))
    .output()?;

  if !output.status.success() {
    return Err(RelError::Render(RenderError::RenderFailed {
      stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
    }));
  }

  if !output_path.exists() {
    return Err(RelError::Render(RenderError::OutputMissing {
      path: output_path.to_path_buf(),
    }));
  }

  Ok(())
}
