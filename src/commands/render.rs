//! Render command: fill an HTML template and screenshot it to an image

use crate::core::error::{RelError, RelResult, ResultExt};
use crate::render::browser::render_image;
use crate::render::template::fill_template;
use serde_json::Value;
use std::collections::HashMap;
use std::fs;
use std::io::Write;
use std::path::PathBuf;

/// Run the render command.
///
/// Variables come from the optional JSON file first, then repeated
/// `key=value` arguments; later sources override earlier ones.
pub fn run_render(
  template: PathBuf,
  output: PathBuf,
  vars_file: Option<PathBuf>,
  var_args: Vec<String>,
  width: u32,
  height: u32,
) -> RelResult<()> {
  let vars = collect_vars(vars_file, var_args)?;

  let template_text =
    fs::read_to_string(&template).with_context(|| format!("Failed to read template {}", template.display()))?;
  let filled = fill_template(&template_text, &vars);

  // Scratch file is removed on drop, after the screenshot is taken
  let mut scratch = tempfile::Builder::new().suffix(".html").tempfile()?;
  scratch.write_all(filled.as_bytes())?;
  scratch.flush()?;

  render_image(scratch.path(), &output, width, height)?;

  println!("Generated: {}", output.display());
  Ok(())
}

/// Merge variables from the JSON file and the repeated `key=value` arguments;
/// arguments win over file entries
fn collect_vars(vars_file: Option<PathBuf>, var_args: Vec<String>) -> RelResult<HashMap<String, String>> {
  let mut vars: HashMap<String, String> = HashMap::new();

  if let Some(path) = vars_file {
    let raw = fs::read_to_string(&path).with_context(|| format!("Failed to read {}", path.display()))?;
    let parsed: HashMap<String, Value> = serde_json::from_str(&raw)?;
    for (key, value) in parsed {
      vars.insert(key, stringify(value));
    }
  }

  for arg in var_args {
    let Some((key, value)) = arg.split_once('=') else {
      return Err(RelError::with_help(
        format!("Invalid --var '{}'", arg),
        "Variables are passed as --var key=value",
      ));
    };
    vars.insert(key.to_string(), value.to_string());
  }

  Ok(vars)
}

fn stringify(value: Value) -> String {
  match value {
    Value::String(s) => s,
    other => other.to_string(),
  }
}
