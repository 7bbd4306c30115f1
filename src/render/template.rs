//! Template variable substitution
//!
//! Replaces `{{name}}` and `{{name|default:value}}` tokens. Unknown names
//! without a default are left verbatim so a half-filled template is visible
//! in the output rather than silently blanked.

use regex::{Captures, Regex};
use std::collections::HashMap;
use std::sync::LazyLock;

static TOKEN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\{\{([^}]+)\}\}").unwrap());

/// Substitute template tokens with values from `vars`
pub fn fill_template(text: &str, vars: &HashMap<String, String>) -> String {
  TOKEN
    .replace_all(text, |caps: &Captures<'_>| {
      let expr = &caps[1];
      if let Some((name, default)) = expr.split_once("|default:") {
        vars
          .get(name.trim())
          .cloned()
          .unwrap_or_else(|| default.to_string())
      } else {
        vars
          .get(expr.trim())
          .cloned()
          .unwrap_or_else(|| caps[0].to_string())
      }
    })
    .into_owned()
}
