use std::{borrow::Cow, sync::LazyLock};

use regex::{Captures, Regex};

use crate::generator::environment::EnvironmentMap;

static PLACEHOLDER_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\{\{[^}]*\}\}").unwrap());

/// Replaces every `{{...}}` token in `text` with its value from `environment`.
///
/// Unknown tokens are kept verbatim, braces included. Replacement values are
/// inserted as-is and never scanned again.
#[must_use]
pub fn substitute<'a>(text: &'a str, environment: &EnvironmentMap) -> Cow<'a, str> {
  if environment.is_empty() {
    return Cow::Borrowed(text);
  }

  PLACEHOLDER_RE.replace_all(text, |caps: &Captures<'_>| {
    let token = &caps[0];
    environment.get(token).unwrap_or(token).to_string()
  })
}

/// Lists the distinct placeholder tokens in `text` that `environment` cannot resolve.
#[must_use]
pub fn unresolved_tokens<'a>(text: &'a str, environment: &EnvironmentMap) -> Vec<&'a str> {
  let mut tokens: Vec<&str> = PLACEHOLDER_RE
    .find_iter(text)
    .map(|found| found.as_str())
    .filter(|token| environment.get(token).is_none())
    .collect();
  tokens.sort_unstable();
  tokens.dedup();
  tokens
}
