use indexmap::IndexMap;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// An environment description: an ordered list of variables.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Environment {
  #[serde(default)]
  pub values: Vec<EnvironmentVariable>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct EnvironmentVariable {
  #[serde(default, deserialize_with = "scalar_as_string")]
  pub key: String,
  /// `None` when the exported value is falsy (`""`, `0`, `false`, `null`).
  #[serde(default, deserialize_with = "truthy_value")]
  pub value: Option<String>,
}

/// Lookup table from placeholder token (`{{key}}`) to its replacement text.
///
/// Read-only once built. Duplicate keys resolve to the last value seen, and a
/// falsy value leaves its token unresolved even if an earlier entry set it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnvironmentMap {
  tokens: IndexMap<String, String>,
}

impl EnvironmentMap {
  #[must_use]
  pub fn new() -> Self {
    Self::default()
  }

  pub fn from_variables<I>(variables: I) -> Self
  where
    I: IntoIterator<Item = EnvironmentVariable>,
  {
    let mut tokens = IndexMap::new();
    for EnvironmentVariable { key, value } in variables {
      let token = placeholder_token(&key);
      match value {
        Some(value) => {
          tokens.insert(token, value);
        }
        None => {
          tokens.shift_remove(&token);
        }
      }
    }
    Self { tokens }
  }

  #[must_use]
  pub fn get(&self, token: &str) -> Option<&str> {
    self.tokens.get(token).map(String::as_str)
  }

  #[must_use]
  pub fn len(&self) -> usize {
    self.tokens.len()
  }

  #[must_use]
  pub fn is_empty(&self) -> bool {
    self.tokens.is_empty()
  }
}

impl From<Environment> for EnvironmentMap {
  fn from(environment: Environment) -> Self {
    Self::from_variables(environment.values)
  }
}

#[must_use]
pub fn placeholder_token(key: &str) -> String {
  format!("{{{{{key}}}}}")
}

/// Variable values are usually strings, but numbers and booleans show up in
/// exported environments too. They are substituted using their JSON text.
fn scalar_as_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
  D: Deserializer<'de>,
{
  Ok(match Value::deserialize(deserializer)? {
    Value::Null => String::new(),
    Value::String(text) => text,
    other => other.to_string(),
  })
}

/// Falsy values never replace a placeholder; the token stays in the output.
fn truthy_value<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
  D: Deserializer<'de>,
{
  Ok(match Value::deserialize(deserializer)? {
    Value::Null | Value::Bool(false) => None,
    Value::String(text) if text.is_empty() => None,
    Value::Number(number) if number.as_f64() == Some(0.0) => None,
    Value::String(text) => Some(text),
    other => Some(other.to_string()),
  })
}
