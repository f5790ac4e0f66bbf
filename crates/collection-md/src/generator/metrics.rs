use std::collections::BTreeSet;

use strum::Display;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GenerationStats {
  pub folders_rendered: usize,
  pub requests_rendered: usize,
  pub responses_rendered: usize,
  pub unresolved_placeholders: BTreeSet<String>,
  pub warnings: Vec<GenerationWarning>,
}

impl GenerationStats {
  pub fn record_folder(&mut self) {
    self.folders_rendered += 1;
  }

  pub fn record_request(&mut self, responses: usize) {
    self.requests_rendered += 1;
    self.responses_rendered += responses;
  }

  pub fn record_unresolved<'a>(&mut self, tokens: impl IntoIterator<Item = &'a str>) {
    self
      .unresolved_placeholders
      .extend(tokens.into_iter().map(str::to_string));
  }

  pub fn record_warning(&mut self, warning: GenerationWarning) {
    self.warnings.push(warning);
  }
}

#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum GenerationWarning {
  #[strum(to_string = "Request '{request}': body mode '{mode}' is not supported, body omitted")]
  UnsupportedBodyMode { request: String, mode: String },
  #[strum(to_string = "'{path}' is written more than once, the last entry wins")]
  DuplicateOutputPath { path: String },
}

impl GenerationWarning {
  pub fn is_skipped_item(&self) -> bool {
    matches!(self, Self::UnsupportedBodyMode { .. })
  }
}
