//! Markdown rendering for folders and requests.
//!
//! Renderers produce raw text; placeholder substitution happens afterwards on
//! the fully assembled document.

use itertools::Itertools;

use crate::generator::model::{Header, QueryParam, Request, Response};

const FENCE: &str = "```";
const PARAMETERS_INTRO: &str = "You can include the following parameters in a search request.";

/// Overview page shared by the collection root and every folder.
#[must_use]
pub fn overview(name: &str, description: Option<&str>) -> String {
  format!("# {name}\n\n{}", description.unwrap_or_default())
}

/// Full document for a single request.
///
/// Sections without content are left out entirely, so no empty tables are
/// ever produced. Only `raw` bodies are rendered.
#[must_use]
pub fn request_document(request: &Request) -> String {
  let mut sections = vec![
    format!("## {}\n", request.name),
    format!("{FENCE}{} {}{FENCE}\n", request.method, request.url.raw),
  ];

  if let Some(description) = &request.description {
    sections.push(format!("{description}\n"));
  }

  if !request.url.query.is_empty() {
    sections.push(format!("### Parameters\n\n{PARAMETERS_INTRO}\n"));
    sections.push(query_table(&request.url.query));
  }

  if !request.headers.is_empty() {
    sections.push("### Headers\n".to_string());
    sections.push(header_table(&request.headers));
  }

  if let Some(body) = request.body.as_ref().filter(|body| body.is_raw()) {
    sections.push("### Body\n".to_string());
    sections.push(format!("{FENCE}\n{}\n{FENCE}", body.raw));
  }

  if !request.responses.is_empty() {
    sections.push("### Example Responses\n".to_string());
    sections.extend(request.responses.iter().flat_map(response_lines));
  }

  sections.join("\n")
}

#[must_use]
pub fn query_table(params: &[QueryParam]) -> String {
  table(
    &["Key", "Value", "Description"],
    params
      .iter()
      .map(|param| vec![param.key.as_str(), param.value.as_str(), param.description.as_str()]),
  )
}

#[must_use]
pub fn header_table(headers: &[Header]) -> String {
  table(
    &["Key", "Value", "Description", "Type"],
    headers.iter().map(|header| {
      vec![
        header.key.as_str(),
        header.value.as_str(),
        header.description.as_str(),
        header.kind.as_str(),
      ]
    }),
  )
}

fn table<'a>(columns: &[&str], rows: impl Iterator<Item = Vec<&'a str>>) -> String {
  let header = columns.join(" | ");
  let divider = columns.iter().map(|_| "---").join(" | ");
  let body = rows.map(|cells| cells.join(" | "));

  std::iter::once(header)
    .chain(std::iter::once(divider))
    .chain(body)
    .join("\n")
}

fn response_lines(response: &Response) -> [String; 3] {
  [
    format!("- {}\n", response.name),
    format!("{}: {}", response.code, response.status),
    format!("{FENCE}{}\n{}\n{FENCE}", response.preview_language, response.body),
  ]
}
