use std::path::Path;

use crate::generator::{
  environment::{Environment, EnvironmentMap},
  model::{Collection, Item, Request},
  writer::OutputPlan,
};

/// Contents of the last document planned for `path`.
pub(super) fn planned_document<'a>(plan: &'a OutputPlan, path: &str) -> Option<&'a str> {
  plan
    .documents()
    .filter(|(candidate, _)| *candidate == Path::new(path))
    .last()
    .map(|(_, contents)| contents)
}

pub(super) fn parse_collection(json: &str) -> Collection {
  serde_json::from_str(json).expect("failed to parse test collection")
}

pub(super) fn nested_collection() -> Collection {
  parse_collection(include_str!("../../../fixtures/nested_collection.json"))
}

pub(super) fn basic_collection() -> Collection {
  parse_collection(include_str!("../../../fixtures/basic_collection.json"))
}

pub(super) fn staging_environment() -> EnvironmentMap {
  let environment: Environment =
    serde_json::from_str(include_str!("../../../fixtures/environment.json")).expect("failed to parse environment");
  environment.into()
}

pub(super) fn environment(pairs: &[(&str, &str)]) -> EnvironmentMap {
  let values = pairs
    .iter()
    .map(|(key, value)| serde_json::json!({ "key": key, "value": value }))
    .collect::<Vec<_>>();
  let environment: Environment =
    serde_json::from_value(serde_json::json!({ "values": values })).expect("failed to build environment");
  environment.into()
}

pub(super) fn parse_request(json: serde_json::Value) -> Request {
  match serde_json::from_value::<Item>(json).expect("failed to parse item") {
    Item::Request(request) => request,
    Item::Folder(folder) => panic!("expected a request, got folder {}", folder.name),
  }
}
