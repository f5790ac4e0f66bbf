use std::path::Path;

use crate::{
  generator::{orchestrator::Orchestrator, writer::OutputWriter},
  utils::{load_collection, load_environment},
};

async fn render(collection_json: &str, environment_json: Option<&str>, dir: &Path) -> anyhow::Result<usize> {
  let collection_path = dir.join("collection.json");
  std::fs::write(&collection_path, collection_json)?;

  let environment_path = match environment_json {
    Some(json) => {
      let path = dir.join("environment.json");
      std::fs::write(&path, json)?;
      Some(path)
    }
    None => None,
  };

  let collection = load_collection(&collection_path).await?;
  let environment = load_environment(environment_path.as_deref()).await?;
  let docs = Orchestrator::new(collection, environment).generate(&dir.join("docs"));
  OutputWriter::new(|_: &Path| {}).apply(&docs.plan).await
}

#[tokio::test]
async fn test_basic_collection_end_to_end() {
  let dir = tempfile::tempdir().unwrap();
  let written = render(include_str!("../../fixtures/basic_collection.json"), None, dir.path())
    .await
    .unwrap();
  assert_eq!(written, 2);

  let root = dir.path().join("docs/API");
  assert!(root.is_dir());
  assert_eq!(std::fs::read_to_string(root.join("README.md")).unwrap(), "# API\n\ndesc");

  let document = std::fs::read_to_string(root.join("get-thing.md")).unwrap();
  assert!(document.lines().any(|line| line == "```GET https://x/y```"));
}

#[tokio::test]
async fn test_nested_collection_with_environment() {
  let dir = tempfile::tempdir().unwrap();
  let written = render(
    include_str!("../../fixtures/nested_collection.json"),
    Some(include_str!("../../fixtures/environment.json")),
    dir.path(),
  )
  .await
  .unwrap();
  assert_eq!(written, 9);

  let root = dir.path().join("docs/Pet Store");
  for file in [
    "README.md",
    "health-check.md",
    "pets/overview.md",
    "pets/list-pets.md",
    "pets/create-pet.md",
    "pets/upload-photo.md",
    "pets/admin-tools/overview.md",
    "pets/admin-tools/reset-store.md",
    "empty-folder/overview.md",
  ] {
    assert!(root.join(file).is_file(), "missing {file}");
  }

  let health = std::fs::read_to_string(root.join("health-check.md")).unwrap();
  assert_eq!(health, "## Health Check\n\n```GET https://example.com/health```\n");

  let overview = std::fs::read_to_string(root.join("pets/overview.md")).unwrap();
  assert_eq!(overview, "# Pets\n\nEverything about pets.");
}

#[tokio::test]
async fn test_environment_substitution_end_to_end() {
  let dir = tempfile::tempdir().unwrap();
  let collection = r#"{
    "info": { "name": "Hosts" },
    "item": [{ "name": "Fetch", "request": { "method": "GET", "url": { "raw": "{{host}}/path" } } }]
  }"#;
  let environment = r#"{ "values": [{ "key": "host", "value": "example.com" }] }"#;
  render(collection, Some(environment), dir.path()).await.unwrap();

  let document = std::fs::read_to_string(dir.path().join("docs/Hosts/fetch.md")).unwrap();
  assert!(document.contains("example.com/path"));
}

#[tokio::test]
async fn test_unparseable_collection_writes_nothing() {
  let dir = tempfile::tempdir().unwrap();
  let result = render("not json", None, dir.path()).await;
  assert!(result.is_err());
  assert!(!dir.path().join("docs").exists());
}

#[tokio::test]
async fn test_broken_environment_is_fatal() {
  let dir = tempfile::tempdir().unwrap();
  let result = render(
    include_str!("../../fixtures/basic_collection.json"),
    Some("{ \"values\": 3 }"),
    dir.path(),
  )
  .await;
  assert!(result.is_err());
}
