use std::path::{Path, PathBuf};

use super::support::planned_document;
use crate::generator::writer::{OutputPlan, OutputWriter, ensure_dir};

fn sample_plan(root: &Path) -> OutputPlan {
  let mut plan = OutputPlan::default();
  plan.create_dir(root.join("api"));
  plan.write_document(root.join("api/README.md"), "# API\n\n".to_string());
  plan.create_dir(root.join("api/users"));
  plan.write_document(root.join("api/users/overview.md"), "# Users\n\n".to_string());
  plan.write_document(root.join("api/users/get-user.md"), "## Get User\n".to_string());
  plan
}

#[tokio::test]
async fn test_apply_writes_documents_in_order() {
  let dir = tempfile::tempdir().unwrap();
  let plan = sample_plan(dir.path());

  let mut written = Vec::new();
  let count = OutputWriter::new(|path: &Path| written.push(path.to_path_buf()))
    .apply(&plan)
    .await
    .unwrap();

  assert_eq!(count, 3);
  assert_eq!(
    written,
    [
      dir.path().join("api/README.md"),
      dir.path().join("api/users/overview.md"),
      dir.path().join("api/users/get-user.md"),
    ]
  );
  assert_eq!(
    std::fs::read_to_string(dir.path().join("api/users/get-user.md")).unwrap(),
    "## Get User\n"
  );
}

#[tokio::test]
async fn test_apply_twice_overwrites() {
  let dir = tempfile::tempdir().unwrap();
  let plan = sample_plan(dir.path());
  OutputWriter::new(|_: &Path| {}).apply(&plan).await.unwrap();

  let mut second = OutputPlan::default();
  second.create_dir(dir.path().join("api"));
  second.write_document(dir.path().join("api/README.md"), "# Renamed\n\n".to_string());
  OutputWriter::new(|_: &Path| {}).apply(&second).await.unwrap();

  assert_eq!(
    std::fs::read_to_string(dir.path().join("api/README.md")).unwrap(),
    "# Renamed\n\n"
  );
}

#[tokio::test]
async fn test_ensure_dir_accepts_existing_directory() {
  let dir = tempfile::tempdir().unwrap();
  let nested = dir.path().join("a/b/c");
  ensure_dir(&nested).await.unwrap();
  ensure_dir(&nested).await.unwrap();
  assert!(nested.is_dir());
}

#[tokio::test]
async fn test_failure_keeps_earlier_documents() {
  let dir = tempfile::tempdir().unwrap();
  let blocker = dir.path().join("blocker");
  std::fs::write(&blocker, "not a directory").unwrap();

  let mut plan = OutputPlan::default();
  plan.write_document(dir.path().join("first.md"), "first".to_string());
  plan.create_dir(blocker.join("child"));
  plan.write_document(blocker.join("child/second.md"), "second".to_string());

  let err = OutputWriter::new(|_: &Path| {}).apply(&plan).await.unwrap_err();
  assert!(err.to_string().contains("Failed to create directory"));
  assert!(dir.path().join("first.md").exists());
}

#[test]
fn test_plan_document_lookup() {
  let root = PathBuf::from("out");
  let mut plan = sample_plan(&root);
  plan.write_document(root.join("api/README.md"), "# Again\n\n".to_string());

  assert_eq!(plan.entries().len(), 6);
  assert_eq!(plan.documents().count(), 4);
  assert_eq!(planned_document(&plan, "out/api/README.md"), Some("# Again\n\n"));
  assert_eq!(planned_document(&plan, "missing.md"), None);
}
