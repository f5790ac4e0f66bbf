//! Ordered filesystem effects and the writer that applies them.

use std::path::{Path, PathBuf};

use anyhow::Context;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputEntry {
  CreateDir(PathBuf),
  WriteDocument { path: PathBuf, contents: String },
}

/// Directory creations and document writes in the order they must happen.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OutputPlan {
  entries: Vec<OutputEntry>,
}

impl OutputPlan {
  pub fn create_dir(&mut self, path: PathBuf) {
    self.entries.push(OutputEntry::CreateDir(path));
  }

  pub fn write_document(&mut self, path: PathBuf, contents: String) {
    self.entries.push(OutputEntry::WriteDocument { path, contents });
  }

  #[must_use]
  pub fn entries(&self) -> &[OutputEntry] {
    &self.entries
  }

  pub fn documents(&self) -> impl Iterator<Item = (&Path, &str)> {
    self.entries.iter().filter_map(|entry| match entry {
      OutputEntry::WriteDocument { path, contents } => Some((path.as_path(), contents.as_str())),
      OutputEntry::CreateDir(_) => None,
    })
  }
}

/// Applies an [`OutputPlan`] to disk, one entry at a time.
///
/// The first failure aborts the run. Anything written before it stays on disk.
pub struct OutputWriter<F> {
  on_write: F,
}

impl<F> OutputWriter<F>
where
  F: FnMut(&Path),
{
  pub fn new(on_write: F) -> Self {
    Self { on_write }
  }

  pub async fn apply(&mut self, plan: &OutputPlan) -> anyhow::Result<usize> {
    let mut written = 0;
    for entry in plan.entries() {
      match entry {
        OutputEntry::CreateDir(path) => ensure_dir(path).await?,
        OutputEntry::WriteDocument { path, contents } => {
          write_document(path, contents).await?;
          (self.on_write)(path);
          written += 1;
        }
      }
    }
    Ok(written)
  }
}

/// Creates `path` and any missing parents; an existing directory is fine.
pub async fn ensure_dir(path: &Path) -> anyhow::Result<()> {
  tokio::fs::create_dir_all(path)
    .await
    .with_context(|| format!("Failed to create directory {}", path.display()))
}

pub async fn write_document(path: &Path, contents: &str) -> anyhow::Result<()> {
  tokio::fs::write(path, contents)
    .await
    .with_context(|| format!("Failed to write {}", path.display()))
}
