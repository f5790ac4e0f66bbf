use std::path::{Path, PathBuf};

use anyhow::Context;
use fmmap::tokio::{AsyncMmapFile, AsyncMmapFileExt};
use serde::de::DeserializeOwned;

use crate::generator::{
  environment::{Environment, EnvironmentMap},
  model::Collection,
};

/// A memory-mapped JSON document waiting to be decoded.
pub struct DocumentLoader {
  file: AsyncMmapFile,
  path: PathBuf,
}

impl DocumentLoader {
  pub async fn open(path: &Path) -> anyhow::Result<Self> {
    let file = AsyncMmapFile::open(path)
      .await
      .with_context(|| format!("Failed to open {}", path.display()))?;

    Ok(Self {
      file,
      path: path.to_path_buf(),
    })
  }

  pub fn parse<T: DeserializeOwned>(&self) -> anyhow::Result<T> {
    serde_json::from_slice(self.file.as_slice()).with_context(|| format!("Failed to parse {}", self.path.display()))
  }
}

pub async fn load_collection(path: &Path) -> anyhow::Result<Collection> {
  DocumentLoader::open(path).await?.parse()
}

/// Loads the environment at `path`, or an empty map when no path is given.
pub async fn load_environment(path: Option<&Path>) -> anyhow::Result<EnvironmentMap> {
  let Some(path) = path else {
    return Ok(EnvironmentMap::new());
  };

  let environment: Environment = DocumentLoader::open(path).await?.parse()?;
  Ok(environment.into())
}
