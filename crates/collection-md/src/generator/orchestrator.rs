//! Orchestration for the collection to Markdown pipeline.
//!
//! The orchestrator owns a loaded collection and its environment map and turns
//! them into an [`OutputPlan`]: every directory to create and every document to
//! write, in order. Nothing touches the filesystem until the plan is handed to
//! an [`OutputWriter`](crate::generator::writer::OutputWriter).
//!
//! ## Usage
//!
//! ```ignore
//! let orchestrator = Orchestrator::new(collection, environment);
//! let docs = orchestrator.generate(Path::new("docs"));
//!
//! println!("Rendered {} requests", docs.stats.requests_rendered);
//! OutputWriter::new(|_| {}).apply(&docs.plan).await?;
//! ```

use std::path::{Path, PathBuf};

use crate::generator::{
  environment::EnvironmentMap,
  metrics::GenerationStats,
  model::Collection,
  naming::collection_dir_name,
  walker::TreeWalker,
  writer::OutputPlan,
};

pub struct Orchestrator {
  collection: Collection,
  environment: EnvironmentMap,
}

/// Collection-level details shown while generating.
#[derive(Debug, Clone)]
pub struct CollectionMetadata {
  pub name: String,
  pub description: Option<String>,
  pub variables: usize,
}

/// Everything produced by one generation run.
#[derive(Debug, Clone)]
pub struct GeneratedDocs {
  /// Directory holding the collection's `README.md`
  pub root: PathBuf,
  pub plan: OutputPlan,
  pub stats: GenerationStats,
}

impl Orchestrator {
  #[must_use]
  pub fn new(collection: Collection, environment: EnvironmentMap) -> Self {
    Self {
      collection,
      environment,
    }
  }

  #[must_use]
  pub fn metadata(&self) -> CollectionMetadata {
    CollectionMetadata {
      name: self.collection.info.name.clone(),
      description: self.collection.info.description.clone(),
      variables: self.environment.len(),
    }
  }

  /// Directory the collection is rendered into below `output_root`.
  #[must_use]
  pub fn collection_dir(&self, output_root: &Path) -> PathBuf {
    output_root.join(collection_dir_name(&self.collection.info.name))
  }

  /// Renders the whole collection below `output_root`.
  ///
  /// The root gets a `README.md`, then every item is walked in document order.
  #[must_use]
  pub fn generate(&self, output_root: &Path) -> GeneratedDocs {
    let root = self.collection_dir(output_root);

    let mut walker = TreeWalker::new(&self.environment);
    walker.render_root(&self.collection.info, &root);
    walker.walk_items(&self.collection.item, &root);
    let (plan, stats) = walker.finish();

    GeneratedDocs { root, plan, stats }
  }
}
