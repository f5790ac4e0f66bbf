use std::{
  collections::HashSet,
  path::{Path, PathBuf},
};

use crate::generator::{
  environment::EnvironmentMap,
  markdown,
  metrics::{GenerationStats, GenerationWarning},
  model::{Folder, Info, Item, Request},
  naming::{OVERVIEW_FILE, README_FILE, request_file_name, slugify},
  template,
  writer::OutputPlan,
};

/// Walks the collection tree and records the documents it renders.
///
/// Entries land in the plan in traversal order: a folder's directory and
/// overview come before anything inside it.
pub(crate) struct TreeWalker<'a> {
  environment: &'a EnvironmentMap,
  plan: OutputPlan,
  stats: GenerationStats,
  written: HashSet<PathBuf>,
}

impl<'a> TreeWalker<'a> {
  pub(crate) fn new(environment: &'a EnvironmentMap) -> Self {
    Self {
      environment,
      plan: OutputPlan::default(),
      stats: GenerationStats::default(),
      written: HashSet::new(),
    }
  }

  pub(crate) fn render_root(&mut self, info: &Info, root: &Path) {
    self.plan.create_dir(root.to_path_buf());
    let text = markdown::overview(&info.name, info.description.as_deref());
    self.emit(root.join(README_FILE), &text);
  }

  pub(crate) fn walk_items(&mut self, items: &[Item], dir: &Path) {
    for item in items {
      match item {
        Item::Folder(folder) => self.render_folder(folder, dir),
        Item::Request(request) => self.render_request(request, dir),
      }
    }
  }

  fn render_folder(&mut self, folder: &Folder, parent: &Path) {
    let dir = parent.join(slugify(&folder.name));
    self.plan.create_dir(dir.clone());

    let text = markdown::overview(&folder.name, folder.description.as_deref());
    self.emit(dir.join(OVERVIEW_FILE), &text);
    self.stats.record_folder();

    self.walk_items(&folder.items, &dir);
  }

  fn render_request(&mut self, request: &Request, dir: &Path) {
    if let Some(body) = request.body.as_ref().filter(|body| !body.is_raw()) {
      self.stats.record_warning(GenerationWarning::UnsupportedBodyMode {
        request: request.name.clone(),
        mode: body.mode.clone(),
      });
    }

    let text = markdown::request_document(request);
    self.emit(dir.join(request_file_name(&request.name)), &text);
    self.stats.record_request(request.responses.len());
  }

  fn emit(&mut self, path: PathBuf, text: &str) {
    if !self.written.insert(path.clone()) {
      self.stats.record_warning(GenerationWarning::DuplicateOutputPath {
        path: path.display().to_string(),
      });
    }

    self
      .stats
      .record_unresolved(template::unresolved_tokens(text, self.environment));
    let contents = template::substitute(text, self.environment).into_owned();
    self.plan.write_document(path, contents);
  }

  pub(crate) fn finish(self) -> (OutputPlan, GenerationStats) {
    (self.plan, self.stats)
  }
}
