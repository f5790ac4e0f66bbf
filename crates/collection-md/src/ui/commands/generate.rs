use std::path::{Path, PathBuf};

use chrono::{Local, Timelike};
use crossterm::style::Stylize;

use crate::{
  generator::{
    metrics::GenerationStats,
    orchestrator::{CollectionMetadata, GeneratedDocs, Orchestrator},
    writer::OutputWriter,
  },
  ui::{Colors, GenerateCommand},
  utils::{load_collection, load_environment},
};

fn format_timestamp() -> String {
  let now = Local::now();
  format!("[{:02}:{:02}:{:02}]", now.hour(), now.minute(), now.second())
}

#[derive(Debug, Clone)]
pub struct GenerateConfig {
  pub collection: PathBuf,
  pub environment: Option<PathBuf>,
  pub output: PathBuf,
  pub verbose: bool,
  pub quiet: bool,
}

impl GenerateConfig {
  pub fn from_command(command: GenerateCommand) -> anyhow::Result<Self> {
    let GenerateCommand {
      collection,
      environment,
      output,
      verbose,
      quiet,
    } = command;

    let Some(collection) = collection else {
      anyhow::bail!("A collection file is required");
    };
    if output.as_os_str().is_empty() {
      anyhow::bail!("Output directory (-o) must not be empty");
    }

    Ok(Self {
      collection,
      environment,
      output,
      verbose,
      quiet,
    })
  }

  async fn create_orchestrator(&self) -> anyhow::Result<Orchestrator> {
    let collection = load_collection(&self.collection).await?;
    let environment = load_environment(self.environment.as_deref()).await?;
    Ok(Orchestrator::new(collection, environment))
  }
}

struct GenerateLogger<'a> {
  config: &'a GenerateConfig,
  colors: &'a Colors,
}

impl<'a> GenerateLogger<'a> {
  fn new(config: &'a GenerateConfig, colors: &'a Colors) -> Self {
    Self { config, colors }
  }

  fn info(&self, message: &str) {
    if !self.config.quiet {
      println!("{} {message}", format_timestamp().with(self.colors.timestamp()));
    }
  }

  fn stat(&self, label: &str, value: String) {
    if !self.config.quiet {
      println!(
        "            {:<25} {}",
        label.with(self.colors.label()),
        value.with(self.colors.value())
      );
    }
  }

  fn log_loading(&self) {
    self.info(
      &format!("Loading collection from: {}", self.config.collection.display())
        .with(self.colors.primary())
        .to_string(),
    );
    if let Some(environment) = &self.config.environment {
      self.info(
        &format!("Loading environment from: {}", environment.display())
          .with(self.colors.primary())
          .to_string(),
      );
    }
  }

  fn log_rendering(&self, metadata: &CollectionMetadata) {
    self.info(
      &format!("Rendering '{}'...", metadata.name)
        .with(self.colors.primary())
        .to_string(),
    );
    if self.config.verbose
      && let Some(description) = metadata.description.as_deref().and_then(|text| text.lines().next())
    {
      self.stat("Description:", description.to_string());
    }
    if metadata.variables > 0 {
      self.stat("Variables loaded:", metadata.variables.to_string());
    }
  }

  fn print_statistics(&self, docs: &GeneratedDocs) {
    if self.config.quiet {
      return;
    }

    let stats = &docs.stats;
    self.stat("Folders rendered:", stats.folders_rendered.to_string());
    self.stat("Requests rendered:", stats.requests_rendered.to_string());
    self.stat("", format!("{} example responses", stats.responses_rendered));
    self.stat("Documents:", docs.plan.documents().count().to_string());
    if !stats.warnings.is_empty() {
      self.stat("Warnings:", stats.warnings.len().to_string());
    }

    self.print_unresolved(stats);
    self.print_warnings(stats);
  }

  fn print_unresolved(&self, stats: &GenerationStats) {
    if stats.unresolved_placeholders.is_empty() || !self.config.verbose {
      return;
    }

    self.stat("Unresolved placeholders:", stats.unresolved_placeholders.len().to_string());
    for token in &stats.unresolved_placeholders {
      println!("              {}", token.as_str().with(self.colors.accent()));
    }
  }

  fn print_warnings(&self, stats: &GenerationStats) {
    if stats.warnings.is_empty() {
      return;
    }

    eprint!("{}", self.warning_report(stats));
  }

  /// Warning block for stderr, led by a blank spacer line.
  fn warning_report(&self, stats: &GenerationStats) -> String {
    let mut report = String::from("\n");
    for warning in &stats.warnings {
      let label = if warning.is_skipped_item() { "Skipped:" } else { "Warning:" };
      report.push_str(&format!(
        "{} {}\n",
        label.with(self.colors.accent()),
        format!("{warning}").with(self.colors.primary())
      ));
    }
    report
  }

  fn log_writing(&self, root: &Path) {
    self.info(
      &format!("Writing to: {}", root.display())
        .with(self.colors.primary())
        .to_string(),
    );
  }

  fn log_written(&self, path: &Path) {
    if self.config.verbose && !self.config.quiet {
      println!("            {}", path.display().to_string().with(self.colors.value()));
    }
  }

  fn log_success(&self, written: usize) {
    if !self.config.quiet {
      println!();
      println!(
        "{} {}",
        format_timestamp().with(self.colors.timestamp()),
        format!("Successfully wrote {written} documents").with(self.colors.success())
      );
    }
  }
}

pub async fn generate_docs(config: GenerateConfig, colors: &Colors) -> anyhow::Result<()> {
  let logger = GenerateLogger::new(&config, colors);

  logger.log_loading();
  let orchestrator = config.create_orchestrator().await?;

  logger.log_rendering(&orchestrator.metadata());
  let docs = orchestrator.generate(&config.output);
  logger.print_statistics(&docs);

  logger.log_writing(&docs.root);
  let written = OutputWriter::new(|path: &Path| logger.log_written(path))
    .apply(&docs.plan)
    .await?;

  logger.log_success(written);
  Ok(())
}
