use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use super::colors::{ColorMode, Colors, ThemeMode};

pub const DEFAULT_OUTPUT_DIR: &str = "docs";

#[derive(Parser, Debug)]
#[command(name = "collection-md")]
#[command(author, version, about = "API collection to Markdown documentation generator")]
#[command(args_conflicts_with_subcommands = true, subcommand_negates_reqs = true)]
#[command(styles = Colors::clap_styles())]
pub struct Cli {
  #[command(subcommand)]
  pub command: Option<Commands>,

  #[command(flatten)]
  pub generate: GenerateCommand,

  /// Control color output
  #[arg(long, value_enum, default_value = "auto", global = true)]
  pub color: ColorMode,

  /// Terminal theme (dark or light background)
  #[arg(long, value_enum, default_value = "auto", global = true)]
  pub theme: ThemeMode,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
  /// List every request in a collection
  List {
    /// Path to the collection JSON file
    #[arg(value_name = "COLLECTION")]
    collection: PathBuf,
  },
}

/// Arguments for the default action: rendering a collection to Markdown.
#[derive(Args, Debug, Clone, Default)]
pub struct GenerateCommand {
  /// Path to the collection JSON file
  #[arg(value_name = "COLLECTION", required = true)]
  pub collection: Option<PathBuf>,

  /// Path to an environment JSON file whose values replace `{{key}}` placeholders
  #[arg(value_name = "ENVIRONMENT")]
  pub environment: Option<PathBuf>,

  /// Directory the collection's documentation folder is created in
  #[arg(short, long, value_name = "DIR", default_value = DEFAULT_OUTPUT_DIR)]
  pub output: PathBuf,

  /// Print every written file and unresolved placeholder
  #[arg(short, long, default_value_t = false, conflicts_with = "quiet")]
  pub verbose: bool,

  /// Suppress non-essential output (errors only)
  #[arg(short, long, default_value_t = false)]
  pub quiet: bool,
}
