use std::path::PathBuf;

use clap::Parser;

use crate::ui::{Cli, Commands, cli::DEFAULT_OUTPUT_DIR};

#[test]
fn test_positional_collection_and_environment() {
  let cli = Cli::try_parse_from(["collection-md", "api.json", "staging.json"]).unwrap();
  assert!(cli.command.is_none());
  assert_eq!(cli.generate.collection, Some(PathBuf::from("api.json")));
  assert_eq!(cli.generate.environment, Some(PathBuf::from("staging.json")));
  assert_eq!(cli.generate.output, PathBuf::from(DEFAULT_OUTPUT_DIR));
}

#[test]
fn test_environment_is_optional() {
  let cli = Cli::try_parse_from(["collection-md", "api.json", "-o", "site"]).unwrap();
  assert_eq!(cli.generate.environment, None);
  assert_eq!(cli.generate.output, PathBuf::from("site"));
}

#[test]
fn test_collection_is_required() {
  assert!(Cli::try_parse_from(["collection-md"]).is_err());
}

#[test]
fn test_verbose_conflicts_with_quiet() {
  assert!(Cli::try_parse_from(["collection-md", "api.json", "-v", "-q"]).is_err());
}

#[test]
fn test_list_subcommand() {
  let cli = Cli::try_parse_from(["collection-md", "list", "api.json"]).unwrap();
  let Some(Commands::List { collection }) = cli.command else {
    panic!("expected list subcommand");
  };
  assert_eq!(collection, PathBuf::from("api.json"));
}
