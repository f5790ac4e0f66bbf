#![allow(clippy::doc_markdown)]
#![allow(clippy::missing_errors_doc)]
use clap::Parser;

use crate::ui::{Cli, Colors, Commands, colors};

mod generator;
mod ui;
mod utils;

#[cfg(test)]
mod tests;

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
  let cli = Cli::parse();
  let colors = Colors::new(colors::colors_enabled(cli.color), colors::detect_theme(cli.theme));

  match cli.command {
    Some(Commands::List { collection }) => ui::commands::list_requests(&collection, &colors).await?,
    None => {
      let config = ui::commands::GenerateConfig::from_command(cli.generate)?;
      ui::commands::generate_docs(config, &colors).await?;
    }
  }

  Ok(())
}
