use std::path::Path;

use comfy_table::{Attribute, Cell, CellAlignment, ContentArrangement, Row, Table};
use itertools::Itertools;

use crate::{
  generator::model::{Collection, RequestEntry},
  ui::{Colors, colors::table_color, term_width},
  utils::load_collection,
};

const ROOT_FOLDER: &str = "/";

fn folder_path(entry: &RequestEntry<'_>) -> String {
  if entry.folders.is_empty() {
    ROOT_FOLDER.to_string()
  } else {
    entry.folders.iter().join(" / ")
  }
}

fn request_rows(collection: &Collection) -> Vec<[String; 4]> {
  let mut rows = Vec::new();
  collection.for_each_request(|entry| {
    rows.push([
      folder_path(&entry),
      entry.request.method.clone(),
      entry.request.name.clone(),
      entry.request.url.raw.clone(),
    ]);
  });
  rows
}

pub async fn list_requests(input: &Path, colors: &Colors) -> anyhow::Result<()> {
  let collection = load_collection(input).await?;

  let mut table = Table::new();
  table
    .load_preset("  ── ──            ")
    .set_content_arrangement(ContentArrangement::Dynamic)
    .set_width(term_width());

  let mut row = Row::new();
  for title in ["FOLDER", "METHOD", "NAME", "URL"] {
    row.add_cell(Cell::new(title).fg(table_color(colors.label())));
  }
  table.set_header(row);

  for [folder, method, name, url] in request_rows(&collection) {
    let mut row = Row::new();
    row.add_cell(Cell::new(folder).fg(table_color(colors.info())));
    row.add_cell(
      Cell::new(method)
        .fg(table_color(colors.accent()))
        .set_alignment(CellAlignment::Right),
    );
    row.add_cell(
      Cell::new(name)
        .fg(table_color(colors.value()))
        .add_attribute(Attribute::Bold),
    );
    row.add_cell(Cell::new(url).fg(table_color(colors.primary())));
    table.add_row(row);
  }

  println!("{table}");

  Ok(())
}
