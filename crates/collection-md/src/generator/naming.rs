//! File and directory names derived from collection entries.

pub(crate) const MARKDOWN_EXTENSION: &str = "md";
pub(crate) const OVERVIEW_FILE: &str = "overview.md";
pub(crate) const README_FILE: &str = "README.md";

const UNNAMED: &str = "unnamed";

fn is_path_separator(c: char) -> bool {
  c == '/' || c == '\\'
}

/// Filesystem-safe name for a folder directory or request document.
///
/// Lowercases the name and turns every whitespace character and path separator
/// into `-`. Names that would be empty or resolve to `.`/`..` become `unnamed`.
#[must_use]
pub fn slugify(name: &str) -> String {
  let slug: String = name
    .to_lowercase()
    .chars()
    .map(|c| {
      if c.is_whitespace() || is_path_separator(c) {
        '-'
      } else {
        c
      }
    })
    .collect();

  if slug.chars().all(|c| c == '.') {
    UNNAMED.to_string()
  } else {
    slug
  }
}

/// Directory name for the collection root.
///
/// Case and spacing are preserved; only path separators are replaced.
#[must_use]
pub fn collection_dir_name(name: &str) -> String {
  let dir: String = name
    .chars()
    .map(|c| if is_path_separator(c) { '-' } else { c })
    .collect();

  if dir.trim().chars().all(|c| c == '.') {
    UNNAMED.to_string()
  } else {
    dir
  }
}

#[must_use]
pub fn request_file_name(name: &str) -> String {
  format!("{}.{MARKDOWN_EXTENSION}", slugify(name))
}
