//! Typed view of an API request collection.
//!
//! The wire format is forgiving: most fields may be missing or `null`, URLs and
//! descriptions come in more than one shape, and folders are told apart from
//! requests by the presence of a nested `item` list. Everything is normalized
//! while deserializing so the renderers only deal with plain values.

use serde::{Deserialize, Deserializer};

const DEFAULT_METHOD: &str = "GET";

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Collection {
  pub info: Info,
  #[serde(default)]
  pub item: Vec<Item>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Info {
  #[serde(default, deserialize_with = "null_as_empty")]
  pub name: String,
  #[serde(default, deserialize_with = "optional_description")]
  pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "RawItem")]
pub enum Item {
  Folder(Folder),
  Request(Request),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Folder {
  pub name: String,
  pub description: Option<String>,
  pub items: Vec<Item>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
  pub name: String,
  pub method: String,
  pub url: Url,
  pub headers: Vec<Header>,
  pub body: Option<Body>,
  pub description: Option<String>,
  pub responses: Vec<Response>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Url {
  #[serde(default, deserialize_with = "null_as_empty")]
  pub raw: String,
  #[serde(default, deserialize_with = "null_as_default")]
  pub query: Vec<QueryParam>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct QueryParam {
  #[serde(default, deserialize_with = "null_as_empty")]
  pub key: String,
  #[serde(default, deserialize_with = "null_as_empty")]
  pub value: String,
  #[serde(default, deserialize_with = "description_text")]
  pub description: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Header {
  #[serde(default, deserialize_with = "null_as_empty")]
  pub key: String,
  #[serde(default, deserialize_with = "null_as_empty")]
  pub value: String,
  #[serde(default, deserialize_with = "description_text")]
  pub description: String,
  #[serde(default, rename = "type", deserialize_with = "null_as_empty")]
  pub kind: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Body {
  #[serde(default, deserialize_with = "null_as_empty")]
  pub mode: String,
  #[serde(default, deserialize_with = "null_as_empty")]
  pub raw: String,
}

impl Body {
  pub const RAW_MODE: &'static str = "raw";

  #[must_use]
  pub fn is_raw(&self) -> bool {
    self.mode == Self::RAW_MODE
  }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Response {
  #[serde(default, deserialize_with = "null_as_empty")]
  pub name: String,
  #[serde(default, deserialize_with = "scalar_text")]
  pub code: String,
  #[serde(default, deserialize_with = "null_as_empty")]
  pub status: String,
  #[serde(
    default,
    rename = "_postman_previewlanguage",
    alias = "previewLanguage",
    deserialize_with = "null_as_empty"
  )]
  pub preview_language: String,
  #[serde(default, deserialize_with = "null_as_empty")]
  pub body: String,
}

/// A request together with the names of the folders that contain it.
#[derive(Debug, Clone, Copy)]
pub struct RequestEntry<'a> {
  pub folders: &'a [&'a str],
  pub request: &'a Request,
}

impl Collection {
  /// Visits every request in document order, passing along its folder path.
  pub fn for_each_request<F>(&self, mut visit: F)
  where
    F: FnMut(RequestEntry<'_>),
  {
    fn walk<'a, F>(items: &'a [Item], folders: &mut Vec<&'a str>, visit: &mut F)
    where
      F: FnMut(RequestEntry<'_>),
    {
      for item in items {
        match item {
          Item::Folder(folder) => {
            folders.push(&folder.name);
            walk(&folder.items, folders, visit);
            folders.pop();
          }
          Item::Request(request) => visit(RequestEntry {
            folders: folders.as_slice(),
            request,
          }),
        }
      }
    }

    let mut folders = Vec::new();
    walk(&self.item, &mut folders, &mut visit);
  }
}

#[derive(Deserialize)]
struct RawItem {
  #[serde(default, deserialize_with = "null_as_empty")]
  name: String,
  #[serde(default, deserialize_with = "optional_description")]
  description: Option<String>,
  #[serde(default)]
  item: Option<Vec<Item>>,
  #[serde(default, rename = "_postman_isSubFolder", deserialize_with = "null_as_default")]
  is_sub_folder: bool,
  #[serde(default)]
  request: Option<RawRequest>,
  #[serde(default, deserialize_with = "null_as_default")]
  response: Vec<Response>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawRequest {
  Url(String),
  Definition(Box<RequestDefinition>),
}

#[derive(Default, Deserialize)]
struct RequestDefinition {
  #[serde(default)]
  method: Option<String>,
  #[serde(default)]
  url: Option<RawUrl>,
  #[serde(default, deserialize_with = "null_as_default")]
  header: Vec<Header>,
  #[serde(default)]
  body: Option<Body>,
  #[serde(default, deserialize_with = "optional_description")]
  description: Option<String>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawUrl {
  Raw(String),
  Structured(Url),
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawDescription {
  Text(String),
  Content {
    #[serde(default)]
    content: Option<String>,
  },
}

impl From<RawItem> for Item {
  fn from(raw: RawItem) -> Self {
    let RawItem {
      name,
      description,
      item,
      is_sub_folder,
      request,
      response,
    } = raw;

    if is_sub_folder || item.is_some() {
      return Self::Folder(Folder {
        name,
        description,
        items: item.unwrap_or_default(),
      });
    }

    let definition = match request {
      Some(RawRequest::Definition(definition)) => *definition,
      Some(RawRequest::Url(raw)) => RequestDefinition {
        url: Some(RawUrl::Raw(raw)),
        ..RequestDefinition::default()
      },
      None => RequestDefinition::default(),
    };

    let url = match definition.url {
      Some(RawUrl::Raw(raw)) => Url { raw, query: Vec::new() },
      Some(RawUrl::Structured(url)) => url,
      None => Url::default(),
    };

    Self::Request(Request {
      name,
      method: definition
        .method
        .filter(|method| !method.is_empty())
        .unwrap_or_else(|| DEFAULT_METHOD.to_string()),
      url,
      headers: definition.header,
      body: definition.body,
      description: definition.description,
      responses: response,
    })
  }
}

impl RawDescription {
  fn into_text(self) -> String {
    match self {
      Self::Text(text) => text,
      Self::Content { content } => content.unwrap_or_default(),
    }
  }
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
  D: Deserializer<'de>,
{
  Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
  D: Deserializer<'de>,
  T: Default + Deserialize<'de>,
{
  Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Status codes are normally integers, but any scalar is printed as written.
fn scalar_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
  D: Deserializer<'de>,
{
  Ok(match serde_json::Value::deserialize(deserializer)? {
    serde_json::Value::Null => String::new(),
    serde_json::Value::String(text) => text,
    other => other.to_string(),
  })
}

fn description_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
  D: Deserializer<'de>,
{
  Ok(
    Option::<RawDescription>::deserialize(deserializer)?
      .map(RawDescription::into_text)
      .unwrap_or_default(),
  )
}

/// Empty descriptions count as absent.
fn optional_description<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
  D: Deserializer<'de>,
{
  Ok(
    Option::<RawDescription>::deserialize(deserializer)?
      .map(RawDescription::into_text)
      .filter(|text| !text.is_empty()),
  )
}
