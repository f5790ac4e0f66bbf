pub mod loader;

pub(crate) use loader::{load_collection, load_environment};
