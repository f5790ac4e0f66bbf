pub mod environment;
pub mod markdown;
pub mod metrics;
pub mod model;
pub mod naming;
pub mod orchestrator;
pub mod template;
pub(crate) mod walker;
pub mod writer;

#[cfg(test)]
mod tests;
