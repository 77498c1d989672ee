#![allow(clippy::must_use_candidate)]

mod env;
mod loader;
pub mod render;

use serde::Deserialize;

pub use env::ExpandError;
pub use render::*;

/// Top-level configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Response rendering configuration
    #[serde(default)]
    pub render: RenderConfig,
}
