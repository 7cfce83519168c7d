pub mod config;
pub mod core;
pub mod domain;
pub mod parser;
pub mod render;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;
pub use config::cli::LocalStorage;
pub use core::decorate::{decorate, decorate_block};
pub use core::{engine::RenderEngine, pipeline::BlockPipeline};
pub use render::{builtin_registry, ElementRegistry};
pub use utils::error::{RenderError, Result};
