pub mod decorate;
pub mod engine;
pub mod pipeline;

pub use crate::domain::model::{Card, GridLayout, LayoutResult, Link};
pub use crate::domain::ports::{ConfigProvider, Pipeline, Storage};
pub use crate::utils::error::Result;
