//! Core types for deep-compact: the tree model, truthiness, errors, config.

pub mod config;
pub mod error;
pub mod node;
pub mod shared;
pub mod truthy;

pub use config::CompactConfig;
pub use error::{CompactError, Result};
pub use node::{Mapping, Node, Scalar};
pub use shared::SharedNode;
pub use truthy::{is_falsy, is_truthy};
