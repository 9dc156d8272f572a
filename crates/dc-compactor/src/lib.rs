//! deep-compact: recursive removal of falsy scalar leaves from nested
//! sequences and mappings.
//!
//! Entry points:
//! 1. [`compact()`]: pure core over owned trees
//! 2. [`Compactor`]: same result plus depth limit and statistics
//! 3. [`compact_shared`]: reference-counted graphs, with cycle detection
//! 4. [`json`]: JSON documents and JSONL streams

pub mod compact;
pub mod json;
pub mod pipeline;
pub mod shared;
mod walk;

pub use compact::{compact, compact_mapping, compact_sequence};
pub use pipeline::{CompactionResult, CompactionStats, Compactor};
pub use shared::compact_shared;
