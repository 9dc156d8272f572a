use serde::{Deserialize, Serialize};

/// Compaction limits.
///
/// The falsy predicate is not configurable.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CompactConfig {
    /// Deepest container nesting allowed, root at depth 0. `None` is unbounded.
    pub max_depth: Option<usize>,
}

impl CompactConfig {
    pub fn with_max_depth(mut self, limit: usize) -> Self {
        self.max_depth = Some(limit);
        self
    }
}
