//! Configured compactor with statistics.

use crate::compact::walk_root;
use crate::walk::Walker;
use dc_core::{CompactConfig, Node, Result, SharedNode};
use serde::Serialize;

/// Counters collected during one compaction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct CompactionStats {
    /// Containers visited, root included.
    pub containers: usize,
    pub scalars_kept: usize,
    pub scalars_dropped: usize,
    /// Deepest container level reached, root at 0.
    pub max_depth: usize,
}

impl CompactionStats {
    pub fn scalars(&self) -> usize {
        self.scalars_kept + self.scalars_dropped
    }

    /// Fraction of scalars removed, `0.0` when there were none.
    pub fn drop_ratio(&self) -> f64 {
        if self.scalars() == 0 { return 0.0; }
        self.scalars_dropped as f64 / self.scalars() as f64
    }
}

/// Compaction result with statistics.
#[derive(Debug, Clone)]
pub struct CompactionResult {
    pub output: Node,
    pub stats: CompactionStats,
}

/// Compactor with a depth limit and per-call statistics.
///
/// Produces exactly what [`compact`](crate::compact) produces for the same
/// input, unless the configured limit is exceeded.
#[derive(Debug, Clone, Default)]
pub struct Compactor {
    pub config: CompactConfig,
}

impl Compactor {
    pub fn new(config: CompactConfig) -> Self {
        Self { config }
    }

    pub fn with_max_depth(limit: usize) -> Self {
        Self::new(CompactConfig::default().with_max_depth(limit))
    }

    pub fn compact(&self, node: &Node) -> Result<CompactionResult> {
        let mut walker = Walker::new(self.config.max_depth);
        let output = walk_root(&mut walker, node)?;
        Ok(self.finish(output, walker.stats))
    }

    /// Compact a shared graph, failing on the first cycle found.
    pub fn compact_shared(&self, node: &SharedNode) -> Result<CompactionResult> {
        let mut walker = Walker::new(self.config.max_depth);
        let output = walker.shared_root(node)?;
        Ok(self.finish(output, walker.stats))
    }

    fn finish(&self, output: Node, stats: CompactionStats) -> CompactionResult {
        tracing::debug!(
            containers = stats.containers,
            kept = stats.scalars_kept,
            dropped = stats.scalars_dropped,
            max_depth = stats.max_depth,
            "compaction finished"
        );
        CompactionResult { output, stats }
    }
}
