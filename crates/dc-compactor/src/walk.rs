//! Instrumented visitor shared by [`Compactor`](crate::Compactor) entry points.
//!
//! Counts what it keeps and drops, enforces the depth limit, and remembers
//! where it is so errors can name the offending container.

use crate::compact::Visit;
use crate::pipeline::CompactionStats;
use dc_core::{CompactError, Result};
use std::collections::HashSet;
use std::fmt;

/// One step from a container to a child.
#[derive(Debug, Clone)]
pub(crate) enum Segment {
    Index(usize),
    Key(String),
}

/// Location of the current container, rendered JSONPath-style (`$.a[1]`).
#[derive(Debug, Default)]
pub(crate) struct Path(Vec<Segment>);

impl Path {
    pub(crate) fn push(&mut self, segment: Segment) {
        self.0.push(segment);
    }

    pub(crate) fn pop(&mut self) {
        self.0.pop();
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("$")?;
        for segment in &self.0 {
            match segment {
                Segment::Index(i) => write!(f, "[{i}]")?,
                Segment::Key(k) if is_plain_key(k) => write!(f, ".{k}")?,
                Segment::Key(k) => write!(f, "[{k:?}]")?,
            }
        }
        Ok(())
    }
}

fn is_plain_key(key: &str) -> bool {
    let mut chars = key.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {
            chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
        }
        _ => false,
    }
}

pub(crate) struct Walker {
    limit: Option<usize>,
    pub(crate) stats: CompactionStats,
    pub(crate) path: Path,
    /// Container identities on the current recursion path (shared graphs only).
    pub(crate) on_path: HashSet<usize>,
}

impl Walker {
    pub(crate) fn new(limit: Option<usize>) -> Self {
        Self {
            limit,
            stats: CompactionStats::default(),
            path: Path::default(),
            on_path: HashSet::new(),
        }
    }
}

impl Visit for Walker {
    type Error = CompactError;

    /// Account for a container at `depth`, failing if it is too deep.
    fn enter(&mut self, depth: usize) -> Result<()> {
        if let Some(limit) = self.limit {
            if depth > limit {
                return Err(CompactError::DepthExceeded { limit, path: self.path.to_string() });
            }
        }
        self.stats.containers += 1;
        self.stats.max_depth = self.stats.max_depth.max(depth);
        Ok(())
    }

    fn step_in(&mut self, segment: impl FnOnce() -> Segment) {
        self.path.push(segment());
    }

    fn step_out(&mut self) {
        self.path.pop();
    }

    fn scalar(&mut self, kept: bool) {
        if kept {
            self.stats.scalars_kept += 1;
        } else {
            self.stats.scalars_dropped += 1;
        }
    }
}
