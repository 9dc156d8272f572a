//! Compaction of [`SharedNode`] graphs with cycle detection.
//!
//! A container that is its own ancestor is reported as a cycle. A container
//! reachable along two different paths is compacted once per occurrence.

use crate::compact::{keep, Visit};
use crate::pipeline::Compactor;
use crate::walk::{Segment, Walker};
use dc_core::shared::{container_id, SharedMapping, SharedSequence};
use dc_core::{CompactError, Mapping, Node, Result, SharedNode};

/// Compact a shared graph into an owned tree using the default [`Compactor`].
pub fn compact_shared(node: &SharedNode) -> Result<Node> {
    Compactor::default().compact_shared(node).map(|r| r.output)
}

impl Walker {
    pub(crate) fn shared_root(&mut self, node: &SharedNode) -> Result<Node> {
        match node {
            SharedNode::Sequence(rc) => self.shared_sequence(rc, 0).map(Node::Sequence),
            SharedNode::Mapping(rc) => self.shared_mapping(rc, 0).map(Node::Mapping),
            SharedNode::Scalar(s) => Err(CompactError::ScalarRoot { kind: s.kind() }),
        }
    }

    /// Mark container `id` as on the current path, failing if it already is.
    fn enter_shared(&mut self, id: usize, depth: usize) -> Result<()> {
        if !self.on_path.insert(id) {
            let path = self.path.to_string();
            tracing::warn!(%path, "cycle detected in shared graph");
            return Err(CompactError::Cycle { path });
        }
        self.enter(depth)
    }

    fn shared_sequence(&mut self, rc: &SharedSequence, depth: usize) -> Result<Vec<Node>> {
        let id = container_id(rc);
        self.enter_shared(id, depth)?;
        let items = rc
            .try_borrow()
            .map_err(|_| CompactError::Borrowed { path: self.path.to_string() })?;
        let mut out = Vec::with_capacity(items.len());
        for (i, item) in items.iter().enumerate() {
            if let Some(child) = self.shared_child(item, || Segment::Index(i), depth + 1)? {
                out.push(child);
            }
        }
        self.on_path.remove(&id);
        Ok(out)
    }

    fn shared_mapping(&mut self, rc: &SharedMapping, depth: usize) -> Result<Mapping> {
        let id = container_id(rc);
        self.enter_shared(id, depth)?;
        let map = rc
            .try_borrow()
            .map_err(|_| CompactError::Borrowed { path: self.path.to_string() })?;
        let mut out = Mapping::with_capacity(map.len());
        for (key, value) in map.iter() {
            if let Some(child) = self.shared_child(value, || Segment::Key(key.clone()), depth + 1)? {
                out.insert(key.clone(), child);
            }
        }
        self.on_path.remove(&id);
        Ok(out)
    }

    fn shared_child(
        &mut self,
        node: &SharedNode,
        segment: impl FnOnce() -> Segment,
        depth: usize,
    ) -> Result<Option<Node>> {
        let child = match node {
            SharedNode::Scalar(s) => return Ok(keep(self, s).then(|| Node::Scalar(s.clone()))),
            SharedNode::Sequence(rc) => {
                self.step_in(segment);
                Node::Sequence(self.shared_sequence(rc, depth)?)
            }
            SharedNode::Mapping(rc) => {
                self.step_in(segment);
                Node::Mapping(self.shared_mapping(rc, depth)?)
            }
        };
        self.step_out();
        Ok(Some(child))
    }
}
