//! Recursive removal of falsy scalar leaves.
//!
//! Containers always survive (possibly empty); scalars survive only when
//! truthy. Order of retained elements and keys is preserved and the input
//! is never modified.
//!
//! The recursion is written once, over a [`Visit`] implementation. The plain
//! entry points use a visitor that does nothing and cannot fail; the
//! instrumented [`Compactor`](crate::Compactor) plugs in its walker.

use crate::walk::Segment;
use dc_core::{is_truthy, CompactError, Mapping, Node, Result, Scalar};
use std::convert::Infallible;

/// Compact a root container.
///
/// The root must be a sequence or a mapping; a bare scalar is rejected
/// with [`CompactError::ScalarRoot`].
pub fn compact(node: &Node) -> Result<Node> {
    walk_root(&mut Plain, node)
}

pub fn compact_sequence(items: &[Node]) -> Vec<Node> {
    infallible(walk_sequence(&mut Plain, items, 0))
}

pub fn compact_mapping(map: &Mapping) -> Mapping {
    infallible(walk_mapping(&mut Plain, map, 0))
}

/// Hooks around the recursion. Every hook defaults to a no-op.
pub(crate) trait Visit {
    type Error;

    /// A container at `depth` is about to be compacted.
    fn enter(&mut self, _depth: usize) -> std::result::Result<(), Self::Error> {
        Ok(())
    }

    /// Moving into a child container. `segment` is only built on demand.
    fn step_in(&mut self, _segment: impl FnOnce() -> Segment) {}

    fn step_out(&mut self) {}

    /// A scalar was kept (`true`) or dropped.
    fn scalar(&mut self, _kept: bool) {}
}

struct Plain;

impl Visit for Plain {
    type Error = Infallible;
}

fn infallible<T>(result: std::result::Result<T, Infallible>) -> T {
    match result {
        Ok(value) => value,
        Err(never) => match never {},
    }
}

/// Truthiness test, reported to the visitor.
pub(crate) fn keep<V: Visit>(visit: &mut V, scalar: &Scalar) -> bool {
    let keep = is_truthy(scalar);
    visit.scalar(keep);
    keep
}

pub(crate) fn walk_root<V>(visit: &mut V, node: &Node) -> Result<Node>
where
    V: Visit,
    CompactError: From<V::Error>,
{
    match node {
        Node::Sequence(items) => Ok(Node::Sequence(walk_sequence(visit, items, 0)?)),
        Node::Mapping(map) => Ok(Node::Mapping(walk_mapping(visit, map, 0)?)),
        Node::Scalar(s) => Err(CompactError::ScalarRoot { kind: s.kind() }),
    }
}

fn walk_sequence<V: Visit>(
    visit: &mut V,
    items: &[Node],
    depth: usize,
) -> std::result::Result<Vec<Node>, V::Error> {
    visit.enter(depth)?;
    let mut out = Vec::with_capacity(items.len());
    for (i, item) in items.iter().enumerate() {
        if let Some(child) = walk_child(visit, item, || Segment::Index(i), depth + 1)? {
            out.push(child);
        }
    }
    Ok(out)
}

fn walk_mapping<V: Visit>(
    visit: &mut V,
    map: &Mapping,
    depth: usize,
) -> std::result::Result<Mapping, V::Error> {
    visit.enter(depth)?;
    let mut out = Mapping::with_capacity(map.len());
    for (key, value) in map {
        if let Some(child) = walk_child(visit, value, || Segment::Key(key.clone()), depth + 1)? {
            out.insert(key.clone(), child);
        }
    }
    Ok(out)
}

/// Scalars are kept or dropped on the spot; containers recurse and always
/// survive.
fn walk_child<V: Visit>(
    visit: &mut V,
    node: &Node,
    segment: impl FnOnce() -> Segment,
    depth: usize,
) -> std::result::Result<Option<Node>, V::Error> {
    let child = match node {
        Node::Scalar(s) => return Ok(keep(visit, s).then(|| node.clone())),
        Node::Sequence(items) => {
            visit.step_in(segment);
            Node::Sequence(walk_sequence(visit, items, depth)?)
        }
        Node::Mapping(map) => {
            visit.step_in(segment);
            Node::Mapping(walk_mapping(visit, map, depth)?)
        }
    };
    visit.step_out();
    Ok(Some(child))
}
