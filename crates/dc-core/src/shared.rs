//! Reference-counted trees whose containers can alias each other.
//!
//! Unlike [`Node`], a `SharedNode` graph may contain the same container
//! more than once, or contain itself. Compaction of shared graphs has to
//! detect the latter.

use crate::node::{Node, Scalar};
use indexmap::IndexMap;
use std::cell::RefCell;
use std::rc::Rc;

pub type SharedSequence = Rc<RefCell<Vec<SharedNode>>>;
pub type SharedMapping = Rc<RefCell<IndexMap<String, SharedNode>>>;

#[derive(Debug, Clone)]
pub enum SharedNode {
    Scalar(Scalar),
    Sequence(SharedSequence),
    Mapping(SharedMapping),
}

impl SharedNode {
    pub fn scalar(s: Scalar) -> Self {
        Self::Scalar(s)
    }

    pub fn sequence(items: impl IntoIterator<Item = SharedNode>) -> Self {
        Self::Sequence(Rc::new(RefCell::new(items.into_iter().collect())))
    }

    pub fn mapping<K: Into<String>>(entries: impl IntoIterator<Item = (K, SharedNode)>) -> Self {
        Self::Mapping(Rc::new(RefCell::new(
            entries.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        )))
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Self::Scalar(s) => s.kind(),
            Self::Sequence(_) => "sequence",
            Self::Mapping(_) => "mapping",
        }
    }

    /// Address of the underlying container, `None` for scalars.
    ///
    /// Two handles with the same identity point at the same container.
    pub fn identity(&self) -> Option<usize> {
        match self {
            Self::Scalar(_) => None,
            Self::Sequence(rc) => Some(container_id(rc)),
            Self::Mapping(rc) => Some(container_id(rc)),
        }
    }

    /// Append to a sequence. Returns `false` if `self` is not a sequence.
    pub fn push(&self, item: SharedNode) -> bool {
        match self {
            Self::Sequence(rc) => {
                rc.borrow_mut().push(item);
                true
            }
            _ => false,
        }
    }

    /// Set a mapping entry. Returns `false` if `self` is not a mapping.
    pub fn insert(&self, key: impl Into<String>, value: SharedNode) -> bool {
        match self {
            Self::Mapping(rc) => {
                rc.borrow_mut().insert(key.into(), value);
                true
            }
            _ => false,
        }
    }
}

/// Address of a shared container, stable for as long as any handle lives.
pub fn container_id<T>(rc: &Rc<T>) -> usize {
    Rc::as_ptr(rc) as *const () as usize
}

impl From<Scalar> for SharedNode {
    fn from(s: Scalar) -> Self {
        Self::Scalar(s)
    }
}

/// Deep copy; every container in the result is freshly allocated.
impl From<&Node> for SharedNode {
    fn from(node: &Node) -> Self {
        match node {
            Node::Scalar(s) => Self::Scalar(s.clone()),
            Node::Sequence(items) => Self::sequence(items.iter().map(SharedNode::from)),
            Node::Mapping(map) => {
                Self::mapping(map.iter().map(|(k, v)| (k.clone(), SharedNode::from(v))))
            }
        }
    }
}
