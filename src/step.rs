use std::fmt;

use crate::node::{Color, NodeId};

/// Shape of the grandparent, parent, node path that picked a rotation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Rotation {
    /// Right rotation at grandparent.
    LeftLeft,
    /// Left rotation at parent, then right rotation at grandparent.
    LeftRight,
    /// Left rotation at grandparent.
    RightRight,
    /// Right rotation at parent, then left rotation at grandparent.
    RightLeft,
}

impl fmt::Display for Rotation {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let s = match self {
            Rotation::LeftLeft => "LL",
            Rotation::LeftRight => "LR",
            Rotation::RightRight => "RR",
            Rotation::RightLeft => "RL",
        };
        write!(f, "{}", s)
    }
}

/// What kind of change a [`Step`] reports.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StepKind {
    /// New red node placed at its BST position.
    Insert,
    /// Key already present, nothing changed.
    Duplicate,
    /// Parent and uncle turned black, grandparent turned red.
    Recolor,
    /// One of the four insert rotation cases.
    Rotation(Rotation),
    /// Red root forced black.
    RootRecolor,
    /// Node unlinked from the tree.
    Delete,
    /// One case of the double-black fixup after delete.
    Rebalance,
}

/// Node as seen by a renderer.
#[derive(Clone, Debug, PartialEq)]
pub struct NodeView<K> {
    pub id: NodeId,
    pub key: K,
    pub color: Color,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Edge {
    pub parent: NodeId,
    pub child: NodeId,
    pub side: Side,
}

/// Full copy of the tree shape, nodes listed in pre-order.
#[derive(Clone, Debug, PartialEq)]
pub struct Snapshot<K> {
    pub root: Option<NodeId>,
    pub nodes: Vec<NodeView<K>>,
    pub edges: Vec<Edge>,
}

impl<K> Snapshot<K> {
    pub fn node(&self, id: NodeId) -> Option<&NodeView<K>> {
        self.nodes.iter().find(|view| view.id == id)
    }

    /// Return (left, right) children of `id`.
    pub fn children(&self, id: NodeId) -> (Option<NodeId>, Option<NodeId>) {
        let mut children = (None, None);
        for edge in self.edges.iter().filter(|edge| edge.parent == id) {
            match edge.side {
                Side::Left => children.0 = Some(edge.child),
                Side::Right => children.1 = Some(edge.child),
            }
        }
        children
    }

    /// Return keys in sort order.
    pub fn keys(&self) -> Vec<&K> {
        let mut keys = Vec::with_capacity(self.nodes.len());
        let mut stack: Vec<NodeId> = vec![];
        let mut cursor = self.root;
        loop {
            while let Some(id) = cursor {
                stack.push(id);
                cursor = self.children(id).0;
            }
            match stack.pop() {
                Some(id) => {
                    if let Some(view) = self.node(id) {
                        keys.push(&view.key);
                    }
                    cursor = self.children(id).1;
                }
                None => break keys,
            }
        }
    }
}

/// One committed change, as handed to an [`Observer`].
#[derive(Clone, Debug, PartialEq)]
pub struct Step<K> {
    kind: StepKind,
    highlight: Vec<NodeId>,
    description: String,
    snapshot: Snapshot<K>,
}

impl<K> Step<K> {
    pub(crate) fn new(
        kind: StepKind,
        highlight: Vec<NodeId>,
        description: String,
        snapshot: Snapshot<K>,
    ) -> Step<K> {
        Step {
            kind,
            highlight,
            description,
            snapshot,
        }
    }

    #[inline]
    pub fn kind(&self) -> StepKind {
        self.kind
    }

    /// Nodes involved in this step.
    #[inline]
    pub fn highlight(&self) -> &[NodeId] {
        &self.highlight
    }

    #[inline]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Tree state right after this step was applied.
    #[inline]
    pub fn snapshot(&self) -> &Snapshot<K> {
        &self.snapshot
    }
}

/// Receives steps from [`RbTree`](crate::RbTree) write operations, in the
/// order they were applied.
pub trait Observer<K> {
    fn observe(&mut self, step: Step<K>);

    /// When false the tree skips building snapshots altogether.
    fn enabled(&self) -> bool {
        true
    }
}

/// Record every step.
impl<K> Observer<K> for Vec<Step<K>> {
    fn observe(&mut self, step: Step<K>) {
        self.push(step)
    }
}

/// Observer that drops everything.
#[derive(Clone, Copy, Debug, Default)]
pub struct Silent;

impl<K> Observer<K> for Silent {
    fn observe(&mut self, _step: Step<K>) {}

    fn enabled(&self) -> bool {
        false
    }
}
