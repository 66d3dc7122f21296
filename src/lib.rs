//! Red-black tree that records every recolor and rotation as a [`Step`],
//! so that insert and delete can be replayed one change at a time.

mod config;
mod depth;
mod error;
mod node;
mod player;
mod rbtree;
mod step;

pub use crate::config::{Config, DeleteMode, DEFAULT_STEP_DELAY};
pub use crate::depth::Depth;
pub use crate::error::Error;
pub use crate::node::{Color, Node, NodeId};
pub use crate::player::Player;
pub use crate::rbtree::{Iter, RbTree, Stats};
pub use crate::step::{Edge, NodeView, Observer, Rotation, Side, Silent, Snapshot, Step, StepKind};

#[cfg(test)]
mod rbtree_test;
