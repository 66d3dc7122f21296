use std::{
    borrow::Borrow,
    cmp::{Ord, Ordering},
    fmt, mem,
};

use log::{debug, trace};
use rand::Rng;

use crate::config::{Config, DeleteMode};
use crate::depth::Depth;
use crate::error::Error;
use crate::node::{Color, Node, NodeId};
use crate::step::{Edge, NodeView, Observer, Rotation, Side, Silent, Snapshot, Step, StepKind};

/// RbTree manage a single instance of in-memory [red-black][rbtree] tree,
/// reporting every recolor and rotation to an [`Observer`] so that the
/// balancing can be replayed step by step.
///
/// Nodes live in an arena indexed by [`NodeId`], parent links are plain
/// ids into the same arena.
///
/// [rbtree]: https://en.wikipedia.org/wiki/Red%E2%80%93black_tree
#[derive(Clone)]
pub struct RbTree<K>
where
    K: Clone + Ord + fmt::Debug,
{
    config: Config,
    slots: Vec<Option<Node<K>>>,
    free: Vec<usize>,
    root: Option<NodeId>,
    n_count: usize, // number of entries in the tree.
}

/// Different ways to construct a new RbTree instance.
impl<K> RbTree<K>
where
    K: Clone + Ord + fmt::Debug,
{
    /// Create an empty instance of RbTree, identified by `name`.
    pub fn new<S>(name: S) -> RbTree<K>
    where
        S: AsRef<str>,
    {
        RbTree::with_config(Config::new(name))
    }

    pub fn with_config(config: Config) -> RbTree<K> {
        RbTree {
            config,
            slots: Default::default(),
            free: Default::default(),
            root: Default::default(),
            n_count: Default::default(),
        }
    }

    /// Create a new instance of RbTree and load it with keys from `iter`.
    /// Keys must be unique, the first duplicate is returned as error.
    pub fn load_from<S, I>(name: S, iter: I) -> Result<RbTree<K>, Error<K>>
    where
        S: AsRef<str>,
        I: IntoIterator<Item = K>,
    {
        let mut tree = RbTree::new(name);
        for key in iter {
            tree.insert(key)?;
        }
        Ok(tree)
    }
}

/// Maintenance API.
impl<K> RbTree<K>
where
    K: Clone + Ord + fmt::Debug,
{
    /// Identify this instance.
    #[inline]
    pub fn id(&self) -> String {
        self.config.name().to_string()
    }

    #[inline]
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Return number of entries in this instance.
    #[inline]
    pub fn len(&self) -> usize {
        self.n_count
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.n_count == 0
    }

    /// Drop all entries, the configuration is retained.
    pub fn clear(&mut self) {
        debug!("{}: clear {} entries", self.config.name(), self.n_count);
        self.slots.clear();
        self.free.clear();
        self.root = None;
        self.n_count = 0;
    }

    /// Return quickly with basic statisics, only entries() and node_size()
    /// are valid with this statisics.
    pub fn stats(&self) -> Stats {
        Stats::new(self.n_count, mem::size_of::<Node<K>>())
    }
}

/// Read operations on RbTree instance.
impl<K> RbTree<K>
where
    K: Clone + Ord + fmt::Debug,
{
    #[inline]
    pub fn root(&self) -> Option<NodeId> {
        self.root
    }

    /// Return the node behind `id`, if it is still part of the tree.
    pub fn get(&self, id: NodeId) -> Option<&Node<K>> {
        self.slots.get(id.0).and_then(Option::as_ref)
    }

    /// Locate the node holding `key`.
    pub fn find<Q>(&self, key: &Q) -> Option<NodeId>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let mut cursor = self.root;
        while let Some(id) = cursor {
            let node = self.node(id);
            cursor = match node.key.borrow().cmp(key) {
                Ordering::Less => node.right,
                Ordering::Greater => node.left,
                Ordering::Equal => return Some(id),
            };
        }
        None
    }

    pub fn contains<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.find(key).is_some()
    }

    /// Return the color of the node holding `key`.
    pub fn color_of<Q>(&self, key: &Q) -> Option<Color>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.find(key).map(|id| self.node(id).color)
    }

    /// Return a random entry from this tree.
    pub fn random<R: Rng>(&self, rng: &mut R) -> Option<K> {
        let mut id = self.root?;

        let mut at_depth = rng.gen::<u8>() % 40;
        loop {
            let node = self.node(id);
            let next = if rng.gen::<bool>() {
                node.left
            } else {
                node.right
            };
            match next {
                Some(next) if at_depth > 0 => {
                    at_depth -= 1;
                    id = next;
                }
                _ => break Some(node.key.clone()),
            }
        }
    }

    /// Return an iterator over all keys, in sort order.
    pub fn iter(&self) -> Iter<K> {
        let mut iter = Iter {
            tree: self,
            stack: vec![],
        };
        iter.push_left(self.root);
        iter
    }

    /// Copy the current shape and colors, nodes listed in pre-order.
    pub fn snapshot(&self) -> Snapshot<K> {
        let mut nodes = Vec::with_capacity(self.n_count);
        let mut edges = Vec::with_capacity(self.n_count.saturating_sub(1));
        let mut stack: Vec<NodeId> = self.root.into_iter().collect();
        while let Some(id) = stack.pop() {
            let node = self.node(id);
            nodes.push(NodeView {
                id,
                key: node.key.clone(),
                color: node.color,
            });
            if let Some(child) = node.left {
                edges.push(Edge {
                    parent: id,
                    child,
                    side: Side::Left,
                });
            }
            if let Some(child) = node.right {
                edges.push(Edge {
                    parent: id,
                    child,
                    side: Side::Right,
                });
                stack.push(child);
            }
            if let Some(child) = node.left {
                stack.push(child);
            }
        }
        Snapshot {
            root: self.root,
            nodes,
            edges,
        }
    }
}

// result of BST placement, on duplicate the rejected key and the node
// already holding it.
type Placement<K> = Result<NodeId, (K, NodeId)>;

/// Write operations on RbTree instance.
impl<K> RbTree<K>
where
    K: Clone + Ord + fmt::Debug,
{
    /// Insert `key` and rebalance. If key is already present return error
    /// and leave the tree untouched.
    pub fn insert(&mut self, key: K) -> Result<NodeId, Error<K>> {
        self.insert_observed(key, &mut Silent)
    }

    /// Same as [`RbTree::insert`], reporting each step to `observer`.
    pub fn insert_observed<O>(&mut self, key: K, observer: &mut O) -> Result<NodeId, Error<K>>
    where
        O: Observer<K>,
    {
        let id = match self.bst_insert(key) {
            Ok(id) => id,
            Err((key, existing)) => {
                let msg = format!("Duplicate value {:?} not allowed", key);
                self.emit(observer, StepKind::Duplicate, &[existing], msg);
                return Err(Error::DuplicateKey(key));
            }
        };
        self.n_count += 1;

        let msg = format!("Inserted {:?} as red node", self.node(id).key);
        self.emit(observer, StepKind::Insert, &[id], msg);

        self.fix_red_red(id, observer);
        self.blacken_root(observer);
        Ok(id)
    }

    /// Delete key from this instance and return it. If key is not present,
    /// then delete is effectively a no-op.
    pub fn delete<Q>(&mut self, key: &Q) -> Option<K>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized + fmt::Debug,
    {
        self.delete_observed(key, &mut Silent)
    }

    /// Same as [`RbTree::delete`], reporting each step to `observer`.
    pub fn delete_observed<Q, O>(&mut self, key: &Q, observer: &mut O) -> Option<K>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized + fmt::Debug,
        O: Observer<K>,
    {
        let target = match self.find(key) {
            Some(target) => target,
            None => {
                trace!("{}: delete {:?}, key not present", self.config.name(), key);
                return None;
            }
        };

        // with two children, pull the successor's key up and unlink the
        // successor instead, it has no left child.
        let (victim, replaced) = match (self.node(target).left, self.node(target).right) {
            (Some(_), Some(right)) => {
                let successor = self.minimum(right);
                let skey = self.node(successor).key.clone();
                let old = mem::replace(&mut self.node_mut(target).key, skey);
                (successor, Some(old))
            }
            _ => (target, None),
        };

        let child = self.node(victim).left.or(self.node(victim).right);
        let parent = self.node(victim).parent;
        self.replace_child(parent, victim, child);
        if let Some(child) = child {
            self.node_mut(child).parent = parent;
        }
        let node = self.release(victim);
        self.n_count -= 1;

        let (msg, highlight): (String, Vec<NodeId>) = match &replaced {
            Some(old) => {
                let msg = format!("Deleted {:?}, replaced by successor {:?}", old, node.key);
                (msg, vec![target])
            }
            None => {
                let msg = format!("Deleted {:?}", node.key);
                (msg, child.into_iter().chain(parent).collect())
            }
        };
        self.emit(observer, StepKind::Delete, &highlight, msg);

        match self.config.delete_mode() {
            DeleteMode::Rebalance if node.color.is_black() => {
                self.fix_double_black(child, parent, observer)
            }
            _ => (),
        }
        self.blacken_root(observer);

        Some(replaced.unwrap_or(node.key))
    }

    /// Validate red-black tree with following rules:
    ///
    /// * Root is black.
    /// * Parent and child links agree with each other.
    /// * From root to any leaf, no consecutive reds allowed in its path.
    /// * Number of blacks should be same under left child and right child.
    /// * Make sure keys are in sorted order.
    ///
    /// Additionally return full statistics on the tree. Refer to [`Stats`]
    /// for more information.
    pub fn validate(&self) -> Result<Stats, Error<K>> {
        let mut stats = Stats::new(self.n_count, mem::size_of::<Node<K>>());
        stats.set_depths(Depth::new());

        if let Some(root) = self.root {
            let node = self.node(root);
            if let Some(parent) = node.parent {
                let err = format!("root {} has parent {}", root, parent);
                return Err(Error::BrokenLink(err));
            }
            if node.color.is_red() {
                return Err(Error::RedRoot);
            }
        }

        let blacks = self.validate_tree(self.root, 0, 0, &mut stats)?;
        stats.set_blacks(blacks);
        Ok(stats)
    }
}

impl<K> RbTree<K>
where
    K: Clone + Ord + fmt::Debug,
{
    fn bst_insert(&mut self, key: K) -> Placement<K> {
        let (mut parent, mut cursor, mut side) = (None, self.root, Side::Left);
        while let Some(id) = cursor {
            let node = self.node(id);
            parent = Some(id);
            match key.cmp(&node.key) {
                Ordering::Less => {
                    cursor = node.left;
                    side = Side::Left;
                }
                Ordering::Greater => {
                    cursor = node.right;
                    side = Side::Right;
                }
                Ordering::Equal => return Err((key, id)),
            }
        }

        trace!("{}: place {:?} under {:?}", self.config.name(), key, parent);
        let mut node = Node::new(key);
        node.parent = parent;
        let id = self.alloc(node);
        match (parent, side) {
            (None, _) => self.root = Some(id),
            (Some(parent), Side::Left) => self.node_mut(parent).left = Some(id),
            (Some(parent), Side::Right) => self.node_mut(parent).right = Some(id),
        }
        Ok(id)
    }

    // walk up from a freshly placed red node until no red node has a red
    // child. Only the recolor case moves upward.
    fn fix_red_red<O>(&mut self, mut node: NodeId, observer: &mut O)
    where
        O: Observer<K>,
    {
        loop {
            let parent = match self.node(node).parent {
                Some(parent) if self.is_red(Some(parent)) => parent,
                _ => break,
            };
            let grand = match self.node(parent).parent {
                Some(grand) => grand,
                None => break,
            };
            let parent_is_left = self.node(grand).left == Some(parent);
            let uncle = if parent_is_left {
                self.node(grand).right
            } else {
                self.node(grand).left
            };

            if let Some(uncle) = uncle.filter(|&uncle| self.is_red(Some(uncle))) {
                self.set_color(parent, Color::Black);
                self.set_color(uncle, Color::Black);
                self.set_color(grand, Color::Red);
                let msg = format!(
                    "Recoloring: Parent {:?}, Uncle {:?} -> Black; Grand {:?} -> Red",
                    self.node(parent).key,
                    self.node(uncle).key,
                    self.node(grand).key,
                );
                self.emit(observer, StepKind::Recolor, &[grand, parent, uncle], msg);
                node = grand;
                continue;
            }

            let gkey = self.node(grand).key.clone();
            let node_is_left = self.node(parent).left == Some(node);
            let rotation = match (parent_is_left, node_is_left) {
                (true, true) => {
                    self.rotate_right(grand);
                    Rotation::LeftLeft
                }
                (true, false) => {
                    self.rotate_left(parent);
                    self.rotate_right(grand);
                    Rotation::LeftRight
                }
                (false, false) => {
                    self.rotate_left(grand);
                    Rotation::RightRight
                }
                (false, true) => {
                    self.rotate_right(parent);
                    self.rotate_left(grand);
                    Rotation::RightLeft
                }
            };
            let msg = format!("{} Rotation at Node {:?}", rotation, gkey);
            let kind = StepKind::Rotation(rotation);
            self.emit(observer, kind, &[grand, parent, node], msg);
            break;
        }
    }

    // `node` carries an extra black, `parent` is its parent even when
    // `node` is an empty link.
    fn fix_double_black<O>(
        &mut self,
        mut node: Option<NodeId>,
        mut parent: Option<NodeId>,
        observer: &mut O,
    ) where
        O: Observer<K>,
    {
        while node != self.root && !self.is_red(node) {
            let p = match parent {
                Some(p) => p,
                None => break,
            };
            let is_left = self.node(p).left == node;
            let mut sibling = self.sibling_of(p, is_left);

            if self.is_red(Some(sibling)) {
                self.set_color(sibling, Color::Black);
                self.set_color(p, Color::Red);
                self.relink_toward(p, is_left);
                let msg = format!(
                    "Red sibling {:?}: rotate at {:?}",
                    self.node(sibling).key,
                    self.node(p).key
                );
                self.emit(observer, StepKind::Rebalance, &[p, sibling], msg);
                sibling = self.sibling_of(p, is_left);
            }

            let (near, far) = {
                let s = self.node(sibling);
                if is_left {
                    (s.left, s.right)
                } else {
                    (s.right, s.left)
                }
            };

            if !self.is_red(near) && !self.is_red(far) {
                self.set_color(sibling, Color::Red);
                let msg = format!(
                    "Sibling {:?} -> Red, double black moves up to {:?}",
                    self.node(sibling).key,
                    self.node(p).key
                );
                self.emit(observer, StepKind::Rebalance, &[p, sibling], msg);
                node = Some(p);
                parent = self.node(p).parent;
                continue;
            }

            if !self.is_red(far) {
                let near = match near {
                    Some(near) => near,
                    None => panic!("fix_double_black(): red near nephew missing, call the programmer"),
                };
                self.set_color(near, Color::Black);
                self.set_color(sibling, Color::Red);
                self.relink_toward(sibling, !is_left);
                let msg = format!(
                    "Near nephew {:?}: rotate at sibling {:?}",
                    self.node(near).key,
                    self.node(sibling).key
                );
                self.emit(observer, StepKind::Rebalance, &[sibling, near], msg);
                sibling = near;
            }

            let far = if is_left {
                self.node(sibling).right
            } else {
                self.node(sibling).left
            };
            let color = self.node(p).color;
            self.set_color(sibling, color);
            self.set_color(p, Color::Black);
            if let Some(far) = far {
                self.set_color(far, Color::Black);
            }
            self.relink_toward(p, is_left);
            let msg = format!(
                "Far nephew: rotate at {:?}, sibling {:?} takes its place",
                self.node(p).key,
                self.node(sibling).key
            );
            let highlight: Vec<NodeId> = vec![p, sibling].into_iter().chain(far).collect();
            self.emit(observer, StepKind::Rebalance, &highlight, msg);
            node = self.root;
            break;
        }

        if let Some(node) = node.filter(|&node| self.is_red(Some(node))) {
            self.set_color(node, Color::Black);
            let msg = format!("Red {:?} absorbs double black -> Black", self.node(node).key);
            self.emit(observer, StepKind::Rebalance, &[node], msg);
        }
    }

    // the unconditional safety net after every write.
    fn blacken_root<O>(&mut self, observer: &mut O)
    where
        O: Observer<K>,
    {
        if let Some(root) = self.root {
            if self.node(root).color.is_red() {
                self.set_color(root, Color::Black);
                let msg = format!("Root {:?} -> Black", self.node(root).key);
                self.emit(observer, StepKind::RootRecolor, &[root], msg);
            }
        }
    }

    fn emit<O>(&self, observer: &mut O, kind: StepKind, highlight: &[NodeId], msg: String)
    where
        O: Observer<K>,
    {
        debug!("{}: {}", self.config.name(), msg);
        if observer.enabled() {
            let step = Step::new(kind, highlight.to_vec(), msg, self.snapshot());
            observer.observe(step);
        }
    }

    fn validate_tree(
        &self,
        node: Option<NodeId>,
        mut nb: usize,
        depth: usize,
        stats: &mut Stats,
    ) -> Result<usize, Error<K>> {
        let id = match node {
            Some(id) => id,
            None => {
                if let Some(depths) = stats.depths.as_mut() {
                    depths.sample(depth);
                }
                return Ok(nb);
            }
        };

        let node = self.node(id);
        if node.color.is_black() {
            nb += 1;
        }
        for child in node.left.into_iter().chain(node.right) {
            let cnode = self.node(child);
            if cnode.parent != Some(id) {
                let err = format!("{} lists child {}, child points to {:?}", id, child, cnode.parent);
                return Err(Error::BrokenLink(err));
            }
            if node.color.is_red() && cnode.color.is_red() {
                return Err(Error::ConsecutiveReds(node.key.clone(), cnode.key.clone()));
            }
        }

        let lblacks = self.validate_tree(node.left, nb, depth + 1, stats)?;
        let rblacks = self.validate_tree(node.right, nb, depth + 1, stats)?;
        if lblacks != rblacks {
            let err = format!("at {:?} left: {} right: {}", node.key, lblacks, rblacks);
            return Err(Error::UnbalancedBlacks(err));
        }
        if let Some(left) = node.left.map(|id| self.node(id)) {
            if left.key.ge(&node.key) {
                return Err(Error::SortError(left.key.clone(), node.key.clone()));
            }
        }
        if let Some(right) = node.right.map(|id| self.node(id)) {
            if right.key.le(&node.key) {
                return Err(Error::SortError(right.key.clone(), node.key.clone()));
            }
        }
        Ok(lblacks)
    }

    //--------- rotation routines ----------------

    //              (p)                       (p)
    //               |                         |
    //               x                         y
    //              / \                       / \
    //             a   y         =>          x   c
    //                / \                   / \
    //               b   c                 a   b
    //
    // x and y exchange colors afterwards.
    pub(crate) fn rotate_left(&mut self, x: NodeId) {
        let y = self.relink_left(x);
        self.swap_colors(x, y);
    }

    //              (p)                       (p)
    //               |                         |
    //               x                         y
    //              / \                       / \
    //             y   c         =>          a   x
    //            / \                           / \
    //           a   b                         b   c
    //
    // x and y exchange colors afterwards.
    pub(crate) fn rotate_right(&mut self, x: NodeId) {
        let y = self.relink_right(x);
        self.swap_colors(x, y);
    }

    fn relink_left(&mut self, x: NodeId) -> NodeId {
        let y = match self.node(x).right {
            Some(y) => y,
            None => panic!("rotate_left(): {} has no right child, call the programmer", x),
        };
        let inner = self.node(y).left;
        self.node_mut(x).right = inner;
        if let Some(inner) = inner {
            self.node_mut(inner).parent = Some(x);
        }
        self.node_mut(y).left = Some(x);
        self.lift(x, y);
        y
    }

    fn relink_right(&mut self, x: NodeId) -> NodeId {
        let y = match self.node(x).left {
            Some(y) => y,
            None => panic!("rotate_right(): {} has no left child, call the programmer", x),
        };
        let inner = self.node(y).right;
        self.node_mut(x).left = inner;
        if let Some(inner) = inner {
            self.node_mut(inner).parent = Some(x);
        }
        self.node_mut(y).right = Some(x);
        self.lift(x, y);
        y
    }

    // rotate so that `x` moves down toward the side `left` names.
    fn relink_toward(&mut self, x: NodeId, left: bool) -> NodeId {
        if left {
            self.relink_left(x)
        } else {
            self.relink_right(x)
        }
    }

    // `y` takes the place of `x` under x's former parent.
    fn lift(&mut self, x: NodeId, y: NodeId) {
        let parent = self.node(x).parent;
        self.node_mut(y).parent = parent;
        self.replace_child(parent, x, Some(y));
        self.node_mut(x).parent = Some(y);
    }

    fn replace_child(&mut self, parent: Option<NodeId>, old: NodeId, new: Option<NodeId>) {
        match parent {
            None => self.root = new,
            Some(p) if self.node(p).left == Some(old) => self.node_mut(p).left = new,
            Some(p) => self.node_mut(p).right = new,
        }
    }

    fn swap_colors(&mut self, a: NodeId, b: NodeId) {
        let (ca, cb) = (self.node(a).color, self.node(b).color);
        self.set_color(a, cb);
        self.set_color(b, ca);
    }

    fn sibling_of(&self, parent: NodeId, node_is_left: bool) -> NodeId {
        let node = self.node(parent);
        let sibling = if node_is_left { node.right } else { node.left };
        match sibling {
            Some(sibling) => sibling,
            None => panic!("sibling_of(): {} double black without sibling, call the programmer", parent),
        }
    }

    fn minimum(&self, mut id: NodeId) -> NodeId {
        while let Some(left) = self.node(id).left {
            id = left;
        }
        id
    }

    //--------- arena routines ----------------

    fn alloc(&mut self, node: Node<K>) -> NodeId {
        match self.free.pop() {
            Some(index) => {
                self.slots[index] = Some(node);
                NodeId(index)
            }
            None => {
                self.slots.push(Some(node));
                NodeId(self.slots.len() - 1)
            }
        }
    }

    fn release(&mut self, id: NodeId) -> Node<K> {
        match self.slots.get_mut(id.0).and_then(Option::take) {
            Some(node) => {
                self.free.push(id.0);
                node
            }
            None => panic!("release(): {} already free, call the programmer", id),
        }
    }

    #[inline]
    fn node(&self, id: NodeId) -> &Node<K> {
        match self.slots.get(id.0) {
            Some(Some(node)) => node,
            _ => panic!("node(): dangling {}, call the programmer", id),
        }
    }

    #[inline]
    fn node_mut(&mut self, id: NodeId) -> &mut Node<K> {
        match self.slots.get_mut(id.0) {
            Some(Some(node)) => node,
            _ => panic!("node_mut(): dangling {}, call the programmer", id),
        }
    }

    #[inline]
    fn is_red(&self, id: Option<NodeId>) -> bool {
        id.map_or(false, |id| self.node(id).color.is_red())
    }

    #[inline]
    fn set_color(&mut self, id: NodeId, color: Color) {
        self.node_mut(id).color = color
    }
}

/// In-order iterator over keys of an [`RbTree`].
pub struct Iter<'a, K>
where
    K: Clone + Ord + fmt::Debug,
{
    tree: &'a RbTree<K>,
    stack: Vec<NodeId>,
}

impl<'a, K> Iter<'a, K>
where
    K: Clone + Ord + fmt::Debug,
{
    fn push_left(&mut self, mut cursor: Option<NodeId>) {
        while let Some(id) = cursor {
            self.stack.push(id);
            cursor = self.tree.node(id).left;
        }
    }
}

impl<'a, K> Iterator for Iter<'a, K>
where
    K: Clone + Ord + fmt::Debug,
{
    type Item = &'a K;

    fn next(&mut self) -> Option<Self::Item> {
        let tree = self.tree;
        let node = tree.node(self.stack.pop()?);
        self.push_left(node.right);
        Some(&node.key)
    }
}

/// Statistics on [`RbTree`]. Serves two purpose:
///
/// * To get partial but quick statistics via [`RbTree::stats`] method.
/// * To get full statisics via [`RbTree::validate`] method.
#[derive(Default, Debug)]
pub struct Stats {
    entries: usize, // number of entries in the tree.
    node_size: usize,
    blacks: Option<usize>,
    depths: Option<Depth>,
}

impl Stats {
    fn new(entries: usize, node_size: usize) -> Stats {
        Stats {
            entries,
            node_size,
            blacks: Default::default(),
            depths: Default::default(),
        }
    }

    #[inline]
    fn set_blacks(&mut self, blacks: usize) {
        self.blacks = Some(blacks)
    }

    #[inline]
    fn set_depths(&mut self, depths: Depth) {
        self.depths = Some(depths)
    }

    /// Return number entries in [`RbTree`] instance.
    #[inline]
    pub fn entries(&self) -> usize {
        self.entries
    }

    /// Return node-size, including the color and link overhead. The
    /// overhead is constant, the node size varies with key type. EG:
    ///
    /// ```
    /// use rbtree_steps::RbTree;
    /// let tree: RbTree<u64> = RbTree::new("myinstance");
    ///
    /// // size of key: 8 bytes
    /// // three optional links: 48 bytes, color padded to 8 bytes
    /// assert_eq!(tree.stats().node_size(), 64);
    /// ```
    #[inline]
    pub fn node_size(&self) -> usize {
        self.node_size
    }

    /// Return number of black nodes from root to leaf, available after
    /// [`RbTree::validate`].
    #[inline]
    pub fn blacks(&self) -> Option<usize> {
        self.blacks
    }

    /// Return [`Depth`] statistics.
    pub fn depths(&self) -> Option<Depth> {
        match &self.depths {
            Some(depths) if depths.samples() > 0 => Some(depths.clone()),
            _ => None,
        }
    }
}
