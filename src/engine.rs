//! A mutable, unbalanced BST that keeps per-node presentation state. Every node has a
//! stable [`NodeId`] and an `(x, y)` position that a renderer may write back, so it
//! can animate between two snapshots of the tree. The tree never looks at either.
//!
//! # Examples
//!
//! ```
//! use bst_engine::Tree;
//!
//! let mut tree = Tree::new();
//!
//! // Nothing in here yet.
//! assert!(!tree.contains(&1));
//! assert_eq!(tree.height(), 0);
//!
//! // Inserting hands back the new node so its identity can be animated.
//! let id = tree.insert(1).map(|node| node.id());
//! assert!(id.is_some());
//!
//! // Inserting a value that is already present does nothing.
//! assert!(tree.insert(1).is_none());
//! assert_eq!(tree.len(), 1);
//!
//! // Searching reports the route it took.
//! let search = tree.search(&1);
//! assert!(search.found);
//! assert_eq!(search.path.len(), 1);
//!
//! // Deleting reports whether anything was removed.
//! assert!(tree.delete(&1));
//! assert!(!tree.delete(&1));
//! assert!(tree.is_empty());
//! ```

use std::cmp::Ordering;
use std::fmt;

use tracing::{debug, trace};

use crate::traversal::Order;

/// An owned, possibly empty, subtree.
type Link<T> = Option<Box<Node<T>>>;

/// A stable identity for a node. Ids are handed out from a per-tree counter and are
/// never reused by that tree, even after [`Tree::clear`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(u64);

impl NodeId {
    /// The raw counter value.
    pub fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "node-{}", self.0)
    }
}

/// A `Node` has a value used for searching and ordering and owns up to two children.
///
/// Structure is read-only from outside the tree. The only thing callers can change is
/// the position, through [`Node::set_position`].
#[derive(Debug, Clone)]
pub struct Node<T> {
    value: T,
    left: Link<T>,
    right: Link<T>,
    id: NodeId,
    x: f64,
    y: f64,
}

impl<T> Node<T> {
    fn new_boxed(value: T, id: NodeId) -> Box<Self> {
        Box::new(Self {
            value,
            left: None,
            right: None,
            id,
            x: 0.0,
            y: 0.0,
        })
    }

    /// The value stored in this node.
    pub fn value(&self) -> &T {
        &self.value
    }

    /// This node's identity. It survives deletions elsewhere in the tree, including a
    /// two-child deletion that overwrites this node's value.
    pub fn id(&self) -> NodeId {
        self.id
    }

    /// The left child, holding smaller values.
    pub fn left(&self) -> Option<&Self> {
        self.left.as_deref()
    }

    /// The right child, holding larger values.
    pub fn right(&self) -> Option<&Self> {
        self.right.as_deref()
    }

    /// Mutable access to the left child, for writing back positions.
    pub fn left_mut(&mut self) -> Option<&mut Self> {
        self.left.as_deref_mut()
    }

    /// Mutable access to the right child, for writing back positions.
    pub fn right_mut(&mut self) -> Option<&mut Self> {
        self.right.as_deref_mut()
    }

    /// Whether this node has no children.
    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }

    /// The last position written by [`Node::set_position`], `(0.0, 0.0)` until then.
    pub fn position(&self) -> (f64, f64) {
        (self.x, self.y)
    }

    /// Records where this node is drawn. The tree carries the position along but never
    /// reads it.
    pub fn set_position(&mut self, x: f64, y: f64) {
        self.x = x;
        self.y = y;
    }

    /// Number of levels in the subtree rooted at this node. A leaf has a height of 1.
    ///
    /// This is recomputed on every call.
    pub fn height(&self) -> usize {
        1 + height(self.left()).max(height(self.right()))
    }

    /// Height of the left subtree minus height of the right subtree.
    pub fn balance_factor(&self) -> isize {
        height(self.left()) as isize - height(self.right()) as isize
    }
}

fn height<T>(node: Option<&Node<T>>) -> usize {
    node.map_or(0, Node::height)
}

fn collect_edges<'a, T>(
    node: Option<&'a Node<T>>,
    edges: &mut Vec<(&'a Node<T>, &'a Node<T>)>,
) {
    let Some(node) = node else {
        return;
    };
    if let Some(left) = node.left() {
        edges.push((node, left));
        collect_edges(Some(left), edges);
    }
    if let Some(right) = node.right() {
        edges.push((node, right));
        collect_edges(Some(right), edges);
    }
}

/// Drops a subtree one node at a time, so a list-shaped tree doesn't recurse once per
/// level through `Box`'s drop.
fn drop_iteratively<T>(link: &mut Link<T>) {
    let mut stack: Vec<Box<Node<T>>> = link.take().into_iter().collect();
    while let Some(mut node) = stack.pop() {
        stack.extend(node.left.take());
        stack.extend(node.right.take());
    }
}

/// The result of [`Tree::search`].
#[derive(Debug)]
pub struct Search<'a, T> {
    /// Whether a node holding the value was reached.
    pub found: bool,
    /// Every node compared against, from the root down. When `found` is true the last
    /// entry is the matching node. Otherwise it is the last node before the descent
    /// fell off the tree.
    pub path: Vec<&'a Node<T>>,
}

impl<'a, T> Search<'a, T> {
    /// The matching node, if there was one.
    pub fn node(&self) -> Option<&'a Node<T>> {
        if self.found {
            self.path.last().copied()
        } else {
            None
        }
    }
}

/// Structural read-outs of a tree at one moment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stats {
    /// Number of nodes in the tree.
    pub node_count: usize,
    /// Height of the tree. Zero when empty.
    pub height: usize,
    /// Balance factor at the root. Zero when empty.
    pub balance_factor: isize,
}

/// A Binary Search Tree of unique values. It doesn't rebalance.
#[derive(Debug, Clone)]
pub struct Tree<T> {
    root: Link<T>,
    len: usize,
    next_id: u64,
}

impl<T> Drop for Tree<T> {
    fn drop(&mut self) {
        drop_iteratively(&mut self.root);
    }
}

impl<T> Default for Tree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Tree<T> {
    /// Generates a new, empty `Tree`.
    pub fn new() -> Self {
        Self {
            root: None,
            len: 0,
            next_id: 0,
        }
    }

    /// The root node, or `None` for an empty tree.
    pub fn root(&self) -> Option<&Node<T>> {
        self.root.as_deref()
    }

    /// Mutable access to the root, for writing back positions.
    pub fn root_mut(&mut self) -> Option<&mut Node<T>> {
        self.root.as_deref_mut()
    }

    /// Number of nodes in the tree.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the tree has no nodes.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Removes every node. Ids handed out before clearing are not reused.
    pub fn clear(&mut self) {
        drop_iteratively(&mut self.root);
        self.len = 0;
        debug!("cleared tree");
    }

    /// Height of the tree: zero when empty, one for a lone root.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst_engine::Tree;
    ///
    /// let mut tree = Tree::new();
    /// assert_eq!(tree.height(), 0);
    ///
    /// tree.extend([2, 1, 3]);
    /// assert_eq!(tree.height(), 2);
    /// ```
    pub fn height(&self) -> usize {
        height(self.root())
    }

    /// Balance factor at the root: height of the left subtree minus height of the
    /// right subtree. Zero when empty.
    pub fn balance_factor(&self) -> isize {
        self.root().map_or(0, Node::balance_factor)
    }

    /// Node count, height and root balance factor together.
    pub fn stats(&self) -> Stats {
        Stats {
            node_count: self.len,
            height: self.height(),
            balance_factor: self.balance_factor(),
        }
    }

    /// The nodes in ascending order of value.
    pub fn inorder(&self) -> Vec<&Node<T>> {
        self.traverse(Order::Inorder)
    }

    /// The nodes with every parent before its children, left before right.
    pub fn preorder(&self) -> Vec<&Node<T>> {
        self.traverse(Order::Preorder)
    }

    /// The nodes with every parent after its children, left before right.
    pub fn postorder(&self) -> Vec<&Node<T>> {
        self.traverse(Order::Postorder)
    }

    /// The nodes in the given order.
    pub fn traverse(&self, order: Order) -> Vec<&Node<T>> {
        order.walk(self.root())
    }

    /// Every `(parent, child)` pair, depth first: a node's left edge, then everything
    /// below its left child, then its right edge, then everything below its right child.
    pub fn edges(&self) -> Vec<(&Node<T>, &Node<T>)> {
        let mut edges = Vec::new();
        collect_edges(self.root(), &mut edges);
        edges
    }

    /// The node holding the smallest value.
    pub fn min(&self) -> Option<&Node<T>> {
        let mut node = self.root()?;
        while let Some(left) = node.left() {
            node = left;
        }
        Some(node)
    }

    /// The node holding the largest value.
    pub fn max(&self) -> Option<&Node<T>> {
        let mut node = self.root()?;
        while let Some(right) = node.right() {
            node = right;
        }
        Some(node)
    }

    fn allocate_id(next_id: &mut u64) -> NodeId {
        let id = NodeId(*next_id);
        *next_id += 1;
        id
    }
}

impl<T: Ord> Tree<T> {
    /// Inserts `value` and returns the new node. If the value is already present the
    /// tree is left untouched and `None` is returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst_engine::Tree;
    ///
    /// let mut tree = Tree::new();
    ///
    /// let first = tree.insert(1).map(|n| n.id());
    /// let second = tree.insert(2).map(|n| n.id());
    /// assert_ne!(first, second);
    ///
    /// assert!(tree.insert(1).is_none());
    /// assert_eq!(tree.len(), 2);
    /// ```
    pub fn insert(&mut self, value: T) -> Option<&Node<T>> {
        let mut link = &mut self.root;
        while let Some(node) = link {
            link = match value.cmp(&node.value) {
                Ordering::Less => &mut node.left,
                Ordering::Greater => &mut node.right,
                Ordering::Equal => {
                    trace!(id = %node.id, "value already present, skipping insert");
                    return None;
                }
            };
        }

        let id = Self::allocate_id(&mut self.next_id);
        self.len += 1;
        debug!(%id, node_count = self.len, "inserted node");
        Some(&**link.insert(Node::new_boxed(value, id)))
    }

    /// Deletes the node holding `value`, returning whether one was found.
    ///
    /// A node with no children is removed and a node with one child is replaced by that
    /// child. A node with two children stays where it is, keeping its [`NodeId`], and
    /// takes the value of its in-order successor (the leftmost node of its right
    /// subtree). The successor's own node is the one that leaves the tree.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst_engine::Tree;
    ///
    /// let mut tree: Tree<i32> = [5, 3, 8, 1, 4].into_iter().collect();
    /// let three = tree.search(&3).node().map(|n| n.id());
    ///
    /// assert!(tree.delete(&3));
    ///
    /// // The node that held 3 now holds its successor, 4.
    /// let four = tree.search(&4).node().map(|n| n.id());
    /// assert_eq!(three, four);
    /// assert!(!tree.contains(&3));
    /// ```
    pub fn delete(&mut self, value: &T) -> bool {
        match Self::delete_from(&mut self.root, value) {
            Some(removed) => {
                self.len -= 1;
                debug!(id = %removed.id, node_count = self.len, "removed node");
                true
            }
            None => {
                trace!("value not present, nothing deleted");
                false
            }
        }
    }

    /// Deletes `value` from the subtree at `link` and returns the node that was
    /// detached from the tree.
    fn delete_from(link: &mut Link<T>, value: &T) -> Option<Box<Node<T>>> {
        let node = link.as_mut()?;
        match value.cmp(&node.value) {
            Ordering::Less => Self::delete_from(&mut node.left, value),
            Ordering::Greater => Self::delete_from(&mut node.right, value),
            Ordering::Equal if node.left.is_some() && node.right.is_some() => {
                // The successor has no left child so detaching it is a one-child splice.
                let mut successor = Self::take_min(&mut node.right)?;
                std::mem::swap(&mut node.value, &mut successor.value);
                Some(successor)
            }
            Ordering::Equal => {
                let mut removed = link.take()?;
                *link = removed.left.take().or_else(|| removed.right.take());
                Some(removed)
            }
        }
    }

    /// Detaches the leftmost node of the subtree at `link`, splicing its right child
    /// into its place.
    fn take_min(link: &mut Link<T>) -> Option<Box<Node<T>>> {
        if link.as_ref()?.left.is_some() {
            return Self::take_min(&mut link.as_mut()?.left);
        }
        let mut min = link.take()?;
        *link = min.right.take();
        Some(min)
    }

    /// Walks down from the root looking for `value`, recording every node compared
    /// against.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst_engine::Tree;
    ///
    /// let tree: Tree<i32> = [5, 3, 8, 1, 4].into_iter().collect();
    /// let route = |value| {
    ///     let search = tree.search(&value);
    ///     let path: Vec<_> = search.path.iter().map(|n| *n.value()).collect();
    ///     (search.found, path)
    /// };
    ///
    /// assert_eq!(route(8), (true, vec![5, 8]));
    /// assert_eq!(route(2), (false, vec![5, 3, 1]));
    /// ```
    pub fn search(&self, value: &T) -> Search<'_, T> {
        let mut path = Vec::new();
        let mut current = self.root();
        while let Some(node) = current {
            path.push(node);
            current = match value.cmp(&node.value) {
                Ordering::Less => node.left(),
                Ordering::Greater => node.right(),
                Ordering::Equal => {
                    trace!(id = %node.id, depth = path.len(), "search hit");
                    return Search { found: true, path };
                }
            };
        }
        trace!(depth = path.len(), "search miss");
        Search { found: false, path }
    }

    /// Whether a node holds `value`.
    pub fn contains(&self, value: &T) -> bool {
        self.search(value).found
    }
}

impl<T: Ord> Extend<T> for Tree<T> {
    /// Inserts every value, skipping ones already present.
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
    }
}

impl<T: Ord> FromIterator<T> for Tree<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}
