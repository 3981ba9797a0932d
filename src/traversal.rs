//! The three classical depth-first visit orders.
//!
//! Every traversal is eager: it walks the whole tree up front and returns the visited
//! nodes in a `Vec`, so a caller animating the sequence can stop partway or replay it
//! without touching the tree again.

use std::fmt;
use std::str::FromStr;

use crate::engine::Node;
use crate::errors::Error;

/// A depth-first visit order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Order {
    /// Left subtree, node, right subtree. Yields values in ascending order.
    Inorder,
    /// Node, left subtree, right subtree.
    Preorder,
    /// Left subtree, right subtree, node.
    Postorder,
}

impl Order {
    /// All orders, in the order they are usually presented.
    pub const ALL: [Order; 3] = [Order::Inorder, Order::Preorder, Order::Postorder];

    /// The lowercase name of this order.
    pub fn name(self) -> &'static str {
        match self {
            Self::Inorder => "inorder",
            Self::Preorder => "preorder",
            Self::Postorder => "postorder",
        }
    }

    /// Visits the subtree rooted at `root` in this order.
    pub fn walk<T>(self, root: Option<&Node<T>>) -> Vec<&Node<T>> {
        let mut visited = Vec::new();
        match self {
            Self::Inorder => inorder(root, &mut visited),
            Self::Preorder => preorder(root, &mut visited),
            Self::Postorder => postorder(root, &mut visited),
        }
        visited
    }
}

impl fmt::Display for Order {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Order {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|order| order.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| Error::UnknownOrder(s.to_string()))
    }
}

fn inorder<'a, T>(node: Option<&'a Node<T>>, visited: &mut Vec<&'a Node<T>>) {
    if let Some(node) = node {
        inorder(node.left(), visited);
        visited.push(node);
        inorder(node.right(), visited);
    }
}

fn preorder<'a, T>(node: Option<&'a Node<T>>, visited: &mut Vec<&'a Node<T>>) {
    if let Some(node) = node {
        visited.push(node);
        preorder(node.left(), visited);
        preorder(node.right(), visited);
    }
}

fn postorder<'a, T>(node: Option<&'a Node<T>>, visited: &mut Vec<&'a Node<T>>) {
    if let Some(node) = node {
        postorder(node.left(), visited);
        postorder(node.right(), visited);
        visited.push(node);
    }
}
