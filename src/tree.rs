//! An unbalanced BST where every node exclusively owns its two children. Nothing is rotated or
//! rebalanced so the shape of the tree is entirely determined by insertion order: random keys give
//! `O(lg N)` height but sorted keys degenerate into a list with `O(N)` height.
//!
//! Keys that compare equal descend to the right. Inserting a duplicate key therefore never
//! overwrites anything - the new node lands below the original and [`Tree::find`] keeps returning
//! the value that was inserted first.
//!
//! # Examples
//!
//! ```
//! use course_catalog::tree::Tree;
//!
//! let mut tree = Tree::new();
//!
//! // Nothing in here yet.
//! assert_eq!(tree.find(&1), None);
//!
//! tree.insert(2, "two");
//! tree.insert(1, "one");
//! assert_eq!(tree.find(&1), Some(&"one"));
//!
//! // A second value for the same key is shadowed by the first.
//! tree.insert(1, "uno");
//! assert_eq!(tree.find(&1), Some(&"one"));
//!
//! // Iteration is in ascending key order.
//! let keys: Vec<_> = tree.iter().map(|(k, _)| *k).collect();
//! assert_eq!(keys, [1, 1, 2]);
//! ```

use std::borrow::Borrow;
use std::cmp::Ordering;
use std::fmt;
use std::iter::FusedIterator;

/// An unbalanced Binary Search Tree. This can be used for inserting and finding keys and values,
/// visiting them in sorted order, and clearing everything at once.
pub struct Tree<K, V> {
    root: Link<K, V>,
    len: usize,
}

type Link<K, V> = Option<Box<Node<K, V>>>;

struct Node<K, V> {
    key: K,
    value: V,
    left: Link<K, V>,
    right: Link<K, V>,
}

impl<K, V> Node<K, V> {
    fn new_boxed(key: K, value: V) -> Box<Self> {
        Box::new(Self {
            key,
            value,
            left: None,
            right: None,
        })
    }
}

impl<K, V> Default for Tree<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V> Drop for Tree<K, V> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<K, V> fmt::Debug for Tree<K, V>
where
    K: fmt::Debug,
    V: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl<K, V> Tree<K, V> {
    /// Generates a new, empty `Tree`.
    pub fn new() -> Self {
        Self { root: None, len: 0 }
    }

    /// How many nodes are in the tree, shadowed duplicates included.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the tree has no nodes.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Inserts the value into the first empty child slot on the search path for `key`. Keys less
    /// than a node's key go left and everything else (including equal keys) goes right.
    ///
    /// # Examples
    ///
    /// ```
    /// use course_catalog::tree::Tree;
    ///
    /// let mut tree = Tree::new();
    /// tree.insert("b", 1);
    /// tree.insert("a", 2);
    /// tree.insert("b", 3);
    ///
    /// assert_eq!(tree.len(), 3);
    /// assert_eq!(tree.find("b"), Some(&1));
    /// ```
    pub fn insert(&mut self, key: K, value: V)
    where
        K: Ord,
    {
        let mut depth = 0usize;
        let mut slot = &mut self.root;
        while let Some(node) = slot {
            slot = match key.cmp(&node.key) {
                Ordering::Less => &mut node.left,
                Ordering::Equal | Ordering::Greater => &mut node.right,
            };
            depth += 1;
        }
        *slot = Some(Node::new_boxed(key, value));
        self.len += 1;
        tracing::trace!(depth, "inserted node");
    }

    /// Potentially finds the value associated with the given key in this tree. The descent stops
    /// at the first node whose key matches so, for duplicate keys, the earliest insert wins. If no
    /// node has the corresponding key, `None` is returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use course_catalog::tree::Tree;
    ///
    /// let mut tree = Tree::new();
    /// tree.insert(String::from("CS101"), 2);
    ///
    /// assert_eq!(tree.find("CS101"), Some(&2));
    /// assert_eq!(tree.find("CS999"), None);
    /// ```
    pub fn find<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let mut link = &self.root;
        while let Some(node) = link {
            link = match key.cmp(node.key.borrow()) {
                Ordering::Less => &node.left,
                Ordering::Equal => return Some(&node.value),
                Ordering::Greater => &node.right,
            };
        }
        None
    }

    /// Returns a lazy in-order iterator over the tree: left subtree, node, right subtree. Keys
    /// come out in ascending order.
    pub fn iter(&self) -> Iter<'_, K, V> {
        let mut iter = Iter {
            stack: Vec::new(),
            remaining: self.len,
        };
        iter.push_left_spine(&self.root);
        iter
    }

    /// Removes every node. Calling this on an empty tree does nothing.
    pub fn clear(&mut self) {
        // Sorted input turns the tree into a list so this uses a work list instead of letting
        // each `Box` drop its children recursively.
        let mut pending: Vec<Box<Node<K, V>>> = self.root.take().into_iter().collect();
        while let Some(mut node) = pending.pop() {
            pending.extend(node.left.take());
            pending.extend(node.right.take());
        }
        self.len = 0;
    }

    /// Gets the height of this tree, i.e. how many nodes are on the longest path from the root to
    /// a leaf. An empty tree has a height of 0.
    pub fn height(&self) -> usize {
        let mut tallest = 0;
        let mut stack: Vec<(&Node<K, V>, usize)> = Vec::new();
        if let Some(root) = &self.root {
            stack.push((&**root, 1));
        }
        while let Some((node, depth)) = stack.pop() {
            tallest = tallest.max(depth);
            for child in [&node.left, &node.right].into_iter().flatten() {
                stack.push((&**child, depth + 1));
            }
        }
        tallest
    }
}

impl<'a, K, V> IntoIterator for &'a Tree<K, V> {
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// In-order iterator returned by [`Tree::iter`]. It only borrows the tree, so a later call to
/// `iter` always walks whatever the tree looks like at that point.
pub struct Iter<'a, K, V> {
    /// Nodes whose left subtree has been queued but which haven't been yielded yet.
    stack: Vec<&'a Node<K, V>>,
    remaining: usize,
}

impl<'a, K, V> Iter<'a, K, V> {
    fn push_left_spine(&mut self, mut link: &'a Link<K, V>) {
        while let Some(node) = link {
            self.stack.push(&**node);
            link = &node.left;
        }
    }
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.push_left_spine(&node.right);
        self.remaining -= 1;
        Some((&node.key, &node.value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<K, V> ExactSizeIterator for Iter<'_, K, V> {}
impl<K, V> FusedIterator for Iter<'_, K, V> {}
