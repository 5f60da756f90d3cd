//! An unbalanced BST over distinct keys. Every child slot exclusively owns its subtree so
//! restructuring during deletion is a matter of moving boxes between slots, never copying them.
//!
//! # Examples
//!
//! ```
//! use ordered_tree::Tree;
//!
//! let mut tree = Tree::new();
//!
//! // Nothing in here yet.
//! assert!(!tree.contains(&1));
//!
//! assert!(tree.insert(1));
//! assert!(tree.contains(&1));
//!
//! // Inserting a key that is already present does nothing.
//! assert!(!tree.insert(1));
//! assert_eq!(tree.len(), 1);
//!
//! // Deleting a key hands it back.
//! assert_eq!(tree.delete(&1), Some(1));
//! assert!(!tree.contains(&1));
//! ```

use std::cmp::Ordering;
use std::iter::FromIterator;
use std::mem;

use crate::TreeError;

/// A child slot. `None` is the empty subtree, `Some` is the only path to the subtree it holds.
type Link<K> = Option<Box<Node<K>>>;

/// A Binary Search Tree holding distinct keys. It does not rebalance itself so its height depends
/// on insertion order: ascending inserts degrade it to a list.
///
/// Two flavours of the mutating operations are offered. [`insert`][Tree::insert] and
/// [`delete`][Tree::delete] treat a present/missing key as a no-op while
/// [`try_insert`][Tree::try_insert] and [`try_delete`][Tree::try_delete] report it as a
/// [`TreeError`]. Neither flavour touches the tree when the key is rejected.
#[derive(Clone, Debug)]
pub struct Tree<K> {
    root: Link<K>,
    /// How many nodes are reachable from `root`.
    len: usize,
}

impl<K> Default for Tree<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K> Tree<K> {
    /// Generates a new, empty `Tree`.
    pub fn new() -> Self {
        Self { root: None, len: 0 }
    }

    /// Generates a `Tree` with a single node holding `key`.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::Tree;
    ///
    /// let tree = Tree::singleton(3);
    ///
    /// assert!(tree.contains(&3));
    /// assert_eq!(tree.len(), 1);
    /// ```
    pub fn singleton(key: K) -> Self {
        Self {
            root: Some(Node::new_boxed(key)),
            len: 1,
        }
    }

    /// The number of keys in the tree.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the tree holds no keys.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// The number of nodes on the longest path from the root to a leaf. An empty tree has a
    /// height of 0 and a single node has a height of 1.
    pub fn height(&self) -> usize {
        Node::height(&self.root)
    }

    /// Whether `key` is in the tree. This only follows the comparison path for `key` so it takes
    /// `O(height)`.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::Tree;
    ///
    /// let tree: Tree<_> = vec![2, 1, 3].into_iter().collect();
    ///
    /// assert!(tree.contains(&1));
    /// assert!(!tree.contains(&42));
    /// ```
    pub fn contains(&self, key: &K) -> bool
    where
        K: Ord,
    {
        Node::contains(&self.root, key)
    }

    /// Inserts `key` as a new leaf at the end of its search path. Returns `false`, leaving the
    /// tree as it was, if the key is already present.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::Tree;
    ///
    /// let mut tree = Tree::new();
    ///
    /// assert!(tree.insert(1));
    /// assert!(!tree.insert(1));
    /// assert_eq!(tree.len(), 1);
    /// ```
    pub fn insert(&mut self, key: K) -> bool
    where
        K: Ord,
    {
        match Node::insert(&mut self.root, key) {
            Ok(()) => {
                self.len += 1;
                true
            }
            Err(_) => false,
        }
    }

    /// Inserts `key` as a new leaf at the end of its search path. If the key is already present
    /// it is handed back inside [`TreeError::DuplicateKey`] and the tree is left as it was.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::{Tree, TreeError};
    ///
    /// let mut tree = Tree::singleton(1);
    ///
    /// assert_eq!(tree.try_insert(2), Ok(()));
    /// assert_eq!(tree.try_insert(1), Err(TreeError::DuplicateKey(1)));
    /// ```
    pub fn try_insert(&mut self, key: K) -> Result<(), TreeError<K>>
    where
        K: Ord,
    {
        Node::insert(&mut self.root, key).map_err(|key| {
            tracing::debug!(len = self.len, "rejected insert of a present key");
            TreeError::DuplicateKey(key)
        })?;
        self.len += 1;
        Ok(())
    }

    /// The largest key in the tree, found by following right children to the end.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::{Tree, TreeError};
    ///
    /// let tree: Tree<_> = vec![5, 3, 8, 7].into_iter().collect();
    /// assert_eq!(tree.maximum(), Ok(&8));
    ///
    /// assert_eq!(Tree::<i32>::new().maximum(), Err(TreeError::EmptyTree));
    /// ```
    pub fn maximum(&self) -> Result<&K, TreeError<K>> {
        self.root
            .as_deref()
            .map(Node::maximum)
            .ok_or(TreeError::EmptyTree)
    }

    /// The smallest key in the tree, found by following left children to the end.
    pub fn minimum(&self) -> Result<&K, TreeError<K>> {
        self.root
            .as_deref()
            .map(Node::minimum)
            .ok_or(TreeError::EmptyTree)
    }

    /// Deletes `key` from the tree and returns it. If the tree does not contain the key, nothing
    /// happens.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::Tree;
    ///
    /// let mut tree: Tree<_> = vec![5, 3, 8].into_iter().collect();
    ///
    /// assert_eq!(tree.delete(&5), Some(5));
    /// assert_eq!(tree.delete(&5), None);
    /// assert!(tree.contains(&3) && tree.contains(&8));
    /// ```
    pub fn delete(&mut self, key: &K) -> Option<K>
    where
        K: Ord,
    {
        let deleted = Node::delete(&mut self.root, key);
        if deleted.is_some() {
            self.len -= 1;
        }
        deleted
    }

    /// Deletes `key` from the tree and returns it. If the tree does not contain the key,
    /// [`TreeError::MissingKey`] is returned and the tree is left as it was.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::{Tree, TreeError};
    ///
    /// let mut tree = Tree::singleton(1);
    ///
    /// assert_eq!(tree.try_delete(&1), Ok(1));
    /// assert_eq!(tree.try_delete(&1), Err(TreeError::MissingKey));
    /// ```
    pub fn try_delete(&mut self, key: &K) -> Result<K, TreeError<K>>
    where
        K: Ord,
    {
        if !self.contains(key) {
            tracing::debug!(len = self.len, "rejected delete of a missing key");
            return Err(TreeError::MissingKey);
        }
        self.delete(key).ok_or(TreeError::MissingKey)
    }

    /// Releases every node, children before their parent, and returns how many were released.
    /// Dropping a `Tree` releases its nodes too; this just makes the teardown explicit.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::Tree;
    ///
    /// let tree: Tree<_> = vec![2, 1, 3].into_iter().collect();
    /// assert_eq!(tree.destroy(), 3);
    ///
    /// assert_eq!(Tree::<i32>::new().destroy(), 0);
    /// ```
    pub fn destroy(self) -> usize {
        let len = self.len;
        let released = Node::destroy(self.root);
        debug_assert_eq!(released, len);
        released
    }

    /// A snapshot of the keys in ascending order.
    pub fn keys(&self) -> Vec<&K> {
        let mut keys = Vec::with_capacity(self.len);
        if let Some(root) = self.root.as_deref() {
            root.collect_keys(&mut keys);
        }
        keys
    }

    /// Checks the ordering invariant across the whole tree: every key in a node's left subtree
    /// is smaller than the node's key and every key in its right subtree is larger.
    pub fn is_ordered(&self) -> bool
    where
        K: Ord,
    {
        self.root
            .as_deref()
            .map_or(true, |root| root.is_ordered(None, None))
    }
}

impl<K: Ord> FromIterator<K> for Tree<K> {
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
        let mut tree = Tree::new();
        tree.extend(iter);
        tree
    }
}

impl<K: Ord> Extend<K> for Tree<K> {
    fn extend<I: IntoIterator<Item = K>>(&mut self, iter: I) {
        for key in iter {
            self.insert(key);
        }
    }
}

#[derive(Clone, Debug)]
struct Node<K> {
    key: K,
    left: Link<K>,
    right: Link<K>,
}

impl<K> Node<K> {
    fn new_boxed(key: K) -> Box<Self> {
        Box::new(Node {
            key,
            left: None,
            right: None,
        })
    }

    fn height(link: &Link<K>) -> usize {
        match link {
            None => 0,
            Some(node) => Self::height(&node.left).max(Self::height(&node.right)) + 1,
        }
    }

    fn contains(link: &Link<K>, key: &K) -> bool
    where
        K: Ord,
    {
        match link {
            None => false,
            Some(node) => match key.cmp(&node.key) {
                Ordering::Less => Self::contains(&node.left, key),
                Ordering::Equal => true,
                Ordering::Greater => Self::contains(&node.right, key),
            },
        }
    }

    /// Attaches a new leaf for `key` in the empty slot at the end of its search path. A present
    /// key is handed back before anything is modified.
    fn insert(link: &mut Link<K>, key: K) -> Result<(), K>
    where
        K: Ord,
    {
        match link {
            None => {
                tracing::trace!("attached new leaf");
                *link = Some(Self::new_boxed(key));
                Ok(())
            }
            Some(node) => {
                let result = match key.cmp(&node.key) {
                    Ordering::Less => Self::insert(&mut node.left, key),
                    Ordering::Equal => Err(key),
                    Ordering::Greater => Self::insert(&mut node.right, key),
                };

                if cfg!(debug_assertions) {
                    node.assert_children_ordered();
                }
                result
            }
        }
    }

    fn maximum(&self) -> &K {
        match self.right.as_deref() {
            None => &self.key,
            Some(right) => right.maximum(),
        }
    }

    fn minimum(&self) -> &K {
        match self.left.as_deref() {
            None => &self.key,
            Some(left) => left.minimum(),
        }
    }

    /// Deletes `key` from the subtree owned by `link` and returns it. Only comparisons happen on
    /// the way down, so nothing is modified until the node holding `key` has been found.
    fn delete(link: &mut Link<K>, key: &K) -> Option<K>
    where
        K: Ord,
    {
        let node = link.as_mut()?;
        match key.cmp(&node.key) {
            Ordering::Less => return Self::delete(&mut node.left, key),
            Ordering::Greater => return Self::delete(&mut node.right, key),
            Ordering::Equal => {}
        }

        // If we have two children this node stays where it is and takes over its predecessor's
        // key. That is, the largest key in this node's left subtree, whose node is the one that
        // actually goes away.
        if node.left.is_some() && node.right.is_some() {
            let predecessor = Self::delete_largest(&mut node.left)?;
            let deleted = mem::replace(&mut node.key, predecessor);
            tracing::trace!(
                left_height = Self::height(&node.left),
                "deleted node with two children"
            );

            if cfg!(debug_assertions) {
                node.assert_children_ordered();
            }
            return Some(deleted);
        }

        // The only child, if any, takes this node's place in the parent's slot.
        let Node {
            key: deleted,
            left,
            right,
        } = *link.take()?;
        *link = left.or(right);
        if link.is_some() {
            tracing::trace!("deleted node with one child");
        } else {
            tracing::trace!("deleted leaf");
        }
        Some(deleted)
    }

    /// Deletes the largest node in the subtree owned by `link` by recursing to the right until
    /// there is no right child. Its left child, if any, takes its slot.
    fn delete_largest(link: &mut Link<K>) -> Option<K> {
        let node = link.as_mut()?;
        if node.right.is_some() {
            return Self::delete_largest(&mut node.right);
        }

        let Node { key, left, .. } = *link.take()?;
        *link = left;
        Some(key)
    }

    // TODO stack based destroy/drop. This and the automatic drop of a `Link` both recurse once
    // per level, which a degenerate tree makes as deep as it is long.
    /// Releases both subtrees and then the node itself.
    fn destroy(link: Link<K>) -> usize {
        match link {
            None => 0,
            Some(mut node) => {
                let released = Self::destroy(node.left.take()) + Self::destroy(node.right.take());
                drop(node);
                released + 1
            }
        }
    }

    fn collect_keys<'a>(&'a self, keys: &mut Vec<&'a K>) {
        if let Some(left) = self.left.as_deref() {
            left.collect_keys(keys);
        }
        keys.push(&self.key);
        if let Some(right) = self.right.as_deref() {
            right.collect_keys(keys);
        }
    }

    /// Whether every key in this subtree lies strictly between the bounds imposed by its
    /// ancestors.
    fn is_ordered(&self, lower: Option<&K>, upper: Option<&K>) -> bool
    where
        K: Ord,
    {
        lower.map_or(true, |lower| *lower < self.key)
            && upper.map_or(true, |upper| self.key < *upper)
            && self
                .left
                .as_deref()
                .map_or(true, |left| left.is_ordered(lower, Some(&self.key)))
            && self
                .right
                .as_deref()
                .map_or(true, |right| right.is_ordered(Some(&self.key), upper))
    }

    fn assert_children_ordered(&self)
    where
        K: Ord,
    {
        if let Some(left) = self.left.as_deref() {
            assert!(self.key > left.key);
        }
        if let Some(right) = self.right.as_deref() {
            assert!(self.key < right.key);
        }
    }
}
