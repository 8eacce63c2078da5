//! A persistent ordered map balanced by node colour (red-black).

use std::{borrow::Borrow, sync::Arc};

use crate::{access, access::TreeNode, iter::Iter};

mod node;

pub use node::{Color, Node};

use node::Link;

/// A persistent ordered map: a red-black binary search tree whose insert
/// operation returns a new tree version instead of mutating in place.
///
/// The same persistence guarantees as [`AvlTree`](crate::AvlTree) apply:
/// every version shares the subtrees it did not rebuild with the versions it
/// was derived from, prior versions stay valid and unchanged, and producing
/// a new version costs `O(log n)` time and space.
///
/// Balance is maintained through node colours instead of heights: no red
/// node has a red child, and every path from a node down to an empty subtree
/// crosses the same number of black nodes. Together these bound the longest
/// path to at most twice the shortest.
///
/// # Examples
///
/// ```
/// use evertree::RbTree;
///
/// let v1 = RbTree::default().insert("bananas", 42);
/// let v2 = v1.insert("platanos", 12);
///
/// assert_eq!(v2.get("bananas"), Some(&42));
/// assert_eq!(v2.get("platanos"), Some(&12));
///
/// // v1 still answers from its own snapshot.
/// assert_eq!(v1.get("platanos"), None);
/// ```
#[derive(Debug)]
pub struct RbTree<K, V> {
    root: Link<K, V>,
    len: usize,
}

impl<K, V> Default for RbTree<K, V> {
    fn default() -> Self {
        Self { root: None, len: 0 }
    }
}

/// Cloning a tree is `O(1)`: the clone is another owner of the same
/// (immutable) root.
impl<K, V> Clone for RbTree<K, V> {
    fn clone(&self) -> Self {
        Self {
            root: self.root.clone(),
            len: self.len,
        }
    }
}

impl<K, V> RbTree<K, V> {
    /// Construct an empty tree.
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up the value stored against `key`, if any.
    ///
    /// Absence of a key is not an error; it yields [`None`].
    pub fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        access::find(self.root.as_deref(), key)
    }

    /// Returns true if `key` has a value in this tree version.
    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.get(key).is_some()
    }

    /// The number of entries in this tree version.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns true if this tree version holds no entries.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The root node, if any, for consumers that walk the tree shape through
    /// [`TreeNode`] accessors (and [`Node::color`]).
    pub fn root(&self) -> Option<&Node<K, V>> {
        self.root.as_deref()
    }

    /// Visit every entry in ascending key order.
    pub fn iter(&self) -> impl Iterator<Item = (&K, &V)> {
        self.root
            .as_deref()
            .into_iter()
            .flat_map(Iter::new)
            .map(|n| (n.key(), n.value()))
    }
}

impl<K, V> RbTree<K, V>
where
    K: Ord + Clone,
    V: Clone,
{
    /// Return a new tree version that maps `key` to `value`.
    ///
    /// Inserting an existing key replaces its value in the new version. This
    /// version is never modified; the nodes on the insertion path are
    /// rebuilt (re-colouring as needed) while all other subtrees are shared
    /// between the two versions.
    ///
    /// # Examples
    ///
    /// ```
    /// use evertree::RbTree;
    ///
    /// let t = RbTree::default().insert(1, "a").insert(1, "b");
    ///
    /// assert_eq!(t.get(&1), Some(&"b"));
    /// assert_eq!(t.len(), 1);
    /// ```
    pub fn insert(&self, key: K, value: V) -> Self {
        let (root, replaced) = match self.root.as_deref() {
            Some(n) => n.insert(key, value),
            None => (Node::leaf(key, value), false),
        };

        // The returned root may be red: either the fixup fired at the root,
        // or the tree was empty and the new leaf is the root. Repainting it
        // black raises every path's black height by the same amount and
        // cannot introduce a red-red edge.
        Self {
            root: Some(Arc::new(root.paint(Color::Black))),
            len: if replaced { self.len } else { self.len + 1 },
        }
    }
}

/// The thin fold over [`RbTree::insert`], starting from an empty tree.
impl<K, V> FromIterator<(K, V)> for RbTree<K, V>
where
    K: Ord + Clone,
    V: Clone,
{
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        iter.into_iter()
            .fold(Self::default(), |t, (k, v)| t.insert(k, v))
    }
}
