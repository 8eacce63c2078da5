use std::{cmp::Ordering, sync::Arc};

use crate::access::TreeNode;

/// An owned, shareable child pointer.
///
/// Tree versions produced by persistent inserts share their unchanged
/// subtrees through these links, so a subtree may be owned by any number of
/// versions at once.
pub(crate) type Link<K, V> = Option<Arc<Node<K, V>>>;

/// A node in an [`AvlTree`](crate::AvlTree).
///
/// Immutable once constructed; an insert rebuilds the nodes on the
/// root-to-insertion path and leaves everything else shared.
#[derive(Debug, Clone)]
pub struct Node<K, V> {
    /// Child node pointers.
    left: Link<K, V>,
    right: Link<K, V>,

    /// The node's AVL height.
    ///
    /// An empty subtree has a height of 0, and a leaf a height of 1.
    ///
    /// A u8 holds a maximum value of 255, meaning it can represent the height
    /// of a balanced tree of up to 5.78*10⁷⁶ entries.
    height: u8,

    key: K,
    value: V,
}

impl<K, V> Node<K, V> {
    /// Construct a node over the given subtrees, computing the cached height
    /// from the children.
    pub(crate) fn new(key: K, value: V, left: Link<K, V>, right: Link<K, V>) -> Self {
        Self {
            height: height(&left).max(height(&right)) + 1,
            left,
            right,
            key,
            value,
        }
    }

    pub(crate) fn leaf(key: K, value: V) -> Self {
        Self::new(key, value, None, None)
    }

    pub(crate) fn height(&self) -> u8 {
        self.height
    }

    /// Replace this node's left child, recomputing the cached height.
    fn with_left(self, left: Node<K, V>) -> Self {
        Self::new(self.key, self.value, Some(Arc::new(left)), self.right)
    }

    /// Replace this node's right child, recomputing the cached height.
    fn with_right(self, right: Node<K, V>) -> Self {
        Self::new(self.key, self.value, self.left, Some(Arc::new(right)))
    }
}

impl<K, V> Node<K, V>
where
    K: Ord + Clone,
    V: Clone,
{
    /// Return the replacement for the subtree rooted at `self` after
    /// inserting `(key, value)`, and whether an existing entry was replaced.
    ///
    /// The returned subtree satisfies the AVL balance invariant; ancestors
    /// are re-checked as the recursion unwinds.
    pub(crate) fn insert(&self, key: K, value: V) -> (Self, bool) {
        match key.cmp(&self.key) {
            Ordering::Less => {
                let (new_left, replaced) = match self.left.as_deref() {
                    Some(l) => l.insert(key, value),
                    None => (Self::leaf(key, value), false),
                };

                let n = Self::new(
                    self.key.clone(),
                    self.value.clone(),
                    Some(Arc::new(new_left)),
                    self.right.clone(),
                );
                (balance(n), replaced)
            }
            Ordering::Equal => {
                // A pure value overwrite: the children and therefore the
                // subtree shape and height are untouched, so no rebalancing
                // check is needed.
                let n = Self {
                    left: self.left.clone(),
                    right: self.right.clone(),
                    height: self.height,
                    key: self.key.clone(),
                    value,
                };
                (n, true)
            }
            Ordering::Greater => {
                let (new_right, replaced) = match self.right.as_deref() {
                    Some(r) => r.insert(key, value),
                    None => (Self::leaf(key, value), false),
                };

                let n = Self::new(
                    self.key.clone(),
                    self.value.clone(),
                    self.left.clone(),
                    Some(Arc::new(new_right)),
                );
                (balance(n), replaced)
            }
        }
    }
}

impl<K, V> TreeNode for Node<K, V> {
    type Key = K;
    type Value = V;

    fn left(&self) -> Option<&Self> {
        self.left.as_deref()
    }

    fn right(&self) -> Option<&Self> {
        self.right.as_deref()
    }

    fn key(&self) -> &K {
        &self.key
    }

    fn value(&self) -> &V {
        &self.value
    }
}

pub(crate) fn height<K, V>(n: &Link<K, V>) -> u8 {
    n.as_deref().map(Node::height).unwrap_or_default()
}

/// Compute the "tilt" (balance factor) of the subtree rooted at `n`.
///
/// Returns the subtree height skew / magnitude, which is a positive number
/// when left heavy, and a negative number when right heavy.
fn tilt<K, V>(n: &Node<K, V>) -> i8 {
    // Correctness: the height is a u8, the maximal value of which fits in an
    // i16 without truncation or sign inversion.
    (height(&n.left) as i16 - height(&n.right) as i16) as i8
}

/// Restore the AVL balance invariant for the subtree rooted at `n`.
///
/// At most one (possibly double) rotation is needed: a single insert changes
/// ancestor heights by at most 1, so `n` can be skewed by at most 2 in
/// either direction at the point it is rebuilt.
pub(crate) fn balance<K, V>(n: Node<K, V>) -> Node<K, V>
where
    K: Clone,
    V: Clone,
{
    let n = match tilt(&n) {
        // Left-heavy
        2.. => {
            let l = n.left.as_deref().expect("left-heavy node has no left child");
            let n = match tilt(l) {
                // The left child leans right: rotate it left first so the
                // final right rotation lifts the middle key.
                ..=-1 => {
                    let inner = rotate_left(l);
                    n.with_left(inner)
                }
                _ => n,
            };
            rotate_right(&n)
        }
        // Right-heavy
        ..=-2 => {
            let r = n
                .right
                .as_deref()
                .expect("right-heavy node has no right child");
            let n = match tilt(r) {
                // The right child leans left: mirrored double rotation.
                1.. => {
                    let inner = rotate_right(r);
                    n.with_right(inner)
                }
                _ => n,
            };
            rotate_left(&n)
        }
        -1..=1 => n,
    };

    // Invariant: the absolute difference between subtree heights ("tilt")
    // cannot exceed 1.
    debug_assert!(tilt(&n).abs() <= 1);

    n
}

/// Left rotate the given subtree rooted at `x` around the pivot point `P`.
///
/// ```text
///
///      x
///     / \                               P
///    1   P         Rotate Left        /   \
///       / \      --------------->    x     y
///      2   y                        / \   / \
///         / \                      1   2 3   4
///        3   4
/// ```
///
/// Two new nodes are constructed (the new root and its rebuilt left child);
/// subtrees 1, 2 and y are shared with the input tree unchanged.
///
/// # Panics
///
/// Panics if `x` has no right pointer (cannot be rotated).
fn rotate_left<K, V>(x: &Node<K, V>) -> Node<K, V>
where
    K: Clone,
    V: Clone,
{
    let p = x.right.as_deref().expect("rotate_left: no right child");

    let down = Node::new(
        x.key.clone(),
        x.value.clone(),
        x.left.clone(),
        p.left.clone(),
    );
    Node::new(
        p.key.clone(),
        p.value.clone(),
        Some(Arc::new(down)),
        p.right.clone(),
    )
}

/// Right rotate the given subtree rooted at `y` around the pivot point `P`.
///
/// ```text
///          y
///         / \                           P
///        P   4     Rotate Right       /   \
///       / \      --------------->    x     y
///      x   3                        / \   / \
///     / \                          1   2 3   4
///    1   2
/// ```
///
/// Two new nodes are constructed (the new root and its rebuilt right child);
/// subtrees x, 3 and 4 are shared with the input tree unchanged.
///
/// # Panics
///
/// Panics if `y` has no left pointer (cannot be rotated).
fn rotate_right<K, V>(y: &Node<K, V>) -> Node<K, V>
where
    K: Clone,
    V: Clone,
{
    let p = y.left.as_deref().expect("rotate_right: no left child");

    let down = Node::new(
        y.key.clone(),
        y.value.clone(),
        p.right.clone(),
        y.right.clone(),
    );
    Node::new(
        p.key.clone(),
        p.value.clone(),
        p.left.clone(),
        Some(Arc::new(down)),
    )
}
