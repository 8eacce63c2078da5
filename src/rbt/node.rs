use std::{cmp::Ordering, sync::Arc};

use crate::access::TreeNode;

/// The balancing tag carried by every [`RbTree`](crate::RbTree) node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Color {
    /// A red node: freshly inserted, or the collapsed middle of a fixup.
    Red,
    /// A black node: contributes to the black height of every path below it.
    Black,
}

/// An owned, shareable child pointer.
///
/// Tree versions produced by persistent inserts share their unchanged
/// subtrees through these links, so a subtree may be owned by any number of
/// versions at once.
pub(crate) type Link<K, V> = Option<Arc<Node<K, V>>>;

/// A node in an [`RbTree`](crate::RbTree).
///
/// Immutable once constructed; an insert rebuilds the nodes on the
/// root-to-insertion path and leaves everything else shared.
#[derive(Debug, Clone)]
pub struct Node<K, V> {
    /// Child node pointers.
    left: Link<K, V>,
    right: Link<K, V>,

    color: Color,

    key: K,
    value: V,
}

impl<K, V> Node<K, V> {
    pub(crate) fn new(color: Color, key: K, value: V, left: Link<K, V>, right: Link<K, V>) -> Self {
        Self {
            left,
            right,
            color,
            key,
            value,
        }
    }

    /// New nodes enter the tree red: this cannot change any path's black
    /// height, leaving only a possible red-red edge for `balance` to repair.
    pub(crate) fn leaf(key: K, value: V) -> Self {
        Self::new(Color::Red, key, value, None, None)
    }

    /// The node's colour tag.
    pub fn color(&self) -> Color {
        self.color
    }

    pub(crate) fn paint(self, color: Color) -> Self {
        Self { color, ..self }
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
    /// The replacement keeps this node's colour but may itself be red with a
    /// red child; each ancestor on the unwind path re-runs [`balance`], and
    /// the caller owning the tree root repaints it black.
    pub(crate) fn insert(&self, key: K, value: V) -> (Self, bool) {
        match key.cmp(&self.key) {
            Ordering::Less => {
                let (new_left, replaced) = match self.left.as_deref() {
                    Some(l) => l.insert(key, value),
                    None => (Self::leaf(key, value), false),
                };

                let n = Self::new(
                    self.color,
                    self.key.clone(),
                    self.value.clone(),
                    Some(Arc::new(new_left)),
                    self.right.clone(),
                );
                (balance(n), replaced)
            }
            Ordering::Equal => {
                // A pure value overwrite: colour and children are untouched,
                // so neither the red-red rule nor any path's black height
                // can change. No balance call.
                let n = Self {
                    left: self.left.clone(),
                    right: self.right.clone(),
                    color: self.color,
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
                    self.color,
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

fn red_child<K, V>(link: &Link<K, V>) -> Option<&Node<K, V>> {
    link.as_deref().filter(|n| n.color == Color::Red)
}

/// Repair a red-red violation introduced immediately beneath `n`.
///
/// A black node whose child and matching grandchild are both red is
/// rewritten (in any of the four child/grandchild arrangements) so that the
/// middle key of the three becomes a red root over two black children, with
/// the four uninvolved subtrees redistributed in order:
///
/// ```text
///        n:B                n:B
///        /                  /                 m:R
///     c:R        or      c:R        ---->    /   \
///      /                    \              ?:B   ?:B
///   g:R                     g:R
/// ```
///
/// (and the two mirror images on the right.) Any other shape is returned
/// unchanged. The rewritten root is red, so the violation can reappear one
/// level up and is re-checked at every ancestor on the insertion path; a red
/// `n` is likewise returned unchanged for its nearest black ancestor to
/// absorb.
pub(crate) fn balance<K, V>(n: Node<K, V>) -> Node<K, V>
where
    K: Clone,
    V: Clone,
{
    if n.color == Color::Red {
        return n;
    }

    if let Some(l) = red_child(&n.left) {
        // Left-left: the left child carries the middle key.
        if let Some(ll) = red_child(&l.left) {
            return Node::new(
                Color::Red,
                l.key.clone(),
                l.value.clone(),
                Some(Arc::new(ll.clone().paint(Color::Black))),
                Some(Arc::new(Node::new(
                    Color::Black,
                    n.key.clone(),
                    n.value.clone(),
                    l.right.clone(),
                    n.right.clone(),
                ))),
            );
        }

        // Left-right: the grandchild carries the middle key.
        if let Some(lr) = red_child(&l.right) {
            return Node::new(
                Color::Red,
                lr.key.clone(),
                lr.value.clone(),
                Some(Arc::new(Node::new(
                    Color::Black,
                    l.key.clone(),
                    l.value.clone(),
                    l.left.clone(),
                    lr.left.clone(),
                ))),
                Some(Arc::new(Node::new(
                    Color::Black,
                    n.key.clone(),
                    n.value.clone(),
                    lr.right.clone(),
                    n.right.clone(),
                ))),
            );
        }
    }

    if let Some(r) = red_child(&n.right) {
        // Right-left: the grandchild carries the middle key.
        if let Some(rl) = red_child(&r.left) {
            return Node::new(
                Color::Red,
                rl.key.clone(),
                rl.value.clone(),
                Some(Arc::new(Node::new(
                    Color::Black,
                    n.key.clone(),
                    n.value.clone(),
                    n.left.clone(),
                    rl.left.clone(),
                ))),
                Some(Arc::new(Node::new(
                    Color::Black,
                    r.key.clone(),
                    r.value.clone(),
                    rl.right.clone(),
                    r.right.clone(),
                ))),
            );
        }

        // Right-right: the right child carries the middle key.
        if let Some(rr) = red_child(&r.right) {
            return Node::new(
                Color::Red,
                r.key.clone(),
                r.value.clone(),
                Some(Arc::new(Node::new(
                    Color::Black,
                    n.key.clone(),
                    n.value.clone(),
                    n.left.clone(),
                    r.left.clone(),
                ))),
                Some(Arc::new(rr.clone().paint(Color::Black))),
            );
        }
    }

    n
}
