use std::{borrow::Borrow, cmp::Ordering};

/// The minimal shape a search tree node exposes.
///
/// Both tree disciplines implement this trait, so consumers that only walk
/// the structure (point lookup, in-order iteration, rendering) are written
/// once against it. Child accessors return [`None`] for an empty subtree,
/// letting a consumer recurse without empty-checks of its own.
pub trait TreeNode {
    /// The ordering key stored in each node.
    type Key;

    /// The value associated with each key.
    type Value;

    /// The root of the left subtree, holding keys less than
    /// [`key`](Self::key).
    fn left(&self) -> Option<&Self>;

    /// The root of the right subtree, holding keys greater than
    /// [`key`](Self::key).
    fn right(&self) -> Option<&Self>;

    /// This node's key.
    fn key(&self) -> &Self::Key;

    /// The value stored against [`key`](Self::key).
    fn value(&self) -> &Self::Value;
}

/// Walk from `root` to the node holding `key`, if any, and return its value.
///
/// An iterative descent comparing `key` against each visited node: left on
/// less, right on greater, done on equal. `O(height)` and allocation free.
pub(crate) fn find<'a, N, Q>(root: Option<&'a N>, key: &Q) -> Option<&'a N::Value>
where
    N: TreeNode,
    N::Key: Borrow<Q>,
    Q: Ord + ?Sized,
{
    let mut cursor = root;
    while let Some(n) = cursor {
        cursor = match key.cmp(n.key().borrow()) {
            Ordering::Less => n.left(),
            Ordering::Equal => return Some(n.value()),
            Ordering::Greater => n.right(),
        };
    }
    None
}
