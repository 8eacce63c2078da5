//! Persistent ordered maps built on self-balancing binary search trees.
//!
//! This crate provides two independent map implementations over totally
//! ordered keys: [`AvlTree`], balanced by subtree height, and [`RbTree`],
//! balanced by node colour. Both are *persistent*: inserting never mutates
//! the existing tree, but returns a new version that shares every untouched
//! subtree with its predecessor. Old versions remain valid, independently
//! queryable values.
//!
//! Lookups and insertion are `O(log n)`. Neither tree supports removal.
//!
//! # Examples
//!
//! ```
//! use evertree::AvlTree;
//!
//! let empty = AvlTree::default();
//! let v1 = empty.insert("b", 1);
//! let v2 = v1.insert("a", 2);
//!
//! assert_eq!(v2.get("a"), Some(&2));
//! assert_eq!(v2.get("b"), Some(&1));
//!
//! // The older versions are unaffected.
//! assert_eq!(v1.get("a"), None);
//! assert!(empty.is_empty());
//! ```
//!
//! Tree versions are cheap to clone (a version is a reference-counted root
//! pointer) and can be shared with or sent to other threads freely when `K`
//! and `V` allow it; a reader holding an old version observes a stable
//! snapshot while newer versions are produced elsewhere. No operation
//! blocks, locks, or suspends.

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

mod access;
pub mod avl;
#[cfg(test)]
mod dot;
mod iter;
pub mod rbt;

pub use access::TreeNode;
pub use avl::AvlTree;
pub use rbt::{Color, RbTree};
