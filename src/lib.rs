//! This crate is a small course catalog built around a plain Binary Search Tree.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to insert and find stored
//! records. BSTs are typically defined recursively using the notion of a `Node`. A `Node` stores
//! a key and a value and has up to two child `Node`s. The invariants kept here are:
//!
//! 1. For every `Node` in a BST, all the `Node`s in its left subtree have a key less than its own
//!    key.
//! 2. For every `Node` in a BST, all the `Node`s in its right subtree have a key greater than or
//!    equal to its own key.
//!
//! Searching takes `O(height)`. The [`tree`] here never rebalances, so the height depends on
//! insertion order: `O(lg N)` for random course numbers and `O(N)` for a dataset that is already
//! sorted. Visiting the left subtree, then the node, then the right subtree gives the courses in
//! sorted order.
//!
//! ## Catalog
//!
//! [`CourseStore`] keys every [`Course`] by its course number. The [`loader`] fills it from a
//! comma separated dataset, checking that every prerequisite names a course in the same dataset
//! before replacing anything, and [`display`] renders courses with their prerequisite titles for
//! the interactive [`menu`].

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

pub mod cli;
pub mod course;
pub mod display;
pub mod error;
pub mod loader;
pub mod menu;
pub mod store;
pub mod tree;

pub use course::Course;
pub use error::LoadError;
pub use store::CourseStore;
