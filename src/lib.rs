//! # nestflat
//!
//! Depth-first flattening of arbitrarily nested sequences.
//!
//! A nested sequence is a `Vec<Element<T>>` where every element is either a leaf value or
//! another nested sequence. [`flatten`] returns every leaf in depth-first, left-to-right order.
//!
//! ```ignore
//! use nestflat::{flatten, nest};
//!
//! let input = nest![[[1, 2], [3]], [4, [5, [6]]]];
//! assert_eq!(flatten(&input), vec![1, 2, 3, 4, 5, 6]);
//! ```
//!
//! The surrounding modules turn JSON or YAML documents into elements, render flattened
//! leaves in a handful of output formats and load layered configuration for the CLI.

pub mod nestflat;

pub use nestflat::element::{depth, leaf_count, Element};
pub use nestflat::error::FlattenError;
pub use nestflat::flatten::{flatten, flatten_owned, flatten_recursive, flatten_with, Traversal};
