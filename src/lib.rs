//! # Entropy-tree
//!
//! `entropy-tree` grows binary decision trees on integer-valued tables whose last
//! column is a two-valued label. Every node greedily takes the `(feature, threshold)`
//! split with the highest information gain, and growth stops only at label-pure leaves.
//!
//! ## Getting Started
//!
//! To use `entropy-tree`, add the following to your `Cargo.toml` file:
//!
//! ```toml
//! [dependencies]
//! entropy-tree = "*"
//! ```
//!
//! ## Example Usage
//!
//! ```rust
//! use entropy_tree::data::dataset::Dataset;
//! use entropy_tree::trees::{build, predict};
//!
//! let dataset = Dataset::from_rows(&[vec![1, 0], vec![2, 0], vec![5, 1], vec![6, 1]]).unwrap();
//!
//! let tree = build(&dataset).unwrap();
//!
//! assert_eq!(predict(&tree, &[6]).unwrap(), 1);
//! assert_eq!(predict(&tree, &[1]).unwrap(), 0);
//! ```

/// Dataset and table utilities
pub mod data;
/// Train-and-label pipelines used by the command line tool
pub mod driver;
/// Crate error type
pub mod error;
/// Functions for evaluating model performance
pub mod metrics;
/// Decision trees
pub mod trees;
