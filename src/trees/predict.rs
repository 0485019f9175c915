use super::node::TreeNode;
use crate::{data::dataset::WholeNumber, error::TreeError};

/// Walks `tree` from the root to a leaf and returns the leaf's label.
///
/// # Errors
///
/// Returns `DimensionMismatch` if a visited split looks at a feature index
/// beyond the end of `features`.
pub fn predict<T: WholeNumber>(tree: &TreeNode<T>, features: &[T]) -> Result<T, TreeError> {
    let mut node = tree;
    loop {
        match node {
            TreeNode::Leaf { label, .. } => return Ok(*label),
            TreeNode::Internal {
                split, high, low, ..
            } => {
                let value = features.get(split.feature_index).ok_or(
                    TreeError::DimensionMismatch {
                        required: split.feature_index + 1,
                        found: features.len(),
                    },
                )?;
                node = if split.goes_high(*value) {
                    high.as_ref()
                } else {
                    low.as_ref()
                };
            }
        }
    }
}

impl<T: WholeNumber> TreeNode<T> {
    pub fn predict(&self, features: &[T]) -> Result<T, TreeError> {
        predict(self, features)
    }
}
