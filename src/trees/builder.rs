//! Recursive tree induction.
use super::{
    node::TreeNode,
    split::{find_best_split, first_separating_split, SplitData},
};
use crate::{
    data::dataset::{Dataset, WholeNumber},
    error::TreeError,
};
use log::{debug, trace};

/// Grows a tree whose leaves are label-pure.
///
/// Each node splits its rows on the highest-gain split and recurses on both
/// halves. When that split leaves one half empty (only the zero-gain fallback
/// can), the first split in scan order that separates the rows is used
/// instead. Rows that share every feature value but disagree on the label
/// can't be separated and become a leaf holding the majority label, ties
/// going to the earliest row.
///
/// # Errors
///
/// Returns `EmptyDataset` if `dataset` has no rows.
pub fn build<T: WholeNumber>(dataset: &Dataset<T>) -> Result<TreeNode<T>, TreeError> {
    if !dataset.is_not_empty() {
        return Err(TreeError::EmptyDataset);
    }
    let tree = grow(dataset, 0);
    debug!(
        "built tree from {} rows: {} nodes, {} leaves, depth {}",
        dataset.nrows(),
        tree.n_nodes(),
        tree.n_leaves(),
        tree.depth()
    );
    Ok(tree)
}

// `dataset` is never empty: the root is checked by `build` and both
// children of an internal node hold at least one row.
fn grow<T: WholeNumber>(dataset: &Dataset<T>, depth: usize) -> TreeNode<T> {
    let samples = dataset.nrows();
    if let Some(label) = dataset.pure_label() {
        trace!("depth {}: pure leaf {} over {} rows", depth, label, samples);
        return TreeNode::leaf(label, samples);
    }

    let SplitData {
        mut split,
        information_gain,
    } = find_best_split(dataset);
    let (mut high, mut low) = dataset.split_on_threshold(split.feature_index, split.threshold);

    if !high.is_not_empty() || !low.is_not_empty() {
        match (first_separating_split(dataset), dataset.majority_label()) {
            (Some(separating), _) => {
                trace!(
                    "depth {}: fallback split leaves a side empty, using feature {} > {}",
                    depth,
                    separating.feature_index,
                    separating.threshold
                );
                (high, low) =
                    dataset.split_on_threshold(separating.feature_index, separating.threshold);
                split = separating;
            }
            (None, Some(label)) => {
                debug!(
                    "depth {}: {} rows with identical features disagree, majority leaf {}",
                    depth, samples, label
                );
                return TreeNode::leaf(label, samples);
            }
            (None, None) => unreachable!("impure node without rows"),
        }
    }

    trace!(
        "depth {}: feature {} > {} (gain {:.6}) sends {} high, {} low",
        depth,
        split.feature_index,
        split.threshold,
        information_gain,
        high.nrows(),
        low.nrows()
    );
    TreeNode::internal(
        split,
        samples,
        grow(&high, depth + 1),
        grow(&low, depth + 1),
    )
}
