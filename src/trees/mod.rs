/// Recursive tree induction
pub mod builder;
/// Fit/predict wrapper around a single tree
pub mod classifier;
/// Entropy and information gain
pub mod entropy;
pub mod node;
/// Tree traversal
pub mod predict;
/// Split search
pub mod split;

pub use builder::build;
pub use node::TreeNode;
pub use predict::predict;
pub use split::{best_split, Split};
