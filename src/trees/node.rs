use super::split::Split;
use crate::data::dataset::WholeNumber;

/// Decision tree node. Each internal node owns both of its children.
#[derive(Clone, Debug, PartialEq)]
pub enum TreeNode<T: WholeNumber> {
    Leaf {
        label: T,
        /// Number of training rows that reached this leaf.
        samples: usize,
    },
    Internal {
        split: Split<T>,
        samples: usize,
        high: Box<TreeNode<T>>,
        low: Box<TreeNode<T>>,
    },
}

impl<T: WholeNumber> TreeNode<T> {
    pub fn leaf(label: T, samples: usize) -> Self {
        Self::Leaf { label, samples }
    }

    pub fn internal(split: Split<T>, samples: usize, high: Self, low: Self) -> Self {
        Self::Internal {
            split,
            samples,
            high: Box::new(high),
            low: Box::new(low),
        }
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self, Self::Leaf { .. })
    }

    pub fn samples(&self) -> usize {
        match self {
            Self::Leaf { samples, .. } | Self::Internal { samples, .. } => *samples,
        }
    }

    /// Number of edges on the longest root-to-leaf path.
    pub fn depth(&self) -> usize {
        match self {
            Self::Leaf { .. } => 0,
            Self::Internal { high, low, .. } => 1 + high.depth().max(low.depth()),
        }
    }

    pub fn n_leaves(&self) -> usize {
        match self {
            Self::Leaf { .. } => 1,
            Self::Internal { high, low, .. } => high.n_leaves() + low.n_leaves(),
        }
    }

    pub fn n_nodes(&self) -> usize {
        match self {
            Self::Leaf { .. } => 1,
            Self::Internal { high, low, .. } => 1 + high.n_nodes() + low.n_nodes(),
        }
    }
}
