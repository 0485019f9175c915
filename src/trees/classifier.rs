//! Decision Tree Classifier
use super::{builder::build, node::TreeNode};
use crate::{
    data::dataset::{Dataset, WholeNumber},
    error::TreeError,
    metrics::confusion::ClassificationMetrics,
};
use nalgebra::{DMatrix, DVector};

/// Decision Tree Classifier
#[derive(Clone, Debug)]
pub struct DecisionTreeClassifier<T: WholeNumber> {
    root: Option<TreeNode<T>>,
    n_features: Option<usize>,
}

impl<T: WholeNumber> Default for DecisionTreeClassifier<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: WholeNumber> ClassificationMetrics<T> for DecisionTreeClassifier<T> {}

impl<T: WholeNumber> DecisionTreeClassifier<T> {
    /// Creates an unfitted classifier.
    pub fn new() -> Self {
        Self {
            root: None,
            n_features: None,
        }
    }

    /// Builds the decision tree from a dataset.
    ///
    /// # Arguments
    ///
    /// * `dataset` - The dataset containing features and labels.
    ///
    /// # Returns
    ///
    /// A string indicating that the tree was built successfully.
    ///
    /// # Errors
    ///
    /// Returns `EmptyDataset` if the dataset has no rows.
    pub fn fit(&mut self, dataset: &Dataset<T>) -> Result<String, TreeError> {
        self.root = Some(build(dataset)?);
        self.n_features = Some(dataset.nfeatures());
        Ok("Finished building the tree.".into())
    }

    /// Predicts the labels for new data.
    ///
    /// # Arguments
    ///
    /// * `prediction_features` - One row per query, with as many columns as the training features.
    ///
    /// # Errors
    ///
    /// Returns `NotFitted` if the tree wasn't built yet and `DimensionMismatch`
    /// if the column count differs from the training data.
    pub fn predict(&self, prediction_features: &DMatrix<T>) -> Result<DVector<T>, TreeError> {
        let (root, n_features) = match (&self.root, self.n_features) {
            (Some(root), Some(n_features)) => (root, n_features),
            _ => return Err(TreeError::NotFitted),
        };
        if prediction_features.ncols() != n_features {
            return Err(TreeError::DimensionMismatch {
                required: n_features,
                found: prediction_features.ncols(),
            });
        }

        let predictions = prediction_features
            .row_iter()
            .map(|row| root.predict(row.transpose().as_slice()))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(DVector::from_vec(predictions))
    }

    pub fn root(&self) -> Option<&TreeNode<T>> {
        self.root.as_ref()
    }

    /// Number of feature columns seen during `fit`.
    pub fn n_features(&self) -> Option<usize> {
        self.n_features
    }
}
