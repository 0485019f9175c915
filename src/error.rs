//! Errors
//!
//! Error type shared by the table adapters, tree induction and prediction.
use thiserror::Error;

/// Errors that can occur while loading tables, building trees or predicting.
#[derive(Debug, Error)]
pub enum TreeError {
    /// A table row could not be turned into integers of a consistent width.
    #[error("Malformed input at row {row}: {message}")]
    MalformedInput { row: usize, message: String },
    /// The label column holds more than two distinct values.
    #[error("Labels must take at most two distinct values, found {0}.")]
    NonBinaryLabels(String),
    /// Feature matrix and label vector disagree on the number of rows.
    #[error("Feature matrix has {features} rows but the label vector has {labels}.")]
    ShapeMismatch { features: usize, labels: usize },
    /// A tree can't be grown from zero rows.
    #[error("Cannot build a tree from an empty dataset.")]
    EmptyDataset,
    /// Query feature vector doesn't reach the feature a split looks at.
    #[error("Feature vector has {found} values but at least {required} are required.")]
    DimensionMismatch { required: usize, found: usize },
    #[error("Tree wasn't built yet.")]
    NotFitted,
    /// Predictions and labels are of different sizes.
    #[error("Expected {expected} values but {found} were provided.")]
    LengthMismatch { expected: usize, found: usize },
    /// First value is the name of the parameter, second is expected, third is what was passed.
    #[error("Invalid parameter value passed for {0}, expected {1} but {2} provided.")]
    InvalidParameter(String, String, String),
    #[error(transparent)]
    Csv(#[from] csv::Error),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
