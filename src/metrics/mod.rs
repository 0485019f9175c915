/// Confusion matrix based classification scores
pub mod confusion;
