use nalgebra::{DMatrix, DVector};

use crate::{data::dataset::WholeNumber, error::TreeError};

type ConfusionMatrix = DMatrix<usize>;

/// Binary classification scores. The larger label is the positive class.
pub trait ClassificationMetrics<T: WholeNumber> {
    /// Computes the confusion matrix based on the true labels and predicted labels.
    ///
    /// Rows are true classes and columns predicted classes, both in ascending
    /// label order. With a single observed class the matrix is 1x1.
    fn confusion_matrix(
        &self,
        y_true: &DVector<T>,
        y_pred: &DVector<T>,
    ) -> Result<ConfusionMatrix, TreeError> {
        if y_true.len() != y_pred.len() {
            return Err(TreeError::LengthMismatch {
                expected: y_true.len(),
                found: y_pred.len(),
            });
        }

        let mut classes: Vec<T> = y_true.iter().chain(y_pred.iter()).cloned().collect();
        classes.sort();
        classes.dedup();
        if classes.len() > 2 {
            let listed = classes
                .iter()
                .map(|class| class.to_string())
                .collect::<Vec<_>>()
                .join(", ");
            return Err(TreeError::NonBinaryLabels(listed));
        }

        let mut matrix = DMatrix::zeros(classes.len(), classes.len());
        for (y_t, y_p) in y_true.iter().zip(y_pred.iter()) {
            // Both labels were collected into `classes` above.
            let matrix_row = classes.binary_search(y_t).unwrap_or_default();
            let matrix_col = classes.binary_search(y_p).unwrap_or_default();
            matrix[(matrix_row, matrix_col)] += 1;
        }

        Ok(matrix)
    }

    /// Share of predictions equal to the true label. Empty input scores 0.
    fn accuracy(&self, y_true: &DVector<T>, y_pred: &DVector<T>) -> Result<f64, TreeError> {
        let matrix = self.confusion_matrix(y_true, y_pred)?;
        if y_true.is_empty() {
            return Ok(0.0);
        }

        let correct: usize = matrix.diagonal().iter().sum();
        Ok(correct as f64 / y_true.len() as f64)
    }

    fn precision(&self, y_true: &DVector<T>, y_pred: &DVector<T>) -> Result<f64, TreeError> {
        let (tp, fp, _) = positive_counts(&self.confusion_matrix(y_true, y_pred)?);
        Ok(ratio(tp, tp + fp))
    }

    fn recall(&self, y_true: &DVector<T>, y_pred: &DVector<T>) -> Result<f64, TreeError> {
        let (tp, _, fn_) = positive_counts(&self.confusion_matrix(y_true, y_pred)?);
        Ok(ratio(tp, tp + fn_))
    }

    /// Harmonic mean of precision and recall.
    ///
    /// # Errors
    ///
    /// Fails when precision and recall are both 0.
    fn f1_score(&self, y_true: &DVector<T>, y_pred: &DVector<T>) -> Result<f64, TreeError> {
        let precision = self.precision(y_true, y_pred)?;
        let recall = self.recall(y_true, y_pred)?;

        match (precision + recall).abs() < f64::EPSILON {
            true => Err(TreeError::InvalidParameter(
                "f1_score".to_string(),
                "non-zero precision or recall".to_string(),
                "both equal to 0".to_string(),
            )),
            false => Ok(2.0 * (precision * recall) / (precision + recall)),
        }
    }
}

/// (true positives, false positives, false negatives) of the last class.
fn positive_counts(matrix: &ConfusionMatrix) -> (usize, usize, usize) {
    if matrix.nrows() < 2 {
        // One observed class: treat it as positive.
        let tp = matrix.iter().sum();
        return (tp, 0, 0);
    }
    (matrix[(1, 1)], matrix[(0, 1)], matrix[(1, 0)])
}

fn ratio(numerator: usize, denominator: usize) -> f64 {
    if denominator == 0 {
        return 0.0;
    }
    numerator as f64 / denominator as f64
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use nalgebra::DVector;

    struct MockClassifier;

    impl ClassificationMetrics<u8> for MockClassifier {}

    #[test]
    fn test_confusion_matrix() {
        let classifier = MockClassifier;

        let y_true = DVector::from_vec(vec![1, 0, 1, 0, 1]);
        let y_pred = DVector::from_vec(vec![1, 1, 0, 0, 1]);

        let result = classifier.confusion_matrix(&y_true, &y_pred).unwrap();

        let expected = DMatrix::from_vec(2, 2, vec![1, 1, 1, 2]);

        assert_eq!(result, expected);
    }

    #[test]
    fn test_confusion_matrix_unequal() {
        let classifier = MockClassifier;

        let y_true = DVector::from_vec(vec![1, 0, 1, 0, 1, 0]);
        let y_pred = DVector::from_vec(vec![1, 1, 0, 0, 1]);

        let result = classifier.confusion_matrix(&y_true, &y_pred);

        assert!(matches!(
            result,
            Err(TreeError::LengthMismatch {
                expected: 6,
                found: 5
            })
        ));
    }

    #[test]
    fn test_confusion_matrix_rejects_multiclass() {
        let classifier = MockClassifier;

        let y_true = DVector::from_vec(vec![0, 1, 2]);
        let y_pred = DVector::from_vec(vec![0, 2, 1]);

        assert!(matches!(
            classifier.confusion_matrix(&y_true, &y_pred),
            Err(TreeError::NonBinaryLabels(_))
        ));
    }

    #[test]
    fn test_accuracy() {
        let classifier = MockClassifier;

        let y_true = DVector::from_vec(vec![1, 0, 1, 0, 1]);
        let y_pred = DVector::from_vec(vec![1, 1, 0, 0, 1]);

        let result = classifier.accuracy(&y_true, &y_pred).unwrap();

        assert_relative_eq!(result, 0.6);
    }

    #[test]
    fn test_accuracy_perfect_classification() {
        let classifier = MockClassifier;

        let y_true = DVector::from_vec(vec![1, 0, 1, 0, 1]);
        let y_pred = DVector::from_vec(vec![1, 0, 1, 0, 1]);

        assert_eq!(classifier.accuracy(&y_true, &y_pred).unwrap(), 1.0);
    }

    #[test]
    fn test_precision() {
        let classifier = MockClassifier;

        let y_true = DVector::from_vec(vec![1, 0, 1, 0, 1]);
        let y_pred = DVector::from_vec(vec![1, 1, 0, 0, 1]);

        let result = classifier.precision(&y_true, &y_pred).unwrap();

        assert_relative_eq!(result, 2.0 / 3.0);
    }

    #[test]
    fn test_precision_no_positive_predictions() {
        let classifier = MockClassifier;

        let y_true = DVector::from_vec(vec![1, 1, 1, 1, 1]);
        let y_pred = DVector::from_vec(vec![0, 0, 0, 0, 0]);

        assert_eq!(classifier.precision(&y_true, &y_pred).unwrap(), 0.0);
    }

    #[test]
    fn test_recall() {
        let classifier = MockClassifier;

        let y_true = DVector::from_vec(vec![1, 0, 1, 0, 1]);
        let y_pred = DVector::from_vec(vec![1, 1, 0, 0, 1]);

        let result = classifier.recall(&y_true, &y_pred).unwrap();

        assert_relative_eq!(result, 2.0 / 3.0);
    }

    #[test]
    fn test_recall_no_true_positives() {
        let classifier = MockClassifier;

        let y_true = DVector::from_vec(vec![1, 1, 1, 1, 1]);
        let y_pred = DVector::from_vec(vec![0, 0, 0, 0, 0]);

        assert_eq!(classifier.recall(&y_true, &y_pred).unwrap(), 0.0);
    }

    #[test]
    fn test_f1_score() {
        let classifier = MockClassifier;

        let y_true = DVector::from_vec(vec![1, 0, 1, 0, 1]);
        let y_pred = DVector::from_vec(vec![1, 1, 0, 0, 1]);

        let result = classifier.f1_score(&y_true, &y_pred).unwrap();

        assert_relative_eq!(result, 2.0 / 3.0);
    }

    #[test]
    fn test_f1_score_error() {
        let classifier = MockClassifier;

        let y_true = DVector::from_vec(vec![1, 1, 1, 1, 1]);
        let y_pred = DVector::from_vec(vec![0, 0, 0, 0, 0]);

        assert!(classifier.f1_score(&y_true, &y_pred).is_err());
    }

    #[test]
    fn test_single_class_scores() {
        let classifier = MockClassifier;

        let y_true = DVector::from_vec(vec![1, 1, 1]);
        let y_pred = DVector::from_vec(vec![1, 1, 1]);

        assert_eq!(
            classifier.confusion_matrix(&y_true, &y_pred).unwrap(),
            DMatrix::from_element(1, 1, 3)
        );
        assert_eq!(classifier.precision(&y_true, &y_pred).unwrap(), 1.0);
        assert_eq!(classifier.recall(&y_true, &y_pred).unwrap(), 1.0);
    }
}
