use crate::error::TreeError;
use nalgebra::{DMatrix, DVector};
use num_traits::{Num, PrimInt, ToPrimitive};
use rand::seq::SliceRandom;
use rand::{rngs::StdRng, SeedableRng};
use std::fmt::{self, Display};
use std::fmt::{Debug, Formatter};
use std::str::FromStr;

pub trait DataValue:
    Debug + Clone + Copy + Num + ToPrimitive + Send + Sync + Display + 'static
{
}

impl<T> DataValue for T where
    T: Debug + Clone + Copy + Num + ToPrimitive + Send + Sync + Display + 'static
{
}

/// Integer cell type of a table: features, thresholds and labels all share it.
pub trait WholeNumber: DataValue + PrimInt + FromStr {}
impl<T> WholeNumber for T where T: DataValue + PrimInt + FromStr {}

/// Training rows split into a feature matrix and a binary label vector.
pub struct Dataset<T: WholeNumber> {
    pub x: DMatrix<T>,
    pub y: DVector<T>,
}

impl<T: WholeNumber> Debug for Dataset<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Dataset {{\n    x: [\n")?;

        for i in 0..self.x.nrows() {
            write!(f, "        [")?;
            for j in 0..self.x.ncols() {
                write!(f, "{:?}, ", self.x[(i, j)])?;
            }
            writeln!(f, "],")?;
        }

        write!(f, "    ],\n    y: [")?;
        for i in 0..self.y.len() {
            write!(f, "{:?}, ", self.y[i])?;
        }
        write!(f, "]\n}}")
    }
}

impl<T: WholeNumber> Dataset<T> {
    /// Wraps a feature matrix and label vector.
    ///
    /// # Errors
    ///
    /// Fails if the row counts differ, if there is no feature column or if the
    /// labels take more than two distinct values.
    pub fn new(x: DMatrix<T>, y: DVector<T>) -> Result<Self, TreeError> {
        if x.nrows() != y.len() {
            return Err(TreeError::ShapeMismatch {
                features: x.nrows(),
                labels: y.len(),
            });
        }
        if x.ncols() == 0 {
            return Err(TreeError::MalformedInput {
                row: 1,
                message: "rows need at least one feature column".to_string(),
            });
        }
        check_binary_labels(y.iter())?;
        Ok(Self { x, y })
    }

    /// Builds a dataset from rows whose last entry is the label.
    ///
    /// # Errors
    ///
    /// * `EmptyDataset` if `rows` is empty.
    /// * `MalformedInput` if a row is narrower than two values or its width
    ///   differs from the first row.
    /// * `NonBinaryLabels` if the label column has more than two values.
    pub fn from_rows(rows: &[Vec<T>]) -> Result<Self, TreeError> {
        let width = rows.first().ok_or(TreeError::EmptyDataset)?.len();
        if width < 2 {
            return Err(TreeError::MalformedInput {
                row: 1,
                message: format!(
                    "rows need at least one feature and a label, found {} value(s)",
                    width
                ),
            });
        }

        let mut features = Vec::with_capacity(rows.len() * (width - 1));
        let mut labels = Vec::with_capacity(rows.len());
        for (index, row) in rows.iter().enumerate() {
            if row.len() != width {
                return Err(TreeError::MalformedInput {
                    row: index + 1,
                    message: format!("expected {} values, found {}", width, row.len()),
                });
            }
            features.extend_from_slice(&row[..width - 1]);
            labels.push(row[width - 1]);
        }

        Self::new(
            DMatrix::from_row_slice(rows.len(), width - 1, &features),
            DVector::from_vec(labels),
        )
    }

    pub fn is_not_empty(&self) -> bool {
        !(self.x.is_empty() || self.y.is_empty())
    }

    pub fn nrows(&self) -> usize {
        self.x.nrows()
    }

    pub fn nfeatures(&self) -> usize {
        self.x.ncols()
    }

    /// Smallest and largest observed value of a feature, `None` when there are no rows.
    pub fn feature_range(&self, feature_index: usize) -> Option<(T, T)> {
        let column = self.x.column(feature_index);
        let min = column.iter().min()?;
        let max = column.iter().max()?;
        Some((*min, *max))
    }

    /// The label shared by every row, or `None` if the rows disagree or there are none.
    pub fn pure_label(&self) -> Option<T> {
        let first = *self.y.get(0)?;
        self.y.iter().all(|&label| label == first).then_some(first)
    }

    /// Most frequent label. On a tie the label of the earliest row wins.
    pub fn majority_label(&self) -> Option<T> {
        let first = *self.y.get(0)?;
        let matching = self.y.iter().filter(|&&label| label == first).count();
        let other = self.y.iter().find(|&&label| label != first);
        match other {
            Some(&other) if self.y.len() - matching > matching => Some(other),
            _ => Some(first),
        }
    }

    /// Partitions rows into `(high, low)`: `high` keeps rows whose feature value is
    /// strictly greater than `threshold`. Row order is preserved on both sides.
    pub fn split_on_threshold(&self, feature_index: usize, threshold: T) -> (Self, Self) {
        let (high_indices, low_indices): (Vec<usize>, Vec<usize>) =
            (0..self.x.nrows()).partition(|&index| self.x[(index, feature_index)] > threshold);

        (self.select(&high_indices), self.select(&low_indices))
    }

    pub fn train_test_split(
        &self,
        train_size: f64,
        seed: Option<u64>,
    ) -> Result<(Self, Self), TreeError> {
        if !(0.0..=1.0).contains(&train_size) {
            return Err(TreeError::InvalidParameter(
                "train_size".to_string(),
                "a value between 0.0 and 1.0".to_string(),
                train_size.to_string(),
            ));
        }
        let mut rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        let mut indices = (0..self.x.nrows()).collect::<Vec<_>>();
        indices.shuffle(&mut rng);
        let train_size = (self.x.nrows() as f64 * train_size).floor() as usize;

        Ok((
            self.select(&indices[..train_size]),
            self.select(&indices[train_size..]),
        ))
    }

    fn select(&self, indices: &[usize]) -> Self {
        Self {
            x: self.x.select_rows(indices),
            y: self.y.select_rows(indices),
        }
    }
}

fn check_binary_labels<'a, T: WholeNumber>(
    labels: impl Iterator<Item = &'a T>,
) -> Result<(), TreeError> {
    let mut seen: Vec<T> = Vec::with_capacity(3);
    for label in labels {
        if !seen.contains(label) {
            seen.push(*label);
            if seen.len() > 2 {
                let listed = seen
                    .iter()
                    .map(|label| label.to_string())
                    .collect::<Vec<_>>()
                    .join(", ");
                return Err(TreeError::NonBinaryLabels(listed));
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Dataset<i64> {
        Dataset::from_rows(&[
            vec![1, 2, 0],
            vec![3, 4, 0],
            vec![5, 6, 1],
            vec![7, 8, 1],
        ])
        .unwrap()
    }

    #[test]
    fn test_dataset_new() {
        let x = DMatrix::from_row_slice(2, 2, &[1, 2, 3, 4]);
        let y = DVector::from_vec(vec![5, 6]);
        let dataset = Dataset::new(x.clone(), y.clone()).unwrap();
        assert_eq!(dataset.x, x);
        assert_eq!(dataset.y, y);
    }

    #[test]
    fn test_dataset_new_shape_mismatch() {
        let x = DMatrix::from_row_slice(2, 2, &[1, 2, 3, 4]);
        let y = DVector::from_vec(vec![0, 1, 1]);
        assert!(matches!(
            Dataset::new(x, y),
            Err(TreeError::ShapeMismatch {
                features: 2,
                labels: 3
            })
        ));
    }

    #[test]
    fn test_dataset_new_without_features() {
        let x = DMatrix::<i64>::zeros(2, 0);
        let y = DVector::from_vec(vec![0, 1]);
        assert!(matches!(
            Dataset::new(x, y),
            Err(TreeError::MalformedInput { row: 1, .. })
        ));
    }

    #[test]
    fn test_dataset_from_rows() {
        let dataset = sample();
        assert_eq!(dataset.nrows(), 4);
        assert_eq!(dataset.nfeatures(), 2);
        assert_eq!(dataset.x, DMatrix::from_row_slice(4, 2, &[1, 2, 3, 4, 5, 6, 7, 8]));
        assert_eq!(dataset.y, DVector::from_vec(vec![0, 0, 1, 1]));
    }

    #[test]
    fn test_dataset_from_rows_errors() {
        let empty: Vec<Vec<i32>> = vec![];
        assert!(matches!(
            Dataset::from_rows(&empty),
            Err(TreeError::EmptyDataset)
        ));
        assert!(matches!(
            Dataset::from_rows(&[vec![1]]),
            Err(TreeError::MalformedInput { row: 1, .. })
        ));
        assert!(matches!(
            Dataset::from_rows(&[vec![1, 0], vec![2, 3, 1]]),
            Err(TreeError::MalformedInput { row: 2, .. })
        ));
        assert!(matches!(
            Dataset::from_rows(&[vec![1, 0], vec![2, 1], vec![3, 2]]),
            Err(TreeError::NonBinaryLabels(_))
        ));
    }

    #[test]
    fn test_dataset_formatting() {
        let dataset = Dataset::from_rows(&[vec![1, 2, 5], vec![3, 4, 6]]).unwrap();

        let dataset_str = format!("{:?}", dataset);

        let expected_str = "\
Dataset {
    x: [
        [1, 2, ],
        [3, 4, ],
    ],
    y: [5, 6, ]
}";

        assert_eq!(dataset_str, expected_str);
    }

    #[test]
    fn test_dataset_feature_range() {
        let dataset = Dataset::from_rows(&[vec![4, -2, 0], vec![1, 9, 1], vec![3, 0, 1]]).unwrap();
        assert_eq!(dataset.feature_range(0), Some((1, 4)));
        assert_eq!(dataset.feature_range(1), Some((-2, 9)));

        let (_, empty) = dataset.split_on_threshold(0, -10);
        assert_eq!(empty.feature_range(0), None);
    }

    #[test]
    fn test_dataset_pure_and_majority_label() {
        let dataset = sample();
        assert_eq!(dataset.pure_label(), None);
        assert_eq!(dataset.majority_label(), Some(0));

        let skewed = Dataset::from_rows(&[vec![1, 1], vec![2, 0], vec![3, 0]]).unwrap();
        assert_eq!(skewed.majority_label(), Some(0));

        let pure = Dataset::from_rows(&[vec![1, 1], vec![2, 1]]).unwrap();
        assert_eq!(pure.pure_label(), Some(1));
        assert_eq!(pure.majority_label(), Some(1));
    }

    #[test]
    fn test_dataset_split_on_threshold() {
        let dataset = sample();

        let (high, low) = dataset.split_on_threshold(0, 4);
        assert_eq!(high.nrows(), 2);
        assert_eq!(low.nrows(), 2);
        assert_eq!(high.x.column(0).iter().cloned().collect::<Vec<_>>(), vec![5, 7]);
        assert_eq!(low.x.column(0).iter().cloned().collect::<Vec<_>>(), vec![1, 3]);
    }

    #[test]
    fn test_dataset_split_on_threshold_equal_goes_low() {
        let dataset = sample();

        let (high, low) = dataset.split_on_threshold(0, 5);
        assert_eq!(high.nrows(), 1);
        assert_eq!(low.nrows(), 3);
    }

    #[test]
    fn test_dataset_split_on_threshold_high_empty() {
        let dataset = sample();

        let (high, low) = dataset.split_on_threshold(0, 9);
        assert!(!high.is_not_empty());
        assert_eq!(high.nfeatures(), 2);
        assert_eq!(low.nrows(), 4);
    }

    #[test]
    fn test_dataset_train_test_split() {
        let dataset = sample();

        let (train_dataset, test_dataset) = dataset.train_test_split(0.75, Some(7)).unwrap();
        assert_eq!(train_dataset.nrows(), 3);
        assert_eq!(test_dataset.nrows(), 1);

        assert!(dataset.train_test_split(1.5, None).is_err());
    }

    #[test]
    fn test_dataset_train_test_split_is_seeded() {
        let dataset = sample();

        let (first, _) = dataset.train_test_split(0.5, Some(1000)).unwrap();
        let (second, _) = dataset.train_test_split(0.5, Some(1000)).unwrap();
        assert_eq!(first.x, second.x);
        assert_eq!(first.y, second.y);
    }
}
