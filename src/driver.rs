//! End-to-end runs: train on one table, label another.
use crate::{
    data::{
        dataset::{Dataset, WholeNumber},
        params::{EvaluateParams, TableParams},
        table::{read_rows, write_column, write_column_to_path},
    },
    error::TreeError,
    metrics::confusion::ClassificationMetrics,
    trees::{build, classifier::DecisionTreeClassifier, TreeNode},
};
use log::info;
use std::fmt::{self, Display, Formatter};
use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;

/// Trains on `train` (label in the last column) and labels every row of
/// `query` (features only), returning the labels in query order.
///
/// # Errors
///
/// Fails on malformed tables, an empty training table or a query row whose
/// width differs from the number of training features.
pub fn predict_table<T: WholeNumber, R: Read, Q: Read>(
    train: R,
    query: Q,
    params: &TableParams,
) -> Result<Vec<T>, TreeError> {
    let dataset = Dataset::from_rows(&read_rows::<T, _>(train, params)?)?;
    info!(
        "loaded {} training rows with {} features",
        dataset.nrows(),
        dataset.nfeatures()
    );

    let tree = build(&dataset)?;
    info!(
        "tree has {} leaves and depth {}",
        tree.n_leaves(),
        tree.depth()
    );

    let query_rows = read_rows::<T, _>(query, params)?;
    let labels = label_rows(&tree, &query_rows, dataset.nfeatures())?;
    info!("labelled {} query rows", labels.len());
    Ok(labels)
}

/// [`predict_table`] followed by writing one label per row to `output`.
/// Nothing is written if training or prediction fails.
pub fn run<T: WholeNumber, R: Read, Q: Read, W: Write>(
    train: R,
    query: Q,
    output: W,
    params: &TableParams,
) -> Result<usize, TreeError> {
    let labels = predict_table::<T, _, _>(train, query, params)?;
    write_column(output, &labels, params)?;
    Ok(labels.len())
}

/// [`run`] over file paths. The results file is only created once every
/// query row has been labelled.
pub fn run_files<T: WholeNumber>(
    train_path: impl AsRef<Path>,
    query_path: impl AsRef<Path>,
    output_path: impl AsRef<Path>,
    params: &TableParams,
) -> Result<usize, TreeError> {
    let labels = predict_table::<T, _, _>(
        File::open(train_path)?,
        File::open(query_path)?,
        params,
    )?;
    write_column_to_path(output_path, &labels, params)?;
    Ok(labels.len())
}

fn label_rows<T: WholeNumber>(
    tree: &TreeNode<T>,
    rows: &[Vec<T>],
    n_features: usize,
) -> Result<Vec<T>, TreeError> {
    rows.iter()
        .map(|row| {
            if row.len() != n_features {
                return Err(TreeError::DimensionMismatch {
                    required: n_features,
                    found: row.len(),
                });
            }
            tree.predict(row)
        })
        .collect()
}

/// Scores of a tree trained on part of a table and tested on the rest.
#[derive(Clone, Debug, PartialEq)]
pub struct EvaluationReport {
    pub train_rows: usize,
    pub test_rows: usize,
    pub leaves: usize,
    pub depth: usize,
    pub accuracy: f64,
    pub precision: f64,
    pub recall: f64,
    /// `None` when precision and recall are both 0.
    pub f1_score: Option<f64>,
}

impl Display for EvaluationReport {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Trained on {} rows, tested on {} rows ({} leaves, depth {})",
            self.train_rows, self.test_rows, self.leaves, self.depth
        )?;
        writeln!(f, "Accuracy: {:.2}%", self.accuracy * 100.0)?;
        writeln!(f, "Precision: {:.4}", self.precision)?;
        writeln!(f, "Recall: {:.4}", self.recall)?;
        match self.f1_score {
            Some(f1) => write!(f, "F1 score: {:.4}", f1),
            None => write!(f, "F1 score: undefined"),
        }
    }
}

/// Splits a labelled table into train and test rows, fits a tree on the
/// former and scores it on the latter.
pub fn evaluate<T: WholeNumber, R: Read>(
    data: R,
    table_params: &TableParams,
    params: &EvaluateParams,
) -> Result<EvaluationReport, TreeError> {
    let dataset = Dataset::from_rows(&read_rows::<T, _>(data, table_params)?)?;
    let (train_dataset, test_dataset) =
        dataset.train_test_split(params.train_size(), params.seed())?;

    let mut classifier = DecisionTreeClassifier::new();
    info!("{}", classifier.fit(&train_dataset)?);
    let predictions = classifier.predict(&test_dataset.x)?;

    let (leaves, depth) = classifier
        .root()
        .map_or((0, 0), |root| (root.n_leaves(), root.depth()));

    Ok(EvaluationReport {
        train_rows: train_dataset.nrows(),
        test_rows: test_dataset.nrows(),
        leaves,
        depth,
        accuracy: classifier.accuracy(&test_dataset.y, &predictions)?,
        precision: classifier.precision(&test_dataset.y, &predictions)?,
        recall: classifier.recall(&test_dataset.y, &predictions)?,
        f1_score: classifier.f1_score(&test_dataset.y, &predictions).ok(),
    })
}
