//! Greedy threshold search.
use super::entropy::information_gain;
use crate::data::dataset::{Dataset, WholeNumber};
use log::trace;
use rayon::iter::{IntoParallelIterator, ParallelIterator};

/// Partition rule: rows whose feature value is strictly greater than
/// `threshold` go high, the rest go low.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Split<T: WholeNumber> {
    pub feature_index: usize,
    pub threshold: T,
}

impl<T: WholeNumber> Split<T> {
    pub fn new(feature_index: usize, threshold: T) -> Self {
        Self {
            feature_index,
            threshold,
        }
    }

    pub fn goes_high(&self, value: T) -> bool {
        value > self.threshold
    }
}

impl<T: WholeNumber> Default for Split<T> {
    /// Zero-gain fallback used when no threshold is informative.
    fn default() -> Self {
        Self::new(0, T::zero())
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SplitData<T: WholeNumber> {
    pub split: Split<T>,
    pub information_gain: f64,
}

/// Best split of `dataset`, see [`find_best_split`].
pub fn best_split<T: WholeNumber>(dataset: &Dataset<T>) -> Split<T> {
    find_best_split(dataset).split
}

/// Scans every feature and every integer threshold in `[min, max)` of that
/// feature and returns the split with the highest information gain.
/// Thresholds are scored once per distinct partition, so sparse wide-range
/// features cost no more than dense ones.
///
/// Only a strictly greater gain replaces the current best, starting from
/// `Split::default()` at zero gain, so the first maximum in (feature,
/// threshold) order wins. Features are scored in parallel and the
/// per-feature winners are folded back in feature order.
pub fn find_best_split<T: WholeNumber>(dataset: &Dataset<T>) -> SplitData<T> {
    let per_feature = (0..dataset.nfeatures())
        .into_par_iter()
        .map(|feature_index| best_threshold(dataset, feature_index))
        .collect::<Vec<_>>();

    let mut best = SplitData {
        split: Split::default(),
        information_gain: 0.0,
    };
    for candidate in per_feature.into_iter().flatten() {
        if candidate.information_gain > best.information_gain {
            best = candidate;
        }
    }
    best
}

/// First split in (feature, threshold) scan order that puts rows on both
/// sides: the minimum of the first feature that isn't constant. `None` when
/// every row has the same feature values.
pub fn first_separating_split<T: WholeNumber>(dataset: &Dataset<T>) -> Option<Split<T>> {
    (0..dataset.nfeatures()).find_map(|feature_index| {
        let (min, max) = dataset.feature_range(feature_index)?;
        (min < max).then(|| Split::new(feature_index, min))
    })
}

/// Highest-gain threshold of a single feature, `None` if no threshold beats zero gain.
///
/// Every integer threshold between two consecutive observed values yields the
/// same partition, so only the observed values below the maximum are scored.
/// The lower end of each gap is the first threshold of `[min, max)` producing
/// that partition, which keeps the first-maximum tie-break of the full scan.
fn best_threshold<T: WholeNumber>(dataset: &Dataset<T>, feature_index: usize) -> Option<SplitData<T>> {
    let (_, max) = dataset.feature_range(feature_index)?;

    let mut candidates = dataset
        .x
        .column(feature_index)
        .iter()
        .copied()
        .filter(|&value| value < max)
        .collect::<Vec<_>>();
    candidates.sort_unstable();
    candidates.dedup();

    let mut best: Option<SplitData<T>> = None;
    let mut best_information_gain = 0.0;
    for threshold in candidates {
        let gain = information_gain(dataset, feature_index, threshold);
        if gain > best_information_gain {
            best = Some(SplitData {
                split: Split::new(feature_index, threshold),
                information_gain: gain,
            });
            best_information_gain = gain;
        }
    }

    if let Some(found) = &best {
        trace!(
            "feature {} best threshold {} with gain {:.6}",
            feature_index,
            found.split.threshold,
            found.information_gain
        );
    }
    best
}
