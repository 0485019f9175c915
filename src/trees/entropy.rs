//! Entropy and information gain for two-class labels.
use crate::data::dataset::{Dataset, WholeNumber};

/// Shannon entropy in bits of a set holding `count_a` rows of one class and
/// `count_b` of the other. A pure or empty set has zero entropy.
pub fn entropy(count_a: usize, count_b: usize) -> f64 {
    if count_a == 0 || count_b == 0 {
        return 0.0;
    }
    let total = (count_a + count_b) as f64;
    let p_a = count_a as f64 / total;
    let p_b = count_b as f64 / total;
    -p_a * p_a.log2() - p_b * p_b.log2()
}

/// Reduction in label entropy from splitting `dataset` on `feature_index > threshold`.
///
/// Labels are counted as "same as the first row's label" against "anything else",
/// which for binary labels is the usual two-class count. Returns 0 for an empty dataset.
pub fn information_gain<T: WholeNumber>(
    dataset: &Dataset<T>,
    feature_index: usize,
    threshold: T,
) -> f64 {
    let reference = match dataset.y.get(0) {
        Some(&label) => label,
        None => return 0.0,
    };

    // [reference class, other class]
    let mut high = [0usize; 2];
    let mut low = [0usize; 2];
    for (value, label) in dataset.x.column(feature_index).iter().zip(dataset.y.iter()) {
        let class = usize::from(*label != reference);
        if *value > threshold {
            high[class] += 1;
        } else {
            low[class] += 1;
        }
    }

    let high_total = (high[0] + high[1]) as f64;
    let low_total = (low[0] + low[1]) as f64;
    let total = high_total + low_total;

    let parent_entropy = entropy(high[0] + low[0], high[1] + low[1]);
    let high_entropy = high_total / total * entropy(high[0], high[1]);
    let low_entropy = low_total / total * entropy(low[0], low[1]);

    parent_entropy - high_entropy - low_entropy
}
