use super::*;

/// The training data a builder works on, shared by every node of one fit.
///
/// # Fields
///
/// - `x` - Feature matrix, one row per instance
/// - `codes` - Encoded label of every row
/// - `attribute_types` - Type of every attribute
/// - `n_classes` - Number of distinct label codes
#[derive(Debug, Clone, Copy)]
pub struct TrainingView<'a> {
    pub x: ArrayView2<'a, Value>,
    pub codes: &'a [usize],
    pub attribute_types: &'a [AttributeType],
    pub n_classes: usize,
}

impl TrainingView<'_> {
    /// Label frequency vector of the rows in `indices`.
    pub fn label_counts(&self, indices: &[usize]) -> Vec<usize> {
        count_labels(indices.iter().map(|&i| self.codes[i]), self.n_classes)
    }
}

/// Draws a random subsample of `indices`.
///
/// When `sample_size` covers every index the node is returned unshuffled, since
/// the candidate set does not depend on the order of the sample.
fn sample_indices<R: Rng>(indices: &[usize], sample_size: usize, rng: &mut R) -> Vec<usize> {
    let mut sample = indices.to_vec();
    if sample_size >= sample.len() {
        return sample;
    }

    let (chosen, _) = sample.partial_shuffle(rng, sample_size);
    chosen.to_vec()
}

/// Generates the split candidates of one node.
///
/// The candidates are taken from a subsample of the node whose size is set by
/// `sample_size_method`. For every attribute the distinct sampled values are
/// sorted, and each one except the largest becomes a candidate, so an attribute
/// with `d` distinct sampled values yields `d - 1` candidates.
///
/// # Parameters
///
/// - `x` - Feature matrix
/// - `indices` - Rows belonging to the node
/// - `sample_size_method` - Controls how many rows are inspected
/// - `rng` - Random source for the subsample
///
/// # Returns
///
/// * `Vec<SplitCondition>` - Candidates ordered by attribute index, then by value
pub fn split_candidates<R: Rng>(
    x: ArrayView2<Value>,
    indices: &[usize],
    sample_size_method: &SampleSizeMethod,
    rng: &mut R,
) -> Vec<SplitCondition> {
    let sample_size = sample_size_method.sample_size(indices.len());
    let sample = sample_indices(indices, sample_size, rng);

    let mut candidates = Vec::new();
    for attribute in 0..x.ncols() {
        let mut values: Vec<&Value> = sample.iter().map(|&i| &x[[i, attribute]]).collect();
        values.sort();
        values.dedup();

        if let Some((_, lower)) = values.split_last() {
            candidates.extend(
                lower
                    .iter()
                    .map(|&value| SplitCondition::new(attribute, value.clone())),
            );
        }
    }
    candidates
}

/// Divides the rows of a node by `condition`, keeping their relative order.
///
/// # Parameters
///
/// - `x` - Feature matrix
/// - `indices` - Rows belonging to the node
/// - `attribute_types` - Type of every attribute
/// - `condition` - The test to apply
///
/// # Returns
///
/// * `(Vec<usize>, Vec<usize>)` - Rows admitted by the condition, then all other rows
pub fn partition(
    x: ArrayView2<Value>,
    indices: &[usize],
    attribute_types: &[AttributeType],
    condition: &SplitCondition,
) -> (Vec<usize>, Vec<usize>) {
    let attribute_type = attribute_types[condition.attribute];
    indices
        .iter()
        .partition(|&&i| condition.admits(&x[[i, condition.attribute]], attribute_type))
}

/// Label frequency vectors of both branches of `condition`, without materializing
/// the branches themselves.
///
/// Agrees with counting the labels of the two halves returned by [`partition`].
pub fn partition_counts(
    view: &TrainingView,
    indices: &[usize],
    condition: &SplitCondition,
) -> (Vec<usize>, Vec<usize>) {
    let attribute_type = view.attribute_types[condition.attribute];
    let mut left = vec![0; view.n_classes];
    let mut right = vec![0; view.n_classes];

    for &i in indices {
        let code = view.codes[i];
        if condition.admits(&view.x[[i, condition.attribute]], attribute_type) {
            left[code] += 1;
        } else {
            right[code] += 1;
        }
    }
    (left, right)
}

/// Finds the candidate with the highest information gain for one node.
///
/// Candidates are regenerated (and resampled) for every node. A candidate only
/// replaces the current best if its gain is strictly greater, and the running best
/// starts at 0, so ties keep the earlier candidate and a node where nothing gains
/// information gets no split.
///
/// # Parameters
///
/// - `view` - The training data
/// - `indices` - Rows belonging to the node
/// - `sample_size_method` - Controls how many rows are inspected for candidates
/// - `rng` - Random source for the subsample
///
/// # Returns
///
/// * `Option<(SplitCondition, f64)>` - The winning condition and its gain, or `None` if no candidate has positive gain
pub fn best_split<R: Rng>(
    view: &TrainingView,
    indices: &[usize],
    sample_size_method: &SampleSizeMethod,
    rng: &mut R,
) -> Option<(SplitCondition, f64)> {
    let candidates = split_candidates(view.x, indices, sample_size_method, rng);
    let parent = view.label_counts(indices);
    tracing::trace!(
        n_samples = indices.len(),
        n_candidates = candidates.len(),
        "scoring split candidates"
    );

    let mut best: Option<SplitCondition> = None;
    let mut best_gain = 0.0;
    for condition in candidates {
        let (left, right) = partition_counts(view, indices, &condition);
        let gain = information_gain(&parent, &[&left, &right]);
        if gain > best_gain {
            best_gain = gain;
            best = Some(condition);
        }
    }

    best.map(|condition| (condition, best_gain))
}
