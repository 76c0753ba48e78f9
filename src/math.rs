/// Counts how often each label code occurs.
///
/// # Parameters
///
/// - `labels` - Dense label codes, each strictly below `n_classes`
/// - `n_classes` - Size of the label alphabet
///
/// # Returns
///
/// - `Vec<usize>` - Frequency vector of length `n_classes`; entry `i` is the number of occurrences of code `i`
///
/// # Panics
///
/// Panics if a code is not below `n_classes`.
///
/// # Examples
/// ```rust
/// use huntree::math::count_labels;
///
/// let freq = count_labels([0, 2, 2, 1, 2], 3);
/// assert_eq!(freq, vec![1, 1, 3]);
/// assert!(count_labels(Vec::<usize>::new(), 0).is_empty());
/// ```
#[inline]
pub fn count_labels<I>(labels: I, n_classes: usize) -> Vec<usize>
where
    I: IntoIterator<Item = usize>,
{
    let mut counts = vec![0; n_classes];
    for label in labels {
        counts[label] += 1;
    }
    counts
}

/// Calculates the Shannon entropy (base 2) of a label frequency vector.
///
/// Empty buckets are skipped, so neither an empty vector nor an all-zero vector
/// produces `NaN`; both have entropy 0.
///
/// # Parameters
///
/// - `freq` - Label frequency vector as produced by [`count_labels`]
///
/// # Returns
///
/// - `f64` - Entropy in bits; 0 for a pure distribution, `log2(k)` for a uniform k-way one
///
/// # Examples
/// ```rust
/// use huntree::math::entropy;
///
/// assert_eq!(entropy(&[4, 0, 0]), 0.0);
/// assert!((entropy(&[2, 2]) - 1.0).abs() < 1e-12);
/// assert_eq!(entropy(&[]), 0.0);
/// ```
#[inline]
pub fn entropy(freq: &[usize]) -> f64 {
    let total: usize = freq.iter().sum();
    if total == 0 {
        return 0.0;
    }

    let total = total as f64;
    freq.iter()
        .filter(|&&count| count > 0)
        .map(|&count| {
            let p = count as f64 / total;
            -p * p.log2()
        })
        .sum()
}

/// Calculates the information gain of splitting a parent distribution into children.
///
/// Gain is the parent's entropy minus the size-weighted entropy of the children.
/// For any partition of the parent the result is non-negative up to rounding noise;
/// it is not clamped.
///
/// # Parameters
///
/// - `parent` - Frequency vector of the node being split
/// - `children` - Frequency vectors of the branches, which together partition `parent`
///
/// # Returns
///
/// - `f64` - Information gain in bits (0.0 when the parent is empty)
///
/// # Examples
/// ```rust
/// use huntree::math::information_gain;
///
/// let ig = information_gain(&[2, 2], &[&[2, 0], &[0, 2]]);
/// // Entropy(parent)=1.0, both children are pure, so IG = 1.0
/// assert!((ig - 1.0).abs() < 1e-12);
/// ```
#[inline]
pub fn information_gain(parent: &[usize], children: &[&[usize]]) -> f64 {
    let total: usize = parent.iter().sum();
    if total == 0 {
        return 0.0;
    }

    let total = total as f64;
    let weighted_child_entropy: f64 = children
        .iter()
        .map(|child| child.iter().sum::<usize>() as f64 / total * entropy(child))
        .sum();

    entropy(parent) - weighted_child_entropy
}

/// Returns the index of the largest count, preferring the lowest index on ties.
///
/// # Parameters
///
/// * `freq` - Label frequency vector
///
/// # Returns
///
/// * `usize` - Majority label code (0 for an empty vector)
///
/// # Examples
/// ```rust
/// use huntree::math::majority_index;
///
/// assert_eq!(majority_index(&[3, 5, 5]), 1);
/// ```
#[inline]
pub fn majority_index(freq: &[usize]) -> usize {
    let mut best = 0;
    for (i, &count) in freq.iter().enumerate() {
        if count > freq[best] {
            best = i;
        }
    }
    best
}
