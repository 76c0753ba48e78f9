pub use crate::math::{count_labels, entropy, information_gain, majority_index};
