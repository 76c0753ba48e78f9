use crate::error::ModelError;
use crate::math::{count_labels, information_gain, majority_index};
use crate::utility::LabelEncoder;
use crate::value::Value;
use ndarray::{Array1, ArrayView1, ArrayView2, Axis};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;
use std::sync::Arc;

/// Decision tree induction (Hunt's algorithm) and inference for classification
pub mod decision_tree;
/// This module provides helper functions for machine learning models
mod helper_functions;

pub use decision_tree::*;
