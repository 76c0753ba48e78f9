use crate::error::ModelError;
use crate::value::Value;
use ahash::AHashMap;
use ndarray::{Array1, Array2, ArrayView1, ArrayView2, Axis};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;

/// This module provides the label encoder that maps raw labels to dense class codes
/// and back
pub mod label_encoding;

/// This module provides functionality for splitting datasets into training and test sets,
/// which is a fundamental preprocessing step in machine learning workflows
pub mod train_test_split;

pub use label_encoding::*;
pub use train_test_split::*;
