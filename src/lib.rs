//! # huntree
//!
//! Binary decision tree classifier induced with Hunt's algorithm.
//!
//! Instances are rows of [`value::Value`]s: numbers feed ordered attributes that
//! split on `value <= threshold`, tokens feed categorical attributes that split on
//! equality. Trees pick the split with the highest information gain at every node,
//! can subsample a node's instances to keep candidate generation cheap, and can be
//! saved to and restored from a compact line-based text format.
//!
//! # Example
//! ```rust
//! use huntree::prelude::*;
//! use ndarray::{arr1, arr2};
//!
//! let x = arr2(&[
//!     ["sunny", "hot"],
//!     ["sunny", "mild"],
//!     ["rainy", "mild"],
//!     ["rainy", "hot"],
//! ])
//! .mapv(Value::from);
//! let y = arr1(&["no", "no", "yes", "yes"]).mapv(Value::from);
//!
//! let mut tree = DecisionTree::default();
//! tree.fit(x.view(), y.view(), None).unwrap();
//!
//! let predictions = tree.predict(x.view()).unwrap();
//! assert_eq!(accuracy(&predictions, &y).unwrap(), 1.0);
//! ```

/// Error type shared by every fallible operation of the crate
pub mod error;
pub use error::ModelError;

/// Attribute values and labels
pub mod value;

/// A macro that generates a getter method for any field.
///
/// This macro creates a public getter method that returns the value or reference
/// of the specified field. The generated method includes appropriate documentation
/// describing the field being accessed.
///
/// # Parameters
///
/// - `$method_name` - The name of the getter method (e.g., get_n_features)
/// - `$field_name` - The name of the field to access (e.g., n_features)
/// - `$return_type` - The return type of the getter method
///
/// # Generated Method
///
/// The macro generates a method that returns the field value,
/// with documentation that describes what field is being accessed.
#[cfg(feature = "machine_learning")]
macro_rules! get_field {
    ($method_name:ident, $field_name:ident, $return_type:ty) => {
        #[doc = concat!("Gets the `", stringify!($field_name), "` field.\n\n")]
        #[doc = "# Returns\n\n"]
        #[doc = concat!("* `", stringify!($return_type), "` - The value of the `", stringify!($field_name), "` field")]
        pub fn $method_name(&self) -> $return_type {
            self.$field_name
        }
    };
}

/// A macro that generates a public getter method returning a reference to an optional field.
///
/// # Parameters
///
/// - `$method_name` - The identifier for the generated getter method name
/// - `$field_name` - The identifier of the struct field to access
/// - `$return_type` - The type expression for the return value (typically `Option<&Type>`)
///
/// # Generated Method
///
/// The macro generates a method that returns the field value as a reference,
/// with documentation that describes what field is being accessed
#[cfg(feature = "machine_learning")]
macro_rules! get_field_as_ref {
    ($method_name:ident, $field_name:ident, $return_type:ty) => {
        #[doc = concat!("Gets the `", stringify!($field_name), "` field.\n\n")]
        #[doc = "# Returns\n\n"]
        #[doc = concat!("* `", stringify!($return_type), "` - The value of the `", stringify!($field_name), "` field as a reference")]
        pub fn $method_name(&self) -> $return_type {
            self.$field_name.as_ref()
        }
    };
}

/// Module `math` contains the impurity measures behind split selection.
///
/// # Core Functions
///
/// - `count_labels` - Builds a label frequency vector from encoded labels
/// - `entropy` - Shannon entropy (base 2) of a frequency vector
/// - `information_gain` - Entropy reduction achieved by a partition
/// - `majority_index` - Most frequent class, lowest index on ties
///
/// # Example
/// ```rust
/// use huntree::math::{entropy, information_gain};
///
/// assert_eq!(entropy(&[2, 2]), 1.0);
/// assert_eq!(information_gain(&[2, 2], &[&[2, 0], &[0, 2]]), 1.0);
/// ```
#[cfg(feature = "math")]
pub mod math;

/// Module `machine_learning` provides the decision tree classifier.
///
/// - **DecisionTree**: Hunt's-algorithm classifier with information gain splits, optional
///   candidate subsampling, depth and size limits, and text serialization
/// - **DecisionTreeParams**: Growth hyperparameters
/// - **SampleSizeMethod**: Subsampling policies for split candidate generation
/// - **Node** / **SplitCondition** / **AttributeType**: The fitted tree model
///
/// # Examples
/// ```rust
/// use huntree::machine_learning::*;
/// use huntree::value::Value;
/// use ndarray::{arr1, arr2};
///
/// let x = arr2(&[[1.0], [2.0], [3.0], [4.0]]).mapv(Value::from);
/// let y = arr1(&[0.0, 0.0, 1.0, 1.0]).mapv(Value::from);
///
/// let mut tree = DecisionTree::new(DecisionTreeParams {
///     max_depth: Some(3),
///     ..DecisionTreeParams::default()
/// });
/// tree.fit(x.view(), y.view(), Some(&[AttributeType::Ordered][..])).unwrap();
/// assert_eq!(tree.leaf_count().unwrap(), 2);
/// ```
#[cfg(feature = "machine_learning")]
pub mod machine_learning;

/// A convenience module that re-exports the most commonly used types and functions from this crate.
///
/// # Examples
/// ```rust
/// use huntree::prelude::*;
///
/// let tree = DecisionTree::new(DecisionTreeParams::default());
/// assert!(tree.predict_one(&[Value::from(1.0)]).is_err());
/// ```
pub mod prelude;

/// Data preparation helpers.
///
/// - **LabelEncoder**: Dense integer codes for raw labels
/// - **train_test_split**: Seeded shuffling split of a dataset into training and test sets
/// - **ordered_train_test_split**: The same split without shuffling
///
/// # Examples
/// ```rust
/// use huntree::utility::train_test_split;
/// use huntree::value::Value;
/// use ndarray::{Array1, Array2};
///
/// let x = Array2::from_shape_fn((10, 2), |(i, j)| Value::from((i * 2 + j) as f64));
/// let y = Array1::from_shape_fn(10, |i| Value::from((i % 2) as f64));
///
/// let (x_train, x_test, y_train, y_test) =
///     train_test_split(x.view(), y.view(), Some(0.3), Some(42)).unwrap();
/// assert_eq!(x_test.nrows(), 3);
/// assert_eq!(x_train.nrows(), 7);
/// assert_eq!(y_test.len() + y_train.len(), 10);
/// ```
#[cfg(feature = "utility")]
pub mod utility;

/// Evaluation of classifier predictions.
///
/// - **accuracy**: Fraction of predictions equal to the actual labels
#[cfg(feature = "metric")]
pub mod metric;
