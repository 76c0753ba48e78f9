use super::*;

/// Default share of samples that goes to the test set
const DEFAULT_TEST_SIZE: f64 = 0.2;

/// Splits a dataset into training and test sets
///
/// The test set receives `floor(n_samples * test_size)` randomly chosen samples
/// (possibly none); every remaining sample goes to the training set.
///
/// # Parameters
///
/// - `x` - Feature matrix with shape (n_samples, n_features)
/// - `y` - Labels with shape (n_samples)
/// - `test_size` - Share of the samples placed in the test set, in `[0, 1)`, default is 0.2 (20%)
/// - `random_state` - Random seed, default is None
///
/// # Returns
///
/// - `Result<(Array2<Value>, Array2<Value>, Array1<Value>, Array1<Value>), ModelError>` - Returns a tuple `(x_train, x_test, y_train, y_test)` if processing successfully
///
/// # Errors
///
/// - Returns `ModelError::InputValidationError` if the dataset is empty, if `x` and `y` have different lengths, or if `test_size` is not in `[0, 1)`.
///
/// # Example
/// ```rust
/// use huntree::utility::train_test_split;
/// use huntree::value::Value;
/// use ndarray::{arr1, arr2};
///
/// let x = arr2(&[[1.0, 2.0], [3.0, 4.0], [5.0, 6.0], [7.0, 8.0], [9.0, 10.0]]).mapv(Value::from);
/// let y = arr1(&[0.0, 1.0, 0.0, 1.0, 0.0]).mapv(Value::from);
/// let (x_train, x_test, y_train, y_test) =
///     train_test_split(x.view(), y.view(), Some(0.4), Some(42)).unwrap();
/// assert_eq!(x_test.nrows(), 2);
/// assert_eq!(y_train.len(), 3);
/// ```
pub fn train_test_split(
    x: ArrayView2<Value>,
    y: ArrayView1<Value>,
    test_size: Option<f64>,
    random_state: Option<u64>,
) -> Result<(Array2<Value>, Array2<Value>, Array1<Value>, Array1<Value>), ModelError> {
    let (n_samples, n_test) = validate_split(x, y, test_size)?;

    let mut indices: Vec<usize> = (0..n_samples).collect();
    match random_state {
        Some(seed) => indices.shuffle(&mut StdRng::seed_from_u64(seed)),
        None => indices.shuffle(&mut rand::rng()),
    }

    Ok(select_split(x, y, &indices, n_test))
}

/// Splits a dataset into training and test sets without shuffling
///
/// The first `floor(n_samples * test_size)` samples form the test set and the rest
/// form the training set, both in their original order.
///
/// # Parameters
///
/// - `x` - Feature matrix with shape (n_samples, n_features)
/// - `y` - Labels with shape (n_samples)
/// - `test_size` - Share of the samples placed in the test set, in `[0, 1)`, default is 0.2 (20%)
///
/// # Returns
///
/// - `Result<(Array2<Value>, Array2<Value>, Array1<Value>, Array1<Value>), ModelError>` - Returns a tuple `(x_train, x_test, y_train, y_test)` if processing successfully
///
/// # Errors
///
/// Same as [`train_test_split`].
///
/// # Example
/// ```rust
/// use huntree::utility::ordered_train_test_split;
/// use huntree::value::Value;
/// use ndarray::{arr1, arr2};
///
/// let x = arr2(&[[1.0], [2.0], [3.0], [4.0], [5.0]]).mapv(Value::from);
/// let y = arr1(&[0.0, 1.0, 0.0, 1.0, 0.0]).mapv(Value::from);
/// let (x_train, x_test, _, _) = ordered_train_test_split(x.view(), y.view(), Some(0.4)).unwrap();
/// assert_eq!(x_test, arr2(&[[1.0], [2.0]]).mapv(Value::from));
/// assert_eq!(x_train.nrows(), 3);
/// ```
pub fn ordered_train_test_split(
    x: ArrayView2<Value>,
    y: ArrayView1<Value>,
    test_size: Option<f64>,
) -> Result<(Array2<Value>, Array2<Value>, Array1<Value>, Array1<Value>), ModelError> {
    let (n_samples, n_test) = validate_split(x, y, test_size)?;
    let indices: Vec<usize> = (0..n_samples).collect();

    Ok(select_split(x, y, &indices, n_test))
}

/// Checks the inputs of a split, returning the sample count and the test set size
fn validate_split(
    x: ArrayView2<Value>,
    y: ArrayView1<Value>,
    test_size: Option<f64>,
) -> Result<(usize, usize), ModelError> {
    let n_samples = x.nrows();

    if n_samples == 0 {
        return Err(ModelError::InputValidationError(
            "Cannot split empty dataset".to_string(),
        ));
    }

    if n_samples != y.len() {
        return Err(ModelError::InputValidationError(format!(
            "x and y must have the same number of samples, x rows: {}, y length: {}",
            n_samples,
            y.len()
        )));
    }

    let test_size = test_size.unwrap_or(DEFAULT_TEST_SIZE);
    if !(0.0..1.0).contains(&test_size) {
        return Err(ModelError::InputValidationError(format!(
            "test_size must be in [0, 1), got {}",
            test_size
        )));
    }

    Ok((n_samples, (n_samples as f64 * test_size).floor() as usize))
}

// The first `n_test` entries of `indices` go to the test set
fn select_split(
    x: ArrayView2<Value>,
    y: ArrayView1<Value>,
    indices: &[usize],
    n_test: usize,
) -> (Array2<Value>, Array2<Value>, Array1<Value>, Array1<Value>) {
    let (test_indices, train_indices) = indices.split_at(n_test);

    let x_train = x.select(Axis(0), train_indices);
    let x_test = x.select(Axis(0), test_indices);
    let y_train = y.select(Axis(0), train_indices);
    let y_test = y.select(Axis(0), test_indices);

    (x_train, x_test, y_train, y_test)
}
