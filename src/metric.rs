use crate::error::ModelError;
use crate::value::Value;
use ndarray::{ArrayBase, Data, Ix1};

/// Calculates the accuracy of a classification model.
///
/// Accuracy is the share of positions where the predicted label equals the actual
/// label. Labels are compared with [`Value`] equality, so numeric and textual
/// labels can be scored alike.
///
/// # Parameters
///
/// - `predicted` - Predicted labels
/// - `actual` - Ground-truth labels
///
/// # Returns
///
/// - `Ok(f64)` - Accuracy in the range \[0.0, 1.0\]
/// - `Err(ModelError::InputValidationError)` - If the inputs are empty or differ in length
///
/// # Examples
/// ```rust
/// use huntree::metric::accuracy;
/// use huntree::value::Value;
/// use ndarray::arr1;
///
/// let predicted = arr1(&["a", "b", "a", "a"]).mapv(Value::from);
/// let actual = arr1(&["a", "b", "b", "a"]).mapv(Value::from);
/// assert_eq!(accuracy(&predicted, &actual).unwrap(), 0.75);
/// ```
pub fn accuracy<S1, S2>(
    predicted: &ArrayBase<S1, Ix1>,
    actual: &ArrayBase<S2, Ix1>,
) -> Result<f64, ModelError>
where
    S1: Data<Elem = Value>,
    S2: Data<Elem = Value>,
{
    if predicted.len() != actual.len() {
        return Err(ModelError::InputValidationError(format!(
            "Input arrays must have the same length. Predicted: {}, Actual: {}",
            predicted.len(),
            actual.len()
        )));
    }

    if predicted.is_empty() {
        return Err(ModelError::InputValidationError(
            "Input arrays must not be empty".to_string(),
        ));
    }

    let correct_predictions = predicted
        .iter()
        .zip(actual.iter())
        .filter(|&(p, a)| p == a)
        .count();

    Ok(correct_predictions as f64 / predicted.len() as f64)
}
