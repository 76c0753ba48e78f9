use super::*;

/// Performs validation checks on a training dataset.
///
/// This function validates that:
/// - The feature matrix is not empty
/// - No numeric value in the feature matrix is NaN or infinite
/// - When labels are provided:
///   - The label vector length matches the number of rows in the feature matrix
///   - No numeric label is NaN or infinite
///
/// # Parameters
///
/// - `x` - Feature matrix where rows represent instances and columns represent attributes
/// - `y` - Optional label vector corresponding to each instance
///
/// # Returns
///
/// - `Ok(())` - If all validation checks pass
/// - `Err(ModelError::InputValidationError)` - If any validation check fails, with an informative error message
pub fn preliminary_check(
    x: ArrayView2<Value>,
    y: Option<ArrayView1<Value>>,
) -> Result<(), ModelError> {
    if x.nrows() == 0 {
        return Err(ModelError::InputValidationError(
            "Input data is empty".to_string(),
        ));
    }

    if let Some(y) = y {
        if y.len() != x.nrows() {
            return Err(ModelError::InputValidationError(format!(
                "Input data and target vector have different lengths, x rows: {}, y length: {}",
                x.nrows(),
                y.len()
            )));
        }

        if let Some(i) = y.iter().position(is_non_finite) {
            return Err(ModelError::InputValidationError(format!(
                "Target vector contains NaN or infinite value at position [{}]",
                i
            )));
        }
    }

    for (i, row) in x.outer_iter().enumerate() {
        if let Some(j) = row.iter().position(is_non_finite) {
            return Err(ModelError::InputValidationError(format!(
                "Input data contains NaN or infinite value at position [{}][{}]",
                i, j
            )));
        }
    }

    Ok(())
}

fn is_non_finite(value: &Value) -> bool {
    value.as_number().is_some_and(|number| !number.is_finite())
}

/// Validates that an attribute type vector describes every attribute exactly once.
///
/// # Parameters
///
/// - `attribute_types` - One type per attribute position
/// - `n_features` - Width of the instances the types describe
///
/// # Returns
///
/// - `Ok(())` - If the lengths agree
/// - `Err(ModelError::InputValidationError)` - If they do not
pub fn validate_attribute_types(
    attribute_types: &[AttributeType],
    n_features: usize,
) -> Result<(), ModelError> {
    if attribute_types.len() != n_features {
        return Err(ModelError::InputValidationError(format!(
            "Expected {} attribute types, got {}",
            n_features,
            attribute_types.len()
        )));
    }

    Ok(())
}

/// Validates the growth parameters of a decision tree.
///
/// - `min_samples_split` must be at least 1
/// - A `SampleSizeMethod::Fraction` must lie in `(0, 1]`
///
/// # Parameters
///
/// * `params` - The hyperparameters to validate
///
/// # Returns
///
/// - `Ok(())` - If the parameters are valid
/// - `Err(ModelError::InputValidationError)` - If a parameter is out of range
///
/// # Side Effects
///
/// - Logs a warning if `max_depth` is `Some(0)`, which always yields a single leaf
pub fn validate_tree_params(params: &DecisionTreeParams) -> Result<(), ModelError> {
    if params.min_samples_split == 0 {
        return Err(ModelError::InputValidationError(
            "min_samples_split must be at least 1".to_string(),
        ));
    }

    if let SampleSizeMethod::Fraction(fraction) = params.sample_size_method {
        if !(fraction > 0.0 && fraction <= 1.0) {
            return Err(ModelError::InputValidationError(format!(
                "Sample fraction must be in (0, 1], got {}",
                fraction
            )));
        }
    }

    if params.max_depth == Some(0) {
        tracing::warn!("max_depth is 0, the tree will always be a single leaf");
    }

    Ok(())
}

/// Checks that a single instance has the width the model was trained on.
///
/// # Parameters
///
/// - `width` - Number of attributes in the instance
/// - `n_features` - Number of attributes seen during training
///
/// # Returns
///
/// - `Ok(())` - If the widths agree
/// - `Err(ModelError::InputValidationError)` - If they do not
pub fn validate_instance_width(width: usize, n_features: usize) -> Result<(), ModelError> {
    if width != n_features {
        return Err(ModelError::InputValidationError(format!(
            "Feature dimension mismatch, expected {} attributes, got {}",
            n_features, width
        )));
    }

    Ok(())
}
