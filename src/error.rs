/// Error types that can occur during model operations
///
/// # Variants
///
/// - `NotFitted` - Indicates that the model has not been fitted yet
/// - `InputValidationError` - indicates the input data provided does not meet the expected format, type, or validation rules
/// - `TreeError` - indicates that there is something wrong with the tree
/// - `ParseError` - indicates that a serialized tree could not be decoded; `line` is 1-based
#[derive(Debug, Clone, PartialEq)]
pub enum ModelError {
    NotFitted,
    InputValidationError(String),
    TreeError(&'static str),
    ParseError { line: usize, message: String },
}

impl ModelError {
    pub(crate) fn parse(line: usize, message: impl Into<String>) -> Self {
        ModelError::ParseError {
            line,
            message: message.into(),
        }
    }
}

impl std::fmt::Display for ModelError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ModelError::NotFitted => {
                write!(
                    f,
                    "Model has not been fitted. Certain methods require the model to be fitted before use."
                )
            }
            ModelError::InputValidationError(msg) => write!(f, "Input validation error: {}", msg),
            ModelError::TreeError(msg) => write!(f, "Tree structure error: {}", msg),
            ModelError::ParseError { line, message } => {
                write!(f, "Parse error at line {}: {}", line, message)
            }
        }
    }
}

/// Implements the standard error trait for ModelError
impl std::error::Error for ModelError {}
