use super::*;

/// Bijective mapping between raw labels and dense integer codes.
///
/// Codes are assigned in order of first occurrence, starting at 0 and without gaps,
/// so a model can keep per-class statistics in plain vectors indexed by code.
///
/// # Fields
///
/// - `classes` - Raw label for every code, indexed by code
/// - `codes` - Lookup table from raw label to code
///
/// # Examples
///
/// ```rust
/// use huntree::utility::LabelEncoder;
/// use huntree::value::Value;
///
/// let labels = vec![Value::from("cat"), Value::from("dog"), Value::from("cat")];
/// let (encoder, codes) = LabelEncoder::fit_transform(&labels);
///
/// assert_eq!(codes, vec![0, 1, 0]);
/// assert_eq!(encoder.n_classes(), 2);
/// assert_eq!(encoder.decode(1), Some(&Value::from("dog")));
/// ```
#[derive(Debug, Clone, Default)]
pub struct LabelEncoder {
    classes: Vec<Value>,
    codes: AHashMap<Value, usize>,
}

impl LabelEncoder {
    /// Builds the encoding from a label sequence.
    ///
    /// # Parameters
    ///
    /// * `labels` - Raw labels in dataset order
    ///
    /// # Returns
    ///
    /// * `LabelEncoder` - An encoder with one code per distinct label
    pub fn fit<'a, I>(labels: I) -> Self
    where
        I: IntoIterator<Item = &'a Value>,
    {
        let mut encoder = Self::default();
        for label in labels {
            if !encoder.codes.contains_key(label) {
                encoder.codes.insert(label.clone(), encoder.classes.len());
                encoder.classes.push(label.clone());
            }
        }
        encoder
    }

    /// Builds the encoding and encodes the same labels in one pass.
    ///
    /// # Parameters
    ///
    /// * `labels` - Raw labels in dataset order
    ///
    /// # Returns
    ///
    /// * `(LabelEncoder, Vec<usize>)` - The encoder and the code of every label, in input order
    pub fn fit_transform<'a, I>(labels: I) -> (Self, Vec<usize>)
    where
        I: IntoIterator<Item = &'a Value>,
    {
        let mut encoder = Self::default();
        let codes = labels
            .into_iter()
            .map(|label| match encoder.codes.get(label) {
                Some(&code) => code,
                None => {
                    let code = encoder.classes.len();
                    encoder.codes.insert(label.clone(), code);
                    encoder.classes.push(label.clone());
                    code
                }
            })
            .collect();
        (encoder, codes)
    }

    /// Encodes labels with an existing encoding.
    ///
    /// # Parameters
    ///
    /// * `labels` - Raw labels to encode
    ///
    /// # Returns
    ///
    /// - `Ok(Vec<usize>)` - The code of every label, in input order
    /// - `Err(ModelError::InputValidationError)` - If a label was not seen when the encoder was built
    pub fn transform<'a, I>(&self, labels: I) -> Result<Vec<usize>, ModelError>
    where
        I: IntoIterator<Item = &'a Value>,
    {
        labels
            .into_iter()
            .map(|label| {
                self.encode(label).ok_or_else(|| {
                    ModelError::InputValidationError(format!("Unknown label: {}", label))
                })
            })
            .collect()
    }

    /// Returns the code of `label`, if it is known.
    pub fn encode(&self, label: &Value) -> Option<usize> {
        self.codes.get(label).copied()
    }

    /// Returns the raw label behind `code`, if it is in range.
    pub fn decode(&self, code: usize) -> Option<&Value> {
        self.classes.get(code)
    }

    /// Number of distinct labels.
    pub fn n_classes(&self) -> usize {
        self.classes.len()
    }

    /// Raw labels indexed by code.
    pub fn classes(&self) -> &[Value] {
        &self.classes
    }
}
