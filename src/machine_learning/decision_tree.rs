use super::helper_functions::{
    preliminary_check, validate_attribute_types, validate_instance_width, validate_tree_params,
};
use super::*;
use std::fmt;
use std::str::FromStr;

/// Iterative tree construction over an explicit work stack
mod builder;
/// Tree nodes, split conditions and attribute types
pub mod node;
/// Line-based text encoding of fitted trees
mod serialize;
/// Split candidate generation, partitioning and split selection
pub mod split;

use builder::TreeBuilder;
pub use node::*;
pub use split::*;

/// Minimum number of samples required to enable parallel prediction
const PARALLEL_THRESHOLD_SAMPLES: usize = 100;

/// Node size above which [`SampleSizeMethod::for_dataset_size`] picks `Log10`
const LOG10_SAMPLING_THRESHOLD: usize = 100_000;

/// Node size above which [`SampleSizeMethod::for_dataset_size`] picks `Sqrt`
const SQRT_SAMPLING_THRESHOLD: usize = 5_000;

/// Controls how many instances of a node are inspected when split candidates are generated.
///
/// The method maps a node's instance count `n` to a (possibly fractional) sample size,
/// which is rounded up and clamped to `[1, n]`. Inspecting fewer instances bounds the
/// cost of split search on large nodes at the price of a possibly suboptimal split.
///
/// # Variants
///
/// - `All` - Inspect every instance (no subsampling)
/// - `Sqrt` - Inspect `sqrt(n)` instances
/// - `Log10` - Inspect `log10(n)` instances
/// - `Fraction` - Inspect the given share of the instances, in `(0, 1]`
/// - `Custom` - Inspect as many instances as the closure returns
#[derive(Clone, Default)]
pub enum SampleSizeMethod {
    #[default]
    All,
    Sqrt,
    Log10,
    Fraction(f64),
    Custom(Arc<dyn Fn(usize) -> f64 + Send + Sync>),
}

impl SampleSizeMethod {
    /// Wraps a closure as a `Custom` method.
    pub fn custom<F>(method: F) -> Self
    where
        F: Fn(usize) -> f64 + Send + Sync + 'static,
    {
        SampleSizeMethod::Custom(Arc::new(method))
    }

    /// Picks a method by training set size: `Log10` above 100 000 instances, `Sqrt`
    /// above 5 000, and `All` otherwise.
    pub fn for_dataset_size(n_samples: usize) -> Self {
        if n_samples > LOG10_SAMPLING_THRESHOLD {
            SampleSizeMethod::Log10
        } else if n_samples > SQRT_SAMPLING_THRESHOLD {
            SampleSizeMethod::Sqrt
        } else {
            SampleSizeMethod::All
        }
    }

    /// Number of instances to inspect in a node of `n_samples` instances.
    ///
    /// # Parameters
    ///
    /// * `n_samples` - Number of instances in the node
    ///
    /// # Returns
    ///
    /// * `usize` - `ceil(method(n_samples))` clamped to `[1, n_samples]` (0 for an empty node)
    pub fn sample_size(&self, n_samples: usize) -> usize {
        if n_samples == 0 {
            return 0;
        }

        let n = n_samples as f64;
        let raw = match self {
            SampleSizeMethod::All => n,
            SampleSizeMethod::Sqrt => n.sqrt(),
            SampleSizeMethod::Log10 => n.log10(),
            SampleSizeMethod::Fraction(fraction) => n * fraction,
            SampleSizeMethod::Custom(method) => method(n_samples),
        };

        let size = raw.ceil();
        if size.is_nan() || size < 1.0 {
            1
        } else if size >= n {
            n_samples
        } else {
            size as usize
        }
    }
}

impl fmt::Debug for SampleSizeMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SampleSizeMethod::All => f.write_str("All"),
            SampleSizeMethod::Sqrt => f.write_str("Sqrt"),
            SampleSizeMethod::Log10 => f.write_str("Log10"),
            SampleSizeMethod::Fraction(fraction) => {
                f.debug_tuple("Fraction").field(fraction).finish()
            }
            SampleSizeMethod::Custom(_) => f.write_str("Custom(..)"),
        }
    }
}

/// Hyperparameters for controlling decision tree growth.
///
/// # Fields
///
/// - `max_depth` - Maximum depth of the tree, counted in splits from the root. If `None`, nodes are expanded until they are pure, smaller than `min_samples_split`, or have no informative split.
/// - `min_samples_split` - Minimum number of instances a node needs to be considered for splitting. Must be at least 1.
/// - `sample_size_method` - How many instances of each node are inspected to generate split candidates.
/// - `random_state` - Seed for the random source used by candidate subsampling. If `None`, a fresh seed is drawn for every fit.
#[derive(Debug, Clone)]
pub struct DecisionTreeParams {
    pub max_depth: Option<usize>,
    pub min_samples_split: usize,
    pub sample_size_method: SampleSizeMethod,
    pub random_state: Option<u64>,
}

/// Default hyperparameters for decision tree.
///
/// Provides the defaults of the classic algorithm: no depth limit (`max_depth = None`),
/// minimum 2 instances to split (`min_samples_split = 2`), no subsampling
/// (`sample_size_method = SampleSizeMethod::All`) and no random state (`random_state = None`).
impl Default for DecisionTreeParams {
    fn default() -> Self {
        Self {
            max_depth: None,
            min_samples_split: 2,
            sample_size_method: SampleSizeMethod::All,
            random_state: None,
        }
    }
}

/// Binary decision tree classifier grown with Hunt's algorithm.
///
/// Every node is split on the `(attribute, value)` condition with the highest
/// information gain. Ordered attributes split on `value <= threshold`, unordered
/// (categorical) attributes split on `value == category`. Nodes stop growing when
/// they are pure, hit `max_depth`, hold fewer than `min_samples_split` instances or
/// have no split with positive gain; impure leaves predict the majority label.
///
/// # Fields
///
/// - `params` - Hyperparameters controlling tree growth
/// - `root` - The root node of the trained tree, or `None` if not yet fitted
/// - `attribute_types` - Type of every attribute, fixed by the first fit unless given explicitly
/// - `n_features` - Number of attributes in the training data
/// - `n_classes` - Number of distinct labels in the training data; `None` before fitting or after deserializing
///
/// # Example
/// ```rust
/// use huntree::machine_learning::{DecisionTree, DecisionTreeParams};
/// use huntree::value::Value;
/// use ndarray::{arr1, arr2};
///
/// let x = arr2(&[[1.0, 0.0], [2.0, 0.0], [3.0, 1.0], [4.0, 1.0]]).mapv(Value::from);
/// let y = arr1(&["low", "low", "high", "high"]).mapv(Value::from);
///
/// let params = DecisionTreeParams {
///     random_state: Some(42),
///     ..DecisionTreeParams::default()
/// };
/// let mut tree = DecisionTree::new(params);
/// tree.fit(x.view(), y.view(), None).unwrap();
///
/// let instance = [Value::from(3.5), Value::from(1.0)];
/// assert_eq!(tree.predict_one(&instance).unwrap(), Value::from("high"));
/// assert_eq!(tree.decision_path_one(&instance).unwrap(), "R-high");
///
/// let text = tree.serialize().unwrap();
/// let restored: DecisionTree = text.parse().unwrap();
/// assert_eq!(restored.predict(x.view()).unwrap(), tree.predict(x.view()).unwrap());
/// ```
#[derive(Debug, Clone)]
pub struct DecisionTree {
    params: DecisionTreeParams,
    root: Option<Box<Node>>,
    attribute_types: Option<Vec<AttributeType>>,
    n_features: usize,
    n_classes: Option<usize>,
}

impl Default for DecisionTree {
    fn default() -> Self {
        Self::new(DecisionTreeParams::default())
    }
}

impl DecisionTree {
    /// Creates a new, unfitted decision tree.
    ///
    /// # Parameters
    ///
    /// * `params` - Hyperparameters controlling tree growth
    ///
    /// # Returns
    ///
    /// * `DecisionTree` - A new untrained `DecisionTree` instance
    pub fn new(params: DecisionTreeParams) -> Self {
        Self {
            params,
            root: None,
            attribute_types: None,
            n_features: 0,
            n_classes: None,
        }
    }

    // Getters
    get_field!(get_n_features, n_features, usize);
    get_field!(get_n_classes, n_classes, Option<usize>);
    get_field_as_ref!(get_root, root, Option<&Box<Node>>);
    get_field_as_ref!(
        get_attribute_types,
        attribute_types,
        Option<&Vec<AttributeType>>
    );

    /// Gets the hyperparameters of this tree.
    pub fn get_parameters(&self) -> &DecisionTreeParams {
        &self.params
    }

    /// Trains the decision tree on the provided training data.
    ///
    /// The random source for candidate subsampling is seeded from `random_state`,
    /// or from the thread-local generator when no seed is set.
    ///
    /// # Parameters
    ///
    /// - `x` - Training instances with shape (n_samples, n_features)
    /// - `y` - Raw labels with shape (n_samples,)
    /// - `attribute_types` - Type of every attribute. If `None`, the types of a previous fit are reused, or else inferred from the first instance (numbers are ordered, tokens are unordered)
    ///
    /// # Returns
    ///
    /// - `Ok(&mut Self)` - A mutable reference to `self` for method chaining
    /// - `Err(ModelError::InputValidationError)` - If the data is empty, `x` and `y` differ in length, the attribute types do not match the width of `x`, a number is NaN or infinite, or the parameters are invalid
    pub fn fit(
        &mut self,
        x: ArrayView2<Value>,
        y: ArrayView1<Value>,
        attribute_types: Option<&[AttributeType]>,
    ) -> Result<&mut Self, ModelError> {
        let mut rng = match self.params.random_state {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_rng(&mut rand::rng()),
        };
        self.fit_with_rng(x, y, attribute_types, &mut rng)
    }

    /// Trains the decision tree using the given random source for candidate subsampling.
    ///
    /// Identical data, parameters and random source state always produce the same tree.
    /// `random_state` is ignored.
    ///
    /// # Parameters
    ///
    /// - `x` - Training instances with shape (n_samples, n_features)
    /// - `y` - Raw labels with shape (n_samples,)
    /// - `attribute_types` - Type of every attribute, see [`DecisionTree::fit`]
    /// - `rng` - Random source
    ///
    /// # Returns
    ///
    /// * `Result<&mut Self, ModelError>` - A mutable reference to `self` for method chaining, or a `ModelError` if training fails
    pub fn fit_with_rng<R: Rng>(
        &mut self,
        x: ArrayView2<Value>,
        y: ArrayView1<Value>,
        attribute_types: Option<&[AttributeType]>,
        rng: &mut R,
    ) -> Result<&mut Self, ModelError> {
        preliminary_check(x, Some(y))?;
        validate_tree_params(&self.params)?;

        let n_features = x.ncols();
        let attribute_types = match (attribute_types, &self.attribute_types) {
            (Some(types), _) => types.to_vec(),
            (None, Some(types)) => types.clone(),
            (None, None) => x.row(0).iter().map(AttributeType::infer).collect(),
        };
        validate_attribute_types(&attribute_types, n_features)?;

        let (encoder, codes) = LabelEncoder::fit_transform(y.iter());
        tracing::debug!(
            n_samples = x.nrows(),
            n_features,
            n_classes = encoder.n_classes(),
            "fitting decision tree"
        );

        let view = TrainingView {
            x: x.reborrow(),
            codes: &codes,
            attribute_types: &attribute_types,
            n_classes: encoder.n_classes(),
        };
        let root = TreeBuilder::new(view, &encoder, &self.params, rng).build()?;
        tracing::debug!(
            n_nodes = root.node_count(),
            depth = root.depth(),
            "decision tree fitted"
        );

        self.root = Some(Box::new(root));
        self.attribute_types = Some(attribute_types);
        self.n_features = n_features;
        self.n_classes = Some(encoder.n_classes());

        Ok(self)
    }

    fn fitted(&self) -> Result<(&Node, &[AttributeType]), ModelError> {
        match (&self.root, &self.attribute_types) {
            (Some(root), Some(types)) => Ok((&**root, types.as_slice())),
            _ => Err(ModelError::NotFitted),
        }
    }

    /// Predicts the label of a single instance.
    ///
    /// # Parameters
    ///
    /// * `x` - Attribute values of one instance, in training order
    ///
    /// # Returns
    ///
    /// - `Ok(Value)` - The label of the leaf the instance reaches
    /// - `Err(ModelError::NotFitted)` - If the tree has not been fitted
    /// - `Err(ModelError::InputValidationError)` - If the instance width differs from the training width
    pub fn predict_one(&self, x: &[Value]) -> Result<Value, ModelError> {
        let (root, types) = self.fitted()?;
        validate_instance_width(x.len(), self.n_features)?;
        Ok(root.evaluate(ArrayView1::from(x), types).clone())
    }

    /// Predicts the labels of a batch of instances, in parallel for large batches.
    ///
    /// # Parameters
    ///
    /// * `x` - Instances with shape (n_samples, n_features)
    ///
    /// # Returns
    ///
    /// * `Result<Array1<Value>, ModelError>` - One label per instance, in input order
    pub fn predict(&self, x: ArrayView2<Value>) -> Result<Array1<Value>, ModelError> {
        let (root, types) = self.fitted()?;
        validate_instance_width(x.ncols(), self.n_features)?;

        let predict_row = |row: ArrayView1<Value>| root.evaluate(row, types).clone();
        let predictions: Vec<Value> = if x.nrows() >= PARALLEL_THRESHOLD_SAMPLES {
            x.axis_iter(Axis(0)).into_par_iter().map(predict_row).collect()
        } else {
            x.axis_iter(Axis(0)).map(predict_row).collect()
        };

        Ok(Array1::from_vec(predictions))
    }

    /// Trains the tree on training data and immediately predicts test data.
    ///
    /// # Parameters
    ///
    /// - `x_train` - Training instances with shape (n_train_samples, n_features)
    /// - `y_train` - Training labels with shape (n_train_samples,)
    /// - `x_test` - Test instances with shape (n_test_samples, n_features)
    ///
    /// # Returns
    ///
    /// * `Result<Array1<Value>, ModelError>` - Predictions for the test data, or a `ModelError` if training or prediction fails
    pub fn fit_predict(
        &mut self,
        x_train: ArrayView2<Value>,
        y_train: ArrayView1<Value>,
        x_test: ArrayView2<Value>,
    ) -> Result<Array1<Value>, ModelError> {
        self.fit(x_train, y_train, None)?;
        self.predict(x_test)
    }

    /// Describes the route of a single instance through the tree.
    ///
    /// # Parameters
    ///
    /// * `x` - Attribute values of one instance, in training order
    ///
    /// # Returns
    ///
    /// * `Result<String, ModelError>` - `L`/`R` for every decision followed by the reached label, joined by `-` (e.g. `L-R-1`)
    pub fn decision_path_one(&self, x: &[Value]) -> Result<String, ModelError> {
        let (root, types) = self.fitted()?;
        validate_instance_width(x.len(), self.n_features)?;
        Ok(root.decision_path(ArrayView1::from(x), types))
    }

    /// Describes the routes of a batch of instances, see [`DecisionTree::decision_path_one`].
    ///
    /// # Parameters
    ///
    /// * `x` - Instances with shape (n_samples, n_features)
    ///
    /// # Returns
    ///
    /// * `Result<Vec<String>, ModelError>` - One path per instance, in input order
    pub fn decision_path(&self, x: ArrayView2<Value>) -> Result<Vec<String>, ModelError> {
        let (root, types) = self.fitted()?;
        validate_instance_width(x.ncols(), self.n_features)?;

        let path_of = |row: ArrayView1<Value>| root.decision_path(row, types);
        Ok(if x.nrows() >= PARALLEL_THRESHOLD_SAMPLES {
            x.axis_iter(Axis(0)).into_par_iter().map(path_of).collect()
        } else {
            x.axis_iter(Axis(0)).map(path_of).collect()
        })
    }

    /// Total number of nodes in the fitted tree.
    pub fn node_count(&self) -> Result<usize, ModelError> {
        Ok(self.fitted()?.0.node_count())
    }

    /// Number of leaves in the fitted tree.
    pub fn leaf_count(&self) -> Result<usize, ModelError> {
        Ok(self.fitted()?.0.leaf_count())
    }

    /// Number of internal (splitting) nodes in the fitted tree.
    pub fn internal_count(&self) -> Result<usize, ModelError> {
        Ok(self.fitted()?.0.internal_count())
    }

    /// Number of levels of the fitted tree; a tree that is a single leaf has depth 1.
    pub fn depth(&self) -> Result<usize, ModelError> {
        Ok(self.fitted()?.0.depth())
    }

    /// Encodes the fitted tree as text.
    ///
    /// The first line lists the attribute types (`o` for ordered, `u` for unordered).
    /// Each further line is one node in pre-order: a leaf is written as its label, an
    /// internal node as `<attribute>-<value>`, followed by its left and then its right
    /// subtree. Inside labels and values `\`, `-`, line feed and carriage return are
    /// escaped with a backslash, and tokens that would read back as numbers are
    /// prefixed with `'`.
    ///
    /// # Returns
    ///
    /// * `Result<String, ModelError>` - The encoded tree, or `ModelError::NotFitted`
    pub fn serialize(&self) -> Result<String, ModelError> {
        let (root, types) = self.fitted()?;
        Ok(serialize::encode(types, root))
    }

    /// Rebuilds a tree from the output of [`DecisionTree::serialize`].
    ///
    /// The restored tree classifies exactly like the serialized one. It carries default
    /// parameters and no class count.
    ///
    /// # Parameters
    ///
    /// * `text` - An encoded tree
    ///
    /// # Returns
    ///
    /// - `Ok(DecisionTree)` - The restored, fitted tree
    /// - `Err(ModelError::ParseError)` - If the text is malformed or truncated
    pub fn deserialize(text: &str) -> Result<Self, ModelError> {
        let (attribute_types, root) = serialize::decode(text)?;
        Ok(Self {
            params: DecisionTreeParams::default(),
            n_features: attribute_types.len(),
            root: Some(Box::new(root)),
            attribute_types: Some(attribute_types),
            n_classes: None,
        })
    }

    /// Generates a human-readable string representation of the decision tree structure.
    ///
    /// Internal nodes show their condition (`name <= value` for ordered attributes,
    /// `name == value` for unordered ones); the left child, which holds the instances
    /// satisfying the condition, is listed first.
    ///
    /// # Parameters
    ///
    /// * `feature_names` - Optional attribute names; attributes without a name are shown as `feature[i]`
    ///
    /// # Returns
    ///
    /// * `Result<String, ModelError>` - A formatted string containing the tree structure, or a `ModelError::NotFitted` if the model hasn't been trained yet
    pub fn generate_tree_structure(
        &self,
        feature_names: Option<&[&str]>,
    ) -> Result<String, ModelError> {
        let (root, types) = self.fitted()?;

        let mut output = String::from("Decision Tree Structure:\n");
        let mut pending = vec![(root, String::new(), true)];
        while let Some((node, prefix, is_last)) = pending.pop() {
            let connector = if is_last { "└── " } else { "├── " };
            output.push_str(&prefix);
            output.push_str(connector);

            match node {
                Node::Leaf { label } => output.push_str(&format!("Leaf: {}\n", label)),
                Node::Internal {
                    condition,
                    left,
                    right,
                } => {
                    let name = feature_names
                        .and_then(|names| names.get(condition.attribute))
                        .map(|name| name.to_string())
                        .unwrap_or_else(|| format!("feature[{}]", condition.attribute));
                    let operator = match types[condition.attribute] {
                        AttributeType::Ordered => "<=",
                        AttributeType::Unordered => "==",
                    };
                    output.push_str(&format!(
                        "Split: {} {} {}\n",
                        name, operator, condition.value
                    ));

                    let child_prefix = format!("{}{}", prefix, if is_last { "    " } else { "│   " });
                    pending.push((&**right, child_prefix.clone(), true));
                    pending.push((&**left, child_prefix, false));
                }
            }
        }
        Ok(output)
    }
}

impl FromStr for DecisionTree {
    type Err = ModelError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        Self::deserialize(text)
    }
}
