use super::*;

/// How an attribute is compared when it is split on.
///
/// # Variants
///
/// - `Ordered` - Numeric-style attribute; an instance goes left when its value is `<=` the split value
/// - `Unordered` - Categorical attribute; an instance goes left when its value equals the split value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AttributeType {
    Ordered,
    Unordered,
}

impl AttributeType {
    /// Infers the type of an attribute from one of its values: numbers are ordered, tokens are not.
    pub fn infer(value: &Value) -> Self {
        if value.is_number() {
            AttributeType::Ordered
        } else {
            AttributeType::Unordered
        }
    }

    /// Single-character tag used in the textual tree format.
    pub fn tag(self) -> char {
        match self {
            AttributeType::Ordered => 'o',
            AttributeType::Unordered => 'u',
        }
    }

    /// Inverse of [`AttributeType::tag`].
    pub fn from_tag(tag: char) -> Option<Self> {
        match tag {
            'o' => Some(AttributeType::Ordered),
            'u' => Some(AttributeType::Unordered),
            _ => None,
        }
    }
}

/// A binary test on one attribute.
///
/// The same predicate decides the branch while candidates are scored, while the
/// training data is partitioned and while instances are classified.
///
/// # Fields
///
/// - `attribute` - Index of the tested attribute
/// - `value` - Threshold (ordered attributes) or category (unordered attributes)
#[derive(Debug, Clone, PartialEq)]
pub struct SplitCondition {
    pub attribute: usize,
    pub value: Value,
}

impl SplitCondition {
    pub fn new(attribute: usize, value: Value) -> Self {
        Self { attribute, value }
    }

    /// Tests a single attribute value against this condition.
    ///
    /// # Parameters
    ///
    /// - `value` - The instance's value for `self.attribute`
    /// - `attribute_type` - The type of `self.attribute`
    ///
    /// # Returns
    ///
    /// * `bool` - `true` if the instance belongs to the left branch
    #[inline]
    pub fn admits(&self, value: &Value, attribute_type: AttributeType) -> bool {
        match attribute_type {
            AttributeType::Ordered => *value <= self.value,
            AttributeType::Unordered => *value == self.value,
        }
    }

    /// Tests a whole instance against this condition.
    ///
    /// # Parameters
    ///
    /// - `instance` - Attribute values of one instance
    /// - `attribute_types` - Type of every attribute
    ///
    /// # Returns
    ///
    /// * `bool` - `true` if the instance belongs to the left branch
    ///
    /// # Panics
    ///
    /// Panics if `self.attribute` is out of range for `instance` or `attribute_types`.
    #[inline]
    pub fn goes_left(&self, instance: ArrayView1<Value>, attribute_types: &[AttributeType]) -> bool {
        self.admits(&instance[self.attribute], attribute_types[self.attribute])
    }
}

/// A node of a fitted tree.
///
/// # Variants
///
/// - `Leaf` - Terminal node holding the predicted raw label
/// - `Internal` - Decision node; instances admitted by `condition` continue in `left`, all others in `right`
///
/// Traversals, cloning, comparison, debug formatting and dropping all work from an
/// explicit stack, so a degenerate tree as deep as the training set does not
/// exhaust the call stack.
pub enum Node {
    Leaf {
        label: Value,
    },
    Internal {
        condition: SplitCondition,
        left: Box<Node>,
        right: Box<Node>,
    },
}

impl Node {
    /// Creates a new leaf node.
    pub fn new_leaf(label: Value) -> Self {
        Node::Leaf { label }
    }

    /// Creates a new internal node from its condition and both subtrees.
    pub fn new_internal(condition: SplitCondition, left: Node, right: Node) -> Self {
        Node::Internal {
            condition,
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self, Node::Leaf { .. })
    }

    /// Follows `instance` down to a leaf and returns that leaf's label.
    ///
    /// The instance must have the attribute count and order of the training data.
    pub fn evaluate(&self, instance: ArrayView1<Value>, attribute_types: &[AttributeType]) -> &Value {
        let mut node = self;
        loop {
            match node {
                Node::Leaf { label } => return label,
                Node::Internal {
                    condition,
                    left,
                    right,
                } => {
                    node = if condition.goes_left(instance, attribute_types) {
                        &**left
                    } else {
                        &**right
                    };
                }
            }
        }
    }

    /// Same walk as [`Node::evaluate`], recording `L` or `R` for every decision and
    /// ending with the leaf label, all joined by `-` (e.g. `L-R-yes`).
    pub fn decision_path(
        &self,
        instance: ArrayView1<Value>,
        attribute_types: &[AttributeType],
    ) -> String {
        let mut steps = Vec::new();
        let mut node = self;
        loop {
            match node {
                Node::Leaf { label } => {
                    steps.push(label.to_string());
                    return steps.join("-");
                }
                Node::Internal {
                    condition,
                    left,
                    right,
                } => {
                    if condition.goes_left(instance, attribute_types) {
                        steps.push("L".to_string());
                        node = &**left;
                    } else {
                        steps.push("R".to_string());
                        node = &**right;
                    }
                }
            }
        }
    }

    /// Total number of nodes in this subtree.
    pub fn node_count(&self) -> usize {
        self.fold_levels().0
    }

    /// Number of leaves in this subtree.
    pub fn leaf_count(&self) -> usize {
        self.fold_levels().1
    }

    /// Number of non-leaf nodes in this subtree.
    pub fn internal_count(&self) -> usize {
        let (nodes, leaves, _) = self.fold_levels();
        nodes - leaves
    }

    /// Number of levels in this subtree; a lone leaf has depth 1.
    pub fn depth(&self) -> usize {
        self.fold_levels().2
    }

    // (nodes, leaves, depth) in a single walk
    fn fold_levels(&self) -> (usize, usize, usize) {
        let (mut nodes, mut leaves, mut depth) = (0, 0, 0);
        let mut pending = vec![(self, 1)];
        while let Some((node, level)) = pending.pop() {
            nodes += 1;
            depth = depth.max(level);
            match node {
                Node::Leaf { .. } => leaves += 1,
                Node::Internal { left, right, .. } => {
                    pending.push((&**right, level + 1));
                    pending.push((&**left, level + 1));
                }
            }
        }
        (nodes, leaves, depth)
    }

    // Copy of this node with placeholder children
    fn shallow_clone(&self) -> Node {
        match self {
            Node::Leaf { label } => Node::new_leaf(label.clone()),
            Node::Internal { condition, .. } => Node::Internal {
                condition: condition.clone(),
                left: Node::placeholder(),
                right: Node::placeholder(),
            },
        }
    }

    fn placeholder() -> Box<Node> {
        Box::new(Node::Leaf {
            label: Value::Number(0.0),
        })
    }
}

impl Drop for Node {
    fn drop(&mut self) {
        let mut pending = Vec::new();
        if let Node::Internal { left, right, .. } = self {
            pending.push(std::mem::replace(left, Node::placeholder()));
            pending.push(std::mem::replace(right, Node::placeholder()));
        }
        while let Some(mut node) = pending.pop() {
            if let Node::Internal { left, right, .. } = node.as_mut() {
                pending.push(std::mem::replace(left, Node::placeholder()));
                pending.push(std::mem::replace(right, Node::placeholder()));
            }
        }
    }
}

impl Clone for Node {
    fn clone(&self) -> Self {
        let mut root = self.shallow_clone();
        {
            let mut pending = vec![(self, &mut root)];
            while let Some(pair) = pending.pop() {
                if let (
                    Node::Internal { left, right, .. },
                    Node::Internal {
                        left: new_left,
                        right: new_right,
                        ..
                    },
                ) = pair
                {
                    **new_left = left.shallow_clone();
                    **new_right = right.shallow_clone();
                    pending.push((&**right, &mut **new_right));
                    pending.push((&**left, &mut **new_left));
                }
            }
        }
        root
    }
}

impl PartialEq for Node {
    fn eq(&self, other: &Self) -> bool {
        let mut pending = vec![(self, other)];
        while let Some(pair) = pending.pop() {
            match pair {
                (Node::Leaf { label: a }, Node::Leaf { label: b }) => {
                    if a != b {
                        return false;
                    }
                }
                (
                    Node::Internal {
                        condition: a,
                        left: a_left,
                        right: a_right,
                    },
                    Node::Internal {
                        condition: b,
                        left: b_left,
                        right: b_right,
                    },
                ) => {
                    if a != b {
                        return false;
                    }
                    pending.push((&**a_right, &**b_right));
                    pending.push((&**a_left, &**b_left));
                }
                _ => return false,
            }
        }
        true
    }
}

/// Formats the subtree as its nodes in pre-order.
impl fmt::Debug for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut list = f.debug_list();
        let mut pending = vec![self];
        while let Some(node) = pending.pop() {
            match node {
                Node::Leaf { label } => {
                    list.entry(&format_args!("Leaf {{ label: {:?} }}", label));
                }
                Node::Internal {
                    condition,
                    left,
                    right,
                } => {
                    list.entry(&format_args!("Internal {{ condition: {:?} }}", condition));
                    pending.push(&**right);
                    pending.push(&**left);
                }
            }
        }
        list.finish()
    }
}
