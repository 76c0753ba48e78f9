use super::*;
use tracing::{debug, trace};

/// Pending work of the builder. `Grow` expands one node; `Join` assembles an
/// internal node once both of its subtrees are finished.
enum Task {
    Grow { indices: Vec<usize>, depth: usize },
    Join { condition: SplitCondition },
}

/// What a grown node turns into.
enum Expansion {
    Split(SplitCondition),
    Leaf(Node),
}

/// Grows a tree top-down with Hunt's algorithm.
///
/// Nodes are expanded from an explicit work stack rather than by recursion. The
/// left subtree of a node is always completed before its right subtree starts,
/// which is the order a recursive build would visit them in, so a seeded random
/// source produces the same tree either way.
pub(super) struct TreeBuilder<'a, R: Rng> {
    view: TrainingView<'a>,
    encoder: &'a LabelEncoder,
    params: &'a DecisionTreeParams,
    rng: &'a mut R,
}

impl<'a, R: Rng> TreeBuilder<'a, R> {
    pub(super) fn new(
        view: TrainingView<'a>,
        encoder: &'a LabelEncoder,
        params: &'a DecisionTreeParams,
        rng: &'a mut R,
    ) -> Self {
        Self {
            view,
            encoder,
            params,
            rng,
        }
    }

    /// Builds the whole tree over every row of the training view.
    pub(super) fn build(mut self) -> Result<Node, ModelError> {
        let mut tasks = vec![Task::Grow {
            indices: (0..self.view.x.nrows()).collect(),
            depth: 0,
        }];
        let mut finished: Vec<Node> = Vec::new();

        while let Some(task) = tasks.pop() {
            match task {
                Task::Grow { indices, depth } => match self.expand(&indices, depth)? {
                    Expansion::Split(condition) => {
                        let (left, right) = partition(
                            self.view.x,
                            &indices,
                            self.view.attribute_types,
                            &condition,
                        );
                        tasks.push(Task::Join { condition });
                        tasks.push(Task::Grow {
                            indices: right,
                            depth: depth + 1,
                        });
                        tasks.push(Task::Grow {
                            indices: left,
                            depth: depth + 1,
                        });
                    }
                    Expansion::Leaf(leaf) => finished.push(leaf),
                },
                Task::Join { condition } => {
                    let right = finished
                        .pop()
                        .ok_or(ModelError::TreeError("Missing right child"))?;
                    let left = finished
                        .pop()
                        .ok_or(ModelError::TreeError("Missing left child"))?;
                    finished.push(Node::new_internal(condition, left, right));
                }
            }
        }

        let root = finished
            .pop()
            .ok_or(ModelError::TreeError("Builder produced no root"))?;
        if !finished.is_empty() {
            return Err(ModelError::TreeError("Builder left unattached subtrees"));
        }
        Ok(root)
    }

    /// Applies the stopping rules to one node, in order: purity, depth and size
    /// limits, then the search for an informative split.
    fn expand(&mut self, indices: &[usize], depth: usize) -> Result<Expansion, ModelError> {
        let first = indices
            .first()
            .map(|&i| self.view.codes[i])
            .ok_or(ModelError::TreeError("Cannot grow an empty node"))?;

        if indices.iter().all(|&i| self.view.codes[i] == first) {
            trace!(depth, n_samples = indices.len(), "pure node");
            return self.leaf(first).map(Expansion::Leaf);
        }

        let depth_reached = self.params.max_depth.is_some_and(|max| depth >= max);
        if depth_reached || indices.len() < self.params.min_samples_split {
            trace!(depth, n_samples = indices.len(), "stopping criterion reached");
            return self.majority_leaf(indices).map(Expansion::Leaf);
        }

        match best_split(
            &self.view,
            indices,
            &self.params.sample_size_method,
            &mut *self.rng,
        ) {
            Some((condition, gain)) => {
                debug!(
                    depth,
                    n_samples = indices.len(),
                    attribute = condition.attribute,
                    value = %condition.value,
                    gain,
                    "splitting node"
                );
                Ok(Expansion::Split(condition))
            }
            None => {
                trace!(depth, n_samples = indices.len(), "no informative split");
                self.majority_leaf(indices).map(Expansion::Leaf)
            }
        }
    }

    fn majority_leaf(&self, indices: &[usize]) -> Result<Node, ModelError> {
        self.leaf(majority_index(&self.view.label_counts(indices)))
    }

    fn leaf(&self, code: usize) -> Result<Node, ModelError> {
        self.encoder
            .decode(code)
            .cloned()
            .map(Node::new_leaf)
            .ok_or(ModelError::TreeError("Leaf label code is not encoded"))
    }
}
