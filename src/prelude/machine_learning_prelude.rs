pub use crate::machine_learning::{
    AttributeType, DecisionTree, DecisionTreeParams, Node, SampleSizeMethod, SplitCondition,
};
