use super::*;

fn leaf(label: &str) -> Node {
    Node::new_leaf(Value::from(label))
}

// [0] <= 2.0 ? ([1] == "x" ? yes : no) : maybe
fn sample_tree() -> Node {
    Node::new_internal(
        SplitCondition::new(0, Value::from(2.0)),
        Node::new_internal(
            SplitCondition::new(1, Value::from("x")),
            leaf("yes"),
            leaf("no"),
        ),
        leaf("maybe"),
    )
}

const TYPES: [AttributeType; 2] = [AttributeType::Ordered, AttributeType::Unordered];

#[test]
fn test_attribute_type_inference_and_tags() {
    assert_eq!(AttributeType::infer(&Value::from(1.5)), AttributeType::Ordered);
    assert_eq!(AttributeType::infer(&Value::from("x")), AttributeType::Unordered);

    for attribute_type in [AttributeType::Ordered, AttributeType::Unordered] {
        assert_eq!(
            AttributeType::from_tag(attribute_type.tag()),
            Some(attribute_type)
        );
    }
    assert_eq!(AttributeType::from_tag('x'), None);
}

#[test]
fn test_split_condition_admits() {
    let threshold = SplitCondition::new(0, Value::from(2.0));
    assert!(threshold.admits(&Value::from(1.0), AttributeType::Ordered));
    assert!(threshold.admits(&Value::from(2.0), AttributeType::Ordered));
    assert!(!threshold.admits(&Value::from(2.5), AttributeType::Ordered));
    // Tokens sort after every number
    assert!(!threshold.admits(&Value::from("2"), AttributeType::Ordered));

    let category = SplitCondition::new(0, Value::from("red"));
    assert!(category.admits(&Value::from("red"), AttributeType::Unordered));
    assert!(!category.admits(&Value::from("blue"), AttributeType::Unordered));
    // Ordered comparison on tokens is lexicographic
    assert!(category.admits(&Value::from("blue"), AttributeType::Ordered));
}

#[test]
fn test_node_evaluate() {
    let tree = sample_tree();
    let cases = [
        ([Value::from(1.0), Value::from("x")], "yes"),
        ([Value::from(2.0), Value::from("y")], "no"),
        ([Value::from(3.0), Value::from("x")], "maybe"),
    ];

    for (instance, expected) in cases {
        let instance = Array1::from_vec(instance.to_vec());
        assert_eq!(tree.evaluate(instance.view(), &TYPES), &Value::from(expected));
    }
}

#[test]
fn test_node_decision_path() {
    let tree = sample_tree();

    let instance = array![Value::from(2.0), Value::from("y")];
    assert_eq!(tree.decision_path(instance.view(), &TYPES), "L-R-no");

    let instance = array![Value::from(7.0), Value::from("x")];
    assert_eq!(tree.decision_path(instance.view(), &TYPES), "R-maybe");

    let lone = leaf("only");
    assert_eq!(lone.decision_path(instance.view(), &TYPES), "only");
}

#[test]
fn test_node_counts() {
    let tree = sample_tree();
    assert_eq!(tree.node_count(), 5);
    assert_eq!(tree.leaf_count(), 3);
    assert_eq!(tree.internal_count(), 2);
    assert_eq!(tree.depth(), 3);
    assert!(!tree.is_leaf());

    let lone = leaf("only");
    assert_eq!(lone.node_count(), 1);
    assert_eq!(lone.depth(), 1);
    assert!(lone.is_leaf());
}

#[test]
fn test_degenerate_deep_tree() {
    let depth = 200_000;
    let mut tree = leaf("last");
    for i in (0..depth).rev() {
        tree = Node::new_internal(
            SplitCondition::new(0, Value::from(i as f64)),
            leaf("stop"),
            tree,
        );
    }

    assert_eq!(tree.depth(), depth + 1);
    assert_eq!(tree.leaf_count(), depth + 1);

    let types = [AttributeType::Ordered];
    let beyond = array![Value::from(depth as f64)];
    assert_eq!(tree.evaluate(beyond.view(), &types), &Value::from("last"));

    let middle = array![Value::from(1000.0)];
    assert_eq!(tree.evaluate(middle.view(), &types), &Value::from("stop"));

    let copy = tree.clone();
    assert_eq!(copy.depth(), depth + 1);
    assert!(copy == tree);

    // Dropping must not recurse once per level
    drop(copy);
    drop(tree);
}

#[test]
fn test_node_clone_eq_debug() {
    let tree = Node::new_internal(
        SplitCondition::new(0, Value::from(2.0)),
        leaf("a"),
        Node::new_internal(SplitCondition::new(1, Value::from("x")), leaf("b"), leaf("c")),
    );

    let copy = tree.clone();
    assert_eq!(copy, tree);

    let changed = Node::new_internal(
        SplitCondition::new(0, Value::from(2.0)),
        leaf("a"),
        Node::new_internal(SplitCondition::new(1, Value::from("x")), leaf("b"), leaf("d")),
    );
    assert_ne!(changed, tree);
    assert_ne!(leaf("a"), tree);

    assert_eq!(
        format!("{:?}", leaf("a")),
        r#"[Leaf { label: Token("a") }]"#
    );
    assert_eq!(
        format!("{:?}", Node::new_internal(SplitCondition::new(0, Value::from(2.0)), leaf("a"), leaf("b"))),
        r#"[Internal { condition: SplitCondition { attribute: 0, value: Number(2.0) } }, Leaf { label: Token("a") }, Leaf { label: Token("b") }]"#
    );
}
