use super::*;

fn view<'a>(
    x: &'a Array2<Value>,
    codes: &'a [usize],
    attribute_types: &'a [AttributeType],
    n_classes: usize,
) -> TrainingView<'a> {
    TrainingView {
        x: x.view(),
        codes,
        attribute_types,
        n_classes,
    }
}

#[test]
fn test_sample_size_methods() {
    assert_eq!(SampleSizeMethod::All.sample_size(10), 10);
    assert_eq!(SampleSizeMethod::Sqrt.sample_size(10), 4);
    assert_eq!(SampleSizeMethod::Sqrt.sample_size(16), 4);
    assert_eq!(SampleSizeMethod::Log10.sample_size(500), 3);
    assert_eq!(SampleSizeMethod::Fraction(0.25).sample_size(10), 3);

    // Clamped to [1, n]
    assert_eq!(SampleSizeMethod::Log10.sample_size(1), 1);
    assert_eq!(SampleSizeMethod::custom(|_| 1000.0).sample_size(10), 10);
    assert_eq!(SampleSizeMethod::custom(|_| -3.0).sample_size(10), 1);
    assert_eq!(SampleSizeMethod::custom(|_| f64::NAN).sample_size(10), 1);

    // Empty node
    assert_eq!(SampleSizeMethod::Sqrt.sample_size(0), 0);
}

#[test]
fn test_sample_size_method_for_dataset_size() {
    assert!(matches!(
        SampleSizeMethod::for_dataset_size(150),
        SampleSizeMethod::All
    ));
    assert!(matches!(
        SampleSizeMethod::for_dataset_size(5_000),
        SampleSizeMethod::All
    ));
    assert!(matches!(
        SampleSizeMethod::for_dataset_size(5_001),
        SampleSizeMethod::Sqrt
    ));
    assert!(matches!(
        SampleSizeMethod::for_dataset_size(100_001),
        SampleSizeMethod::Log10
    ));
}

#[test]
fn test_sample_size_method_debug() {
    assert_eq!(format!("{:?}", SampleSizeMethod::default()), "All");
    assert_eq!(
        format!("{:?}", SampleSizeMethod::Fraction(0.5)),
        "Fraction(0.5)"
    );
    assert_eq!(
        format!("{:?}", SampleSizeMethod::custom(|n| n as f64)),
        "Custom(..)"
    );
}

#[test]
fn test_split_candidates_full_sample() {
    let x = array![
        [Value::from(3.0), Value::from("a")],
        [Value::from(1.0), Value::from("b")],
        [Value::from(2.0), Value::from("a")],
        [Value::from(2.0), Value::from("a")],
    ];
    let mut rng = StdRng::seed_from_u64(0);

    let candidates = split_candidates(x.view(), &[0, 1, 2, 3], &SampleSizeMethod::All, &mut rng);

    // distinct - 1 candidates per attribute, largest value excluded
    assert_eq!(
        candidates,
        vec![
            SplitCondition::new(0, Value::from(1.0)),
            SplitCondition::new(0, Value::from(2.0)),
            SplitCondition::new(1, Value::from("a")),
        ]
    );
}

#[test]
fn test_split_candidates_constant_attribute() {
    let x = Array2::from_elem((5, 2), Value::from(4.0));
    let mut rng = StdRng::seed_from_u64(0);

    let candidates = split_candidates(x.view(), &[0, 1, 2, 3, 4], &SampleSizeMethod::All, &mut rng);
    assert!(candidates.is_empty());
}

#[test]
fn test_split_candidates_only_node_rows() {
    let x = Array2::from_shape_fn((6, 1), |(i, _)| Value::from(i as f64));
    let mut rng = StdRng::seed_from_u64(0);

    let candidates = split_candidates(x.view(), &[1, 3, 5], &SampleSizeMethod::All, &mut rng);
    assert_eq!(
        candidates,
        vec![
            SplitCondition::new(0, Value::from(1.0)),
            SplitCondition::new(0, Value::from(3.0)),
        ]
    );
}

#[test]
fn test_split_candidates_subsampled() {
    let x = Array2::from_shape_fn((100, 1), |(i, _)| Value::from(i as f64));
    let indices: Vec<usize> = (0..100).collect();
    let mut rng = StdRng::seed_from_u64(42);

    let candidates = split_candidates(x.view(), &indices, &SampleSizeMethod::Sqrt, &mut rng);

    // 10 distinct sampled values give 9 candidates
    assert_eq!(candidates.len(), 9);
    assert!(candidates.windows(2).all(|w| w[0].value < w[1].value));
    assert!(candidates.iter().all(|c| c.attribute == 0));
}

#[test]
fn test_split_candidates_seeded() {
    let x = Array2::from_shape_fn((50, 2), |(i, j)| Value::from((i * (j + 3) % 17) as f64));
    let indices: Vec<usize> = (0..50).collect();

    let first = split_candidates(
        x.view(),
        &indices,
        &SampleSizeMethod::Fraction(0.2),
        &mut StdRng::seed_from_u64(9),
    );
    let second = split_candidates(
        x.view(),
        &indices,
        &SampleSizeMethod::Fraction(0.2),
        &mut StdRng::seed_from_u64(9),
    );
    assert_eq!(first, second);
}

#[test]
fn test_partition_ordered_and_unordered() {
    let x = array![
        [Value::from(5.0), Value::from("red")],
        [Value::from(1.0), Value::from("blue")],
        [Value::from(3.0), Value::from("red")],
        [Value::from(4.0), Value::from("green")],
    ];
    let types = [AttributeType::Ordered, AttributeType::Unordered];
    let indices = [0, 1, 2, 3];

    let (left, right) = partition(
        x.view(),
        &indices,
        &types,
        &SplitCondition::new(0, Value::from(3.0)),
    );
    assert_eq!(left, vec![1, 2]);
    assert_eq!(right, vec![0, 3]);

    let (left, right) = partition(
        x.view(),
        &indices,
        &types,
        &SplitCondition::new(1, Value::from("red")),
    );
    assert_eq!(left, vec![0, 2]);
    assert_eq!(right, vec![1, 3]);
}

#[test]
fn test_partition_counts_match_partition() {
    let (x, y) = weather();
    let (encoder, codes) = crate::utility::LabelEncoder::fit_transform(y.iter());
    let types = [AttributeType::Unordered; 3];
    let view = view(&x, &codes, &types, encoder.n_classes());
    let indices = [0, 2, 3, 5, 6, 7];

    let condition = SplitCondition::new(1, Value::from("hot"));
    let (left_rows, right_rows) = partition(x.view(), &indices, &types, &condition);
    let (left, right) = partition_counts(&view, &indices, &condition);

    assert_eq!(left, view.label_counts(&left_rows));
    assert_eq!(right, view.label_counts(&right_rows));
    assert_eq!(
        left.iter().sum::<usize>() + right.iter().sum::<usize>(),
        indices.len()
    );
}

#[test]
fn test_best_split_perfect_threshold() {
    let x = Array2::from_shape_fn((4, 1), |(i, _)| Value::from((i + 1) as f64));
    let codes = [0, 0, 1, 1];
    let types = [AttributeType::Ordered];
    let view = view(&x, &codes, &types, 2);
    let mut rng = StdRng::seed_from_u64(0);

    let (condition, gain) =
        best_split(&view, &[0, 1, 2, 3], &SampleSizeMethod::All, &mut rng).unwrap();
    assert_eq!(condition, SplitCondition::new(0, Value::from(2.0)));
    assert!((gain - 1.0).abs() < 1e-12);
}

#[test]
fn test_best_split_tie_keeps_first_candidate() {
    // Both attributes separate the labels equally well
    let x = Array2::from_shape_fn((4, 2), |(i, _)| Value::from((i / 2) as f64));
    let codes = [0, 0, 1, 1];
    let types = [AttributeType::Ordered, AttributeType::Ordered];
    let view = view(&x, &codes, &types, 2);
    let mut rng = StdRng::seed_from_u64(0);

    let (condition, _) =
        best_split(&view, &[0, 1, 2, 3], &SampleSizeMethod::All, &mut rng).unwrap();
    assert_eq!(condition.attribute, 0);
}

#[test]
fn test_best_split_none_without_gain() {
    let (x, y) = xor3();
    let (encoder, codes) = crate::utility::LabelEncoder::fit_transform(y.iter());
    let types = [AttributeType::Ordered; 3];
    let view = view(&x, &codes, &types, encoder.n_classes());
    let indices: Vec<usize> = (0..8).collect();
    let mut rng = StdRng::seed_from_u64(0);

    assert!(best_split(&view, &indices, &SampleSizeMethod::All, &mut rng).is_none());

    // Constant attributes produce no candidates at all
    let x = Array2::from_elem((4, 1), Value::from(1.0));
    let codes = [0, 1, 0, 1];
    let types = [AttributeType::Ordered];
    let view = TrainingView {
        x: x.view(),
        codes: &codes,
        attribute_types: &types,
        n_classes: 2,
    };
    assert!(best_split(&view, &[0, 1, 2, 3], &SampleSizeMethod::All, &mut rng).is_none());
}

#[test]
fn test_split_candidates_subsample_stays_in_node() {
    let x = Array2::from_shape_fn((100, 1), |(i, _)| Value::from(i as f64));
    let indices: Vec<usize> = (0..100).step_by(2).collect();
    let mut rng = StdRng::seed_from_u64(3);

    let candidates = split_candidates(x.view(), &indices, &SampleSizeMethod::Fraction(0.2), &mut rng);

    // 10 distinct even rows are drawn from the 50 in the node
    assert_eq!(candidates.len(), 9);
    assert!(candidates.iter().all(|c| {
        let value = c.value.as_number().unwrap();
        value as usize % 2 == 0 && value < 100.0
    }));
}
