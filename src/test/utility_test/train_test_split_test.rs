use super::*;

fn dataset(n: usize) -> (Array2<Value>, Array1<Value>) {
    let x = Array2::from_shape_fn((n, 2), |(i, j)| Value::from((i * 10 + j) as f64));
    let y = Array1::from_shape_fn(n, |i| Value::from(i as f64));
    (x, y)
}

#[test]
fn test_train_test_split_sizes() {
    let (x, y) = dataset(10);
    let (x_train, x_test, y_train, y_test) =
        train_test_split(x.view(), y.view(), Some(0.3), Some(42)).unwrap();

    assert_eq!(x_test.dim(), (3, 2));
    assert_eq!(x_train.dim(), (7, 2));
    assert_eq!(y_test.len(), 3);
    assert_eq!(y_train.len(), 7);

    // Default test share is 20%, rounded down
    let (x, y) = dataset(9);
    let (x_train, x_test, _, _) = train_test_split(x.view(), y.view(), None, Some(1)).unwrap();
    assert_eq!(x_test.nrows(), 1);
    assert_eq!(x_train.nrows(), 8);
}

#[test]
fn test_train_test_split_keeps_rows_aligned() {
    let (x, y) = dataset(20);
    let (x_train, x_test, y_train, y_test) =
        train_test_split(x.view(), y.view(), Some(0.25), Some(7)).unwrap();

    let mut seen = Vec::new();
    for (row, label) in x_train
        .outer_iter()
        .zip(y_train.iter())
        .chain(x_test.outer_iter().zip(y_test.iter()))
    {
        let index = label.as_number().unwrap();
        assert_eq!(row[0], Value::from(index * 10.0));
        seen.push(index as usize);
    }

    // Every sample lands in exactly one of the two sets
    seen.sort();
    assert_eq!(seen, (0..20).collect::<Vec<_>>());
}

#[test]
fn test_train_test_split_seeded() {
    let (x, y) = dataset(30);
    let first = train_test_split(x.view(), y.view(), Some(0.2), Some(5)).unwrap();
    let second = train_test_split(x.view(), y.view(), Some(0.2), Some(5)).unwrap();
    assert_eq!(first.3, second.3);
    assert_eq!(first.0, second.0);
}

#[test]
fn test_train_test_split_zero_test_size() {
    let (x, y) = dataset(4);
    let (x_train, x_test, _, _) = train_test_split(x.view(), y.view(), Some(0.0), None).unwrap();
    assert_eq!(x_test.nrows(), 0);
    assert_eq!(x_train.nrows(), 4);
}

#[test]
fn test_train_test_split_errors() {
    let (x, y) = dataset(5);

    for test_size in [1.0, -0.1, 1.5] {
        assert!(matches!(
            train_test_split(x.view(), y.view(), Some(test_size), None),
            Err(ModelError::InputValidationError(_))
        ));
    }

    assert!(matches!(
        train_test_split(x.view(), y.slice(s![..3]), None, None),
        Err(ModelError::InputValidationError(_))
    ));

    let empty_x = Array2::<Value>::from_shape_vec((0, 2), vec![]).unwrap();
    let empty_y = Array1::<Value>::from_vec(vec![]);
    assert!(matches!(
        train_test_split(empty_x.view(), empty_y.view(), None, None),
        Err(ModelError::InputValidationError(_))
    ));
}

#[test]
fn test_ordered_train_test_split() {
    let (x, y) = dataset(10);
    let (x_train, x_test, y_train, y_test) =
        ordered_train_test_split(x.view(), y.view(), Some(0.3)).unwrap();

    assert_eq!(x_test, x.slice(s![..3, ..]));
    assert_eq!(x_train, x.slice(s![3.., ..]));
    assert_eq!(y_test, y.slice(s![..3]));
    assert_eq!(y_train, y.slice(s![3..]));

    // Same validation as the shuffling split
    assert!(matches!(
        ordered_train_test_split(x.view(), y.view(), Some(1.0)),
        Err(ModelError::InputValidationError(_))
    ));
    let (x_train, x_test, _, _) = ordered_train_test_split(x.view(), y.view(), None).unwrap();
    assert_eq!(x_test.nrows(), 2);
    assert_eq!(x_train.nrows(), 8);
}
