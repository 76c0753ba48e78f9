use super::*;

#[test]
fn test_label_encoder_first_occurrence_order() {
    let labels = arr1(&["dog", "cat", "dog", "bird", "cat"]).mapv(Value::from);
    let (encoder, codes) = LabelEncoder::fit_transform(labels.iter());

    assert_eq!(codes, vec![0, 1, 0, 2, 1]);
    assert_eq!(encoder.n_classes(), 3);
    assert_eq!(
        encoder.classes(),
        &[Value::from("dog"), Value::from("cat"), Value::from("bird")]
    );
}

#[test]
fn test_label_encoder_round_trip() {
    let labels = vec![Value::from(3.0), Value::from("3"), Value::from(-1.0)];
    let encoder = LabelEncoder::fit(&labels);

    for label in &labels {
        let code = encoder.encode(label).unwrap();
        assert_eq!(encoder.decode(code), Some(label));
    }
    assert_eq!(encoder.decode(3), None);
    assert_eq!(encoder.encode(&Value::from("missing")), None);
}

#[test]
fn test_label_encoder_transform() {
    let training = vec![Value::from("a"), Value::from("b")];
    let encoder = LabelEncoder::fit(&training);

    let codes = encoder
        .transform(&[Value::from("b"), Value::from("a"), Value::from("b")])
        .unwrap();
    assert_eq!(codes, vec![1, 0, 1]);

    assert!(matches!(
        encoder.transform(&[Value::from("c")]),
        Err(ModelError::InputValidationError(_))
    ));
}

#[test]
fn test_label_encoder_empty() {
    let encoder = LabelEncoder::default();
    assert_eq!(encoder.n_classes(), 0);
    assert!(encoder.classes().is_empty());
    assert_eq!(encoder.decode(0), None);
}
