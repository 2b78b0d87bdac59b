use perceptron_gates::data::truth_tables::{self, AND_TARGETS, OR_TARGETS};
use perceptron_gates::{Dataset, PerceptronError, TrainingExample};

#[test]
fn test_from_rows_keeps_order() {
    let rows = vec![vec![0.0, 1.0], vec![1.0, 0.0], vec![1.0, 1.0]];
    let dataset = Dataset::from_rows(&rows, &[1.0, 0.0, 1.0]).unwrap();

    assert_eq!(dataset.len(), 3);
    assert!(!dataset.is_empty());
    assert_eq!(dataset.input_size(), 2);
    assert_eq!(dataset.targets(), vec![1.0, 0.0, 1.0]);
    let collected: Vec<&Vec<f64>> = dataset.iter().map(|e| &e.inputs).collect();
    assert_eq!(collected, rows.iter().collect::<Vec<_>>());
}

#[test]
fn test_rejects_mismatched_lengths() {
    let rows = vec![vec![0.0, 1.0], vec![1.0, 0.0]];
    let err = Dataset::from_rows(&rows, &[1.0]).unwrap_err();
    assert_eq!(err, PerceptronError::LengthMismatch { rows: 2, targets: 1 });
    assert!(err.is_invalid_argument());
}

#[test]
fn test_rejects_ragged_rows() {
    let rows = vec![vec![0.0, 1.0], vec![1.0, 0.0, 1.0]];
    let err = Dataset::from_rows(&rows, &[1.0, 0.0]).unwrap_err();
    assert_eq!(err, PerceptronError::RaggedRows { row: 1, expected: 2, got: 3 });
}

#[test]
fn test_rejects_empty_dataset() {
    assert_eq!(Dataset::from_rows(&[], &[]).unwrap_err(), PerceptronError::EmptyDataset);
    assert_eq!(Dataset::from_examples(vec![]).unwrap_err(), PerceptronError::EmptyDataset);
}

#[test]
fn test_rejects_non_binary_targets() {
    let examples = vec![
        TrainingExample { inputs: vec![0.0], target: 0.0 },
        TrainingExample { inputs: vec![1.0], target: 1.0 },
        TrainingExample { inputs: vec![2.0], target: 0.5 },
    ];
    let err = Dataset::from_examples(examples).unwrap_err();
    assert_eq!(err, PerceptronError::InvalidTarget { index: 2, value: 0.5 });
}

#[test]
fn test_truth_tables() {
    let and = truth_tables::and_gate();
    let or = truth_tables::or_gate();

    assert_eq!(and.len(), 4);
    assert_eq!(and.input_size(), 2);
    assert_eq!(and.targets(), AND_TARGETS.to_vec());
    assert_eq!(or.targets(), OR_TARGETS.to_vec());
    assert_eq!(and.examples()[3].inputs, vec![1.0, 1.0]);
    assert_eq!(or.examples()[0].inputs, vec![0.0, 0.0]);
}

#[test]
fn test_rejects_non_finite_inputs() {
    let rows = vec![vec![0.0, 1.0], vec![f64::INFINITY, 0.0]];
    let err = Dataset::from_rows(&rows, &[0.0, 1.0]).unwrap_err();
    assert_eq!(err, PerceptronError::NonFiniteValue { row: 1, index: 0 });
    assert!(err.is_invalid_argument());

    let rows = vec![vec![0.0, f64::NAN]];
    let err = Dataset::from_rows(&rows, &[1.0]).unwrap_err();
    assert_eq!(err, PerceptronError::NonFiniteValue { row: 0, index: 1 });
}

#[test]
fn test_deserialize_applies_validation() {
    let bad_target = r#"{"examples":[{"inputs":[1.0],"target":0.5}],"input_size":2}"#;
    let err = serde_json::from_str::<Dataset>(bad_target).unwrap_err();
    assert!(err.to_string().contains("target at index 0 must be 0 or 1"), "{err}");

    let empty = r#"{"examples":[],"input_size":2}"#;
    assert!(serde_json::from_str::<Dataset>(empty).is_err());

    let ragged = r#"{"examples":[{"inputs":[1.0,0.0],"target":1.0},{"inputs":[1.0],"target":0.0}]}"#;
    assert!(serde_json::from_str::<Dataset>(ragged).is_err());

    // A stored width that disagrees with the rows is recomputed.
    let good = r#"{"examples":[{"inputs":[1.0,0.0],"target":1.0}],"input_size":7}"#;
    let dataset: Dataset = serde_json::from_str(good).unwrap();
    assert_eq!(dataset.input_size(), 2);

    let and = truth_tables::and_gate();
    let json = serde_json::to_string(&and).unwrap();
    assert_eq!(serde_json::from_str::<Dataset>(&json).unwrap(), and);
}
