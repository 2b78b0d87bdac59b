//! Two-input logic-gate truth tables used by the demo driver and the tests.

use crate::data::dataset::{Dataset, TrainingExample};

/// The four input combinations of a two-input gate, in the order
/// (0,0), (0,1), (1,0), (1,1).
pub const GATE_INPUTS: [[f64; 2]; 4] = [
    [0.0, 0.0],
    [0.0, 1.0],
    [1.0, 0.0],
    [1.0, 1.0],
];

pub const AND_TARGETS: [f64; 4] = [0.0, 0.0, 0.0, 1.0];
pub const OR_TARGETS: [f64; 4] = [0.0, 1.0, 1.0, 1.0];

/// Input rows of a two-input gate as owned vectors.
pub fn gate_rows() -> Vec<Vec<f64>> {
    GATE_INPUTS.iter().map(|row| row.to_vec()).collect()
}

pub fn and_gate() -> Dataset {
    gate_dataset(&AND_TARGETS)
}

pub fn or_gate() -> Dataset {
    gate_dataset(&OR_TARGETS)
}

// The constant tables are rectangular with 0/1 targets, so they skip validation.
fn gate_dataset(targets: &[f64; 4]) -> Dataset {
    let examples = GATE_INPUTS.iter().zip(targets.iter())
        .map(|(inputs, &target)| TrainingExample { inputs: inputs.to_vec(), target })
        .collect();
    Dataset { examples, input_size: 2 }
}
