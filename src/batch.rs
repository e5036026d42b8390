//! Batch data structure

use ndarray::{Array1, Array2};

/// A batch of samples: one input row and one class label per sample
#[derive(Debug, Clone)]
pub struct Batch {
    /// Input features, row per sample
    pub inputs: Array2<f32>,
    /// Target class indices
    pub targets: Array1<usize>,
}

impl Batch {
    /// Create a new batch
    pub fn new(inputs: Array2<f32>, targets: Array1<usize>) -> Self {
        assert_eq!(
            inputs.nrows(),
            targets.len(),
            "batch has {} input rows but {} targets",
            inputs.nrows(),
            targets.len()
        );
        Self { inputs, targets }
    }

    /// Number of samples in the batch
    pub fn size(&self) -> usize {
        self.targets.len()
    }
}
