//! Classification accuracy tracking

use ndarray::{Array1, Array2, ArrayView1};

/// Index of the largest value in a row of logits (first index on ties)
pub fn argmax(row: ArrayView1<f32>) -> usize {
    let mut best_index = 0;
    let mut best_value = f32::NEG_INFINITY;
    for (index, &value) in row.iter().enumerate() {
        if value > best_value {
            best_index = index;
            best_value = value;
        }
    }
    best_index
}

/// Running classification accuracy over one pass of a dataset
///
/// # Example
///
/// ```
/// use ndarray::{array, Array1};
/// use valorar::AccuracyMeter;
///
/// let mut meter = AccuracyMeter::new();
/// meter.update(&array![[0.9, 0.1], [0.2, 0.8]], &Array1::from(vec![0usize, 0]));
/// assert_eq!(meter.percent(), 50.0);
/// ```
#[derive(Debug, Clone, Default)]
pub struct AccuracyMeter {
    correct: usize,
    total: usize,
}

impl AccuracyMeter {
    /// Create an empty meter
    pub fn new() -> Self {
        Self::default()
    }

    /// Score one batch of logits against its target labels
    pub fn update(&mut self, logits: &Array2<f32>, targets: &Array1<usize>) {
        assert_eq!(
            logits.nrows(),
            targets.len(),
            "logit rows {} do not match target count {}",
            logits.nrows(),
            targets.len()
        );
        for (row, &target) in logits.outer_iter().zip(targets.iter()) {
            if argmax(row) == target {
                self.correct += 1;
            }
        }
        self.total += targets.len();
    }

    /// Correct predictions seen so far
    pub fn correct(&self) -> usize {
        self.correct
    }

    /// Samples seen so far
    pub fn total(&self) -> usize {
        self.total
    }

    /// Accuracy as a percentage; zero before any samples are seen
    pub fn percent(&self) -> f32 {
        if self.total == 0 {
            0.0
        } else {
            100.0 * self.correct as f32 / self.total as f32
        }
    }
}
