//! Loss functions

use ndarray::{Array1, Array2, ArrayView1};

/// Trait for loss functions over a batch of row-per-sample logits
pub trait LossFn {
    /// Mean loss over the batch
    fn forward(&self, logits: &Array2<f32>, targets: &Array1<usize>) -> f32;

    /// Gradient of the mean loss with respect to every logit
    fn gradient(&self, logits: &Array2<f32>, targets: &Array1<usize>) -> Array2<f32>;

    /// Name of the loss
    fn name(&self) -> &'static str;
}

/// Cross entropy over integer class labels
///
/// L = −mean(log softmax(logits)[target])
///
/// # Example
///
/// ```
/// use ndarray::{array, Array1};
/// use valorar::{CrossEntropyLoss, LossFn};
///
/// let logits = array![[2.0, 0.0], [0.0, 2.0]];
/// let targets = Array1::from(vec![0usize, 1]);
/// let loss = CrossEntropyLoss.forward(&logits, &targets);
/// assert!(loss > 0.0 && loss.is_finite());
/// ```
pub struct CrossEntropyLoss;

impl CrossEntropyLoss {
    /// Softmax of one row of logits: exp(x_i − max) / sum
    pub(crate) fn softmax(row: ArrayView1<f32>) -> Array1<f32> {
        let max = row.iter().fold(f32::NEG_INFINITY, |a, &b| a.max(b));
        let exp: Array1<f32> = row.mapv(|v| (v - max).exp());
        let sum: f32 = exp.sum();
        exp / sum
    }

    fn check_shapes(logits: &Array2<f32>, targets: &Array1<usize>) {
        assert_eq!(
            logits.nrows(),
            targets.len(),
            "logit rows {} do not match target count {}",
            logits.nrows(),
            targets.len()
        );
        for &target in targets {
            assert!(
                target < logits.ncols(),
                "class label {} out of range for {} logits",
                target,
                logits.ncols()
            );
        }
    }
}

impl LossFn for CrossEntropyLoss {
    fn forward(&self, logits: &Array2<f32>, targets: &Array1<usize>) -> f32 {
        Self::check_shapes(logits, targets);
        if targets.is_empty() {
            return 0.0;
        }

        let mut total = 0.0_f32;
        for (row, &target) in logits.outer_iter().zip(targets.iter()) {
            let probs = Self::softmax(row);
            total -= probs[target].max(f32::MIN_POSITIVE).ln();
        }
        total / targets.len() as f32
    }

    fn gradient(&self, logits: &Array2<f32>, targets: &Array1<usize>) -> Array2<f32> {
        Self::check_shapes(logits, targets);

        // d(mean CE)/d(logits) = (softmax(logits) − onehot(target)) / batch
        let mut grad = Array2::zeros(logits.raw_dim());
        let scale = 1.0 / targets.len().max(1) as f32;
        for (i, (row, &target)) in logits.outer_iter().zip(targets.iter()).enumerate() {
            let probs = Self::softmax(row);
            for (j, &p) in probs.iter().enumerate() {
                let indicator = if j == target { 1.0 } else { 0.0 };
                grad[[i, j]] = (p - indicator) * scale;
            }
        }
        grad
    }

    fn name(&self) -> &'static str {
        "CrossEntropy"
    }
}
