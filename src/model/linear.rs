//! Reference softmax-regression classifier

use super::{Classifier, ModelMetadata, ModelState};
use crate::{Error, Parameter, Result};
use ndarray::{s, Array1, Array2, ArrayView1};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const WEIGHT: usize = 0;
const BIAS: usize = 1;

/// Linear classifier: logits = W·x + b per sample
///
/// The crate's reference implementation of [`Classifier`]; useful as a
/// smoke-test candidate and as the model the crate's own tests train.
/// The weight matrix is stored flat, one row of `in_features` values per
/// class.
///
/// # Example
///
/// ```
/// use ndarray::array;
/// use valorar::{Classifier, LinearClassifier};
///
/// let mut model = LinearClassifier::seeded(2, 3, 42);
/// let logits = model.forward(&array![[0.5, -0.5]]);
/// assert_eq!(logits.dim(), (1, 3));
/// ```
pub struct LinearClassifier {
    in_features: usize,
    classes: usize,
    params: Vec<Parameter>,
    last_input: Option<Array2<f32>>,
    training: bool,
}

impl LinearClassifier {
    /// Create a classifier with weights drawn from a fresh RNG
    pub fn new(in_features: usize, classes: usize) -> Self {
        Self::init(in_features, classes, &mut rand::thread_rng())
    }

    /// Create a classifier with a deterministic weight initialization
    pub fn seeded(in_features: usize, classes: usize, seed: u64) -> Self {
        Self::init(in_features, classes, &mut StdRng::seed_from_u64(seed))
    }

    fn init(in_features: usize, classes: usize, rng: &mut impl Rng) -> Self {
        assert!(in_features > 0, "classifier needs at least one input feature");
        assert!(classes > 1, "classifier needs at least two classes");

        let scale = 1.0 / (in_features as f32).sqrt();
        let weight: Vec<f32> =
            (0..classes * in_features).map(|_| rng.gen_range(-scale..scale)).collect();

        Self {
            in_features,
            classes,
            params: vec![Parameter::from_vec(weight), Parameter::zeros(classes)],
            last_input: None,
            training: false,
        }
    }

    /// Input width this classifier expects
    pub fn in_features(&self) -> usize {
        self.in_features
    }

    /// Number of output classes
    pub fn classes(&self) -> usize {
        self.classes
    }
}

impl Classifier for LinearClassifier {
    fn set_training(&mut self, training: bool) {
        self.training = training;
        if !training {
            self.last_input = None;
        }
    }

    fn forward(&mut self, inputs: &Array2<f32>) -> Array2<f32> {
        assert_eq!(
            inputs.ncols(),
            self.in_features,
            "input width {} does not match the classifier's {} features",
            inputs.ncols(),
            self.in_features
        );

        let mut logits = Array2::zeros((inputs.nrows(), self.classes));
        let weight = self.params[WEIGHT].data();
        let bias = self.params[BIAS].data();
        for (i, x) in inputs.outer_iter().enumerate() {
            for c in 0..self.classes {
                let row = weight.slice(s![c * self.in_features..(c + 1) * self.in_features]);
                logits[[i, c]] = row.dot(&x) + bias[c];
            }
        }

        if self.training {
            self.last_input = Some(inputs.clone());
        }
        logits
    }

    fn backward(&mut self, grad_logits: &Array2<f32>) {
        assert!(self.training, "backward requires training mode");
        let inputs = match self.last_input.take() {
            Some(inputs) => inputs,
            None => panic!("backward called before forward"),
        };
        assert_eq!(
            grad_logits.nrows(),
            inputs.nrows(),
            "gradient rows {} do not match forward batch of {}",
            grad_logits.nrows(),
            inputs.nrows()
        );
        assert_eq!(
            grad_logits.ncols(),
            self.classes,
            "gradient width {} does not match {} classes",
            grad_logits.ncols(),
            self.classes
        );

        let mut grad_weight = Array1::<f32>::zeros(self.classes * self.in_features);
        let mut grad_bias = Array1::<f32>::zeros(self.classes);
        for (x, grad_row) in inputs.outer_iter().zip(grad_logits.outer_iter()) {
            for (c, &g) in grad_row.iter().enumerate() {
                if g == 0.0 {
                    continue;
                }
                grad_bias[c] += g;
                let base = c * self.in_features;
                for (f, &xf) in x.iter().enumerate() {
                    grad_weight[base + f] += g * xf;
                }
            }
        }

        self.params[WEIGHT].accumulate_grad(&grad_weight);
        self.params[BIAS].accumulate_grad(&grad_bias);
    }

    fn parameters_mut(&mut self) -> &mut [Parameter] {
        &mut self.params
    }

    fn state(&self) -> ModelState {
        let mut state = ModelState::new(ModelMetadata::new("linear-classifier", "linear"));
        state.push_parameter("weight", &self.params[WEIGHT].data().to_vec());
        state.push_parameter("bias", &self.params[BIAS].data().to_vec());
        state
    }

    fn load_state(&mut self, state: &ModelState) -> Result<()> {
        let slices = state.slices()?;
        if slices.len() != self.params.len() {
            return Err(Error::StateMismatch(format!(
                "expected {} parameters, snapshot has {}",
                self.params.len(),
                slices.len()
            )));
        }
        for (name, values) in slices {
            let param = match name {
                "weight" => &mut self.params[WEIGHT],
                "bias" => &mut self.params[BIAS],
                other => {
                    return Err(Error::StateMismatch(format!(
                        "unknown parameter {other:?} in snapshot"
                    )))
                }
            };
            if values.len() != param.len() {
                return Err(Error::StateMismatch(format!(
                    "parameter {name:?} has {} values, expected {}",
                    values.len(),
                    param.len()
                )));
            }
            param.data_mut().assign(&ArrayView1::from(values));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loss::{CrossEntropyLoss, LossFn};
    use crate::optim::{Optimizer, Sgd};
    use ndarray::array;

    #[test]
    fn test_seeded_init_is_deterministic() {
        let a = LinearClassifier::seeded(3, 2, 7);
        let b = LinearClassifier::seeded(3, 2, 7);
        assert_eq!(a.params[WEIGHT].data(), b.params[WEIGHT].data());
        assert_eq!(a.in_features(), 3);
        assert_eq!(a.classes(), 2);
    }

    #[test]
    fn test_forward_applies_weights_and_bias() {
        let mut model = LinearClassifier::seeded(2, 2, 0);
        // weight rows [1, 0] and [0, 1], bias [0.5, -0.5]
        model.params[WEIGHT].data_mut().assign(&Array1::from(vec![1.0, 0.0, 0.0, 1.0]));
        model.params[BIAS].data_mut().assign(&Array1::from(vec![0.5, -0.5]));

        let logits = model.forward(&array![[2.0, 3.0]]);
        assert!((logits[[0, 0]] - 2.5).abs() < 1e-6);
        assert!((logits[[0, 1]] - 2.5).abs() < 1e-6);
    }

    #[test]
    fn test_backward_accumulates_expected_grads() {
        let mut model = LinearClassifier::seeded(2, 2, 0);
        model.set_training(true);
        model.forward(&array![[1.0, 2.0]]);
        model.backward(&array![[1.0, -1.0]]);

        let grad_weight = model.params[WEIGHT].grad().expect("weight grad");
        let grad_bias = model.params[BIAS].grad().expect("bias grad");
        assert_eq!(grad_weight.to_vec(), vec![1.0, 2.0, -1.0, -2.0]);
        assert_eq!(grad_bias.to_vec(), vec![1.0, -1.0]);
    }

    #[test]
    #[should_panic(expected = "backward called before forward")]
    fn test_backward_without_forward_panics() {
        let mut model = LinearClassifier::seeded(2, 2, 0);
        model.set_training(true);
        model.backward(&array![[1.0, 0.0]]);
    }

    #[test]
    fn test_eval_mode_does_not_cache_inputs() {
        let mut model = LinearClassifier::seeded(2, 2, 0);
        model.set_training(false);
        model.forward(&array![[1.0, 1.0]]);
        assert!(model.last_input.is_none());
    }

    #[test]
    fn test_state_round_trip_restores_weights() {
        let mut source = LinearClassifier::seeded(3, 2, 1);
        let mut target = LinearClassifier::seeded(3, 2, 2);
        assert_ne!(source.params[WEIGHT].data(), target.params[WEIGHT].data());

        target.load_state(&source.state()).expect("snapshot should restore");
        assert_eq!(source.params[WEIGHT].data(), target.params[WEIGHT].data());
        assert_eq!(source.params[BIAS].data(), target.params[BIAS].data());
    }

    #[test]
    fn test_load_state_rejects_wrong_width() {
        let donor = LinearClassifier::seeded(4, 2, 1);
        let mut model = LinearClassifier::seeded(3, 2, 1);
        assert!(model.load_state(&donor.state()).is_err());
    }

    #[test]
    fn test_gradient_step_reduces_loss() {
        let criterion = CrossEntropyLoss;
        let mut model = LinearClassifier::seeded(2, 2, 11);
        let mut sgd = Sgd::new(0.5, 0.0);

        let inputs = array![[1.0, -1.0], [-1.0, 1.0]];
        let targets = Array1::from(vec![0usize, 1]);

        model.set_training(true);
        let before = criterion.forward(&model.forward(&inputs), &targets);
        for _ in 0..20 {
            sgd.zero_grad(model.parameters_mut());
            let logits = model.forward(&inputs);
            let grad = criterion.gradient(&logits, &targets);
            model.backward(&grad);
            sgd.step(model.parameters_mut());
        }
        let after = criterion.forward(&model.forward(&inputs), &targets);

        assert!(after < before, "loss did not improve: {before} -> {after}");
    }
}
