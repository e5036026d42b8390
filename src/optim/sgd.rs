//! Stochastic Gradient Descent optimizer

use super::Optimizer;
use crate::Parameter;
use ndarray::Array1;

/// SGD with optional momentum
///
/// # Example
///
/// ```
/// use ndarray::Array1;
/// use valorar::{Optimizer, Parameter, Sgd};
///
/// let mut params = vec![Parameter::from_vec(vec![1.0, 2.0])];
/// params[0].accumulate_grad(&Array1::from(vec![0.5, 0.5]));
///
/// let mut sgd = Sgd::new(0.1, 0.0);
/// sgd.step(&mut params);
/// assert!((params[0].data()[0] - 0.95).abs() < 1e-6);
/// ```
pub struct Sgd {
    lr: f32,
    momentum: f32,
    velocities: Vec<Option<Array1<f32>>>,
}

impl Sgd {
    /// Create a new SGD optimizer
    pub fn new(lr: f32, momentum: f32) -> Self {
        Self { lr, momentum, velocities: Vec::new() }
    }

    /// Initialize velocity slots if needed
    fn ensure_velocities(&mut self, params: &[Parameter]) {
        if self.velocities.len() != params.len() {
            self.velocities = params.iter().map(|_| None).collect();
        }
    }
}

impl Optimizer for Sgd {
    fn step(&mut self, params: &mut [Parameter]) {
        self.ensure_velocities(params);

        for (i, param) in params.iter_mut().enumerate() {
            let Some(grad) = param.grad().cloned() else {
                continue;
            };

            if self.momentum > 0.0 {
                // v = momentum * v - lr * grad; param += v
                let velocity = match self.velocities[i].take() {
                    Some(v) => v * self.momentum - &grad * self.lr,
                    None => &grad * (-self.lr),
                };
                *param.data_mut() += &velocity;
                self.velocities[i] = Some(velocity);
            } else {
                // param -= lr * grad
                *param.data_mut() -= &(&grad * self.lr);
            }
        }
    }

    fn lr(&self) -> f32 {
        self.lr
    }

    fn set_lr(&mut self, lr: f32) {
        self.lr = lr;
    }
}
