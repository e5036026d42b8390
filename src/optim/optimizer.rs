//! Optimizer trait

use crate::Parameter;

/// Trait for optimization algorithms
///
/// Implementations own their learning rates; the trial schedule rescales
/// them in place through `divide_lrs`. Single-group optimizers get the
/// group surface for free from the default methods.
pub trait Optimizer {
    /// Apply one update step using the parameters' accumulated gradients
    fn step(&mut self, params: &mut [Parameter]);

    /// Clear all gradients
    fn zero_grad(&mut self, params: &mut [Parameter]) {
        for param in params {
            param.zero_grad();
        }
    }

    /// Learning rate of the first parameter group
    fn lr(&self) -> f32;

    /// Set the learning rate of the first parameter group
    fn set_lr(&mut self, lr: f32);

    /// Learning rates of all parameter groups
    fn group_lrs(&self) -> Vec<f32> {
        vec![self.lr()]
    }

    /// Divide every group learning rate by `divisor`
    fn divide_lrs(&mut self, divisor: f32) {
        let lr = self.lr();
        self.set_lr(lr / divisor);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::Array1;

    /// Minimal optimizer exercising the default trait methods
    struct TestOptimizer {
        learning_rate: f32,
    }

    impl Optimizer for TestOptimizer {
        fn step(&mut self, params: &mut [Parameter]) {
            for param in params {
                let Some(grad) = param.grad().cloned() else {
                    continue;
                };
                *param.data_mut() -= &(&grad * self.learning_rate);
            }
        }

        fn lr(&self) -> f32 {
            self.learning_rate
        }

        fn set_lr(&mut self, lr: f32) {
            self.learning_rate = lr;
        }
    }

    #[test]
    fn test_default_zero_grad_clears_all() {
        let mut opt = TestOptimizer { learning_rate: 0.1 };
        let mut params = vec![Parameter::zeros(2), Parameter::zeros(3)];
        for param in &mut params {
            param.accumulate_grad(&Array1::ones(param.len()));
        }

        opt.zero_grad(&mut params);
        assert!(params.iter().all(|p| p.grad().is_none()));
    }

    #[test]
    fn test_default_group_surface() {
        let mut opt = TestOptimizer { learning_rate: 0.2 };
        assert_eq!(opt.group_lrs(), vec![0.2]);

        opt.divide_lrs(10.0);
        assert!((opt.lr() - 0.02).abs() < 1e-7);
        assert_eq!(opt.group_lrs(), vec![opt.lr()]);
    }

    #[test]
    fn test_step_skips_params_without_grads() {
        let mut opt = TestOptimizer { learning_rate: 0.1 };
        let mut params = vec![Parameter::from_vec(vec![1.0, 2.0])];
        opt.step(&mut params);
        assert_eq!(params[0].data().to_vec(), vec![1.0, 2.0]);
    }
}
