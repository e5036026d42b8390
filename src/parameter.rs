//! Trainable parameter storage

use ndarray::Array1;

/// A flat trainable parameter with an optional gradient slot
///
/// Models own their parameters and fill the gradient slot during the
/// backward pass; optimizers consume it in `step`.
#[derive(Debug, Clone)]
pub struct Parameter {
    data: Array1<f32>,
    grad: Option<Array1<f32>>,
}

impl Parameter {
    /// Create a parameter from raw values
    pub fn from_vec(data: Vec<f32>) -> Self {
        Self { data: Array1::from(data), grad: None }
    }

    /// Create a zero-initialized parameter of the given length
    pub fn zeros(len: usize) -> Self {
        Self { data: Array1::zeros(len), grad: None }
    }

    /// Number of values in this parameter
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Whether the parameter holds no values
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Current values
    pub fn data(&self) -> &Array1<f32> {
        &self.data
    }

    /// Mutable access to the values
    pub fn data_mut(&mut self) -> &mut Array1<f32> {
        &mut self.data
    }

    /// Accumulated gradient, if any backward pass has run since the last
    /// `zero_grad`
    pub fn grad(&self) -> Option<&Array1<f32>> {
        self.grad.as_ref()
    }

    /// Add `delta` into the gradient slot, allocating it on first use
    pub fn accumulate_grad(&mut self, delta: &Array1<f32>) {
        assert_eq!(
            delta.len(),
            self.data.len(),
            "gradient length {} does not match parameter length {}",
            delta.len(),
            self.data.len()
        );
        match &mut self.grad {
            Some(grad) => *grad += delta,
            None => self.grad = Some(delta.clone()),
        }
    }

    /// Clear the gradient slot
    pub fn zero_grad(&mut self) {
        self.grad = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accumulate_grad_allocates_then_adds() {
        let mut param = Parameter::zeros(3);
        assert!(param.grad().is_none());

        param.accumulate_grad(&Array1::from(vec![1.0, 2.0, 3.0]));
        param.accumulate_grad(&Array1::from(vec![0.5, 0.5, 0.5]));

        let grad = param.grad().expect("grad should be set");
        assert_eq!(grad.to_vec(), vec![1.5, 2.5, 3.5]);
    }

    #[test]
    fn test_zero_grad_clears_slot() {
        let mut param = Parameter::from_vec(vec![1.0, 2.0]);
        param.accumulate_grad(&Array1::from(vec![1.0, 1.0]));
        param.zero_grad();
        assert!(param.grad().is_none());
    }

    #[test]
    #[should_panic(expected = "does not match parameter length")]
    fn test_accumulate_grad_length_mismatch() {
        let mut param = Parameter::zeros(2);
        param.accumulate_grad(&Array1::from(vec![1.0, 2.0, 3.0]));
    }

    #[test]
    fn test_data_mut_updates_values() {
        let mut param = Parameter::from_vec(vec![1.0, 2.0]);
        param.data_mut()[0] = 5.0;
        assert_eq!(param.data()[0], 5.0);
        assert_eq!(param.len(), 2);
        assert!(!param.is_empty());
    }
}
