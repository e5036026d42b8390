//! Classifier seam and reference model
//!
//! The evaluator only orchestrates: models own their parameters, run
//! their own forward pass, and know how to push a logit gradient back
//! through themselves. Anything implementing [`Classifier`] can be
//! evaluated.

mod linear;
mod state;

pub use linear::LinearClassifier;
pub use state::{ModelMetadata, ModelState, ParameterInfo};

use crate::{Parameter, Result};
use ndarray::Array2;

/// A trainable classifier as seen by the evaluator
pub trait Classifier {
    /// Switch between training and evaluation mode
    ///
    /// Evaluation mode must not retain anything for a backward pass.
    fn set_training(&mut self, training: bool);

    /// Compute one row of class logits per input row
    fn forward(&mut self, inputs: &Array2<f32>) -> Array2<f32>;

    /// Accumulate parameter gradients from the gradient of the loss with
    /// respect to the logits of the most recent `forward`
    ///
    /// Only valid in training mode, after a forward pass.
    fn backward(&mut self, grad_logits: &Array2<f32>);

    /// Trainable parameters, in a stable order
    fn parameters_mut(&mut self) -> &mut [Parameter];

    /// Snapshot the current parameter values
    fn state(&self) -> ModelState;

    /// Restore parameter values from a snapshot
    fn load_state(&mut self, state: &ModelState) -> Result<()>;
}
