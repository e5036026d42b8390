//! Held-out scoring from the best checkpoint

use super::Evaluator;
use crate::model::Classifier;
use crate::optim::Optimizer;
use crate::Result;

impl<M: Classifier, O: Optimizer> Evaluator<'_, M, O> {
    /// Restore the best checkpoint and score the test set
    ///
    /// Loads the snapshot written by the best validation epoch — not
    /// whatever the model drifted to afterwards — and measures accuracy
    /// over the test data with gradients off. Fails when the slot was
    /// never written; the underlying not-found I/O error propagates.
    pub fn test(&mut self) -> Result<f32> {
        let state = self.checkpoint.load()?;
        self.model.load_state(&state)?;
        Ok(self.eval_pass(self.test_data))
    }
}
