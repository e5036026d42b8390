//! Candidate fitness evaluation
//!
//! One [`Evaluator`] drives one trial: train a candidate classifier until
//! the plateau rule fires or the epoch cap is reached, keep the best
//! validation epoch in a single checkpoint slot, then score the held-out
//! test set from that checkpoint. The outer optimization loop constructs
//! the collaborators and reads the returned [`TrainReport`] as the
//! candidate's fitness.

mod report;
mod schedule;
mod stopping;
mod test;
mod train;


pub use report::TrainReport;
pub use schedule::LrMilestones;
pub use stopping::{PlateauRule, StopReason};

use crate::checkpoint::CheckpointSlot;
use crate::model::Classifier;
use crate::optim::Optimizer;
use crate::{Batch, Device};

/// Maximum number of training epochs per trial
pub const MAX_EPOCHS: usize = 500;

/// Drives one train/validate/test cycle for a candidate classifier
///
/// Borrows the model and the three batch sets from the caller; owns the
/// optimizer and the checkpoint slot for the duration of the trial.
/// Everything runs serially on the calling thread.
///
/// # Example
///
/// ```no_run
/// use ndarray::{array, Array1};
/// use valorar::{Batch, Device, Evaluator, LinearClassifier, Sgd};
///
/// let train = vec![Batch::new(array![[0.0, 1.0], [1.0, 0.0]], Array1::from(vec![1usize, 0]))];
/// let valid = train.clone();
/// let test = train.clone();
///
/// let mut model = LinearClassifier::seeded(2, 2, 7);
/// let optimizer = Sgd::new(0.1, 0.9);
/// let mut evaluator =
///     Evaluator::new(Device::Cpu, &mut model, &train, &valid, &test, optimizer, 2);
///
/// let report = evaluator.train().expect("trial failed");
/// let test_acc = evaluator.test().expect("no checkpoint");
/// println!(
///     "best {:.3} @ epoch {}, test {:.3}",
///     report.best_val_acc,
///     report.best_epoch + 1,
///     test_acc
/// );
/// ```
pub struct Evaluator<'a, M: Classifier, O: Optimizer> {
    device: Device,
    model: &'a mut M,
    train_data: &'a [Batch],
    valid_data: &'a [Batch],
    test_data: &'a [Batch],
    optimizer: O,
    batch_size: usize,
    checkpoint: CheckpointSlot,
    stopping: PlateauRule,
    schedule: LrMilestones,
}

impl<'a, M: Classifier, O: Optimizer> Evaluator<'a, M, O> {
    /// Create an evaluator over externally constructed collaborators
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        device: Device,
        model: &'a mut M,
        train_data: &'a [Batch],
        valid_data: &'a [Batch],
        test_data: &'a [Batch],
        optimizer: O,
        batch_size: usize,
    ) -> Self {
        Self {
            device,
            model,
            train_data,
            valid_data,
            test_data,
            optimizer,
            batch_size,
            checkpoint: CheckpointSlot::default(),
            stopping: PlateauRule::default(),
            schedule: LrMilestones::default(),
        }
    }

    /// Use a different checkpoint slot (the default is the fixed relative
    /// slot next to the working directory)
    pub fn with_checkpoint(mut self, slot: CheckpointSlot) -> Self {
        self.checkpoint = slot;
        self
    }

    /// Use a different plateau rule
    pub fn with_stopping(mut self, rule: PlateauRule) -> Self {
        self.stopping = rule;
        self
    }

    /// Use a different learning-rate schedule
    pub fn with_schedule(mut self, schedule: LrMilestones) -> Self {
        self.schedule = schedule;
        self
    }

    /// Device this trial runs on
    pub fn device(&self) -> Device {
        self.device
    }

    /// Batch size the data sources were built with
    pub fn batch_size(&self) -> usize {
        self.batch_size
    }

    /// The checkpoint slot in use
    pub fn checkpoint(&self) -> &CheckpointSlot {
        &self.checkpoint
    }
}
