//! Trial result types

use super::stopping::StopReason;

/// Outcome of a training trial
///
/// Carries the full accuracy histories so the outer optimization loop can
/// inspect the trajectory, not just the headline number.
#[derive(Debug, Clone)]
pub struct TrainReport {
    /// Highest validation accuracy observed, in percent
    pub best_val_acc: f32,
    /// Epoch index where it occurred (first occurrence on ties)
    pub best_epoch: usize,
    /// Number of completed epochs
    pub epochs_run: usize,
    /// Why training halted before the epoch cap, if it did
    pub stop: Option<StopReason>,
    /// Per-epoch training accuracy, in percent
    pub train_acc_history: Vec<f32>,
    /// Per-epoch validation accuracy, in percent
    pub val_acc_history: Vec<f32>,
}
