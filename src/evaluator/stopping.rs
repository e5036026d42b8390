//! Plateau-based early stopping

use crate::stats::sample_std;
use std::fmt;

/// Why a trial halted before the epoch cap
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopReason {
    /// Training accuracy flat over the whole window
    TrainPlateau,
    /// Validation accuracy flat while training accuracy is still moving
    ValidationPlateau,
}

impl fmt::Display for StopReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StopReason::TrainPlateau => write!(f, "train accuracy plateaued"),
            StopReason::ValidationPlateau => {
                write!(f, "validation accuracy plateaued while train accuracy kept moving")
            }
        }
    }
}

/// Windowed standard-deviation plateau rule
///
/// Checked every `window` epochs once a full window of history sits
/// behind the current epoch; the inspected slice is the `window` values
/// preceding it. A training-accuracy spread below `tolerance` means the
/// run has converged. A validation spread below `tolerance` while the
/// training spread is above it is read as the onset of overfitting.
///
/// # Example
///
/// ```
/// use valorar::{PlateauRule, StopReason};
///
/// let rule = PlateauRule::default();
/// let flat = vec![90.0_f32; 51];
/// assert_eq!(rule.check(50, &flat, &flat), Some(StopReason::TrainPlateau));
/// ```
#[derive(Debug, Clone)]
pub struct PlateauRule {
    window: usize,
    tolerance: f64,
}

impl PlateauRule {
    /// Epochs per stopping window
    pub const DEFAULT_WINDOW: usize = 50;
    /// Spread below which a window counts as flat
    pub const DEFAULT_TOLERANCE: f64 = 1e-3;

    /// Create a rule with a custom window and tolerance
    pub fn new(window: usize, tolerance: f64) -> Self {
        Self { window, tolerance }
    }

    /// Evaluate the rule after epoch `epoch` has recorded its accuracies
    ///
    /// `train_acc` and `val_acc` are the full per-epoch histories; both
    /// must cover at least `epoch` entries.
    pub fn check(&self, epoch: usize, train_acc: &[f32], val_acc: &[f32]) -> Option<StopReason> {
        if self.window == 0 || epoch < self.window || epoch % self.window != 0 {
            return None;
        }

        let std_train = sample_std(&train_acc[epoch - self.window..epoch]);
        let std_val = sample_std(&val_acc[epoch - self.window..epoch]);

        if std_train < self.tolerance {
            return Some(StopReason::TrainPlateau);
        }
        if std_train > self.tolerance && std_val < self.tolerance {
            return Some(StopReason::ValidationPlateau);
        }
        None
    }
}

impl Default for PlateauRule {
    fn default() -> Self {
        Self::new(Self::DEFAULT_WINDOW, Self::DEFAULT_TOLERANCE)
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// The rule never fires before a full window of history exists
        #[test]
        fn never_fires_before_window(epoch in 0usize..50) {
            let rule = PlateauRule::default();
            let history = vec![90.0_f32; epoch + 1];
            prop_assert_eq!(rule.check(epoch, &history, &history), None);
        }

        /// A constant history always stops on a window boundary
        #[test]
        fn constant_history_stops_on_boundary(multiple in 1usize..5) {
            let rule = PlateauRule::default();
            let epoch = multiple * PlateauRule::DEFAULT_WINDOW;
            let history = vec![85.0_f32; epoch + 1];
            prop_assert_eq!(
                rule.check(epoch, &history, &history),
                Some(StopReason::TrainPlateau)
            );
        }
    }
}
