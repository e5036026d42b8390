//! Learning-rate milestones for a trial

use crate::optim::Optimizer;

/// Fixed decay milestones applied in place to the optimizer
///
/// One tenfold cut when the run reaches `first_cut`, then a fivefold cut
/// at every `interval` epochs beyond `first_cut + 1`. Every parameter
/// group is rescaled.
///
/// # Example
///
/// ```
/// use valorar::LrMilestones;
///
/// let schedule = LrMilestones::default();
/// assert_eq!(schedule.divisor_at(100), Some(10.0));
/// assert_eq!(schedule.divisor_at(150), None);
/// assert_eq!(schedule.divisor_at(200), Some(5.0));
/// ```
#[derive(Debug, Clone)]
pub struct LrMilestones {
    first_cut: usize,
    interval: usize,
}

impl LrMilestones {
    /// Divisor applied at the first milestone
    pub const FIRST_CUT_DIVISOR: f32 = 10.0;
    /// Divisor applied at every later milestone
    pub const LATER_DIVISOR: f32 = 5.0;

    /// Create a schedule with a custom first milestone and interval
    pub fn new(first_cut: usize, interval: usize) -> Self {
        Self { first_cut, interval }
    }

    /// Divisor to apply at epoch `epoch`, if any
    pub fn divisor_at(&self, epoch: usize) -> Option<f32> {
        if epoch == self.first_cut {
            Some(Self::FIRST_CUT_DIVISOR)
        } else if epoch > self.first_cut + 1 && self.interval != 0 && epoch % self.interval == 0 {
            Some(Self::LATER_DIVISOR)
        } else {
            None
        }
    }

    /// Rescale every optimizer group for `epoch`
    pub fn apply<O: Optimizer + ?Sized>(&self, epoch: usize, optimizer: &mut O) {
        if let Some(divisor) = self.divisor_at(epoch) {
            optimizer.divide_lrs(divisor);
        }
    }
}

impl Default for LrMilestones {
    fn default() -> Self {
        Self::new(100, 100)
    }
}
