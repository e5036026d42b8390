//! Fitness evaluation for classifier candidates
//!
//! `valorar` is the evaluation step of a hyper-parameter optimization
//! loop: given an externally constructed classifier, optimizer, and three
//! batched data sets, it trains the candidate until a plateau rule fires
//! or the epoch cap is reached, keeps the best validation epoch in a
//! single checkpoint slot, and scores the held-out test set from that
//! checkpoint.
//!
//! The pieces:
//! - [`Evaluator`] — drives one trial (`train()` then `test()`)
//! - [`PlateauRule`] — windowed standard-deviation early stopping
//! - [`LrMilestones`] — the trial's fixed learning-rate decay points
//! - [`Classifier`] / [`Optimizer`] — the seams collaborators implement
//! - [`CheckpointSlot`] — the single best-model snapshot on disk
//!
//! # Example
//!
//! ```no_run
//! use ndarray::{array, Array1};
//! use valorar::{Batch, Device, Evaluator, LinearClassifier, Sgd};
//!
//! let train = vec![Batch::new(
//!     array![[0.0, 1.0], [1.0, 0.0]],
//!     Array1::from(vec![1usize, 0]),
//! )];
//! let valid = train.clone();
//! let test = train.clone();
//!
//! let mut model = LinearClassifier::seeded(2, 2, 7);
//! let optimizer = Sgd::new(0.1, 0.9);
//! let mut evaluator =
//!     Evaluator::new(Device::Cpu, &mut model, &train, &valid, &test, optimizer, 2);
//!
//! let report = evaluator.train().expect("trial failed");
//! let test_acc = evaluator.test().expect("no checkpoint written");
//! println!(
//!     "best val {:.3} @ epoch {}, test {:.3}",
//!     report.best_val_acc,
//!     report.best_epoch + 1,
//!     test_acc
//! );
//! ```

mod batch;
mod device;
mod error;
mod parameter;
mod stats;

pub mod checkpoint;
pub mod evaluator;
pub mod loss;
pub mod metrics;
pub mod model;
pub mod optim;

pub use batch::Batch;
pub use checkpoint::{CheckpointSlot, DEFAULT_CHECKPOINT_PATH};
pub use device::Device;
pub use error::{Error, Result};
pub use evaluator::{Evaluator, LrMilestones, PlateauRule, StopReason, TrainReport, MAX_EPOCHS};
pub use loss::{CrossEntropyLoss, LossFn};
pub use metrics::AccuracyMeter;
pub use model::{Classifier, LinearClassifier, ModelMetadata, ModelState, ParameterInfo};
pub use optim::{Optimizer, Sgd};
pub use parameter::Parameter;
pub use stats::sample_std;
