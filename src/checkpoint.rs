//! Single-slot model checkpointing

use crate::model::ModelState;
use crate::{Error, Result};
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::{Path, PathBuf};

/// Default relative location of the best-model slot
pub const DEFAULT_CHECKPOINT_PATH: &str = "best_model.json";

/// A single overwrite-on-improvement checkpoint slot
///
/// There is no versioning: every save replaces the previous snapshot,
/// last writer wins. The slot is written at most once per epoch by a
/// single-threaded trial, so no locking is needed.
///
/// # Example
///
/// ```no_run
/// use valorar::{CheckpointSlot, Classifier, LinearClassifier};
///
/// let model = LinearClassifier::seeded(4, 2, 7);
/// let slot = CheckpointSlot::default();
/// slot.save(&model.state()).expect("checkpoint write failed");
/// let restored = slot.load().expect("checkpoint read failed");
/// assert_eq!(restored.metadata.architecture, "linear");
/// ```
#[derive(Debug, Clone)]
pub struct CheckpointSlot {
    path: PathBuf,
}

impl CheckpointSlot {
    /// Create a slot at the given path
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Location of the slot on disk
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Whether a snapshot has been written
    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Overwrite the slot with `state`
    pub fn save(&self, state: &ModelState) -> Result<()> {
        let file = File::create(&self.path)?;
        serde_json::to_writer(BufWriter::new(file), state)
            .map_err(|e| Error::Serialization(format!("checkpoint write failed: {e}")))?;
        Ok(())
    }

    /// Read the snapshot back
    ///
    /// A slot that was never written surfaces as the underlying not-found
    /// I/O error.
    pub fn load(&self) -> Result<ModelState> {
        let file = File::open(&self.path)?;
        serde_json::from_reader(BufReader::new(file))
            .map_err(|e| Error::Serialization(format!("checkpoint read failed: {e}")))
    }
}

impl Default for CheckpointSlot {
    fn default() -> Self {
        Self::new(DEFAULT_CHECKPOINT_PATH)
    }
}
