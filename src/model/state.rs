//! Serializable model snapshots

use crate::{Error, Result};
use serde::{Deserialize, Serialize};

/// Metadata describing a snapshotted model
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelMetadata {
    /// Model name/identifier
    pub name: String,
    /// Architecture family (e.g. "linear", "cnn")
    pub architecture: String,
}

impl ModelMetadata {
    /// Create new metadata
    pub fn new(name: impl Into<String>, architecture: impl Into<String>) -> Self {
        Self { name: name.into(), architecture: architecture.into() }
    }
}

/// Shape information for one snapshotted parameter
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParameterInfo {
    /// Parameter name (e.g. "weight", "bias")
    pub name: String,
    /// Number of values the parameter occupies in the flat data
    pub len: usize,
}

/// Flattened snapshot of a model's parameters
///
/// Parameter values are concatenated into one flat vector in declaration
/// order; `parameters` records how to split it back apart.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelState {
    /// Model metadata
    pub metadata: ModelMetadata,
    /// Per-parameter layout information
    pub parameters: Vec<ParameterInfo>,
    /// Concatenated parameter values
    pub data: Vec<f32>,
}

impl ModelState {
    /// Start an empty snapshot
    pub fn new(metadata: ModelMetadata) -> Self {
        Self { metadata, parameters: Vec::new(), data: Vec::new() }
    }

    /// Append one named parameter's values
    pub fn push_parameter(&mut self, name: impl Into<String>, values: &[f32]) {
        self.parameters.push(ParameterInfo { name: name.into(), len: values.len() });
        self.data.extend_from_slice(values);
    }

    /// Split the flat data back into named per-parameter slices
    ///
    /// Fails when the layout information does not account for exactly the
    /// values present, which indicates a corrupt or foreign snapshot.
    pub fn slices(&self) -> Result<Vec<(&str, &[f32])>> {
        let mut out = Vec::with_capacity(self.parameters.len());
        let mut offset = 0;
        for info in &self.parameters {
            let end = offset + info.len;
            if end > self.data.len() {
                return Err(Error::StateMismatch(format!(
                    "parameter {:?} overruns snapshot data ({} > {})",
                    info.name,
                    end,
                    self.data.len()
                )));
            }
            out.push((info.name.as_str(), &self.data[offset..end]));
            offset = end;
        }
        if offset != self.data.len() {
            return Err(Error::StateMismatch(format!(
                "snapshot holds {} values but parameters account for {offset}",
                self.data.len()
            )));
        }
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_and_slice_round_trip() {
        let mut state = ModelState::new(ModelMetadata::new("test-model", "linear"));
        state.push_parameter("weight", &[1.0, 2.0, 3.0, 4.0]);
        state.push_parameter("bias", &[0.5]);

        let slices = state.slices().expect("layout should be consistent");
        assert_eq!(slices.len(), 2);
        assert_eq!(slices[0], ("weight", &[1.0, 2.0, 3.0, 4.0][..]));
        assert_eq!(slices[1], ("bias", &[0.5][..]));
    }

    #[test]
    fn test_overrun_is_rejected() {
        let mut state = ModelState::new(ModelMetadata::new("bad", "linear"));
        state.push_parameter("weight", &[1.0, 2.0]);
        state.data.truncate(1);

        assert!(state.slices().is_err());
    }

    #[test]
    fn test_leftover_data_is_rejected() {
        let mut state = ModelState::new(ModelMetadata::new("bad", "linear"));
        state.push_parameter("weight", &[1.0]);
        state.data.push(9.0);

        assert!(state.slices().is_err());
    }

    #[test]
    fn test_snapshot_serializes() {
        let mut state = ModelState::new(ModelMetadata::new("roundtrip", "linear"));
        state.push_parameter("bias", &[0.25, -0.25]);

        let json = serde_json::to_string(&state).expect("snapshot should encode");
        let restored: ModelState = serde_json::from_str(&json).expect("snapshot should decode");

        assert_eq!(restored.metadata.name, "roundtrip");
        assert_eq!(restored.data, state.data);
        assert_eq!(restored.parameters.len(), 1);
    }
}
