use crate::error::ConsensusError;

/// Consensus thresholds. Immutable for the lifetime of a session.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct ConsensusCfg {
    /// Minimum per-frame probability for the top class to count as a hit.
    /// Must be in (0, 1].
    pub confidence_threshold: f32,
    /// Consecutive hits required before a decision fires. Must be >= 1.
    pub required_frames: u32,
}

impl Default for ConsensusCfg {
    fn default() -> Self {
        Self {
            confidence_threshold: 0.85,
            required_frames: 6,
        }
    }
}

impl ConsensusCfg {
    pub fn validate(&self) -> Result<(), ConsensusError> {
        if !self.confidence_threshold.is_finite()
            || self.confidence_threshold <= 0.0
            || self.confidence_threshold > 1.0
        {
            return Err(ConsensusError::InvalidThreshold(self.confidence_threshold));
        }
        if self.required_frames < 1 {
            return Err(ConsensusError::InvalidFrameRequirement(self.required_frames));
        }
        Ok(())
    }
}
