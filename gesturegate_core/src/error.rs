use thiserror::Error;

/// Invalid-input taxonomy for the consensus engine.
///
/// All of these leave engine state untouched: a rejected frame is not a weak
/// frame, so it does not reset counters and does not advance the frame index.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConsensusError {
    #[error("class count must be at least 1, got {0}")]
    InvalidClassCount(usize),

    #[error("probability vector has {got} entries, engine expects {expected}")]
    VectorLengthMismatch { expected: usize, got: usize },

    #[error("probability at index {index} is not finite")]
    NonFiniteProbability { index: usize },

    #[error("confidence threshold must be in (0, 1], got {0}")]
    InvalidThreshold(f32),

    #[error("required consecutive frames must be at least 1, got {0}")]
    InvalidFrameRequirement(u32),
}
