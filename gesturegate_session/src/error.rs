use thiserror::Error;

use crate::collab::CollabError;
use gesturegate_core::ConsensusError;

/// Session-level failures. Start failures are surfaced without retry; the
/// operator re-invokes `start`. Mid-session collaborator failures are surfaced
/// after the controller has released its resources.
#[derive(Error, Debug)]
pub enum SessionError {
    #[error("no subject selected")]
    NoSubjectSelected,

    #[error("classifier model unavailable")]
    ModelUnavailable(#[source] CollabError),

    #[error("frame source unavailable")]
    FrameSourceUnavailable(#[source] CollabError),

    #[error("frame acquisition failed")]
    FrameAcquisition(#[source] CollabError),

    #[error("classifier inference failed")]
    Inference(#[source] CollabError),

    #[error("failed to record outcome")]
    RecordOutcome(#[source] CollabError),

    #[error(transparent)]
    Consensus(#[from] ConsensusError),
}
