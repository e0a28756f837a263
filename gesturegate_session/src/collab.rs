//! Collaborator boundary: the traits the session controller drives.
//!
//! This module is intentionally small and policy-light:
//! - No IO
//! - No async
//! - No domain-specific rules
//!
//! Products provide the camera, classifier, roster, and scheduler behind these
//! traits; the controller only sees the contracts. `MemoryRoster` and
//! `StepScheduler` are the provided basic implementations.

use std::collections::HashMap;

use crate::policy::Outcome;

/// Boxed error at the collaborator boundary. Collaborators own their failure
/// types; the controller only wraps and surfaces them.
pub type CollabError = Box<dyn std::error::Error + Send + Sync>;

/// Source of visual frames (webcam, video file, replay buffer).
pub trait FrameSource {
    type Frame;

    /// Acquire the underlying device. Called once per session start.
    fn open(&mut self) -> Result<(), CollabError>;

    /// Produce the next frame. Called once per tick, in strict order.
    fn next_frame(&mut self) -> Result<Self::Frame, CollabError>;

    /// Release the underlying device. Must be safe to call when not open.
    fn release(&mut self);
}

/// Pose/gesture classifier over a fixed, ordered class set.
pub trait Classifier<Frame> {
    /// Load the model. A failure here is fatal to session start (no retry).
    fn initialize(&mut self) -> Result<(), CollabError>;

    /// The ordered class labels. Fixed for the session once initialized.
    fn class_labels(&self) -> &[String];

    fn class_count(&self) -> usize {
        self.class_labels().len()
    }

    /// One probability per class label, in label order.
    fn estimate(&mut self, frame: &Frame) -> Result<Vec<f32>, CollabError>;
}

/// Where subject outcomes land. Called at most once per session, only after a
/// genuine decision.
pub trait Roster {
    fn record_outcome(&mut self, subject_id: &str, outcome: Outcome) -> Result<(), CollabError>;
}

/// Cooperative tick scheduling. The controller requests the next tick after
/// each completed cycle; `cancel` drops any outstanding request.
///
/// Both calls must be idempotent.
pub trait Scheduler {
    fn schedule_next(&mut self);
    fn cancel(&mut self);
}

/// In-memory roster: subject id -> latest outcome. Re-running a subject
/// overwrites its previous outcome.
#[derive(Clone, Debug, Default, serde::Serialize, serde::Deserialize)]
pub struct MemoryRoster {
    outcomes: HashMap<String, Outcome>,
}

impl MemoryRoster {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn outcome(&self, subject_id: &str) -> Option<Outcome> {
        self.outcomes.get(subject_id).copied()
    }

    pub fn len(&self) -> usize {
        self.outcomes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.outcomes.is_empty()
    }
}

impl Roster for MemoryRoster {
    fn record_outcome(&mut self, subject_id: &str, outcome: Outcome) -> Result<(), CollabError> {
        self.outcomes.insert(subject_id.to_string(), outcome);
        Ok(())
    }
}

/// Pending-flag scheduler. Stands in for a frame-ready callback: the driving
/// loop polls `take_pending` and invokes the controller's `tick` while it
/// returns true.
#[derive(Clone, Debug, Default)]
pub struct StepScheduler {
    pending: bool,
}

impl StepScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Consume the pending flag. Returns whether a tick was requested.
    pub fn take_pending(&mut self) -> bool {
        std::mem::take(&mut self.pending)
    }

    pub fn is_pending(&self) -> bool {
        self.pending
    }
}

impl Scheduler for StepScheduler {
    fn schedule_next(&mut self) {
        self.pending = true;
    }

    fn cancel(&mut self) {
        self.pending = false;
    }
}
