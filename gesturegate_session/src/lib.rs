//! gesturegate_session
//!
//! Outside-world facing orchestration layer for `gesturegate_core`.
//!
//! Responsibilities:
//! - drive the frame-acquisition / inference / consensus-update cadence
//! - map a fired decision to a domain outcome via an explicit label policy
//! - record the outcome to the roster, exactly once per session
//! - manage start/stop lifecycle and resource release
//!
//! Non-goals:
//! - no IO (cameras, storage, and export live behind the collaborator traits)
//! - no async (single-threaded cooperative ticks via an injected scheduler)
//! - no consensus logic (lives in core)

pub mod collab;
pub mod controller;
pub mod error;
pub mod policy;

pub use collab::{
    Classifier, CollabError, FrameSource, MemoryRoster, Roster, Scheduler, StepScheduler,
};
pub use controller::{ControllerState, SessionCfg, SessionController, TickOutcome};
pub use error::SessionError;
pub use policy::{default_label_policy, LabelPolicy, Outcome};
