//! gesturegate_core
//!
//! Temporal-consensus decision engine: turns a noisy per-frame stream of
//! classification scores into a single reliable decision per session.
//!
//! Responsibilities:
//! - track per-class consecutive above-threshold hit counters
//! - fire exactly one `DecisionEvent` once a class sustains enough hits
//! - hard-reset all counters on any weak frame
//!
//! Non-goals:
//! - no IO
//! - no async
//! - no knowledge of cameras, classifiers, or rosters (lives in the session crate)

pub mod cfg;
pub mod engine;
pub mod error;
pub mod state;

pub use cfg::ConsensusCfg;
pub use engine::{ConsensusEngine, DecisionEvent};
pub use error::ConsensusError;
pub use state::EngineState;
