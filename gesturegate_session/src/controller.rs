//! Session controller: one detection session for one selected subject.
//!
//! Owns the consensus engine and drives the cooperative
//! acquire -> estimate -> update cycle, one full cycle per scheduled tick.
//! Updates reach the engine in strict frame-arrival order; there is exactly
//! one caller at a time, so no locking is required.

use tracing::{info, warn};

use gesturegate_core::{ConsensusCfg, ConsensusEngine, DecisionEvent, EngineState};

use crate::collab::{Classifier, FrameSource, Roster, Scheduler};
use crate::error::SessionError;
use crate::policy::{LabelPolicy, Outcome};

/// Session configuration: consensus thresholds plus the label policy table.
/// Immutable once a session has started.
#[derive(Clone, Debug, Default, serde::Serialize, serde::Deserialize)]
pub struct SessionCfg {
    pub consensus: ConsensusCfg,
    pub policy: LabelPolicy,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ControllerState {
    #[default]
    NotRunning,
    Running,
}

/// Result of one controller tick.
#[derive(Clone, Debug, PartialEq)]
pub enum TickOutcome {
    /// No session is running; nothing was done.
    Inactive,
    /// Frame consumed, consensus still building; next tick scheduled.
    Pending,
    /// Malformed classifier output; frame skipped, consensus state preserved,
    /// next tick scheduled.
    Skipped,
    /// Consensus reached. The outcome has been recorded and the session
    /// stopped.
    Decided {
        label: String,
        outcome: Outcome,
        event: DecisionEvent,
    },
}

/// Orchestrates one detection session over injected collaborators.
pub struct SessionController<F, C, R, S>
where
    F: FrameSource,
    C: Classifier<F::Frame>,
    R: Roster,
    S: Scheduler,
{
    cfg: SessionCfg,
    frames: F,
    classifier: C,
    roster: R,
    scheduler: S,
    engine: Option<ConsensusEngine>,
    subject: Option<String>,
    state: ControllerState,
}

impl<F, C, R, S> SessionController<F, C, R, S>
where
    F: FrameSource,
    C: Classifier<F::Frame>,
    R: Roster,
    S: Scheduler,
{
    pub fn new(cfg: SessionCfg, frames: F, classifier: C, roster: R, scheduler: S) -> Self {
        Self {
            cfg,
            frames,
            classifier,
            roster,
            scheduler,
            engine: None,
            subject: None,
            state: ControllerState::NotRunning,
        }
    }

    /// Start a session for `subject`.
    ///
    /// Fails with `NoSubjectSelected` when no subject is given and with
    /// `ModelUnavailable` when the classifier cannot initialize; neither is
    /// retried here. Starting while already running restarts: the previous
    /// session is stopped first.
    pub fn start(&mut self, subject: Option<&str>) -> Result<(), SessionError> {
        let subject = subject.ok_or(SessionError::NoSubjectSelected)?;
        if self.state == ControllerState::Running {
            self.stop();
        }

        self.classifier
            .initialize()
            .map_err(SessionError::ModelUnavailable)?;
        let class_count = self.classifier.class_count();

        for label in self.cfg.policy.unmapped(self.classifier.class_labels()) {
            warn!(label, "classifier label has no policy entry; it will resolve to ambiguous");
        }

        match self.engine.as_mut() {
            Some(engine) => engine.reset(class_count)?,
            None => {
                self.engine = Some(ConsensusEngine::new(self.cfg.consensus.clone(), class_count)?)
            }
        }

        self.frames
            .open()
            .map_err(SessionError::FrameSourceUnavailable)?;

        self.subject = Some(subject.to_string());
        self.state = ControllerState::Running;
        self.scheduler.schedule_next();
        info!(subject, classes = class_count, "session started");
        Ok(())
    }

    /// Stop the session: cancel any pending tick and release the frame source.
    ///
    /// Idempotent, safe to call whether or not a session is running. The
    /// consensus engine is deliberately left as-is for post-session
    /// observability; the next `start` resets it.
    pub fn stop(&mut self) {
        self.scheduler.cancel();
        if self.state == ControllerState::Running {
            self.frames.release();
            info!("session stopped");
        }
        self.state = ControllerState::NotRunning;
    }

    /// Run one acquire -> estimate -> update cycle.
    ///
    /// A mid-session frame-source or classifier failure stops the session
    /// (resources released) before the error is surfaced. An engine
    /// `InvalidInput` only skips the frame: consensus state is preserved and
    /// the session continues.
    pub fn tick(&mut self) -> Result<TickOutcome, SessionError> {
        if self.state != ControllerState::Running {
            return Ok(TickOutcome::Inactive);
        }

        let frame = match self.frames.next_frame() {
            Ok(frame) => frame,
            Err(err) => {
                self.stop();
                return Err(SessionError::FrameAcquisition(err));
            }
        };

        let vector = match self.classifier.estimate(&frame) {
            Ok(vector) => vector,
            Err(err) => {
                self.stop();
                return Err(SessionError::Inference(err));
            }
        };

        let engine = self.engine.as_mut().expect("engine exists while running");
        match engine.update(&vector) {
            Err(err) => {
                warn!(%err, "frame rejected; consensus state preserved");
                self.scheduler.schedule_next();
                Ok(TickOutcome::Skipped)
            }
            Ok(None) => {
                self.scheduler.schedule_next();
                Ok(TickOutcome::Pending)
            }
            Ok(Some(event)) => {
                let label = self.classifier.class_labels()[event.class_index].clone();
                let outcome = self.cfg.policy.outcome_for(&label);
                let subject = self.subject.clone().expect("subject set while running");

                let recorded = self.roster.record_outcome(&subject, outcome);
                self.stop();
                recorded.map_err(SessionError::RecordOutcome)?;

                info!(
                    subject = %subject,
                    label = %label,
                    ?outcome,
                    frame = event.frame_index,
                    "decision recorded"
                );
                Ok(TickOutcome::Decided {
                    label,
                    outcome,
                    event,
                })
            }
        }
    }

    #[inline]
    pub fn state(&self) -> ControllerState {
        self.state
    }

    pub fn subject(&self) -> Option<&str> {
        self.subject.as_deref()
    }

    /// Engine state, if a session has ever been started.
    pub fn engine_state(&self) -> Option<EngineState> {
        self.engine.as_ref().map(|e| e.state())
    }

    pub fn roster(&self) -> &R {
        &self.roster
    }

    pub fn frames(&self) -> &F {
        &self.frames
    }

    pub fn frames_mut(&mut self) -> &mut F {
        &mut self.frames
    }

    pub fn classifier_mut(&mut self) -> &mut C {
        &mut self.classifier
    }

    pub fn scheduler_mut(&mut self) -> &mut S {
        &mut self.scheduler
    }
}
