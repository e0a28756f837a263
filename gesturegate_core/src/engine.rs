use crate::cfg::ConsensusCfg;
use crate::error::ConsensusError;
use crate::state::EngineState;

/// Terminal output of a consensus run: the class that sustained enough
/// consecutive above-threshold frames, and the (0-based) frame on which it did.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct DecisionEvent {
    pub class_index: usize,
    pub frame_index: u64,
}

/// Temporal-consensus engine over a fixed, ordered class set.
///
/// Feeds on one probability vector per frame and fires at most one
/// `DecisionEvent` between resets. Consensus is *consecutive*, not cumulative:
/// any frame whose top probability fails the threshold zeroes every counter,
/// so a decision always reflects an uninterrupted run of confident frames.
///
/// All state is instance state; independent engines never interfere.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct ConsensusEngine {
    cfg: ConsensusCfg,
    counters: Vec<u32>,
    frames_seen: u64,
    state: EngineState,
}

impl ConsensusEngine {
    /// Build an engine for `class_count` classes. The class set is fixed for
    /// the engine's lifetime; only `reset` may change its size.
    pub fn new(cfg: ConsensusCfg, class_count: usize) -> Result<Self, ConsensusError> {
        cfg.validate()?;
        if class_count < 1 {
            return Err(ConsensusError::InvalidClassCount(class_count));
        }
        Ok(Self {
            cfg,
            counters: vec![0; class_count],
            frames_seen: 0,
            state: EngineState::Idle,
        })
    }

    /// Re-initialize to `Idle` with `class_count` zeroed counters. The frame
    /// index restarts at 0.
    pub fn reset(&mut self, class_count: usize) -> Result<(), ConsensusError> {
        if class_count < 1 {
            return Err(ConsensusError::InvalidClassCount(class_count));
        }
        self.counters.clear();
        self.counters.resize(class_count, 0);
        self.frames_seen = 0;
        self.state = EngineState::Idle;
        Ok(())
    }

    /// Consume one probability vector and return a decision if this frame
    /// completed consensus.
    ///
    /// Once halted this is an idempotent no-op. A malformed vector (wrong
    /// length, non-finite entry) is an error and leaves everything untouched —
    /// unlike a weak frame, which is a valid observation that resets all
    /// counters.
    pub fn update(&mut self, vector: &[f32]) -> Result<Option<DecisionEvent>, ConsensusError> {
        if self.state == EngineState::Halted {
            return Ok(None);
        }
        if vector.len() != self.counters.len() {
            return Err(ConsensusError::VectorLengthMismatch {
                expected: self.counters.len(),
                got: vector.len(),
            });
        }
        for (index, p) in vector.iter().enumerate() {
            if !p.is_finite() {
                return Err(ConsensusError::NonFiniteProbability { index });
            }
        }

        let frame_index = self.frames_seen;
        self.frames_seen += 1;

        // Argmax with first-occurrence tie-break: strictly-greater comparison
        // keeps the lowest index on ties.
        let mut top = 0usize;
        for (i, &p) in vector.iter().enumerate().skip(1) {
            if p > vector[top] {
                top = i;
            }
        }

        if vector[top] > self.cfg.confidence_threshold {
            self.counters[top] += 1;
        } else {
            // Hard reset, not decay: one weak frame erases all consensus.
            self.counters.fill(0);
        }

        // First qualifying label in index order wins.
        for (class_index, &count) in self.counters.iter().enumerate() {
            if count >= self.cfg.required_frames {
                self.state = EngineState::Halted;
                return Ok(Some(DecisionEvent {
                    class_index,
                    frame_index,
                }));
            }
        }
        Ok(None)
    }

    #[inline]
    pub fn state(&self) -> EngineState {
        self.state
    }

    #[inline]
    pub fn class_count(&self) -> usize {
        self.counters.len()
    }

    /// Per-class consecutive-hit counters, for observability.
    #[inline]
    pub fn counters(&self) -> &[u32] {
        &self.counters
    }

    /// Number of frames accepted since the last reset. Rejected (malformed)
    /// frames are not counted.
    #[inline]
    pub fn frames_seen(&self) -> u64 {
        self.frames_seen
    }

    #[inline]
    pub fn cfg(&self) -> &ConsensusCfg {
        &self.cfg
    }
}
