use gesturegate_core::*;

fn engine(threshold: f32, required: u32, classes: usize) -> ConsensusEngine {
    let cfg = ConsensusCfg {
        confidence_threshold: threshold,
        required_frames: required,
    };
    ConsensusEngine::new(cfg, classes).unwrap()
}

#[test]
fn confident_frame_increments_exactly_one_counter() {
    let mut e = engine(0.85, 6, 3);
    e.update(&[0.05, 0.9, 0.05]).unwrap();
    assert_eq!(e.counters(), &[0, 1, 0]);
    e.update(&[0.05, 0.9, 0.05]).unwrap();
    assert_eq!(e.counters(), &[0, 2, 0]);
}

#[test]
fn weak_frame_zeroes_all_counters() {
    let mut e = engine(0.85, 6, 2);
    for _ in 0..4 {
        e.update(&[0.9, 0.1]).unwrap();
    }
    assert_eq!(e.counters(), &[4, 0]);
    e.update(&[0.5, 0.5]).unwrap();
    assert_eq!(e.counters(), &[0, 0]);
}

#[test]
fn max_equal_to_threshold_is_weak() {
    // The hit condition is strictly greater-than.
    let mut e = engine(0.85, 6, 2);
    e.update(&[0.9, 0.1]).unwrap();
    e.update(&[0.85, 0.15]).unwrap();
    assert_eq!(e.counters(), &[0, 0]);
}

#[test]
fn ties_break_to_lowest_index() {
    let mut e = engine(0.4, 2, 3);
    e.update(&[0.5, 0.5, 0.0]).unwrap();
    assert_eq!(e.counters(), &[1, 0, 0]);
    let ev = e.update(&[0.5, 0.5, 0.0]).unwrap().unwrap();
    assert_eq!(ev.class_index, 0);
}

#[test]
fn decision_fires_on_sixth_consecutive_frame() {
    let mut e = engine(0.85, 6, 2);
    for _ in 0..5 {
        assert_eq!(e.update(&[0.9, 0.1]).unwrap(), None);
        assert_eq!(e.state(), EngineState::Idle);
    }
    let ev = e.update(&[0.9, 0.1]).unwrap().unwrap();
    assert_eq!(
        ev,
        DecisionEvent {
            class_index: 0,
            frame_index: 5
        }
    );
    assert_eq!(e.state(), EngineState::Halted);
}

#[test]
fn weak_frame_restarts_the_run() {
    // Five strong, one weak, then a full run of six: the decision comes from
    // the second run only, on the twelfth accepted frame (index 11).
    let mut e = engine(0.85, 6, 2);
    for _ in 0..5 {
        assert_eq!(e.update(&[0.9, 0.1]).unwrap(), None);
    }
    assert_eq!(e.update(&[0.5, 0.5]).unwrap(), None);
    for _ in 0..5 {
        assert_eq!(e.update(&[0.9, 0.1]).unwrap(), None);
    }
    let ev = e.update(&[0.9, 0.1]).unwrap().unwrap();
    assert_eq!(ev.frame_index, 11);
}

#[test]
fn halted_engine_ignores_further_updates() {
    let mut e = engine(0.85, 2, 2);
    e.update(&[0.9, 0.1]).unwrap();
    assert!(e.update(&[0.9, 0.1]).unwrap().is_some());

    assert_eq!(e.update(&[0.1, 0.95]).unwrap(), None);
    assert_eq!(e.counters(), &[2, 0]);
    assert_eq!(e.frames_seen(), 2);
    assert_eq!(e.state(), EngineState::Halted);
}

#[test]
fn reset_returns_to_idle() {
    let mut e = engine(0.85, 2, 2);
    e.update(&[0.9, 0.1]).unwrap();
    e.update(&[0.9, 0.1]).unwrap();
    assert_eq!(e.state(), EngineState::Halted);

    e.reset(3).unwrap();
    assert_eq!(e.state(), EngineState::Idle);
    assert_eq!(e.counters(), &[0, 0, 0]);
    assert_eq!(e.frames_seen(), 0);
}

#[test]
fn zero_class_reset_is_rejected() {
    let mut e = engine(0.85, 6, 2);
    assert_eq!(e.reset(0), Err(ConsensusError::InvalidClassCount(0)));
    // Engine unchanged.
    assert_eq!(e.class_count(), 2);
}

#[test]
fn zero_class_construction_is_rejected() {
    let err = ConsensusEngine::new(ConsensusCfg::default(), 0).unwrap_err();
    assert_eq!(err, ConsensusError::InvalidClassCount(0));
}

#[test]
fn length_mismatch_rejects_frame_and_preserves_state() {
    let mut e = engine(0.85, 6, 2);
    e.update(&[0.9, 0.1]).unwrap();

    let err = e.update(&[0.3, 0.3, 0.4]).unwrap_err();
    assert_eq!(
        err,
        ConsensusError::VectorLengthMismatch {
            expected: 2,
            got: 3
        }
    );
    // Not a weak frame: counters survive and the frame index did not advance.
    assert_eq!(e.counters(), &[1, 0]);
    assert_eq!(e.frames_seen(), 1);
}

#[test]
fn non_finite_probability_rejects_frame() {
    let mut e = engine(0.85, 6, 2);
    e.update(&[0.9, 0.1]).unwrap();

    let err = e.update(&[f32::NAN, 0.1]).unwrap_err();
    assert_eq!(err, ConsensusError::NonFiniteProbability { index: 0 });
    assert_eq!(e.counters(), &[1, 0]);

    let err = e.update(&[0.1, f32::INFINITY]).unwrap_err();
    assert_eq!(err, ConsensusError::NonFiniteProbability { index: 1 });
    assert_eq!(e.counters(), &[1, 0]);
}

#[test]
fn switching_top_class_keeps_stale_counter() {
    // A different confident class does not clear the previous class's count;
    // only a weak frame does.
    let mut e = engine(0.85, 6, 2);
    e.update(&[0.9, 0.1]).unwrap();
    e.update(&[0.1, 0.9]).unwrap();
    assert_eq!(e.counters(), &[1, 1]);
}

#[test]
fn cfg_validation() {
    let bad = ConsensusCfg {
        confidence_threshold: 0.0,
        required_frames: 6,
    };
    assert_eq!(
        ConsensusEngine::new(bad, 2).unwrap_err(),
        ConsensusError::InvalidThreshold(0.0)
    );

    let bad = ConsensusCfg {
        confidence_threshold: 1.5,
        required_frames: 6,
    };
    assert!(matches!(
        ConsensusEngine::new(bad, 2).unwrap_err(),
        ConsensusError::InvalidThreshold(_)
    ));

    let bad = ConsensusCfg {
        confidence_threshold: 0.85,
        required_frames: 0,
    };
    assert_eq!(
        ConsensusEngine::new(bad, 2).unwrap_err(),
        ConsensusError::InvalidFrameRequirement(0)
    );
}

#[test]
fn threshold_of_one_never_fires() {
    // Probabilities live in [0, 1], so a threshold of exactly 1.0 can never
    // be strictly exceeded by a well-formed vector.
    let mut e = engine(1.0, 1, 2);
    assert_eq!(e.update(&[1.0, 0.0]).unwrap(), None);
    assert_eq!(e.counters(), &[0, 0]);
}

#[test]
fn single_class_engine_works() {
    let mut e = engine(0.5, 3, 1);
    assert_eq!(e.update(&[0.9]).unwrap(), None);
    assert_eq!(e.update(&[0.9]).unwrap(), None);
    let ev = e.update(&[0.9]).unwrap().unwrap();
    assert_eq!(ev.class_index, 0);
    assert_eq!(ev.frame_index, 2);
}

#[test]
fn independent_engines_do_not_interfere() {
    let mut a = engine(0.85, 2, 2);
    let mut b = engine(0.85, 2, 2);
    a.update(&[0.9, 0.1]).unwrap();
    assert_eq!(b.counters(), &[0, 0]);
    assert!(a.update(&[0.9, 0.1]).unwrap().is_some());
    assert_eq!(b.state(), EngineState::Idle);
}
