/// Engine lifecycle state.
///
/// `Idle` covers everything before a decision: counters may be zero or
/// mid-accumulation. `Halted` means a decision has fired; the engine stays
/// frozen until the next `reset`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum EngineState {
    #[default]
    Idle,
    Halted,
}
