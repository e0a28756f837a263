use std::collections::HashMap;

// ---------------------------------------------------------------------
// Label policy: control how a decided class label maps to a domain
// outcome, without trusting substring heuristics on label names.
// ---------------------------------------------------------------------

/// Domain-level result of a session.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    Approved,
    Rejected,
    /// The decided class has no policy entry. Distinct from `Rejected`: the
    /// gesture was recognized but carries no verdict.
    Ambiguous,
}

/// Explicit class-label -> outcome table, supplied at session configuration
/// time. Lookups are exact; labels absent from the table resolve to
/// `Ambiguous`.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct LabelPolicy {
    outcomes: HashMap<String, Outcome>,
}

impl LabelPolicy {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_pairs<L, I>(pairs: I) -> Self
    where
        L: Into<String>,
        I: IntoIterator<Item = (L, Outcome)>,
    {
        Self {
            outcomes: pairs
                .into_iter()
                .map(|(label, outcome)| (label.into(), outcome))
                .collect(),
        }
    }

    pub fn set(&mut self, label: impl Into<String>, outcome: Outcome) {
        self.outcomes.insert(label.into(), outcome);
    }

    pub fn contains(&self, label: &str) -> bool {
        self.outcomes.contains_key(label)
    }

    /// Resolve a decided label. Unmapped labels are an explicit `Ambiguous`,
    /// never a silent rejection.
    pub fn outcome_for(&self, label: &str) -> Outcome {
        self.outcomes
            .get(label)
            .copied()
            .unwrap_or(Outcome::Ambiguous)
    }

    /// Classifier labels with no policy entry, for flagging at session start.
    pub fn unmapped<'a>(&self, labels: &'a [String]) -> Vec<&'a str> {
        labels
            .iter()
            .filter(|l| !self.outcomes.contains_key(l.as_str()))
            .map(|l| l.as_str())
            .collect()
    }

    pub fn len(&self) -> usize {
        self.outcomes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.outcomes.is_empty()
    }
}

/// Build a small default LabelPolicy covering common approval-gesture label
/// families as exact entries. These are starting points, not absolutes;
/// override per-deployment or from config.
pub fn default_label_policy() -> LabelPolicy {
    LabelPolicy::from_pairs([
        ("approve", Outcome::Approved),
        ("thumbs_up", Outcome::Approved),
        ("up", Outcome::Approved),
        ("reject", Outcome::Rejected),
        ("thumbs_down", Outcome::Rejected),
        ("down", Outcome::Rejected),
    ])
}
