//! AssessmentStep - the five wizard steps in their fixed linear order.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::StateMachine;

/// Steps of the assessment wizard.
///
/// `PreTest(0) → Warmup(1) → Skills(2) → Questionnaire(3) → Summary(4)`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AssessmentStep {
    PreTest,
    Warmup,
    Skills,
    Questionnaire,
    Summary,
}

impl AssessmentStep {
    /// The canonical step order.
    pub const ORDER: [AssessmentStep; 5] = [
        AssessmentStep::PreTest,
        AssessmentStep::Warmup,
        AssessmentStep::Skills,
        AssessmentStep::Questionnaire,
        AssessmentStep::Summary,
    ];

    pub fn all() -> &'static [AssessmentStep; 5] {
        &Self::ORDER
    }

    /// Returns the 0-based step index.
    pub fn index(&self) -> usize {
        match self {
            AssessmentStep::PreTest => 0,
            AssessmentStep::Warmup => 1,
            AssessmentStep::Skills => 2,
            AssessmentStep::Questionnaire => 3,
            AssessmentStep::Summary => 4,
        }
    }

    pub fn from_index(index: usize) -> Option<AssessmentStep> {
        Self::ORDER.get(index).copied()
    }

    pub fn next(&self) -> Option<AssessmentStep> {
        Self::from_index(self.index() + 1)
    }

    pub fn previous(&self) -> Option<AssessmentStep> {
        self.index().checked_sub(1).and_then(Self::from_index)
    }

    pub fn is_first(&self) -> bool {
        self.previous().is_none()
    }

    pub fn is_last(&self) -> bool {
        self.next().is_none()
    }

    /// Short title used by the step indicator.
    pub fn title(&self) -> &'static str {
        match self {
            AssessmentStep::PreTest => "Pre-Test",
            AssessmentStep::Warmup => "Warmup",
            AssessmentStep::Skills => "Skills",
            AssessmentStep::Questionnaire => "Questionnaire",
            AssessmentStep::Summary => "Summary",
        }
    }

    /// Overall progress when this step is current (20% per step).
    pub fn progress_percent(&self) -> u8 {
        ((self.index() + 1) * 100 / Self::ORDER.len()) as u8
    }
}

impl StateMachine for AssessmentStep {
    fn can_transition_to(&self, target: &Self) -> bool {
        self.next() == Some(*target) || self.previous() == Some(*target)
    }

    fn valid_transitions(&self) -> Vec<Self> {
        self.previous().into_iter().chain(self.next()).collect()
    }
}

impl fmt::Display for AssessmentStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.title())
    }
}
