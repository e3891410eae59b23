//! Grade - competency level demonstrated on a single skill.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Ordered competency levels, lowest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Grade {
    Initial,
    Emerging,
    Developing,
    Proficient,
}

impl Grade {
    /// Returns all grades from lowest to highest.
    pub fn all() -> &'static [Grade] {
        &[
            Grade::Initial,
            Grade::Emerging,
            Grade::Developing,
            Grade::Proficient,
        ]
    }

    /// Numeric value used when averaging grades into a category score.
    pub fn points(&self) -> u32 {
        match self {
            Grade::Initial => 25,
            Grade::Emerging => 50,
            Grade::Developing => 75,
            Grade::Proficient => 100,
        }
    }

    /// Returns the display label.
    pub fn label(&self) -> &'static str {
        match self {
            Grade::Initial => "Initial",
            Grade::Emerging => "Emerging",
            Grade::Developing => "Developing",
            Grade::Proficient => "Proficient",
        }
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}
