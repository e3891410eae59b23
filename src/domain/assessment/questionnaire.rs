//! Psychological questionnaire - three fixed questions on confidence,
//! motivation and sport interests.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

use crate::domain::foundation::ValidationError;

use super::errors::AssessmentError;

/// Identifier of a questionnaire item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QuestionId(u8);

impl QuestionId {
    pub const fn new(value: u8) -> Self {
        Self(value)
    }

    pub fn value(&self) -> u8 {
        self.0
    }
}

impl fmt::Display for QuestionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The input a question accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuestionKind {
    /// Integer rating within `min..=max`.
    Scale { min: u8, max: u8 },
    /// Exactly one of the options.
    Choice { options: &'static [&'static str] },
    /// Any subset of the options.
    MultiChoice { options: &'static [&'static str] },
}

impl QuestionKind {
    fn name(&self) -> &'static str {
        match self {
            QuestionKind::Scale { .. } => "scale",
            QuestionKind::Choice { .. } => "single-choice",
            QuestionKind::MultiChoice { .. } => "multi-choice",
        }
    }
}

/// A questionnaire item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Question {
    pub id: QuestionId,
    pub prompt: &'static str,
    pub kind: QuestionKind,
}

pub const CONFIDENCE: QuestionId = QuestionId::new(1);
pub const MOTIVATION: QuestionId = QuestionId::new(2);
pub const SPORT_INTERESTS: QuestionId = QuestionId::new(3);

/// The fixed questionnaire.
pub const QUESTIONS: [Question; 3] = [
    Question {
        id: CONFIDENCE,
        prompt: "How confident do you feel during training?",
        kind: QuestionKind::Scale { min: 1, max: 10 },
    },
    Question {
        id: MOTIVATION,
        prompt: "What motivates you most?",
        kind: QuestionKind::Choice {
            options: &["Winning", "Improving", "Friends", "Family"],
        },
    },
    Question {
        id: SPORT_INTERESTS,
        prompt: "Which sports interest you?",
        kind: QuestionKind::MultiChoice {
            options: &["Football", "Basketball", "Athletics", "Swimming"],
        },
    },
];

/// Number of answered questions required to leave the questionnaire step.
pub const REQUIRED_ANSWERS: usize = 3;

/// Looks up a question by id.
pub fn question(id: QuestionId) -> Option<&'static Question> {
    QUESTIONS.iter().find(|q| q.id == id)
}

/// A recorded answer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Answer {
    Scale(u8),
    Choice(String),
    MultiChoice(Vec<String>),
}

/// Answers keyed by question.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QuestionnaireAnswers(BTreeMap<QuestionId, Answer>);

impl QuestionnaireAnswers {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a rating for a scale question.
    pub fn answer_scale(&mut self, id: QuestionId, value: u8) -> Result<(), AssessmentError> {
        let q = Self::lookup(id)?;
        match q.kind {
            QuestionKind::Scale { min, max } => {
                if !(min..=max).contains(&value) {
                    return Err(ValidationError::out_of_range(
                        "scale",
                        min as i32,
                        max as i32,
                        value as i32,
                    )
                    .into());
                }
                self.0.insert(id, Answer::Scale(value));
                Ok(())
            }
            other => Err(Self::wrong_kind(id, other)),
        }
    }

    /// Records the single selected option for a choice question.
    pub fn choose(&mut self, id: QuestionId, option: &str) -> Result<(), AssessmentError> {
        let q = Self::lookup(id)?;
        match q.kind {
            QuestionKind::Choice { options } => {
                let option = Self::known_option(options, option)?;
                self.0.insert(id, Answer::Choice(option.to_string()));
                Ok(())
            }
            other => Err(Self::wrong_kind(id, other)),
        }
    }

    /// Adds or removes an option on a multi-choice question.
    ///
    /// Returns whether the option is selected afterwards. The question stays
    /// answered even when the last option is deselected.
    pub fn toggle_option(&mut self, id: QuestionId, option: &str) -> Result<bool, AssessmentError> {
        let q = Self::lookup(id)?;
        let options = match q.kind {
            QuestionKind::MultiChoice { options } => options,
            other => return Err(Self::wrong_kind(id, other)),
        };
        let option = Self::known_option(options, option)?;

        let entry = self
            .0
            .entry(id)
            .or_insert_with(|| Answer::MultiChoice(Vec::new()));
        let selected = match entry {
            Answer::MultiChoice(selected) => selected,
            // Only multi-choice answers are ever stored under a multi-choice id.
            _ => return Err(Self::wrong_kind(id, q.kind)),
        };

        if let Some(pos) = selected.iter().position(|s| s == option) {
            selected.remove(pos);
            Ok(false)
        } else {
            selected.push(option.to_string());
            Ok(true)
        }
    }

    /// Returns the answer to a question, if any.
    pub fn answer(&self, id: QuestionId) -> Option<&Answer> {
        self.0.get(&id)
    }

    /// Number of distinct questions with a recorded answer.
    pub fn answered_count(&self) -> usize {
        self.0.len()
    }

    pub fn is_complete(&self) -> bool {
        self.answered_count() >= REQUIRED_ANSWERS
    }

    pub fn iter(&self) -> impl Iterator<Item = (&QuestionId, &Answer)> {
        self.0.iter()
    }

    fn lookup(id: QuestionId) -> Result<&'static Question, AssessmentError> {
        question(id).ok_or(AssessmentError::UnknownQuestion(id))
    }

    fn known_option(
        options: &'static [&'static str],
        option: &str,
    ) -> Result<&'static str, AssessmentError> {
        options
            .iter()
            .find(|o| **o == option)
            .copied()
            .ok_or_else(|| {
                ValidationError::invalid_format("option", format!("unknown option '{}'", option))
                    .into()
            })
    }

    fn wrong_kind(question: QuestionId, kind: QuestionKind) -> AssessmentError {
        AssessmentError::WrongAnswerKind {
            question,
            expected: kind.name(),
        }
    }
}
