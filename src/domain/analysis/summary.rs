//! Assessment summary shown on the final wizard step.

use serde::Serialize;

use crate::domain::assessment::{GradeCounts, SkillGradingStore};

use super::category_scorer::{CategoryScore, CategoryScorer};
use super::sport_ranker::{SportRanker, SportRecommendation};

/// Number of categories listed as strongest areas.
pub const STRONGEST_AREA_COUNT: usize = 3;

/// Derived results for the current grading state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AssessmentSummary {
    pub graded_count: usize,
    pub grade_counts: GradeCounts,
    pub category_scores: Vec<CategoryScore>,
    pub recommendations: Vec<SportRecommendation>,
}

impl AssessmentSummary {
    pub fn from_grades(store: &SkillGradingStore) -> Self {
        let category_scores = CategoryScorer::score(store.grades());
        let recommendations = SportRanker::recommend(&category_scores);
        Self {
            graded_count: store.graded_count(),
            grade_counts: store.grade_counts(),
            category_scores,
            recommendations,
        }
    }

    /// False when no skill has been graded yet.
    pub fn is_assessed(&self) -> bool {
        !self.category_scores.is_empty()
    }

    /// The highest scoring categories.
    pub fn strongest_areas(&self) -> &[CategoryScore] {
        let n = self.category_scores.len().min(STRONGEST_AREA_COUNT);
        &self.category_scores[..n]
    }
}
