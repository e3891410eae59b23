//! Category Scorer - aggregates skill grades into per-category scores.

use serde::Serialize;

use crate::domain::assessment::{SkillCatalog, SkillCategory, SkillGrade};
use crate::domain::foundation::Percentage;

/// Lower bound of the "strong" band.
pub const STRONG_THRESHOLD: u8 = 75;

/// Lower bound of the "moderate" band.
pub const MODERATE_THRESHOLD: u8 = 50;

/// Mean grade score of one category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CategoryScore {
    pub category: SkillCategory,
    pub score: Percentage,
    /// Number of graded skills that contributed to the mean.
    pub graded_skills: usize,
}

impl CategoryScore {
    pub fn band(&self) -> ScoreBand {
        ScoreBand::for_score(self.score)
    }
}

/// Qualitative band of a category score, used to colour summary bars.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreBand {
    Strong,
    Moderate,
    Emerging,
}

impl ScoreBand {
    pub fn for_score(score: Percentage) -> Self {
        match score.value() {
            s if s >= STRONG_THRESHOLD => ScoreBand::Strong,
            s if s >= MODERATE_THRESHOLD => ScoreBand::Moderate,
            _ => ScoreBand::Emerging,
        }
    }
}

/// Stateless scorer for category means.
pub struct CategoryScorer;

impl CategoryScorer {
    /// Scores every category that has at least one graded skill.
    ///
    /// Groups appear in the order their category is first encountered in
    /// `grades`, then are sorted by score descending with ties keeping that
    /// order. Grades referencing a skill outside the catalog are skipped.
    pub fn score(grades: &[SkillGrade]) -> Vec<CategoryScore> {
        // (category, points total, count) in first-encountered order
        let mut groups: Vec<(SkillCategory, u32, u32)> = Vec::new();

        for grade in grades {
            let Some(skill) = SkillCatalog::find(grade.skill_id) else {
                tracing::warn!(skill_id = %grade.skill_id, "skipping grade for unknown skill");
                continue;
            };

            match groups.iter_mut().find(|(c, _, _)| *c == skill.category) {
                Some((_, total, count)) => {
                    *total += grade.grade.points();
                    *count += 1;
                }
                None => groups.push((skill.category, grade.grade.points(), 1)),
            }
        }

        let mut scores: Vec<CategoryScore> = groups
            .into_iter()
            .map(|(category, total, count)| CategoryScore {
                category,
                score: Percentage::from_ratio(total, count),
                graded_skills: count as usize,
            })
            .collect();

        // sort_by is stable
        scores.sort_by(|a, b| b.score.cmp(&a.score));
        scores
    }

    /// Looks up one category's score in a scorer result.
    pub fn find(scores: &[CategoryScore], category: SkillCategory) -> Option<Percentage> {
        scores
            .iter()
            .find(|s| s.category == category)
            .map(|s| s.score)
    }
}
