//! Sport Recommendation Ranker - matches category strengths against sport profiles.

use serde::Serialize;
use std::fmt;

use crate::domain::assessment::SkillCategory;
use crate::domain::foundation::Percentage;

use super::category_scorer::{CategoryScore, CategoryScorer};

/// Number of top categories a sport is matched against.
pub const TOP_CATEGORY_COUNT: usize = 2;

/// Number of recommendations returned to the athlete.
pub const RECOMMENDATION_COUNT: usize = 3;

/// Score assumed for a strength category with no graded skills.
pub const NEUTRAL_CATEGORY_SCORE: u32 = 50;

/// Sports the ranker can recommend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Sport {
    Athletics,
    Basketball,
    Football,
    Gymnastics,
    Swimming,
    Tennis,
}

impl Sport {
    pub fn name(&self) -> &'static str {
        match self {
            Sport::Athletics => "Athletics",
            Sport::Basketball => "Basketball",
            Sport::Football => "Football",
            Sport::Gymnastics => "Gymnastics",
            Sport::Swimming => "Swimming",
            Sport::Tennis => "Tennis",
        }
    }

    /// Icon identifier used by the mobile client.
    pub fn icon(&self) -> &'static str {
        match self {
            Sport::Athletics => "walk",
            Sport::Basketball => "basketball",
            Sport::Football => "football",
            Sport::Gymnastics => "body",
            Sport::Swimming => "water",
            Sport::Tennis => "tennisball",
        }
    }
}

impl fmt::Display for Sport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// A sport and the two categories it relies on most.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SportProfile {
    pub sport: Sport,
    pub strengths: [SkillCategory; 2],
}

/// The fixed sport catalog, in tiebreak order.
pub const SPORT_PROFILES: [SportProfile; 6] = [
    SportProfile {
        sport: Sport::Athletics,
        strengths: [SkillCategory::Running, SkillCategory::BalanceStability],
    },
    SportProfile {
        sport: Sport::Basketball,
        strengths: [SkillCategory::ObjectControlUpper, SkillCategory::LocomotorControl],
    },
    SportProfile {
        sport: Sport::Football,
        strengths: [SkillCategory::ObjectControlLower, SkillCategory::Running],
    },
    SportProfile {
        sport: Sport::Gymnastics,
        strengths: [SkillCategory::BalanceStability, SkillCategory::LocomotorControl],
    },
    SportProfile {
        sport: Sport::Swimming,
        strengths: [SkillCategory::LocomotorControl, SkillCategory::BalanceStability],
    },
    SportProfile {
        sport: Sport::Tennis,
        strengths: [SkillCategory::ObjectControlUpper, SkillCategory::BalanceStability],
    },
];

/// A ranked sport suggestion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SportRecommendation {
    pub sport: Sport,
    pub strengths: [SkillCategory; 2],
    /// How many of the sport's strengths are among the athlete's top categories (0-2).
    pub match_score: u8,
    pub match_percentage: Percentage,
}

/// Stateless ranker over the sport catalog.
pub struct SportRanker;

impl SportRanker {
    /// Scores every sport in the catalog, best match first.
    ///
    /// `scores` must be in scorer order (descending); the first two entries
    /// are the athlete's top categories. Ties keep catalog order.
    pub fn rank_all(scores: &[CategoryScore]) -> Vec<SportRecommendation> {
        let top: Vec<SkillCategory> = scores
            .iter()
            .take(TOP_CATEGORY_COUNT)
            .map(|s| s.category)
            .collect();

        let mut ranked: Vec<SportRecommendation> = SPORT_PROFILES
            .iter()
            .map(|profile| Self::match_sport(profile, &top, scores))
            .collect();

        ranked.sort_by(|a, b| b.match_percentage.cmp(&a.match_percentage));
        ranked
    }

    /// The top three sports for the given category scores.
    pub fn recommend(scores: &[CategoryScore]) -> Vec<SportRecommendation> {
        let mut ranked = Self::rank_all(scores);
        ranked.truncate(RECOMMENDATION_COUNT);
        ranked
    }

    fn match_sport(
        profile: &SportProfile,
        top: &[SkillCategory],
        scores: &[CategoryScore],
    ) -> SportRecommendation {
        let match_score = profile
            .strengths
            .iter()
            .filter(|c| top.contains(c))
            .count() as u32;

        let strength_total: u32 = profile
            .strengths
            .iter()
            .map(|c| {
                CategoryScorer::find(scores, *c)
                    .map(|p| u32::from(p.value()))
                    .unwrap_or(NEUTRAL_CATEGORY_SCORE)
            })
            .sum();

        SportRecommendation {
            sport: profile.sport,
            strengths: profile.strengths,
            match_score: match_score as u8,
            match_percentage: match_percentage(match_score, strength_total),
        }
    }
}

/// `(match_score / 2) * 40 + mean(strengths) * 0.6`, rounded half up.
///
/// Scaled by ten: `20 * m + 0.3 * total` becomes `(200 * m + 3 * total) / 10`.
fn match_percentage(match_score: u32, strength_total: u32) -> Percentage {
    Percentage::from_ratio(200 * match_score + 3 * strength_total, 10)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn score(category: SkillCategory, value: u8) -> CategoryScore {
        CategoryScore {
            category,
            score: Percentage::new(value),
            graded_skills: 1,
        }
    }

    #[test]
    fn no_scores_gives_thirty_for_every_sport_in_catalog_order() {
        let ranked = SportRanker::rank_all(&[]);

        assert_eq!(ranked.len(), 6);
        assert!(ranked.iter().all(|r| r.match_percentage.value() == 30));
        assert!(ranked.iter().all(|r| r.match_score == 0));
        let sports: Vec<Sport> = ranked.iter().map(|r| r.sport).collect();
        let catalog: Vec<Sport> = SPORT_PROFILES.iter().map(|p| p.sport).collect();
        assert_eq!(sports, catalog);
    }

    #[test]
    fn running_only_at_75_puts_athletics_and_football_first() {
        let scores = vec![score(SkillCategory::Running, 75)];

        let top = SportRanker::recommend(&scores);

        assert_eq!(top.len(), 3);
        assert_eq!(top[0].sport, Sport::Athletics);
        assert_eq!(top[0].match_score, 1);
        assert_eq!(top[0].match_percentage.value(), 58);
        assert_eq!(top[1].sport, Sport::Football);
        assert_eq!(top[1].match_percentage.value(), 58);
        assert_eq!(top[2].sport, Sport::Basketball);
        assert_eq!(top[2].match_percentage.value(), 30);
    }

    #[test]
    fn matching_both_strengths_at_full_marks_is_100() {
        let scores = vec![
            score(SkillCategory::ObjectControlUpper, 100),
            score(SkillCategory::BalanceStability, 100),
        ];

        let top = SportRanker::recommend(&scores);

        assert_eq!(top[0].sport, Sport::Tennis);
        assert_eq!(top[0].match_score, 2);
        assert_eq!(top[0].match_percentage, Percentage::HUNDRED);
    }

    #[test]
    fn lowest_possible_match_is_fifteen() {
        let scores = vec![
            score(SkillCategory::ObjectControlLower, 100),
            score(SkillCategory::LocomotorControl, 100),
            score(SkillCategory::ObjectControlUpper, 25),
            score(SkillCategory::Running, 25),
            score(SkillCategory::BalanceStability, 25),
        ];

        let tennis = SportRanker::rank_all(&scores)
            .into_iter()
            .find(|r| r.sport == Sport::Tennis)
            .unwrap();

        assert_eq!(tennis.match_score, 0);
        assert_eq!(tennis.match_percentage.value(), 15);
    }

    #[test]
    fn match_percentage_rounds_half_up() {
        // 20 + 0.3 * 125 = 57.5
        assert_eq!(match_percentage(1, 125).value(), 58);
        // 0.3 * 101 = 30.3
        assert_eq!(match_percentage(0, 101).value(), 30);
    }
}
