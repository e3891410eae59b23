//! Analysis Module - Pure domain services for assessment results.
//!
//! # Components
//!
//! - `CategoryScorer` - mean grade per skill category, ranked
//! - `SportRanker` - matches top categories against sport profiles
//! - `AssessmentSummary` - everything the summary step renders
//!
//! All functions are pure and stateless. They take grades as input and return
//! computed results; no ports are involved.

mod category_scorer;
mod sport_ranker;
mod summary;

pub use category_scorer::{
    CategoryScore, CategoryScorer, ScoreBand, MODERATE_THRESHOLD, STRONG_THRESHOLD,
};
pub use sport_ranker::{
    Sport, SportProfile, SportRanker, SportRecommendation, NEUTRAL_CATEGORY_SCORE,
    RECOMMENDATION_COUNT, SPORT_PROFILES, TOP_CATEGORY_COUNT,
};
pub use summary::{AssessmentSummary, STRONGEST_AREA_COUNT};
