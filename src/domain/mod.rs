//! Domain layer containing the assessment logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (value objects, IDs, errors)
//! - `assessment` - Movement-skill catalog, grading store and the wizard session
//! - `analysis` - Pure scoring services (category scores, sport recommendations)

pub mod analysis;
pub mod assessment;
pub mod foundation;
