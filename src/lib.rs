//! Sportan Assessment - Movement-skill assessment wizard
//!
//! This crate implements the five-step athlete assessment flow (pre-test,
//! warmup, skill grading, questionnaire, summary) together with the category
//! scoring and sport recommendation engine that feeds the talent report.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
pub mod telemetry;
