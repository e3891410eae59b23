//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the assessment core and the outside world. Adapters implement these ports.
//!
//! ## Backend Ports
//!
//! - `AthleteDirectory` - Athlete profile lookup
//! - `TalentReportService` - AI talent report generation and retrieval
//! - `AccessTokenProvider` - Bearer credentials for backend calls
//!
//! ## Device Ports
//!
//! - `HapticFeedback` - Fire-and-forget haptic signals

mod access_token_provider;
mod athlete_directory;
mod gateway_error;
mod haptic_feedback;
mod talent_report_service;

pub use access_token_provider::AccessTokenProvider;
pub use athlete_directory::{AthleteDirectory, AthleteProfile};
pub use gateway_error::GatewayError;
pub use haptic_feedback::{HapticFeedback, HapticNotification, HapticStyle};
pub use talent_report_service::{TalentReport, TalentReportService};
