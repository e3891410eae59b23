//! In-memory and mock adapters.
//!
//! Used by tests and by hosts running the assessment without a backend.

mod athlete_directory;
mod haptics;
mod talent_report;
mod token_provider;

pub use athlete_directory::InMemoryAthleteDirectory;
pub use haptics::{HapticEvent, NoopHaptics, RecordingHaptics};
pub use talent_report::MockTalentReportService;
pub use token_provider::StaticTokenProvider;
