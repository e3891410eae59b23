//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the assessment core to external systems:
//! - `http` - Coaching backend over reqwest
//! - `memory` - In-memory and mock implementations for tests and offline use
//! - `timer` - Tokio-driven countdown ticks

pub mod http;
pub mod memory;
pub mod timer;

pub use http::{ApiClient, ApiClientConfig, HttpAthleteDirectory, HttpTalentReportService};
pub use memory::{
    InMemoryAthleteDirectory, MockTalentReportService, NoopHaptics, RecordingHaptics,
    StaticTokenProvider,
};
pub use timer::{CountdownTicker, TickerHandle, TimerTick};
