//! HTTP adapters for the coaching backend.
//!
//! - `ApiClient` - authenticated reqwest client with error mapping
//! - `HttpAthleteDirectory` - `GET /coach/athletes/{id}`
//! - `HttpTalentReportService` - `GET`/`POST /coach/athletes/{id}/ai/talent-recognition`

mod athlete_directory;
mod client;
mod talent_report;

pub use athlete_directory::HttpAthleteDirectory;
pub use client::{ApiClient, ApiClientConfig};
pub use talent_report::HttpTalentReportService;
