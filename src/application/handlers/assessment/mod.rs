//! Assessment handlers.
//!
//! - `AssessmentController` - owns a running session, dispatches actions
//! - `StartAssessmentHandler` - opens a session and loads the athlete profile
//! - `GenerateReportHandler` - submits a completed session for a talent report
//! - `LoadTalentReportHandler` - loads profile and latest report concurrently

mod controller;
mod generate_report;
mod load_talent_report;
mod start_assessment;

pub use controller::{AssessmentController, AssessmentView};
pub use generate_report::{
    GenerateReportCommand, GenerateReportError, GenerateReportHandler, GenerateReportResult,
    REPORT_FAILED_MESSAGE, REPORT_GENERATED_MESSAGE, REPORT_TIMEOUT_MESSAGE,
};
pub use load_talent_report::{LoadTalentReportHandler, LoadTalentReportQuery, TalentReportView};
pub use start_assessment::{
    ProfileState, StartAssessmentCommand, StartAssessmentHandler, StartAssessmentResult,
};
