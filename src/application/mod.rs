//! Application layer - Commands, Queries, and Handlers.
//!
//! This layer orchestrates domain operations and coordinates between ports.
//! The assessment session itself is synchronous; only profile and report
//! fetches cross the async port boundary.

pub mod handlers;
mod notice;

pub use handlers::{
    AssessmentController, AssessmentView, GenerateReportCommand, GenerateReportError,
    GenerateReportHandler, GenerateReportResult, LoadTalentReportHandler, LoadTalentReportQuery,
    ProfileState, StartAssessmentCommand, StartAssessmentHandler, StartAssessmentResult,
    TalentReportView,
};
pub use notice::{Notice, NoticeKind};
