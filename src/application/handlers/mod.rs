//! Application handlers.
//!
//! Command and query handlers that orchestrate domain operations.

pub mod assessment;

pub use assessment::{
    // Controller
    AssessmentController,
    AssessmentView,
    // Commands, queries and results
    GenerateReportCommand,
    GenerateReportError,
    GenerateReportHandler,
    GenerateReportResult,
    LoadTalentReportHandler,
    LoadTalentReportQuery,
    ProfileState,
    StartAssessmentCommand,
    StartAssessmentHandler,
    StartAssessmentResult,
    TalentReportView,
};
