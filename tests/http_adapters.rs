//! Integration tests for the HTTP adapters against a mock backend.
//!
//! Each test starts its own `mockito` server, so they run in parallel.

use mockito::{Matcher, Server, ServerGuard};
use std::sync::Arc;
use std::time::Duration;

use sportan_assessment::adapters::http::{
    ApiClient, ApiClientConfig, HttpAthleteDirectory, HttpTalentReportService,
};
use sportan_assessment::adapters::memory::StaticTokenProvider;
use sportan_assessment::domain::assessment::{
    AssessmentSubmission, Grade, QuestionnaireAnswers, SkillGrade, SkillId,
};
use sportan_assessment::domain::foundation::{AssessmentId, AthleteId, Timestamp};
use sportan_assessment::ports::{AthleteDirectory, GatewayError, TalentReportService};

const ATHLETE: &str = "6a2f41a3-c54c-4f2a-8a5e-6d2f6e2b9a10";
const REPORT: &str = "0b7d4c55-2a8e-4a43-9d1f-3f1f4e0f6c21";

// =============================================================================
// Test Infrastructure
// =============================================================================

fn athlete_id() -> AthleteId {
    ATHLETE.parse().unwrap()
}

fn client(server: &ServerGuard, tokens: Arc<StaticTokenProvider>) -> Arc<ApiClient> {
    let config = ApiClientConfig::new(server.url()).with_timeout(Duration::from_secs(5));
    Arc::new(ApiClient::new(config, tokens).unwrap())
}

fn athlete_path() -> String {
    format!("/coach/athletes/{}", ATHLETE)
}

fn report_path() -> String {
    format!("/coach/athletes/{}/ai/talent-recognition", ATHLETE)
}

fn report_body(text: &str) -> String {
    report_body_at(text, "2024-05-10T14:00:00Z")
}

fn report_body_at(text: &str, created_at: &str) -> String {
    serde_json::json!({
        "id": REPORT,
        "athlete_id": ATHLETE,
        "report_text": text,
        "created_at": created_at,
    })
    .to_string()
}

fn submission() -> AssessmentSubmission {
    AssessmentSubmission {
        assessment_id: AssessmentId::new(),
        athlete_id: athlete_id(),
        skill_grades: vec![
            SkillGrade::new(SkillId::new(1), Grade::Proficient),
            SkillGrade::new(SkillId::new(9), Grade::Developing),
        ],
        answers: QuestionnaireAnswers::new(),
        completed_at: Timestamp::now(),
    }
}

// =============================================================================
// Athlete directory
// =============================================================================

#[tokio::test]
async fn fetches_athlete_with_bearer_token() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", athlete_path().as_str())
        .match_header("authorization", "Bearer coach-token")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            serde_json::json!({
                "id": ATHLETE,
                "name": "Maya Chen",
                "group_id": "u12-red",
                "created_at": "2024-01-15T08:00:00Z",
            })
            .to_string(),
        )
        .create_async()
        .await;

    let tokens = Arc::new(StaticTokenProvider::new("coach-token"));
    let directory = HttpAthleteDirectory::new(client(&server, tokens));

    let profile = directory.find_athlete(&athlete_id()).await.unwrap().unwrap();

    mock.assert_async().await;
    assert_eq!(profile.id, athlete_id());
    assert_eq!(profile.name, "Maya Chen");
    assert_eq!(profile.group_id.as_deref(), Some("u12-red"));
    assert!(profile.joined_at.is_some());
}

#[tokio::test]
async fn signed_out_requests_carry_no_authorization() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", athlete_path().as_str())
        .match_header("authorization", Matcher::Missing)
        .with_status(200)
        .with_body(serde_json::json!({ "id": ATHLETE }).to_string())
        .create_async()
        .await;

    let directory =
        HttpAthleteDirectory::new(client(&server, Arc::new(StaticTokenProvider::signed_out())));

    let profile = directory.find_athlete(&athlete_id()).await.unwrap().unwrap();

    mock.assert_async().await;
    assert_eq!(profile.name, "Unknown");
}

#[tokio::test]
async fn missing_athlete_is_none() {
    let mut server = Server::new_async().await;
    server
        .mock("GET", athlete_path().as_str())
        .with_status(404)
        .with_body(r#"{"detail": "Athlete not found"}"#)
        .create_async()
        .await;

    let directory =
        HttpAthleteDirectory::new(client(&server, Arc::new(StaticTokenProvider::new("t"))));

    assert_eq!(directory.find_athlete(&athlete_id()).await.unwrap(), None);
}

#[tokio::test]
async fn expired_token_signs_out() {
    let mut server = Server::new_async().await;
    server
        .mock("GET", athlete_path().as_str())
        .with_status(401)
        .with_body(r#"{"detail": "Signature has expired"}"#)
        .create_async()
        .await;

    let tokens = Arc::new(StaticTokenProvider::new("stale-token"));
    let directory = HttpAthleteDirectory::new(client(&server, tokens.clone()));

    let err = directory.find_athlete(&athlete_id()).await.unwrap_err();

    assert_eq!(
        err,
        GatewayError::Unauthorized("Signature has expired".to_string())
    );
    assert_eq!(tokens.invalidation_count(), 1);
}

#[tokio::test]
async fn unrelated_unauthorized_keeps_session() {
    let mut server = Server::new_async().await;
    server
        .mock("GET", athlete_path().as_str())
        .with_status(401)
        .with_body(r#"{"detail": "Coach is not assigned to this athlete"}"#)
        .create_async()
        .await;

    let tokens = Arc::new(StaticTokenProvider::new("coach-token"));
    let directory = HttpAthleteDirectory::new(client(&server, tokens.clone()));

    let err = directory.find_athlete(&athlete_id()).await.unwrap_err();

    assert!(matches!(err, GatewayError::Unauthorized(_)));
    assert_eq!(tokens.invalidation_count(), 0);
}

#[tokio::test]
async fn server_error_surfaces_detail() {
    let mut server = Server::new_async().await;
    server
        .mock("GET", athlete_path().as_str())
        .with_status(500)
        .with_body(r#"{"detail": "database unavailable"}"#)
        .create_async()
        .await;

    let directory =
        HttpAthleteDirectory::new(client(&server, Arc::new(StaticTokenProvider::new("t"))));

    let err = directory.find_athlete(&athlete_id()).await.unwrap_err();

    assert_eq!(
        err,
        GatewayError::Api {
            status: 500,
            message: "database unavailable".to_string()
        }
    );
    assert!(!err.is_timeout_or_gateway());
}

// =============================================================================
// Talent reports
// =============================================================================

#[tokio::test]
async fn loads_latest_report() {
    let mut server = Server::new_async().await;
    server
        .mock("GET", report_path().as_str())
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(report_body("Explosive first step."))
        .create_async()
        .await;

    let reports =
        HttpTalentReportService::new(client(&server, Arc::new(StaticTokenProvider::new("t"))));

    let report = reports.latest_report(&athlete_id()).await.unwrap().unwrap();

    assert_eq!(report.report_text, "Explosive first step.");
    assert_eq!(report.athlete_id, athlete_id());
}

#[tokio::test]
async fn loads_report_with_offsetless_created_at() {
    let mut server = Server::new_async().await;
    server
        .mock("GET", report_path().as_str())
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(report_body_at("Quick feet.", "2024-05-10T14:00:00.123456"))
        .create_async()
        .await;

    let reports =
        HttpTalentReportService::new(client(&server, Arc::new(StaticTokenProvider::new("t"))));

    let report = reports.latest_report(&athlete_id()).await.unwrap().unwrap();

    assert_eq!(report.report_text, "Quick feet.");
    assert_eq!(
        report.created_at,
        Timestamp::parse("2024-05-10T14:00:00.123456Z").unwrap()
    );
}

#[tokio::test]
async fn no_report_yet_is_none() {
    let mut server = Server::new_async().await;
    server
        .mock("GET", report_path().as_str())
        .with_status(404)
        .with_body(r#"{"detail": "No report"}"#)
        .create_async()
        .await;

    let reports =
        HttpTalentReportService::new(client(&server, Arc::new(StaticTokenProvider::new("t"))));

    assert_eq!(reports.latest_report(&athlete_id()).await.unwrap(), None);
}

#[tokio::test]
async fn generate_posts_submission() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", report_path().as_str())
        .match_header("authorization", "Bearer coach-token")
        .match_body(Matcher::AllOf(vec![
            Matcher::PartialJson(serde_json::json!({ "athlete_id": ATHLETE })),
            Matcher::Regex(r#""skill_id":9,"grade":"developing""#.to_string()),
        ]))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(report_body("Strong object control."))
        .create_async()
        .await;

    let reports = HttpTalentReportService::new(client(
        &server,
        Arc::new(StaticTokenProvider::new("coach-token")),
    ));

    let report = reports.generate_report(&submission()).await.unwrap();

    mock.assert_async().await;
    assert_eq!(report.report_text, "Strong object control.");
}

#[tokio::test]
async fn generated_report_with_offsetless_created_at() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", report_path().as_str())
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(report_body_at("Balanced mover.", "2024-05-10T14:00:00"))
        .create_async()
        .await;

    let reports =
        HttpTalentReportService::new(client(&server, Arc::new(StaticTokenProvider::new("t"))));

    let report = reports.generate_report(&submission()).await.unwrap();

    mock.assert_async().await;
    assert_eq!(report.report_text, "Balanced mover.");
    assert_eq!(
        report.created_at,
        Timestamp::parse("2024-05-10T14:00:00Z").unwrap()
    );
}

#[tokio::test]
async fn gateway_timeout_is_retryable() {
    let mut server = Server::new_async().await;
    server
        .mock("POST", report_path().as_str())
        .with_status(504)
        .with_body("upstream timed out")
        .create_async()
        .await;

    let reports =
        HttpTalentReportService::new(client(&server, Arc::new(StaticTokenProvider::new("t"))));

    let err = reports.generate_report(&submission()).await.unwrap_err();

    assert_eq!(err, GatewayError::Gateway { status: 504 });
    assert!(err.is_timeout_or_gateway());
    assert!(err.is_retryable());
}

#[tokio::test]
async fn bad_gateway_maps_like_timeout() {
    let mut server = Server::new_async().await;
    server
        .mock("POST", report_path().as_str())
        .with_status(502)
        .create_async()
        .await;

    let reports =
        HttpTalentReportService::new(client(&server, Arc::new(StaticTokenProvider::new("t"))));

    let err = reports.generate_report(&submission()).await.unwrap_err();

    assert_eq!(err, GatewayError::Gateway { status: 502 });
}

#[tokio::test]
async fn malformed_report_is_parse_error() {
    let mut server = Server::new_async().await;
    server
        .mock("GET", report_path().as_str())
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"report_text": "missing fields"}"#)
        .create_async()
        .await;

    let reports =
        HttpTalentReportService::new(client(&server, Arc::new(StaticTokenProvider::new("t"))));

    let err = reports.latest_report(&athlete_id()).await.unwrap_err();

    assert!(matches!(err, GatewayError::Parse(_)));
}
