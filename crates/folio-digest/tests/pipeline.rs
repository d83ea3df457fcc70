//! End-to-end pipeline tests against a mock completions endpoint.

#![allow(missing_docs)]

use std::path::PathBuf;

use assert_matches::assert_matches;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use folio_digest::{FAILURE_PREFIX, NO_NEW_ITEMS, PipelineError, ReportMode, run};
use folio_llm::{DeepSeekAuth, DeepSeekConfig, DeepSeekProvider};
use folio_settings::FolioSettings;
use folio_store::StoreError;

const STORE_JSON: &str = r#"[
    {"id": "a", "title": "Mantle convection revisited", "source": "Nature Geoscience",
     "date": "2024-01-01", "authors": ["A. Author"], "link": "https://example.org/a",
     "summary": "Abstract A."},
    {"id": "old", "title": "Older paper", "date": "2023-12-31"},
    "malformed entry",
    {"id": "b", "title": "Glacier mass balance", "date": "2024-01-01"}
]"#;

/// Settings pointing at a temp store and temp output dir.
fn test_settings(dir: &tempfile::TempDir, store_json: Option<&str>) -> FolioSettings {
    let mut settings = FolioSettings::default();
    let store_path = dir.path().join("seen.json");
    if let Some(json) = store_json {
        std::fs::write(&store_path, json).unwrap();
    }
    settings.store.path = store_path.to_string_lossy().into_owned();
    settings.output.digest_path = dir
        .path()
        .join("output/daily.md")
        .to_string_lossy()
        .into_owned();
    settings.output.report_dir = dir.path().join("output").to_string_lossy().into_owned();
    settings
}

fn provider_for(server_uri: &str) -> DeepSeekProvider {
    DeepSeekProvider::new(DeepSeekConfig {
        model: "deepseek-chat".into(),
        auth: DeepSeekAuth::ApiKey {
            api_key: "test-key".into(),
        },
        base_url: Some(server_uri.to_string()),
    })
}

async fn mock_completion(server: &MockServer, content: &str) {
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "choices": [{"message": {"role": "assistant", "content": content}}]
        })))
        .mount(server)
        .await;
}

// ── Success path ─────────────────────────────────────────────────────────

#[tokio::test]
async fn digest_run_writes_narrative_artifact() {
    let dir = tempfile::tempdir().unwrap();
    let settings = test_settings(&dir, Some(STORE_JSON));
    let server = MockServer::start().await;
    mock_completion(&server, "## Trends\n- glaciers and mantles").await;

    let outcome = run(
        &settings,
        "2024-01-01",
        ReportMode::NarrativeOnly,
        Some(provider_for(&server.uri())),
    )
    .await
    .unwrap();

    assert_eq!(outcome.selected, 2);
    assert_eq!(outcome.skipped, 1);
    let text = std::fs::read_to_string(&outcome.artifact_path).unwrap();
    assert!(text.contains("# Daily Paper Digest — 2024-01-01"));
    assert!(text.contains("**New papers today**: 2"));
    assert!(text.contains("## Trends"));
    assert!(!text.contains("Appendix"));
}

#[tokio::test]
async fn report_run_includes_complete_appendix() {
    let dir = tempfile::tempdir().unwrap();
    let settings = test_settings(&dir, Some(STORE_JSON));
    let server = MockServer::start().await;
    mock_completion(&server, "digest").await;

    let outcome = run(
        &settings,
        "2024-01-01",
        ReportMode::WithAppendix,
        Some(provider_for(&server.uri())),
    )
    .await
    .unwrap();

    let text = std::fs::read_to_string(&outcome.artifact_path).unwrap();
    assert!(text.contains("1. Mantle convection revisited"));
    assert!(text.contains("   - Authors: A. Author"));
    assert!(text.contains("2. Glacier mass balance"));
    // Missing optional fields get documented fallbacks
    assert!(text.contains("   - Authors: unknown"));
    assert!(text.contains("   - Link: \n"));
}

#[tokio::test]
async fn report_path_embeds_the_date() {
    let dir = tempfile::tempdir().unwrap();
    let settings = test_settings(&dir, Some(STORE_JSON));
    let server = MockServer::start().await;
    mock_completion(&server, "digest").await;

    let outcome = run(
        &settings,
        "2024-01-01",
        ReportMode::WithAppendix,
        Some(provider_for(&server.uri())),
    )
    .await
    .unwrap();

    assert!(
        outcome
            .artifact_path
            .to_string_lossy()
            .ends_with("report-2024-01-01.md")
    );
}

// ── Idempotence ──────────────────────────────────────────────────────────

#[tokio::test]
async fn rerun_with_deterministic_narrative_is_byte_identical() {
    let dir = tempfile::tempdir().unwrap();
    let settings = test_settings(&dir, Some(STORE_JSON));
    let server = MockServer::start().await;
    mock_completion(&server, "stable narrative").await;

    let first = run(
        &settings,
        "2024-01-01",
        ReportMode::WithAppendix,
        Some(provider_for(&server.uri())),
    )
    .await
    .unwrap();
    let first_bytes = std::fs::read(&first.artifact_path).unwrap();

    let second = run(
        &settings,
        "2024-01-01",
        ReportMode::WithAppendix,
        Some(provider_for(&server.uri())),
    )
    .await
    .unwrap();
    let second_bytes = std::fs::read(&second.artifact_path).unwrap();

    assert_eq!(first.artifact_path, second.artifact_path);
    assert_eq!(first_bytes, second_bytes);
}

// ── Empty selection ──────────────────────────────────────────────────────

#[tokio::test]
async fn empty_selection_skips_provider_and_writes_sentinel() {
    let dir = tempfile::tempdir().unwrap();
    let settings = test_settings(&dir, Some(STORE_JSON));
    let server = MockServer::start().await;
    // Any request to the endpoint would fail the expect(0) assertion.
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let outcome = run(
        &settings,
        "2099-12-31",
        ReportMode::NarrativeOnly,
        Some(provider_for(&server.uri())),
    )
    .await
    .unwrap();

    assert_eq!(outcome.selected, 0);
    let text = std::fs::read_to_string(&outcome.artifact_path).unwrap();
    assert!(text.contains("**New papers today**: 0"));
    assert!(text.contains(NO_NEW_ITEMS));
}

#[tokio::test]
async fn empty_selection_needs_no_credential() {
    let dir = tempfile::tempdir().unwrap();
    let settings = test_settings(&dir, Some(STORE_JSON));

    let outcome = run(
        &settings,
        "2099-12-31",
        ReportMode::WithAppendix,
        Option::<DeepSeekProvider>::None,
    )
    .await
    .unwrap();

    let text = std::fs::read_to_string(&outcome.artifact_path).unwrap();
    assert!(text.contains(NO_NEW_ITEMS));
}

// ── Boundary failures ────────────────────────────────────────────────────

#[tokio::test]
async fn missing_store_aborts_without_writing() {
    let dir = tempfile::tempdir().unwrap();
    let settings = test_settings(&dir, None);

    let err = run(
        &settings,
        "2024-01-01",
        ReportMode::WithAppendix,
        Option::<DeepSeekProvider>::None,
    )
    .await
    .unwrap_err();

    assert_matches!(err, PipelineError::Store(StoreError::Missing { .. }));
    assert!(!PathBuf::from(&settings.output.report_dir).exists());
}

#[tokio::test]
async fn missing_credential_aborts_before_write() {
    let dir = tempfile::tempdir().unwrap();
    let settings = test_settings(&dir, Some(STORE_JSON));

    let err = run(
        &settings,
        "2024-01-01",
        ReportMode::NarrativeOnly,
        Option::<DeepSeekProvider>::None,
    )
    .await
    .unwrap_err();

    assert_matches!(err, PipelineError::Digest(_));
    assert!(!PathBuf::from(&settings.output.digest_path).exists());
}

// ── Capability failure ───────────────────────────────────────────────────

#[tokio::test]
async fn capability_failure_degrades_but_still_writes() {
    let dir = tempfile::tempdir().unwrap();
    let settings = test_settings(&dir, Some(STORE_JSON));
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(500).set_body_json(serde_json::json!({
            "error": {"message": "timeout"}
        })))
        .mount(&server)
        .await;

    let outcome = run(
        &settings,
        "2024-01-01",
        ReportMode::WithAppendix,
        Some(provider_for(&server.uri())),
    )
    .await
    .unwrap();

    let text = std::fs::read_to_string(&outcome.artifact_path).unwrap();
    assert!(text.contains(FAILURE_PREFIX));
    assert!(text.contains("timeout"));
    // The appendix is still present — degradation affects only the narrative
    assert!(text.contains("1. Mantle convection revisited"));
}
