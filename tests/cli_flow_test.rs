use cn_core::{AppConfig, ProjectDraft};
use cn_core::ports::LocalDraftStorePort;
use cn_infra::FileDraftStore;
use crowdnest_lib::bootstrap::build_services;
use crowdnest_lib::cli::{execute, Command};
use cn_core::UnifiedStatus;
use mockito::Matcher;
use tokio_util::sync::CancellationToken;

fn config_for(server: &mockito::ServerGuard, dir: &std::path::Path) -> AppConfig {
    AppConfig {
        api_base_url: server.url(),
        asset_base_url: "https://cdn.crowdnest.test".to_string(),
        request_timeout_secs: 5,
        auth_token: Some("maker-token".to_string()),
        drafts_path: dir.join("drafts.json"),
    }
}

async fn run(config: &AppConfig, command: Command, json: bool) -> anyhow::Result<String> {
    let services = build_services(config)?;
    let mut out = Vec::new();
    execute(&command, &services, json, CancellationToken::new(), &mut out).await?;
    Ok(String::from_utf8(out)?)
}

#[tokio::test]
async fn overview_prints_every_status() {
    let mut server = mockito::Server::new_async().await;
    let counts = server
        .mock("GET", "/maker/projects/status-counts")
        .match_header("authorization", "Bearer maker-token")
        .with_status(200)
        .with_body(r#"{"DRAFT": 2, "REVIEW": 1, "LIVE": 4}"#)
        .create_async()
        .await;
    let dir = tempfile::tempdir().unwrap();

    let output = run(
        &config_for(&server, dir.path()),
        Command::Overview { force: false },
        false,
    )
    .await
    .unwrap();

    counts.assert_async().await;
    let lines: Vec<&str> = output.lines().collect();
    assert_eq!(lines.len(), 7);
    assert!(lines[0].starts_with("Draft"));
    assert!(lines[0].ends_with('2'));
    assert!(lines[4].starts_with("Live"));
    assert!(lines[4].ends_with('4'));
    assert!(lines[6].ends_with('0'));
}

#[tokio::test]
async fn list_falls_back_to_local_drafts() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/maker/projects")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body("[]")
        .create_async()
        .await;
    let dir = tempfile::tempdir().unwrap();
    let config = config_for(&server, dir.path());
    let draft = ProjectDraft::new("Bike trailer", "Folds flat");
    FileDraftStore::new(&config.drafts_path)
        .save_draft(&draft)
        .await
        .unwrap();

    let output = run(
        &config,
        Command::List {
            status: UnifiedStatus::Draft,
            force: false,
        },
        false,
    )
    .await
    .unwrap();

    assert_eq!(output.trim(), format!("{}\tlocal\tBike trailer", draft.id));
}

#[tokio::test]
async fn list_as_json_includes_resolved_image_urls() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/maker/projects")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body(
            r#"[{"id": 60, "title": "Desk lamp", "imagePath": "/img/60.png",
                 "status": "LIVE", "reviewStatus": "APPROVED"}]"#,
        )
        .create_async()
        .await;
    let dir = tempfile::tempdir().unwrap();

    let output = run(
        &config_for(&server, dir.path()),
        Command::List {
            status: UnifiedStatus::Live,
            force: false,
        },
        true,
    )
    .await
    .unwrap();

    let items: serde_json::Value = serde_json::from_str(&output).unwrap();
    assert_eq!(items[0]["id"], "60");
    assert_eq!(items[0]["image_url"], "https://cdn.crowdnest.test/img/60.png");
    assert_eq!(items[0]["origin"], "remote");
}

#[tokio::test]
async fn cancel_review_posts_then_refreshes() {
    let mut server = mockito::Server::new_async().await;
    let listing = server
        .mock("GET", "/maker/projects")
        .match_query(Matcher::UrlEncoded("review".into(), "REVIEW".into()))
        .with_status(200)
        .with_body(r#"[{"id": "42", "title": "Solar kettle", "status": "DRAFT", "reviewStatus": "REVIEW"}]"#)
        .expect(2)
        .create_async()
        .await;
    let cancel = server
        .mock("POST", "/maker/projects/42/review/cancel")
        .with_status(200)
        .create_async()
        .await;
    server
        .mock("GET", "/maker/projects/status-counts")
        .with_status(200)
        .with_body(r#"{"REVIEW": 0, "DRAFT": 1}"#)
        .create_async()
        .await;
    let dir = tempfile::tempdir().unwrap();

    let output = run(
        &config_for(&server, dir.path()),
        Command::CancelReview {
            id: "42".to_string(),
        },
        false,
    )
    .await
    .unwrap();

    cancel.assert_async().await;
    listing.assert_async().await;
    assert_eq!(output.trim(), "Cancelled review of 42 (Solar kettle)");
}

#[tokio::test]
async fn delete_draft_refuses_a_project_under_review() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/maker/projects")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body(r#"[{"id": "43", "title": "Kite", "status": "DRAFT", "reviewStatus": "REVIEW"}]"#)
        .create_async()
        .await;
    let delete = server
        .mock("DELETE", "/maker/projects/43")
        .expect(0)
        .create_async()
        .await;
    let dir = tempfile::tempdir().unwrap();

    let err = run(
        &config_for(&server, dir.path()),
        Command::DeleteDraft {
            status: UnifiedStatus::Review,
            id: "43".to_string(),
        },
        false,
    )
    .await
    .unwrap_err();

    delete.assert_async().await;
    assert!(err.to_string().contains("expected DRAFT"), "{err}");
}

#[tokio::test]
async fn server_failure_surfaces_the_generic_message() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/maker/projects/status-counts")
        .with_status(503)
        .with_body("upstream down")
        .create_async()
        .await;
    let dir = tempfile::tempdir().unwrap();

    let err = run(
        &config_for(&server, dir.path()),
        Command::Overview { force: true },
        false,
    )
    .await
    .unwrap_err();

    assert!(err.to_string().contains("Something went wrong"), "{err}");
    assert!(!err.to_string().contains("upstream"));
}

#[tokio::test]
async fn unknown_project_id_is_reported() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/maker/projects")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body(r#"[{"id": "50", "title": "Lamp", "status": "SCHEDULED", "reviewStatus": "APPROVED"}]"#)
        .create_async()
        .await;
    let dir = tempfile::tempdir().unwrap();

    let err = run(
        &config_for(&server, dir.path()),
        Command::CancelScheduled {
            id: "51".to_string(),
        },
        false,
    )
    .await
    .unwrap_err();

    assert!(err.to_string().contains("51"), "{err}");
}
