//! Integration tests for link issuance validation and persistence.

mod helpers;

use linkgate::ErrorKind;

#[tokio::test]
async fn test_issue_without_file_path_fails_with_missing_field() {
    let app = helpers::TestApp::new().await;

    let err = app.links.link().disk("local").issue().await.unwrap_err();

    assert_eq!(err.kind, ErrorKind::MissingField);
    assert_eq!(err.message, "File path must NOT be empty!");
    assert_eq!(app.total_rows().await, 0);
}

#[tokio::test]
async fn test_issue_with_empty_file_path_fails_with_missing_field() {
    let app = helpers::TestApp::new().await;

    let err = app
        .links
        .link()
        .file_path("")
        .disk("local")
        .issue()
        .await
        .unwrap_err();

    assert_eq!(err.kind, ErrorKind::MissingField);
    assert_eq!(app.total_rows().await, 0);
}

#[tokio::test]
async fn test_issue_without_disk_fails_with_missing_field() {
    let app = helpers::TestApp::new().await;

    let err = app
        .links
        .link()
        .file_path("file.txt")
        .issue()
        .await
        .unwrap_err();

    assert_eq!(err.kind, ErrorKind::MissingField);
    assert_eq!(err.message, "Disk must NOT be empty!");
    assert_eq!(app.total_rows().await, 0);
}

#[tokio::test]
async fn test_issue_with_unconfigured_disk_fails_with_invalid_configuration() {
    let app = helpers::TestApp::new().await;

    let err = app
        .links
        .link()
        .file_path("file.txt")
        .disk("s3-archive")
        .issue()
        .await
        .unwrap_err();

    assert_eq!(err.kind, ErrorKind::InvalidConfiguration);
    assert_eq!(err.message, "Disk is NOT valid!");
    assert_eq!(app.total_rows().await, 0);
}

#[tokio::test]
async fn test_issue_with_missing_file_fails_with_not_found() {
    let app = helpers::TestApp::new().await;

    let err = app
        .links
        .link()
        .file_path("nowhere.txt")
        .disk("local")
        .issue()
        .await
        .unwrap_err();

    assert_eq!(err.kind, ErrorKind::NotFound);
    assert_eq!(err.message, "File not found!");
    assert_eq!(app.total_rows().await, 0);
}

#[tokio::test]
async fn test_issue_returns_64_character_token_and_one_row() {
    let app = helpers::TestApp::new().await;
    app.seed_file("docs/report.pdf", b"pdf bytes").await;

    let token = app
        .links
        .link()
        .file_path("docs/report.pdf")
        .disk("local")
        .issue()
        .await
        .unwrap();

    assert_eq!(token.len(), 64);
    assert!(token.chars().all(|c| c.is_ascii_alphanumeric()));
    assert_eq!(app.count("download_links").await, 1);

    let link = app.repo.find_by_token(&token).await.unwrap().unwrap();
    assert_eq!(link.link, token);
    assert_eq!(link.disk, "local");
    assert_eq!(link.file_path, "docs/report.pdf");
}

#[tokio::test]
async fn test_file_name_defaults_to_last_path_segment() {
    let app = helpers::TestApp::new().await;
    app.seed_file("docs/q3/report.pdf", b"pdf").await;

    let token = app
        .links
        .link()
        .file_path("docs/q3/report.pdf")
        .disk("local")
        .issue()
        .await
        .unwrap();

    let link = app.repo.find_by_token(&token).await.unwrap().unwrap();
    assert_eq!(link.file_name, "report.pdf");
}

#[tokio::test]
async fn test_explicit_file_name_is_kept() {
    let app = helpers::TestApp::new().await;
    app.seed_file("docs/report.pdf", b"pdf").await;

    let token = app
        .links
        .link()
        .file_path("docs/report.pdf")
        .file_name("Quarterly Report.pdf")
        .disk("local")
        .issue()
        .await
        .unwrap();

    let link = app.repo.find_by_token(&token).await.unwrap().unwrap();
    assert_eq!(link.file_name, "Quarterly Report.pdf");
}

#[tokio::test]
async fn test_issue_persists_expiry_and_visibility() {
    let app = helpers::TestApp::new().await;
    app.seed_file("file.txt", b"data").await;

    let expire_time = chrono::Utc::now() + chrono::Duration::hours(2);
    let token = app
        .links
        .link()
        .file_path("file.txt")
        .disk("local")
        .auth_only()
        .expire_at(expire_time)
        .issue()
        .await
        .unwrap();

    let link = app.repo.find_by_token(&token).await.unwrap().unwrap();
    assert!(link.auth_only);
    assert!(!link.guest_only);
    assert_eq!(
        link.expire_time.map(|t| t.timestamp()),
        Some(expire_time.timestamp())
    );
}

#[tokio::test]
async fn test_guest_only_clears_auth_only() {
    let app = helpers::TestApp::new().await;
    app.seed_file("file.txt", b"data").await;

    let token = app
        .links
        .link()
        .file_path("file.txt")
        .disk("local")
        .auth_only()
        .guest_only()
        .issue()
        .await
        .unwrap();

    let link = app.repo.find_by_token(&token).await.unwrap().unwrap();
    assert!(!link.auth_only);
    assert!(link.guest_only);
}

#[tokio::test]
async fn test_two_links_for_same_file_get_distinct_tokens() {
    let app = helpers::TestApp::new().await;
    app.seed_file("file.txt", b"data").await;

    let first = app
        .links
        .link()
        .file_path("file.txt")
        .disk("local")
        .issue()
        .await
        .unwrap();
    let second = app
        .links
        .link()
        .file_path("file.txt")
        .disk("local")
        .issue()
        .await
        .unwrap();

    assert_ne!(first, second);
    assert_eq!(app.count("download_links").await, 2);
}
