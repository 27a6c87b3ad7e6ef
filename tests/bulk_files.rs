//! Integration tests for the bulk validation and scoring file jobs.

use httpmock::prelude::*;
use serde_json::json;
use std::io::Write;
use zerobounce_client::{Client, Error, FileContent};

const API_KEY: &str = "test-api-key";
const FILE_ID: &str = "aaaaaaaa-zzzz-dddd-vvvv-jjjjjjjjjjjj";

fn client_for(server: &MockServer) -> Client {
    Client::builder()
        .api_key(API_KEY)
        .host(server.base_url())
        .bulk_host(server.base_url())
        .build()
        .unwrap()
}

fn csv_fixture(name: &str) -> (tempfile::TempDir, std::path::PathBuf) {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join(name);
    let mut file = std::fs::File::create(&path).unwrap();
    writeln!(file, "valid@example.com").unwrap();
    writeln!(file, "invalid@example.com").unwrap();
    (dir, path)
}

#[tokio::test]
async fn validate_file_send_uploads_multipart_with_filename() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/v2/sendfile")
                .query_param("api_key", API_KEY)
                // Multipart body carries the original filename.
                .body_contains("validation.csv")
                .body_contains("valid@example.com");
            then.status(200).json_body(json!({
                "success": true,
                "message": "File Accepted",
                "file_name": "validation.csv",
                "file_id": FILE_ID
            }));
        })
        .await;

    let (_dir, path) = csv_fixture("validation.csv");
    let client = client_for(&server);
    let submit = client.validate_file_send(&path).await.unwrap();

    mock.assert_async().await;
    assert!(submit.success);
    assert_eq!(submit.message.as_deref(), Some("File Accepted"));
    assert_eq!(submit.file_name.as_deref(), Some("validation.csv"));
    assert_eq!(submit.file_id.as_deref(), Some(FILE_ID));
}

#[tokio::test]
async fn send_then_check_round_trips_the_file_id() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST).path("/v2/sendfile");
            then.status(200).json_body(json!({
                "success": true,
                "message": "File Accepted",
                "file_name": "validation.csv",
                "file_id": FILE_ID
            }));
        })
        .await;
    server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/v2/filestatus")
                .query_param("file_id", FILE_ID);
            then.status(200).json_body(json!({
                "success": true,
                "file_id": FILE_ID,
                "file_name": "validation.csv",
                "upload_date": "2023-09-04T14:10:45Z",
                "file_status": "Complete",
                "complete_percentage": "100%",
                "return_url": null
            }));
        })
        .await;

    let (_dir, path) = csv_fixture("validation.csv");
    let client = client_for(&server);

    let submit = client.validate_file_send(&path).await.unwrap();
    let file_id = submit.file_id.unwrap();
    let status = client.validate_file_check(&file_id).await.unwrap();

    assert!(status.success);
    assert_eq!(status.file_id.as_deref(), Some(FILE_ID));
    assert_eq!(status.file_name.as_deref(), Some("validation.csv"));
    assert_eq!(status.file_status.as_deref(), Some("Complete"));
    assert!(status.error_reason.is_none());
}

#[tokio::test]
async fn validate_file_check_unknown_id_is_a_soft_failure() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/v2/filestatus")
                .query_param("file_id", "invalid-file-id");
            then.status(200).json_body(json!({
                "success": false,
                "message": "File cannot be found."
            }));
        })
        .await;

    let client = client_for(&server);
    let status = client.validate_file_check("invalid-file-id").await.unwrap();

    assert!(!status.success);
    assert_eq!(status.message.as_deref(), Some("File cannot be found."));
    assert!(status.file_id.is_none());
}

#[tokio::test]
async fn validate_file_get_downloads_raw_content() {
    let csv = "\"Email Address\",\"ZB Status\"\n\"valid@example.com\",\"valid\"\n";
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/v2/getfile")
                .query_param("file_id", FILE_ID);
            then.status(200)
                .header("content-type", "application/octet-stream")
                .body(csv);
        })
        .await;

    let client = client_for(&server);
    let content = client.validate_file_get(FILE_ID).await.unwrap();

    assert!(content.is_ready());
    assert_eq!(content.content(), Some(csv));
}

#[tokio::test]
async fn validate_file_get_unknown_id_is_unavailable() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/v2/getfile");
            then.status(200).json_body(json!({
                "success": false,
                "message": "File cannot be found."
            }));
        })
        .await;

    let client = client_for(&server);
    let content = client.validate_file_get("invalid-file-id").await.unwrap();

    match content {
        FileContent::Unavailable(failure) => {
            assert!(!failure.success);
            assert_eq!(failure.message.as_deref(), Some("File cannot be found."));
        }
        FileContent::Ready(body) => panic!("expected soft failure, got content: {body}"),
    }
}

#[tokio::test]
async fn validate_file_delete_echoes_the_job() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/v2/deletefile")
                .query_param("file_id", FILE_ID);
            then.status(200).json_body(json!({
                "success": true,
                "message": "File Deleted",
                "file_name": "validation.csv",
                "file_id": FILE_ID
            }));
        })
        .await;

    let client = client_for(&server);
    let deleted = client.validate_file_delete(FILE_ID).await.unwrap();

    assert!(deleted.success);
    assert_eq!(deleted.message.as_deref(), Some("File Deleted"));
    assert_eq!(deleted.file_name.as_deref(), Some("validation.csv"));
    assert_eq!(deleted.file_id.as_deref(), Some(FILE_ID));
}

#[tokio::test]
async fn scoring_endpoints_use_the_scoring_prefix() {
    let server = MockServer::start_async().await;
    let send = server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/v2/scoring/sendfile")
                .body_contains("scoring.csv");
            then.status(200).json_body(json!({
                "success": true,
                "message": "File Accepted",
                "file_name": "scoring.csv",
                "file_id": FILE_ID
            }));
        })
        .await;
    let check = server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/v2/scoring/filestatus")
                .query_param("file_id", FILE_ID);
            then.status(200).json_body(json!({
                "success": true,
                "file_id": FILE_ID,
                "file_name": "scoring.csv",
                "file_status": "Processing"
            }));
        })
        .await;

    let (_dir, path) = csv_fixture("scoring.csv");
    let client = client_for(&server);

    let submit = client.scoring_file_send(&path).await.unwrap();
    assert_eq!(submit.file_name.as_deref(), Some("scoring.csv"));

    let status = client.scoring_file_check(FILE_ID).await.unwrap();
    assert_eq!(status.file_status.as_deref(), Some("Processing"));

    send.assert_async().await;
    check.assert_async().await;
}

#[tokio::test]
async fn scoring_file_check_unknown_id_is_a_soft_failure() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/v2/scoring/filestatus");
            then.status(200).json_body(json!({
                "success": false,
                "message": "file_id is invalid."
            }));
        })
        .await;

    let client = client_for(&server);
    let status = client.scoring_file_check("invalid-file-id").await.unwrap();

    assert!(!status.success);
    assert_eq!(status.message.as_deref(), Some("file_id is invalid."));
}

#[tokio::test]
async fn scoring_file_get_downloads_raw_content() {
    let body = "\"email\",\"score\"\n\"valid@example.com\",\"10\"\n";
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/v2/scoring/getfile")
                .query_param("file_id", FILE_ID);
            then.status(200).body(body);
        })
        .await;

    let client = client_for(&server);
    let content = client.scoring_file_get(FILE_ID).await.unwrap();
    assert_eq!(content.content(), Some(body));
}

#[tokio::test]
async fn scoring_file_delete_soft_fails_on_unknown_id() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/v2/scoring/deletefile");
            then.status(200).json_body(json!({
                "success": false,
                "message": "file_id is invalid."
            }));
        })
        .await;

    let client = client_for(&server);
    let deleted = client
        .scoring_file_delete("invalid-file-id")
        .await
        .unwrap();

    assert!(!deleted.success);
    assert_eq!(deleted.message.as_deref(), Some("file_id is invalid."));
}

#[tokio::test]
async fn file_endpoints_surface_unauthorized() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST).path("/v2/sendfile");
            then.status(401).body("unauthorized");
        })
        .await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/v2/filestatus");
            then.status(403).body("forbidden");
        })
        .await;

    let (_dir, path) = csv_fixture("validation.csv");
    let client = client_for(&server);

    assert!(matches!(
        client.validate_file_send(&path).await,
        Err(Error::Unauthorized { status, .. }) if status.as_u16() == 401
    ));
    assert!(matches!(
        client.validate_file_check(FILE_ID).await,
        Err(Error::Unauthorized { status, .. }) if status.as_u16() == 403
    ));
}
