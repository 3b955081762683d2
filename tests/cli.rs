use std::collections::HashMap;
use std::path::Path;
use std::process::{Command, Output};

use axum::{
    Json, Router,
    extract::Query,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
};
use serde_json::json;

const VIDEO_ID: &str = "qVn2YGvIv0w";

const COMMENTS: [&str; 3] = [
    "I love this video, it is great",
    "Awesome work, thanks for sharing",
    "This is terrible and boring",
];

async fn comment_threads(Query(params): Query<HashMap<String, String>>) -> Response {
    if params.get("videoId").map(String::as_str) != Some(VIDEO_ID) {
        return (
            StatusCode::NOT_FOUND,
            Json(json!({
                "error": {
                    "code": 404,
                    "message": "The video identified by the videoId parameter could not be found.",
                    "errors": [{ "reason": "videoNotFound" }]
                }
            })),
        )
            .into_response();
    }

    let items: Vec<_> = COMMENTS
        .iter()
        .enumerate()
        .map(|(i, text)| {
            json!({
                "snippet": {
                    "topLevelComment": {
                        "id": format!("c{i}"),
                        "snippet": {
                            "textDisplay": text,
                            "authorDisplayName": format!("@user{i}"),
                            "publishedAt": "2020-04-20T10:00:00Z"
                        }
                    }
                }
            })
        })
        .collect();
    Json(json!({ "items": items })).into_response()
}

/// Runs a mock YouTube REST API on its own thread and returns its base URL.
fn spawn_mock_api() -> String {
    let (tx, rx) = std::sync::mpsc::channel();
    std::thread::spawn(move || {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .unwrap();
        runtime.block_on(async move {
            let app = Router::new().route("/youtube/v3/commentThreads", get(comment_threads));
            let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
            tx.send(listener.local_addr().unwrap()).unwrap();
            axum::serve(listener, app).await.unwrap();
        });
    });
    format!("http://{}", rx.recv().unwrap())
}

/// An address nothing listens on.
fn dead_address() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{addr}")
}

fn run_in(dir: &Path, api_address: &str, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_yt-comment-sentiment"))
        .args(args)
        .current_dir(dir)
        .env("REST_API_ADDRESS", api_address)
        .env("YOUTUBE_API_KEY", "test-key")
        .env("RUST_LOG", "warn")
        .output()
        .unwrap()
}

fn files_in(dir: &Path) -> usize {
    std::fs::read_dir(dir).unwrap().count()
}

#[test]
fn missing_video_id_prints_usage() {
    let dir = tempfile::tempdir().unwrap();
    let output = run_in(dir.path(), &dead_address(), &[]);

    assert_eq!(output.status.code(), Some(2));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("--videoid"), "{stderr}");
    assert!(stderr.contains("Usage"), "{stderr}");
    assert!(output.stdout.is_empty());
}

#[test]
fn empty_video_id_fails_before_any_request() {
    let dir = tempfile::tempdir().unwrap();
    // A dead address would yield exit code 3 if a request were attempted
    let output = run_in(dir.path(), &dead_address(), &["--videoid=", "--csv=y"]);

    assert_eq!(output.status.code(), Some(2));
    assert_eq!(files_in(dir.path()), 0);
}

#[test]
fn unrecognized_csv_token_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let output = run_in(dir.path(), &dead_address(), &["--videoid", VIDEO_ID, "--csv=maybe"]);

    assert_eq!(output.status.code(), Some(2));
}

#[test]
fn unreachable_source_exits_without_csv() {
    let dir = tempfile::tempdir().unwrap();
    let output = run_in(dir.path(), &dead_address(), &["--videoid", VIDEO_ID, "--csv=y"]);

    assert_eq!(output.status.code(), Some(3));
    assert!(output.stdout.is_empty());
    assert_eq!(files_in(dir.path()), 0);
    assert!(String::from_utf8_lossy(&output.stderr).contains(VIDEO_ID));
}

#[test]
fn unknown_video_exits_with_source_error() {
    let api = spawn_mock_api();
    let dir = tempfile::tempdir().unwrap();
    let output = run_in(dir.path(), &api, &["--videoid=doesNotExist", "--csv=y"]);

    assert_eq!(output.status.code(), Some(3));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("videoNotFound"), "{stderr}");
    assert_eq!(files_in(dir.path()), 0);
}

#[test]
fn reports_stats_and_writes_csv() {
    let api = spawn_mock_api();
    let dir = tempfile::tempdir().unwrap();
    let output = run_in(dir.path(), &api, &[&format!("--videoid={VIDEO_ID}"), "--csv=y"]);

    assert_eq!(
        output.status.code(),
        Some(0),
        "{}",
        String::from_utf8_lossy(&output.stderr)
    );
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("positive: 2\n"), "{stdout}");
    assert!(stdout.contains("negative: 1\n"), "{stdout}");
    assert!(stdout.contains("total: 3\n"), "{stdout}");

    let path = dir.path().join(format!("SentimentComments_{VIDEO_ID}.csv"));
    let mut reader = csv::Reader::from_path(&path).unwrap();
    let rows: Vec<(String, String)> = reader
        .records()
        .map(|r| {
            let r = r.unwrap();
            (r[0].to_string(), r[1].to_string())
        })
        .collect();
    let expected: Vec<(String, String)> = COMMENTS
        .iter()
        .zip(["positive", "positive", "negative"])
        .map(|(text, label)| (text.to_string(), label.to_string()))
        .collect();
    assert_eq!(rows, expected);
}

#[test]
fn no_csv_unless_requested() {
    let api = spawn_mock_api();
    let dir = tempfile::tempdir().unwrap();
    let output = run_in(dir.path(), &api, &["--videoid", VIDEO_ID]);

    assert_eq!(output.status.code(), Some(0));
    assert!(String::from_utf8_lossy(&output.stdout).contains("positive: 2"));
    assert_eq!(files_in(dir.path()), 0);
}

#[test]
fn unwritable_output_exits_after_printing_stats() {
    let api = spawn_mock_api();
    let dir = tempfile::tempdir().unwrap();
    let target = dir.path().join("missing").join("out.csv");
    let output = run_in(
        dir.path(),
        &api,
        &[
            "--videoid",
            VIDEO_ID,
            "--csv=y",
            "--output-file",
            target.to_str().unwrap(),
        ],
    );

    assert_eq!(output.status.code(), Some(4));
    assert!(String::from_utf8_lossy(&output.stdout).contains("positive: 2"));
}
