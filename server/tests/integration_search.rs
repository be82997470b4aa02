use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::Value;
use std::fs;
use tempfile::tempdir;
use tower::ServiceExt;

fn build_tiny_corpus(dir: &std::path::Path) {
    fs::write(dir.join("docs.txt"), "doc0.txt\ndoc1.txt\ndoc2.txt\n").unwrap();
    fs::write(dir.join("noisewords.txt"), "the\nis\n").unwrap();
    fs::write(dir.join("doc0.txt"), "Rust is great. Rust, rust systems programming.").unwrap();
    fs::write(dir.join("doc1.txt"), "Learning rust and go.").unwrap();
    fs::write(dir.join("doc2.txt"), "Go go go! The gopher.").unwrap();
}

async fn call(app: Router, uri: &str) -> (StatusCode, Value) {
    let req = Request::get(uri).body(Body::empty()).unwrap();
    let resp = app.oneshot(req).await.unwrap();
    let status = resp.status();
    let body = resp.into_body().collect().await.unwrap().to_bytes();
    let json = serde_json::from_slice(&body).unwrap_or(Value::Null);
    (status, json)
}

#[tokio::test]
async fn search_returns_ranked_results() {
    let dir = tempdir().unwrap();
    build_tiny_corpus(dir.path());
    let app = server::build_app(dir.path().join("docs.txt"), dir.path().join("noisewords.txt")).unwrap();

    let (status, json) = call(app, "/search?kw1=rust&kw2=go").await;
    assert_eq!(status, StatusCode::OK);
    let docs: Vec<&str> = json["results"]
        .as_array()
        .unwrap()
        .iter()
        .map(|hit| hit["document"].as_str().unwrap())
        .collect();
    // rust: doc0=3, doc1=1; go: doc2=3, doc1=1
    assert_eq!(docs, vec!["doc0.txt", "doc2.txt", "doc1.txt"]);
    assert_eq!(json["total_hits"], 3);
    let snippet = json["results"][0]["snippet"].as_str().unwrap();
    assert!(snippet.contains("<em>Rust</em>"));
}

#[tokio::test]
async fn search_without_matches_is_empty() {
    let dir = tempdir().unwrap();
    build_tiny_corpus(dir.path());
    let app = server::build_app(dir.path().join("docs.txt"), dir.path().join("noisewords.txt")).unwrap();

    let (status, json) = call(app, "/search?kw1=the&kw2=zebra").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["total_hits"], 0);
    assert!(json["results"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn keyword_lists_occurrences() {
    let dir = tempdir().unwrap();
    build_tiny_corpus(dir.path());
    let app = server::build_app(dir.path().join("docs.txt"), dir.path().join("noisewords.txt")).unwrap();

    let (status, json) = call(app.clone(), "/keyword/Go!").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["keyword"], "go");
    assert_eq!(json["occurrences"][0]["document"], "doc2.txt");
    assert_eq!(json["occurrences"][0]["frequency"], 3);

    let (status, _) = call(app.clone(), "/keyword/the").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    let (status, _) = call(app, "/keyword/zebra").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[test]
fn missing_document_fails_startup() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("docs.txt"), "absent.txt").unwrap();
    fs::write(dir.path().join("noisewords.txt"), "").unwrap();
    let err = server::build_app(dir.path().join("docs.txt"), dir.path().join("noisewords.txt")).unwrap_err();
    assert!(err.to_string().contains("absent.txt"));
}
