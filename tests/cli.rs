//! End-to-end tests driving the binary
//!
//! None of these reach the network: they stop before sending a request,
//! point NEWSAPI_URL at a closed local port, or answer from a wiremock server.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn news(config_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("simple-cli-news").unwrap();
    cmd.env("SIMPLE_CLI_NEWS_CONFIG_DIR", config_dir.path())
        .env("NEWSAPI_URL", "http://127.0.0.1:9/v2/")
        .env_remove("RUST_LOG")
        .arg("--no-color");
    cmd
}

/// Like [`news`] with an api key stored and requests sent to `server`
fn news_with_server(config_dir: &TempDir, server: &MockServer) -> Command {
    news(config_dir).args(["-a", "k"]).assert().success();

    let mut cmd = news(config_dir);
    cmd.env("NEWSAPI_URL", format!("{}/v2/", server.uri()));
    cmd
}

#[test]
fn test_help_lists_options() {
    let dir = TempDir::new().unwrap();

    news(&dir)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--apikey"))
        .stdout(predicate::str::contains("--page-size"))
        .stdout(predicate::str::contains("list"));
}

#[test]
fn test_version() {
    let dir = TempDir::new().unwrap();

    news(&dir)
        .arg("-v")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_set_apikey_writes_config() {
    let dir = TempDir::new().unwrap();

    news(&dir)
        .args(["-a", "0123456789"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Saved api key"));

    let content = std::fs::read_to_string(dir.path().join("config.json")).unwrap();
    let config: serde_json::Value = serde_json::from_str(&content).unwrap();
    assert_eq!(config["apikey"], "0123456789");
    assert_eq!(config["language"], "en");
}

#[test]
fn test_config_show_masks_apikey() {
    let dir = TempDir::new().unwrap();

    news(&dir)
        .args(["--key", "0123456789", "--lang", "de"])
        .assert()
        .success();

    news(&dir)
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("0123******"))
        .stdout(predicate::str::contains("Language: de"))
        .stdout(predicate::str::contains("0123456789").not());
}

#[test]
fn test_config_path() {
    let dir = TempDir::new().unwrap();

    news(&dir)
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains("config.json"));
}

#[test]
fn test_missing_apikey_is_reported() {
    let dir = TempDir::new().unwrap();

    news(&dir)
        .assert()
        .failure()
        .stderr(predicate::str::contains("No NewsAPI key configured"))
        .stderr(predicate::str::contains("simple-cli-news -a"));

    news(&dir)
        .args(["list", "sources"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("simple-cli-news -a"));
}

#[test]
fn test_unreachable_api_fails_without_leaking_key() {
    let dir = TempDir::new().unwrap();

    news(&dir).args(["-a", "supersecretkey"]).assert().success();

    news(&dir)
        .args(["-q", "rust"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("ERROR:"))
        .stderr(predicate::str::contains("supersecretkey").not());
}

#[test]
fn test_invalid_arguments() {
    let dir = TempDir::new().unwrap();

    news(&dir).args(["-p", "500"]).assert().failure();
    news(&dir).args(["-q", "rust", "-c", "us"]).assert().failure();
    news(&dir).args(["--category", "weather"]).assert().failure();
}

#[test]
fn test_empty_api_url_env_uses_default() {
    let dir = TempDir::new().unwrap();

    news(&dir)
        .env("NEWSAPI_URL", "")
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains("config.json"));
}

#[test]
fn test_headline_filters_rejected_with_subcommand() {
    let dir = TempDir::new().unwrap();

    news(&dir)
        .args(["-c", "us", "list", "sources"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--country"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_search_prints_articles() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v2/everything"))
        .and(query_param("q", "rust lang"))
        .and(query_param("language", "en"))
        .and(query_param("pageSize", "3"))
        .and(query_param("apikey", "k"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "status": "ok",
            "totalResults": 2,
            "articles": [
                {"source": {"id": null, "name": "Example"}, "title": "First", "url": "https://example.com/1"},
                {"source": {"id": null, "name": "Example"}, "title": "Second", "url": "https://example.com/2"}
            ]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let dir = TempDir::new().unwrap();
    news_with_server(&dir, &server)
        .args(["-q", "rust lang", "-p", "3"])
        .assert()
        .success()
        .stdout("\nFirst\n>>> https://example.com/1\n\nSecond\n>>> https://example.com/2\n");
}

#[tokio::test(flavor = "multi_thread")]
async fn test_headlines_without_articles() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v2/top-headlines"))
        .and(query_param("country", "us"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "status": "ok",
            "totalResults": 0,
            "articles": []
        })))
        .expect(1)
        .mount(&server)
        .await;

    let dir = TempDir::new().unwrap();
    news_with_server(&dir, &server)
        .args(["-c", "us"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Failed to find any articles"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_list_sources_prints_sources() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v2/top-headlines/sources"))
        .and(query_param("country", "gb"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "status": "ok",
            "sources": [
                {"id": "bbc-news", "name": "BBC News", "description": "Up-to-the-minute news"}
            ]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let dir = TempDir::new().unwrap();
    news_with_server(&dir, &server)
        .args(["list", "sources", "--country", "gb"])
        .assert()
        .success()
        .stdout("BBC News\nUp-to-the-minute news\nbbc-news\n\n");
}

#[tokio::test(flavor = "multi_thread")]
async fn test_list_sources_without_sources() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v2/top-headlines/sources"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::json!({"status": "ok", "sources": []})),
        )
        .mount(&server)
        .await;

    let dir = TempDir::new().unwrap();
    news_with_server(&dir, &server)
        .args(["list", "sources"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Failed to find any sources"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_rejected_apikey_shows_hint() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v2/top-headlines/sources"))
        .respond_with(ResponseTemplate::new(401).set_body_json(serde_json::json!({
            "status": "error",
            "code": "apiKeyInvalid",
            "message": "Your API key is invalid or incorrect."
        })))
        .mount(&server)
        .await;

    let dir = TempDir::new().unwrap();
    news_with_server(&dir, &server)
        .args(["list", "sources"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Failed to fetch sources"))
        .stderr(predicate::str::contains("Apikey is invalid"))
        .stderr(predicate::str::contains("simple-cli-news -a"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_api_error_document_is_reported() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v2/top-headlines"))
        .respond_with(ResponseTemplate::new(429).set_body_json(serde_json::json!({
            "status": "error",
            "code": "rateLimited",
            "message": "You have made too many requests recently."
        })))
        .mount(&server)
        .await;

    let dir = TempDir::new().unwrap();
    news_with_server(&dir, &server)
        .assert()
        .failure()
        .stderr(predicate::str::contains("NewsAPI error (rateLimited)"))
        .stderr(predicate::str::contains("Failed to fetch articles"));
}
