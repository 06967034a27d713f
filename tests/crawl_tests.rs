//! Integration tests for the crawler
//!
//! These tests use wiremock to serve listing pages and run the full
//! fetch / extract / next-page / save cycle over real HTTP.

use quote_harvest::config::Config;
use quote_harvest::crawler::Crawler;
use quote_harvest::logging::{build_subscriber, level_filter, LogBuffer};
use quote_harvest::{ConfigError, HarvestError, Quote, StopReason};
use tempfile::TempDir;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn quote_block(text: &str, author: &str, tags: &[&str]) -> String {
    let tags: String = tags
        .iter()
        .map(|t| format!(r#"<a class="tag" href="/tag/{0}/page/1/">{0}</a>"#, t))
        .collect();
    format!(
        r#"<div class="quote" itemscope itemtype="http://schema.org/CreativeWork">
            <span class="text" itemprop="text">{}</span>
            <span>by <small class="author" itemprop="author">{}</small></span>
            <div class="tags">Tags: {}</div>
        </div>"#,
        text, author, tags
    )
}

fn listing(blocks: &[String], next: Option<&str>) -> String {
    let pager = match next {
        Some(href) => format!(
            r#"<nav><ul class="pager"><li class="next"><a href="{}">Next <span aria-hidden="true">&rarr;</span></a></li></ul></nav>"#,
            href
        ),
        None => String::new(),
    };
    format!(
        r#"<!DOCTYPE html><html lang="en"><head><meta charset="UTF-8"><title>Quotes</title></head>
        <body><div class="container"><div class="row"><div class="col-md-8">{}{}</div></div></div></body></html>"#,
        blocks.concat(),
        pager
    )
}

fn html_response(body: String) -> ResponseTemplate {
    ResponseTemplate::new(200)
        .set_body_string(body)
        .insert_header("content-type", "text/html; charset=utf-8")
}

async fn mount_page(server: &MockServer, page_path: &str, body: String) {
    Mock::given(method("GET"))
        .and(path(page_path))
        .respond_with(html_response(body))
        .mount(server)
        .await;
}

fn output_config(server: &MockServer, dir: &TempDir) -> Config {
    Config::new(
        format!("{}/", server.uri()),
        dir.path().join("quotes.json").to_string_lossy().into_owned(),
    )
}

fn read_quotes(dir: &TempDir) -> Vec<Quote> {
    let json = std::fs::read_to_string(dir.path().join("quotes.json"))
        .expect("Output file should exist");
    serde_json::from_str(&json).expect("Output should be a JSON array of quotes")
}

#[tokio::test]
async fn test_single_page_two_quotes() {
    let mock_server = MockServer::start().await;
    mount_page(
        &mock_server,
        "/",
        listing(
            &[
                quote_block("“Be yourself; everyone else is already taken.”", "Oscar Wilde", &["be-yourself", "inspirational"]),
                quote_block("“Simplicity is the ultimate sophistication.”", "Leonardo da Vinci", &["simplicity"]),
            ],
            None,
        ),
    )
    .await;

    let dir = TempDir::new().unwrap();
    let logs = LogBuffer::new();
    let _guard = tracing::subscriber::set_default(build_subscriber(
        level_filter(0, false),
        logs.clone(),
    ));

    let summary = Crawler::new(output_config(&mock_server, &dir))
        .expect("Failed to create crawler")
        .run()
        .await;

    assert!(summary.is_complete());
    let quotes = read_quotes(&dir);
    assert_eq!(
        quotes,
        vec![
            Quote::new(
                "“Be yourself; everyone else is already taken.”",
                "Oscar Wilde",
                vec!["be-yourself".to_string(), "inspirational".to_string()]
            ),
            Quote::new(
                "“Simplicity is the ultimate sophistication.”",
                "Leonardo da Vinci",
                vec!["simplicity".to_string()]
            ),
        ]
    );

    let output = logs.contents();
    assert_eq!(output.matches("Quotes saved to file").count(), 1);
    assert!(!output.contains("ERROR"));
}

#[tokio::test]
async fn test_follows_relative_next_links() {
    let mock_server = MockServer::start().await;
    mount_page(
        &mock_server,
        "/",
        listing(&[quote_block("p1-a", "A", &["x"]), quote_block("p1-b", "B", &[])], Some("/page/2/")),
    )
    .await;
    mount_page(
        &mock_server,
        "/page/2/",
        listing(&[quote_block("p2-a", "C", &["y"])], Some("/page/3/")),
    )
    .await;
    mount_page(
        &mock_server,
        "/page/3/",
        listing(&[quote_block("p3-a", "D", &["z"])], None),
    )
    .await;

    let dir = TempDir::new().unwrap();
    let summary = Crawler::new(output_config(&mock_server, &dir))
        .expect("Failed to create crawler")
        .run()
        .await;

    assert_eq!(summary.pages_fetched, 3);
    assert_eq!(summary.stop_reason, StopReason::NoNextPage);
    let texts: Vec<_> = read_quotes(&dir).into_iter().map(|q| q.text).collect();
    assert_eq!(texts, vec!["p1-a", "p1-b", "p2-a", "p3-a"]);
}

#[tokio::test]
async fn test_http_error_stops_crawl_and_saves() {
    let mock_server = MockServer::start().await;
    mount_page(
        &mock_server,
        "/",
        listing(&[quote_block("kept", "A", &[])], Some("/page/2/")),
    )
    .await;

    Mock::given(method("GET"))
        .and(path("/page/2/"))
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/page/3/"))
        .respond_with(html_response(listing(&[], None)))
        .expect(0)
        .mount(&mock_server)
        .await;

    let dir = TempDir::new().unwrap();
    let logs = LogBuffer::new();
    let _guard = tracing::subscriber::set_default(build_subscriber(
        level_filter(0, false),
        logs.clone(),
    ));

    let summary = Crawler::new(output_config(&mock_server, &dir))
        .expect("Failed to create crawler")
        .run()
        .await;

    assert!(matches!(summary.stop_reason, StopReason::FetchFailed { .. }));
    assert!(summary.saved);
    let quotes = read_quotes(&dir);
    assert_eq!(quotes.len(), 1);
    assert_eq!(quotes[0].text, "kept");

    let output = logs.contents();
    assert!(output.contains("ERROR"));
    assert!(output.contains("/page/2/"));
}

#[tokio::test]
async fn test_missing_start_page_writes_empty_array() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&mock_server)
        .await;

    let dir = TempDir::new().unwrap();
    let summary = Crawler::new(output_config(&mock_server, &dir))
        .expect("Failed to create crawler")
        .run()
        .await;

    assert_eq!(summary.pages_fetched, 0);
    assert!(summary.saved);
    assert_eq!(
        std::fs::read_to_string(dir.path().join("quotes.json")).unwrap(),
        "[]"
    );
}

#[tokio::test]
async fn test_malformed_block_keeps_crawling() {
    let mock_server = MockServer::start().await;
    let broken = r#"<div class="quote"><span class="text">no author</span></div>"#.to_string();
    mount_page(
        &mock_server,
        "/",
        listing(
            &[quote_block("first", "A", &[]), broken, quote_block("lost", "B", &[])],
            Some("/page/2/"),
        ),
    )
    .await;
    mount_page(
        &mock_server,
        "/page/2/",
        listing(&[quote_block("second page", "C", &[])], None),
    )
    .await;

    let dir = TempDir::new().unwrap();
    let logs = LogBuffer::new();
    let _guard = tracing::subscriber::set_default(build_subscriber(
        level_filter(0, false),
        logs.clone(),
    ));

    let summary = Crawler::new(output_config(&mock_server, &dir))
        .expect("Failed to create crawler")
        .run()
        .await;

    assert_eq!(summary.pages_truncated, 1);
    let texts: Vec<_> = read_quotes(&dir).into_iter().map(|q| q.text).collect();
    assert_eq!(texts, vec!["first", "second page"]);
    assert!(logs.contents().contains("WARN"));
}

#[tokio::test]
async fn test_repeated_runs_are_identical() {
    let mock_server = MockServer::start().await;
    mount_page(
        &mock_server,
        "/",
        listing(&[quote_block("“Ünïcödé”", "Ана", &["ß", "日本"])], Some("/page/2/")),
    )
    .await;
    mount_page(
        &mock_server,
        "/page/2/",
        listing(&[quote_block("plain", "B", &["t"])], None),
    )
    .await;

    let dir = TempDir::new().unwrap();
    let output_path = dir.path().join("quotes.json");

    Crawler::new(output_config(&mock_server, &dir))
        .unwrap()
        .run()
        .await;
    let first = std::fs::read(&output_path).unwrap();

    Crawler::new(output_config(&mock_server, &dir))
        .unwrap()
        .run()
        .await;
    let second = std::fs::read(&output_path).unwrap();

    assert_eq!(first, second);
    assert!(String::from_utf8(first).unwrap().contains("“Ünïcödé”"));
}

#[test]
fn test_invalid_origin_rejected_before_crawl() {
    let config =
        Config::new("https://quotes.toscrape.com/", "quotes.json").with_origin("ftp://mirror.example");

    let result = Crawler::new(config);

    assert!(matches!(
        result,
        Err(HarvestError::Config(ConfigError::InvalidUrl(_)))
    ));
}
