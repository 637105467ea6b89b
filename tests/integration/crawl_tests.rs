//! Integration tests for the crawler
//!
//! These tests use wiremock to serve a small quotes site and run the full
//! crawl-and-write cycle against it. The crawl itself is blocking, so it runs
//! on `spawn_blocking` while the mock server keeps answering.

use quote_ripple::config::{Config, HttpConfig, SiteConfig, UserAgentConfig};
use quote_ripple::crawler::{harvest, run_crawl, CrawlOutcome, HttpFetcher};
use quote_ripple::output::CrawlStats;
use quote_ripple::{FetchError, RippleError};
use std::path::{Path, PathBuf};
use tempfile::TempDir;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn quote_html(text: &str, author: &str, slug: &str, tags: &[&str]) -> String {
    let tags: String = tags
        .iter()
        .map(|t| format!(r#"<a class="tag" href="/tag/{t}/page/1/">{t}</a>"#))
        .collect();
    format!(
        r#"<div class="quote">
            <span class="text">{text}</span>
            <span>by <small class="author">{author}</small>
            <a href="/author/{slug}">(about)</a></span>
            <div class="tags">Tags: {tags}</div>
        </div>"#
    )
}

fn listing_html(quotes: &[String], next: Option<u32>) -> String {
    let pager = next
        .map(|n| format!(r#"<li class="next"><a href="/page/{n}/">Next</a></li>"#))
        .unwrap_or_default();
    format!(
        r#"<html><head><title>Quotes to Scrape</title></head><body>
            {}
            <nav><ul class="pager">{pager}</ul></nav>
        </body></html>"#,
        quotes.concat()
    )
}

fn author_html(name: &str, born: &str, location: &str) -> String {
    format!(
        r#"<html><body><div class="author-details">
            <h3 class="author-title">{name}</h3>
            <p><span class="author-born-date">{born}</span>
            <span class="author-born-location">{location}</span></p>
            <div class="author-description">
                A short biography of {name}.
            </div>
        </div></body></html>"#
    )
}

fn html(body: String) -> ResponseTemplate {
    ResponseTemplate::new(200)
        .set_body_string(body)
        .insert_header("content-type", "text/html; charset=utf-8")
}

/// Mounts a GET route that must be hit exactly `times` times
async fn mount_page(server: &MockServer, route: &str, body: String, times: u64) {
    Mock::given(method("GET"))
        .and(path(route))
        .respond_with(html(body))
        .expect(times)
        .mount(server)
        .await;
}

fn test_config(server: &MockServer) -> Config {
    Config {
        site: SiteConfig {
            base_url: format!("{}/", server.uri()),
        },
        user_agent: UserAgentConfig {
            crawler_name: "TestBot".to_string(),
            crawler_version: "1.0.0".to_string(),
        },
        http: HttpConfig {
            timeout_secs: 5,
            connect_timeout_secs: 2,
        },
    }
}

/// Runs the blocking crawl off the async runtime
async fn crawl_blocking(config: Config) -> Result<CrawlOutcome, RippleError> {
    tokio::task::spawn_blocking(move || -> Result<CrawlOutcome, RippleError> {
        let base_url = url::Url::parse(&config.site.base_url)?;
        let fetcher = HttpFetcher::from_config(&config.user_agent, &config.http)
            .expect("Failed to build HTTP client");
        run_crawl(fetcher, base_url)
    })
    .await
    .expect("Crawl task panicked")
}

struct Outputs {
    _dir: TempDir,
    quotes: PathBuf,
    authors: PathBuf,
}

fn outputs() -> Outputs {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let quotes = dir.path().join("quotes.csv");
    let authors = dir.path().join("authors.csv");
    Outputs {
        _dir: dir,
        quotes,
        authors,
    }
}

/// Runs crawl and write off the async runtime
async fn harvest_blocking(config: Config, out: &Outputs) -> Result<CrawlStats, RippleError> {
    let quotes = out.quotes.clone();
    let authors = out.authors.clone();
    tokio::task::spawn_blocking(move || harvest(&config, &quotes, &authors))
        .await
        .expect("Harvest task panicked")
}

fn read_rows(path: &Path) -> Vec<Vec<String>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .from_path(path)
        .expect("Failed to open CSV output");
    reader
        .records()
        .map(|r| {
            r.expect("Malformed CSV row")
                .iter()
                .map(str::to_string)
                .collect()
        })
        .collect()
}

#[tokio::test(flavor = "multi_thread")]
async fn test_single_page_two_quotes_same_author() {
    let server = MockServer::start().await;

    mount_page(
        &server,
        "/",
        listing_html(
            &[
                quote_html("“First.”", "Albert Einstein", "Albert-Einstein", &["life", "love"]),
                quote_html("“Second.”", "Albert Einstein", "Albert-Einstein", &[]),
            ],
            None,
        ),
        1,
    )
    .await;
    mount_page(
        &server,
        "/author/Albert-Einstein",
        author_html("Albert Einstein", "March 14, 1879", "in Ulm, Germany"),
        1,
    )
    .await;

    let out = outputs();
    let stats = harvest_blocking(test_config(&server), &out)
        .await
        .expect("Harvest failed");

    assert_eq!(stats.total_fetches(), 2);
    assert_eq!(
        server.received_requests().await.expect("Recording enabled").len(),
        2
    );

    let quotes = read_rows(&out.quotes);
    assert_eq!(quotes.len(), 3);
    assert_eq!(quotes[0], vec!["text", "author", "tags"]);
    assert_eq!(quotes[1], vec!["“First.”", "Albert Einstein", r#"["life", "love"]"#]);
    assert_eq!(quotes[2], vec!["“Second.”", "Albert Einstein", "[]"]);

    let authors = read_rows(&out.authors);
    assert_eq!(authors.len(), 2);
    assert_eq!(
        authors[0],
        vec!["name", "born_date", "born_location", "description"]
    );
    assert_eq!(
        authors[1],
        vec![
            "Albert Einstein",
            "March 14, 1879",
            "in Ulm, Germany",
            "A short biography of Albert Einstein.",
        ]
    );
}

#[tokio::test(flavor = "multi_thread")]
async fn test_three_pages_then_stop() {
    let server = MockServer::start().await;

    mount_page(
        &server,
        "/",
        listing_html(&[quote_html("P1", "Jane Austen", "Jane-Austen", &[])], Some(2)),
        1,
    )
    .await;
    mount_page(
        &server,
        "/page/2",
        listing_html(&[quote_html("P2", "Mark Twain", "Mark-Twain", &[])], Some(3)),
        1,
    )
    .await;
    mount_page(
        &server,
        "/page/3",
        listing_html(&[quote_html("P3", "Jane Austen", "Jane-Austen", &[])], None),
        1,
    )
    .await;
    mount_page(&server, "/page/4", listing_html(&[], None), 0).await;
    mount_page(
        &server,
        "/author/Jane-Austen",
        author_html("Jane Austen", "December 16, 1775", "in Steventon Rectory"),
        1,
    )
    .await;
    mount_page(
        &server,
        "/author/Mark-Twain",
        author_html("Mark Twain", "November 30, 1835", "in Florida, Missouri"),
        1,
    )
    .await;

    let outcome = crawl_blocking(test_config(&server))
        .await
        .expect("Crawl failed");

    let listing_paths: Vec<String> = server
        .received_requests()
        .await
        .expect("Recording enabled")
        .iter()
        .map(|r| r.url.path().to_string())
        .filter(|p| !p.starts_with("/author/"))
        .collect();
    assert_eq!(listing_paths, vec!["/", "/page/2", "/page/3"]);

    let texts: Vec<&str> = outcome.quotes.iter().map(|q| q.text.as_str()).collect();
    assert_eq!(texts, vec!["P1", "P2", "P3"]);

    let authors: Vec<&str> = outcome.authors.iter().map(|a| a.name.as_str()).collect();
    assert_eq!(authors, vec!["Jane Austen", "Mark Twain"]);
    assert_eq!(outcome.stats.author_pages, 2);
    assert_eq!(outcome.stats.cache_hits, 1);
}

#[tokio::test(flavor = "multi_thread")]
async fn test_missing_quote_text_writes_nothing() {
    let server = MockServer::start().await;

    mount_page(
        &server,
        "/",
        r#"<html><body><div class="quote">
            <span>by <small class="author">Albert Einstein</small>
            <a href="/author/Albert-Einstein">(about)</a></span>
        </div></body></html>"#
            .to_string(),
        1,
    )
    .await;
    mount_page(
        &server,
        "/author/Albert-Einstein",
        author_html("Albert Einstein", "March 14, 1879", "in Ulm, Germany"),
        1,
    )
    .await;

    let out = outputs();
    let err = harvest_blocking(test_config(&server), &out)
        .await
        .unwrap_err();

    assert!(err.is_parse());
    assert!(!out.quotes.exists());
    assert!(!out.authors.exists());
}

#[tokio::test(flavor = "multi_thread")]
async fn test_malformed_author_page_aborts() {
    let server = MockServer::start().await;

    mount_page(
        &server,
        "/",
        listing_html(&[quote_html("Q", "Mark Twain", "Mark-Twain", &[])], None),
        1,
    )
    .await;
    mount_page(
        &server,
        "/author/Mark-Twain",
        r#"<html><body><h3 class="author-title">Mark Twain</h3></body></html>"#.to_string(),
        1,
    )
    .await;

    let out = outputs();
    let err = harvest_blocking(test_config(&server), &out)
        .await
        .unwrap_err();

    assert!(err.is_parse());
    assert!(!out.quotes.exists());
    assert!(!out.authors.exists());
}

#[tokio::test(flavor = "multi_thread")]
async fn test_http_error_status_aborts() {
    let server = MockServer::start().await;

    mount_page(
        &server,
        "/",
        listing_html(&[quote_html("Q", "Jane Austen", "Jane-Austen", &[])], Some(2)),
        1,
    )
    .await;
    mount_page(
        &server,
        "/author/Jane-Austen",
        author_html("Jane Austen", "December 16, 1775", "in Steventon Rectory"),
        1,
    )
    .await;
    Mock::given(method("GET"))
        .and(path("/page/2"))
        .respond_with(ResponseTemplate::new(503))
        .expect(1)
        .mount(&server)
        .await;

    let err = crawl_blocking(test_config(&server)).await.unwrap_err();

    assert!(err.is_network());
    match err {
        RippleError::Fetch(FetchError::Status { url, status }) => {
            assert_eq!(status, 503);
            assert!(url.ends_with("/page/2"));
        }
        other => panic!("Unexpected error: {other}"),
    }
}

#[tokio::test(flavor = "multi_thread")]
async fn test_overwrites_previous_output() {
    let server = MockServer::start().await;

    mount_page(
        &server,
        "/",
        listing_html(&[quote_html("Only", "Mark Twain", "Mark-Twain", &["wit"])], None),
        1,
    )
    .await;
    mount_page(
        &server,
        "/author/Mark-Twain",
        author_html("Mark Twain", "November 30, 1835", "in Florida, Missouri"),
        1,
    )
    .await;

    let out = outputs();
    std::fs::write(&out.quotes, "old,rows\n1,2\n3,4\n").expect("Failed to seed file");
    std::fs::write(&out.authors, "old,rows\n1,2\n3,4\n").expect("Failed to seed file");

    harvest_blocking(test_config(&server), &out)
        .await
        .expect("Harvest failed");

    assert_eq!(read_rows(&out.quotes).len(), 2);
    assert_eq!(read_rows(&out.authors).len(), 2);
}
