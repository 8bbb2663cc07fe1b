// Content extraction: one HTTP GET per posting, then a layered read of the
// markup (title, meta tags, embedded component JSON, visible text).

pub mod record;
pub mod strategies;

use std::time::Duration;

use reqwest::Client;
use thiserror::Error;
use tracing::{debug, info, trace};

pub use record::JobRecord;
pub use strategies::{build_record, ExtractionTrace, Page};

/// Many job boards reject default client identifiers, so present as a desktop browser.
pub const USER_AGENT: &str = "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) \
    AppleWebKit/537.36 (KHTML, like Gecko) Chrome/124.0 Safari/537.36";

const PREVIEW_CHARS: usize = 300;

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("Failed to create HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    #[error("Failed to fetch {url}: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("{url} returned HTTP {status}")]
    Status { url: String, status: u16 },
}

/// Fetches job postings and turns them into `JobRecord`s.
#[derive(Clone)]
pub struct JobExtractor {
    client: Client,
}

impl JobExtractor {
    pub fn new(timeout: Duration) -> Result<Self, FetchError> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .build()
            .map_err(FetchError::Client)?;

        Ok(Self { client })
    }

    /// Downloads `url` and extracts a `JobRecord` from it.
    ///
    /// Transport failures and non-2xx statuses are returned as `FetchError`;
    /// nothing is retried. An all-empty record is a valid return value here,
    /// it is up to the caller to reject it.
    pub async fn extract(&self, url: &str) -> Result<JobRecord, FetchError> {
        info!("Fetching job post: {}", url);

        let transport = |source| FetchError::Transport {
            url: url.to_string(),
            source,
        };

        let response = self.client.get(url).send().await.map_err(transport)?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        let html = response.text().await.map_err(transport)?;

        Ok(parse_job_page(url, &html))
    }
}

/// Extracts a `JobRecord` from already-downloaded markup and logs where each
/// field came from.
pub fn parse_job_page(url: &str, html: &str) -> JobRecord {
    let page = Page::parse(html);
    let (record, sources) = build_record(url, &page);
    log_trace(url, &record, &sources);
    record
}

fn log_trace(url: &str, record: &JobRecord, sources: &ExtractionTrace) {
    for source in sources {
        debug!(
            field = source.field.label(),
            strategy = source.strategy.unwrap_or("none"),
            chars = source.chars,
            "Extracted field"
        );
    }

    let found = sources.iter().filter(|s| s.strategy.is_some()).count();
    debug!(
        "Extraction for {}: {}/{} fields found, visible text {} chars",
        url,
        found,
        sources.len(),
        record.text.chars().count()
    );
    trace!(
        "Visible text preview: {}",
        record.text.chars().take(PREVIEW_CHARS).collect::<String>()
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{http::StatusCode, response::Html, routing::get, Router};

    async fn spawn_site(router: Router) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });
        format!("http://{addr}")
    }

    fn extractor() -> JobExtractor {
        JobExtractor::new(Duration::from_secs(5)).unwrap()
    }

    #[tokio::test]
    async fn test_extract_sends_browser_user_agent() {
        let router = Router::new().route(
            "/job",
            get(|headers: axum::http::HeaderMap| async move {
                let agent = headers
                    .get("user-agent")
                    .and_then(|v| v.to_str().ok())
                    .unwrap_or_default()
                    .to_string();
                Html(format!(
                    r#"<html><head><meta name="description" content="{agent}"></head></html>"#
                ))
            }),
        );
        let base = spawn_site(router).await;

        let record = extractor().extract(&format!("{base}/job")).await.unwrap();
        assert_eq!(record.meta_description, USER_AGENT);
        assert_eq!(record.url, format!("{base}/job"));
    }

    #[tokio::test]
    async fn test_non_success_status_is_fetch_error() {
        let router = Router::new().route(
            "/gone",
            get(|| async { (StatusCode::NOT_FOUND, Html("<html><title>404</title></html>")) }),
        );
        let base = spawn_site(router).await;

        let err = extractor()
            .extract(&format!("{base}/gone"))
            .await
            .unwrap_err();
        assert!(matches!(err, FetchError::Status { status: 404, .. }));
    }

    #[tokio::test]
    async fn test_unreachable_host_is_transport_error() {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let err = extractor()
            .extract(&format!("http://{addr}/job"))
            .await
            .unwrap_err();
        assert!(matches!(err, FetchError::Transport { .. }));
    }

    #[test]
    fn test_parse_job_page_keeps_url() {
        let record = parse_job_page("https://jobs.example/9", "<html><title>QA</title></html>");
        assert_eq!(record.url, "https://jobs.example/9");
        assert_eq!(record.title, "QA");
    }
}
