//! URL extraction and reachability checking over response text.
//!
//! Extraction is pure and order-preserving; reachability is a best-effort
//! HEAD (falling back to GET) with a short timeout. A URL that cannot be
//! checked is reported `reachable: false`, never raised as an error.

use std::time::Duration;

use async_trait::async_trait;
use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

use crate::model::{LinkCheck, LinkSummary};

static LINK_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)(?:https?://(?:[-\w.]|%[\da-fA-F]{2})+(?::\d+)?(?:/[-\w%!./?=&+#]*)*|www\.[-\w.]+(?:/[-\w%!./?=&+#]*)*)",
    )
    .expect("link pattern compiles")
});

const CHECK_TIMEOUT: Duration = Duration::from_secs(15);

/// Extract URL-shaped substrings in order of appearance. Bare `www.` hosts
/// get an `https://` scheme, trailing sentence punctuation is stripped, and
/// duplicates keep their first position.
pub fn extract_links(text: &str) -> Vec<String> {
    let mut seen = std::collections::HashSet::new();
    let mut links = Vec::new();

    for m in LINK_RE.find_iter(text) {
        let mut link = m.as_str().to_string();
        if link.to_ascii_lowercase().starts_with("www.") {
            link = format!("https://{}", link);
        }
        while link
            .chars()
            .next_back()
            .is_some_and(|c| ".,:;!?)]}>\"'".contains(c))
        {
            link.pop();
        }
        if link.len() > 10 && link.contains('.') && seen.insert(link.clone()) {
            links.push(link);
        }
    }

    links
}

/// Seam between the runner and the reachability checker.
#[async_trait]
pub trait LinkValidator: Send + Sync {
    async fn validate(&self, text: &str) -> LinkSummary;
}

/// Checks each extracted URL over the network.
pub struct HttpLinkValidator {
    client: reqwest::Client,
}

impl HttpLinkValidator {
    pub fn new() -> anyhow::Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(CHECK_TIMEOUT)
            .user_agent(concat!("promptpair/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| anyhow::anyhow!("failed to create HTTP client: {}", e))?;
        Ok(Self { client })
    }

    /// Check one URL. HEAD first; a transport failure or error status falls
    /// back to GET, since some servers reject HEAD outright.
    pub async fn check_url(&self, url: &str) -> LinkCheck {
        if url::Url::parse(url).is_err() {
            return LinkCheck {
                url: url.to_string(),
                reachable: false,
                status_code: None,
            };
        }

        let head = self.client.head(url).send().await;
        let status = match head {
            Ok(resp) if resp.status().is_success() || resp.status().is_redirection() => {
                Some(resp.status().as_u16())
            }
            _ => match self.client.get(url).send().await {
                Ok(resp) => Some(resp.status().as_u16()),
                Err(e) => {
                    debug!(url = %url, error = %e, "link check failed");
                    None
                }
            },
        };

        LinkCheck {
            url: url.to_string(),
            reachable: status.is_some_and(|s| s < 400),
            status_code: status,
        }
    }
}

#[async_trait]
impl LinkValidator for HttpLinkValidator {
    async fn validate(&self, text: &str) -> LinkSummary {
        let mut urls = Vec::new();
        for link in extract_links(text) {
            urls.push(self.check_url(&link).await);
        }
        LinkSummary { urls }
    }
}

/// Extraction only, no reachability checks. Used where network access is
/// unavailable (runner tests); every URL is reported unreachable.
pub struct NoopLinkValidator;

#[async_trait]
impl LinkValidator for NoopLinkValidator {
    async fn validate(&self, text: &str) -> LinkSummary {
        LinkSummary {
            urls: extract_links(text)
                .into_iter()
                .map(|url| LinkCheck {
                    url,
                    reachable: false,
                    status_code: None,
                })
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[test]
    fn extracts_two_urls_in_order() {
        let links = extract_links("See https://example.com and http://bad.invalid");
        assert_eq!(links, ["https://example.com", "http://bad.invalid"]);
    }

    #[test]
    fn normalizes_bare_www_hosts() {
        let links = extract_links("Visit www.example.com/page for details");
        assert_eq!(links, ["https://www.example.com/page"]);
    }

    #[test]
    fn strips_trailing_punctuation() {
        let links = extract_links("Docs at https://example.com/docs. More: (https://example.org)");
        assert_eq!(links, ["https://example.com/docs", "https://example.org"]);
    }

    #[test]
    fn dedupes_preserving_first_position() {
        let text = "https://example.com/a then https://example.org then https://example.com/a";
        let links = extract_links(text);
        assert_eq!(links, ["https://example.com/a", "https://example.org"]);
    }

    #[test]
    fn no_urls_means_empty_list() {
        assert!(extract_links("No links in this answer.").is_empty());
    }

    #[tokio::test]
    async fn head_success_is_reachable() {
        let server = MockServer::start().await;
        Mock::given(method("HEAD"))
            .and(path("/ok"))
            .respond_with(ResponseTemplate::new(200))
            .mount(&server)
            .await;

        let check = HttpLinkValidator::new()
            .unwrap()
            .check_url(&format!("{}/ok", server.uri()))
            .await;
        assert!(check.reachable);
        assert_eq!(check.status_code, Some(200));
    }

    #[tokio::test]
    async fn head_rejection_falls_back_to_get() {
        let server = MockServer::start().await;
        Mock::given(method("HEAD"))
            .and(path("/page"))
            .respond_with(ResponseTemplate::new(405))
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/page"))
            .respond_with(ResponseTemplate::new(200))
            .mount(&server)
            .await;

        let check = HttpLinkValidator::new()
            .unwrap()
            .check_url(&format!("{}/page", server.uri()))
            .await;
        assert!(check.reachable);
        assert_eq!(check.status_code, Some(200));
    }

    #[tokio::test]
    async fn not_found_is_unreachable_with_status() {
        let server = MockServer::start().await;
        Mock::given(method("HEAD"))
            .and(path("/gone"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/gone"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;

        let check = HttpLinkValidator::new()
            .unwrap()
            .check_url(&format!("{}/gone", server.uri()))
            .await;
        assert!(!check.reachable);
        assert_eq!(check.status_code, Some(404));
    }

    #[tokio::test]
    async fn malformed_url_is_unreachable_without_status() {
        let check = HttpLinkValidator::new().unwrap().check_url("https://").await;
        assert!(!check.reachable);
        assert_eq!(check.status_code, None);
    }

    #[tokio::test]
    async fn validate_reports_each_url_independently() {
        let server = MockServer::start().await;
        Mock::given(method("HEAD"))
            .and(path("/good"))
            .respond_with(ResponseTemplate::new(200))
            .mount(&server)
            .await;
        Mock::given(method("HEAD"))
            .and(path("/bad"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/bad"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;

        let text = format!("Good: {}/good Bad: {}/bad", server.uri(), server.uri());
        let summary = HttpLinkValidator::new().unwrap().validate(&text).await;
        assert_eq!(summary.urls.len(), 2);
        assert!(summary.urls[0].reachable);
        assert!(!summary.urls[1].reachable);
        assert_eq!(summary.reachable_count(), 1);
    }
}
