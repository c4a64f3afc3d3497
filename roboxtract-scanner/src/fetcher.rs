use crate::error::Result;
use crate::outcome::FetchOutcome;
use reqwest::Client;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, USER_AGENT};
use std::time::Duration;
use tracing::{debug, warn};
use url::Url;

pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(20);

const ROBOTS_SUFFIX: &str = "/robots.txt";

/// Build the robots.txt URL for a host entry.
///
/// Entries without a scheme are assumed to be HTTPS. An entry already pointing
/// at `/robots.txt` is used as-is.
pub fn robots_url(host: &str) -> String {
    let host = if host.contains("://") {
        host.to_string()
    } else {
        format!("https://{}", host)
    };

    if host.ends_with(ROBOTS_SUFFIX) {
        host
    } else if host.ends_with('/') {
        format!("{}robots.txt", host)
    } else {
        format!("{}{}", host, ROBOTS_SUFFIX)
    }
}

/// Split a `Key: Value` header string on its first colon.
pub fn parse_header(raw: &str) -> Option<(String, String)> {
    let (key, value) = raw.split_once(':')?;
    Some((key.trim().to_string(), value.trim().to_string()))
}

/// Default headers plus caller overrides. Later entries replace earlier ones
/// with the same name, so a custom `User-Agent` wins over the default.
pub fn build_headers(custom: &[String]) -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(USER_AGENT, HeaderValue::from_static(DEFAULT_USER_AGENT));

    for raw in custom {
        let Some((key, value)) = parse_header(raw) else {
            continue;
        };

        let name = match HeaderName::from_bytes(key.as_bytes()) {
            Ok(name) => name,
            Err(e) => {
                warn!("Skipping header with invalid name '{}': {}", key, e);
                continue;
            }
        };
        let value = match HeaderValue::from_str(&value) {
            Ok(value) => value,
            Err(e) => {
                warn!("Skipping header '{}' with invalid value: {}", key, e);
                continue;
            }
        };
        headers.insert(name, value);
    }

    headers
}

/// Fetches robots.txt files and classifies each response.
pub struct Fetcher {
    client: Client,
}

impl Fetcher {
    pub fn new() -> Result<Self> {
        Self::with_options(DEFAULT_TIMEOUT, &[])
    }

    pub fn with_options(timeout: Duration, custom_headers: &[String]) -> Result<Self> {
        // Invalid certificates are accepted; redirects come back as-is.
        let client = Client::builder()
            .default_headers(build_headers(custom_headers))
            .timeout(timeout)
            .danger_accept_invalid_certs(true)
            .redirect(reqwest::redirect::Policy::none())
            .build()?;

        Ok(Self { client })
    }

    /// Fetch a single host. Never fails: every problem becomes a
    /// [`FetchOutcome::Failure`] so one bad host cannot affect the others.
    pub async fn fetch(&self, host: &str) -> FetchOutcome {
        let request_url = robots_url(host);
        let target = match Url::parse(&request_url) {
            Ok(url) => url,
            Err(e) => {
                debug!("Invalid URL {}: {}", request_url, e);
                return FetchOutcome::failure(format!("invalid URL {}: {}", request_url, e));
            }
        };

        debug!("Fetching {}", target);

        let response = match self.client.get(target).send().await {
            Ok(response) => response,
            Err(e) => {
                let reason = describe_error(&e);
                debug!("Request to {} failed: {}", request_url, reason);
                return FetchOutcome::failure(reason);
            }
        };

        let status_code = response.status().as_u16();
        if status_code != 200 {
            debug!("{} answered with status {}", request_url, status_code);
            return FetchOutcome::failure(format!("HTTP {}", status_code));
        }

        let url = response.url().to_string();
        match response.bytes().await {
            Ok(body) => FetchOutcome::Success {
                url,
                status_code,
                body: body.to_vec(),
            },
            Err(e) => {
                let reason = describe_error(&e);
                debug!("Reading body of {} failed: {}", url, reason);
                FetchOutcome::failure(reason)
            }
        }
    }
}

fn describe_error(error: &reqwest::Error) -> String {
    if error.is_timeout() {
        "request timed out".to_string()
    } else if error.is_connect() {
        format!("connection failed: {}", error)
    } else {
        error.to_string()
    }
}
