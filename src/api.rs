// API client module: a small blocking HTTP client for the Qiita items
// search. One GET per day, no retries and no pagination beyond the first
// page.

use crate::config::Config;
use crate::dates::DayRange;
use reqwest::blocking::Client;
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use reqwest::Url;
use serde::{Deserialize, Deserializer};
use thiserror::Error;

/// Only posts stocked more than this many times are returned.
pub const MIN_STOCKS: u32 = 30;
pub const PAGE: u32 = 1;
pub const PER_PAGE: u32 = 30;

/// One search hit. Extra fields in the response are ignored and missing
/// ones take their zero value.
#[derive(Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct ArticleRecord {
    pub url: String,
    pub title: String,
    #[serde(deserialize_with = "null_as_zero")]
    pub likes_count: i64,
    #[serde(deserialize_with = "null_as_zero")]
    pub reactions_count: i64,
    /// Only filled for the token owner's own posts; `null` otherwise.
    #[serde(deserialize_with = "null_as_zero")]
    pub page_views_count: i64,
}

fn null_as_zero<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<i64>::deserialize(deserializer)?.unwrap_or_default())
}

/// Failures that abort the whole run. A body that does not decode is not
/// one of them: see [`QiitaClient::fetch_records`].
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    #[error("invalid search URL {url}: {reason}")]
    InvalidUrl { url: String, reason: String },

    #[error("API token is not a valid header value: {0}")]
    InvalidToken(#[from] reqwest::header::InvalidHeaderValue),

    #[error("request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },
}

/// Holds a reqwest blocking client, the API base URL and an optional
/// bearer token.
#[derive(Clone)]
pub struct QiitaClient {
    client: Client,
    base_url: String,
    token: Option<String>,
}

impl QiitaClient {
    pub fn new(config: &Config) -> Result<Self, FetchError> {
        let client = Client::builder().build().map_err(FetchError::Client)?;
        Ok(QiitaClient {
            client,
            base_url: config.api_url.trim_end_matches('/').to_string(),
            token: config.token.clone().filter(|t| !t.is_empty()),
        })
    }

    /// Full search URL for one day, before percent-encoding.
    pub fn search_url(&self, range: &DayRange) -> String {
        format!(
            "{}/items?page={}&per_page={}&query={}",
            self.base_url,
            PAGE,
            PER_PAGE,
            search_query(range)
        )
    }

    /// JSON content type always; Authorization only when a token is set.
    fn request_headers(&self) -> Result<HeaderMap, FetchError> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        if let Some(t) = &self.token {
            let mut val = HeaderValue::from_str(&format!("Bearer {}", t))?;
            val.set_sensitive(true);
            headers.insert(AUTHORIZATION, val);
        }
        Ok(headers)
    }

    /// Fetch the first page of posts created within `range`.
    ///
    /// Transport failures are returned as errors. A body that is not a JSON
    /// array of records, or a non-success status, is logged and yields no
    /// records so the caller can move on to the next day.
    pub fn fetch_records(&self, range: &DayRange) -> Result<Vec<ArticleRecord>, FetchError> {
        let url = self.search_url(range);
        let endpoint = Url::parse(&url).map_err(|e| FetchError::InvalidUrl {
            url: url.clone(),
            reason: e.to_string(),
        })?;
        let headers = self.request_headers()?;

        log::debug!("GET {}", endpoint);
        let res = self
            .client
            .get(endpoint)
            .headers(headers)
            .send()
            .map_err(|source| FetchError::Transport {
                url: url.clone(),
                source,
            })?;

        let status = res.status();
        let body = res
            .text()
            .map_err(|source| FetchError::Transport { url, source })?;

        if !status.is_success() {
            log::warn!(
                "Search for {} returned {}: {}",
                range.day_str(),
                status,
                body.trim()
            );
            return Ok(Vec::new());
        }

        match decode_records(&body) {
            Ok(records) => {
                log::debug!("{} records for {}", records.len(), range.day_str());
                Ok(records)
            }
            Err(e) => {
                log::warn!("Could not decode search result for {}: {}", range.day_str(), e);
                Ok(Vec::new())
            }
        }
    }
}

/// `stocks:>30+created:>=DAY+created:<NEXT`, the half-open day filter.
pub fn search_query(range: &DayRange) -> String {
    format!(
        "stocks:>{}+created:>={}+created:<{}",
        MIN_STOCKS,
        range.day_str(),
        range.next_day_str()
    )
}

/// Decode a response body into records; the body must be a JSON array.
pub fn decode_records(body: &str) -> Result<Vec<ArticleRecord>, serde_json::Error> {
    serde_json::from_str(body)
}
