//! News headline source.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use tracing::debug;

use super::NewsSource;
use crate::core::models::RawItem;
use crate::errors::NotifyError;

const TOP_HEADLINES_URL: &str = "https://newsapi.org/v2/top-headlines";
const FETCH_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Debug, Deserialize)]
struct HeadlinesResponse {
    status: String,
    #[serde(default)]
    articles: Vec<Article>,
}

#[derive(Debug, Deserialize)]
struct Article {
    source: Option<ArticleSource>,
    title: Option<String>,
    description: Option<String>,
    url: Option<String>,
    #[serde(rename = "publishedAt")]
    published_at: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ArticleSource {
    name: Option<String>,
}

/// Fetches the current top headline from the news API.
pub struct HeadlineSource {
    client: Client,
    api_key: String,
    country: String,
}

impl HeadlineSource {
    pub fn new(api_key: String, country: String) -> Result<Self, NotifyError> {
        let client = Client::builder()
            .timeout(FETCH_TIMEOUT)
            .build()
            .map_err(|e| NotifyError::Retrieval(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            client,
            api_key,
            country,
        })
    }
}

#[async_trait]
impl NewsSource for HeadlineSource {
    async fn latest(&self) -> Result<RawItem, NotifyError> {
        debug!("Fetching top headlines for country {}", self.country);

        let response = self
            .client
            .get(TOP_HEADLINES_URL)
            .header("X-Api-Key", &self.api_key)
            .query(&[("country", self.country.as_str())])
            .send()
            .await
            .map_err(|e| NotifyError::Retrieval(format!("headline request failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            return Err(NotifyError::Retrieval(format!(
                "HTTP {status} from headline API"
            )));
        }

        let body = response
            .text()
            .await
            .map_err(|e| NotifyError::Retrieval(format!("failed to read headline body: {e}")))?;

        parse_headlines(&body)
    }
}

/// Decode a top-headlines response and lift its first article.
pub fn parse_headlines(body: &str) -> Result<RawItem, NotifyError> {
    let payload: HeadlinesResponse = serde_json::from_str(body)
        .map_err(|e| NotifyError::Retrieval(format!("failed to decode headline response: {e}")))?;

    if payload.status != "ok" {
        return Err(NotifyError::Retrieval(format!(
            "headline API returned status '{}'",
            payload.status
        )));
    }

    let article = payload
        .articles
        .into_iter()
        .next()
        .ok_or_else(|| NotifyError::Retrieval("headline API returned no articles".to_string()))?;

    Ok(RawItem {
        source_name: article.source.and_then(|s| s.name),
        title: article.title,
        body: article.description,
        url: article.url,
        published_at: article.published_at,
    })
}
