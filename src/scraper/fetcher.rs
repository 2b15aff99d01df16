use crate::model::ScrapeError;
use crate::scraper::traits::Fetcher;
use reqwest::Client;

/// Plain HTTP fetcher: one GET, configured user-agent, no retry and no
/// pagination.
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn new(user_agent: &str) -> Result<Self, ScrapeError> {
        let client = Client::builder()
            .user_agent(user_agent)
            .build()
            .map_err(|e| ScrapeError::Http(e.to_string()))?;

        Ok(Self { client })
    }
}

#[async_trait::async_trait]
impl Fetcher for HttpFetcher {
    async fn fetch(&self, url: &str) -> Result<String, ScrapeError> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| ScrapeError::Http(e.to_string()))?;

        if !response.status().is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ScrapeError::InvalidResponse(body));
        }

        response
            .text()
            .await
            .map_err(|e| ScrapeError::Http(e.to_string()))
    }
}
