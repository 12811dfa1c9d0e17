use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use tracing::{debug, trace, warn};
use url::Url;

use crate::adapters::http::response::decode_search_response;
use crate::config::types::ApiConfig;
use crate::domain::hotel::SearchResult;
use crate::domain::search_query::SearchQuery;
use crate::error::{HotelSearchError, Result};
use crate::ports::hotel_search_client::HotelSearchClient;

/// Posts search queries as JSON to the configured search endpoint.
pub struct HttpSearchClient {
    http: Client,
    endpoint: Url,
}

impl HttpSearchClient {
    pub fn new(config: &ApiConfig) -> Result<Self> {
        let endpoint = config.search_url()?;
        let http = Client::builder()
            .user_agent(&config.user_agent)
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()?;

        Ok(Self { http, endpoint })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

#[async_trait]
impl HotelSearchClient for HttpSearchClient {
    async fn search(&self, query: &SearchQuery) -> Result<SearchResult> {
        debug!(
            url = %self.endpoint,
            city = %query.city,
            check_in = %query.check_in,
            check_out = %query.check_out,
            "Searching hotels"
        );

        let response = self
            .http
            .post(self.endpoint.clone())
            .header("Accept", "application/json")
            .json(query)
            .send()
            .await
            .map_err(|e| {
                warn!(error = %e, "Search request failed");
                HotelSearchError::Network(e)
            })?;

        let status = response.status();
        let body = response.text().await.map_err(HotelSearchError::Network)?;
        debug!(status = status.as_u16(), body_len = body.len(), "Search response received");
        trace!(body = %body, "Search raw response");

        let decoded = decode_search_response(status.as_u16(), &body);
        if let Err(ref e) = decoded {
            warn!(error = %e, status = status.as_u16(), "Search response rejected");
        }
        decoded
    }
}
