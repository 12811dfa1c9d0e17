use async_trait::async_trait;

use crate::domain::hotel::SearchResult;
use crate::domain::search_query::SearchQuery;
use crate::error::Result;

/// Network collaborator that answers a hotel search.
#[async_trait]
pub trait HotelSearchClient: Send + Sync {
    async fn search(&self, query: &SearchQuery) -> Result<SearchResult>;
}
