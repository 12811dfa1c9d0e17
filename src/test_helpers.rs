use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use tokio::sync::Notify;

use crate::domain::hotel::{Hotel, SearchResult};
use crate::domain::search_query::SearchQuery;
use crate::error::Result;
use crate::ports::hotel_search_client::HotelSearchClient;

type SearchFn = Box<dyn Fn(&SearchQuery) -> Result<SearchResult> + Send + Sync>;

pub struct MockSearchClient {
    search_fn: Mutex<SearchFn>,
    calls: Arc<Mutex<Vec<SearchQuery>>>,
    gate: Option<Arc<Notify>>,
}

impl Default for MockSearchClient {
    fn default() -> Self {
        Self::new()
    }
}

impl MockSearchClient {
    pub fn new() -> Self {
        Self {
            search_fn: Mutex::new(Box::new(|_| Ok(make_search_result(vec![])))),
            calls: Arc::new(Mutex::new(Vec::new())),
            gate: None,
        }
    }

    #[must_use]
    pub fn with_search(
        self,
        f: impl Fn(&SearchQuery) -> Result<SearchResult> + Send + Sync + 'static,
    ) -> Self {
        *self.search_fn.lock().unwrap() = Box::new(f);
        self
    }

    /// Hold every search until the gate is notified.
    #[must_use]
    pub fn with_gate(mut self, gate: Arc<Notify>) -> Self {
        self.gate = Some(gate);
        self
    }

    /// Queries received so far, shared with the mock.
    pub fn calls(&self) -> Arc<Mutex<Vec<SearchQuery>>> {
        Arc::clone(&self.calls)
    }
}

#[async_trait]
impl HotelSearchClient for MockSearchClient {
    async fn search(&self, query: &SearchQuery) -> Result<SearchResult> {
        self.calls.lock().unwrap().push(query.clone());
        if let Some(ref gate) = self.gate {
            gate.notified().await;
        }
        let f = self.search_fn.lock().unwrap();
        f(query)
    }
}

pub fn make_hotel(id: &str, name: &str, price: f64) -> Hotel {
    Hotel {
        hotel_id: id.to_string(),
        name: name.to_string(),
        price,
        city: "Mumbai".to_string(),
    }
}

pub fn make_search_result(hotels: Vec<Hotel>) -> SearchResult {
    SearchResult {
        hotels,
        diagnostics: None,
    }
}
