use std::sync::{Arc, Mutex, PoisonError};

use tokio::sync::watch;
use tracing::{debug, info, warn};

use crate::domain::request_state::RequestState;
use crate::domain::search_query::{FormField, SearchForm, SearchQuery, SubmitRejected};
use crate::error::FALLBACK_MESSAGE;
use crate::ports::hotel_search_client::HotelSearchClient;

/// Owns the form fields and the request lifecycle.
///
/// All state changes go through [`update_field`](Self::update_field) and
/// [`submit`](Self::submit). Observers follow the lifecycle through
/// [`subscribe`](Self::subscribe).
pub struct SearchController {
    client: Arc<dyn HotelSearchClient>,
    form: Mutex<SearchForm>,
    state: watch::Sender<RequestState>,
}

impl SearchController {
    pub fn new(client: Arc<dyn HotelSearchClient>) -> Self {
        let (state, _) = watch::channel(RequestState::Idle);
        Self {
            client,
            form: Mutex::new(SearchForm::default()),
            state,
        }
    }

    pub fn update_field(&self, field: FormField, value: impl Into<String>) {
        self.form
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .set(field, value);
    }

    pub fn form(&self) -> SearchForm {
        self.form
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn state(&self) -> RequestState {
        self.state.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<RequestState> {
        self.state.subscribe()
    }

    /// Run one search with the current field values.
    ///
    /// The state is `Loading` before the client is called and settles exactly
    /// once. A rejected submission leaves the state untouched.
    pub async fn submit(&self) -> Result<RequestState, SubmitRejected> {
        let query = self.begin()?;
        let mut guard = SettleGuard::new(&self.state);

        let next = match self.client.search(&query).await {
            Ok(result) => {
                info!(city = %query.city, hotels = result.hotels.len(), "Search succeeded");
                RequestState::Success(result)
            }
            Err(e) => {
                warn!(city = %query.city, error = %e, "Search failed");
                RequestState::Error(e.user_message())
            }
        };

        guard.settle(next.clone());
        Ok(next)
    }

    /// Validates the form and moves to `Loading` in one step, so two callers
    /// cannot both start a request.
    fn begin(&self) -> Result<SearchQuery, SubmitRejected> {
        let query = self.form().to_query()?;

        let started = self.state.send_if_modified(|state| {
            if state.is_loading() {
                return false;
            }
            *state = RequestState::Loading;
            true
        });
        if !started {
            debug!("Submission ignored, a search is already in progress");
            return Err(SubmitRejected::AlreadyLoading);
        }

        Ok(query)
    }
}

/// Settles the state if a submission is dropped while still `Loading`, so
/// the form stays resubmittable.
struct SettleGuard<'a> {
    state: &'a watch::Sender<RequestState>,
    settled: bool,
}

impl<'a> SettleGuard<'a> {
    fn new(state: &'a watch::Sender<RequestState>) -> Self {
        Self {
            state,
            settled: false,
        }
    }

    fn settle(&mut self, next: RequestState) {
        self.state.send_replace(next);
        self.settled = true;
    }
}

impl Drop for SettleGuard<'_> {
    fn drop(&mut self) {
        if !self.settled {
            warn!("Search dropped before it settled");
            self.state
                .send_replace(RequestState::Error(FALLBACK_MESSAGE.to_string()));
        }
    }
}
