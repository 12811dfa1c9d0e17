pub mod hotel;
pub mod request_state;
pub mod search_query;
