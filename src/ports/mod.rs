pub mod hotel_search_client;
