use std::collections::HashSet;

use serde::Deserialize;
use serde_json::Value;

use crate::domain::hotel::{Diagnostics, Hotel, SearchResult};
use crate::error::{HotelSearchError, Result};

#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: Option<String>,
}

/// Decode the body of a search response with the given HTTP status.
///
/// A 2xx body without a usable `result` is an [`HotelSearchError::EmptyResult`]
/// whatever else it contains. Any other status becomes
/// [`HotelSearchError::Http`], carrying the server's `message` when present.
pub fn decode_search_response(status: u16, body: &str) -> Result<SearchResult> {
    if !(200..300).contains(&status) {
        return Err(HotelSearchError::Http {
            status,
            message: extract_error_message(body),
        });
    }

    if body.trim().is_empty() {
        return Err(HotelSearchError::EmptyResult);
    }

    let json: Value = serde_json::from_str(body).map_err(|e| malformed(format!("invalid JSON: {e}")))?;
    let Some(object) = json.as_object() else {
        return Err(HotelSearchError::EmptyResult);
    };

    let hotels = match object.get("result") {
        None | Some(Value::Null) => return Err(HotelSearchError::EmptyResult),
        Some(result) => parse_hotels(result)?,
    };

    let diagnostics = match object.get("diagnostics") {
        None | Some(Value::Null) => None,
        Some(value) => Some(
            Diagnostics::deserialize(value)
                .map_err(|e| malformed(format!("invalid diagnostics: {e}")))?,
        ),
    };

    Ok(SearchResult {
        hotels,
        diagnostics,
    })
}

fn parse_hotels(result: &Value) -> Result<Vec<Hotel>> {
    if !result.is_array() {
        return Err(malformed("expected `result` to be a list of hotels".into()));
    }
    let hotels =
        Vec::<Hotel>::deserialize(result).map_err(|e| malformed(format!("invalid hotel: {e}")))?;

    let mut seen = HashSet::with_capacity(hotels.len());
    for hotel in &hotels {
        if !hotel.price.is_finite() || hotel.price < 0.0 {
            return Err(malformed(format!(
                "hotel {} has invalid price {}",
                hotel.hotel_id, hotel.price
            )));
        }
        if !seen.insert(hotel.hotel_id.as_str()) {
            return Err(malformed(format!("duplicate hotelId {}", hotel.hotel_id)));
        }
    }
    Ok(hotels)
}

fn extract_error_message(body: &str) -> Option<String> {
    serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|b| b.message)
        .filter(|m| !m.trim().is_empty())
}

fn malformed(reason: String) -> HotelSearchError {
    HotelSearchError::MalformedResponse { reason }
}
