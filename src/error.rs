use thiserror::Error;

/// Message shown when a search fails and the server gave no usable reason.
pub const FALLBACK_MESSAGE: &str = "Failed to fetch hotels";

/// Message shown when a successful response carries no `result`.
pub const NO_HOTELS_MESSAGE: &str = "No hotels found.";

#[derive(Error, Debug)]
pub enum HotelSearchError {
    #[error("search endpoint returned HTTP {status}")]
    Http {
        status: u16,
        message: Option<String>,
    },

    #[error("HTTP request failed: {0}")]
    Network(#[from] reqwest::Error),

    #[error("response did not contain a result")]
    EmptyResult,

    #[error("Failed to decode search response: {reason}")]
    MalformedResponse { reason: String },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yml::Error),

    #[error("URL parse error: {0}")]
    Url(#[from] url::ParseError),
}

impl HotelSearchError {
    /// The single string a failed submission surfaces to the user.
    pub fn user_message(&self) -> String {
        match self {
            Self::EmptyResult => NO_HOTELS_MESSAGE.to_string(),
            Self::Http {
                message: Some(message),
                ..
            } => message.clone(),
            _ => FALLBACK_MESSAGE.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, HotelSearchError>;
