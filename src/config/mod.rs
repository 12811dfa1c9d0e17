pub mod types;

use std::io::ErrorKind;
use std::path::Path;

use crate::error::{HotelSearchError, Result};
use types::Config;

/// Read the YAML config at `path`.
///
/// A missing file yields the defaults. A file that parses but names an
/// unusable endpoint or a zero timeout is rejected here rather than on the
/// first search.
pub fn load_config(path: &Path) -> Result<Config> {
    let content = match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            tracing::info!(path = %path.display(), "No config file, using defaults");
            return Ok(Config::default());
        }
        Err(e) => {
            return Err(HotelSearchError::Config(format!(
                "cannot read {}: {e}",
                path.display()
            )));
        }
    };

    let config: Config = serde_yml::from_str(&content)?;
    validate(&config).map_err(|reason| {
        HotelSearchError::Config(format!("{}: {reason}", path.display()))
    })?;
    tracing::debug!(path = %path.display(), base_url = %config.api.base_url, "Config loaded");
    Ok(config)
}

fn validate(config: &Config) -> std::result::Result<(), String> {
    if config.api.request_timeout_secs == 0 {
        return Err("api.request_timeout_secs must be greater than zero".into());
    }
    config
        .api
        .search_url()
        .map_err(|e| format!("api.base_url/search_path do not form a URL: {e}"))?;
    Ok(())
}
