use crate::{Config, Dataset, Request, error::ExtractError, provider::http::HttpForecastProvider};
use async_trait::async_trait;
use std::{fmt::Debug, fs, path::Path};
use tracing::debug;

pub mod http;

/// Source of forecast records for a validated request.
#[async_trait]
pub trait ForecastProvider: Send + Sync + Debug {
    async fn fetch_forecasts(&self, request: &Request) -> Result<Dataset, ExtractError>;
}

/// Read the API key from `path`, ignoring surrounding whitespace.
pub fn read_api_key(path: &Path) -> Result<String, ExtractError> {
    let contents = fs::read_to_string(path).map_err(|source| ExtractError::KeyFile {
        path: path.to_owned(),
        source,
    })?;

    let key = contents.trim();
    if key.is_empty() {
        return Err(ExtractError::EmptyKey {
            path: path.to_owned(),
        });
    }
    Ok(key.to_owned())
}

/// Construct the HTTP provider from config.
pub fn provider_from_config(config: &Config) -> Result<Box<dyn ForecastProvider>, ExtractError> {
    let key_file = config.key_file();
    debug!(key_file = %key_file.display(), base_url = config.base_url(), "building provider");

    let api_key = read_api_key(&key_file)?;
    Ok(Box::new(HttpForecastProvider::new(
        config.base_url().to_owned(),
        api_key,
    )))
}
