use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use tracing::{debug, info};

use crate::{
    error::ExtractError,
    model::{Dataset, ForecastRecord, Request},
};

use super::ForecastProvider;

#[derive(Debug, Clone)]
pub struct HttpForecastProvider {
    base_url: String,
    api_key: String,
    http: Client,
}

impl HttpForecastProvider {
    pub fn new(base_url: String, api_key: String) -> Self {
        Self {
            base_url,
            api_key,
            http: Client::new(),
        }
    }

    fn forecasts_url(&self) -> String {
        format!("{}/forecasts", self.base_url.trim_end_matches('/'))
    }
}

/// The API answers either with a bare list or with the list under
/// `forecasts`.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum ForecastResponse {
    Bare(Vec<ForecastRecord>),
    Wrapped { forecasts: Vec<ForecastRecord> },
}

impl From<ForecastResponse> for Dataset {
    fn from(response: ForecastResponse) -> Self {
        match response {
            ForecastResponse::Bare(records) | ForecastResponse::Wrapped { forecasts: records } => {
                Dataset::new(records)
            }
        }
    }
}

#[async_trait]
impl ForecastProvider for HttpForecastProvider {
    async fn fetch_forecasts(&self, request: &Request) -> Result<Dataset, ExtractError> {
        let url = self.forecasts_url();
        let start = request.start().format("%Y-%m-%d").to_string();
        let end = request.end().format("%Y-%m-%d").to_string();

        debug!(%url, country = request.country(), %start, %end, "requesting forecasts");

        let res = self
            .http
            .get(&url)
            .query(&[
                ("country", request.country()),
                ("start", start.as_str()),
                ("end", end.as_str()),
                ("key", self.api_key.as_str()),
            ])
            .send()
            .await
            .map_err(|source| ExtractError::Request {
                url: url.clone(),
                source: source.without_url(),
            })?;

        let status = res.status();
        let body = res
            .text()
            .await
            .map_err(|source| ExtractError::Request {
                url: url.clone(),
                source: source.without_url(),
            })?;

        if !status.is_success() {
            return Err(ExtractError::Status {
                status,
                body: truncate_body(&body),
            });
        }

        let parsed: ForecastResponse = serde_json::from_str(&body).map_err(ExtractError::Decode)?;
        let dataset = Dataset::from(parsed);

        info!(records = dataset.len(), country = request.country(), "received forecasts");
        Ok(dataset)
    }
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    match body.char_indices().nth(MAX) {
        Some((cut, _)) => format!("{}...", &body[..cut]),
        None => body.to_string(),
    }
}
