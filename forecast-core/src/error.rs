use std::path::PathBuf;

use chrono::NaiveDate;
use thiserror::Error;

/// Rejection of the command-line input. Only the first failure of a run is
/// ever produced.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error(
        "Invalid number of arguments, please provide country, start date, and end date\n\
         Usage: forecast <country> <start-date> <end-date>\n\
         Example: forecast Mali 01-10-2024 10-10-2024"
    )]
    Usage { found: usize },

    #[error("Error: Invalid date format '{value}', expected format is DD-MM-YYYY")]
    DateFormat { value: String },

    #[error("Error: Start date '{start}' is after end date '{end}'")]
    DateOrder { start: NaiveDate, end: NaiveDate },

    #[error(
        "Error: Country '{value}' must start with a capital letter \
         and contain only alphabetic characters"
    )]
    CountryFormat { value: String },
}

/// Failures of the extraction client.
#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("Failed to read API key file '{path}'")]
    KeyFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("API key file '{path}' is empty")]
    EmptyKey { path: PathBuf },

    #[error("Network request to {url} failed")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("Forecast request failed with status {status}: {body}")]
    Status {
        status: reqwest::StatusCode,
        body: String,
    },

    #[error("Failed to parse forecast response JSON")]
    Decode(#[source] serde_json::Error),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoverageError {
    #[error("The request returned no forecast records, nothing to check")]
    EmptyDataset,

    #[error("Record has an unreadable issue date '{value}'")]
    IssueDate { value: String },
}

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Failed to create output directory '{0}'")]
    CreateDir(PathBuf, #[source] std::io::Error),

    #[error("Failed to serialize dataset for '{0}'")]
    Serialize(PathBuf, #[source] serde_json::Error),

    #[error("Failed to write dataset file '{0}'")]
    Write(PathBuf, #[source] std::io::Error),
}
