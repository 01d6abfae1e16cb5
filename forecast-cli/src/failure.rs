//! Turns whatever stopped a run into the line shown to the user.

use forecast_core::{CoverageError, ExtractError, ValidationError};

pub fn describe_failure(err: &anyhow::Error) -> String {
    if let Some(e) = err.downcast_ref::<ValidationError>() {
        return e.to_string();
    }
    if let Some(e) = err.downcast_ref::<ExtractError>() {
        return describe_extract(e);
    }
    if let Some(e) = err.downcast_ref::<CoverageError>() {
        return format!("Error: {e}");
    }
    format!("Error: {err:#}")
}

fn describe_extract(err: &ExtractError) -> String {
    match err {
        ExtractError::KeyFile { path, source } => format!(
            "Error: Could not read the API key from '{}' ({source}). \
             Put your key in that file or pass --key-file <PATH>.",
            path.display()
        ),
        ExtractError::EmptyKey { path } => format!(
            "Error: The API key file '{}' is empty. \
             Put your key in that file or pass --key-file <PATH>.",
            path.display()
        ),
        ExtractError::Status { status, .. } if matches!(status.as_u16(), 401 | 403) => format!(
            "Error: The forecast API rejected the API key (status {status}). Check your key file."
        ),
        ExtractError::Status { status, body } => {
            format!("Error: The forecast API answered with status {status}: {body}")
        }
        ExtractError::Request { url, source } => {
            format!("Error: Could not reach the forecast API at {url}: {source}")
        }
        ExtractError::Decode(source) => {
            format!("Error: The forecast API returned an unexpected response: {source}")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Context;
    use std::path::PathBuf;

    #[test]
    fn validation_errors_are_shown_verbatim() {
        let err = anyhow::Error::from(ValidationError::CountryFormat {
            value: "mali".into(),
        });

        assert_eq!(
            describe_failure(&err),
            "Error: Country 'mali' must start with a capital letter and contain only alphabetic characters"
        );
    }

    #[test]
    fn missing_key_file_gets_a_hint() {
        let err = anyhow::Error::from(ExtractError::KeyFile {
            path: PathBuf::from("../key.txt"),
            source: std::io::Error::from(std::io::ErrorKind::NotFound),
        });

        let msg = describe_failure(&err);
        assert!(msg.contains("'../key.txt'"));
        assert!(msg.contains("--key-file"));
    }

    #[test]
    fn empty_dataset_is_reported() {
        let err = anyhow::Error::from(CoverageError::EmptyDataset);
        assert!(describe_failure(&err).contains("no forecast records"));
    }

    #[test]
    fn decode_error_mentions_unexpected_response() {
        let source = serde_json_error();
        let err = anyhow::Error::from(ExtractError::Decode(source));

        assert!(describe_failure(&err).contains("unexpected response"));
    }

    #[test]
    fn other_errors_show_the_whole_chain() {
        let err = Err::<(), _>(std::io::Error::other("disk full"))
            .context("Failed to write dataset file 'data/x.json'")
            .unwrap_err();

        assert_eq!(
            describe_failure(&err),
            "Error: Failed to write dataset file 'data/x.json': disk full"
        );
    }

    fn serde_json_error() -> serde_json::Error {
        serde_json::from_str::<serde_json::Value>("{").unwrap_err()
    }
}
