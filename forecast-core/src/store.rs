use std::{
    fs,
    path::{Path, PathBuf},
};

use tracing::info;

use crate::{
    error::StoreError,
    model::{Dataset, Request},
};

/// File name a dataset for `request` is stored under.
pub fn dataset_file_name(request: &Request) -> String {
    format!(
        "{}_{}_{}.json",
        request.country(),
        request.start().format("%Y-%m-%d"),
        request.end().format("%Y-%m-%d"),
    )
}

/// Write `dataset` as pretty JSON into `dir`, replacing an earlier run for
/// the same request. Returns the written path.
pub fn store_dataset(
    dir: &Path,
    request: &Request,
    dataset: &Dataset,
) -> Result<PathBuf, StoreError> {
    fs::create_dir_all(dir).map_err(|e| StoreError::CreateDir(dir.to_owned(), e))?;

    let path = dir.join(dataset_file_name(request));
    let json =
        serde_json::to_string_pretty(dataset).map_err(|e| StoreError::Serialize(path.clone(), e))?;
    fs::write(&path, json).map_err(|e| StoreError::Write(path.clone(), e))?;

    info!(path = %path.display(), records = dataset.len(), "stored dataset");
    Ok(path)
}
