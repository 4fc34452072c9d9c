//! Reading of JSON catalogs.

use std::fs;
use std::path::Path;

use serde::de::DeserializeOwned;

use crate::error::{Error, Result};

/// Read and deserialize a JSON document
///
/// The existence check comes first so that a missing catalog is reported as such
/// and not as a generic I/O failure.
pub fn read_json_file<T: DeserializeOwned, P: AsRef<Path>>(file_path: P) -> Result<T> {
    let path = file_path.as_ref();
    if !path.exists() {
        return Err(Error::MissingInput(path.to_path_buf()));
    }
    let content = fs::read_to_string(path).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_json(path, &content)
}

/// Deserialize a JSON document already held in memory, `path` is used for diagnostics only
pub fn parse_json<T: DeserializeOwned, P: AsRef<Path>>(path: P, content: &str) -> Result<T> {
    serde_json::from_str(content).map_err(|source| Error::Json {
        path: path.as_ref().to_path_buf(),
        source,
    })
}
