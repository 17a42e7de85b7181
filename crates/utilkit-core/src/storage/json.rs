//! JSON file read/write
//!
//! Files are read as UTF-8 and written pretty-printed with 4-space indentation.
//! I/O and parse failures are returned to the caller as-is; nothing is retried.

use super::Result;
use crate::error::StorageError;
use crate::utils::file::{display_path, ensure_parent_exists};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::ser::{PrettyFormatter, Serializer};
use std::path::Path;

const INDENT: &[u8] = b"    ";

/// Read a `.json` file and deserialize it.
///
/// Use `serde_json::Value` as `T` for untyped data.
pub async fn json_read<T, P>(path: P) -> Result<T>
where
    T: DeserializeOwned,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    let content = tokio::fs::read_to_string(path)
        .await
        .map_err(|source| StorageError::FileIo {
            path: display_path(path),
            source,
        })?;

    let value = serde_json::from_str(&content).map_err(|source| StorageError::JsonParse {
        path: display_path(path),
        source,
    })?;

    log::debug!("read {} bytes of JSON from {}", content.len(), path.display());
    Ok(value)
}

/// Serialize `data` and write it to a `.json` file, replacing any existing content.
pub async fn json_write<T, P>(path: P, data: &T) -> Result<()>
where
    T: Serialize + ?Sized,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    let content = to_pretty_json(data)?;

    ensure_parent_exists(path).await?;

    tokio::fs::write(path, &content)
        .await
        .map_err(|source| StorageError::FileIo {
            path: display_path(path),
            source,
        })?;

    log::debug!("wrote {} bytes of JSON to {}", content.len(), path.display());
    Ok(())
}

/// Render a value as JSON indented with 4 spaces.
pub fn to_pretty_json<T: Serialize + ?Sized>(data: &T) -> Result<String> {
    let mut buffer = Vec::new();
    let mut serializer = Serializer::with_formatter(&mut buffer, PrettyFormatter::with_indent(INDENT));
    data.serialize(&mut serializer)
        .map_err(StorageError::JsonSerialize)?;

    // serde_json only ever emits valid UTF-8
    String::from_utf8(buffer).map_err(|e| {
        StorageError::JsonSerialize(serde::ser::Error::custom(e.to_string()))
    })
}
