//! Path helpers shared by the JSON and config storage code

use crate::error::StorageError;
use std::path::Path;

pub(crate) fn display_path(path: &Path) -> String {
    path.to_string_lossy().to_string()
}

/// Ensure the parent directory of `path` exists, creating it if necessary
pub async fn ensure_parent_exists<P: AsRef<Path>>(path: P) -> Result<(), StorageError> {
    let path = path.as_ref();
    let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) else {
        return Ok(());
    };

    if !parent.is_dir() {
        log::debug!("creating directory {}", parent.display());
        tokio::fs::create_dir_all(parent)
            .await
            .map_err(|source| StorageError::FileIo {
                path: display_path(parent),
                source,
            })?;
    }
    Ok(())
}
