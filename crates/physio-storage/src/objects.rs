//! Key-addressed objects on a local file tree.
//!
//! Keys follow `physio_core::storage_keys` and map to paths under `root`.
//! Every write goes to a temp file first and is renamed into place, so a
//! reader sees either the old object or the new one, never a partial write.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tokio::fs;
use tracing::debug;
use uuid::Uuid;

use crate::error::StorageError;

const TMP_MARKER: &str = ".tmp-";

fn object_path(root: &Path, key: &str) -> PathBuf {
    root.join(key)
}

/// Get an object's bytes.
pub async fn get_object(root: &Path, key: &str) -> Result<Vec<u8>, StorageError> {
    fs::read(object_path(root, key)).await.map_err(|e| {
        if e.kind() == ErrorKind::NotFound {
            StorageError::NotFound {
                key: key.to_string(),
            }
        } else {
            StorageError::Read {
                key: key.to_string(),
                source: e,
            }
        }
    })
}

/// Get an object's bytes, or `None` when it does not exist.
pub async fn get_object_opt(root: &Path, key: &str) -> Result<Option<Vec<u8>>, StorageError> {
    match get_object(root, key).await {
        Ok(body) => Ok(Some(body)),
        Err(StorageError::NotFound { .. }) => Ok(None),
        Err(e) => Err(e),
    }
}

/// Put an object, replacing any existing one.
pub async fn put_object(root: &Path, key: &str, body: Vec<u8>) -> Result<(), StorageError> {
    let path = object_path(root, key);
    let write_err = |source| StorageError::Write {
        key: key.to_string(),
        source,
    };

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).await.map_err(write_err)?;
    }

    let tmp_path = path.with_file_name(format!(
        "{}{TMP_MARKER}{}",
        path.file_name().and_then(|n| n.to_str()).unwrap_or("object"),
        Uuid::new_v4().simple()
    ));
    fs::write(&tmp_path, &body).await.map_err(write_err)?;

    if let Err(e) = fs::rename(&tmp_path, &path).await {
        let _ = fs::remove_file(&tmp_path).await;
        return Err(write_err(e));
    }

    debug!(key, bytes = body.len(), "object written");
    Ok(())
}

/// Put an object only if nothing is stored under `key` yet.
pub async fn put_object_if_absent(
    root: &Path,
    key: &str,
    body: Vec<u8>,
) -> Result<(), StorageError> {
    let exists = fs::try_exists(object_path(root, key))
        .await
        .map_err(|e| StorageError::Read {
            key: key.to_string(),
            source: e,
        })?;
    if exists {
        return Err(StorageError::AlreadyExists {
            key: key.to_string(),
        });
    }
    put_object(root, key, body).await
}

/// Delete an object.
pub async fn delete_object(root: &Path, key: &str) -> Result<(), StorageError> {
    fs::remove_file(object_path(root, key)).await.map_err(|e| {
        if e.kind() == ErrorKind::NotFound {
            StorageError::NotFound {
                key: key.to_string(),
            }
        } else {
            StorageError::Delete {
                key: key.to_string(),
                source: e,
            }
        }
    })
}

/// List object keys directly under a prefix, sorted. A missing prefix
/// directory is an empty listing.
pub async fn list_objects(root: &Path, prefix: &str) -> Result<Vec<String>, StorageError> {
    let list_err = |source| StorageError::List {
        prefix: prefix.to_string(),
        source,
    };

    let mut entries = match fs::read_dir(object_path(root, prefix)).await {
        Ok(entries) => entries,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
        Err(e) => return Err(list_err(e)),
    };

    let mut keys = Vec::new();
    while let Some(entry) = entries.next_entry().await.map_err(list_err)? {
        if !entry.file_type().await.map_err(list_err)?.is_file() {
            continue;
        }
        let Some(name) = entry.file_name().to_str().map(str::to_string) else {
            continue;
        };
        if name.contains(TMP_MARKER) {
            continue;
        }
        keys.push(format!("{prefix}{name}"));
    }

    keys.sort();
    Ok(keys)
}
