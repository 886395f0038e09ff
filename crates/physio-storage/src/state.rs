use std::path::Path;

use serde::{Serialize, de::DeserializeOwned};

use crate::error::StorageError;
use crate::objects;

/// Load a JSON record. `None` when the key does not exist.
pub async fn load_json<T: DeserializeOwned>(
    root: &Path,
    key: &str,
) -> Result<Option<T>, StorageError> {
    let Some(body) = objects::get_object_opt(root, key).await? else {
        return Ok(None);
    };
    let value: T = serde_json::from_slice(&body)?;
    Ok(Some(value))
}

/// Load every JSON record under a prefix.
pub async fn load_all_json<T: DeserializeOwned>(
    root: &Path,
    prefix: &str,
) -> Result<Vec<T>, StorageError> {
    let keys = objects::list_objects(root, prefix).await?;
    let mut values = Vec::with_capacity(keys.len());
    for key in &keys {
        let body = objects::get_object(root, key).await?;
        values.push(serde_json::from_slice(&body)?);
    }
    Ok(values)
}

/// Save a JSON record, replacing any existing one.
pub async fn save_json<T: Serialize>(
    root: &Path,
    key: &str,
    value: &T,
) -> Result<(), StorageError> {
    let body = serde_json::to_vec_pretty(value)?;
    objects::put_object(root, key, body).await
}

/// Save a JSON record that must not already exist.
pub async fn create_json<T: Serialize>(
    root: &Path,
    key: &str,
    value: &T,
) -> Result<(), StorageError> {
    let body = serde_json::to_vec_pretty(value)?;
    objects::put_object_if_absent(root, key, body).await
}
