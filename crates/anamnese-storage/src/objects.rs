//! Keyed objects on the local filesystem.
//!
//! Keys are relative, `/`-separated paths (see
//! [`anamnese_core::draft_keys`]) resolved against a root directory.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::error::StorageError;

pub fn object_path(root: &Path, key: &str) -> PathBuf {
    key.split('/').fold(root.to_path_buf(), |path, part| path.join(part))
}

/// Read an object's bytes.
pub fn get_object(root: &Path, key: &str) -> Result<Vec<u8>, StorageError> {
    let path = object_path(root, key);
    std::fs::read(&path).map_err(|e| {
        if e.kind() == ErrorKind::NotFound {
            StorageError::NotFound {
                key: key.to_string(),
            }
        } else {
            StorageError::io(path, e)
        }
    })
}

/// Write an object, creating parent directories as needed. The body goes to
/// `tmp_key` first and is renamed over `key`, so readers never see a partial
/// write. Returns the final path.
pub fn put_object(
    root: &Path,
    key: &str,
    tmp_key: &str,
    body: &[u8],
) -> Result<PathBuf, StorageError> {
    let path = object_path(root, key);
    let tmp_path = object_path(root, tmp_key);

    if let Some(dir) = path.parent() {
        std::fs::create_dir_all(dir).map_err(|e| StorageError::io(dir, e))?;
    }
    std::fs::write(&tmp_path, body).map_err(|e| StorageError::io(&tmp_path, e))?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        std::fs::set_permissions(&tmp_path, std::fs::Permissions::from_mode(0o600))
            .map_err(|e| StorageError::io(&tmp_path, e))?;
    }

    std::fs::rename(&tmp_path, &path).map_err(|e| StorageError::io(&path, e))?;
    tracing::debug!(path = %path.display(), bytes = body.len(), "object written");
    Ok(path)
}

/// Delete an object. Returns whether anything was removed.
pub fn delete_object(root: &Path, key: &str) -> Result<bool, StorageError> {
    let path = object_path(root, key);
    match std::fs::remove_file(&path) {
        Ok(()) => Ok(true),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(false),
        Err(e) => Err(StorageError::io(path, e)),
    }
}
