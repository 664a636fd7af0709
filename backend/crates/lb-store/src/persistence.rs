//! Whole-document persistence for [`StoreState`].
//!
//! Every write replaces the full file:
//! 1. Serialize to pretty JSON
//! 2. Write a temp sibling and fsync it
//! 3. Atomically rename over the target
//!
//! A crash mid-write leaves either the old or the new document, never a torn one.

use crate::{Result as StoreResult, StoreError, StoreState};

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tokio::fs;
use tokio::io::AsyncWriteExt;

/// Create the directory that will hold the store file.
pub async fn ensure_parent_dir(path: &Path) -> StoreResult<()> {
    if let Some(dir) = path.parent()
        && !dir.as_os_str().is_empty()
    {
        fs::create_dir_all(dir).await.map_err(|e| {
            StoreError::initialization(
                path.to_path_buf(),
                format!("failed to create directory {}: {e}", dir.display()),
            )
        })?;
    }
    Ok(())
}

/// Read the document at `path`.
///
/// Returns `Ok(None)` when no file exists yet. Unreadable, unparseable or
/// structurally inconsistent documents are initialization errors.
pub async fn read_state(path: &Path) -> StoreResult<Option<StoreState>> {
    let contents = match fs::read_to_string(path).await {
        Ok(contents) => contents,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
        Err(e) => {
            return Err(StoreError::initialization(
                path.to_path_buf(),
                format!("failed to read store file: {e}"),
            ));
        }
    };

    let state: StoreState = serde_json::from_str(&contents).map_err(|e| {
        StoreError::initialization(path.to_path_buf(), format!("store file is corrupt: {e}"))
    })?;

    if let Some(violation) = state.integrity_violation() {
        return Err(StoreError::initialization(
            path.to_path_buf(),
            format!("store file is inconsistent: {violation}"),
        ));
    }

    Ok(Some(state))
}

/// Replace the document at `path` with `state` using write-then-rename.
///
/// The temp sibling is removed on every failure after it was created.
pub async fn write_state(path: &Path, state: &StoreState) -> StoreResult<()> {
    let json = serde_json::to_string_pretty(state)?;
    let temp_path = temp_path_for(path);

    let file = fs::File::create(&temp_path)
        .await
        .map_err(|e| StoreError::persistence(temp_path.clone(), e))?;

    if let Err(e) = write_and_sync(file, json.as_bytes()).await {
        let _ = fs::remove_file(&temp_path).await;
        return Err(StoreError::persistence(temp_path, e));
    }

    if let Err(e) = fs::rename(&temp_path, path).await {
        let _ = fs::remove_file(&temp_path).await;
        return Err(StoreError::persistence(path.to_path_buf(), e));
    }

    Ok(())
}

async fn write_and_sync(mut file: fs::File, bytes: &[u8]) -> std::io::Result<()> {
    file.write_all(bytes).await?;
    file.sync_all().await
}

fn temp_path_for(path: &Path) -> PathBuf {
    let file_name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| String::from("store.json"));

    path.with_file_name(format!("{file_name}.tmp.{}", std::process::id()))
}
