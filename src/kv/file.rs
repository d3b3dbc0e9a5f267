//! Directory-backed key-value store, one file per key.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use log::debug;
use tokio::fs;

use super::KeyValueStore;
use crate::error::StoreError;

/// Stores each key as a file under `base_path`.
///
/// Each key maps to `kv-<hex of the key bytes>`, so distinct keys never
/// share a file and no key can name `.` or `..`.
#[derive(Debug, Clone)]
pub struct FileStore {
    base_path: PathBuf,
}

impl FileStore {
    /// Create a FileStore rooted at `base_path`, creating the directory.
    pub async fn open(base_path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let base_path = base_path.as_ref().to_path_buf();
        fs::create_dir_all(&base_path).await?;
        debug!("FileStore opened at {}", base_path.display());
        Ok(Self { base_path })
    }

    pub fn base_path(&self) -> &Path {
        &self.base_path
    }

    /// Get the file path for a key.
    fn key_path(&self, key: &str) -> PathBuf {
        self.base_path.join(file_name_for(key))
    }
}

const KEY_FILE_PREFIX: &str = "kv-";
const TMP_SUFFIX: &str = ".tmp";

fn file_name_for(key: &str) -> String {
    format!("{}{}", KEY_FILE_PREFIX, hex::encode(key.as_bytes()))
}

#[async_trait]
impl KeyValueStore for FileStore {
    async fn get_item(&self, key: &str) -> Result<Option<String>, StoreError> {
        match fs::read_to_string(self.key_path(key)).await {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    async fn set_item(&self, key: &str, value: &str) -> Result<(), StoreError> {
        let path = self.key_path(key);
        let tmp = self.base_path.join(format!("{}{}", file_name_for(key), TMP_SUFFIX));

        // Write then rename so readers never see a half-written value
        fs::write(&tmp, value).await?;
        fs::rename(&tmp, &path).await?;
        Ok(())
    }

    async fn remove_item(&self, key: &str) -> Result<(), StoreError> {
        match fs::remove_file(self.key_path(key)).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}
