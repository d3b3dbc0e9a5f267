use eyre::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use comprar::kv::{FileStore, KeyValueStore, MemoryStore, SqliteStore};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub log_level: Option<String>,
    pub storage: StorageConfig,
}

/// Which key-value backend holds the items blob
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackend {
    Memory,
    File,
    Sqlite,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    pub backend: StorageBackend,
    pub data_dir: PathBuf,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            backend: StorageBackend::File,
            data_dir: dirs::data_local_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join("comprar"),
        }
    }
}

impl StorageConfig {
    /// Open the configured backend
    pub async fn open(&self) -> Result<Box<dyn KeyValueStore>> {
        let store: Box<dyn KeyValueStore> = match self.backend {
            StorageBackend::Memory => Box::new(MemoryStore::new()),
            StorageBackend::File => Box::new(
                FileStore::open(self.data_dir.join("store"))
                    .await
                    .context("Failed to open file store")?,
            ),
            StorageBackend::Sqlite => Box::new(
                SqliteStore::open(self.data_dir.join(comprar::kv::DB_FILE_NAME))
                    .await
                    .context("Failed to open SQLite store")?,
            ),
        };
        log::info!("Opened {:?} store under {}", self.backend, self.data_dir.display());
        Ok(store)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: Some("info".to_string()),
            storage: StorageConfig::default(),
        }
    }
}

impl Config {
    /// Load configuration with fallback chain
    pub fn load(config_path: Option<&PathBuf>) -> Result<Self> {
        // If explicit config path provided, try to load it
        if let Some(path) = config_path {
            return Self::load_from_file(path).context(format!("Failed to load config from {}", path.display()));
        }

        // Try primary location: ~/.config/<project>/<project>.yml
        if let Some(config_dir) = dirs::config_dir() {
            let project_name = env!("CARGO_PKG_NAME");
            let primary_config = config_dir.join(project_name).join(format!("{}.yml", project_name));
            if primary_config.exists() {
                match Self::load_from_file(&primary_config) {
                    Ok(config) => return Ok(config),
                    Err(e) => {
                        log::warn!("Failed to load config from {}: {}", primary_config.display(), e);
                    }
                }
            }
        }

        // Try fallback location: ./<project>.yml
        let project_name = env!("CARGO_PKG_NAME");
        let fallback_config = PathBuf::from(format!("{}.yml", project_name));
        if fallback_config.exists() {
            match Self::load_from_file(&fallback_config) {
                Ok(config) => return Ok(config),
                Err(e) => {
                    log::warn!("Failed to load config from {}: {}", fallback_config.display(), e);
                }
            }
        }

        // No config file found, use defaults
        log::info!("No config file found, using defaults");
        Ok(Self::default())
    }

    fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(&path).context("Failed to read config file")?;
        let config = Self::from_yaml(&content)?;
        log::info!("Loaded config from: {}", path.as_ref().display());
        Ok(config)
    }

    fn from_yaml(content: &str) -> Result<Self> {
        serde_yaml::from_str(content).context("Failed to parse config file")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.log_level.as_deref(), Some("info"));
        assert_eq!(config.storage.backend, StorageBackend::File);
        assert!(config.storage.data_dir.ends_with("comprar"));
    }

    #[test]
    fn test_partial_yaml_keeps_defaults() {
        let config = Config::from_yaml("storage:\n  backend: sqlite\n").unwrap();
        assert_eq!(config.storage.backend, StorageBackend::Sqlite);
        assert!(config.storage.data_dir.ends_with("comprar"));
        assert_eq!(config.log_level.as_deref(), Some("info"));
    }

    #[test]
    fn test_unknown_backend_is_rejected() {
        assert!(Config::from_yaml("storage:\n  backend: redis\n").is_err());
    }

    #[test]
    fn test_load_explicit_path() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("comprar.yml");
        fs::write(
            &path,
            format!(
                "log_level: debug\nstorage:\n  backend: memory\n  data_dir: {}\n",
                temp.path().display()
            ),
        )
        .unwrap();

        let config = Config::load(Some(&path)).unwrap();
        assert_eq!(config.log_level.as_deref(), Some("debug"));
        assert_eq!(config.storage.backend, StorageBackend::Memory);
        assert_eq!(config.storage.data_dir, temp.path());
    }

    #[test]
    fn test_load_missing_explicit_path_fails() {
        let missing = PathBuf::from("/definitely/not/here/comprar.yml");
        assert!(Config::load(Some(&missing)).is_err());
    }

    #[tokio::test]
    async fn test_open_file_backend_under_data_dir() {
        let temp = TempDir::new().unwrap();
        let storage = StorageConfig {
            backend: StorageBackend::File,
            data_dir: temp.path().to_path_buf(),
        };

        let store = storage.open().await.unwrap();
        store.set_item("k", "v").await.unwrap();
        assert!(temp.path().join("store").join("kv-6b").exists());
    }

    #[tokio::test]
    async fn test_open_sqlite_backend_under_data_dir() {
        let temp = TempDir::new().unwrap();
        let storage = StorageConfig {
            backend: StorageBackend::Sqlite,
            data_dir: temp.path().to_path_buf(),
        };

        let store = storage.open().await.unwrap();
        store.set_item("k", "v").await.unwrap();
        assert!(temp.path().join(comprar::kv::DB_FILE_NAME).exists());
    }
}
