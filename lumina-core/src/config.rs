use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::{LuminaError, Result};
use crate::paths::LuminaPaths;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub gallery: GalleryConfig,
    pub storage: StorageConfig,
}

impl Config {
    pub fn load(paths: &LuminaPaths) -> Result<Self> {
        let path = paths.config_file();
        let content = std::fs::read_to_string(&path)
            .map_err(|e| LuminaError::Config(format!("failed to read {}: {e}", path.display())))?;
        let config: Self = toml::from_str(&content)?;
        Ok(config)
    }

    pub fn load_or_default(paths: &LuminaPaths) -> Self {
        Self::load(paths).unwrap_or_default()
    }

    pub fn save(&self, paths: &LuminaPaths) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| LuminaError::Config(format!("failed to serialize config: {e}")))?;
        let path = paths.config_file();
        std::fs::write(&path, content)
            .map_err(|e| LuminaError::Config(format!("failed to write {}: {e}", path.display())))
    }

    /// Database file, honoring `storage.db_path`.
    pub fn db_path(&self, paths: &LuminaPaths) -> PathBuf {
        self.storage
            .db_path
            .clone()
            .unwrap_or_else(|| paths.db_path())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GalleryConfig {
    pub page_size: usize,
    pub tags_shown: usize,
}

impl GalleryConfig {
    pub fn page_size(&self) -> usize {
        self.page_size.max(1)
    }
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self {
            page_size: 20,
            tags_shown: 2,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    pub db_path: Option<PathBuf>,
}
