use std::path::PathBuf;

use crate::error::{LuminaError, Result};

#[derive(Debug, Clone)]
pub struct LuminaPaths {
    pub config_dir: PathBuf,
    pub data_dir: PathBuf,
}

impl LuminaPaths {
    pub fn new() -> Result<Self> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| LuminaError::Config("cannot resolve XDG config dir".into()))?
            .join("lumina");

        let data_dir = dirs::data_dir()
            .ok_or_else(|| LuminaError::Config("cannot resolve XDG data dir".into()))?
            .join("lumina");

        Ok(Self {
            config_dir,
            data_dir,
        })
    }

    pub fn config_file(&self) -> PathBuf {
        self.config_dir.join("config.toml")
    }

    pub fn db_path(&self) -> PathBuf {
        self.data_dir.join("lumina.db")
    }

    pub fn ensure_dirs(&self) -> Result<()> {
        for dir in [&self.config_dir, &self.data_dir] {
            std::fs::create_dir_all(dir)?;
        }
        Ok(())
    }
}
