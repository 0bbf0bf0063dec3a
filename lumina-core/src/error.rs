use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum LuminaError {
    #[error("config error: {0}")]
    Config(String),

    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("toml parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("wallpaper not found: {0}")]
    WallpaperNotFound(String),

    #[error("file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("invalid path: {0}")]
    InvalidPath(PathBuf),
}

pub type Result<T> = std::result::Result<T, LuminaError>;
