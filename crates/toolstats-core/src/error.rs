use thiserror::Error;

use crate::category::Category;

#[derive(Debug, Error)]
pub enum Error {
    #[error("No configuration entry for category {0}")]
    MissingCategory(Category),

    #[error("Invalid material: {0}")]
    InvalidMaterial(String),

    #[error("Config parse error: {0}")]
    ConfigParseError(String),

    #[error("Item parse error: {0}")]
    ItemParseError(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

impl From<toml::de::Error> for Error {
    fn from(e: toml::de::Error) -> Self {
        Error::ConfigParseError(e.message().to_string())
    }
}
