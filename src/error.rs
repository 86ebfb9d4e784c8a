use std::path::PathBuf;
use thiserror::Error;

/// Everything that can abort a conversion run
#[derive(Debug, Error)]
pub enum ConvertError {
    #[error("failed to load map '{}': {source}", path.display())]
    Load {
        path: PathBuf,
        #[source]
        source: tiled::Error,
    },
    #[error("layer '{0}' not found")]
    Lookup(String),
    #[error("layer '{0}' is not an object layer")]
    NotObjectLayer(String),
    #[error("input path '{}' has no file name", .0.display())]
    InvalidInput(PathBuf),
    #[error("failed to write '{}': {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to serialize output: {0}")]
    Serialize(#[from] serde_json::Error),
    #[error("failed to read config '{}': {source}", path.display())]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config '{}': {source}", path.display())]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}
