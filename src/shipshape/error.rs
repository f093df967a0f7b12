use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ShipshapeError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Pattern error: {0}")]
    Pattern(#[from] regex::Error),

    #[error("File not found: {0}")]
    FileNotFound(PathBuf),

    #[error("Database error: {0}")]
    Database(String),

    #[error("Tool error: {0}")]
    Tool(String),

    #[error("Api Error: {0}")]
    Api(String),
}

pub type Result<T> = std::result::Result<T, ShipshapeError>;
