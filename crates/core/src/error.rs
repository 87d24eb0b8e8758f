//! Error types for EmuSAK

use thiserror::Error;

#[derive(Error, Debug)]
pub enum EmusakError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("XML parse error: {0}")]
    Xml(#[from] quick_xml::Error),

    #[error("Title database error: {0}")]
    TitleDatabase(String),
}

impl EmusakError {
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    pub fn title_database(msg: impl Into<String>) -> Self {
        Self::TitleDatabase(msg.into())
    }
}

pub type Result<T> = std::result::Result<T, EmusakError>;
