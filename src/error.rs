//! Error types for project operations

use thiserror::Error;

pub type Result<T> = std::result::Result<T, ForgeError>;

#[derive(Debug, Error)]
pub enum ForgeError {
    #[error("Invalid project id: {0}. Use lowercase letters, numbers, and hyphens only.")]
    InvalidIdentifier(String),

    #[error("Invalid project name: {0}")]
    InvalidName(String),

    #[error("Project already exists: {0}")]
    AlreadyExists(String),

    #[error("Project not found: {0}")]
    NotFound(String),

    #[error("Invalid project metadata: {0}")]
    InvalidMetadata(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
