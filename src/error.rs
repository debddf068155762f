use thiserror::Error;

#[derive(Debug, Error)]
pub enum ProspectError {
    #[error("Invalid {field}: {value}")]
    InvalidValue { field: String, value: String },

    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{0}")]
    Other(String),
}

pub type ProspectResult<T> = Result<T, ProspectError>;
