use thiserror::Error;

#[derive(Error, Debug)]
pub enum CustomizationError {
    /// API 호출 자체가 실패한 경우 (네트워크, 저장소 오류 등)
    #[error("Customization API request failed: {0}")]
    Transport(String),

    #[error("Customization not found: {0}")]
    NotFound(String),

    #[error("Field '{field}' is not part of the {form} form")]
    UnknownField { field: String, form: String },

    #[error("Form has invalid fields: {0}")]
    InvalidForm(String),

    #[error("Bulk delete failed: {failed}/{total} deletions failed")]
    BulkDeleteFailed {
        failed: usize,
        total: usize,
        errors: Vec<String>,
    },

    #[error("A mutation is already in progress for {0}")]
    MutationInProgress(String),

    #[error("User cancelled")]
    UserCancelled,

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("JSON serialization/deserialization error: {0}")]
    JsonError(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, CustomizationError>;
