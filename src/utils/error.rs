use thiserror::Error;

#[derive(Error, Debug)]
pub enum DexError {
    #[error("Request failed: {body}")]
    RequestError { body: String },

    #[error("HTTP transport error: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("Malformed record: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Render error: {message}")]
    RenderError { message: String },

    #[error("Invalid value for {field}: '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

impl DexError {
    pub fn user_friendly_message(&self) -> String {
        match self {
            DexError::RequestError { body } => {
                format!("The record service rejected the request: {}", body)
            }
            DexError::HttpError(_) => "Could not reach the record service".to_string(),
            DexError::SerializationError(_) => {
                "The record service returned data in an unexpected shape".to_string()
            }
            DexError::RenderError { message } => format!("Record cannot be displayed: {}", message),
            DexError::InvalidConfigValueError { field, reason, .. } => {
                format!("Configuration problem with '{}': {}", field, reason)
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, DexError>;
