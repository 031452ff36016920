//! Error types and handling for `EventAI`

use thiserror::Error;

/// Main error type for the `EventAI` library
#[derive(Error, Debug)]
pub enum EventAiError {
    /// Configuration-related errors
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// Catalog loading or parsing errors
    #[error("Catalog error: {message}")]
    Catalog { message: String },

    /// Input validation errors
    #[error("Invalid input: {message}")]
    Validation { message: String },

    /// Tool registry errors (unknown tool, undecodable arguments)
    #[error("Tool error: {message}")]
    Tool { message: String },

    /// JSON serialization errors
    #[error("JSON error: {source}")]
    Json {
        #[from]
        source: serde_json::Error,
    },

    /// I/O operation errors
    #[error("I/O error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },
}

impl EventAiError {
    /// Create a new configuration error
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a new catalog error
    pub fn catalog<S: Into<String>>(message: S) -> Self {
        Self::Catalog {
            message: message.into(),
        }
    }

    /// Create a new validation error
    pub fn validation<S: Into<String>>(message: S) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// Create a new tool error
    pub fn tool<S: Into<String>>(message: S) -> Self {
        Self::Tool {
            message: message.into(),
        }
    }

    /// Get a user-friendly error message
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            EventAiError::Config { .. } => {
                "Configuration error. Please check your config file.".to_string()
            }
            EventAiError::Catalog { .. } => {
                "Event catalog could not be read. Searches will return no results.".to_string()
            }
            EventAiError::Validation { message } => {
                format!("Invalid input: {message}")
            }
            EventAiError::Tool { message } => {
                format!("Tool call failed: {message}")
            }
            EventAiError::Json { .. } => "Failed to encode or decode JSON data.".to_string(),
            EventAiError::Io { .. } => {
                "File operation failed. Please check file permissions.".to_string()
            }
        }
    }
}
