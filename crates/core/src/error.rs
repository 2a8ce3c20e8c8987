use thiserror::Error;

/// Core error type for the formwork generator
#[derive(Debug, Error)]
pub enum FormworkError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    Configuration { message: String },

    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("Discovery error: {message}")]
    Discovery { message: String },

    #[error("Codegen error: {message}")]
    Codegen { message: String },

    #[error("Template error: {message}")]
    Template { message: String },
}

impl FormworkError {
    /// Create a new configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Create a new validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// Create a new discovery error
    pub fn discovery(message: impl Into<String>) -> Self {
        Self::Discovery {
            message: message.into(),
        }
    }

    /// Create a new codegen error
    pub fn codegen(message: impl Into<String>) -> Self {
        Self::Codegen {
            message: message.into(),
        }
    }

    /// Create a new template error
    pub fn template(message: impl Into<String>) -> Self {
        Self::Template {
            message: message.into(),
        }
    }
}

impl From<toml::de::Error> for FormworkError {
    fn from(err: toml::de::Error) -> Self {
        Self::Configuration {
            message: err.to_string(),
        }
    }
}
