//! Error types and handling for the weather skill

use thiserror::Error;

/// Main error type for the weather skill
#[derive(Error, Debug)]
pub enum SkillError {
    /// Configuration-related errors
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// Weather API communication errors
    #[error("API error: {message}")]
    Api { message: String },

    /// The forecast document does not carry the data the renderer needs
    #[error("Forecast document error: {message}")]
    Document { message: String },

    /// The platform asked for an intent this skill does not handle
    #[error("Invalid intent: {name}")]
    UnknownIntent { name: String },

    /// No secret provider produced the weather API key
    #[error("Secret error: {message}")]
    Secret { message: String },

    /// I/O operation errors
    #[error("I/O error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },
}

impl SkillError {
    /// Create a new configuration error
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a new API error
    pub fn api<S: Into<String>>(message: S) -> Self {
        Self::Api {
            message: message.into(),
        }
    }

    /// Create a new forecast document error
    pub fn document<S: Into<String>>(message: S) -> Self {
        Self::Document {
            message: message.into(),
        }
    }

    /// Create a new unknown intent error
    pub fn unknown_intent<S: Into<String>>(name: S) -> Self {
        Self::UnknownIntent { name: name.into() }
    }

    /// Create a new secret error
    pub fn secret<S: Into<String>>(message: S) -> Self {
        Self::Secret {
            message: message.into(),
        }
    }

    /// Get a message that can be spoken back to the user
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            SkillError::Api { .. } | SkillError::Document { .. } => {
                "Sorry, I could not get the weather right now. ".to_string()
            }
            SkillError::UnknownIntent { .. } => {
                "Sorry, I do not know how to help with that. ".to_string()
            }
            SkillError::Config { .. } | SkillError::Secret { .. } | SkillError::Io { .. } => {
                "Sorry, the weather service is not set up correctly. ".to_string()
            }
        }
    }
}

impl From<serde_json::Error> for SkillError {
    fn from(err: serde_json::Error) -> Self {
        SkillError::document(err.to_string())
    }
}

// The request URL carries the API key, so it never reaches the message
impl From<reqwest::Error> for SkillError {
    fn from(err: reqwest::Error) -> Self {
        SkillError::api(err.without_url().to_string())
    }
}
