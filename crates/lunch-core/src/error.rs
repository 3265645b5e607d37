//! Error Types
//!
//! Two kinds reach the user: [`ValidationError`] (never leaves the client) and
//! [`RequestError`] (anything that went wrong after a request was issued).

use thiserror::Error;

/// Result type for backend calls
pub type ApiResult<T> = Result<T, RequestError>;

/// Form fields a validation failure can point at
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Budget,
    ItemName,
    ItemPrice,
    Email,
    Password,
    SignupEmail,
    SignupPassword,
    ConfirmPassword,
}

/// Client-detected input problem; the request is never sent
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please enter a valid budget amount")]
    InvalidBudget,
    #[error("Please enter a food name.")]
    MissingName,
    #[error("Please enter a valid price.")]
    InvalidPrice,
    #[error("Please enter your email address.")]
    MissingEmail(Field),
    #[error("Please enter your password.")]
    MissingPassword,
    #[error("Please enter a password.")]
    MissingNewPassword,
    #[error("Password must be at least {min} characters long.")]
    PasswordTooShort { min: usize },
    #[error("Passwords do not match.")]
    PasswordMismatch,
}

impl ValidationError {
    /// Field that should receive focus
    pub fn field(&self) -> Field {
        match self {
            ValidationError::InvalidBudget => Field::Budget,
            ValidationError::MissingName => Field::ItemName,
            ValidationError::InvalidPrice => Field::ItemPrice,
            ValidationError::MissingEmail(field) => *field,
            ValidationError::MissingPassword => Field::Password,
            ValidationError::MissingNewPassword | ValidationError::PasswordTooShort { .. } => {
                Field::SignupPassword
            }
            ValidationError::PasswordMismatch => Field::ConfirmPassword,
        }
    }
}

/// Failure of an issued request
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RequestError {
    #[error("server responded with status {0}")]
    Status(u16),
    #[error("network error: {0}")]
    Network(String),
    #[error("malformed response: {0}")]
    Decode(String),
}

impl From<reqwest::Error> for RequestError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_decode() {
            RequestError::Decode(e.to_string())
        } else if let Some(status) = e.status() {
            RequestError::Status(status.as_u16())
        } else {
            RequestError::Network(e.to_string())
        }
    }
}

impl From<serde_json::Error> for RequestError {
    fn from(e: serde_json::Error) -> Self {
        RequestError::Decode(e.to_string())
    }
}

/// Invalid client configuration
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("invalid config: {0}")]
    Parse(String),
    #[error("{name} must be an absolute path, got {path:?}")]
    InvalidPath { name: &'static str, path: String },
    #[error("invalid base url {0:?}")]
    InvalidBaseUrl(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_messages_and_focus() {
        let err = ValidationError::PasswordTooShort { min: 6 };
        assert_eq!(err.to_string(), "Password must be at least 6 characters long.");
        assert_eq!(err.field(), Field::SignupPassword);

        assert_eq!(ValidationError::MissingEmail(Field::SignupEmail).field(), Field::SignupEmail);
        assert_eq!(ValidationError::InvalidPrice.field(), Field::ItemPrice);
    }
}
