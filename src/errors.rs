//! Unified error type for both services.
//!
//! The use-case layer reports four domain failures (validation, missing rows,
//! conflicts, storage) plus the infrastructure errors the binaries can hit while
//! starting up. The transport layer turns each kind into its own gRPC status code.

use thiserror::Error;

/// Every failure the services can report
#[derive(Debug, Error)]
pub enum Error {
    /// Request fields failed their constraints
    #[error("Validation error: {message}")]
    Validation { message: String },

    /// The referenced row does not exist
    #[error("{entity} with id {id} not found")]
    NotFound { entity: &'static str, id: i64 },

    /// A unique value is already taken
    #[error("{message}")]
    Conflict { message: String },

    #[error("Database error: {0}")]
    Database(#[from] sea_orm::DbErr),

    #[error("Password hashing error: {message}")]
    PasswordHash { message: String },

    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("gRPC transport error: {0}")]
    Transport(#[from] tonic::transport::Error),
}

impl From<validator::ValidationErrors> for Error {
    fn from(value: validator::ValidationErrors) -> Self {
        Self::Validation {
            message: value.to_string(),
        }
    }
}

// Convenience `Result` type
pub type Result<T> = std::result::Result<T, Error>;
