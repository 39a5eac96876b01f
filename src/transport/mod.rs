//! gRPC transport layer - tonic service implementations for both services.
//!
//! Controllers translate protobuf messages into request DTOs, call the matching
//! use-case method, and translate the result back. Each error kind gets its own
//! status code:
//!
//! | Error                    | Status             |
//! |--------------------------|--------------------|
//! | `Validation`             | `InvalidArgument`  |
//! | `NotFound`               | `NotFound`         |
//! | `Conflict`               | `AlreadyExists`    |
//! | everything else          | `Internal`         |
//!
//! The status message is always the error's display text.

/// Field service controller
pub mod field;
/// User service controller
pub mod user;

pub use field::FieldController;
pub use user::UserController;

use crate::{core::Pagination, errors::Error, proto};
use tonic::{Code, Status};

impl From<Error> for Status {
    fn from(err: Error) -> Self {
        let code = match &err {
            Error::Validation { .. } => Code::InvalidArgument,
            Error::NotFound { .. } => Code::NotFound,
            Error::Conflict { .. } => Code::AlreadyExists,
            Error::Database(_)
            | Error::PasswordHash { .. }
            | Error::Config { .. }
            | Error::Transport(_) => {
                tracing::error!("Request failed: {err}");
                Code::Internal
            }
        };
        Self::new(code, err.to_string())
    }
}

impl From<Pagination> for proto::pagination::Pagination {
    fn from(value: Pagination) -> Self {
        Self {
            current_page: value.current_page,
            limit: value.limit,
            total_record: value.total_record,
            total_page: value.total_page,
        }
    }
}

/// Narrows a database id to the `uint32` the wire messages carry.
fn wire_id(id: i64) -> Result<u32, Status> {
    u32::try_from(id).map_err(|_| Status::internal(format!("id {id} does not fit in uint32")))
}
