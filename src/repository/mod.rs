//! Repository layer - thin `SeaORM` access, one logical statement per operation.
//!
//! Repositories take the connection (normally a transaction) from the caller and
//! never open, commit or roll back transactions themselves.

pub mod field;
pub mod user;

pub use field::FieldRepository;
pub use user::UserRepository;
