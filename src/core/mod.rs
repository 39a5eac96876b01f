//! Core business logic - framework-agnostic use cases and the helpers they share.

/// Field use case
pub mod field;
/// Page/limit clamping and page-count math
pub mod pagination;
/// Argon2 password hashing
pub mod password;
/// Payment gateway signature
pub mod signature;
/// Scoped commit-or-rollback transactions
pub mod tx;
/// User use case
pub mod user;

pub use field::FieldUseCase;
pub use pagination::{PageRequest, Pagination};
pub use tx::ScopedTransaction;
pub use user::{UserOrders, UserUseCase};
