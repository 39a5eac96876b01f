//! Field reservation backend - gRPC services for sports fields and user accounts
//!
//! The crate is layered: tonic controllers in [`transport`] convert wire messages
//! into request DTOs, use cases in [`core`] validate them and open a transaction,
//! and repositories in [`repository`] issue the SeaORM queries. Two binaries,
//! `field-service` and `user-service`, each serve one protobuf service.

// Deny the most critical lints that could lead to bugs or security issues
#![deny(
    // Security and correctness
    unsafe_code,
    unsafe_op_in_unsafe_fn,

    // Code quality - things that are almost always bugs
    unreachable_code,
    unreachable_patterns,
    unused_must_use,

    // Documentation - broken links are bugs
    rustdoc::broken_intra_doc_links,
    rustdoc::private_intra_doc_links,
)]
// Warn on things that should be fixed but aren't necessarily bugs
#![warn(
    // Documentation - missing docs should be added gradually
    missing_docs,

    // Clippy categories for overall code quality
    clippy::all,
    clippy::pedantic,
    clippy::nursery,

    // Performance
    clippy::inefficient_to_string,
    clippy::large_types_passed_by_value,
    clippy::needless_pass_by_value,
    clippy::unnecessary_wraps,

    // Correctness
    clippy::clone_on_ref_ptr,
    clippy::dbg_macro,
    clippy::exit,
    clippy::expect_used,
    clippy::float_cmp,
    clippy::panic,
    clippy::todo,
    clippy::unimplemented,
    clippy::unwrap_used,

    // Complexity and readability
    clippy::cognitive_complexity,
    clippy::large_enum_variant,
    clippy::match_same_arms,
    clippy::too_many_lines,

    // Style consistency
    clippy::enum_glob_use,
    clippy::inconsistent_struct_constructor,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::redundant_closure_for_method_calls,
    clippy::semicolon_if_nothing_returned,
    clippy::wildcard_imports,

    // Future compatibility
    future_incompatible,
    rust_2018_idioms,
)]
// Allow some pedantic lints that are too noisy or not applicable
#![allow(
    clippy::module_name_repetitions,  // Common pattern in Rust
    clippy::missing_errors_doc,        // Will add gradually
    clippy::missing_panics_doc,        // Will add gradually
    clippy::result_large_err,          // tonic::Status is the handler error type
)]

// Note: `missing_docs` is set to `warn` instead of `deny` because:
// 1. Code generated by tonic-build doesn't include docs
// 2. We want to gradually add documentation rather than block compilation

/// Server assembly shared by the service binaries
pub mod bootstrap;
/// Configuration management for database and server settings
pub mod config;
/// Core business logic - use cases, transactions, paging and hashing
pub mod core;
/// SeaORM entity definitions for database tables
pub mod entities;
/// Unified error types and result handling
pub mod errors;
/// Validated request DTOs
pub mod models;
/// Data access for fields and users
pub mod repository;
/// gRPC controllers
pub mod transport;

/// Generated protobuf messages and service traits
#[allow(missing_docs, clippy::all, clippy::pedantic, clippy::nursery)]
pub mod proto {
    /// `pagination` package
    pub mod pagination {
        tonic::include_proto!("pagination");
    }

    /// `field` package
    pub mod field {
        tonic::include_proto!("field");
    }

    /// `user` package
    pub mod user {
        tonic::include_proto!("user");
    }
}

#[cfg(test)]
pub mod test_utils;
