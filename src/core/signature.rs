//! Payment gateway callback signatures.
//!
//! The gateway signs its notifications with
//! `SHA512(order_id + status_code + gross_amount + server_key)`, hex encoded.
//! Recomputing the same digest locally is how a callback is authenticated.

use crate::errors::{Error, Result};
use sha2::{Digest, Sha512};

/// Environment variable holding the gateway server key
pub const SERVER_KEY_ENV: &str = "MIDTRANS_SERVER_KEY";

/// Computes the lowercase hex SHA-512 signature over the four parts, concatenated in order.
#[must_use]
pub fn payment_signature(
    order_id: &str,
    status_code: &str,
    gross_amount: &str,
    server_key: &str,
) -> String {
    let mut hasher = Sha512::new();
    hasher.update(order_id.as_bytes());
    hasher.update(status_code.as_bytes());
    hasher.update(gross_amount.as_bytes());
    hasher.update(server_key.as_bytes());
    hex::encode(hasher.finalize())
}

/// Same as [`payment_signature`], with the server key read from `MIDTRANS_SERVER_KEY`.
///
/// # Errors
/// Returns `Error::Config` if the variable is unset or empty.
pub fn payment_signature_from_env(
    order_id: &str,
    status_code: &str,
    gross_amount: &str,
) -> Result<String> {
    let server_key = std::env::var(SERVER_KEY_ENV)
        .ok()
        .filter(|key| !key.is_empty())
        .ok_or_else(|| Error::Config {
            message: format!("env {SERVER_KEY_ENV} is not set"),
        })?;

    Ok(payment_signature(
        order_id,
        status_code,
        gross_amount,
        &server_key,
    ))
}
