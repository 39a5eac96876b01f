//! Scoped database transactions for use-case methods.
//!
//! A use case opens one [`ScopedTransaction`], runs its repository calls against
//! [`ScopedTransaction::connection`], and hands the outcome to
//! [`ScopedTransaction::finish`]. `finish` commits an `Ok` and rolls back an `Err`.
//! If the scope is left any other way (a panic, or the request future being
//! dropped), the inner `DatabaseTransaction` is dropped uncommitted and `SeaORM`
//! rolls it back. A transaction is never left open.

use crate::errors::Result;
use sea_orm::{DatabaseConnection, DatabaseTransaction, TransactionTrait};
use tracing::warn;

/// A transaction that always ends in a commit or a rollback
pub struct ScopedTransaction {
    txn: DatabaseTransaction,
}

impl ScopedTransaction {
    /// Begins a transaction on the pool.
    pub async fn begin(db: &DatabaseConnection) -> Result<Self> {
        Ok(Self {
            txn: db.begin().await?,
        })
    }

    /// The open transaction, for passing to repositories.
    #[must_use]
    pub const fn connection(&self) -> &DatabaseTransaction {
        &self.txn
    }

    /// Ends the transaction according to `outcome` and passes `outcome` through.
    ///
    /// A failed commit replaces a successful outcome with the commit error. A
    /// failed rollback is logged and the original error is returned.
    pub async fn finish<T>(self, outcome: Result<T>) -> Result<T> {
        match outcome {
            Ok(value) => {
                self.txn.commit().await?;
                Ok(value)
            }
            Err(err) => {
                if let Err(rollback_err) = self.txn.rollback().await {
                    warn!(error = %rollback_err, "Rollback failed after: {err}");
                }
                Err(err)
            }
        }
    }
}
