//! User business logic - account creation, partial updates, deletion and listing.
//!
//! Each method validates its request, then runs inside one [`ScopedTransaction`].
//! Email uniqueness is checked before writing and is backed by the unique
//! constraint on `users.email`; a violation from either source is a
//! [`Error::Conflict`].

use crate::{
    core::{
        pagination::{PageRequest, Pagination},
        password,
        tx::ScopedTransaction,
    },
    entities::user::{self, Role},
    errors::{Error, Result},
    models::{UpdateEmailRequest, UpdatePasswordRequest, UpdateProfileRequest, UserCreateRequest},
    repository::{UserRepository, user::OrderWithDetails},
};
use sea_orm::{DatabaseConnection, DatabaseTransaction, DbErr, Set, SqlErr};
use tracing::{info, instrument};
use validator::Validate;

const EMAIL_TAKEN: &str = "email already use";
const SAME_PASSWORD: &str = "new password must be different from the current password";

/// A user with one page of their orders
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserOrders {
    pub user: user::Model,
    pub orders: Vec<OrderWithDetails>,
    pub pagination: PageRequest,
}

/// User use case, built once per service with its dependencies
#[derive(Debug, Clone)]
pub struct UserUseCase {
    repository: UserRepository,
    db: DatabaseConnection,
}

impl UserUseCase {
    #[must_use]
    pub const fn new(repository: UserRepository, db: DatabaseConnection) -> Self {
        Self { repository, db }
    }

    /// Creates an account with `role` and returns its id.
    ///
    /// Fails with [`Error::Conflict`] if the email is already registered; no row is written.
    #[instrument(skip(self, request))]
    pub async fn create(&self, request: UserCreateRequest, role: Role) -> Result<i64> {
        request.validate()?;

        let tx = ScopedTransaction::begin(&self.db).await?;
        let outcome = async {
            self.ensure_email_available(tx.connection(), &request.email)
                .await?;

            let hashed_password = password::hash_password(&request.password)?;

            self.repository
                .save(
                    tx.connection(),
                    user::ActiveModel {
                        email: Set(request.email),
                        name: Set(request.name),
                        password: Set(hashed_password),
                        phone_number: Set(request.phone_number),
                        role: Set(role),
                        ..Default::default()
                    },
                )
                .await
                .map_err(email_conflict)
        }
        .await;
        let id = tx.finish(outcome).await?;

        info!(user_id = id, ?role, "Created user");
        Ok(id)
    }

    /// Replaces the stored password hash.
    ///
    /// The new password is hashed first and the new hash is compared with the
    /// stored hash; equal hashes are rejected. Salted hashes of the same
    /// password differ, so in practice this only rejects a byte-identical hash.
    #[instrument(skip(self, request))]
    pub async fn update_password(&self, request: UpdatePasswordRequest, id: i64) -> Result<()> {
        request.validate()?;

        let tx = ScopedTransaction::begin(&self.db).await?;
        let outcome = async {
            let current = self.require(tx.connection(), id).await?;

            let hashed_password = password::hash_password(&request.password)?;
            if current.password == hashed_password {
                return Err(Error::Validation {
                    message: SAME_PASSWORD.to_string(),
                });
            }

            let mut active: user::ActiveModel = current.into();
            active.password = Set(hashed_password);
            self.repository.update(tx.connection(), active).await?;
            Ok::<_, Error>(())
        }
        .await;
        tx.finish(outcome).await
    }

    /// Changes only the email, after checking it is not taken.
    #[instrument(skip(self, request))]
    pub async fn update_email(&self, request: UpdateEmailRequest, id: i64) -> Result<()> {
        request.validate()?;

        let tx = ScopedTransaction::begin(&self.db).await?;
        let outcome = async {
            let current = self.require(tx.connection(), id).await?;
            self.ensure_email_available(tx.connection(), &request.email)
                .await?;

            let mut active: user::ActiveModel = current.into();
            active.email = Set(request.email);
            self.repository
                .update(tx.connection(), active)
                .await
                .map_err(email_conflict)?;
            Ok::<_, Error>(())
        }
        .await;
        tx.finish(outcome).await
    }

    /// Changes only the name and phone number.
    #[instrument(skip(self, request))]
    pub async fn update_profile(&self, request: UpdateProfileRequest, id: i64) -> Result<()> {
        request.validate()?;

        let tx = ScopedTransaction::begin(&self.db).await?;
        let outcome = async {
            let current = self.require(tx.connection(), id).await?;

            let mut active: user::ActiveModel = current.into();
            active.name = Set(request.name);
            active.phone_number = Set(request.phone_number);
            self.repository.update(tx.connection(), active).await?;
            Ok::<_, Error>(())
        }
        .await;
        tx.finish(outcome).await
    }

    #[instrument(skip(self))]
    pub async fn delete(&self, id: i64) -> Result<()> {
        let tx = ScopedTransaction::begin(&self.db).await?;
        let outcome = async {
            self.require(tx.connection(), id).await?;
            self.repository.delete(tx.connection(), id).await?;
            Ok::<_, Error>(())
        }
        .await;
        tx.finish(outcome).await?;

        info!(user_id = id, "Deleted user");
        Ok(())
    }

    #[instrument(skip(self))]
    pub async fn find_by_id(&self, id: i64) -> Result<user::Model> {
        let tx = ScopedTransaction::begin(&self.db).await?;
        let outcome = self.require(tx.connection(), id).await;
        tx.finish(outcome).await
    }

    /// Lists one page of plain users (role `user`) with paging metadata.
    #[instrument(skip(self))]
    pub async fn find_all(&self, limit: u32, page: u32) -> Result<(Vec<user::Model>, Pagination)> {
        let request = PageRequest::new(limit, page);

        let tx = ScopedTransaction::begin(&self.db).await?;
        let outcome = self
            .repository
            .find_all(tx.connection(), u64::from(request.limit), request.offset)
            .await;
        let (users, total_record) = tx.finish(outcome).await?;

        Ok((users, Pagination::new(&request, total_record)))
    }

    /// Loads a user and one page of their orders, newest first.
    #[instrument(skip(self))]
    pub async fn find_orders(&self, user_id: i64, limit: u32, page: u32) -> Result<UserOrders> {
        let request = PageRequest::new(limit, page);

        let tx = ScopedTransaction::begin(&self.db).await?;
        let outcome = async {
            let user = self.require(tx.connection(), user_id).await?;
            let orders = self
                .repository
                .find_orders(
                    tx.connection(),
                    user_id,
                    u64::from(request.limit),
                    request.offset,
                )
                .await?;
            Ok::<_, Error>(UserOrders {
                user,
                orders,
                pagination: request,
            })
        }
        .await;
        tx.finish(outcome).await
    }

    async fn require(&self, txn: &DatabaseTransaction, id: i64) -> Result<user::Model> {
        self.repository
            .find_by_id(txn, id)
            .await?
            .ok_or(Error::NotFound { entity: "user", id })
    }

    async fn ensure_email_available(&self, txn: &DatabaseTransaction, email: &str) -> Result<()> {
        if self.repository.find_by_email(txn, email).await? {
            Ok(())
        } else {
            Err(Error::Conflict {
                message: EMAIL_TAKEN.to_string(),
            })
        }
    }
}

/// A unique violation on insert/update means another request claimed the email first.
fn email_conflict(err: Error) -> Error {
    match &err {
        Error::Database(db_err) if is_unique_violation(db_err) => Error::Conflict {
            message: EMAIL_TAKEN.to_string(),
        },
        _ => err,
    }
}

fn is_unique_violation(err: &DbErr) -> bool {
    matches!(err.sql_err(), Some(SqlErr::UniqueConstraintViolation(_)))
}
