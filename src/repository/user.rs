//! User persistence - single-statement operations over the `users` table.
//!
//! Like the field repository, every function runs on the caller's connection or
//! transaction and never manages transactions itself.

use crate::{
    entities::{Transaction, TransactionDetail, User, transaction, transaction_detail, user},
    errors::Result,
};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, LoaderTrait, PaginatorTrait,
    QueryFilter, QueryOrder, QuerySelect,
};
use tracing::{debug, instrument};

/// A transaction together with its detail lines
pub type OrderWithDetails = (transaction::Model, Vec<transaction_detail::Model>);

/// Stateless access to the `users` table
#[derive(Debug, Clone, Copy, Default)]
pub struct UserRepository;

impl UserRepository {
    /// Creates a new repository handle
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Inserts a user and returns the generated id.
    #[instrument(skip(self, db, user))]
    pub async fn save<C>(&self, db: &C, user: user::ActiveModel) -> Result<i64>
    where
        C: ConnectionTrait,
    {
        let saved = user.insert(db).await?;
        debug!(user_id = saved.id, "Inserted user");
        Ok(saved.id)
    }

    /// Writes only the columns that are `Set` on `user`; the rest keep their values.
    #[instrument(skip(self, db, user))]
    pub async fn update<C>(&self, db: &C, user: user::ActiveModel) -> Result<user::Model>
    where
        C: ConnectionTrait,
    {
        user.update(db).await.map_err(Into::into)
    }

    /// Physically removes the user. Returns the number of deleted rows.
    #[instrument(skip(self, db))]
    pub async fn delete<C>(&self, db: &C, user_id: i64) -> Result<u64>
    where
        C: ConnectionTrait,
    {
        let result = User::delete_by_id(user_id).exec(db).await?;
        Ok(result.rows_affected)
    }

    /// Finds a user by primary key.
    pub async fn find_by_id<C>(&self, db: &C, user_id: i64) -> Result<Option<user::Model>>
    where
        C: ConnectionTrait,
    {
        User::find_by_id(user_id).one(db).await.map_err(Into::into)
    }

    /// Looks an email up and reports whether it is still **available**.
    ///
    /// Returns `true` when no user has this email and `false` when one does,
    /// i.e. the opposite of an "exists" check.
    pub async fn find_by_email<C>(&self, db: &C, email: &str) -> Result<bool>
    where
        C: ConnectionTrait,
    {
        let existing = User::find()
            .filter(user::Column::Email.eq(email))
            .one(db)
            .await?;
        Ok(existing.is_none())
    }

    /// Counts plain users (`role = "user"`), then fetches one page of them
    /// ordered by id ascending. Operators and super users are never listed.
    #[instrument(skip(self, db))]
    pub async fn find_all<C>(
        &self,
        db: &C,
        limit: u64,
        offset: u64,
    ) -> Result<(Vec<user::Model>, u64)>
    where
        C: ConnectionTrait,
    {
        let total = User::find()
            .filter(user::Column::Role.eq(user::Role::User))
            .count(db)
            .await?;

        let users = User::find()
            .filter(user::Column::Role.eq(user::Role::User))
            .order_by_asc(user::Column::Id)
            .limit(limit)
            .offset(offset)
            .all(db)
            .await?;

        Ok((users, total))
    }

    /// Fetches one page of a user's transactions, newest first, each with its
    /// detail lines.
    #[instrument(skip(self, db))]
    pub async fn find_orders<C>(
        &self,
        db: &C,
        user_id: i64,
        limit: u64,
        offset: u64,
    ) -> Result<Vec<OrderWithDetails>>
    where
        C: ConnectionTrait,
    {
        let orders = Transaction::find()
            .filter(transaction::Column::UserId.eq(user_id))
            .order_by_desc(transaction::Column::TransactionTime)
            .limit(limit)
            .offset(offset)
            .all(db)
            .await?;

        let details = orders.load_many(TransactionDetail, db).await?;

        Ok(orders.into_iter().zip(details).collect())
    }
}
