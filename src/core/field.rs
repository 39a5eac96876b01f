//! Field business logic - validation, transaction scope and paging for fields.
//!
//! Every method opens its own [`ScopedTransaction`], so each call is all-or-nothing.
//! Requests are validated before the transaction is opened.

use crate::{
    core::{
        pagination::{PageRequest, Pagination},
        tx::ScopedTransaction,
    },
    entities::field,
    errors::{Error, Result},
    models::FieldRequest,
    repository::FieldRepository,
};
use sea_orm::{DatabaseConnection, DatabaseTransaction, Set};
use tracing::{info, instrument};
use validator::Validate;

/// Field use case, built once per service with its dependencies
#[derive(Debug, Clone)]
pub struct FieldUseCase {
    repository: FieldRepository,
    db: DatabaseConnection,
}

impl FieldUseCase {
    #[must_use]
    pub const fn new(repository: FieldRepository, db: DatabaseConnection) -> Self {
        Self { repository, db }
    }

    /// Validates and inserts a new field, returning it with its generated id.
    #[instrument(skip(self, request))]
    pub async fn save(&self, request: FieldRequest) -> Result<field::Model> {
        request.validate()?;

        let tx = ScopedTransaction::begin(&self.db).await?;
        let outcome = self
            .repository
            .save(
                tx.connection(),
                field::ActiveModel {
                    name: Set(request.name),
                    field_type: Set(request.field_type),
                    description: Set(request.description),
                    price: Set(request.price),
                    ..Default::default()
                },
            )
            .await;
        let saved = tx.finish(outcome).await?;

        info!(field_id = saved.id, "Created field");
        Ok(saved)
    }

    /// Replaces every column of an existing field with the request's values.
    #[instrument(skip(self, request))]
    pub async fn update(&self, request: FieldRequest, id: i64) -> Result<()> {
        request.validate()?;

        let tx = ScopedTransaction::begin(&self.db).await?;
        let outcome = async {
            self.require(tx.connection(), id).await?;
            self.repository
                .update(
                    tx.connection(),
                    field::Model {
                        id,
                        name: request.name,
                        field_type: request.field_type,
                        description: request.description,
                        price: request.price,
                    },
                )
                .await?;
            Ok::<_, Error>(())
        }
        .await;
        tx.finish(outcome).await
    }

    /// Deletes an existing field.
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

        info!(field_id = id, "Deleted field");
        Ok(())
    }

    /// Fetches one field.
    #[instrument(skip(self))]
    pub async fn find_by_id(&self, id: i64) -> Result<field::Model> {
        let tx = ScopedTransaction::begin(&self.db).await?;
        let outcome = self.require(tx.connection(), id).await;
        tx.finish(outcome).await
    }

    /// Lists one page of fields ordered by id, with paging metadata.
    #[instrument(skip(self))]
    pub async fn find_all(&self, limit: u32, page: u32) -> Result<(Vec<field::Model>, Pagination)> {
        let request = PageRequest::new(limit, page);

        let tx = ScopedTransaction::begin(&self.db).await?;
        let outcome = self
            .repository
            .find_all(tx.connection(), u64::from(request.limit), request.offset)
            .await;
        let (fields, total_record) = tx.finish(outcome).await?;

        Ok((fields, Pagination::new(&request, total_record)))
    }

    async fn require(&self, txn: &DatabaseTransaction, id: i64) -> Result<field::Model> {
        self.repository
            .find_by_id(txn, id)
            .await?
            .ok_or(Error::NotFound { entity: "field", id })
    }
}
