//! Field persistence - single-statement operations over the `fields` table.
//!
//! Every function runs on whatever connection the caller hands in. The use case
//! passes its scoped transaction; nothing here begins, commits or rolls back.

use crate::{
    entities::{Field, field},
    errors::Result,
};
use sea_orm::{
    ActiveModelTrait, ConnectionTrait, EntityTrait, PaginatorTrait, QueryOrder, QuerySelect, Set,
    Unchanged,
};
use tracing::{debug, instrument};

/// Stateless access to the `fields` table
#[derive(Debug, Clone, Copy, Default)]
pub struct FieldRepository;

impl FieldRepository {
    /// Creates a new repository handle
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Inserts a field and returns it with its generated id.
    #[instrument(skip(self, db, field))]
    pub async fn save<C>(&self, db: &C, field: field::ActiveModel) -> Result<field::Model>
    where
        C: ConnectionTrait,
    {
        let saved = field.insert(db).await?;
        debug!(field_id = saved.id, "Inserted field");
        Ok(saved)
    }

    /// Overwrites every column of the field identified by `field.id`.
    #[instrument(skip(self, db, field), fields(field_id = field.id))]
    pub async fn update<C>(&self, db: &C, field: field::Model) -> Result<field::Model>
    where
        C: ConnectionTrait,
    {
        let active = field::ActiveModel {
            id: Unchanged(field.id),
            name: Set(field.name),
            field_type: Set(field.field_type),
            description: Set(field.description),
            price: Set(field.price),
        };
        active.update(db).await.map_err(Into::into)
    }

    /// Physically removes the field. Returns the number of deleted rows.
    #[instrument(skip(self, db))]
    pub async fn delete<C>(&self, db: &C, field_id: i64) -> Result<u64>
    where
        C: ConnectionTrait,
    {
        let result = Field::delete_by_id(field_id).exec(db).await?;
        Ok(result.rows_affected)
    }

    /// Finds a field by primary key.
    pub async fn find_by_id<C>(&self, db: &C, field_id: i64) -> Result<Option<field::Model>>
    where
        C: ConnectionTrait,
    {
        Field::find_by_id(field_id)
            .one(db)
            .await
            .map_err(Into::into)
    }

    /// Counts all fields, then fetches one page ordered by id ascending.
    #[instrument(skip(self, db))]
    pub async fn find_all<C>(
        &self,
        db: &C,
        limit: u64,
        offset: u64,
    ) -> Result<(Vec<field::Model>, u64)>
    where
        C: ConnectionTrait,
    {
        let total = Field::find().count(db).await?;

        let fields = Field::find()
            .order_by_asc(field::Column::Id)
            .limit(limit)
            .offset(offset)
            .all(db)
            .await?;

        Ok((fields, total))
    }
}
