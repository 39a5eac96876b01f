//! Database configuration module for the field and user services.
//!
//! This module handles the database connection pool and table creation using `SeaORM`.
//! Both services share one schema. Tables are generated from the entity definitions with
//! `Schema::create_table_from_entity`, so the database always matches the Rust structs,
//! including unique constraints and the foreign keys declared on each `Relation`.

use crate::config::settings::DatabaseSettings;
use crate::entities::{Field, Schedule, Transaction, TransactionDetail, User};
use crate::errors::Result;
use sea_orm::{
    ConnectOptions, ConnectionTrait, Database, DatabaseConnection, EntityTrait, Schema,
};
use tracing::{info, instrument};

/// Establishes a pooled connection using the configured URL and pool limits.
#[instrument(skip(settings))]
pub async fn create_connection(settings: &DatabaseSettings) -> Result<DatabaseConnection> {
    let mut options = ConnectOptions::new(settings.url.clone());
    options
        .max_connections(settings.max_connections)
        .min_connections(settings.min_connections)
        .max_lifetime(settings.max_lifetime())
        .idle_timeout(settings.idle_timeout())
        .sqlx_logging(settings.sqlx_logging);

    let db = Database::connect(options).await?;
    info!(
        max_connections = settings.max_connections,
        "Database connection pool ready"
    );
    Ok(db)
}

/// Creates all tables that do not exist yet.
///
/// Parents are created before children (users and fields, then schedules,
/// then transactions, then transaction details) so every foreign key resolves
/// on backends that check references at creation time.
pub async fn create_tables(db: &DatabaseConnection) -> Result<()> {
    create_table(db, User).await?;
    create_table(db, Field).await?;
    create_table(db, Schedule).await?;
    create_table(db, Transaction).await?;
    create_table(db, TransactionDetail).await?;

    Ok(())
}

async fn create_table<E: EntityTrait>(db: &DatabaseConnection, entity: E) -> Result<()> {
    let builder = db.get_database_backend();
    let schema = Schema::new(builder);

    let mut statement = schema.create_table_from_entity(entity);
    statement.if_not_exists();

    db.execute(builder.build(&statement)).await?;
    Ok(())
}
