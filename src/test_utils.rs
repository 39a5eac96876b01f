//! Shared test utilities for the field and user services.
//!
//! This module provides common helper functions for setting up test databases
//! and creating test entities with sensible defaults.

use crate::{
    core::password,
    entities::{
        PaymentStatus, ScheduleStatus, field, schedule, transaction, transaction_detail, user,
    },
    errors::Result,
    models::{FieldRequest, UserCreateRequest},
    repository::{FieldRepository, UserRepository},
};
use chrono::{Duration, TimeZone, Utc};
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, Set};

/// Creates an in-memory `SQLite` database with all tables initialized.
/// This is the standard setup for all integration tests.
pub async fn setup_test_db() -> Result<DatabaseConnection> {
    let db = sea_orm::Database::connect("sqlite::memory:").await?;
    crate::config::database::create_tables(&db).await?;
    Ok(db)
}

/// A valid field request with sensible defaults.
///
/// # Defaults
/// * `field_type`: "futsal"
/// * `description`: "Indoor court"
/// * `price`: 150000
pub fn field_request(name: &str) -> FieldRequest {
    FieldRequest {
        name: name.to_string(),
        field_type: "futsal".to_string(),
        description: "Indoor court".to_string(),
        price: 150_000,
    }
}

/// A valid create-user request. Name and phone number are fixed; only the email varies.
pub fn user_request(email: &str) -> UserCreateRequest {
    UserCreateRequest {
        email: email.to_string(),
        name: "Budi Santoso".to_string(),
        password: "correct-horse-battery".to_string(),
        phone_number: "081234567890".to_string(),
    }
}

/// Inserts a field directly through the repository, bypassing the use case.
pub async fn create_test_field(db: &DatabaseConnection, name: &str) -> Result<field::Model> {
    let request = field_request(name);
    FieldRepository::new()
        .save(
            db,
            field::ActiveModel {
                name: Set(request.name),
                field_type: Set(request.field_type),
                description: Set(request.description),
                price: Set(request.price),
                ..Default::default()
            },
        )
        .await
}

/// Inserts a user with the given role directly through the repository.
/// The stored password is a real hash of `user_request`'s password.
pub async fn create_test_user(
    db: &DatabaseConnection,
    email: &str,
    role: user::Role,
) -> Result<user::Model> {
    let request = user_request(email);
    let id = UserRepository::new()
        .save(
            db,
            user::ActiveModel {
                name: Set(request.name),
                email: Set(request.email),
                password: Set(password::hash_password(&request.password)?),
                phone_number: Set(request.phone_number),
                role: Set(role),
                ..Default::default()
            },
        )
        .await?;

    Ok(user::Entity::find_by_id(id)
        .one(db)
        .await?
        .ok_or(crate::errors::Error::NotFound { entity: "user", id })?)
}

/// Creates a paid transaction for `user_id` with one schedule and one detail line per price.
///
/// `hours_after_epoch` orders transactions in time: larger is newer.
pub async fn create_test_order(
    db: &DatabaseConnection,
    transaction_id: &str,
    user_id: i64,
    hours_after_epoch: i64,
    prices: &[u32],
) -> Result<transaction::Model> {
    let base = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).single().unwrap_or_default();
    let time = base + Duration::hours(hours_after_epoch);

    let order = transaction::ActiveModel {
        transaction_id: Set(transaction_id.to_string()),
        user_id: Set(user_id),
        order_id: Set(format!("ORDER-{transaction_id}")),
        payment_type: Set("bank_transfer".to_string()),
        payment_url: Set("https://pay.example.com/redirect".to_string()),
        payment_status: Set(PaymentStatus::Success),
        total_price: Set(prices.iter().sum()),
        transaction_time: Set(Some(time)),
        settlement_time: Set(Some(time)),
        fraud_status: Set("accept".to_string()),
    }
    .insert(db)
    .await?;

    for (slot, price) in prices.iter().enumerate() {
        let booked = schedule::ActiveModel {
            user_id: Set(Some(user_id)),
            field_id: Set(None),
            date: Set(time + Duration::days(1) + Duration::hours(i64::try_from(slot).unwrap_or(0))),
            status: Set(ScheduleStatus::Sold),
            ..Default::default()
        }
        .insert(db)
        .await?;

        transaction_detail::ActiveModel {
            transaction_id: Set(transaction_id.to_string()),
            schedule_id: Set(booked.id),
            name: Set(format!("Slot {slot}")),
            price: Set(*price),
            ..Default::default()
        }
        .insert(db)
        .await?;
    }

    Ok(order)
}

/// Sets up a complete test environment with one field.
/// Returns (db, field) for common test scenarios.
pub async fn setup_with_field() -> Result<(DatabaseConnection, field::Model)> {
    let db = setup_test_db().await?;
    let field = create_test_field(&db, "Test Field").await?;
    Ok((db, field))
}
