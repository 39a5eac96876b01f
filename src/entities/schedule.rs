//! Schedule entity - A bookable time slot on a field.
//!
//! A schedule points at the field it belongs to and at the user holding it.
//! Deleting either referenced row nulls the reference instead of cascading.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Booking state of a schedule slot
#[derive(Clone, Copy, Debug, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(20))")]
pub enum ScheduleStatus {
    /// Open for booking
    #[sea_orm(string_value = "available")]
    Available,
    /// Held by a pending transaction
    #[sea_orm(string_value = "reserved")]
    Reserved,
    /// Paid for
    #[sea_orm(string_value = "sold")]
    Sold,
}

/// Schedule database model
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "schedules")]
pub struct Model {
    /// Unique identifier for the schedule
    #[sea_orm(primary_key)]
    pub id: i64,
    /// User holding the slot, cleared when that user is deleted
    pub user_id: Option<i64>,
    /// Field the slot is on, cleared when that field is deleted
    pub field_id: Option<i64>,
    /// Start of the slot
    pub date: DateTimeUtc,
    /// Current booking state
    pub status: ScheduleStatus,
}

/// Defines relationships between Schedule and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// Each schedule belongs to at most one user
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::UserId",
        to = "super::user::Column::Id",
        on_update = "Cascade",
        on_delete = "SetNull"
    )]
    User,
    /// Each schedule belongs to at most one field
    #[sea_orm(
        belongs_to = "super::field::Entity",
        from = "Column::FieldId",
        to = "super::field::Column::Id",
        on_update = "Cascade",
        on_delete = "SetNull"
    )]
    Field,
    /// A sold or reserved schedule appears on one transaction line
    #[sea_orm(has_one = "super::transaction_detail::Entity")]
    TransactionDetail,
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl Related<super::field::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Field.def()
    }
}

impl Related<super::transaction_detail::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::TransactionDetail.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
