//! Field entity - A rentable sports field.
//!
//! Each field has a name, a type (e.g. "futsal", "badminton"), a short description
//! and a rental price. Reservations against a field are tracked as schedules.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Field database model
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "fields")]
pub struct Model {
    /// Unique identifier for the field
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Display name of the field
    #[sea_orm(column_type = "String(StringLen::N(100))")]
    pub name: String,
    /// Kind of field, stored in the `type` column
    #[sea_orm(column_name = "type", column_type = "String(StringLen::N(50))")]
    pub field_type: String,
    /// Free-form description
    #[sea_orm(column_type = "Text")]
    pub description: String,
    /// Rental price in the smallest currency unit
    pub price: u32,
}

/// Defines relationships between Field and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// One field has many schedules
    #[sea_orm(has_many = "super::schedule::Entity")]
    Schedules,
}

impl Related<super::schedule::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Schedules.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
