//! User entity - An account that can book fields.
//!
//! Emails are unique. The password column only ever holds a PHC-format hash,
//! and it is skipped when the model is serialized.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Account role
#[derive(Clone, Copy, Debug, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(20))")]
pub enum Role {
    /// Regular customer
    #[sea_orm(string_value = "user")]
    User,
    /// Venue staff
    #[sea_orm(string_value = "operator")]
    Operator,
    /// Administrator
    #[sea_orm(string_value = "super user")]
    SuperUser,
}

/// User database model
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "users")]
pub struct Model {
    /// Unique identifier for the user
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Display name
    #[sea_orm(column_type = "String(StringLen::N(255))")]
    pub name: String,
    /// Login email, unique across all users
    #[sea_orm(unique, column_type = "String(StringLen::N(255))")]
    pub email: String,
    /// Argon2 PHC hash of the password
    #[serde(skip_serializing)]
    #[sea_orm(column_type = "String(StringLen::N(255))")]
    pub password: String,
    /// Digits only
    #[sea_orm(column_type = "String(StringLen::N(20))")]
    pub phone_number: String,
    /// What the account is allowed to do
    pub role: Role,
}

/// Defines relationships between User and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// One user holds many schedules
    #[sea_orm(has_many = "super::schedule::Entity")]
    Schedules,
    /// One user places many transactions
    #[sea_orm(has_many = "super::transaction::Entity")]
    Transactions,
}

impl Related<super::schedule::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Schedules.def()
    }
}

impl Related<super::transaction::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Transactions.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;

    #[test]
    fn test_serialized_model_omits_password() {
        let model = Model {
            id: 7,
            name: "Budi Santoso".to_string(),
            email: "budi@example.com".to_string(),
            password: "$argon2id$v=19$m=19456,t=2,p=1$c2FsdA$aGFzaA".to_string(),
            phone_number: "081234567890".to_string(),
            role: Role::User,
        };

        let text = toml::to_string(&model).unwrap();
        assert!(text.contains("email = \"budi@example.com\""));
        assert!(text.contains("phone_number = \"081234567890\""));
        assert!(!text.contains("password"));
        assert!(!text.contains("argon2id"));
    }
}
