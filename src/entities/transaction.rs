//! Transaction entity - A payment made by a user for one or more schedules.
//!
//! The primary key is the payment gateway's transaction id, so it is a string
//! assigned by the caller rather than generated by the database.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Payment state reported by the gateway
#[derive(Clone, Copy, Debug, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(20))")]
pub enum PaymentStatus {
    /// Waiting for payment
    #[sea_orm(string_value = "unpaid")]
    Unpaid,
    /// Declined or expired
    #[sea_orm(string_value = "rejected")]
    Rejected,
    /// Settled
    #[sea_orm(string_value = "success")]
    Success,
}

/// Transaction database model
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "transactions")]
pub struct Model {
    /// Gateway transaction id
    #[sea_orm(
        primary_key,
        auto_increment = false,
        column_type = "String(StringLen::N(35))"
    )]
    pub transaction_id: String,
    /// User who placed the order
    pub user_id: i64,
    /// Merchant-side order id sent to the gateway
    #[sea_orm(column_type = "String(StringLen::N(100))")]
    pub order_id: String,
    /// Payment channel, e.g. `"bank_transfer"`
    #[sea_orm(column_type = "String(StringLen::N(100))")]
    pub payment_type: String,
    /// Redirect URL for completing the payment
    #[sea_orm(column_type = "String(StringLen::N(255))")]
    pub payment_url: String,
    /// Current payment state
    pub payment_status: PaymentStatus,
    /// Sum of all detail prices
    pub total_price: u32,
    /// When the gateway created the transaction
    pub transaction_time: Option<DateTimeUtc>,
    /// When the payment settled
    pub settlement_time: Option<DateTimeUtc>,
    /// Gateway fraud verdict, e.g. `"accept"`
    #[sea_orm(column_type = "String(StringLen::N(100))")]
    pub fraud_status: String,
}

/// Defines relationships between Transaction and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// Each transaction belongs to one user and goes away with it
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::UserId",
        to = "super::user::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    User,
    /// One transaction has many detail lines
    #[sea_orm(has_many = "super::transaction_detail::Entity")]
    TransactionDetails,
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl Related<super::transaction_detail::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::TransactionDetails.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
