//! Entity module - Contains all SeaORM entity definitions for the database.
//! These entities represent the database tables and their relationships.
//! Each entity has a Model struct for data and an Entity struct for operations.

pub mod field;
pub mod schedule;
pub mod transaction;
pub mod transaction_detail;
pub mod user;

// Re-export specific types to avoid conflicts
pub use field::{Column as FieldColumn, Entity as Field, Model as FieldModel};
pub use schedule::{
    Column as ScheduleColumn, Entity as Schedule, Model as ScheduleModel, ScheduleStatus,
};
pub use transaction::{
    Column as TransactionColumn, Entity as Transaction, Model as TransactionModel, PaymentStatus,
};
pub use transaction_detail::{
    Column as TransactionDetailColumn, Entity as TransactionDetail,
    Model as TransactionDetailModel,
};
pub use user::{Column as UserColumn, Entity as User, Model as UserModel, Role};
