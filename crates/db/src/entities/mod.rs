//! `SeaORM` entity definitions for the Stockroom schema.

pub mod account_codes;
pub mod approvals;
pub mod budget_requests;
pub mod categories;
pub mod movements;
pub mod products;
pub mod request_counters;
pub mod sea_orm_active_enums;
pub mod suppliers;
