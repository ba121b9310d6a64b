//! Stock-movement ledger logic.
//!
//! The ledger is the append-only record of stock changes. Every posting
//! goes through [`LedgerService`] so that the denormalized product balance
//! always equals the net sum of its movements.

pub mod error;
pub mod service;
pub mod types;

#[cfg(test)]
mod service_props;

pub use error::LedgerError;
pub use service::LedgerService;
pub use types::{MovementDraft, MovementType};
