//! Budget-request approval state machine.
//!
//! A request starts PENDING and moves exactly once to APPROVED or REJECTED.
//! Both target states are terminal; the decision that moved it there is
//! recorded as an immutable approval record.

pub mod error;
pub mod service;
pub mod types;

#[cfg(test)]
mod service_props;

pub use error::ApprovalError;
pub use service::ApprovalService;
pub use types::{Decision, RequestStatus};
