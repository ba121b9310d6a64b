//! Approval workflow error types.

use thiserror::Error;
use uuid::Uuid;

use super::types::RequestStatus;

/// Errors that can occur while deciding a budget request.
#[derive(Debug, Error)]
pub enum ApprovalError {
    /// The request has already been decided; terminal states are final.
    #[error("Request is already {0}, no further transition is allowed")]
    AlreadyDecided(RequestStatus),

    /// An approver name is required to decide a request.
    #[error("An approver name is required")]
    ApproverRequired,

    /// The submitted status string is not a valid request status.
    #[error("Unknown request status: {0}")]
    UnknownStatus(String),

    /// The submitted decision string is not a valid decision.
    #[error("Unknown decision: {0}")]
    UnknownDecision(String),

    /// A request cannot be moved back to PENDING.
    #[error("A request cannot be moved back to PENDING")]
    CannotReopen,

    /// Referenced budget request does not exist.
    #[error("Budget request {0} not found")]
    RequestNotFound(Uuid),

    /// Database error.
    #[error("Database error: {0}")]
    Database(String),
}

impl ApprovalError {
    /// Returns the HTTP status code for this error.
    #[must_use]
    pub fn status_code(&self) -> u16 {
        match self {
            Self::AlreadyDecided(_) => 409,
            Self::ApproverRequired
            | Self::UnknownStatus(_)
            | Self::UnknownDecision(_)
            | Self::CannotReopen => 400,
            Self::RequestNotFound(_) => 404,
            Self::Database(_) => 500,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_already_decided_is_conflict() {
        let err = ApprovalError::AlreadyDecided(RequestStatus::Approved);
        assert_eq!(err.status_code(), 409);
        assert!(err.to_string().contains("APPROVED"));
    }

    #[test]
    fn test_validation_errors_are_400() {
        assert_eq!(ApprovalError::ApproverRequired.status_code(), 400);
        assert_eq!(ApprovalError::UnknownStatus("draft".into()).status_code(), 400);
        assert_eq!(ApprovalError::UnknownDecision("maybe".into()).status_code(), 400);
        assert_eq!(ApprovalError::CannotReopen.status_code(), 400);
    }

    #[test]
    fn test_not_found_is_404() {
        assert_eq!(
            ApprovalError::RequestNotFound(Uuid::nil()).status_code(),
            404
        );
    }

    #[test]
    fn test_database_is_500() {
        assert_eq!(ApprovalError::Database("boom".into()).status_code(), 500);
    }
}
