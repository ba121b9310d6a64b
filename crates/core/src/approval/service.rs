//! Approval service for budget-request state transitions.

use super::error::ApprovalError;
use super::types::{Decision, RequestStatus};

/// Stateless validator for approval transitions.
///
/// The repository layer locks the request row, asks this service whether the
/// transition is legal, and only then writes the status change together with
/// the approval record.
pub struct ApprovalService;

impl ApprovalService {
    /// Validates deciding a request and returns the resulting status.
    ///
    /// Requires a non-blank approver name, and rejects any decision on a
    /// request that has already left PENDING.
    ///
    /// # Errors
    ///
    /// Returns `AlreadyDecided` for terminal requests and `ApproverRequired`
    /// when the approver name is blank.
    pub fn decide(
        current: RequestStatus,
        decision: Decision,
        approver_name: &str,
    ) -> Result<RequestStatus, ApprovalError> {
        if approver_name.trim().is_empty() {
            return Err(ApprovalError::ApproverRequired);
        }
        if current.is_terminal() {
            return Err(ApprovalError::AlreadyDecided(current));
        }
        Ok(decision.resulting_status())
    }

    /// Maps a target status (as submitted to the status endpoint) to the
    /// decision that produces it.
    ///
    /// # Errors
    ///
    /// Returns `CannotReopen` for a PENDING target; terminal targets map to
    /// the corresponding decision.
    pub fn decision_for_target(target: RequestStatus) -> Result<Decision, ApprovalError> {
        match target {
            RequestStatus::Pending => Err(ApprovalError::CannotReopen),
            RequestStatus::Approved => Ok(Decision::Approved),
            RequestStatus::Rejected => Ok(Decision::Rejected),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_decide_pending_approve() {
        let result = ApprovalService::decide(RequestStatus::Pending, Decision::Approved, "Alice");
        assert_eq!(result.unwrap(), RequestStatus::Approved);
    }

    #[test]
    fn test_decide_pending_reject() {
        let result = ApprovalService::decide(RequestStatus::Pending, Decision::Rejected, "Bob");
        assert_eq!(result.unwrap(), RequestStatus::Rejected);
    }

    #[rstest]
    #[case(RequestStatus::Approved, Decision::Rejected)]
    #[case(RequestStatus::Approved, Decision::Approved)]
    #[case(RequestStatus::Rejected, Decision::Approved)]
    #[case(RequestStatus::Rejected, Decision::Rejected)]
    fn test_decide_terminal_rejected(#[case] current: RequestStatus, #[case] decision: Decision) {
        let result = ApprovalService::decide(current, decision, "Alice");
        assert!(matches!(result, Err(ApprovalError::AlreadyDecided(s)) if s == current));
    }

    #[test]
    fn test_decide_requires_approver() {
        let result = ApprovalService::decide(RequestStatus::Pending, Decision::Approved, "  ");
        assert!(matches!(result, Err(ApprovalError::ApproverRequired)));
    }

    #[test]
    fn test_decision_for_target() {
        assert_eq!(
            ApprovalService::decision_for_target(RequestStatus::Approved).unwrap(),
            Decision::Approved
        );
        assert_eq!(
            ApprovalService::decision_for_target(RequestStatus::Rejected).unwrap(),
            Decision::Rejected
        );
        assert!(matches!(
            ApprovalService::decision_for_target(RequestStatus::Pending),
            Err(ApprovalError::CannotReopen)
        ));
    }
}
