//! Property tests for the approval state machine.

use proptest::prelude::*;

use super::error::ApprovalError;
use super::service::ApprovalService;
use super::types::{Decision, RequestStatus};

fn status_strategy() -> impl Strategy<Value = RequestStatus> {
    prop_oneof![
        Just(RequestStatus::Pending),
        Just(RequestStatus::Approved),
        Just(RequestStatus::Rejected),
    ]
}

fn decision_strategy() -> impl Strategy<Value = Decision> {
    prop_oneof![Just(Decision::Approved), Just(Decision::Rejected)]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Terminal statuses reject every decision; Pending accepts every one.
    #[test]
    fn prop_only_pending_is_decidable(
        current in status_strategy(),
        decision in decision_strategy(),
    ) {
        let result = ApprovalService::decide(current, decision, "Approver");
        if current.is_terminal() {
            prop_assert!(matches!(result, Err(ApprovalError::AlreadyDecided(_))));
        } else {
            prop_assert!(result.is_ok());
        }
    }

    /// A successful decision always lands in a terminal state, so a second
    /// decision on the result is always rejected.
    #[test]
    fn prop_decisions_are_single_shot(
        first in decision_strategy(),
        second in decision_strategy(),
    ) {
        let after_first = ApprovalService::decide(RequestStatus::Pending, first, "Approver").unwrap();
        prop_assert!(after_first.is_terminal());
        prop_assert!(matches!(
            ApprovalService::decide(after_first, second, "Approver"),
            Err(ApprovalError::AlreadyDecided(_))
        ));
    }

    /// A blank approver name is rejected regardless of state or decision.
    #[test]
    fn prop_blank_approver_rejected(
        current in status_strategy(),
        decision in decision_strategy(),
        blank in "\\s*",
    ) {
        prop_assert!(matches!(
            ApprovalService::decide(current, decision, &blank),
            Err(ApprovalError::ApproverRequired)
        ));
    }

    /// Status round-trips through its string form.
    #[test]
    fn prop_status_string_round_trip(status in status_strategy()) {
        prop_assert_eq!(RequestStatus::parse(status.as_str()), Some(status));
    }
}
