//! Order state machine.
//!
//! Validates status transitions. Orders only move forward:
//!
//! ```text
//! PENDING   -> {SHIPPED, CANCELLED}
//! SHIPPED   -> {DELIVERED, CANCELLED}
//! DELIVERED -> {}            (terminal)
//! CANCELLED -> {}            (terminal)
//! ```
//!
//! SHIPPED -> CANCELLED is only reachable through the cancellation
//! operation, which restores stock; the plain status-update path delegates
//! there rather than flipping the row directly.

use crate::domain::errors::OrderError;
use crate::domain::status::OrderStatus;

/// Order state machine for validating transitions.
pub struct OrderStateMachine;

impl OrderStateMachine {
    /// Check if a state transition is valid.
    #[must_use]
    pub fn is_valid_transition(from: OrderStatus, to: OrderStatus) -> bool {
        matches!(
            (from, to),
            (OrderStatus::Pending, OrderStatus::Shipped)
                | (OrderStatus::Pending, OrderStatus::Cancelled)
                | (OrderStatus::Shipped, OrderStatus::Delivered)
                | (OrderStatus::Shipped, OrderStatus::Cancelled)
        )
    }

    /// Validate a state transition.
    ///
    /// # Errors
    ///
    /// Returns [`OrderError::InvalidTransition`] reporting both the current
    /// and the requested status if the transition is not allowed.
    pub fn validate_transition(from: OrderStatus, to: OrderStatus) -> Result<(), OrderError> {
        if Self::is_valid_transition(from, to) {
            Ok(())
        } else {
            Err(OrderError::InvalidTransition { from, to })
        }
    }

    /// Get all valid next states from a given state.
    #[must_use]
    pub fn valid_next_states(from: OrderStatus) -> Vec<OrderStatus> {
        match from {
            OrderStatus::Pending => vec![OrderStatus::Shipped, OrderStatus::Cancelled],
            OrderStatus::Shipped => vec![OrderStatus::Delivered, OrderStatus::Cancelled],
            // Terminal states
            OrderStatus::Delivered | OrderStatus::Cancelled => vec![],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_transitions_from_pending() {
        assert!(OrderStateMachine::is_valid_transition(
            OrderStatus::Pending,
            OrderStatus::Shipped
        ));
        assert!(OrderStateMachine::is_valid_transition(
            OrderStatus::Pending,
            OrderStatus::Cancelled
        ));
    }

    #[test]
    fn pending_cannot_skip_to_delivered() {
        assert!(!OrderStateMachine::is_valid_transition(
            OrderStatus::Pending,
            OrderStatus::Delivered
        ));
    }

    #[test]
    fn shipped_can_deliver_or_cancel() {
        assert!(OrderStateMachine::is_valid_transition(
            OrderStatus::Shipped,
            OrderStatus::Delivered
        ));
        assert!(OrderStateMachine::is_valid_transition(
            OrderStatus::Shipped,
            OrderStatus::Cancelled
        ));
        assert!(!OrderStateMachine::is_valid_transition(
            OrderStatus::Shipped,
            OrderStatus::Pending
        ));
    }

    #[test]
    fn no_transitions_from_terminal_states() {
        for terminal in [OrderStatus::Delivered, OrderStatus::Cancelled] {
            assert!(OrderStateMachine::valid_next_states(terminal).is_empty());
            for to in [
                OrderStatus::Pending,
                OrderStatus::Shipped,
                OrderStatus::Delivered,
                OrderStatus::Cancelled,
            ] {
                assert!(!OrderStateMachine::is_valid_transition(terminal, to));
            }
        }
    }

    #[test]
    fn no_backward_transitions() {
        assert!(!OrderStateMachine::is_valid_transition(
            OrderStatus::Shipped,
            OrderStatus::Pending
        ));
        assert!(!OrderStateMachine::is_valid_transition(
            OrderStatus::Delivered,
            OrderStatus::Shipped
        ));
    }

    #[test]
    fn validate_transition_returns_error_for_invalid() {
        let result =
            OrderStateMachine::validate_transition(OrderStatus::Pending, OrderStatus::Delivered);
        assert_eq!(
            result,
            Err(OrderError::InvalidTransition {
                from: OrderStatus::Pending,
                to: OrderStatus::Delivered,
            })
        );
    }

    #[test]
    fn validate_transition_returns_ok_for_valid() {
        let result =
            OrderStateMachine::validate_transition(OrderStatus::Pending, OrderStatus::Shipped);
        assert!(result.is_ok());
    }

    #[test]
    fn valid_next_states_from_pending() {
        let states = OrderStateMachine::valid_next_states(OrderStatus::Pending);
        assert!(states.contains(&OrderStatus::Shipped));
        assert!(states.contains(&OrderStatus::Cancelled));
        assert!(!states.contains(&OrderStatus::Delivered));
    }
}
