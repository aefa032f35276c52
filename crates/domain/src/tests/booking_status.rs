// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{BookingStatus, DomainError};
use std::str::FromStr;

#[test]
fn test_booking_status_default_is_pending() {
    assert_eq!(BookingStatus::default(), BookingStatus::Pending);
}

#[test]
fn test_booking_status_as_str_round_trips() {
    for status in [
        BookingStatus::Pending,
        BookingStatus::Paid,
        BookingStatus::Cancelled,
    ] {
        let parsed: BookingStatus = BookingStatus::from_str(status.as_str())
            .unwrap_or_else(|_| panic!("{status} should parse"));
        assert_eq!(parsed, status);
    }
}

#[test]
fn test_booking_status_rejects_unknown_string() {
    let result: Result<BookingStatus, DomainError> = BookingStatus::from_str("Refunded");
    assert_eq!(
        result,
        Err(DomainError::InvalidStatus(String::from("Refunded")))
    );
}

#[test]
fn test_pending_can_transition_to_paid_and_cancelled() {
    assert!(BookingStatus::Pending.can_transition_to(BookingStatus::Paid));
    assert!(BookingStatus::Pending.can_transition_to(BookingStatus::Cancelled));
}

#[test]
fn test_paid_can_only_transition_to_cancelled() {
    assert!(BookingStatus::Paid.can_transition_to(BookingStatus::Cancelled));
    assert!(!BookingStatus::Paid.can_transition_to(BookingStatus::Pending));
    assert!(!BookingStatus::Paid.can_transition_to(BookingStatus::Paid));
}

#[test]
fn test_cancelled_is_terminal() {
    assert!(!BookingStatus::Cancelled.can_transition_to(BookingStatus::Pending));
    assert!(!BookingStatus::Cancelled.can_transition_to(BookingStatus::Paid));
    assert!(!BookingStatus::Cancelled.can_transition_to(BookingStatus::Cancelled));
}

#[test]
fn test_no_self_transitions() {
    for status in [
        BookingStatus::Pending,
        BookingStatus::Paid,
        BookingStatus::Cancelled,
    ] {
        assert!(!status.can_transition_to(status));
    }
}

#[test]
fn test_is_active_covers_pending_and_paid_only() {
    assert!(BookingStatus::Pending.is_active());
    assert!(BookingStatus::Paid.is_active());
    assert!(!BookingStatus::Cancelled.is_active());
}

#[test]
fn test_display_matches_as_str() {
    assert_eq!(BookingStatus::Pending.to_string(), "Pending");
    assert_eq!(BookingStatus::Paid.to_string(), "Paid");
    assert_eq!(BookingStatus::Cancelled.to_string(), "Cancelled");
}
