// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Error translation tests.

use crate::error::{BookingError, translate_domain_error, translate_persistence_error};
use crate::handlers;
use crate::request_response::RegisterUserRequest;
use crate::tests::helpers::setup_show_and_user;
use marquee_domain::DomainError;
use marquee_persistence::PersistenceError;

#[test]
fn test_duplicate_seat_number_translates_to_duplicate_seat_request() {
    let translated: BookingError = translate_domain_error(DomainError::DuplicateSeatNumber(7));
    assert_eq!(translated, BookingError::DuplicateSeatRequest { seat_number: 7 });
}

#[test]
fn test_empty_seat_request_translates_to_validation() {
    let translated: BookingError = translate_domain_error(DomainError::EmptySeatRequest);
    assert!(matches!(translated, BookingError::Validation { .. }));
}

#[test]
fn test_invalid_email_translates_to_validation() {
    let translated: BookingError =
        translate_domain_error(DomainError::InvalidEmail(String::from("must not be empty")));
    assert!(matches!(translated, BookingError::Validation { .. }));
}

#[test]
fn test_seat_unavailable_translates_with_seat_number() {
    let translated: BookingError =
        translate_persistence_error(PersistenceError::SeatUnavailable { seat_number: 12 });
    assert_eq!(translated, BookingError::SeatUnavailable { seat_number: 12 });
}

#[test]
fn test_not_found_carries_the_resource() {
    let translated: BookingError =
        translate_persistence_error(PersistenceError::NotFound(String::from("Booking 3")));
    assert_eq!(
        translated,
        BookingError::NotFound {
            resource: String::from("Booking 3"),
        }
    );
}

#[test]
fn test_seat_not_in_theater_translates_to_validation() {
    let translated: BookingError =
        translate_persistence_error(PersistenceError::SeatNotInTheater { seat_number: 99 });
    assert!(matches!(translated, BookingError::Validation { .. }));
}

#[test]
fn test_infrastructure_errors_translate_to_internal() {
    let translated: BookingError = translate_persistence_error(
        PersistenceError::DatabaseError(String::from("disk I/O error")),
    );
    assert!(matches!(translated, BookingError::Internal { .. }));
}

#[test]
fn test_register_user_surfaces_field_validation() {
    let (mut persistence, _, _) = setup_show_and_user();

    let result = handlers::register_user(
        &mut persistence,
        &RegisterUserRequest {
            email: String::from("not-an-email"),
            first_name: String::from("Ada"),
            last_name: String::from("Lovelace"),
            phone: None,
        },
    );

    assert!(matches!(result, Err(BookingError::Validation { .. })));
}

#[test]
fn test_booking_error_display_names_the_offender() {
    let err: BookingError = BookingError::SeatUnavailable { seat_number: 4 };
    assert_eq!(err.to_string(), "Seat 4 is unavailable");

    let err: BookingError = BookingError::InvalidState {
        booking_id: 9,
        status: String::from("Cancelled"),
    };
    assert_eq!(
        err.to_string(),
        "Booking 9 is Cancelled; operation not permitted"
    );
}
