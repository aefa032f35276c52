// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{
    DomainError, validate_reassignment_request, validate_seat_request, validate_user_fields,
};

#[test]
fn test_validate_user_fields_accepts_valid_user() {
    let result: Result<(), DomainError> =
        validate_user_fields("Ada", "Lovelace", "ada@example.com");
    assert!(result.is_ok());
}

#[test]
fn test_validate_user_fields_rejects_empty_first_name() {
    let result: Result<(), DomainError> = validate_user_fields("", "Lovelace", "ada@example.com");
    assert_eq!(
        result,
        Err(DomainError::InvalidName {
            field: String::from("first name"),
            reason: String::from("must not be empty"),
        })
    );
}

#[test]
fn test_validate_user_fields_rejects_whitespace_last_name() {
    let result: Result<(), DomainError> = validate_user_fields("Ada", "  ", "ada@example.com");
    assert!(matches!(result, Err(DomainError::InvalidName { .. })));
}

#[test]
fn test_validate_user_fields_rejects_overlong_name() {
    let long_name: String = "x".repeat(33);
    let result: Result<(), DomainError> =
        validate_user_fields(&long_name, "Lovelace", "ada@example.com");
    assert!(matches!(result, Err(DomainError::InvalidName { .. })));
}

#[test]
fn test_validate_user_fields_accepts_name_at_limit() {
    let name_at_limit: String = "x".repeat(32);
    let result: Result<(), DomainError> =
        validate_user_fields(&name_at_limit, "Lovelace", "ada@example.com");
    assert!(result.is_ok());
}

#[test]
fn test_validate_user_fields_rejects_email_without_at() {
    let result: Result<(), DomainError> = validate_user_fields("Ada", "Lovelace", "ada.example");
    assert!(matches!(result, Err(DomainError::InvalidEmail(_))));
}

#[test]
fn test_validate_user_fields_rejects_email_missing_host() {
    let result: Result<(), DomainError> = validate_user_fields("Ada", "Lovelace", "ada@");
    assert!(matches!(result, Err(DomainError::InvalidEmail(_))));
}

#[test]
fn test_validate_user_fields_rejects_overlong_email() {
    let long_email: String = format!("{}@example.com", "x".repeat(64));
    let result: Result<(), DomainError> = validate_user_fields("Ada", "Lovelace", &long_email);
    assert!(matches!(result, Err(DomainError::InvalidEmail(_))));
}

#[test]
fn test_validate_seat_request_accepts_distinct_seats() {
    let result: Result<(), DomainError> = validate_seat_request(&[5, 6, 12]);
    assert!(result.is_ok());
}

#[test]
fn test_validate_seat_request_rejects_empty_list() {
    let result: Result<(), DomainError> = validate_seat_request(&[]);
    assert_eq!(result, Err(DomainError::EmptySeatRequest));
}

#[test]
fn test_validate_seat_request_rejects_duplicates() {
    let result: Result<(), DomainError> = validate_seat_request(&[3, 7, 3]);
    assert_eq!(result, Err(DomainError::DuplicateSeatNumber(3)));
}

#[test]
fn test_validate_reassignment_request_accepts_matching_count() {
    let result: Result<(), DomainError> = validate_reassignment_request(3, &[10, 11, 12]);
    assert!(result.is_ok());
}

#[test]
fn test_validate_reassignment_request_rejects_count_mismatch() {
    let result: Result<(), DomainError> = validate_reassignment_request(2, &[10, 11, 12]);
    assert_eq!(
        result,
        Err(DomainError::SeatCountMismatch {
            expected: 2,
            actual: 3,
        })
    );
}

#[test]
fn test_validate_reassignment_request_rejects_empty_list_first() {
    let result: Result<(), DomainError> = validate_reassignment_request(2, &[]);
    assert_eq!(result, Err(DomainError::EmptySeatRequest));
}

#[test]
fn test_validate_reassignment_request_rejects_duplicates() {
    let result: Result<(), DomainError> = validate_reassignment_request(2, &[4, 4]);
    assert_eq!(result, Err(DomainError::DuplicateSeatNumber(4)));
}
