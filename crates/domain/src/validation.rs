// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use std::collections::HashSet;

/// Maximum length of a user's first or last name.
pub const MAX_NAME_LEN: usize = 32;
/// Maximum length of a user's email address.
pub const MAX_EMAIL_LEN: usize = 64;

/// Validates the identity fields supplied when registering a user.
///
/// Names must be non-empty and at most [`MAX_NAME_LEN`] characters. The
/// email must be non-empty, at most [`MAX_EMAIL_LEN`] characters, and
/// contain an `@` separating two non-empty halves.
///
/// # Errors
/// Returns a `DomainError` describing the first field that failed.
pub fn validate_user_fields(
    first_name: &str,
    last_name: &str,
    email: &str,
) -> Result<(), DomainError> {
    validate_name("first name", first_name)?;
    validate_name("last name", last_name)?;
    validate_email(email)
}

fn validate_name(field: &str, value: &str) -> Result<(), DomainError> {
    if value.trim().is_empty() {
        return Err(DomainError::InvalidName {
            field: field.to_string(),
            reason: "must not be empty".to_string(),
        });
    }
    if value.chars().count() > MAX_NAME_LEN {
        return Err(DomainError::InvalidName {
            field: field.to_string(),
            reason: format!("must be at most {MAX_NAME_LEN} characters"),
        });
    }
    Ok(())
}

fn validate_email(email: &str) -> Result<(), DomainError> {
    if email.trim().is_empty() {
        return Err(DomainError::InvalidEmail("must not be empty".to_string()));
    }
    if email.chars().count() > MAX_EMAIL_LEN {
        return Err(DomainError::InvalidEmail(format!(
            "must be at most {MAX_EMAIL_LEN} characters"
        )));
    }
    let mut parts = email.splitn(2, '@');
    let local = parts.next().unwrap_or_default();
    let host = parts.next().unwrap_or_default();
    if local.is_empty() || host.is_empty() {
        return Err(DomainError::InvalidEmail(
            "must contain a local part and a host separated by '@'".to_string(),
        ));
    }
    Ok(())
}

/// Validates a requested seat list: non-empty and free of duplicates.
///
/// # Errors
/// Returns `EmptySeatRequest` for an empty list or `DuplicateSeatNumber`
/// naming the first repeated seat.
pub fn validate_seat_request(seat_numbers: &[u32]) -> Result<(), DomainError> {
    if seat_numbers.is_empty() {
        return Err(DomainError::EmptySeatRequest);
    }
    let mut seen = HashSet::with_capacity(seat_numbers.len());
    for &seat_number in seat_numbers {
        if !seen.insert(seat_number) {
            return Err(DomainError::DuplicateSeatNumber(seat_number));
        }
    }
    Ok(())
}

/// Validates a seat reassignment request against the booking's current hold.
///
/// Reassignment swaps seats one-for-one; it never grows or shrinks the
/// booking, so the new list must match the current seat count exactly.
///
/// # Errors
/// Returns the seat-list validation errors plus `SeatCountMismatch` when
/// the counts differ.
pub fn validate_reassignment_request(
    current_seat_count: usize,
    new_seat_numbers: &[u32],
) -> Result<(), DomainError> {
    validate_seat_request(new_seat_numbers)?;
    if new_seat_numbers.len() != current_seat_count {
        return Err(DomainError::SeatCountMismatch {
            expected: current_seat_count,
            actual: new_seat_numbers.len(),
        });
    }
    Ok(())
}
