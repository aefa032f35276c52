// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use std::fmt;

/// Errors produced by domain-level rule validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A name field was empty or exceeded its maximum length.
    InvalidName {
        /// Which field failed validation.
        field: String,
        /// Why it failed.
        reason: String,
    },
    /// The email address was empty, malformed, or too long.
    InvalidEmail(String),
    /// A seat request contained no seats.
    EmptySeatRequest,
    /// The same seat number appeared more than once in one request.
    DuplicateSeatNumber(u32),
    /// A reassignment request did not match the booking's seat count.
    SeatCountMismatch {
        /// The number of seats the booking currently holds.
        expected: usize,
        /// The number of seats the request supplied.
        actual: usize,
    },
    /// An unknown booking status string was encountered.
    InvalidStatus(String),
}

impl fmt::Display for DomainError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidName { field, reason } => {
                write!(f, "Invalid {field}: {reason}")
            }
            Self::InvalidEmail(reason) => write!(f, "Invalid email: {reason}"),
            Self::EmptySeatRequest => write!(f, "Seat request must contain at least one seat"),
            Self::DuplicateSeatNumber(seat_number) => {
                write!(f, "Seat {seat_number} requested more than once")
            }
            Self::SeatCountMismatch { expected, actual } => {
                write!(
                    f,
                    "Seat count mismatch: booking holds {expected} seats but {actual} were requested"
                )
            }
            Self::InvalidStatus(status) => write!(f, "Unknown booking status: {status}"),
        }
    }
}

impl std::error::Error for DomainError {}
