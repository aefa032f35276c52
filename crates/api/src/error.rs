// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Error types for the API layer.
//!
//! [`BookingError`] is the API contract. Domain and persistence errors
//! are mapped through the explicit translation functions below; no
//! store error crosses the boundary untranslated.

use marquee_domain::DomainError;
use marquee_persistence::PersistenceError;
use thiserror::Error;

/// API-level errors.
///
/// Every variant carries enough information (kind plus offending
/// identifier) for the caller to decide whether to retry with new
/// input or abort.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum BookingError {
    /// A referenced booking, payment, user, show, or theater does not exist.
    #[error("Not found: {resource}")]
    NotFound {
        /// Human-readable name of the missing resource.
        resource: String,
    },

    /// The requested seat is already held by another active booking.
    #[error("Seat {seat_number} is unavailable")]
    SeatUnavailable {
        /// The contested seat number.
        seat_number: u32,
    },

    /// Two input values in one request map to the same seat.
    #[error("Seat {seat_number} was requested more than once")]
    DuplicateSeatRequest {
        /// The repeated seat number.
        seat_number: u32,
    },

    /// The booking's current status forbids the operation.
    #[error("Booking {booking_id} is {status}; operation not permitted")]
    InvalidState {
        /// The booking the operation targeted.
        booking_id: i64,
        /// Its current status.
        status: String,
    },

    /// Malformed input: empty seat list, seat count mismatch, seat not
    /// in the show's theater, or invalid user fields.
    #[error("Validation failed: {message}")]
    Validation {
        /// What was wrong with the input.
        message: String,
    },

    /// An infrastructure failure not expressible in the API contract.
    #[error("Internal error: {message}")]
    Internal {
        /// Diagnostic detail.
        message: String,
    },
}

/// Translates a domain validation error into the API contract.
#[must_use]
pub fn translate_domain_error(err: DomainError) -> BookingError {
    match err {
        DomainError::DuplicateSeatNumber(seat_number) => {
            BookingError::DuplicateSeatRequest { seat_number }
        }
        DomainError::EmptySeatRequest
        | DomainError::SeatCountMismatch { .. }
        | DomainError::InvalidName { .. }
        | DomainError::InvalidEmail(_)
        | DomainError::InvalidStatus(_) => BookingError::Validation {
            message: err.to_string(),
        },
    }
}

/// Translates a persistence error into the API contract.
#[must_use]
pub fn translate_persistence_error(err: PersistenceError) -> BookingError {
    match err {
        PersistenceError::NotFound(resource) => BookingError::NotFound { resource },
        PersistenceError::SeatUnavailable { seat_number } => {
            BookingError::SeatUnavailable { seat_number }
        }
        PersistenceError::SeatNotInTheater { seat_number } => BookingError::Validation {
            message: format!("Seat {seat_number} does not exist in the show's theater"),
        },
        PersistenceError::InvalidSeatRequest(reason) => BookingError::Validation {
            message: format!("Invalid seat request: {reason}"),
        },
        PersistenceError::SeatCountMismatch { expected, actual } => BookingError::Validation {
            message: format!(
                "Seat count mismatch: booking holds {expected} seats but {actual} were requested"
            ),
        },
        PersistenceError::InvalidState { booking_id, status } => {
            BookingError::InvalidState { booking_id, status }
        }
        PersistenceError::DatabaseError(_)
        | PersistenceError::DatabaseConnectionFailed(_)
        | PersistenceError::MigrationFailed(_)
        | PersistenceError::QueryFailed(_)
        | PersistenceError::InitializationError(_)
        | PersistenceError::ForeignKeyEnforcementNotEnabled
        | PersistenceError::InvalidStatus(_)
        | PersistenceError::Other(_) => BookingError::Internal {
            message: err.to_string(),
        },
    }
}
