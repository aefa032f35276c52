// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

/// Errors that can occur during persistence operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PersistenceError {
    /// A database error occurred.
    DatabaseError(String),
    /// Database connection failed.
    DatabaseConnectionFailed(String),
    /// Database migration failed.
    MigrationFailed(String),
    /// Query execution failed.
    QueryFailed(String),
    /// Initialization error.
    InitializationError(String),
    /// Foreign key enforcement is not enabled.
    ForeignKeyEnforcementNotEnabled,
    /// A requested seat is held by another active booking.
    SeatUnavailable { seat_number: u32 },
    /// A requested seat number does not exist for the show's theater.
    SeatNotInTheater { seat_number: u32 },
    /// A seat request was empty or named the same seat twice.
    InvalidSeatRequest(String),
    /// A reassignment request did not match the booking's held seat count.
    SeatCountMismatch { expected: usize, actual: usize },
    /// A booking row carried a status string the state machine does not know.
    InvalidStatus(String),
    /// The operation is not legal for the booking's current status.
    InvalidState { booking_id: i64, status: String },
    /// The requested resource was not found.
    NotFound(String),
    /// A general error occurred.
    Other(String),
}

impl std::fmt::Display for PersistenceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DatabaseError(msg) => write!(f, "Database error: {msg}"),
            Self::DatabaseConnectionFailed(msg) => {
                write!(f, "Database connection failed: {msg}")
            }
            Self::MigrationFailed(msg) => write!(f, "Migration failed: {msg}"),
            Self::QueryFailed(msg) => write!(f, "Query failed: {msg}"),
            Self::InitializationError(msg) => write!(f, "Initialization error: {msg}"),
            Self::ForeignKeyEnforcementNotEnabled => {
                write!(f, "Foreign key enforcement is not enabled")
            }
            Self::SeatUnavailable { seat_number } => {
                write!(f, "Seat {seat_number} is held by another booking")
            }
            Self::SeatNotInTheater { seat_number } => {
                write!(f, "Seat {seat_number} does not exist in the show's theater")
            }
            Self::InvalidSeatRequest(reason) => write!(f, "Invalid seat request: {reason}"),
            Self::SeatCountMismatch { expected, actual } => {
                write!(
                    f,
                    "Seat count mismatch: booking holds {expected} seats but {actual} were requested"
                )
            }
            Self::InvalidStatus(status) => write!(f, "Unknown booking status: {status}"),
            Self::InvalidState { booking_id, status } => {
                write!(
                    f,
                    "Operation not permitted for booking {booking_id} in status {status}"
                )
            }
            Self::NotFound(msg) => write!(f, "Not found: {msg}"),
            Self::Other(msg) => write!(f, "{msg}"),
        }
    }
}

impl std::error::Error for PersistenceError {}

impl From<diesel::result::Error> for PersistenceError {
    fn from(err: diesel::result::Error) -> Self {
        match err {
            diesel::result::Error::NotFound => Self::NotFound("Record not found".to_string()),
            _ => Self::DatabaseError(err.to_string()),
        }
    }
}

impl From<diesel::ConnectionError> for PersistenceError {
    fn from(err: diesel::ConnectionError) -> Self {
        Self::DatabaseConnectionFailed(err.to_string())
    }
}
