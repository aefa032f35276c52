// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Persistence layer for the Marquee Ticketing System.
//!
//! This crate is the booking ledger, payment ledger, seat catalog, and
//! seat availability index, built on Diesel over `SQLite`.
//!
//! ## Transactional model
//!
//! Every lifecycle operation (create, reassign, pay, cancel, bulk
//! cancel, cleanup) runs inside a single `immediate_transaction`. The
//! availability read and the subsequent seat claim are therefore atomic
//! with respect to any other connection, which closes the check-then-act
//! window: two requests racing for the same seat serialize, and the
//! loser observes the winner's committed hold.
//!
//! Methods take `&mut self`; callers sharing one store across threads
//! wrap it in `Arc<Mutex<_>>`.
//!
//! ## Testing
//!
//! Tests run against unique in-memory databases. Each database name
//! comes from an atomic counter, so parallel tests never collide.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(clippy::multiple_crate_versions)]

use diesel::SqliteConnection;
use marquee_domain::{Booking, Payment, ShowSeat};
use std::path::Path;
use std::sync::atomic::{AtomicU64, Ordering};

mod data_models;
mod diesel_schema;
mod error;
mod mutations;
mod queries;
mod sqlite;

#[cfg(test)]
mod tests;

pub use data_models::{BookingRow, PaymentRow, ShowRow, TheaterRow, UserRow};
pub use error::PersistenceError;

/// Atomic counter for generating unique in-memory database names.
///
/// This ensures deterministic test isolation by eliminating time-based collisions.
/// Each call to `new_in_memory()` receives a unique sequential ID.
static DB_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Persistence adapter for the ticketing store.
///
/// Owns one `SQLite` connection; every lifecycle method opens its own
/// transaction on it.
pub struct Persistence {
    conn: SqliteConnection,
}

impl Persistence {
    /// Creates a new persistence adapter with an in-memory `SQLite` database.
    ///
    /// Each call receives a unique database instance via atomic counter,
    /// ensuring deterministic test isolation without time-based collisions.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be initialized.
    pub fn new_in_memory() -> Result<Self, PersistenceError> {
        let db_id = DB_COUNTER.fetch_add(1, Ordering::SeqCst);
        let db_name = format!("memdb_test_{db_id}");
        let shared_memory_url = format!("file:{db_name}?mode=memory&cache=shared");

        let mut conn: SqliteConnection = sqlite::initialize_database(&shared_memory_url)?;
        sqlite::verify_foreign_key_enforcement(&mut conn)?;

        Ok(Self { conn })
    }

    /// Creates a new persistence adapter with a file-based `SQLite` database.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be opened or initialized.
    pub fn new_with_file<P: AsRef<Path>>(path: P) -> Result<Self, PersistenceError> {
        let path_str = path.as_ref().to_str().ok_or_else(|| {
            PersistenceError::InitializationError("Invalid database path".to_string())
        })?;

        let mut conn: SqliteConnection = sqlite::initialize_database(path_str)?;

        // WAL mode only applies to file-backed databases
        sqlite::enable_wal_mode(&mut conn)?;
        sqlite::verify_foreign_key_enforcement(&mut conn)?;

        Ok(Self { conn })
    }

    /// Verifies that foreign key enforcement is enabled.
    ///
    /// # Errors
    ///
    /// Returns an error if foreign key enforcement is not enabled.
    pub fn verify_foreign_key_enforcement(&mut self) -> Result<(), PersistenceError> {
        sqlite::verify_foreign_key_enforcement(&mut self.conn)
    }

    // ========================================================================
    // Booking lifecycle
    // ========================================================================

    /// Creates a Pending booking holding all requested seats, or nothing.
    ///
    /// # Errors
    ///
    /// Returns `InvalidSeatRequest` for an empty or duplicated seat
    /// list, `NotFound` for a missing user or show, `SeatNotInTheater`
    /// or `SeatUnavailable` for a bad seat request.
    pub fn create_booking(
        &mut self,
        user_id: i64,
        show_id: i64,
        seat_numbers: &[u32],
    ) -> Result<Booking, PersistenceError> {
        let created_at: String = current_timestamp()?;
        self.conn.immediate_transaction(|conn| {
            mutations::bookings::create_booking(conn, user_id, show_id, seat_numbers, &created_at)
        })
    }

    /// Atomically replaces a booking's hold set with a same-sized one.
    ///
    /// Returns the new hold set in ascending order.
    ///
    /// # Errors
    ///
    /// Returns `InvalidSeatRequest`, `NotFound`, `InvalidState`,
    /// `SeatCountMismatch`, `SeatNotInTheater`, or `SeatUnavailable`;
    /// on any failure the original hold set is untouched.
    pub fn reassign_seats(
        &mut self,
        booking_id: i64,
        new_seat_numbers: &[u32],
    ) -> Result<Vec<u32>, PersistenceError> {
        self.conn.immediate_transaction(|conn| {
            mutations::bookings::reassign_seats(conn, booking_id, new_seat_numbers)
        })
    }

    /// Attaches a payment to a Pending booking and marks it Paid.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` for a missing booking or `InvalidState` when
    /// it is not Pending.
    pub fn attach_payment(
        &mut self,
        booking_id: i64,
        amount_cents: i64,
    ) -> Result<Payment, PersistenceError> {
        let paid_at: String = current_timestamp()?;
        self.conn.immediate_transaction(|conn| {
            mutations::payments::attach_payment(conn, booking_id, amount_cents, &paid_at)
        })
    }

    /// Deletes a booking's payment and cancels the booking.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` when the booking or its payment is missing.
    pub fn remove_payment(&mut self, booking_id: i64) -> Result<(), PersistenceError> {
        self.conn
            .immediate_transaction(|conn| mutations::payments::remove_payment(conn, booking_id))
    }

    /// Cancels an active booking, releasing every held seat.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` for a missing booking or `InvalidState` when
    /// it is already Cancelled.
    pub fn cancel_booking(&mut self, booking_id: i64) -> Result<(), PersistenceError> {
        self.conn
            .immediate_transaction(|conn| mutations::bookings::cancel_booking(conn, booking_id))
    }

    /// Cancels every Pending booking in one transaction.
    ///
    /// Returns the number of bookings cancelled.
    ///
    /// # Errors
    ///
    /// Returns an error if the transaction fails; no partial
    /// cancellation survives.
    pub fn cancel_all_pending(&mut self) -> Result<usize, PersistenceError> {
        self.conn
            .immediate_transaction(mutations::admin::cancel_all_pending)
    }

    /// Deletes every Cancelled booking in one transaction.
    ///
    /// Returns the number of bookings deleted; a second call returns 0.
    ///
    /// # Errors
    ///
    /// Returns an error if the transaction fails.
    pub fn clear_cancelled(&mut self) -> Result<usize, PersistenceError> {
        self.conn
            .immediate_transaction(mutations::admin::clear_cancelled)
    }

    // ========================================================================
    // Read-only surface
    // ========================================================================

    /// Fetches a booking with its status and held seat numbers.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` for a missing booking.
    pub fn booking_details(&mut self, booking_id: i64) -> Result<Booking, PersistenceError> {
        let row: BookingRow = queries::bookings::get_booking(&mut self.conn, booking_id)?
            .ok_or_else(|| PersistenceError::NotFound(format!("Booking {booking_id}")))?;
        let status = mutations::parse_status(&row.status)?;
        let seat_numbers: Vec<u32> =
            queries::bookings::booking_seat_numbers(&mut self.conn, booking_id)?;
        Ok(Booking::with_id(
            row.booking_id,
            row.user_id,
            row.show_id,
            status,
            row.created_at,
            seat_numbers,
        ))
    }

    /// Pending and Paid bookings belonging to a user, with seat numbers.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn active_bookings_for_user(
        &mut self,
        user_id: i64,
    ) -> Result<Vec<Booking>, PersistenceError> {
        let rows: Vec<BookingRow> =
            queries::bookings::active_bookings_for_user(&mut self.conn, user_id)?;
        rows.into_iter()
            .map(|row| {
                let status = mutations::parse_status(&row.status)?;
                let seat_numbers: Vec<u32> =
                    queries::bookings::booking_seat_numbers(&mut self.conn, row.booking_id)?;
                Ok(Booking::with_id(
                    row.booking_id,
                    row.user_id,
                    row.show_id,
                    status,
                    row.created_at,
                    seat_numbers,
                ))
            })
            .collect()
    }

    /// Seat numbers currently held for a show, ascending.
    ///
    /// Evaluated against committed state on every call; never cached.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn held_seats(&mut self, show_id: i64) -> Result<Vec<u32>, PersistenceError> {
        queries::availability::held_seats(&mut self.conn, show_id)
    }

    /// Whether a specific seat is currently held for a show.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn is_seat_held(
        &mut self,
        show_id: i64,
        seat_number: u32,
    ) -> Result<bool, PersistenceError> {
        queries::availability::is_seat_held(&mut self.conn, show_id, seat_number)
    }

    /// Full seat inventory for a show, ordered by seat number.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn list_show_seats(&mut self, show_id: i64) -> Result<Vec<ShowSeat>, PersistenceError> {
        queries::catalog::list_show_seats(&mut self.conn, show_id)
    }

    /// Fetches the theater a show runs in.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` for a missing show.
    pub fn theater_of(&mut self, show_id: i64) -> Result<TheaterRow, PersistenceError> {
        queries::catalog::theater_of(&mut self.conn, show_id)
    }

    /// Whether a user with the given ID exists.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn user_exists(&mut self, user_id: i64) -> Result<bool, PersistenceError> {
        queries::catalog::user_exists(&mut self.conn, user_id)
    }

    /// Fetches a user row by ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn get_user(&mut self, user_id: i64) -> Result<Option<UserRow>, PersistenceError> {
        queries::catalog::get_user(&mut self.conn, user_id)
    }

    /// Fetches the payment attached to a booking, if any.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn get_payment(&mut self, booking_id: i64) -> Result<Option<PaymentRow>, PersistenceError> {
        queries::bookings::get_payment(&mut self.conn, booking_id)
    }

    // ========================================================================
    // Catalog writes
    // ========================================================================

    /// Registers a user.
    ///
    /// # Errors
    ///
    /// Returns a database error, including on a duplicate email.
    pub fn add_user(
        &mut self,
        email: &str,
        first_name: &str,
        last_name: &str,
        phone: Option<&str>,
    ) -> Result<UserRow, PersistenceError> {
        self.conn.immediate_transaction(|conn| {
            mutations::catalog::insert_user(conn, email, first_name, last_name, phone)
        })
    }

    /// Creates a theater with its physical seats.
    ///
    /// # Errors
    ///
    /// Returns an error if the insert fails.
    pub fn add_theater(
        &mut self,
        name: &str,
        seat_numbers: &[u32],
    ) -> Result<TheaterRow, PersistenceError> {
        self.conn
            .immediate_transaction(|conn| mutations::catalog::insert_theater(conn, name, seat_numbers))
    }

    /// Creates a show and its free seat inventory.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` when the theater does not exist.
    pub fn add_show(
        &mut self,
        theater_id: i64,
        movie_title: &str,
        show_date: &str,
        start_time: &str,
    ) -> Result<ShowRow, PersistenceError> {
        self.conn.immediate_transaction(|conn| {
            mutations::catalog::insert_show(conn, theater_id, movie_title, show_date, start_time)
        })
    }
}

/// Current UTC time as an ISO 8601 string.
fn current_timestamp() -> Result<String, PersistenceError> {
    time::OffsetDateTime::now_utc()
        .format(&time::format_description::well_known::Iso8601::DEFAULT)
        .map_err(|e| PersistenceError::Other(format!("Timestamp formatting failed: {e}")))
}
