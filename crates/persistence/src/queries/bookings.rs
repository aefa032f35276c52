// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Booking and payment ledger queries.

use crate::data_models::{BookingRow, PaymentRow};
use crate::diesel_schema::{bookings, cinema_seats, payments, show_seats};
use crate::error::PersistenceError;
use crate::queries::availability::seat_numbers_from_rows;
use diesel::prelude::*;
use marquee_domain::BookingStatus;

/// Fetch a booking row by ID.
///
/// # Errors
///
/// Returns an error if the query fails.
pub fn get_booking(
    conn: &mut SqliteConnection,
    booking_id: i64,
) -> Result<Option<BookingRow>, PersistenceError> {
    bookings::table
        .filter(bookings::booking_id.eq(booking_id))
        .first::<BookingRow>(conn)
        .optional()
        .map_err(|e| PersistenceError::QueryFailed(format!("get_booking: {e}")))
}

/// Seat numbers currently held by a booking, ascending.
///
/// # Errors
///
/// Returns an error if the query fails.
pub fn booking_seat_numbers(
    conn: &mut SqliteConnection,
    booking_id: i64,
) -> Result<Vec<u32>, PersistenceError> {
    let rows: Vec<i32> = show_seats::table
        .inner_join(cinema_seats::table)
        .filter(show_seats::booking_id.eq(booking_id))
        .order(cinema_seats::seat_number.asc())
        .select(cinema_seats::seat_number)
        .load::<i32>(conn)
        .map_err(|e| PersistenceError::QueryFailed(format!("booking_seat_numbers: {e}")))?;

    seat_numbers_from_rows(&rows)
}

/// Pending and Paid bookings belonging to a user.
///
/// # Errors
///
/// Returns an error if the query fails.
pub fn active_bookings_for_user(
    conn: &mut SqliteConnection,
    user_id: i64,
) -> Result<Vec<BookingRow>, PersistenceError> {
    bookings::table
        .filter(bookings::user_id.eq(user_id))
        .filter(bookings::status.eq_any([
            BookingStatus::Pending.as_str(),
            BookingStatus::Paid.as_str(),
        ]))
        .order(bookings::booking_id.asc())
        .load::<BookingRow>(conn)
        .map_err(|e| PersistenceError::QueryFailed(format!("active_bookings_for_user: {e}")))
}

/// Fetch the payment attached to a booking, if any.
///
/// # Errors
///
/// Returns an error if the query fails.
pub fn get_payment(
    conn: &mut SqliteConnection,
    booking_id: i64,
) -> Result<Option<PaymentRow>, PersistenceError> {
    payments::table
        .filter(payments::booking_id.eq(booking_id))
        .first::<PaymentRow>(conn)
        .optional()
        .map_err(|e| PersistenceError::QueryFailed(format!("get_payment: {e}")))
}

/// IDs of all bookings in the given status, ascending.
///
/// # Errors
///
/// Returns an error if the query fails.
pub fn booking_ids_in_status(
    conn: &mut SqliteConnection,
    status: BookingStatus,
) -> Result<Vec<i64>, PersistenceError> {
    bookings::table
        .filter(bookings::status.eq(status.as_str()))
        .order(bookings::booking_id.asc())
        .select(bookings::booking_id)
        .load::<i64>(conn)
        .map_err(|e| PersistenceError::QueryFailed(format!("booking_ids_in_status: {e}")))
}
