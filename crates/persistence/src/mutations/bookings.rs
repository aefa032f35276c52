// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Booking lifecycle mutations: creation, seat reassignment, cancellation.

use crate::data_models::NewBooking;
use crate::diesel_schema::{bookings, show_seats};
use crate::error::PersistenceError;
use crate::mutations::parse_status;
use crate::queries::{availability, bookings as booking_queries};
use crate::sqlite;
use diesel::prelude::*;
use marquee_domain::{Booking, BookingStatus, validate_seat_request};
use tracing::debug;

/// Create a Pending booking and claim every requested seat.
///
/// All-or-nothing: if any seat is missing from the show's theater or
/// held by another booking, the surrounding transaction rolls back and
/// no booking row survives.
///
/// # Errors
///
/// Returns `InvalidSeatRequest` for an empty or duplicated seat list,
/// `NotFound` for a missing user or show, `SeatNotInTheater` or
/// `SeatUnavailable` for a bad seat request, or a database error.
pub fn create_booking(
    conn: &mut SqliteConnection,
    user_id: i64,
    show_id: i64,
    seat_numbers: &[u32],
    created_at: &str,
) -> Result<Booking, PersistenceError> {
    validate_seat_request(seat_numbers)
        .map_err(|e| PersistenceError::InvalidSeatRequest(e.to_string()))?;
    if !crate::queries::catalog::user_exists(conn, user_id)? {
        return Err(PersistenceError::NotFound(format!("User {user_id}")));
    }
    if crate::queries::catalog::get_show(conn, show_id)?.is_none() {
        return Err(PersistenceError::NotFound(format!("Show {show_id}")));
    }

    let record = NewBooking {
        user_id,
        show_id,
        status: BookingStatus::Pending.as_str().to_string(),
        created_at: created_at.to_string(),
    };
    diesel::insert_into(bookings::table)
        .values(&record)
        .execute(conn)?;
    let booking_id: i64 = sqlite::get_last_insert_rowid(conn)?;

    claim_seats(conn, booking_id, show_id, seat_numbers)?;

    debug!(booking_id, user_id, show_id, "created booking");

    let mut held: Vec<u32> = seat_numbers.to_vec();
    held.sort_unstable();
    Ok(Booking::with_id(
        booking_id,
        user_id,
        show_id,
        BookingStatus::Pending,
        created_at.to_string(),
        held,
    ))
}

/// Replace a booking's hold set with a new one of the same size.
///
/// The current holds are released and the new seats claimed inside the
/// surrounding transaction; a seat held by the booking itself is
/// trivially claimable, while a seat held by any other booking fails
/// the claim and rolls the whole swap back, leaving the original hold
/// set untouched.
///
/// # Errors
///
/// Returns `InvalidSeatRequest` for an empty or duplicated seat list,
/// `NotFound` for a missing booking, `InvalidState` for a Cancelled
/// one, `SeatCountMismatch` when the request size differs from the
/// current hold count, or the seat-claim errors.
pub fn reassign_seats(
    conn: &mut SqliteConnection,
    booking_id: i64,
    new_seat_numbers: &[u32],
) -> Result<Vec<u32>, PersistenceError> {
    validate_seat_request(new_seat_numbers)
        .map_err(|e| PersistenceError::InvalidSeatRequest(e.to_string()))?;
    let booking = booking_queries::get_booking(conn, booking_id)?
        .ok_or_else(|| PersistenceError::NotFound(format!("Booking {booking_id}")))?;
    let status: BookingStatus = parse_status(&booking.status)?;
    if !status.is_active() {
        return Err(PersistenceError::InvalidState {
            booking_id,
            status: booking.status,
        });
    }

    let current: Vec<u32> = booking_queries::booking_seat_numbers(conn, booking_id)?;
    if new_seat_numbers.len() != current.len() {
        return Err(PersistenceError::SeatCountMismatch {
            expected: current.len(),
            actual: new_seat_numbers.len(),
        });
    }

    release_seats(conn, booking_id)?;
    claim_seats(conn, booking_id, booking.show_id, new_seat_numbers)?;

    debug!(booking_id, "reassigned seats");

    let mut held: Vec<u32> = new_seat_numbers.to_vec();
    held.sort_unstable();
    Ok(held)
}

/// Cancel a single booking: release its holds, delete its payment if
/// one exists, and mark it Cancelled.
///
/// # Errors
///
/// Returns `NotFound` for a missing booking or `InvalidState` when the
/// booking is already Cancelled.
pub fn cancel_booking(conn: &mut SqliteConnection, booking_id: i64) -> Result<(), PersistenceError> {
    let booking = booking_queries::get_booking(conn, booking_id)?
        .ok_or_else(|| PersistenceError::NotFound(format!("Booking {booking_id}")))?;
    let status: BookingStatus = parse_status(&booking.status)?;
    if !status.can_transition_to(BookingStatus::Cancelled) {
        return Err(PersistenceError::InvalidState {
            booking_id,
            status: booking.status,
        });
    }

    // A Paid booking loses its payment on cancellation so that a
    // payment row only ever belongs to a Paid booking.
    crate::mutations::payments::delete_payment_if_present(conn, booking_id)?;

    release_seats(conn, booking_id)?;
    set_status(conn, booking_id, BookingStatus::Cancelled)?;

    debug!(booking_id, "cancelled booking");
    Ok(())
}

/// Claim every seat in `seat_numbers` for `booking_id`.
///
/// A seat already held by `booking_id` is a no-op claim; a seat held by
/// any other booking fails with `SeatUnavailable`.
pub(crate) fn claim_seats(
    conn: &mut SqliteConnection,
    booking_id: i64,
    show_id: i64,
    seat_numbers: &[u32],
) -> Result<(), PersistenceError> {
    for &seat_number in seat_numbers {
        let row = availability::resolve_show_seat(conn, show_id, seat_number)?
            .ok_or(PersistenceError::SeatNotInTheater { seat_number })?;

        if let Some(holder) = row.booking_id
            && holder != booking_id
        {
            return Err(PersistenceError::SeatUnavailable { seat_number });
        }

        diesel::update(show_seats::table.filter(show_seats::show_seat_id.eq(row.show_seat_id)))
            .set(show_seats::booking_id.eq(Some(booking_id)))
            .execute(conn)?;
    }
    Ok(())
}

/// Release every hold belonging to `booking_id`.
pub(crate) fn release_seats(
    conn: &mut SqliteConnection,
    booking_id: i64,
) -> Result<usize, PersistenceError> {
    let released: usize =
        diesel::update(show_seats::table.filter(show_seats::booking_id.eq(booking_id)))
            .set(show_seats::booking_id.eq(None::<i64>))
            .execute(conn)?;
    Ok(released)
}

/// Set a booking's status column.
pub(crate) fn set_status(
    conn: &mut SqliteConnection,
    booking_id: i64,
    status: BookingStatus,
) -> Result<(), PersistenceError> {
    diesel::update(bookings::table.filter(bookings::booking_id.eq(booking_id)))
        .set(bookings::status.eq(status.as_str()))
        .execute(conn)?;
    Ok(())
}
