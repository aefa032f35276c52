// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Payment ledger mutations.
//!
//! Attaching a payment is the only Pending → Paid transition; removing
//! one always cancels the booking, so a payment row never outlives its
//! booking's Paid status.

use crate::data_models::NewPayment;
use crate::diesel_schema::payments;
use crate::error::PersistenceError;
use crate::mutations::{bookings as booking_mutations, parse_status};
use crate::queries::bookings as booking_queries;
use crate::sqlite;
use diesel::prelude::*;
use marquee_domain::{BookingStatus, Payment};
use tracing::debug;

/// Attach a payment to a Pending booking and transition it to Paid.
///
/// # Errors
///
/// Returns `NotFound` for a missing booking or `InvalidState` when the
/// booking is not Pending or already carries a payment.
pub fn attach_payment(
    conn: &mut SqliteConnection,
    booking_id: i64,
    amount_cents: i64,
    paid_at: &str,
) -> Result<Payment, PersistenceError> {
    let booking = booking_queries::get_booking(conn, booking_id)?
        .ok_or_else(|| PersistenceError::NotFound(format!("Booking {booking_id}")))?;
    let status: BookingStatus = parse_status(&booking.status)?;
    if !status.can_transition_to(BookingStatus::Paid) {
        return Err(PersistenceError::InvalidState {
            booking_id,
            status: booking.status,
        });
    }
    if booking_queries::get_payment(conn, booking_id)?.is_some() {
        return Err(PersistenceError::InvalidState {
            booking_id,
            status: booking.status,
        });
    }

    let record = NewPayment {
        booking_id,
        amount_cents,
        paid_at: paid_at.to_string(),
    };
    diesel::insert_into(payments::table)
        .values(&record)
        .execute(conn)?;
    let payment_id: i64 = sqlite::get_last_insert_rowid(conn)?;

    booking_mutations::set_status(conn, booking_id, BookingStatus::Paid)?;

    debug!(booking_id, payment_id, amount_cents, "attached payment");
    Ok(Payment::with_id(
        payment_id,
        booking_id,
        amount_cents,
        paid_at.to_string(),
    ))
}

/// Delete a booking's payment and cancel the booking.
///
/// Removing the payment leaves no state in which the booking could
/// legitimately stay Paid, so the two writes happen together.
///
/// # Errors
///
/// Returns `NotFound` when the booking or its payment does not exist.
pub fn remove_payment(
    conn: &mut SqliteConnection,
    booking_id: i64,
) -> Result<(), PersistenceError> {
    if booking_queries::get_booking(conn, booking_id)?.is_none() {
        return Err(PersistenceError::NotFound(format!("Booking {booking_id}")));
    }
    let deleted: usize =
        diesel::delete(payments::table.filter(payments::booking_id.eq(booking_id)))
            .execute(conn)?;
    if deleted == 0 {
        return Err(PersistenceError::NotFound(format!(
            "Payment for booking {booking_id}"
        )));
    }

    booking_mutations::release_seats(conn, booking_id)?;
    booking_mutations::set_status(conn, booking_id, BookingStatus::Cancelled)?;

    debug!(booking_id, "removed payment and cancelled booking");
    Ok(())
}

/// Delete a booking's payment row when one exists.
pub(crate) fn delete_payment_if_present(
    conn: &mut SqliteConnection,
    booking_id: i64,
) -> Result<(), PersistenceError> {
    diesel::delete(payments::table.filter(payments::booking_id.eq(booking_id)))
        .execute(conn)?;
    Ok(())
}
