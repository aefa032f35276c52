// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Administrative bulk mutations.
//!
//! Each bulk operation runs inside one transaction opened by the
//! adapter: either every affected booking is mutated or none is.

use crate::diesel_schema::bookings;
use crate::error::PersistenceError;
use crate::mutations::bookings as booking_mutations;
use crate::queries::bookings as booking_queries;
use diesel::prelude::*;
use marquee_domain::BookingStatus;
use tracing::info;

/// Cancel every Pending booking, releasing its holds.
///
/// Paid and Cancelled bookings are untouched. Pending bookings carry no
/// payment, so no payment rows are affected.
///
/// # Errors
///
/// Returns an error if any individual cancellation fails; the
/// surrounding transaction then rolls back every cancellation.
pub fn cancel_all_pending(conn: &mut SqliteConnection) -> Result<usize, PersistenceError> {
    let pending: Vec<i64> = booking_queries::booking_ids_in_status(conn, BookingStatus::Pending)?;
    for &booking_id in &pending {
        booking_mutations::release_seats(conn, booking_id)?;
        booking_mutations::set_status(conn, booking_id, BookingStatus::Cancelled)?;
    }
    info!(count = pending.len(), "cancelled all pending bookings");
    Ok(pending.len())
}

/// Delete every Cancelled booking row.
///
/// Cancelled bookings hold no seats and carry no payment, so deletion
/// touches only the booking ledger. A second call finds nothing and
/// returns 0.
///
/// # Errors
///
/// Returns an error if the delete fails.
pub fn clear_cancelled(conn: &mut SqliteConnection) -> Result<usize, PersistenceError> {
    let deleted: usize = diesel::delete(
        bookings::table.filter(bookings::status.eq(BookingStatus::Cancelled.as_str())),
    )
    .execute(conn)?;
    info!(count = deleted, "cleared cancelled bookings");
    Ok(deleted)
}
