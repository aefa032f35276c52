// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Seat availability queries.
//!
//! A seat is held when its `show_seats.booking_id` is non-null. Because
//! every (show, seat) pair has exactly one row, "held" and "free" are
//! mutually exclusive by construction.

use crate::data_models::ShowSeatRow;
use crate::diesel_schema::{cinema_seats, show_seats};
use crate::error::PersistenceError;
use diesel::prelude::*;
use num_traits::ToPrimitive;

/// Resolve a seat number to the show's inventory row.
///
/// Returns `None` when the seat number does not exist in the show's
/// theater (no `show_seats` row joins to it).
///
/// # Errors
///
/// Returns an error if the query fails.
pub fn resolve_show_seat(
    conn: &mut SqliteConnection,
    show_id: i64,
    seat_number: u32,
) -> Result<Option<ShowSeatRow>, PersistenceError> {
    let seat_number_i32: i32 = seat_number.to_i32().ok_or_else(|| {
        PersistenceError::QueryFailed(format!("seat number {seat_number} out of range"))
    })?;

    show_seats::table
        .inner_join(cinema_seats::table)
        .filter(show_seats::show_id.eq(show_id))
        .filter(cinema_seats::seat_number.eq(seat_number_i32))
        .select((
            show_seats::show_seat_id,
            show_seats::show_id,
            show_seats::seat_id,
            show_seats::booking_id,
        ))
        .first::<ShowSeatRow>(conn)
        .optional()
        .map_err(|e| PersistenceError::QueryFailed(format!("resolve_show_seat: {e}")))
}

/// Seat numbers currently held for a show, ascending.
///
/// # Errors
///
/// Returns an error if the query fails.
pub fn held_seats(conn: &mut SqliteConnection, show_id: i64) -> Result<Vec<u32>, PersistenceError> {
    let rows: Vec<i32> = show_seats::table
        .inner_join(cinema_seats::table)
        .filter(show_seats::show_id.eq(show_id))
        .filter(show_seats::booking_id.is_not_null())
        .order(cinema_seats::seat_number.asc())
        .select(cinema_seats::seat_number)
        .load::<i32>(conn)
        .map_err(|e| PersistenceError::QueryFailed(format!("held_seats: {e}")))?;

    seat_numbers_from_rows(&rows)
}

/// Whether a specific seat is currently held for a show.
///
/// A seat number that does not exist in the show's theater is reported
/// as not held; existence checks belong to the mutation paths.
///
/// # Errors
///
/// Returns an error if the query fails.
pub fn is_seat_held(
    conn: &mut SqliteConnection,
    show_id: i64,
    seat_number: u32,
) -> Result<bool, PersistenceError> {
    Ok(resolve_show_seat(conn, show_id, seat_number)?
        .is_some_and(|row| row.booking_id.is_some()))
}

/// Converts raw seat-number columns into domain seat numbers.
pub(crate) fn seat_numbers_from_rows(rows: &[i32]) -> Result<Vec<u32>, PersistenceError> {
    rows.iter()
        .map(|&n| {
            n.to_u32().ok_or_else(|| {
                PersistenceError::QueryFailed(format!("negative seat number in store: {n}"))
            })
        })
        .collect()
}
