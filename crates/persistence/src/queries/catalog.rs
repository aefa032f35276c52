// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Catalog reads: users, theaters, shows, and per-show seat listings.

use crate::data_models::{ShowRow, TheaterRow, UserRow};
use crate::diesel_schema::{cinema_seats, show_seats, shows, theaters, users};
use crate::error::PersistenceError;
use diesel::prelude::*;
use marquee_domain::ShowSeat;
use num_traits::ToPrimitive;

/// Whether a user with the given ID exists.
///
/// # Errors
///
/// Returns an error if the query fails.
pub fn user_exists(conn: &mut SqliteConnection, user_id: i64) -> Result<bool, PersistenceError> {
    let found: Option<i64> = users::table
        .filter(users::user_id.eq(user_id))
        .select(users::user_id)
        .first::<i64>(conn)
        .optional()
        .map_err(|e| PersistenceError::QueryFailed(format!("user_exists: {e}")))?;
    Ok(found.is_some())
}

/// Fetch a user row by ID.
///
/// # Errors
///
/// Returns an error if the query fails.
pub fn get_user(
    conn: &mut SqliteConnection,
    user_id: i64,
) -> Result<Option<UserRow>, PersistenceError> {
    users::table
        .filter(users::user_id.eq(user_id))
        .first::<UserRow>(conn)
        .optional()
        .map_err(|e| PersistenceError::QueryFailed(format!("get_user: {e}")))
}

/// Fetch a show row by ID.
///
/// # Errors
///
/// Returns an error if the query fails.
pub fn get_show(
    conn: &mut SqliteConnection,
    show_id: i64,
) -> Result<Option<ShowRow>, PersistenceError> {
    shows::table
        .filter(shows::show_id.eq(show_id))
        .first::<ShowRow>(conn)
        .optional()
        .map_err(|e| PersistenceError::QueryFailed(format!("get_show: {e}")))
}

/// Fetch the theater a show runs in.
///
/// # Errors
///
/// Returns an error if the show does not exist or the query fails.
pub fn theater_of(
    conn: &mut SqliteConnection,
    show_id: i64,
) -> Result<TheaterRow, PersistenceError> {
    shows::table
        .inner_join(theaters::table)
        .filter(shows::show_id.eq(show_id))
        .select((theaters::theater_id, theaters::name))
        .first::<TheaterRow>(conn)
        .optional()
        .map_err(|e| PersistenceError::QueryFailed(format!("theater_of: {e}")))?
        .ok_or_else(|| PersistenceError::NotFound(format!("Show {show_id}")))
}

/// Full seat inventory for a show, ordered by seat number.
///
/// # Errors
///
/// Returns an error if the query fails.
pub fn list_show_seats(
    conn: &mut SqliteConnection,
    show_id: i64,
) -> Result<Vec<ShowSeat>, PersistenceError> {
    let rows: Vec<(i64, i64, i64, Option<i64>, i32)> = show_seats::table
        .inner_join(cinema_seats::table)
        .filter(show_seats::show_id.eq(show_id))
        .order(cinema_seats::seat_number.asc())
        .select((
            show_seats::show_seat_id,
            show_seats::show_id,
            show_seats::seat_id,
            show_seats::booking_id,
            cinema_seats::seat_number,
        ))
        .load(conn)
        .map_err(|e| PersistenceError::QueryFailed(format!("list_show_seats: {e}")))?;

    rows.into_iter()
        .map(|(show_seat_id, show_id, seat_id, booking_id, seat_number)| {
            let seat_number: u32 = seat_number.to_u32().ok_or_else(|| {
                PersistenceError::QueryFailed(format!(
                    "negative seat number in store: {seat_number}"
                ))
            })?;
            Ok(ShowSeat {
                show_seat_id,
                show_id,
                seat_id,
                seat_number,
                booking_id,
            })
        })
        .collect()
}
