// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Catalog writes: users, theaters with their seats, and shows.
//!
//! Creating a show also materializes its seat inventory: one
//! `show_seats` row per physical seat in the theater, all initially
//! free.

use crate::data_models::{
    CinemaSeatRow, NewCinemaSeat, NewShow, NewShowSeat, NewTheater, NewUser, ShowRow, TheaterRow,
    UserRow,
};
use crate::diesel_schema::{cinema_seats, show_seats, shows, theaters, users};
use crate::error::PersistenceError;
use crate::sqlite;
use diesel::prelude::*;
use num_traits::ToPrimitive;
use tracing::debug;

/// Insert a user.
///
/// # Errors
///
/// Returns a database error, including when the email is already taken.
pub fn insert_user(
    conn: &mut SqliteConnection,
    email: &str,
    first_name: &str,
    last_name: &str,
    phone: Option<&str>,
) -> Result<UserRow, PersistenceError> {
    let record = NewUser {
        email: email.to_string(),
        first_name: first_name.to_string(),
        last_name: last_name.to_string(),
        phone: phone.map(ToString::to_string),
    };
    diesel::insert_into(users::table)
        .values(&record)
        .execute(conn)?;
    let user_id: i64 = sqlite::get_last_insert_rowid(conn)?;

    debug!(user_id, email, "inserted user");
    Ok(UserRow {
        user_id,
        email: record.email,
        first_name: record.first_name,
        last_name: record.last_name,
        phone: record.phone,
    })
}

/// Insert a theater and its physical seats.
///
/// # Errors
///
/// Returns an error if a seat number is out of range or the insert
/// fails (duplicate seat numbers violate the theater's UNIQUE
/// constraint).
pub fn insert_theater(
    conn: &mut SqliteConnection,
    name: &str,
    seat_numbers: &[u32],
) -> Result<TheaterRow, PersistenceError> {
    let record = NewTheater {
        name: name.to_string(),
    };
    diesel::insert_into(theaters::table)
        .values(&record)
        .execute(conn)?;
    let theater_id: i64 = sqlite::get_last_insert_rowid(conn)?;

    let seats: Vec<NewCinemaSeat> = seat_numbers
        .iter()
        .map(|&seat_number| {
            let seat_number: i32 = seat_number.to_i32().ok_or_else(|| {
                PersistenceError::QueryFailed(format!("seat number {seat_number} out of range"))
            })?;
            Ok(NewCinemaSeat {
                theater_id,
                seat_number,
            })
        })
        .collect::<Result<_, PersistenceError>>()?;
    diesel::insert_into(cinema_seats::table)
        .values(&seats)
        .execute(conn)?;

    debug!(theater_id, name, seats = seats.len(), "inserted theater");
    Ok(TheaterRow {
        theater_id,
        name: record.name,
    })
}

/// Insert a show and materialize its seat inventory.
///
/// # Errors
///
/// Returns `NotFound` when the theater does not exist.
pub fn insert_show(
    conn: &mut SqliteConnection,
    theater_id: i64,
    movie_title: &str,
    show_date: &str,
    start_time: &str,
) -> Result<ShowRow, PersistenceError> {
    let theater_exists: Option<i64> = theaters::table
        .filter(theaters::theater_id.eq(theater_id))
        .select(theaters::theater_id)
        .first::<i64>(conn)
        .optional()?;
    if theater_exists.is_none() {
        return Err(PersistenceError::NotFound(format!("Theater {theater_id}")));
    }

    let theater_seats: Vec<CinemaSeatRow> = cinema_seats::table
        .filter(cinema_seats::theater_id.eq(theater_id))
        .load::<CinemaSeatRow>(conn)?;

    let record = NewShow {
        theater_id,
        movie_title: movie_title.to_string(),
        show_date: show_date.to_string(),
        start_time: start_time.to_string(),
    };
    diesel::insert_into(shows::table)
        .values(&record)
        .execute(conn)?;
    let show_id: i64 = sqlite::get_last_insert_rowid(conn)?;

    let inventory: Vec<NewShowSeat> = theater_seats
        .iter()
        .map(|seat| NewShowSeat {
            show_id,
            seat_id: seat.seat_id,
            booking_id: None,
        })
        .collect();
    diesel::insert_into(show_seats::table)
        .values(&inventory)
        .execute(conn)?;

    debug!(show_id, theater_id, movie_title, "inserted show");
    Ok(ShowRow {
        show_id,
        theater_id,
        movie_title: record.movie_title,
        show_date: record.show_date,
        start_time: record.start_time,
    })
}
