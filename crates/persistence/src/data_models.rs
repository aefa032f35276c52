// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Row models for the ticketing schema.
//!
//! `*Row` structs are `Queryable` read models; `New*` structs are
//! `Insertable` write models without the auto-assigned primary key.

use crate::diesel_schema::{
    bookings, cinema_seats, payments, show_seats, shows, theaters, users,
};
use diesel::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Queryable, Serialize, Deserialize)]
#[diesel(table_name = users)]
pub struct UserRow {
    pub user_id: i64,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub phone: Option<String>,
}

#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = users)]
pub struct NewUser {
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub phone: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Queryable, Serialize, Deserialize)]
#[diesel(table_name = theaters)]
pub struct TheaterRow {
    pub theater_id: i64,
    pub name: String,
}

#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = theaters)]
pub struct NewTheater {
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Queryable, Serialize, Deserialize)]
#[diesel(table_name = cinema_seats)]
pub struct CinemaSeatRow {
    pub seat_id: i64,
    pub theater_id: i64,
    pub seat_number: i32,
}

#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = cinema_seats)]
pub struct NewCinemaSeat {
    pub theater_id: i64,
    pub seat_number: i32,
}

#[derive(Debug, Clone, PartialEq, Eq, Queryable, Serialize, Deserialize)]
#[diesel(table_name = shows)]
pub struct ShowRow {
    pub show_id: i64,
    pub theater_id: i64,
    pub movie_title: String,
    pub show_date: String,
    pub start_time: String,
}

#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = shows)]
pub struct NewShow {
    pub theater_id: i64,
    pub movie_title: String,
    pub show_date: String,
    pub start_time: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Queryable, Serialize, Deserialize)]
#[diesel(table_name = bookings)]
pub struct BookingRow {
    pub booking_id: i64,
    pub user_id: i64,
    pub show_id: i64,
    pub status: String,
    pub created_at: String,
}

#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = bookings)]
pub struct NewBooking {
    pub user_id: i64,
    pub show_id: i64,
    pub status: String,
    pub created_at: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Queryable, Serialize, Deserialize)]
#[diesel(table_name = show_seats)]
pub struct ShowSeatRow {
    pub show_seat_id: i64,
    pub show_id: i64,
    pub seat_id: i64,
    pub booking_id: Option<i64>,
}

#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = show_seats)]
pub struct NewShowSeat {
    pub show_id: i64,
    pub seat_id: i64,
    pub booking_id: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Eq, Queryable, Serialize, Deserialize)]
#[diesel(table_name = payments)]
pub struct PaymentRow {
    pub payment_id: i64,
    pub booking_id: i64,
    pub amount_cents: i64,
    pub paid_at: String,
}

#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = payments)]
pub struct NewPayment {
    pub booking_id: i64,
    pub amount_cents: i64,
    pub paid_at: String,
}
