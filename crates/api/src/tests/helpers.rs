// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Test helper functions and fixtures.

use marquee_persistence::Persistence;

use crate::handlers;
use crate::request_response::{
    CreateBookingRequest, CreateShowRequest, CreateTheaterRequest, RegisterUserRequest,
};

/// Seat numbers every test theater gets.
pub const TEST_SEATS: [u32; 5] = [1, 2, 3, 4, 5];

pub fn create_test_register_request(email: &str) -> RegisterUserRequest {
    RegisterUserRequest {
        email: email.to_string(),
        first_name: String::from("Ada"),
        last_name: String::from("Lovelace"),
        phone: None,
    }
}

/// Seeds a theater, a show in it, and one user.
///
/// Returns `(persistence, show_id, user_id)`.
pub fn setup_show_and_user() -> (Persistence, i64, i64) {
    let mut persistence: Persistence = Persistence::new_in_memory().unwrap();

    let theater = handlers::create_theater(
        &mut persistence,
        &CreateTheaterRequest {
            name: String::from("Main Hall"),
            seat_numbers: TEST_SEATS.to_vec(),
        },
    )
    .unwrap();

    let show = handlers::create_show(
        &mut persistence,
        &CreateShowRequest {
            theater_id: theater.theater_id,
            movie_title: String::from("Hackers"),
            show_date: String::from("2026-09-01"),
            start_time: String::from("19:30"),
        },
    )
    .unwrap();

    let user = handlers::register_user(
        &mut persistence,
        &create_test_register_request("ada@example.com"),
    )
    .unwrap();

    (persistence, show.show_id, user.user_id)
}

/// Books the given seats for the user; returns the booking ID.
pub fn book_seats(
    persistence: &mut Persistence,
    user_id: i64,
    show_id: i64,
    seat_numbers: &[u32],
) -> i64 {
    handlers::create_booking(
        persistence,
        &CreateBookingRequest {
            user_id,
            show_id,
            seat_numbers: seat_numbers.to_vec(),
        },
    )
    .unwrap()
    .booking
    .booking_id
}
