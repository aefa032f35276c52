// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Seat availability index tests.

use crate::tests::{TEST_SEATS, seed_show_with_users};
use marquee_domain::{Booking, ShowSeat};

#[test]
fn test_new_show_has_no_held_seats() {
    let (mut persistence, show_id, _, _) = seed_show_with_users();

    assert!(persistence.held_seats(show_id).unwrap().is_empty());
}

#[test]
fn test_held_seats_ascending_after_bookings() {
    let (mut persistence, show_id, first_user, second_user) = seed_show_with_users();

    persistence.create_booking(first_user, show_id, &[7, 1]).unwrap();
    persistence.create_booking(second_user, show_id, &[3]).unwrap();

    assert_eq!(persistence.held_seats(show_id).unwrap(), vec![1, 3, 7]);
}

#[test]
fn test_is_seat_held_tracks_bookings() {
    let (mut persistence, show_id, user_id, _) = seed_show_with_users();

    assert!(!persistence.is_seat_held(show_id, 2).unwrap());
    persistence.create_booking(user_id, show_id, &[2]).unwrap();
    assert!(persistence.is_seat_held(show_id, 2).unwrap());
    assert!(!persistence.is_seat_held(show_id, 3).unwrap());
}

#[test]
fn test_is_seat_held_reports_unknown_seat_as_free() {
    let (mut persistence, show_id, _, _) = seed_show_with_users();

    assert!(!persistence.is_seat_held(show_id, 99).unwrap());
}

#[test]
fn test_list_show_seats_covers_the_whole_theater() {
    let (mut persistence, show_id, user_id, _) = seed_show_with_users();

    persistence.create_booking(user_id, show_id, &[3]).unwrap();

    let seats: Vec<ShowSeat> = persistence.list_show_seats(show_id).unwrap();
    let numbers: Vec<u32> = seats.iter().map(|s| s.seat_number).collect();
    assert_eq!(numbers, TEST_SEATS.to_vec());

    for seat in &seats {
        assert_eq!(seat.is_held(), seat.seat_number == 3);
    }
}

#[test]
fn test_availability_reflects_committed_state_after_cancel() {
    let (mut persistence, show_id, user_id, _) = seed_show_with_users();

    let booking: Booking = persistence.create_booking(user_id, show_id, &[1, 2]).unwrap();
    assert_eq!(persistence.held_seats(show_id).unwrap(), vec![1, 2]);

    persistence.cancel_booking(booking.booking_id().unwrap()).unwrap();
    assert!(persistence.held_seats(show_id).unwrap().is_empty());
}

#[test]
fn test_shows_have_independent_inventories() {
    let (mut persistence, show_id, user_id, _) = seed_show_with_users();

    let theater = persistence.theater_of(show_id).unwrap();
    let other = persistence
        .add_show(theater.theater_id, "Sneakers", "2026-09-02", "21:00")
        .unwrap();

    persistence.create_booking(user_id, show_id, &[1]).unwrap();

    // The same physical seat is free for the other show.
    assert!(persistence.is_seat_held(show_id, 1).unwrap());
    assert!(!persistence.is_seat_held(other.show_id, 1).unwrap());
    persistence.create_booking(user_id, other.show_id, &[1]).unwrap();
}
