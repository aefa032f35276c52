// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Cross-connection seat race tests.
//!
//! Two adapters with separate connections to one shared database model
//! two agents booking at the same time. Every lifecycle operation runs
//! in its own immediate transaction, so the availability check and the
//! claim commit as one unit: the loser of a seat race observes the
//! winner's committed hold and fails, never a double hold.

use crate::tests::{TEST_SEATS, create_shared_persistence_pair};
use crate::{Persistence, PersistenceError};
use marquee_domain::Booking;

/// Seeds the shared database through one connection.
///
/// Returns `(show_id, first_user_id, second_user_id)`; the other
/// connection sees the committed rows immediately.
fn seed_shared(persistence: &mut Persistence) -> (i64, i64, i64) {
    let theater = persistence.add_theater("Main Hall", &TEST_SEATS).unwrap();
    let show = persistence
        .add_show(theater.theater_id, "Hackers", "2026-09-01", "19:30")
        .unwrap();
    let first = persistence
        .add_user("ada@example.com", "Ada", "Lovelace", None)
        .unwrap();
    let second = persistence
        .add_user("grace@example.com", "Grace", "Hopper", None)
        .unwrap();
    (show.show_id, first.user_id, second.user_id)
}

#[test]
fn test_racing_create_booking_loser_gets_seat_unavailable() {
    let (mut agent_a, mut agent_b) = create_shared_persistence_pair();
    let (show_id, first_user, second_user) = seed_shared(&mut agent_a);

    agent_a.create_booking(first_user, show_id, &[1, 2]).unwrap();
    let result = agent_b.create_booking(second_user, show_id, &[2, 3]);

    assert_eq!(
        result,
        Err(PersistenceError::SeatUnavailable { seat_number: 2 })
    );
    // Both connections agree on the committed state: no double hold,
    // no partial claim of seat 3 by the loser.
    assert_eq!(agent_a.held_seats(show_id).unwrap(), vec![1, 2]);
    assert_eq!(agent_b.held_seats(show_id).unwrap(), vec![1, 2]);
    assert!(agent_b.active_bookings_for_user(second_user).unwrap().is_empty());
}

#[test]
fn test_disjoint_bookings_from_both_connections_commit() {
    let (mut agent_a, mut agent_b) = create_shared_persistence_pair();
    let (show_id, first_user, second_user) = seed_shared(&mut agent_a);

    agent_a.create_booking(first_user, show_id, &[1]).unwrap();
    agent_b.create_booking(second_user, show_id, &[3]).unwrap();

    // Each held seat appears exactly once from either connection's view.
    let held: Vec<u32> = agent_a.held_seats(show_id).unwrap();
    assert_eq!(held, vec![1, 3]);
    assert_eq!(agent_b.held_seats(show_id).unwrap(), held);
}

#[test]
fn test_racing_reassign_loser_keeps_original_holds() {
    let (mut agent_a, mut agent_b) = create_shared_persistence_pair();
    let (show_id, first_user, second_user) = seed_shared(&mut agent_a);

    agent_a.create_booking(first_user, show_id, &[2]).unwrap();
    let contender: Booking = agent_b
        .create_booking(second_user, show_id, &[5])
        .unwrap();
    let contender_id: i64 = contender.booking_id().unwrap();

    // The other agent's committed hold on seat 2 defeats the swap.
    let result = agent_b.reassign_seats(contender_id, &[2]);
    assert_eq!(
        result,
        Err(PersistenceError::SeatUnavailable { seat_number: 2 })
    );

    // The failed swap rolled back; both connections still see the
    // original hold.
    let details: Booking = agent_a.booking_details(contender_id).unwrap();
    assert_eq!(details.seat_numbers, vec![5]);
    assert_eq!(agent_b.held_seats(show_id).unwrap(), vec![2, 5]);
}

#[test]
fn test_seat_released_on_one_connection_is_claimable_on_the_other() {
    let (mut agent_a, mut agent_b) = create_shared_persistence_pair();
    let (show_id, first_user, second_user) = seed_shared(&mut agent_a);

    let booking: Booking = agent_a.create_booking(first_user, show_id, &[1]).unwrap();
    agent_a.cancel_booking(booking.booking_id().unwrap()).unwrap();

    let claimed: Booking = agent_b.create_booking(second_user, show_id, &[1]).unwrap();
    assert_eq!(claimed.seat_numbers, vec![1]);
}
