// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

mod availability_tests;
mod concurrency_tests;

use crate::Persistence;

/// Seat numbers every test theater gets.
pub const TEST_SEATS: [u32; 6] = [1, 2, 3, 5, 7, 11];

pub fn create_test_persistence() -> Persistence {
    Persistence::new_in_memory().unwrap()
}

/// Two adapters with independent connections to one shared-memory
/// database, modeling two agents acting on the same store.
pub fn create_shared_persistence_pair() -> (Persistence, Persistence) {
    let db_id: u64 = crate::DB_COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst);
    let shared_memory_url = format!("file:memdb_shared_{db_id}?mode=memory&cache=shared");

    let mut first_conn = crate::sqlite::initialize_database(&shared_memory_url).unwrap();
    crate::sqlite::verify_foreign_key_enforcement(&mut first_conn).unwrap();
    let mut second_conn = crate::sqlite::initialize_database(&shared_memory_url).unwrap();
    crate::sqlite::verify_foreign_key_enforcement(&mut second_conn).unwrap();

    (
        Persistence { conn: first_conn },
        Persistence { conn: second_conn },
    )
}

/// Seeds one theater with [`TEST_SEATS`], one show in it, and two users.
///
/// Returns `(persistence, show_id, first_user_id, second_user_id)`.
pub fn seed_show_with_users() -> (Persistence, i64, i64, i64) {
    let mut persistence: Persistence = create_test_persistence();
    let theater = persistence.add_theater("Main Hall", &TEST_SEATS).unwrap();
    let show = persistence
        .add_show(theater.theater_id, "Hackers", "2026-09-01", "19:30")
        .unwrap();
    let first = persistence
        .add_user("ada@example.com", "Ada", "Lovelace", None)
        .unwrap();
    let second = persistence
        .add_user("grace@example.com", "Grace", "Hopper", Some("555-0100"))
        .unwrap();
    (persistence, show.show_id, first.user_id, second.user_id)
}
