// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! State-changing operations.
//!
//! Every lifecycle mutation is designed to run inside a single database
//! transaction opened by the `Persistence` adapter; any error returned
//! from these functions rolls the whole transaction back, so partial
//! seat claims or half-applied swaps never become visible.

pub mod admin;
pub mod bookings;
pub mod catalog;
pub mod payments;

use crate::error::PersistenceError;
use marquee_domain::BookingStatus;
use std::str::FromStr;

/// Parses a stored status column into the domain state machine.
pub(crate) fn parse_status(status: &str) -> Result<BookingStatus, PersistenceError> {
    BookingStatus::from_str(status).map_err(|_| PersistenceError::InvalidStatus(status.to_string()))
}
