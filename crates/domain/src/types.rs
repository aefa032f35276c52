// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::booking_status::BookingStatus;
use serde::{Deserialize, Serialize};

/// The binding of one seat to one show, the unit of inventory.
///
/// A `(show, seat)` pair exists at most once. A show seat is either free
/// (`booking_id` is `None`) or held by exactly one active booking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShowSeat {
    /// The canonical numeric identifier assigned by the database.
    pub show_seat_id: i64,
    /// The show this inventory row belongs to.
    pub show_id: i64,
    /// The physical seat.
    pub seat_id: i64,
    /// The seat number, resolved from the theater catalog for display.
    pub seat_number: u32,
    /// The booking currently holding this seat, if any.
    pub booking_id: Option<i64>,
}

impl ShowSeat {
    /// Returns whether this seat is currently held by a booking.
    #[must_use]
    pub const fn is_held(&self) -> bool {
        self.booking_id.is_some()
    }
}

/// A user's reservation for one show, holding a non-empty set of show seats
/// while active.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Booking {
    /// The canonical numeric identifier assigned by the database.
    /// `None` indicates the booking has not been persisted yet.
    booking_id: Option<i64>,
    /// The owning user.
    pub user_id: i64,
    /// The show this booking is for.
    pub show_id: i64,
    /// The booking's lifecycle status.
    pub status: BookingStatus,
    /// Creation timestamp (ISO 8601 string).
    pub created_at: String,
    /// The seat numbers currently held, in ascending order.
    pub seat_numbers: Vec<u32>,
}

impl Booking {
    /// Creates a new Pending `Booking` without a persisted ID.
    #[must_use]
    pub const fn new(
        user_id: i64,
        show_id: i64,
        created_at: String,
        seat_numbers: Vec<u32>,
    ) -> Self {
        Self {
            booking_id: None,
            user_id,
            show_id,
            status: BookingStatus::Pending,
            created_at,
            seat_numbers,
        }
    }

    /// Creates a `Booking` with an existing persisted ID.
    #[must_use]
    pub const fn with_id(
        booking_id: i64,
        user_id: i64,
        show_id: i64,
        status: BookingStatus,
        created_at: String,
        seat_numbers: Vec<u32>,
    ) -> Self {
        Self {
            booking_id: Some(booking_id),
            user_id,
            show_id,
            status,
            created_at,
            seat_numbers,
        }
    }

    /// Returns the canonical numeric identifier if persisted.
    #[must_use]
    pub const fn booking_id(&self) -> Option<i64> {
        self.booking_id
    }
}

/// A payment attached to a booking.
///
/// At most one payment exists per booking; a payment exists if and only if
/// the booking's status is Paid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Payment {
    /// The canonical numeric identifier assigned by the database.
    /// `None` indicates the payment has not been persisted yet.
    payment_id: Option<i64>,
    /// The booking this payment is linked to.
    pub booking_id: i64,
    /// The paid amount in cents.
    pub amount_cents: i64,
    /// Payment timestamp (ISO 8601 string).
    pub paid_at: String,
}

impl Payment {
    /// Creates a new `Payment` without a persisted ID.
    #[must_use]
    pub const fn new(booking_id: i64, amount_cents: i64, paid_at: String) -> Self {
        Self {
            payment_id: None,
            booking_id,
            amount_cents,
            paid_at,
        }
    }

    /// Creates a `Payment` with an existing persisted ID.
    #[must_use]
    pub const fn with_id(
        payment_id: i64,
        booking_id: i64,
        amount_cents: i64,
        paid_at: String,
    ) -> Self {
        Self {
            payment_id: Some(payment_id),
            booking_id,
            amount_cents,
            paid_at,
        }
    }

    /// Returns the canonical numeric identifier if persisted.
    #[must_use]
    pub const fn payment_id(&self) -> Option<i64> {
        self.payment_id
    }
}
