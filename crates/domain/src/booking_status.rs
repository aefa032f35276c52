// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Represents the lifecycle state of a booking.
///
/// Pending and Paid bookings hold their seats; a Cancelled booking has
/// released them and can only be removed by the clear operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum BookingStatus {
    /// Initial state after seat claim. Awaiting payment.
    #[default]
    Pending,
    /// Payment attached. Seats remain held.
    Paid,
    /// Terminal state. Seats released; eligible for clearing.
    Cancelled,
}

impl FromStr for BookingStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Pending" => Ok(Self::Pending),
            "Paid" => Ok(Self::Paid),
            "Cancelled" => Ok(Self::Cancelled),
            _ => Err(DomainError::InvalidStatus(s.to_string())),
        }
    }
}

impl std::fmt::Display for BookingStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl BookingStatus {
    /// Converts this status to its string representation as stored in the database.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::Paid => "Paid",
            Self::Cancelled => "Cancelled",
        }
    }

    /// Checks if a transition from this status to another is valid.
    ///
    /// Valid transitions are:
    /// - Pending → Paid (payment attached)
    /// - Pending → Cancelled (explicit or bulk cancellation)
    /// - Paid → Cancelled (payment removed or explicit cancellation)
    ///
    /// Cancelled is terminal; a booking never re-enters Pending.
    #[must_use]
    pub const fn can_transition_to(&self, target: Self) -> bool {
        matches!(
            (self, target),
            (Self::Pending, Self::Paid)
                | (Self::Pending | Self::Paid, Self::Cancelled)
        )
    }

    /// Returns whether this status counts as active.
    ///
    /// Only active bookings hold seats and only active bookings may be
    /// cancelled or reassigned.
    #[must_use]
    pub const fn is_active(&self) -> bool {
        matches!(self, Self::Pending | Self::Paid)
    }
}
