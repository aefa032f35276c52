// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Read-only query operations.
//!
//! Queries never mutate state. Availability reads are evaluated against
//! committed rows on every call; nothing here caches across calls.

pub mod availability;
pub mod bookings;
pub mod catalog;
