// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API boundary layer for the Marquee Ticketing System.
//!
//! This crate is the booking lifecycle manager's public surface. It
//! validates pure preconditions before touching the store, delegates
//! each operation to a single persistence transaction, and translates
//! domain and persistence errors into the [`BookingError`] contract.
//! Store errors never leak through this boundary untranslated.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(clippy::multiple_crate_versions)]

mod error;
pub mod handlers;
mod request_response;

#[cfg(test)]
mod tests;

pub use error::{BookingError, translate_domain_error, translate_persistence_error};
pub use request_response::{
    AttachPaymentRequest, BookingDetailsResponse, BookingInfo, BulkOperationResponse,
    CancelBookingResponse, CreateBookingRequest, CreateShowRequest, CreateShowResponse,
    CreateTheaterRequest, CreateTheaterResponse, ListBookingsResponse, PaymentResponse,
    ReassignSeatsRequest, RegisterUserRequest, RegisterUserResponse, RemovePaymentResponse,
    SeatStatusResponse, ShowAvailabilityResponse, ShowSeatInfo, ShowSeatsResponse,
};
