// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API handler functions for lifecycle, administrative, and read-only
//! operations.
//!
//! Each handler validates pure preconditions with the domain crate
//! first, then delegates to one transactional persistence call, then
//! translates any error into [`BookingError`].

use marquee_domain::{
    Booking, Payment, validate_reassignment_request, validate_seat_request, validate_user_fields,
};
use marquee_persistence::Persistence;
use tracing::info;

use crate::error::{BookingError, translate_domain_error, translate_persistence_error};
use crate::request_response::{
    AttachPaymentRequest, BookingDetailsResponse, BookingInfo, BulkOperationResponse,
    CancelBookingResponse, CreateBookingRequest, CreateShowRequest, CreateShowResponse,
    CreateTheaterRequest, CreateTheaterResponse, ListBookingsResponse, PaymentResponse,
    ReassignSeatsRequest, RegisterUserRequest, RegisterUserResponse, RemovePaymentResponse,
    SeatStatusResponse, ShowAvailabilityResponse, ShowSeatInfo, ShowSeatsResponse,
};

fn booking_info(booking: &Booking) -> Result<BookingInfo, BookingError> {
    let booking_id: i64 = booking.booking_id().ok_or_else(|| BookingError::Internal {
        message: "Booking missing canonical ID after persistence".to_string(),
    })?;
    Ok(BookingInfo {
        booking_id,
        user_id: booking.user_id,
        show_id: booking.show_id,
        status: booking.status.to_string(),
        created_at: booking.created_at.clone(),
        seat_numbers: booking.seat_numbers.clone(),
    })
}

/// Creates a Pending booking holding every requested seat.
///
/// # Errors
///
/// Returns `Validation`/`DuplicateSeatRequest` for a bad seat list,
/// `NotFound` for a missing user or show, or `SeatUnavailable` when a
/// seat is held; on any failure no booking is created.
pub fn create_booking(
    persistence: &mut Persistence,
    request: &CreateBookingRequest,
) -> Result<BookingDetailsResponse, BookingError> {
    validate_seat_request(&request.seat_numbers).map_err(translate_domain_error)?;

    let booking: Booking = persistence
        .create_booking(request.user_id, request.show_id, &request.seat_numbers)
        .map_err(translate_persistence_error)?;

    let booking: BookingInfo = booking_info(&booking)?;
    info!(
        booking_id = booking.booking_id,
        user_id = request.user_id,
        show_id = request.show_id,
        "booking created"
    );
    Ok(BookingDetailsResponse { booking })
}

/// Replaces a booking's hold set with a same-sized set of seats.
///
/// Duplicate seat numbers are rejected before any availability check,
/// and the request must match the booking's current seat count.
///
/// # Errors
///
/// Returns `DuplicateSeatRequest`, `Validation`, `NotFound`,
/// `InvalidState`, or `SeatUnavailable`; on failure the original hold
/// set is untouched.
pub fn reassign_seats(
    persistence: &mut Persistence,
    request: &ReassignSeatsRequest,
) -> Result<BookingDetailsResponse, BookingError> {
    validate_seat_request(&request.seat_numbers).map_err(translate_domain_error)?;

    let current: Booking = persistence
        .booking_details(request.booking_id)
        .map_err(translate_persistence_error)?;
    validate_reassignment_request(current.seat_numbers.len(), &request.seat_numbers)
        .map_err(translate_domain_error)?;

    persistence
        .reassign_seats(request.booking_id, &request.seat_numbers)
        .map_err(translate_persistence_error)?;

    let booking: Booking = persistence
        .booking_details(request.booking_id)
        .map_err(translate_persistence_error)?;
    let booking: BookingInfo = booking_info(&booking)?;
    info!(booking_id = booking.booking_id, "seats reassigned");
    Ok(BookingDetailsResponse { booking })
}

/// Attaches a payment to a Pending booking, transitioning it to Paid.
///
/// # Errors
///
/// Returns `NotFound` for a missing booking or `InvalidState` when the
/// booking is not Pending.
pub fn attach_payment(
    persistence: &mut Persistence,
    request: &AttachPaymentRequest,
) -> Result<PaymentResponse, BookingError> {
    let payment: Payment = persistence
        .attach_payment(request.booking_id, request.amount_cents)
        .map_err(translate_persistence_error)?;

    let payment_id: i64 = payment.payment_id().ok_or_else(|| BookingError::Internal {
        message: "Payment missing canonical ID after persistence".to_string(),
    })?;
    info!(
        booking_id = request.booking_id,
        payment_id, "payment attached"
    );
    Ok(PaymentResponse {
        payment_id,
        booking_id: payment.booking_id,
        amount_cents: payment.amount_cents,
        paid_at: payment.paid_at,
        message: format!("Payment attached to booking {}", request.booking_id),
    })
}

/// Deletes a booking's payment and cancels the booking.
///
/// # Errors
///
/// Returns `NotFound` when the booking or its payment does not exist.
pub fn remove_payment(
    persistence: &mut Persistence,
    booking_id: i64,
) -> Result<RemovePaymentResponse, BookingError> {
    persistence
        .remove_payment(booking_id)
        .map_err(translate_persistence_error)?;

    info!(booking_id, "payment removed, booking cancelled");
    Ok(RemovePaymentResponse {
        booking_id,
        message: format!("Payment removed; booking {booking_id} cancelled"),
    })
}

/// Cancels an active booking, releasing its seats.
///
/// # Errors
///
/// Returns `NotFound` for a missing booking or `InvalidState` when it
/// is already Cancelled.
pub fn cancel_booking(
    persistence: &mut Persistence,
    booking_id: i64,
) -> Result<CancelBookingResponse, BookingError> {
    let before: Booking = persistence
        .booking_details(booking_id)
        .map_err(translate_persistence_error)?;

    persistence
        .cancel_booking(booking_id)
        .map_err(translate_persistence_error)?;

    info!(booking_id, "booking cancelled");
    Ok(CancelBookingResponse {
        booking_id,
        released_seats: before.seat_numbers,
        message: format!("Booking {booking_id} cancelled"),
    })
}

/// Cancels every Pending booking in one atomic batch.
///
/// # Errors
///
/// Returns `Internal` if the transaction fails; no partial batch is
/// ever visible.
pub fn cancel_all_pending(
    persistence: &mut Persistence,
) -> Result<BulkOperationResponse, BookingError> {
    let affected: usize = persistence
        .cancel_all_pending()
        .map_err(translate_persistence_error)?;

    info!(affected, "cancelled all pending bookings");
    Ok(BulkOperationResponse {
        affected,
        message: format!("Cancelled {affected} pending bookings"),
    })
}

/// Permanently deletes every Cancelled booking.
///
/// # Errors
///
/// Returns `Internal` if the transaction fails.
pub fn clear_cancelled(
    persistence: &mut Persistence,
) -> Result<BulkOperationResponse, BookingError> {
    let affected: usize = persistence
        .clear_cancelled()
        .map_err(translate_persistence_error)?;

    info!(affected, "cleared cancelled bookings");
    Ok(BulkOperationResponse {
        affected,
        message: format!("Deleted {affected} cancelled bookings"),
    })
}

/// Fetches one booking with status and held seats.
///
/// # Errors
///
/// Returns `NotFound` for a missing booking.
pub fn booking_details(
    persistence: &mut Persistence,
    booking_id: i64,
) -> Result<BookingDetailsResponse, BookingError> {
    let booking: Booking = persistence
        .booking_details(booking_id)
        .map_err(translate_persistence_error)?;
    Ok(BookingDetailsResponse {
        booking: booking_info(&booking)?,
    })
}

/// Lists a user's Pending and Paid bookings.
///
/// # Errors
///
/// Returns `NotFound` for a missing user.
pub fn active_bookings_for_user(
    persistence: &mut Persistence,
    user_id: i64,
) -> Result<ListBookingsResponse, BookingError> {
    if !persistence
        .user_exists(user_id)
        .map_err(translate_persistence_error)?
    {
        return Err(BookingError::NotFound {
            resource: format!("User {user_id}"),
        });
    }

    let bookings: Vec<Booking> = persistence
        .active_bookings_for_user(user_id)
        .map_err(translate_persistence_error)?;
    let bookings: Vec<BookingInfo> = bookings
        .iter()
        .map(booking_info)
        .collect::<Result<_, _>>()?;
    Ok(ListBookingsResponse { bookings })
}

/// Seat numbers currently held for a show.
///
/// # Errors
///
/// Returns `NotFound` for a missing show.
pub fn held_seats(
    persistence: &mut Persistence,
    show_id: i64,
) -> Result<ShowAvailabilityResponse, BookingError> {
    // Resolving the theater doubles as the show existence check.
    persistence
        .theater_of(show_id)
        .map_err(translate_persistence_error)?;

    let held_seats: Vec<u32> = persistence
        .held_seats(show_id)
        .map_err(translate_persistence_error)?;
    Ok(ShowAvailabilityResponse {
        show_id,
        held_seats,
    })
}

/// Whether one seat is currently held for a show.
///
/// # Errors
///
/// Returns `NotFound` for a missing show.
pub fn seat_status(
    persistence: &mut Persistence,
    show_id: i64,
    seat_number: u32,
) -> Result<SeatStatusResponse, BookingError> {
    persistence
        .theater_of(show_id)
        .map_err(translate_persistence_error)?;

    let held: bool = persistence
        .is_seat_held(show_id, seat_number)
        .map_err(translate_persistence_error)?;
    Ok(SeatStatusResponse {
        show_id,
        seat_number,
        held,
    })
}

/// Full seat inventory for a show.
///
/// # Errors
///
/// Returns `NotFound` for a missing show.
pub fn list_show_seats(
    persistence: &mut Persistence,
    show_id: i64,
) -> Result<ShowSeatsResponse, BookingError> {
    persistence
        .theater_of(show_id)
        .map_err(translate_persistence_error)?;

    let seats = persistence
        .list_show_seats(show_id)
        .map_err(translate_persistence_error)?;
    let seats: Vec<ShowSeatInfo> = seats
        .iter()
        .map(|seat| ShowSeatInfo {
            seat_number: seat.seat_number,
            booking_id: seat.booking_id,
        })
        .collect();
    Ok(ShowSeatsResponse { show_id, seats })
}

/// Registers a user after validating the identity fields.
///
/// # Errors
///
/// Returns `Validation` for bad fields or `Internal` on a duplicate
/// email.
pub fn register_user(
    persistence: &mut Persistence,
    request: &RegisterUserRequest,
) -> Result<RegisterUserResponse, BookingError> {
    validate_user_fields(&request.first_name, &request.last_name, &request.email)
        .map_err(translate_domain_error)?;

    let user = persistence
        .add_user(
            &request.email,
            &request.first_name,
            &request.last_name,
            request.phone.as_deref(),
        )
        .map_err(translate_persistence_error)?;

    info!(user_id = user.user_id, "user registered");
    Ok(RegisterUserResponse {
        user_id: user.user_id,
        email: user.email,
        message: format!("User {} registered", user.user_id),
    })
}

/// Creates a theater with its physical seats.
///
/// # Errors
///
/// Returns `Validation` for an empty or duplicated seat list.
pub fn create_theater(
    persistence: &mut Persistence,
    request: &CreateTheaterRequest,
) -> Result<CreateTheaterResponse, BookingError> {
    validate_seat_request(&request.seat_numbers).map_err(translate_domain_error)?;

    let theater = persistence
        .add_theater(&request.name, &request.seat_numbers)
        .map_err(translate_persistence_error)?;

    info!(theater_id = theater.theater_id, "theater created");
    Ok(CreateTheaterResponse {
        theater_id: theater.theater_id,
        name: theater.name,
        seat_count: request.seat_numbers.len(),
        message: format!("Theater {} created", theater.theater_id),
    })
}

/// Schedules a show, materializing a free seat inventory for it.
///
/// # Errors
///
/// Returns `NotFound` for a missing theater.
pub fn create_show(
    persistence: &mut Persistence,
    request: &CreateShowRequest,
) -> Result<CreateShowResponse, BookingError> {
    let show = persistence
        .add_show(
            request.theater_id,
            &request.movie_title,
            &request.show_date,
            &request.start_time,
        )
        .map_err(translate_persistence_error)?;

    info!(show_id = show.show_id, "show created");
    Ok(CreateShowResponse {
        show_id: show.show_id,
        theater_id: show.theater_id,
        movie_title: show.movie_title,
        message: format!("Show {} created", show.show_id),
    })
}
