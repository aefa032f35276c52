// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API request and response data transfer objects.

use serde::{Deserialize, Serialize};

/// API request to create a booking for a show.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateBookingRequest {
    /// The booking user.
    pub user_id: i64,
    /// The show to book.
    pub show_id: i64,
    /// The requested seat numbers.
    pub seat_numbers: Vec<u32>,
}

/// Booking data returned by lifecycle and query operations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingInfo {
    /// The canonical booking identifier.
    pub booking_id: i64,
    /// The owning user.
    pub user_id: i64,
    /// The booked show.
    pub show_id: i64,
    /// The booking status (display value).
    pub status: String,
    /// Creation timestamp (ISO 8601).
    pub created_at: String,
    /// Held seat numbers in ascending order.
    pub seat_numbers: Vec<u32>,
}

/// API response for a booking lookup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingDetailsResponse {
    /// The booking.
    pub booking: BookingInfo,
}

/// API response listing a user's active bookings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListBookingsResponse {
    /// Pending and Paid bookings, oldest first.
    pub bookings: Vec<BookingInfo>,
}

/// API request to replace a booking's seats.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReassignSeatsRequest {
    /// The booking to reassign.
    pub booking_id: i64,
    /// The new seat numbers; must match the current held count.
    pub seat_numbers: Vec<u32>,
}

/// API request to attach a payment to a booking.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttachPaymentRequest {
    /// The booking to pay for.
    pub booking_id: i64,
    /// The paid amount in cents.
    pub amount_cents: i64,
}

/// API response for a successful payment attachment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentResponse {
    /// The canonical payment identifier.
    pub payment_id: i64,
    /// The paid booking.
    pub booking_id: i64,
    /// The paid amount in cents.
    pub amount_cents: i64,
    /// Payment timestamp (ISO 8601).
    pub paid_at: String,
    /// A success message.
    pub message: String,
}

/// API response for a payment removal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemovePaymentResponse {
    /// The booking whose payment was removed (now Cancelled).
    pub booking_id: i64,
    /// A success message.
    pub message: String,
}

/// API response for a booking cancellation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CancelBookingResponse {
    /// The cancelled booking.
    pub booking_id: i64,
    /// Seat numbers that were released.
    pub released_seats: Vec<u32>,
    /// A success message.
    pub message: String,
}

/// API response for a bulk administrative operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BulkOperationResponse {
    /// Number of bookings affected.
    pub affected: usize,
    /// A success message.
    pub message: String,
}

/// API response describing a show's held seats.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShowAvailabilityResponse {
    /// The show.
    pub show_id: i64,
    /// Seat numbers currently held, ascending.
    pub held_seats: Vec<u32>,
}

/// API response for a single-seat availability check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeatStatusResponse {
    /// The show.
    pub show_id: i64,
    /// The checked seat number.
    pub seat_number: u32,
    /// Whether the seat is currently held.
    pub held: bool,
}

/// One seat in a show's inventory listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShowSeatInfo {
    /// The seat number.
    pub seat_number: u32,
    /// The holding booking, if any.
    pub booking_id: Option<i64>,
}

/// API response listing a show's full seat inventory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShowSeatsResponse {
    /// The show.
    pub show_id: i64,
    /// All seats, ordered by seat number.
    pub seats: Vec<ShowSeatInfo>,
}

/// API request to register a user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegisterUserRequest {
    /// The user's email address (unique).
    pub email: String,
    /// The user's first name.
    pub first_name: String,
    /// The user's last name.
    pub last_name: String,
    /// Optional phone number.
    pub phone: Option<String>,
}

/// API response for a successful user registration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegisterUserResponse {
    /// The canonical user identifier.
    pub user_id: i64,
    /// The registered email.
    pub email: String,
    /// A success message.
    pub message: String,
}

/// API request to create a theater with its physical seats.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateTheaterRequest {
    /// The theater name.
    pub name: String,
    /// The physical seat numbers.
    pub seat_numbers: Vec<u32>,
}

/// API response for a successful theater creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateTheaterResponse {
    /// The canonical theater identifier.
    pub theater_id: i64,
    /// The theater name.
    pub name: String,
    /// Number of seats created.
    pub seat_count: usize,
    /// A success message.
    pub message: String,
}

/// API request to schedule a show in a theater.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateShowRequest {
    /// The hosting theater.
    pub theater_id: i64,
    /// The movie title.
    pub movie_title: String,
    /// Show date (ISO 8601 date).
    pub show_date: String,
    /// Start time (HH:MM).
    pub start_time: String,
}

/// API response for a successful show creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateShowResponse {
    /// The canonical show identifier.
    pub show_id: i64,
    /// The hosting theater.
    pub theater_id: i64,
    /// The movie title.
    pub movie_title: String,
    /// A success message.
    pub message: String,
}
