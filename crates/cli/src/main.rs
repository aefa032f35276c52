// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Command-line interface for the Marquee Ticketing System.
//!
//! A thin adapter over the API layer: each subcommand maps to one
//! lifecycle or query operation, prints the response as JSON, and maps
//! the returned error kind to a message and exit code. No booking
//! logic lives here.

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

use clap::{Parser, Subcommand};
use marquee_api::{
    AttachPaymentRequest, BookingError, CreateBookingRequest, CreateShowRequest,
    CreateTheaterRequest, ReassignSeatsRequest, RegisterUserRequest, handlers,
};
use marquee_persistence::Persistence;
use serde::Serialize;
use std::process::ExitCode;
use tracing::{error, info};

/// Marquee - seat inventory and booking lifecycle for theaters
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the `SQLite` database file. If not provided, uses an
    /// in-memory database (useful only for experimentation).
    #[arg(short, long)]
    database: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Register a user
    AddUser {
        #[arg(long)]
        email: String,
        #[arg(long)]
        first_name: String,
        #[arg(long)]
        last_name: String,
        #[arg(long)]
        phone: Option<String>,
    },
    /// Create a theater with its physical seats
    AddTheater {
        #[arg(long)]
        name: String,
        /// Seat numbers, comma separated (e.g. 1,2,3,10)
        #[arg(long, value_delimiter = ',')]
        seats: Vec<u32>,
    },
    /// Schedule a show in a theater
    AddShow {
        #[arg(long)]
        theater: i64,
        #[arg(long)]
        title: String,
        /// Show date (ISO 8601 date)
        #[arg(long)]
        date: String,
        /// Start time (HH:MM)
        #[arg(long)]
        time: String,
    },
    /// Create a booking for a show
    Book {
        #[arg(long)]
        user: i64,
        #[arg(long)]
        show: i64,
        /// Seat numbers, comma separated
        #[arg(long, value_delimiter = ',')]
        seats: Vec<u32>,
    },
    /// Replace a booking's seats with a same-sized set
    Reassign {
        #[arg(long)]
        booking: i64,
        /// New seat numbers, comma separated
        #[arg(long, value_delimiter = ',')]
        seats: Vec<u32>,
    },
    /// Attach a payment to a Pending booking
    Pay {
        #[arg(long)]
        booking: i64,
        #[arg(long)]
        amount_cents: i64,
    },
    /// Remove a booking's payment (cancels the booking)
    RemovePayment {
        #[arg(long)]
        booking: i64,
    },
    /// Cancel an active booking
    Cancel {
        #[arg(long)]
        booking: i64,
    },
    /// Cancel every Pending booking
    CancelAllPending,
    /// Permanently delete every Cancelled booking
    ClearCancelled,
    /// Show one booking's status and seats
    Booking {
        #[arg(long)]
        id: i64,
    },
    /// List a user's active bookings
    Bookings {
        #[arg(long)]
        user: i64,
    },
    /// List the seats currently held for a show
    Availability {
        #[arg(long)]
        show: i64,
    },
    /// Check whether one seat is held for a show
    Seat {
        #[arg(long)]
        show: i64,
        #[arg(long)]
        number: u32,
    },
    /// List a show's full seat inventory
    Seats {
        #[arg(long)]
        show: i64,
    },
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let args: Args = Args::parse();

    let persistence: Result<Persistence, _> = match &args.database {
        Some(path) => {
            info!("Using file-based database at: {}", path);
            Persistence::new_with_file(path)
        }
        None => {
            info!("Using in-memory database");
            Persistence::new_in_memory()
        }
    };
    let mut persistence: Persistence = match persistence {
        Ok(p) => p,
        Err(e) => {
            error!("Failed to open database: {e}");
            return ExitCode::FAILURE;
        }
    };

    match run(&mut persistence, args.command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::from(exit_code(&err))
        }
    }
}

fn run(persistence: &mut Persistence, command: Command) -> Result<(), BookingError> {
    match command {
        Command::AddUser {
            email,
            first_name,
            last_name,
            phone,
        } => print_json(&handlers::register_user(
            persistence,
            &RegisterUserRequest {
                email,
                first_name,
                last_name,
                phone,
            },
        )?),
        Command::AddTheater { name, seats } => print_json(&handlers::create_theater(
            persistence,
            &CreateTheaterRequest {
                name,
                seat_numbers: seats,
            },
        )?),
        Command::AddShow {
            theater,
            title,
            date,
            time,
        } => print_json(&handlers::create_show(
            persistence,
            &CreateShowRequest {
                theater_id: theater,
                movie_title: title,
                show_date: date,
                start_time: time,
            },
        )?),
        Command::Book { user, show, seats } => print_json(&handlers::create_booking(
            persistence,
            &CreateBookingRequest {
                user_id: user,
                show_id: show,
                seat_numbers: seats,
            },
        )?),
        Command::Reassign { booking, seats } => print_json(&handlers::reassign_seats(
            persistence,
            &ReassignSeatsRequest {
                booking_id: booking,
                seat_numbers: seats,
            },
        )?),
        Command::Pay {
            booking,
            amount_cents,
        } => print_json(&handlers::attach_payment(
            persistence,
            &AttachPaymentRequest {
                booking_id: booking,
                amount_cents,
            },
        )?),
        Command::RemovePayment { booking } => {
            print_json(&handlers::remove_payment(persistence, booking)?);
        }
        Command::Cancel { booking } => {
            print_json(&handlers::cancel_booking(persistence, booking)?);
        }
        Command::CancelAllPending => {
            print_json(&handlers::cancel_all_pending(persistence)?);
        }
        Command::ClearCancelled => {
            print_json(&handlers::clear_cancelled(persistence)?);
        }
        Command::Booking { id } => {
            print_json(&handlers::booking_details(persistence, id)?);
        }
        Command::Bookings { user } => {
            print_json(&handlers::active_bookings_for_user(persistence, user)?);
        }
        Command::Availability { show } => {
            print_json(&handlers::held_seats(persistence, show)?);
        }
        Command::Seat { show, number } => {
            print_json(&handlers::seat_status(persistence, show, number)?);
        }
        Command::Seats { show } => {
            print_json(&handlers::list_show_seats(persistence, show)?);
        }
    }
    Ok(())
}

fn print_json<T: Serialize>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(json) => println!("{json}"),
        Err(e) => error!("Failed to serialize response: {e}"),
    }
}

/// Stable exit codes so scripts can branch on the failure kind.
const fn exit_code(err: &BookingError) -> u8 {
    match err {
        BookingError::NotFound { .. } => 2,
        BookingError::SeatUnavailable { .. } => 3,
        BookingError::DuplicateSeatRequest { .. } => 4,
        BookingError::InvalidState { .. } => 5,
        BookingError::Validation { .. } => 6,
        BookingError::Internal { .. } => 1,
    }
}
