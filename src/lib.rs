//! Board-agnostic core of a six-digit BCD clock.
//!
//! Time is kept as six decimal digits `A B : C D : E F` and scanned one digit
//! at a time onto a shared 4-bit BCD decoder. Two active-low push-buttons
//! advance the hour and the minute. The firmware binary wires these pieces to
//! an RP2040; everything here also runs on the host.
#![cfg_attr(not(test), no_std)]

pub mod button;
pub mod clock;
pub mod config;
pub mod controller;
pub mod display;
pub mod millis;

use core::convert::Infallible;

pub use button::{Button, Debouncer};
pub use clock::ClockState;
pub use config::ClockConfig;
pub use controller::{Controller, Step};
pub use display::Multiplexer;
pub use millis::{Millis, MillisCounter, Monotonic};

/// Unwraps a pin result whose error type cannot be constructed.
pub(crate) fn infallible<T>(result: Result<T, Infallible>) -> T {
    match result {
        Ok(value) => value,
        Err(never) => match never {},
    }
}
