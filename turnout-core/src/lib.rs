//! Board-agnostic core logic for the turnout servo controller
//!
//! This crate contains everything that does not touch hardware registers:
//!
//! - Button debouncing (shift-register consensus)
//! - Servo position state with slew-limited motion and limit trimming
//! - Calibration record validation, load and per-field persistence
//! - The tick-driven control loop and its button dispatch table
//! - I/O traits the board layer implements
//!
//! A board crate wires pins, timers and EEPROM into the traits in
//! [`traits`] and [`turnout_hal::WordStore`], increments a [`TickCounter`]
//! from its ~100 Hz timer interrupt and hands everything to
//! [`ControlLoop`].
//!
//! [`TickCounter`]: control::TickCounter
//! [`ControlLoop`]: control::ControlLoop

#![no_std]
#![deny(unsafe_code)]

#[macro_use]
mod log;

pub mod calibration;
pub mod config;
pub mod control;
pub mod ids;
pub mod input;
pub mod servo;
pub mod traits;

#[cfg(any(test, feature = "mock"))]
pub mod mock;
