//! Turnout Hardware Abstraction Layer
//!
//! This crate defines the hardware traits a chip-specific HAL implements so
//! the turnout core can run unchanged on different microcontrollers.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  Board firmware (pin map, timers, ISR)  │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  turnout-drivers (pin banks, PWM pair)  │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  turnout-hal (this crate - traits)      │
//! └─────────────────────────────────────────┘
//! ```
//!
//! # Traits
//!
//! - [`gpio::OutputPin`], [`gpio::InputPin`] - Digital I/O
//! - [`pwm::PwmChannel`] - One servo pulse output
//! - [`eeprom::WordStore`] - Word-addressed persistent storage

#![no_std]
#![deny(unsafe_code)]

pub mod eeprom;
pub mod gpio;
pub mod pwm;

#[cfg(any(test, feature = "mock"))]
pub mod mock;

// Re-export key traits at crate root for convenience
pub use eeprom::{WordAddress, WordStore};
pub use gpio::{InputPin, OutputPin};
pub use pwm::PwmChannel;
