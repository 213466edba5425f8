//! Hardware driver implementations
//!
//! This crate binds the board-level pin and PWM traits from `turnout-hal`
//! to the I/O traits `turnout-core` consumes:
//!
//! - Button bank (four input pins as [`DigitalInputs`])
//! - Indicator bank (six lamp pins as [`IndicatorOutputs`])
//! - Servo pair (two pulse outputs as [`PulseOutputs`])
//! - A combined output sink for the control loop
//! - Adapters from `embedded-hal` 1.0 pins and PWM channels
//!
//! [`DigitalInputs`]: turnout_core::traits::DigitalInputs
//! [`IndicatorOutputs`]: turnout_core::traits::IndicatorOutputs
//! [`PulseOutputs`]: turnout_core::traits::PulseOutputs

#![no_std]
#![deny(unsafe_code)]

pub mod buttons;
pub mod embedded;
pub mod indicators;
pub mod outputs;
pub mod servo;

pub use buttons::ButtonBank;
pub use embedded::{EhInput, EhOutput, EhPwm};
pub use indicators::IndicatorBank;
pub use outputs::TurnoutOutputs;
pub use servo::ServoPair;
