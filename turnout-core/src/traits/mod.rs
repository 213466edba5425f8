//! I/O traits between the core and the board
//!
//! These are the only points where the core touches hardware. The board
//! layer (see `turnout-drivers`) implements them over real pins; tests use
//! the doubles in [`crate::mock`].

pub mod io;

pub use io::{DigitalInputs, IndicatorOutputs, PulseOutputs, ServoOutputs};
