//! Button input handling
//!
//! Raw button levels are debounced by shift-register consensus and
//! reported as one-shot change flags.

pub mod debounce;

pub use debounce::{ButtonState, ButtonTracker, DEBOUNCE_SAMPLES};
