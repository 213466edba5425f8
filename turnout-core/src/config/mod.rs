//! Configuration types
//!
//! Board-level constants fixed at build time: absolute servo travel,
//! factory defaults, motion rates and button wiring.

pub mod buttons;
pub mod servo;
pub mod types;

pub use buttons::*;
pub use servo::*;
pub use types::*;
