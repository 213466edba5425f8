//! Servo position control
//!
//! Each channel slews toward a target that is always one of its two
//! limits. Toggle swaps the target between the limits; widen and narrow
//! trim the limit the last toggled channel is currently heading for.

pub mod channel;
pub mod controller;

pub use channel::{ChannelPosition, LimitSide, ServoChannel};
pub use controller::{Adjustment, ServoController};
