//! Tick-driven control loop
//!
//! The board's ~100 Hz timer interrupt bumps a [`TickCounter`]; the main
//! loop consumes one tick at a time, samples the buttons, dispatches button
//! changes through a fixed table and advances servo motion.

pub mod dispatch;
pub mod main_loop;
pub mod tick;

pub use dispatch::Action;
pub use main_loop::{ControlLoop, LoopState, TickActions};
pub use tick::TickCounter;
