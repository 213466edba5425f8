//! Button to operation dispatch table

use crate::ids::{ButtonLine, ChannelId};

/// Operation triggered by a button change
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Action {
    /// Widen the last toggled channel's active limit
    Widen,
    /// Narrow the last toggled channel's active limit
    Narrow,
    /// Send a channel to its other limit
    Toggle(ChannelId),
}

impl Action {
    /// Fixed dispatch table
    pub const fn for_line(line: ButtonLine) -> Self {
        match line {
            ButtonLine::Plus => Action::Widen,
            ButtonLine::Minus => Action::Narrow,
            ButtonLine::Select1 => Action::Toggle(ChannelId::Servo1),
            ButtonLine::Select2 => Action::Toggle(ChannelId::Servo2),
        }
    }
}
