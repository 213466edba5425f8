//! Identities of the board's channels, button lines and indicators
//!
//! All three sets are fixed by the board. They are closed enums so that
//! every dispatch over them is an exhaustive `match`.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Number of servo channels
pub const CHANNEL_COUNT: usize = 2;

/// Number of button lines
pub const LINE_COUNT: usize = 4;

/// Number of indicator outputs
pub const INDICATOR_COUNT: usize = 6;

/// One independently controlled servo
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ChannelId {
    /// Servo on the first compare output
    Servo1,
    /// Servo on the second compare output
    Servo2,
}

impl ChannelId {
    /// All channels in index order
    pub const ALL: [ChannelId; CHANNEL_COUNT] = [ChannelId::Servo1, ChannelId::Servo2];

    /// Array index of this channel
    pub const fn index(self) -> usize {
        match self {
            ChannelId::Servo1 => 0,
            ChannelId::Servo2 => 1,
        }
    }

    /// Lamp lit while the servo rests at its minimum
    pub const fn min_indicator(self) -> Indicator {
        match self {
            ChannelId::Servo1 => Indicator::Ld1A,
            ChannelId::Servo2 => Indicator::Ld2A,
        }
    }

    /// Lamp lit while the servo rests at its maximum
    pub const fn max_indicator(self) -> Indicator {
        match self {
            ChannelId::Servo1 => Indicator::Ld1B,
            ChannelId::Servo2 => Indicator::Ld2B,
        }
    }
}

/// One physical push button
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ButtonLine {
    /// Widen the travel of the last toggled servo
    Plus,
    /// Narrow the travel of the last toggled servo
    Minus,
    /// Toggle servo 1
    Select1,
    /// Toggle servo 2
    Select2,
}

impl ButtonLine {
    /// All lines in the fixed order the control loop services them
    pub const ALL: [ButtonLine; LINE_COUNT] = [
        ButtonLine::Plus,
        ButtonLine::Minus,
        ButtonLine::Select1,
        ButtonLine::Select2,
    ];

    /// Array index of this line
    pub const fn index(self) -> usize {
        match self {
            ButtonLine::Plus => 0,
            ButtonLine::Minus => 1,
            ButtonLine::Select1 => 2,
            ButtonLine::Select2 => 3,
        }
    }
}

/// One indicator lamp
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Indicator {
    /// Servo 1 at minimum
    Ld1A,
    /// Servo 1 at maximum
    Ld1B,
    /// Servo 2 at minimum
    Ld2A,
    /// Servo 2 at maximum
    Ld2B,
    /// Status lamp
    Led1,
    /// Spare status lamp
    Led2,
}

impl Indicator {
    /// All indicators in index order
    pub const ALL: [Indicator; INDICATOR_COUNT] = [
        Indicator::Ld1A,
        Indicator::Ld1B,
        Indicator::Ld2A,
        Indicator::Ld2B,
        Indicator::Led1,
        Indicator::Led2,
    ];

    /// Array index of this indicator
    pub const fn index(self) -> usize {
        match self {
            Indicator::Ld1A => 0,
            Indicator::Ld1B => 1,
            Indicator::Ld2A => 2,
            Indicator::Ld2B => 3,
            Indicator::Led1 => 4,
            Indicator::Led2 => 5,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_indices_match_all_order() {
        for (i, ch) in ChannelId::ALL.iter().enumerate() {
            assert_eq!(ch.index(), i);
        }
        for (i, line) in ButtonLine::ALL.iter().enumerate() {
            assert_eq!(line.index(), i);
        }
        for (i, ind) in Indicator::ALL.iter().enumerate() {
            assert_eq!(ind.index(), i);
        }
    }

    #[test]
    fn test_channel_indicator_pairs_are_distinct() {
        for ch in ChannelId::ALL {
            assert_ne!(ch.min_indicator(), ch.max_indicator());
        }
        assert_ne!(
            ChannelId::Servo1.min_indicator(),
            ChannelId::Servo2.min_indicator()
        );
    }
}
