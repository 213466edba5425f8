//! Button wiring and dispatch configuration

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Electrical level of a pressed button
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Polarity {
    /// Button pulls a pulled-up line to ground
    #[default]
    ActiveLow,
    /// Button drives the line high
    ActiveHigh,
}

impl Polarity {
    /// Whether a raw level means "pressed"
    pub const fn is_pressed(self, high: bool) -> bool {
        match self {
            Polarity::ActiveLow => !high,
            Polarity::ActiveHigh => high,
        }
    }

    /// Raw level a pressed button produces
    pub const fn pressed_level(self) -> bool {
        matches!(self, Polarity::ActiveHigh)
    }
}

/// Which debounced transitions dispatch a button action
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum TriggerEdge {
    /// Every debounced change, press or release
    #[default]
    Any,
    /// Only transitions into the pressed state
    Press,
}

/// Button configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ButtonConfig {
    /// Wiring of every button line
    pub polarity: Polarity,
    /// Edges that dispatch actions
    pub trigger: TriggerEdge,
}

impl ButtonConfig {
    /// Reference board: pull-ups, dispatch on every change
    pub const fn new() -> Self {
        Self {
            polarity: Polarity::ActiveLow,
            trigger: TriggerEdge::Any,
        }
    }
}
