//! Servo travel and motion configuration

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Hard lower bound on any pulse width, in µs
pub const SERVO_ABSOLUTE_MIN: u16 = 1000;

/// Hard upper bound on any pulse width, in µs
pub const SERVO_ABSOLUTE_MAX: u16 = 2000;

/// Out-of-the-box minimum limit
pub const SERVO_DEFAULT_MIN: u16 = 1200;

/// Pulse width programmed before calibration is installed
pub const SERVO_DEFAULT_CENTER: u16 = 1500;

/// Out-of-the-box maximum limit
pub const SERVO_DEFAULT_MAX: u16 = 1800;

/// Position change per tick while moving
pub const SERVO_STEP: u16 = 8;

/// Limit change per widen/narrow press
pub const SERVO_LIMIT_DELTA: u16 = 10;

/// Servo frame period (50 Hz)
pub const SERVO_FRAME_US: u16 = 20_000;

/// Servo travel and motion parameters
///
/// All positions are pulse widths in microseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ServoConfig {
    /// Lowest pulse width any limit may reach
    pub absolute_min: u16,
    /// Highest pulse width any limit may reach
    pub absolute_max: u16,
    /// Factory minimum limit
    pub default_min: u16,
    /// Factory center, used before calibration is loaded
    pub default_center: u16,
    /// Factory maximum limit
    pub default_max: u16,
    /// Slew step per tick
    pub step: u16,
    /// Limit adjustment per button press
    pub limit_delta: u16,
    /// PWM frame period
    pub frame_us: u16,
}

impl Default for ServoConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl ServoConfig {
    /// Reference board configuration
    pub const fn new() -> Self {
        Self {
            absolute_min: SERVO_ABSOLUTE_MIN,
            absolute_max: SERVO_ABSOLUTE_MAX,
            default_min: SERVO_DEFAULT_MIN,
            default_center: SERVO_DEFAULT_CENTER,
            default_max: SERVO_DEFAULT_MAX,
            step: SERVO_STEP,
            limit_delta: SERVO_LIMIT_DELTA,
            frame_us: SERVO_FRAME_US,
        }
    }

    /// Clamp a position into the absolute range
    ///
    /// Never panics, even on an empty range; the upper bound wins.
    pub fn clamp(&self, position: u16) -> u16 {
        position.max(self.absolute_min).min(self.absolute_max)
    }

    /// Check if a position is inside the absolute range
    pub fn is_in_range(&self, position: u16) -> bool {
        position >= self.absolute_min && position <= self.absolute_max
    }

    /// Ticks needed to travel `distance` at the configured step
    pub fn ticks_for(&self, distance: u16) -> u16 {
        if self.step == 0 {
            return u16::MAX;
        }
        distance.div_ceil(self.step)
    }
}
