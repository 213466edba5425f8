//! Top-level configuration and validation

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::buttons::ButtonConfig;
use super::servo::ServoConfig;

/// Errors found by [`TurnoutConfig::validate`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// Absolute minimum is not below absolute maximum
    EmptyAbsoluteRange,
    /// A factory default lies outside the absolute range
    DefaultOutOfRange,
    /// Factory minimum is not below factory maximum
    DefaultsCrossed,
    /// Slew step is zero; servos would never move
    ZeroStep,
    /// Limit delta is zero; widen/narrow would never move a limit
    ZeroLimitDelta,
    /// Absolute maximum does not fit inside the PWM frame
    FrameTooShort,
}

/// Complete controller configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TurnoutConfig {
    /// Servo travel and motion
    pub servo: ServoConfig,
    /// Button wiring and dispatch
    pub buttons: ButtonConfig,
}

impl TurnoutConfig {
    /// Reference board configuration
    pub const fn new() -> Self {
        Self {
            servo: ServoConfig::new(),
            buttons: ButtonConfig::new(),
        }
    }

    /// Check the configuration for internal consistency
    pub fn validate(&self) -> Result<(), ConfigError> {
        let servo = &self.servo;

        if servo.absolute_min >= servo.absolute_max {
            return Err(ConfigError::EmptyAbsoluteRange);
        }
        if !servo.is_in_range(servo.default_min)
            || !servo.is_in_range(servo.default_max)
            || !servo.is_in_range(servo.default_center)
        {
            return Err(ConfigError::DefaultOutOfRange);
        }
        if servo.default_min >= servo.default_max {
            return Err(ConfigError::DefaultsCrossed);
        }
        if servo.step == 0 {
            return Err(ConfigError::ZeroStep);
        }
        if servo.limit_delta == 0 {
            return Err(ConfigError::ZeroLimitDelta);
        }
        if servo.absolute_max >= servo.frame_us {
            return Err(ConfigError::FrameTooShort);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_config_is_valid() {
        assert_eq!(TurnoutConfig::new().validate(), Ok(()));
        assert_eq!(TurnoutConfig::default(), TurnoutConfig::new());
    }

    #[test]
    fn test_validate_rejects_bad_ranges() {
        let mut config = TurnoutConfig::new();
        config.servo.absolute_min = 2000;
        assert_eq!(config.validate(), Err(ConfigError::EmptyAbsoluteRange));

        let mut config = TurnoutConfig::new();
        config.servo.default_max = 2100;
        assert_eq!(config.validate(), Err(ConfigError::DefaultOutOfRange));

        let mut config = TurnoutConfig::new();
        config.servo.default_min = 1800;
        assert_eq!(config.validate(), Err(ConfigError::DefaultsCrossed));
    }

    #[test]
    fn test_validate_rejects_zero_rates() {
        let mut config = TurnoutConfig::new();
        config.servo.step = 0;
        assert_eq!(config.validate(), Err(ConfigError::ZeroStep));

        let mut config = TurnoutConfig::new();
        config.servo.limit_delta = 0;
        assert_eq!(config.validate(), Err(ConfigError::ZeroLimitDelta));
    }

    #[test]
    fn test_validate_rejects_short_frame() {
        let mut config = TurnoutConfig::new();
        config.servo.frame_us = 1500;
        assert_eq!(config.validate(), Err(ConfigError::FrameTooShort));
    }
}
