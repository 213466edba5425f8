//! Per-channel position state and slew stepping

use crate::calibration::ChannelCalibration;
use crate::ids::ChannelId;

/// Where a channel currently is relative to its limits
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ChannelPosition {
    /// Resting exactly at the minimum limit
    AtMin,
    /// Resting exactly at the maximum limit
    AtMax,
    /// Anywhere else
    InMotion,
}

/// One of the two travel limits of a channel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LimitSide {
    /// Minimum limit
    Min,
    /// Maximum limit
    Max,
}

/// Position state of one servo
///
/// Invariant: `min <= max`, both inside the configured absolute range.
/// `current` may sit outside `[min, max]` for a while after a limit moves;
/// it slews back toward `target`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ServoChannel {
    id: ChannelId,
    current: u16,
    target: u16,
    min: u16,
    max: u16,
}

impl ServoChannel {
    /// Install a loaded calibration; the servo starts at its target
    pub fn from_calibration(id: ChannelId, cal: &ChannelCalibration) -> Self {
        Self {
            id,
            current: cal.target,
            target: cal.target,
            min: cal.min,
            max: cal.max,
        }
    }

    /// Channel identity
    pub fn id(&self) -> ChannelId {
        self.id
    }

    /// Position currently commanded to the servo
    pub fn current(&self) -> u16 {
        self.current
    }

    /// Position the servo is slewing toward
    pub fn target(&self) -> u16 {
        self.target
    }

    /// Minimum limit
    pub fn min(&self) -> u16 {
        self.min
    }

    /// Maximum limit
    pub fn max(&self) -> u16 {
        self.max
    }

    /// Check if the servo has reached its target
    pub fn is_settled(&self) -> bool {
        self.current == self.target
    }

    /// Indicator state for the current position
    pub fn position(&self) -> ChannelPosition {
        if self.current == self.min {
            ChannelPosition::AtMin
        } else if self.current == self.max {
            ChannelPosition::AtMax
        } else {
            ChannelPosition::InMotion
        }
    }

    /// Move `current` one step toward `target` without overshooting
    ///
    /// Returns the new current position.
    pub fn step_toward_target(&mut self, step: u16) -> u16 {
        if self.current < self.target {
            self.current = self.current.saturating_add(step).min(self.target);
        } else if self.current > self.target {
            self.current = self.current.saturating_sub(step).max(self.target);
        }
        self.current
    }

    pub(crate) fn set_target(&mut self, target: u16) {
        self.target = target;
    }

    pub(crate) fn set_limit(&mut self, side: LimitSide, value: u16) {
        match side {
            LimitSide::Min => self.min = value,
            LimitSide::Max => self.max = value,
        }
    }

    /// Current value of a limit
    pub fn limit(&self, side: LimitSide) -> u16 {
        match side {
            LimitSide::Min => self.min,
            LimitSide::Max => self.max,
        }
    }

    /// Snapshot as a calibration entry
    pub fn calibration(&self) -> ChannelCalibration {
        ChannelCalibration {
            min: self.min,
            max: self.max,
            target: self.target,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn channel(min: u16, max: u16, target: u16) -> ServoChannel {
        ServoChannel::from_calibration(ChannelId::Servo1, &ChannelCalibration { min, max, target })
    }

    #[test]
    fn test_starts_at_target() {
        let ch = channel(1200, 1800, 1800);
        assert_eq!(ch.current(), 1800);
        assert!(ch.is_settled());
        assert_eq!(ch.position(), ChannelPosition::AtMax);
    }

    #[test]
    fn test_step_clamps_at_target() {
        let mut ch = channel(1200, 1800, 1200);
        ch.set_target(1205);
        assert_eq!(ch.step_toward_target(8), 1205);
        assert!(ch.is_settled());

        ch.set_target(1200);
        assert_eq!(ch.step_toward_target(8), 1200);
    }

    #[test]
    fn test_position_reports_motion() {
        let mut ch = channel(1200, 1800, 1200);
        ch.set_target(1800);
        ch.step_toward_target(8);
        assert_eq!(ch.position(), ChannelPosition::InMotion);
    }

    #[test]
    fn test_step_near_u16_bounds_does_not_wrap() {
        let mut ch = channel(0, u16::MAX, 3);
        ch.set_target(0);
        assert_eq!(ch.step_toward_target(8), 0);

        let mut ch = channel(0, u16::MAX, u16::MAX - 3);
        ch.set_target(u16::MAX);
        assert_eq!(ch.step_toward_target(8), u16::MAX);
    }

    proptest! {
        #[test]
        fn prop_slew_is_bounded_and_exact(
            start in 1000u16..=2000,
            target in 1000u16..=2000,
            step in 1u16..64,
        ) {
            let mut ch = channel(1000, 2000, start);
            ch.set_target(target);

            let expected = start.abs_diff(target).div_ceil(step);
            let mut ticks = 0u16;
            while !ch.is_settled() {
                let before = ch.current();
                let after = ch.step_toward_target(step);
                prop_assert!(before.abs_diff(after) <= step);
                // Never passes the target
                if start < target {
                    prop_assert!(after <= target);
                } else {
                    prop_assert!(after >= target);
                }
                ticks += 1;
                prop_assert!(ticks <= expected);
            }
            prop_assert_eq!(ticks, expected);
        }
    }
}
