//! Calibration record layout and values
//!
//! Word layout (byte addresses), kept stable across firmware versions:
//!
//! | Field            | Address |
//! |------------------|---------|
//! | signature        | 0x00    |
//! | version          | 0x02    |
//! | channel 1 min    | 0x04    |
//! | channel 1 max    | 0x06    |
//! | channel 1 target | 0x08    |
//! | channel 2 min    | 0x0A    |
//! | channel 2 max    | 0x0C    |
//! | channel 2 target | 0x0E    |

use turnout_hal::WordAddress;

use crate::config::ServoConfig;
use crate::ids::{ChannelId, CHANNEL_COUNT};

/// Signature word identifying a written record ("EE")
pub const CALIBRATION_SIGNATURE: u16 = 0x4545;

/// Record format version (major 1, minor 0)
pub const CALIBRATION_VERSION: u16 = 0x0100;

/// Address of the signature word
pub const SIGNATURE_ADDRESS: WordAddress = WordAddress::new(0x00);

/// Address of the version word
pub const VERSION_ADDRESS: WordAddress = WordAddress::new(0x02);

/// Address of the first channel block
const CHANNEL_BASE: u16 = 0x04;

/// Bytes per channel block
const CHANNEL_STRIDE: u16 = 6;

/// One persisted field of a channel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Field {
    /// Minimum limit
    Min,
    /// Maximum limit
    Max,
    /// Last commanded target
    Target,
}

impl Field {
    const fn offset(self) -> u16 {
        match self {
            Field::Min => 0,
            Field::Max => 2,
            Field::Target => 4,
        }
    }
}

/// Fixed address of a channel field
pub const fn field_address(channel: ChannelId, field: Field) -> WordAddress {
    WordAddress::new(CHANNEL_BASE + channel.index() as u16 * CHANNEL_STRIDE + field.offset())
}

/// Calibration of one channel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ChannelCalibration {
    /// Minimum limit
    pub min: u16,
    /// Maximum limit
    pub max: u16,
    /// Last commanded target
    pub target: u16,
}

impl ChannelCalibration {
    /// Factory calibration: full default travel, parked at minimum
    pub const fn factory(config: &ServoConfig) -> Self {
        Self {
            min: config.default_min,
            max: config.default_max,
            target: config.default_min,
        }
    }

    /// Force the values into a consistent state
    ///
    /// Each value is clamped into the absolute range, crossed limits are
    /// swapped and the target is clamped between the limits. Returns the
    /// corrected calibration and whether anything changed.
    pub fn sanitized(self, config: &ServoConfig) -> (Self, bool) {
        let mut min = config.clamp(self.min);
        let mut max = config.clamp(self.max);
        if min > max {
            core::mem::swap(&mut min, &mut max);
        }
        let target = config.clamp(self.target).clamp(min, max);

        let fixed = Self { min, max, target };
        (fixed, fixed != self)
    }
}

/// The whole persisted record
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct CalibrationRecord {
    /// Signature word
    pub signature: u16,
    /// Format version word
    pub version: u16,
    /// Per-channel calibration, in channel index order
    pub channels: [ChannelCalibration; CHANNEL_COUNT],
}

impl CalibrationRecord {
    /// Factory record for every channel
    pub const fn factory(config: &ServoConfig) -> Self {
        Self {
            signature: CALIBRATION_SIGNATURE,
            version: CALIBRATION_VERSION,
            channels: [ChannelCalibration::factory(config); CHANNEL_COUNT],
        }
    }

    /// Check if the header matches the current format
    pub fn is_valid(&self) -> bool {
        self.signature == CALIBRATION_SIGNATURE && self.version == CALIBRATION_VERSION
    }

    /// Calibration of one channel
    pub fn channel(&self, channel: ChannelId) -> &ChannelCalibration {
        &self.channels[channel.index()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_addresses_match_layout() {
        assert_eq!(SIGNATURE_ADDRESS.offset(), 0x00);
        assert_eq!(VERSION_ADDRESS.offset(), 0x02);
        assert_eq!(field_address(ChannelId::Servo1, Field::Min).offset(), 0x04);
        assert_eq!(field_address(ChannelId::Servo1, Field::Max).offset(), 0x06);
        assert_eq!(field_address(ChannelId::Servo1, Field::Target).offset(), 0x08);
        assert_eq!(field_address(ChannelId::Servo2, Field::Min).offset(), 0x0A);
        assert_eq!(field_address(ChannelId::Servo2, Field::Max).offset(), 0x0C);
        assert_eq!(field_address(ChannelId::Servo2, Field::Target).offset(), 0x0E);
    }

    #[test]
    fn test_factory_record() {
        let record = CalibrationRecord::factory(&ServoConfig::new());
        assert!(record.is_valid());
        for channel in ChannelId::ALL {
            let cal = record.channel(channel);
            assert_eq!((cal.min, cal.max, cal.target), (1200, 1800, 1200));
        }
    }

    #[test]
    fn test_sanitized_clamps_each_value() {
        let config = ServoConfig::new();
        let raw = ChannelCalibration {
            min: 0,
            max: 0xFFFF,
            target: 2500,
        };
        let (fixed, changed) = raw.sanitized(&config);
        assert!(changed);
        assert_eq!(fixed.min, 1000);
        assert_eq!(fixed.max, 2000);
        assert_eq!(fixed.target, 2000);
    }

    #[test]
    fn test_sanitized_swaps_crossed_limits() {
        let config = ServoConfig::new();
        let raw = ChannelCalibration {
            min: 1700,
            max: 1300,
            target: 1900,
        };
        let (fixed, changed) = raw.sanitized(&config);
        assert!(changed);
        assert_eq!((fixed.min, fixed.max, fixed.target), (1300, 1700, 1700));
    }

    #[test]
    fn test_sanitized_leaves_valid_values() {
        let config = ServoConfig::new();
        let raw = ChannelCalibration {
            min: 1150,
            max: 1850,
            target: 1850,
        };
        assert_eq!(raw.sanitized(&config), (raw, false));
    }
}
