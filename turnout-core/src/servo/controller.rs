//! Servo position controller
//!
//! Owns every channel plus the memory of which channel was toggled last.
//! Limit and target changes are written through the calibration store
//! before the in-memory state changes, so a reset mid-operation never
//! leaves the EEPROM behind the servo.

use turnout_hal::WordStore;

use super::channel::{ChannelPosition, LimitSide, ServoChannel};
use crate::calibration::{CalibrationRecord, CalibrationStore, Field};
use crate::config::ServoConfig;
use crate::ids::{ChannelId, CHANNEL_COUNT};
use crate::traits::ServoOutputs;

/// Outcome of a toggle, widen or narrow request
///
/// Only informational: refused and empty requests are not errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Adjustment {
    /// Target swapped to the other limit
    Toggled {
        /// Channel toggled
        channel: ChannelId,
        /// New target
        target: u16,
    },
    /// A limit moved and the target followed it
    LimitMoved {
        /// Channel adjusted
        channel: ChannelId,
        /// Limit that moved
        side: LimitSide,
        /// New limit and target
        value: u16,
    },
    /// The new limit would have met or crossed the opposite one
    Refused {
        /// Channel whose adjustment was refused
        channel: ChannelId,
        /// Limit that would have moved
        side: LimitSide,
    },
    /// The target is at neither limit, so there is nothing to trim
    NotAtLimit(ChannelId),
    /// No channel has been toggled yet
    NoChannel,
}

/// Direction of a limit adjustment
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Trim {
    Widen,
    Narrow,
}

/// Position controller for all servo channels
#[derive(Debug, Clone)]
pub struct ServoController {
    channels: [ServoChannel; CHANNEL_COUNT],
    last_touched: Option<ChannelId>,
    config: ServoConfig,
}

impl ServoController {
    /// Install a loaded calibration record
    pub fn new(config: ServoConfig, record: &CalibrationRecord) -> Self {
        let channels = ChannelId::ALL.map(|id| ServoChannel::from_calibration(id, record.channel(id)));
        Self {
            channels,
            last_touched: None,
            config,
        }
    }

    /// State of one channel
    pub fn channel(&self, id: ChannelId) -> &ServoChannel {
        &self.channels[id.index()]
    }

    /// All channels in index order
    pub fn channels(&self) -> &[ServoChannel; CHANNEL_COUNT] {
        &self.channels
    }

    /// Channel that widen/narrow currently act on
    pub fn last_touched(&self) -> Option<ChannelId> {
        self.last_touched
    }

    /// Motion configuration
    pub fn config(&self) -> &ServoConfig {
        &self.config
    }

    /// Advance every channel one tick and refresh its outputs
    ///
    /// Each channel moves at most `step` toward its target, then its pulse
    /// width and its pair of limit indicators are written.
    pub fn advance_all<O: ServoOutputs + ?Sized>(&mut self, outputs: &mut O) {
        let step = self.config.step;

        for ch in self.channels.iter_mut() {
            let before = ch.current();
            let current = ch.step_toward_target(step);
            let id = ch.id();

            outputs.set_pulse_width(id, current);

            let (at_min, at_max) = match ch.position() {
                ChannelPosition::AtMin => (true, false),
                ChannelPosition::AtMax => (false, true),
                ChannelPosition::InMotion => (false, false),
            };
            outputs.set_indicator(id.min_indicator(), at_min);
            outputs.set_indicator(id.max_indicator(), at_max);

            if before != current && ch.is_settled() {
                debug!("{:?} arrived at {}", id, current);
            }
        }
    }

    /// Send a channel to its other limit
    ///
    /// A target at neither limit goes to the minimum.
    pub fn toggle<S: WordStore>(
        &mut self,
        id: ChannelId,
        store: &mut CalibrationStore<S>,
    ) -> Adjustment {
        let ch = &self.channels[id.index()];
        let target = if ch.target() == ch.max() {
            ch.min()
        } else if ch.target() == ch.min() {
            ch.max()
        } else {
            warn!("{:?} target {} at neither limit", id, ch.target());
            ch.min()
        };

        store.persist_field(id, Field::Target, target);
        self.channels[id.index()].set_target(target);
        self.last_touched = Some(id);

        Adjustment::Toggled {
            channel: id,
            target,
        }
    }

    /// Extend the limit the last toggled channel is heading for
    pub fn widen<S: WordStore>(&mut self, store: &mut CalibrationStore<S>) -> Adjustment {
        self.trim(Trim::Widen, store)
    }

    /// Pull in the limit the last toggled channel is heading for
    pub fn narrow<S: WordStore>(&mut self, store: &mut CalibrationStore<S>) -> Adjustment {
        self.trim(Trim::Narrow, store)
    }

    fn trim<S: WordStore>(&mut self, trim: Trim, store: &mut CalibrationStore<S>) -> Adjustment {
        let Some(id) = self.last_touched else {
            return Adjustment::NoChannel;
        };

        let cfg = self.config;
        let delta = cfg.limit_delta;
        let ch = &self.channels[id.index()];

        let (side, value) = if ch.target() == ch.min() {
            let value = match trim {
                Trim::Widen => ch.min().saturating_sub(delta).max(cfg.absolute_min),
                Trim::Narrow => ch.min().saturating_add(delta).min(cfg.absolute_max),
            };
            if value >= ch.max() {
                debug!("{:?} min {} would cross max {}", id, value, ch.max());
                return Adjustment::Refused {
                    channel: id,
                    side: LimitSide::Min,
                };
            }
            (LimitSide::Min, value)
        } else if ch.target() == ch.max() {
            let value = match trim {
                Trim::Widen => ch.max().saturating_add(delta).min(cfg.absolute_max),
                Trim::Narrow => ch.max().saturating_sub(delta).max(cfg.absolute_min),
            };
            if value <= ch.min() {
                debug!("{:?} max {} would cross min {}", id, value, ch.min());
                return Adjustment::Refused {
                    channel: id,
                    side: LimitSide::Max,
                };
            }
            (LimitSide::Max, value)
        } else {
            return Adjustment::NotAtLimit(id);
        };

        let field = match side {
            LimitSide::Min => Field::Min,
            LimitSide::Max => Field::Max,
        };
        store.persist_field(id, field, value);
        store.persist_field(id, Field::Target, value);

        let ch = &mut self.channels[id.index()];
        ch.set_limit(side, value);
        ch.set_target(value);

        info!("{:?} {:?} limit now {}", id, side, value);
        Adjustment::LimitMoved {
            channel: id,
            side,
            value,
        }
    }
}
