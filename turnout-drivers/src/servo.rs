//! Servo pulse outputs
//!
//! Two PWM channels, one per servo, fed with pulse widths in microseconds.
//! Both channels are parked at the neutral pulse as soon as the pair is
//! built, before calibration has been read.

use turnout_core::ids::{ChannelId, CHANNEL_COUNT};
use turnout_core::traits::PulseOutputs;
use turnout_hal::PwmChannel;

/// A pair of servo PWM channels
pub struct ServoPair<C> {
    channels: [C; CHANNEL_COUNT],
}

impl<C: PwmChannel> ServoPair<C> {
    /// Create the pair and program both channels to `center_us`
    pub fn new(servo1: C, servo2: C, center_us: u16) -> Self {
        let mut pair = Self {
            channels: [servo1, servo2],
        };
        for channel in ChannelId::ALL {
            pair.set_pulse_width(channel, center_us);
        }
        pair
    }

    /// Pulse width currently programmed on a channel
    pub fn pulse_width(&self, channel: ChannelId) -> u16 {
        self.channels[channel.index()].pulse_width_us()
    }

    /// Release the channels
    pub fn into_channels(self) -> [C; CHANNEL_COUNT] {
        self.channels
    }
}

impl<C: PwmChannel> PulseOutputs for ServoPair<C> {
    fn set_pulse_width(&mut self, channel: ChannelId, width_us: u16) {
        self.channels[channel.index()].set_pulse_width_us(width_us);
    }
}
