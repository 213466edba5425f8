//! Digital input, indicator output and servo pulse output traits

use crate::ids::{ButtonLine, ChannelId, Indicator};

/// Source of raw button levels
pub trait DigitalInputs {
    /// Read the raw level of a button line (true = logic high)
    fn read_line(&mut self, line: ButtonLine) -> bool;
}

/// Sink for indicator lamp states
pub trait IndicatorOutputs {
    /// Switch an indicator on or off
    fn set_indicator(&mut self, indicator: Indicator, on: bool);

    /// Switch every indicator to the same state
    fn set_all_indicators(&mut self, on: bool) {
        for indicator in Indicator::ALL {
            self.set_indicator(indicator, on);
        }
    }
}

/// Sink for servo pulse widths
pub trait PulseOutputs {
    /// Program the pulse width of a channel, in servo position units (µs)
    fn set_pulse_width(&mut self, channel: ChannelId, width: u16);
}

/// Everything the servo controller drives once per tick
pub trait ServoOutputs: IndicatorOutputs + PulseOutputs {}

impl<T: IndicatorOutputs + PulseOutputs> ServoOutputs for T {}
