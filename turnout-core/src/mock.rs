//! Test doubles for the core I/O traits
//!
//! `MockInputs` holds a raw level per button line that tests flip;
//! `MockOutputs` records the last indicator states and pulse widths.

use crate::config::Polarity;
use crate::ids::{ButtonLine, ChannelId, Indicator, CHANNEL_COUNT, INDICATOR_COUNT, LINE_COUNT};
use crate::traits::{DigitalInputs, IndicatorOutputs, PulseOutputs};

/// Button levels set by the test
#[derive(Debug, Clone)]
pub struct MockInputs {
    levels: [bool; LINE_COUNT],
    polarity: Polarity,
    reads: usize,
}

impl MockInputs {
    /// All buttons released for the given wiring
    pub fn new(polarity: Polarity) -> Self {
        Self {
            levels: [!polarity.pressed_level(); LINE_COUNT],
            polarity,
            reads: 0,
        }
    }

    /// Hold a button down
    pub fn press(&mut self, line: ButtonLine) {
        self.levels[line.index()] = self.polarity.pressed_level();
    }

    /// Let a button go
    pub fn release(&mut self, line: ButtonLine) {
        self.levels[line.index()] = !self.polarity.pressed_level();
    }

    /// Force a raw level
    pub fn set_level(&mut self, line: ButtonLine, high: bool) {
        self.levels[line.index()] = high;
    }

    /// Number of line reads so far
    pub fn reads(&self) -> usize {
        self.reads
    }
}

impl DigitalInputs for MockInputs {
    fn read_line(&mut self, line: ButtonLine) -> bool {
        self.reads += 1;
        self.levels[line.index()]
    }
}

/// Recorded indicator and pulse outputs
#[derive(Debug, Clone, Default)]
pub struct MockOutputs {
    indicators: [bool; INDICATOR_COUNT],
    pulses: [Option<u16>; CHANNEL_COUNT],
    pulse_writes: usize,
}

impl MockOutputs {
    /// Everything off, no pulse programmed
    pub fn new() -> Self {
        Self::default()
    }

    /// Last state of an indicator
    pub fn indicator(&self, indicator: Indicator) -> bool {
        self.indicators[indicator.index()]
    }

    /// Last pulse width of a channel
    pub fn pulse(&self, channel: ChannelId) -> Option<u16> {
        self.pulses[channel.index()]
    }

    /// Number of pulse width writes so far
    pub fn pulse_writes(&self) -> usize {
        self.pulse_writes
    }
}

impl IndicatorOutputs for MockOutputs {
    fn set_indicator(&mut self, indicator: Indicator, on: bool) {
        self.indicators[indicator.index()] = on;
    }
}

impl PulseOutputs for MockOutputs {
    fn set_pulse_width(&mut self, channel: ChannelId, width: u16) {
        self.pulses[channel.index()] = Some(width);
        self.pulse_writes += 1;
    }
}
