//! Indicator lamp outputs
//!
//! Six lamps on GPIO pins. The bank can drive either polarity; lamps wired
//! to sink current through the pin are `inverted`.

use turnout_core::ids::{Indicator, INDICATOR_COUNT};
use turnout_core::traits::IndicatorOutputs;
use turnout_hal::OutputPin;

/// Six indicator pins in indicator order
pub struct IndicatorBank<P> {
    pins: [P; INDICATOR_COUNT],
    /// If true, lamp ON = pin LOW
    inverted: bool,
}

impl<P: OutputPin> IndicatorBank<P> {
    /// Create a bank with every lamp off
    ///
    /// Pins are ordered Ld1A, Ld1B, Ld2A, Ld2B, Led1, Led2.
    pub fn new(pins: [P; INDICATOR_COUNT], inverted: bool) -> Self {
        let mut bank = Self { pins, inverted };
        bank.set_all_indicators(false);
        bank
    }

    /// Create a bank whose lamps light on a high pin
    pub fn new_active_high(pins: [P; INDICATOR_COUNT]) -> Self {
        Self::new(pins, false)
    }

    /// Create a bank whose lamps light on a low pin
    pub fn new_active_low(pins: [P; INDICATOR_COUNT]) -> Self {
        Self::new(pins, true)
    }

    /// Whether a lamp is currently lit
    pub fn is_lit(&self, indicator: Indicator) -> bool {
        self.pins[indicator.index()].is_set_high() != self.inverted
    }
}

impl<P: OutputPin> IndicatorOutputs for IndicatorBank<P> {
    fn set_indicator(&mut self, indicator: Indicator, on: bool) {
        self.pins[indicator.index()].set_state(on != self.inverted);
    }
}
