//! Push button inputs
//!
//! The bank reports raw pin levels. Pull-up wiring and press polarity are
//! handled by the debouncer, not here.

use turnout_core::ids::{ButtonLine, LINE_COUNT};
use turnout_core::traits::DigitalInputs;
use turnout_hal::InputPin;

/// Four button input pins in line order
pub struct ButtonBank<P> {
    pins: [P; LINE_COUNT],
}

impl<P: InputPin> ButtonBank<P> {
    /// Create a bank from pins ordered Plus, Minus, Select1, Select2
    pub fn new(pins: [P; LINE_COUNT]) -> Self {
        Self { pins }
    }

    /// Pin backing a line
    pub fn pin(&self, line: ButtonLine) -> &P {
        &self.pins[line.index()]
    }

    /// Mutable pin backing a line
    pub fn pin_mut(&mut self, line: ButtonLine) -> &mut P {
        &mut self.pins[line.index()]
    }

    /// Release the pins
    pub fn into_pins(self) -> [P; LINE_COUNT] {
        self.pins
    }
}

impl<P: InputPin> DigitalInputs for ButtonBank<P> {
    fn read_line(&mut self, line: ButtonLine) -> bool {
        self.pins[line.index()].is_high()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use turnout_core::config::Polarity;
    use turnout_core::input::{ButtonState, ButtonTracker, DEBOUNCE_SAMPLES};
    use turnout_hal::mock::MockInputPin;

    fn pulled_up() -> ButtonBank<MockInputPin> {
        ButtonBank::new([MockInputPin { high: true }; LINE_COUNT])
    }

    #[test]
    fn test_reads_each_line_from_its_pin() {
        let mut bank = pulled_up();
        bank.pin_mut(ButtonLine::Minus).high = false;

        assert!(bank.read_line(ButtonLine::Plus));
        assert!(!bank.read_line(ButtonLine::Minus));
        assert!(bank.read_line(ButtonLine::Select1));
        assert!(bank.read_line(ButtonLine::Select2));
    }

    #[test]
    fn test_grounded_pin_debounces_to_pressed() {
        let mut bank = pulled_up();
        let mut tracker = ButtonTracker::new(Polarity::ActiveLow);

        bank.pin_mut(ButtonLine::Select2).high = false;
        for _ in 0..DEBOUNCE_SAMPLES {
            tracker.sample_all(&mut bank);
        }

        assert!(tracker.is_changed(ButtonLine::Select2));
        assert_eq!(tracker.state(ButtonLine::Select2), ButtonState::Pressed);
        assert_eq!(tracker.state(ButtonLine::Plus), ButtonState::Released);
    }
}
