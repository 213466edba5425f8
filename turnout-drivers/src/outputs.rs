//! Combined output sink for the control loop

use turnout_core::ids::{ChannelId, Indicator};
use turnout_core::traits::{IndicatorOutputs, PulseOutputs};
use turnout_hal::{OutputPin, PwmChannel};

use crate::indicators::IndicatorBank;
use crate::servo::ServoPair;

/// Indicator lamps and servo pulses behind one value
pub struct TurnoutOutputs<P, C> {
    /// Lamp pins
    pub indicators: IndicatorBank<P>,
    /// Servo PWM channels
    pub servos: ServoPair<C>,
}

impl<P: OutputPin, C: PwmChannel> TurnoutOutputs<P, C> {
    /// Combine a lamp bank and a servo pair
    pub fn new(indicators: IndicatorBank<P>, servos: ServoPair<C>) -> Self {
        Self {
            indicators,
            servos,
        }
    }
}

impl<P: OutputPin, C> IndicatorOutputs for TurnoutOutputs<P, C> {
    fn set_indicator(&mut self, indicator: Indicator, on: bool) {
        self.indicators.set_indicator(indicator, on);
    }
}

impl<P, C: PwmChannel> PulseOutputs for TurnoutOutputs<P, C> {
    fn set_pulse_width(&mut self, channel: ChannelId, width_us: u16) {
        self.servos.set_pulse_width(channel, width_us);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::buttons::ButtonBank;
    use turnout_core::config::{TurnoutConfig, SERVO_DEFAULT_CENTER};
    use turnout_core::control::{Action, ControlLoop, TickCounter};
    use turnout_core::ids::{ButtonLine, INDICATOR_COUNT, LINE_COUNT};
    use turnout_core::input::DEBOUNCE_SAMPLES;
    use turnout_hal::mock::{MemoryWordStore, MockInputPin, MockOutputPin, MockPwmChannel};

    type Outputs = TurnoutOutputs<MockOutputPin, MockPwmChannel>;

    fn outputs() -> Outputs {
        TurnoutOutputs::new(
            IndicatorBank::new_active_high([MockOutputPin::default(); INDICATOR_COUNT]),
            ServoPair::new(
                MockPwmChannel::default(),
                MockPwmChannel::default(),
                SERVO_DEFAULT_CENTER,
            ),
        )
    }

    #[test]
    fn test_board_wiring_drives_servo_and_lamps() {
        let ticks = TickCounter::new();
        let buttons = ButtonBank::new([MockInputPin { high: true }; LINE_COUNT]);
        let mut lp = ControlLoop::new(
            &TurnoutConfig::new(),
            &ticks,
            MemoryWordStore::<32>::new(),
            buttons,
            outputs(),
        )
        .unwrap();

        // Parked at center until the first tick
        assert_eq!(lp.outputs().servos.pulse_width(ChannelId::Servo2), 1500);

        ticks.tick();
        lp.poll();
        assert_eq!(lp.outputs().servos.pulse_width(ChannelId::Servo2), 1200);
        assert!(lp.outputs().indicators.is_lit(Indicator::Ld2A));

        lp.inputs_mut().pin_mut(ButtonLine::Select2).high = false;
        let mut dispatched = None;
        for _ in 0..DEBOUNCE_SAMPLES {
            ticks.tick();
            if let Some(actions) = lp.poll() {
                if let Some(&action) = actions.first() {
                    dispatched = Some(action);
                }
            }
        }

        assert_eq!(dispatched, Some(Action::Toggle(ChannelId::Servo2)));
        assert_eq!(lp.outputs().servos.pulse_width(ChannelId::Servo2), 1208);
        assert!(!lp.outputs().indicators.is_lit(Indicator::Ld2A));
        assert!(!lp.outputs().indicators.is_lit(Indicator::Ld2B));
    }
}
