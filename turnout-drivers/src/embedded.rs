//! Adapters from `embedded-hal` 1.0 to the turnout HAL traits
//!
//! The turnout HAL is infallible. A failed read keeps the last good level
//! and a failed write is counted, so a flaky pin shows up as a stuck button
//! or lamp instead of stopping the control loop.

use embedded_hal::digital as eh_digital;
use embedded_hal::pwm::SetDutyCycle;
#[cfg(feature = "defmt")]
use embedded_hal::{digital::Error as _, pwm::Error as _};
use turnout_core::config::SERVO_FRAME_US;
use turnout_hal::{InputPin, OutputPin, PwmChannel};

/// Input pin backed by an `embedded-hal` pin
pub struct EhInput<P> {
    pin: P,
    last: bool,
}

impl<P: eh_digital::InputPin> EhInput<P> {
    /// Wrap a pin, assuming it idles at `idle_high` until the first good read
    pub fn new(pin: P, idle_high: bool) -> Self {
        Self {
            pin,
            last: idle_high,
        }
    }

    /// Wrap a pin with a pull-up
    pub fn pulled_up(pin: P) -> Self {
        Self::new(pin, true)
    }

    /// Release the pin
    pub fn into_inner(self) -> P {
        self.pin
    }
}

impl<P: eh_digital::InputPin> InputPin for EhInput<P> {
    fn is_high(&mut self) -> bool {
        match self.pin.is_high() {
            Ok(high) => self.last = high,
            Err(_e) => {
                #[cfg(feature = "defmt")]
                defmt::warn!("input read failed: {:?}", defmt::Debug2Format(&_e.kind()));
            }
        }
        self.last
    }
}

/// Output pin backed by an `embedded-hal` pin
pub struct EhOutput<P> {
    pin: P,
    high: bool,
    errors: u16,
}

impl<P: eh_digital::OutputPin> EhOutput<P> {
    /// Wrap a pin and drive it low
    pub fn new(pin: P) -> Self {
        let mut out = Self {
            pin,
            high: false,
            errors: 0,
        };
        out.set_low();
        out
    }

    /// Number of writes the pin rejected
    pub fn error_count(&self) -> u16 {
        self.errors
    }

    /// Release the pin
    pub fn into_inner(self) -> P {
        self.pin
    }

    fn drive(&mut self, high: bool) {
        let result = if high {
            self.pin.set_high()
        } else {
            self.pin.set_low()
        };
        match result {
            Ok(()) => self.high = high,
            Err(_e) => {
                self.errors = self.errors.saturating_add(1);
                #[cfg(feature = "defmt")]
                defmt::warn!("output write failed: {:?}", defmt::Debug2Format(&_e.kind()));
            }
        }
    }
}

impl<P: eh_digital::OutputPin> OutputPin for EhOutput<P> {
    fn set_high(&mut self) {
        self.drive(true);
    }

    fn set_low(&mut self) {
        self.drive(false);
    }

    fn is_set_high(&self) -> bool {
        self.high
    }
}

/// Servo pulse output on an `embedded-hal` PWM channel
///
/// The channel's counter must already be running at the servo frame rate;
/// pulse widths are scaled against `frame_us`.
pub struct EhPwm<C> {
    channel: C,
    frame_us: u16,
    width_us: u16,
    errors: u16,
}

impl<C: SetDutyCycle> EhPwm<C> {
    /// Wrap a channel running a standard 50 Hz servo frame
    pub fn new(channel: C) -> Self {
        Self::with_frame(channel, SERVO_FRAME_US)
    }

    /// Wrap a channel running a frame of `frame_us`
    pub fn with_frame(channel: C, frame_us: u16) -> Self {
        Self {
            channel,
            frame_us: frame_us.max(1),
            width_us: 0,
            errors: 0,
        }
    }

    /// Number of writes the channel rejected
    pub fn error_count(&self) -> u16 {
        self.errors
    }

    /// Release the channel
    pub fn into_inner(self) -> C {
        self.channel
    }
}

impl<C: SetDutyCycle> PwmChannel for EhPwm<C> {
    fn set_pulse_width_us(&mut self, width_us: u16) {
        let width_us = width_us.min(self.frame_us);
        match self.channel.set_duty_cycle_fraction(width_us, self.frame_us) {
            Ok(()) => self.width_us = width_us,
            Err(_e) => {
                self.errors = self.errors.saturating_add(1);
                #[cfg(feature = "defmt")]
                defmt::warn!("pwm write failed: {:?}", defmt::Debug2Format(&_e.kind()));
            }
        }
    }

    fn pulse_width_us(&self) -> u16 {
        self.width_us
    }
}
