//! Servo pulse output
//!
//! RC servos expect a pulse every 20 ms whose width (nominally 1000 to
//! 2000 µs) encodes the horn angle. The chip HAL owns the timer and exposes
//! one compare channel per servo.

/// One hardware PWM compare channel configured for a servo frame
pub trait PwmChannel {
    /// Set the pulse width in microseconds
    ///
    /// Implementations clamp to the frame period; a width at or above the
    /// period would hold the line high permanently.
    fn set_pulse_width_us(&mut self, width_us: u16);

    /// Pulse width last programmed, in microseconds
    fn pulse_width_us(&self) -> u16;
}
