//! GPIO pin abstractions
//!
//! Button lines are plain digital inputs sampled once per tick; indicator
//! lamps are plain digital outputs. Port direction and pull-up setup happen
//! in the chip HAL before these pins are handed over.

/// Digital output pin driving an indicator lamp
pub trait OutputPin {
    /// Drive the pin high (logic 1)
    fn set_high(&mut self);

    /// Drive the pin low (logic 0)
    fn set_low(&mut self);

    /// Drive the pin to a specific level
    fn set_state(&mut self, high: bool) {
        if high {
            self.set_high();
        } else {
            self.set_low();
        }
    }

    /// Level the pin was last driven to
    fn is_set_high(&self) -> bool;
}

/// Digital input pin carrying a raw button level
///
/// Reads take `&mut self` because some ports latch or clear state on read.
pub trait InputPin {
    /// Check if the pin reads high (logic 1)
    fn is_high(&mut self) -> bool;

    /// Check if the pin reads low (logic 0)
    fn is_low(&mut self) -> bool {
        !self.is_high()
    }
}
