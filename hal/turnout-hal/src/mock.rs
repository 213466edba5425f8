//! In-memory HAL implementations for host-side tests
//!
//! `MemoryWordStore` models AVR-style EEPROM: erased cells read 0xFF, words
//! are little-endian, and every physical write is counted so wear-reduction
//! behavior can be asserted.

use crate::eeprom::{WordAddress, WordStore};
use crate::gpio::{InputPin, OutputPin};
use crate::pwm::PwmChannel;

/// EEPROM image held in RAM
#[derive(Debug, Clone)]
pub struct MemoryWordStore<const BYTES: usize> {
    cells: [u8; BYTES],
    writes: usize,
}

impl<const BYTES: usize> Default for MemoryWordStore<BYTES> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const BYTES: usize> MemoryWordStore<BYTES> {
    /// Create a store in the erased state
    pub const fn new() -> Self {
        Self {
            cells: [0xFF; BYTES],
            writes: 0,
        }
    }

    /// Number of words physically written so far
    pub fn write_count(&self) -> usize {
        self.writes
    }

    /// Raw bytes of the image (for test verification)
    pub fn bytes(&self) -> &[u8; BYTES] {
        &self.cells
    }

    /// Overwrite one word without counting it as a write
    ///
    /// Used to seed an image or inject corruption.
    pub fn poke(&mut self, address: WordAddress, value: u16) {
        let at = address.offset() as usize;
        let [lo, hi] = value.to_le_bytes();
        self.cells[at] = lo;
        self.cells[at + 1] = hi;
    }
}

impl<const BYTES: usize> WordStore for MemoryWordStore<BYTES> {
    fn read_word(&mut self, address: WordAddress) -> u16 {
        let at = address.offset() as usize;
        u16::from_le_bytes([self.cells[at], self.cells[at + 1]])
    }

    fn write_word(&mut self, address: WordAddress, value: u16) {
        self.poke(address, value);
        self.writes += 1;
    }
}

/// Input pin whose level is set by the test
#[derive(Debug, Clone, Copy, Default)]
pub struct MockInputPin {
    /// Level the pin reports
    pub high: bool,
}

impl InputPin for MockInputPin {
    fn is_high(&mut self) -> bool {
        self.high
    }
}

/// Output pin that records its level
#[derive(Debug, Clone, Copy, Default)]
pub struct MockOutputPin {
    high: bool,
}

impl OutputPin for MockOutputPin {
    fn set_high(&mut self) {
        self.high = true;
    }

    fn set_low(&mut self) {
        self.high = false;
    }

    fn is_set_high(&self) -> bool {
        self.high
    }
}

/// PWM channel that records the programmed width
#[derive(Debug, Clone, Copy, Default)]
pub struct MockPwmChannel {
    width_us: u16,
}

impl PwmChannel for MockPwmChannel {
    fn set_pulse_width_us(&mut self, width_us: u16) {
        self.width_us = width_us;
    }

    fn pulse_width_us(&self) -> u16 {
        self.width_us
    }
}
