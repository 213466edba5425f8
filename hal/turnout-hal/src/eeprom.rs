//! Word-addressed persistent storage
//!
//! The calibration record is a handful of 16-bit words at fixed byte
//! addresses in on-chip EEPROM. Fields are written one at a time, so the
//! store must never touch bytes outside the addressed word.

/// Byte address of a 16-bit word in persistent storage
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct WordAddress(pub u16);

impl WordAddress {
    /// Create an address from a byte offset
    pub const fn new(offset: u16) -> Self {
        Self(offset)
    }

    /// Byte offset of the low byte
    pub const fn offset(self) -> u16 {
        self.0
    }
}

/// Word-granular persistent store
///
/// Writes are synchronous and assumed to succeed. Backends with a failure
/// mode (external I2C EEPROM, flash emulation) must retry or latch a fault
/// themselves rather than leave a half-written word.
pub trait WordStore {
    /// Read the word at `address`
    fn read_word(&mut self, address: WordAddress) -> u16;

    /// Write `value` to the word at `address`
    fn write_word(&mut self, address: WordAddress, value: u16);

    /// Write `value` only if the stored word differs
    ///
    /// EEPROM cells have a limited erase budget; skipping identical writes
    /// keeps repeated limit presses at an end stop from wearing the cell.
    /// Returns true if a write was issued.
    fn update_word(&mut self, address: WordAddress, value: u16) -> bool {
        if self.read_word(address) == value {
            return false;
        }
        self.write_word(address, value);
        true
    }
}

impl<T: WordStore + ?Sized> WordStore for &mut T {
    fn read_word(&mut self, address: WordAddress) -> u16 {
        (**self).read_word(address)
    }

    fn write_word(&mut self, address: WordAddress, value: u16) {
        (**self).write_word(address, value)
    }

    fn update_word(&mut self, address: WordAddress, value: u16) -> bool {
        (**self).update_word(address, value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::MemoryWordStore;

    #[test]
    fn test_address_offset() {
        assert_eq!(WordAddress::new(0x0E).offset(), 0x0E);
        assert_eq!(WordAddress::new(0x04), WordAddress(0x04));
    }

    #[test]
    fn test_update_word_skips_identical_value() {
        let mut store = MemoryWordStore::<16>::new();
        let addr = WordAddress::new(0x04);

        assert!(store.update_word(addr, 1200));
        assert_eq!(store.write_count(), 1);

        assert!(!store.update_word(addr, 1200));
        assert_eq!(store.write_count(), 1);
        assert_eq!(store.read_word(addr), 1200);
    }

    fn seed_version<S: WordStore>(mut store: S) {
        store.update_word(WordAddress::new(0x02), 0x0100);
    }

    #[test]
    fn test_update_through_mutable_reference() {
        let mut store = MemoryWordStore::<16>::new();
        seed_version(&mut store);
        assert_eq!(store.read_word(WordAddress::new(0x02)), 0x0100);
    }
}
