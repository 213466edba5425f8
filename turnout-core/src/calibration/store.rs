//! Calibration store over a word-addressed backend
//!
//! Policy: a bad signature or version is not an error. The store writes a
//! complete factory record straight away so a power cut right after boot
//! still finds valid data, and returns the factory values.

use turnout_hal::{WordAddress, WordStore};

use super::record::{
    field_address, CalibrationRecord, ChannelCalibration, Field, CALIBRATION_SIGNATURE,
    CALIBRATION_VERSION, SIGNATURE_ADDRESS, VERSION_ADDRESS,
};
use crate::config::ServoConfig;
use crate::ids::ChannelId;

/// Calibration store
pub struct CalibrationStore<S> {
    store: S,
    config: ServoConfig,
}

impl<S: WordStore> CalibrationStore<S> {
    /// Wrap a word store
    pub fn new(store: S, config: ServoConfig) -> Self {
        Self { store, config }
    }

    /// Read the header and check it against the current format
    pub fn header_valid(&mut self) -> bool {
        let signature = self.store.read_word(SIGNATURE_ADDRESS);
        let version = self.store.read_word(VERSION_ADDRESS);
        signature == CALIBRATION_SIGNATURE && version == CALIBRATION_VERSION
    }

    /// Load the record, resetting it to factory values if the header is bad
    ///
    /// Loaded values are sanitized (clamped into the absolute range, limits
    /// ordered, target between limits) but not written back.
    pub fn load(&mut self) -> CalibrationRecord {
        if !self.header_valid() {
            warn!("calibration header mismatch, restoring factory record");
            return self.reset();
        }

        let mut record = CalibrationRecord::factory(&self.config);
        for channel in ChannelId::ALL {
            let raw = ChannelCalibration {
                min: self.store.read_word(field_address(channel, Field::Min)),
                max: self.store.read_word(field_address(channel, Field::Max)),
                target: self.store.read_word(field_address(channel, Field::Target)),
            };
            let (cal, corrected) = raw.sanitized(&self.config);
            if corrected {
                warn!(
                    "calibration for {:?} out of range: {}..{} @ {}",
                    channel, raw.min, raw.max, raw.target
                );
            }
            record.channels[channel.index()] = cal;
        }

        info!("calibration loaded");
        record
    }

    /// Write a complete factory record and return it
    pub fn reset(&mut self) -> CalibrationRecord {
        let record = CalibrationRecord::factory(&self.config);

        self.persist(SIGNATURE_ADDRESS, CALIBRATION_SIGNATURE);
        self.persist(VERSION_ADDRESS, CALIBRATION_VERSION);
        for channel in ChannelId::ALL {
            let cal = record.channel(channel);
            self.persist_field(channel, Field::Min, cal.min);
            self.persist_field(channel, Field::Max, cal.max);
            self.persist_field(channel, Field::Target, cal.target);
        }

        record
    }

    /// Make the word at `address` hold `value`
    ///
    /// Identical values are not rewritten.
    pub fn persist(&mut self, address: WordAddress, value: u16) {
        if self.store.update_word(address, value) {
            trace!("persisted {} at {}", value, address.offset());
        }
    }

    /// Persist one field of a channel
    pub fn persist_field(&mut self, channel: ChannelId, field: Field, value: u16) {
        self.persist(field_address(channel, field), value);
    }

    /// Servo configuration used for defaults and clamping
    pub fn config(&self) -> &ServoConfig {
        &self.config
    }

    /// Access the backing store
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Mutable access to the backing store
    pub fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }

    /// Release the backing store
    pub fn into_inner(self) -> S {
        self.store
    }
}
