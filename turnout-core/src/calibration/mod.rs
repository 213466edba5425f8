//! Persisted servo calibration
//!
//! Per-channel limits and the last commanded target survive power loss in
//! a small word-addressed record. The record is validated and read once at
//! startup; afterwards each field is written on its own as it changes.

pub mod record;
pub mod store;

pub use record::{
    field_address, CalibrationRecord, ChannelCalibration, Field, CALIBRATION_SIGNATURE,
    CALIBRATION_VERSION, SIGNATURE_ADDRESS, VERSION_ADDRESS,
};
pub use store::CalibrationStore;
