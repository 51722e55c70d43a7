//! Decoding of the binary uplink frames sent by battery-powered trackers.
//!
//! A frame starts with three fixed bytes (flags, CRC, battery level). The flag
//! byte announces which optional sections follow: an onboard sensor section,
//! whose one or two mask bytes in turn announce the individual readings, and a
//! GPS fix. Every optional field is read in a fixed order, so a single wrong
//! presence bit shifts everything after it.
//!
//! Two device families use the same skeleton with different field encodings.
//! They are selected with a [`Profile`]:
//! - [`Profile::Rich`]: scaled values, typed external sensors, a Bluetooth
//!   section with a beacon count.
//! - [`Profile::Compact`]: raw values and a single Bluetooth beacon.
//!
//! ## Decoding a frame
//! ```
//! # use tracker_frame::{decode, ButtonClickReason, Profile};
//! let frame = decode(Profile::Rich, &[0x00, 0xab, 0x64]).unwrap();
//!
//! assert_eq!(frame.crc, 0xab);
//! assert_eq!(frame.battery_level, 0x64);
//! assert_eq!(frame.button_click_reason, ButtonClickReason::None);
//! assert!(frame.sensors.is_none());
//! assert!(frame.gps.is_none());
//! ```
//!
//! ## Sections
//!
//! - [x] Header: [`Header`], CRC and battery level
//! - [x] Sensor content masks: [`SensorContent`]
//! - [x] Temperature, light, accelerometer
//! - [x] Wi-Fi positioning: [`WifiInfo`]
//! - [x] External sensors: [`ExternalSensor`]
//! - [x] Bluetooth beacons: [`BluetoothInfo`]
//! - [x] Relative humidity, air pressure
//! - [x] Man-down: [`ManDown`]
//! - [x] Tilt: [`Tilt`]
//! - [x] Retransmit counter
//! - [x] GPS: [`GpsFix`]
#![no_std]
#![deny(missing_docs)]
#![deny(unsafe_code)]

#[cfg(any(feature = "std", test))]
#[macro_use]
extern crate std;

#[macro_use]
pub(crate) mod utils;

#[cfg(test)]
mod tests;

pub mod codec;

mod cursor;
pub use cursor::FrameCursor;

mod header;
pub use header::*;

mod sensors;
pub use sensors::*;

mod wifi;
pub use wifi::*;

mod beacon;
pub use beacon::*;

mod gps;
pub use gps::*;

mod profile;
pub use profile::*;

mod frame;
pub use frame::*;

/// An error that can occur when decoding an uplink frame.
///
/// Any error aborts the whole decode; no partial frame is returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// A read needed more bytes than the frame has left.
    #[error("unexpected end of frame: {requested} bytes requested, {remaining} remaining")]
    UnexpectedEndOfFrame {
        /// Number of bytes the read needed.
        requested: usize,
        /// Number of bytes left in the frame.
        remaining: usize,
    },
    /// The beacon type tag is not valid for the active slot-info format.
    #[error("invalid beacon type {0}")]
    InvalidBeaconType(u8),
    /// The Bluetooth slot-info selector is not a known format.
    #[error("invalid slot info {0}")]
    InvalidSlotInfo(u8),
    /// The external sensor type tag is not known.
    #[error("invalid external sensor type {0:#04x}")]
    InvalidExternalSensorType(u8),
}

/// A type alias for `Result<T, tracker_frame::Error>`.
pub type Result<T> = core::result::Result<T, Error>;
