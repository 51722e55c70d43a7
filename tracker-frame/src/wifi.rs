//! Wi-Fi positioning scan results.

use heapless::Vec;
use tracker_macros::record;

use crate::codec::MacAddress;
use crate::{FrameCursor, Result};

/// The largest number of entries a 3-bit count can announce.
pub const MAX_SCAN_ENTRIES: usize = 7;

/// Outcome of a Wi-Fi or Bluetooth scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanStatus {
    /// The scan succeeded.
    Success,
    /// The scan failed.
    Failed,
    /// Nothing was found.
    NoAccessPoints,
    /// Any other status code.
    Unknown(u8),
}

impl ScanStatus {
    /// Return the raw status code.
    pub const fn code(&self) -> u8 {
        match self {
            Self::Success => 0,
            Self::Failed => 1,
            Self::NoAccessPoints => 2,
            Self::Unknown(code) => *code,
        }
    }
}

impl From<u8> for ScanStatus {
    fn from(value: u8) -> Self {
        match value {
            0 => Self::Success,
            1 => Self::Failed,
            2 => Self::NoAccessPoints,
            code => Self::Unknown(code),
        }
    }
}

impl core::fmt::Display for ScanStatus {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Success => write!(f, "success"),
            Self::Failed => write!(f, "failed"),
            Self::NoAccessPoints => write!(f, "no_access_points"),
            Self::Unknown(code) => write!(f, "unknown ({code})"),
        }
    }
}

#[record]
/// A reader for the Wi-Fi scan info byte.
pub struct WifiInfoRecord {
    /// Return the number of access points that follow.
    #[bits(3)]
    access_point_count: u8,
    /// Return the raw scan status.
    #[bits(2)]
    status: u8,
    /// Returns `true` when every access point carries a signal strength.
    #[bits(1)]
    signal_strength_present: bool,
    #[bits(2)]
    _reserved: u8,
}

/// An access point seen by the scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AccessPoint {
    /// The BSSID.
    pub mac_address: MacAddress,
    /// Signal strength in dBm, if reported.
    pub signal_strength: Option<i8>,
}

/// A Wi-Fi positioning scan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WifiInfo {
    /// Scan outcome.
    pub status: ScanStatus,
    /// Access points in the order they were reported.
    pub access_points: Vec<AccessPoint, MAX_SCAN_ENTRIES>,
}

impl WifiInfo {
    /// Decode the scan info byte and the access points it announces.
    pub fn decode(cursor: &mut FrameCursor<'_>) -> Result<Self> {
        let info = WifiInfoRecord::new(cursor.read_array::<1>()?)?;

        let mut access_points = Vec::new();
        for _ in 0..info.access_point_count() {
            let mac_address = MacAddress(cursor.read_array()?);
            let signal_strength = if info.signal_strength_present() {
                Some(cursor.read_i8()?)
            } else {
                None
            };

            // A 3-bit count never exceeds the capacity.
            let _ = access_points.push(AccessPoint {
                mac_address,
                signal_strength,
            });
        }

        Ok(Self {
            status: ScanStatus::from(info.status()),
            access_points,
        })
    }
}
