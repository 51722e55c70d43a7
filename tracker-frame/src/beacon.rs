//! Bluetooth beacon scan results.
//!
//! Every beacon starts with a status byte carrying its type in the two low
//! bits. What follows depends on the slot-info format of the scan:
//!
//! | slot info    | iBeacon          | Eddystone          | AltBeacon        | full beacon      |
//! |--------------|------------------|--------------------|------------------|------------------|
//! | `Truncated`  | uuid, major, minor (2 B each) | instance (6 B) | id1, id2, id3 (2 B each) | -  |
//! | `Full`       | uuid (16 B), major, minor | namespace (10 B), instance (6 B) | id1 (16 B), id2, id3 | id1 (16 B), id2, id3 |
//! | `SlotMatch`  | rssi byte, major, minor | rssi byte, instance | rssi byte, id2, id3 | rssi byte, id2, id3, 2 B padding |

use heapless::Vec;
use tracker_macros::record;

use crate::codec::{HexBytes, Uuid};
use crate::{Error, FrameCursor, Result, ScanStatus, MAX_SCAN_ENTRIES};

/// The beacon record format used by every beacon of a scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlotInfo {
    /// Identifiers shortened to two bytes.
    Truncated = 0,
    /// Full 16-byte identifiers.
    Full = 1,
    /// Identifiers matched against a configured slot, with a separate RSSI
    /// byte.
    SlotMatch = 2,
}

impl TryFrom<u8> for SlotInfo {
    type Error = Error;

    fn try_from(value: u8) -> Result<Self> {
        match value {
            0 => Ok(Self::Truncated),
            1 => Ok(Self::Full),
            2 => Ok(Self::SlotMatch),
            _ => {
                #[cfg(feature = "panic")]
                {
                    panic!("unsupported slot info: {value}");
                }
                #[allow(unreachable_code)]
                return Err(Error::InvalidSlotInfo(value));
            }
        }
    }
}

/// The type tag of a beacon.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BeaconType {
    /// Apple iBeacon.
    IBeacon = 0,
    /// Google Eddystone.
    Eddystone = 1,
    /// AltBeacon.
    AltBeacon = 2,
    /// Full beacon.
    FullBeacon = 3,
}

impl From<u8> for BeaconType {
    fn from(value: u8) -> Self {
        match value & 0b11 {
            0 => Self::IBeacon,
            1 => Self::Eddystone,
            2 => Self::AltBeacon,
            _ => Self::FullBeacon,
        }
    }
}

/// A beacon identifier, shortened or complete.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BeaconId {
    /// The last two bytes of the identifier.
    Short(HexBytes<2>),
    /// The complete identifier.
    Uuid(Uuid),
}

impl core::fmt::Display for BeaconId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Short(id) => write!(f, "{id}"),
            Self::Uuid(id) => write!(f, "{id}"),
        }
    }
}

/// The type specific fields of a beacon.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BeaconKind {
    /// Apple iBeacon.
    IBeacon {
        /// Proximity UUID, absent in slot-matched scans.
        uuid: Option<BeaconId>,
        /// Major number.
        major: HexBytes<2>,
        /// Minor number.
        minor: HexBytes<2>,
    },
    /// Google Eddystone.
    Eddystone {
        /// Namespace, only present in full scans.
        namespace: Option<HexBytes<10>>,
        /// Instance.
        instance: HexBytes<6>,
    },
    /// AltBeacon.
    AltBeacon {
        /// First identifier, absent in slot-matched scans.
        id1: Option<BeaconId>,
        /// Second identifier.
        id2: HexBytes<2>,
        /// Third identifier.
        id3: HexBytes<2>,
    },
    /// Full beacon.
    FullBeacon {
        /// First identifier, absent in slot-matched scans.
        id1: Option<Uuid>,
        /// Second identifier.
        id2: HexBytes<2>,
        /// Third identifier.
        id3: HexBytes<2>,
    },
}

impl BeaconKind {
    /// Return the type tag of this beacon.
    pub const fn beacon_type(&self) -> BeaconType {
        match self {
            Self::IBeacon { .. } => BeaconType::IBeacon,
            Self::Eddystone { .. } => BeaconType::Eddystone,
            Self::AltBeacon { .. } => BeaconType::AltBeacon,
            Self::FullBeacon { .. } => BeaconType::FullBeacon,
        }
    }
}

impl core::fmt::Display for BeaconType {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::IBeacon => write!(f, "ibeacon"),
            Self::Eddystone => write!(f, "eddystone"),
            Self::AltBeacon => write!(f, "altbeacon"),
            Self::FullBeacon => write!(f, "fullbeacon"),
        }
    }
}

/// A beacon seen by the scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Beacon {
    /// Signal strength in dBm.
    pub rssi: i16,
    /// The matched slot, only present in slot-matched scans.
    pub slot: Option<u8>,
    /// Type specific fields.
    pub kind: BeaconKind,
}

/// Scale a packed RSSI value to dBm.
pub const fn rssi_from_raw(raw: u8) -> i16 {
    27 - 2 * raw as i16
}

fn invalid_beacon_type(beacon_type: BeaconType) -> Error {
    #[cfg(feature = "panic")]
    {
        panic!("unsupported beacon type: {beacon_type:?}");
    }
    #[allow(unreachable_code)]
    return Error::InvalidBeaconType(beacon_type as u8);
}

impl Beacon {
    /// Decode one beacon in the given slot-info format.
    pub fn decode(cursor: &mut FrameCursor<'_>, slot_info: SlotInfo) -> Result<Self> {
        let status = cursor.read_u8()?;
        let beacon_type = BeaconType::from(status);

        let (rssi, slot) = match slot_info {
            SlotInfo::Truncated | SlotInfo::Full => (rssi_from_raw(status >> 2), None),
            SlotInfo::SlotMatch => {
                let rssi = rssi_from_raw(cursor.read_u8()? & 0b11_1111);
                (rssi, Some((status >> 2) & 0b111))
            }
        };

        let kind = match (slot_info, beacon_type) {
            (SlotInfo::Truncated, BeaconType::IBeacon) => BeaconKind::IBeacon {
                uuid: Some(BeaconId::Short(cursor.read_hex()?)),
                major: cursor.read_hex()?,
                minor: cursor.read_hex()?,
            },
            (SlotInfo::Truncated, BeaconType::Eddystone) => BeaconKind::Eddystone {
                namespace: None,
                instance: cursor.read_hex()?,
            },
            (SlotInfo::Truncated, BeaconType::AltBeacon) => BeaconKind::AltBeacon {
                id1: Some(BeaconId::Short(cursor.read_hex()?)),
                id2: cursor.read_hex()?,
                id3: cursor.read_hex()?,
            },
            (SlotInfo::Truncated, BeaconType::FullBeacon) => {
                return Err(invalid_beacon_type(beacon_type));
            }
            (SlotInfo::Full, BeaconType::IBeacon) => BeaconKind::IBeacon {
                uuid: Some(BeaconId::Uuid(Uuid(cursor.read_array()?))),
                major: cursor.read_hex()?,
                minor: cursor.read_hex()?,
            },
            (SlotInfo::Full, BeaconType::Eddystone) => BeaconKind::Eddystone {
                namespace: Some(cursor.read_hex()?),
                instance: cursor.read_hex()?,
            },
            (SlotInfo::Full, BeaconType::AltBeacon) => BeaconKind::AltBeacon {
                id1: Some(BeaconId::Uuid(Uuid(cursor.read_array()?))),
                id2: cursor.read_hex()?,
                id3: cursor.read_hex()?,
            },
            (SlotInfo::Full, BeaconType::FullBeacon) => BeaconKind::FullBeacon {
                id1: Some(Uuid(cursor.read_array()?)),
                id2: cursor.read_hex()?,
                id3: cursor.read_hex()?,
            },
            (SlotInfo::SlotMatch, BeaconType::IBeacon) => BeaconKind::IBeacon {
                uuid: None,
                major: cursor.read_hex()?,
                minor: cursor.read_hex()?,
            },
            (SlotInfo::SlotMatch, BeaconType::Eddystone) => BeaconKind::Eddystone {
                namespace: None,
                instance: cursor.read_hex()?,
            },
            (SlotInfo::SlotMatch, BeaconType::AltBeacon) => BeaconKind::AltBeacon {
                id1: None,
                id2: cursor.read_hex()?,
                id3: cursor.read_hex()?,
            },
            (SlotInfo::SlotMatch, BeaconType::FullBeacon) => {
                let id2 = cursor.read_hex()?;
                let id3 = cursor.read_hex()?;
                // Full beacons are padded to six bytes.
                cursor.skip(2)?;
                BeaconKind::FullBeacon {
                    id1: None,
                    id2,
                    id3,
                }
            }
        };

        Ok(Self { rssi, slot, kind })
    }
}

#[record]
/// A reader for the Bluetooth scan info byte.
pub struct BluetoothInfoRecord {
    /// Return the number of beacons that follow.
    #[bits(3)]
    beacon_count: u8,
    /// Return the raw scan status.
    #[bits(2)]
    status: u8,
    /// Return the raw slot-info selector.
    #[bits(2)]
    slot_info: u8,
    #[bits(1)]
    _reserved: u8,
}

/// A Bluetooth beacon scan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BluetoothInfo {
    /// Scan outcome, absent when the frame carries a single beacon without
    /// scan info.
    pub status: Option<ScanStatus>,
    /// The format of the beacon records.
    pub slot_info: SlotInfo,
    /// Beacons in the order they were reported.
    pub beacons: Vec<Beacon, MAX_SCAN_ENTRIES>,
}

impl BluetoothInfo {
    /// Decode a scan info byte followed by the beacons it announces.
    pub fn decode_scan(cursor: &mut FrameCursor<'_>) -> Result<Self> {
        let info = BluetoothInfoRecord::new(cursor.read_array::<1>()?)?;
        let slot_info = SlotInfo::try_from(info.slot_info())?;

        // The format is checked before the count, so an empty scan with an
        // unknown format fails as well.
        let mut beacons = Vec::new();
        for _ in 0..info.beacon_count() {
            // A 3-bit count never exceeds the capacity.
            let _ = beacons.push(Beacon::decode(cursor, slot_info)?);
        }

        Ok(Self {
            status: Some(ScanStatus::from(info.status())),
            slot_info,
            beacons,
        })
    }

    /// Decode a slot-info selector byte followed by exactly one beacon.
    pub fn decode_single(cursor: &mut FrameCursor<'_>) -> Result<Self> {
        let slot_info = SlotInfo::try_from(cursor.read_u8()?)?;

        let mut beacons = Vec::new();
        let _ = beacons.push(Beacon::decode(cursor, slot_info)?);

        Ok(Self {
            status: None,
            slot_info,
            beacons,
        })
    }
}
