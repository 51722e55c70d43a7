//! Fixed frame header: flag byte, CRC and battery level.

use tracker_macros::record;

use crate::{FrameCursor, Result};

#[record]
#[derive(Debug)]
/// A reader for the three fixed leading bytes of a frame.
/// ```notrust
/// +-------+-----+---------------+
/// | Flags | CRC | Battery level |
/// +-------+-----+---------------+
/// 0       1     2               3
/// ```
pub struct HeaderRecord {
    /// The uplink was triggered by a button press.
    #[bits(1)]
    uplink_reason_button: bool,
    /// The uplink was triggered by movement.
    #[bits(1)]
    uplink_reason_movement: bool,
    /// The uplink was triggered by a GPIO event.
    #[bits(1)]
    uplink_reason_gpio: bool,
    /// A GPS record ends the frame.
    #[bits(1)]
    contains_gps: bool,
    /// An onboard sensor section follows the header.
    #[bits(1)]
    contains_onboard_sensors: bool,
    /// The special flag is set.
    #[bits(1)]
    contains_special: bool,
    #[bits(2)]
    _reserved: u8,
    /// Return the CRC byte.
    crc: u8,
    /// Return the battery level byte.
    battery_level: u8,
}

/// The decoded flag byte.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Header {
    /// The uplink was triggered by a button press.
    pub uplink_reason_button: bool,
    /// The uplink was triggered by movement.
    pub uplink_reason_movement: bool,
    /// The uplink was triggered by a GPIO event.
    pub uplink_reason_gpio: bool,
    /// A GPS fix is present.
    pub contains_gps: bool,
    /// Onboard sensor readings are present.
    pub contains_onboard_sensors: bool,
    /// The special flag is set.
    pub contains_special: bool,
}

impl Header {
    /// Decode the header from its reader.
    pub fn parse<T: AsRef<[u8]>>(record: &HeaderRecord<T>) -> Self {
        Self {
            uplink_reason_button: record.uplink_reason_button(),
            uplink_reason_movement: record.uplink_reason_movement(),
            uplink_reason_gpio: record.uplink_reason_gpio(),
            contains_gps: record.contains_gps(),
            contains_onboard_sensors: record.contains_onboard_sensors(),
            contains_special: record.contains_special(),
        }
    }
}

/// Read the header, CRC and battery level from the start of a frame.
pub(crate) fn decode_header(cursor: &mut FrameCursor<'_>) -> Result<(Header, u8, u8)> {
    let record = HeaderRecord::new(cursor.read_slice(HeaderRecord::<&[u8]>::size())?)?;
    Ok((Header::parse(&record), record.crc(), record.battery_level()))
}

/// Why the button triggered the uplink.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum ButtonClickReason {
    /// No button press.
    #[default]
    None,
    /// A single click.
    Single,
    /// A long press.
    Long,
    /// A double click.
    Double,
}

impl ButtonClickReason {
    /// Classify the press from the header's button bit and the sensor
    /// section's button event bit.
    ///
    /// A long press only shows up as an event bit, so the second value is
    /// `true` when the header's button reason has to be promoted.
    pub const fn classify(header_button: bool, button_event: bool) -> (Self, bool) {
        match (header_button, button_event) {
            (false, false) => (Self::None, false),
            (true, false) => (Self::Single, false),
            (false, true) => (Self::Long, true),
            (true, true) => (Self::Double, false),
        }
    }
}

impl core::fmt::Display for ButtonClickReason {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::None => write!(f, "none"),
            Self::Single => write!(f, "single"),
            Self::Long => write!(f, "long"),
            Self::Double => write!(f, "double"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flag_bits() {
        let record = HeaderRecord::new([0b0011_1111, 0xab, 0x64]).unwrap();
        let header = Header::parse(&record);
        assert!(header.uplink_reason_button);
        assert!(header.uplink_reason_movement);
        assert!(header.uplink_reason_gpio);
        assert!(header.contains_gps);
        assert!(header.contains_onboard_sensors);
        assert!(header.contains_special);
        assert_eq!(record.crc(), 0xab);
        assert_eq!(record.battery_level(), 0x64);

        let header = Header::parse(&HeaderRecord::new([0b1100_1000, 0, 0]).unwrap());
        assert_eq!(
            header,
            Header {
                contains_gps: true,
                ..Header::default()
            }
        );
    }

    #[test]
    fn record_size() {
        assert_eq!(HeaderRecord::<&[u8]>::size(), 3);
        assert!(HeaderRecord::new(&[0x00, 0x01][..]).is_err());
    }

    #[test]
    fn button_classification() {
        use ButtonClickReason::*;
        assert_eq!(ButtonClickReason::classify(false, false), (None, false));
        assert_eq!(ButtonClickReason::classify(true, false), (Single, false));
        assert_eq!(ButtonClickReason::classify(false, true), (Long, true));
        assert_eq!(ButtonClickReason::classify(true, true), (Double, false));
    }
}
