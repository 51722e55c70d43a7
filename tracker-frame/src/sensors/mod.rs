//! Onboard sensor section: content masks and the readings they announce.

use bitflags::bitflags;

use crate::{BluetoothInfo, FieldDecoders, FrameCursor, Result, WifiInfo};

mod fields;
pub use fields::*;

bitflags! {
    /// The capabilities announced by the one or two sensor content mask
    /// bytes.
    ///
    /// The low byte is mask byte 1 without its continuation bit, the high
    /// byte is mask byte 2.
    /// ```notrust
    /// mask 1: +------+-------+-----------+-----------+------+--------------+----------+------+
    ///         | Temp | Light | Acc. cur. | Acc. max. | WiFi | Button event | External | More |
    ///         +------+-------+-----------+-----------+------+--------------+----------+------+
    /// mask 2: +-----------+----------+----------+----------+------+------------+----------+
    ///         | Bluetooth | Humidity | Pressure | Man-down | Tilt | Retransmit | Reserved |
    ///         +-----------+----------+----------+----------+------+------------+----------+
    /// ```
    #[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
    pub struct SensorContent: u16 {
        /// Temperature.
        const TEMPERATURE = 1 << 0;
        /// Light intensity.
        const LIGHT = 1 << 1;
        /// Current acceleration.
        const ACCELEROMETER_CURRENT = 1 << 2;
        /// Maximum acceleration.
        const ACCELEROMETER_MAX = 1 << 3;
        /// Wi-Fi positioning scan.
        const WIFI_POSITIONING = 1 << 4;
        /// Button event info. Carries no data of its own.
        const BUTTON_EVENT_INFO = 1 << 5;
        /// External sensor.
        const EXTERNAL_SENSORS = 1 << 6;
        /// Bluetooth beacon scan.
        const BLUETOOTH_DATA = 1 << 8;
        /// Relative humidity.
        const RELATIVE_HUMIDITY = 1 << 9;
        /// Air pressure.
        const AIR_PRESSURE = 1 << 10;
        /// Man-down state.
        const MAN_DOWN = 1 << 11;
        /// Tilt.
        const TILT = 1 << 12;
        /// Retransmit counter.
        const RETRANSMIT_COUNT = 1 << 13;
    }
}

impl SensorContent {
    const MORE_CONTENT: u8 = 0b1000_0000;

    /// Combine the mask bytes. A missing second mask means none of its
    /// capabilities are present.
    pub fn from_masks(first: u8, second: Option<u8>) -> Self {
        let first = (first & !Self::MORE_CONTENT) as u16;
        let second = (second.unwrap_or(0) & 0b0011_1111) as u16;
        Self::from_bits_truncate(first | second << 8)
    }

    /// Read the first mask byte and, if announced, the second.
    pub fn decode(cursor: &mut FrameCursor<'_>) -> Result<Self> {
        let first = cursor.read_u8()?;
        let second = if first & Self::MORE_CONTENT != 0 {
            Some(cursor.read_u8()?)
        } else {
            None
        };

        Ok(Self::from_masks(first, second))
    }
}

impl core::fmt::Display for SensorContent {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        bitflags::parser::to_writer(self, f)
    }
}

/// The readings of an onboard sensor section.
///
/// A field is `Some` exactly when its bit is set in [`content`].
///
/// [`content`]: SensorReadings::content
#[derive(Debug, Default, Clone, PartialEq)]
pub struct SensorReadings {
    /// The decoded content masks.
    pub content: SensorContent,
    /// Temperature in °C.
    pub temperature: Option<f64>,
    /// Light intensity.
    pub light: Option<Light>,
    /// Current acceleration.
    pub accelerometer: Option<Acceleration>,
    /// Maximum acceleration.
    pub max_acceleration: Option<MaxAcceleration>,
    /// Wi-Fi positioning scan.
    pub wifi: Option<WifiInfo>,
    /// External sensor.
    pub external_sensor: Option<ExternalSensor>,
    /// Bluetooth beacon scan.
    pub bluetooth: Option<BluetoothInfo>,
    /// Relative humidity in %.
    pub relative_humidity: Option<f64>,
    /// Air pressure.
    pub air_pressure: Option<u32>,
    /// Man-down state.
    pub man_down: Option<ManDown>,
    /// Tilt.
    pub tilt: Option<Tilt>,
    /// Retransmit counter.
    pub retransmit_count: Option<u8>,
}

fn optional<'f, T>(
    present: bool,
    cursor: &mut FrameCursor<'f>,
    decode: fn(&mut FrameCursor<'f>) -> Result<T>,
) -> Result<Option<T>> {
    if present {
        decode(cursor).map(Some)
    } else {
        Ok(None)
    }
}

impl SensorReadings {
    /// Decode every reading announced by `content`.
    ///
    /// Readings are laid out in a fixed order that differs from the order of
    /// the mask bits: the external sensor comes before the Bluetooth scan.
    pub fn decode(
        content: SensorContent,
        cursor: &mut FrameCursor<'_>,
        decoders: &FieldDecoders,
    ) -> Result<Self> {
        let has = |flag| content.contains(flag);

        let temperature = optional(has(SensorContent::TEMPERATURE), cursor, decode_temperature)?;
        let light = optional(has(SensorContent::LIGHT), cursor, decoders.light)?;
        let accelerometer = optional(
            has(SensorContent::ACCELEROMETER_CURRENT),
            cursor,
            decoders.accelerometer,
        )?;
        let max_acceleration = optional(
            has(SensorContent::ACCELEROMETER_MAX),
            cursor,
            decoders.max_acceleration,
        )?;
        let wifi = optional(has(SensorContent::WIFI_POSITIONING), cursor, WifiInfo::decode)?;
        let external_sensor = optional(
            has(SensorContent::EXTERNAL_SENSORS),
            cursor,
            decoders.external_sensor,
        )?;
        let bluetooth = optional(has(SensorContent::BLUETOOTH_DATA), cursor, decoders.bluetooth)?;
        let relative_humidity = optional(
            has(SensorContent::RELATIVE_HUMIDITY),
            cursor,
            decoders.relative_humidity,
        )?;
        let air_pressure = optional(has(SensorContent::AIR_PRESSURE), cursor, decoders.air_pressure)?;
        let man_down = optional(has(SensorContent::MAN_DOWN), cursor, decoders.man_down)?;
        let tilt = optional(has(SensorContent::TILT), cursor, decoders.tilt)?;
        let retransmit_count = optional(
            has(SensorContent::RETRANSMIT_COUNT),
            cursor,
            decode_retransmit_count,
        )?;

        Ok(Self {
            content,
            temperature,
            light,
            accelerometer,
            max_acceleration,
            wifi,
            external_sensor,
            bluetooth,
            relative_humidity,
            air_pressure,
            man_down,
            tilt,
            retransmit_count,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_mask() {
        let data = [0b0010_0011, 0xff];
        let mut c = FrameCursor::new(&data);
        let content = SensorContent::decode(&mut c).unwrap();

        assert_eq!(
            content,
            SensorContent::TEMPERATURE | SensorContent::LIGHT | SensorContent::BUTTON_EVENT_INFO
        );
        // The second byte is not a mask.
        assert_eq!(c.position(), 1);
    }

    #[test]
    fn second_mask() {
        let data = [0b1000_0000, 0b1111_1111];
        let mut c = FrameCursor::new(&data);
        let content = SensorContent::decode(&mut c).unwrap();

        assert_eq!(
            content,
            SensorContent::BLUETOOTH_DATA
                | SensorContent::RELATIVE_HUMIDITY
                | SensorContent::AIR_PRESSURE
                | SensorContent::MAN_DOWN
                | SensorContent::TILT
                | SensorContent::RETRANSMIT_COUNT
        );
        assert_eq!(c.position(), 2);
    }

    #[test]
    fn missing_second_mask() {
        let data = [0b1000_0001];
        let mut c = FrameCursor::new(&data);
        assert!(SensorContent::decode(&mut c).is_err());
    }
}
