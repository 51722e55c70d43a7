//! Device profiles and the field decoders they select.

use crate::sensors::*;
use crate::{BluetoothInfo, FrameCursor, Result};

/// A field decoder.
pub type FieldDecoder<T> = for<'f> fn(&mut FrameCursor<'f>) -> Result<T>;

/// The decoders for the fields whose encoding differs between profiles.
///
/// Temperature, Wi-Fi and the retransmit counter are shared and not part of
/// the descriptor.
#[derive(Clone, Copy)]
pub struct FieldDecoders {
    /// Light intensity.
    pub light: FieldDecoder<Light>,
    /// Current acceleration.
    pub accelerometer: FieldDecoder<Acceleration>,
    /// Maximum acceleration.
    pub max_acceleration: FieldDecoder<MaxAcceleration>,
    /// External sensor.
    pub external_sensor: FieldDecoder<ExternalSensor>,
    /// Bluetooth beacons.
    pub bluetooth: FieldDecoder<BluetoothInfo>,
    /// Relative humidity.
    pub relative_humidity: FieldDecoder<f64>,
    /// Air pressure.
    pub air_pressure: FieldDecoder<u32>,
    /// Man-down state.
    pub man_down: FieldDecoder<ManDown>,
    /// Tilt.
    pub tilt: FieldDecoder<Tilt>,
}

impl FieldDecoders {
    /// Scaled values, typed external sensors and a counted Bluetooth scan.
    pub const RICH: Self = Self {
        light: decode_light_lux,
        accelerometer: decode_acceleration_scaled,
        max_acceleration: decode_max_acceleration_scaled,
        external_sensor: decode_external_sensor_typed,
        bluetooth: BluetoothInfo::decode_scan,
        relative_humidity: decode_humidity_centi,
        air_pressure: decode_pressure_u24,
        man_down: decode_man_down_status,
        tilt: decode_tilt_angles,
    };

    /// Raw values, presence flags and a single Bluetooth beacon.
    pub const COMPACT: Self = Self {
        light: decode_light_raw,
        accelerometer: decode_acceleration_raw,
        max_acceleration: decode_max_acceleration_raw,
        external_sensor: decode_external_sensor_raw,
        bluetooth: BluetoothInfo::decode_single,
        relative_humidity: decode_humidity_half,
        air_pressure: decode_pressure_doubled,
        man_down: decode_man_down_flag,
        tilt: decode_tilt_flag,
    };
}

impl core::fmt::Debug for FieldDecoders {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("FieldDecoders").finish_non_exhaustive()
    }
}

/// The device family that produced a frame.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "fuzz", derive(arbitrary::Arbitrary))]
pub enum Profile {
    /// Devices reporting scaled values.
    #[default]
    Rich,
    /// Devices reporting raw values.
    Compact,
}

impl Profile {
    /// Return the field decoders of this profile.
    pub const fn field_decoders(&self) -> &'static FieldDecoders {
        match self {
            Self::Rich => &FieldDecoders::RICH,
            Self::Compact => &FieldDecoders::COMPACT,
        }
    }
}

impl core::fmt::Display for Profile {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Rich => write!(f, "rich"),
            Self::Compact => write!(f, "compact"),
        }
    }
}
