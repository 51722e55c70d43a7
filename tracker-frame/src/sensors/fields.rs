//! Decoders for the individual sensor readings.
//!
//! Decoders named after an encoding rather than a field are profile
//! specific; [`FieldDecoders`] picks the right ones.
//!
//! [`FieldDecoders`]: crate::FieldDecoders

use tracker_macros::record;

use crate::codec::{self, byte_to_degrees, scale};
use crate::{Error, FrameCursor, Result};

/// Temperature as hundredths of a degree.
pub fn decode_temperature(cursor: &mut FrameCursor<'_>) -> Result<f64> {
    Ok(scale(cursor.read_i16()?, 100.0))
}

/// Retransmit counter, a raw byte.
pub fn decode_retransmit_count(cursor: &mut FrameCursor<'_>) -> Result<u8> {
    cursor.read_u8()
}

/// Light intensity.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Light {
    /// Scaled from a 4-bit exponent and 12-bit mantissa.
    Lux(f64),
    /// Raw sensor value.
    Raw(u16),
}

/// Light as exponent and mantissa.
pub fn decode_light_lux(cursor: &mut FrameCursor<'_>) -> Result<Light> {
    let raw = cursor.read_u16()?;
    Ok(Light::Lux(codec::light_from_exponent_mantissa(raw)))
}

/// Light as a raw value.
pub fn decode_light_raw(cursor: &mut FrameCursor<'_>) -> Result<Light> {
    cursor.read_u16().map(Light::Raw)
}

/// Current acceleration on three axes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Acceleration {
    /// In g, from thousandths of a g.
    Scaled {
        /// X axis.
        x: f64,
        /// Y axis.
        y: f64,
        /// Z axis.
        z: f64,
    },
    /// Raw signed values.
    Raw {
        /// X axis.
        x: i8,
        /// Y axis.
        y: i8,
        /// Z axis.
        z: i8,
    },
}

/// Three signed 16-bit thousandths.
pub fn decode_acceleration_scaled(cursor: &mut FrameCursor<'_>) -> Result<Acceleration> {
    Ok(Acceleration::Scaled {
        x: scale(cursor.read_i16()?, 1000.0),
        y: scale(cursor.read_i16()?, 1000.0),
        z: scale(cursor.read_i16()?, 1000.0),
    })
}

/// Three signed bytes.
pub fn decode_acceleration_raw(cursor: &mut FrameCursor<'_>) -> Result<Acceleration> {
    Ok(Acceleration::Raw {
        x: cursor.read_i8()?,
        y: cursor.read_i8()?,
        z: cursor.read_i8()?,
    })
}

/// Maximum acceleration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MaxAcceleration {
    /// Magnitudes in g since the last uplink and over the device history.
    Scaled {
        /// Maximum since the last uplink.
        new: f64,
        /// Maximum over the device history.
        history: f64,
    },
    /// Raw signed per-axis maxima.
    Raw {
        /// X axis.
        x: i8,
        /// Y axis.
        y: i8,
        /// Z axis.
        z: i8,
    },
}

/// Two signed 16-bit thousandths.
pub fn decode_max_acceleration_scaled(cursor: &mut FrameCursor<'_>) -> Result<MaxAcceleration> {
    Ok(MaxAcceleration::Scaled {
        new: scale(cursor.read_i16()?, 1000.0),
        history: scale(cursor.read_i16()?, 1000.0),
    })
}

/// Three signed bytes.
pub fn decode_max_acceleration_raw(cursor: &mut FrameCursor<'_>) -> Result<MaxAcceleration> {
    Ok(MaxAcceleration::Raw {
        x: cursor.read_i8()?,
        y: cursor.read_i8()?,
        z: cursor.read_i8()?,
    })
}

/// State reported by an external I/O button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IoButtonState {
    /// No call in progress.
    Idle,
    /// A call was placed.
    Calling,
    /// The call was answered.
    Success,
    /// The call was cleared.
    Cleared,
    /// Any other state value.
    Undefined(u8),
}

impl From<u8> for IoButtonState {
    fn from(value: u8) -> Self {
        match value {
            0 => Self::Idle,
            1 => Self::Calling,
            2 => Self::Success,
            3 => Self::Cleared,
            other => Self::Undefined(other),
        }
    }
}

impl core::fmt::Display for IoButtonState {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Idle => write!(f, "Idle"),
            Self::Calling => write!(f, "Calling"),
            Self::Success => write!(f, "Success"),
            Self::Cleared => write!(f, "Cleared"),
            Self::Undefined(_) => write!(f, "Undefined"),
        }
    }
}

#[record]
/// A reader for the external I/O button byte.
pub struct IoButtonRecord {
    /// Return the number of clicks.
    #[bits(4)]
    click_count: u8,
    /// Return the raw button state.
    #[bits(4)]
    state: u8,
}

/// A reading from an external sensor.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ExternalSensor {
    /// Two battery voltages.
    Battery {
        /// Battery A.
        battery_a: u16,
        /// Battery B.
        battery_b: u16,
    },
    /// External temperature in °C.
    Temperature(f64),
    /// Detect switch state.
    DetectSwitch(u8),
    /// External I/O button.
    ButtonState {
        /// Button state.
        state: IoButtonState,
        /// Number of clicks.
        click_count: u8,
    },
    /// Two untyped bytes.
    Raw([u8; 2]),
}

impl ExternalSensor {
    /// Type tag of a battery reading.
    pub const BATTERY: u8 = 0x0a;
    /// Type tag of a temperature reading.
    pub const TEMPERATURE: u8 = 0x64;
    /// Type tag of a detect switch reading.
    pub const DETECT_SWITCH: u8 = 0x65;
    /// Type tag of an I/O button reading.
    pub const BUTTON_STATE: u8 = 0x66;
}

/// A type tag followed by a type specific record.
pub fn decode_external_sensor_typed(cursor: &mut FrameCursor<'_>) -> Result<ExternalSensor> {
    Ok(match cursor.read_u8()? {
        ExternalSensor::BATTERY => ExternalSensor::Battery {
            battery_a: cursor.read_u16()?,
            battery_b: cursor.read_u16()?,
        },
        ExternalSensor::TEMPERATURE => {
            ExternalSensor::Temperature(scale(cursor.read_i16()?, 100.0))
        }
        ExternalSensor::DETECT_SWITCH => ExternalSensor::DetectSwitch(cursor.read_u8()?),
        ExternalSensor::BUTTON_STATE => {
            let button = IoButtonRecord::new(cursor.read_array::<1>()?)?;
            ExternalSensor::ButtonState {
                state: IoButtonState::from(button.state()),
                click_count: button.click_count(),
            }
        }
        tag => {
            #[cfg(feature = "panic")]
            {
                panic!("unsupported external sensor type: {tag:#04x}");
            }
            #[allow(unreachable_code)]
            return Err(Error::InvalidExternalSensorType(tag));
        }
    })
}

/// Two raw bytes.
pub fn decode_external_sensor_raw(cursor: &mut FrameCursor<'_>) -> Result<ExternalSensor> {
    cursor.read_array().map(ExternalSensor::Raw)
}

/// Hundredths of a percent.
pub fn decode_humidity_centi(cursor: &mut FrameCursor<'_>) -> Result<f64> {
    Ok(scale(cursor.read_u16()?, 100.0))
}

/// Half percent steps in one byte.
pub fn decode_humidity_half(cursor: &mut FrameCursor<'_>) -> Result<f64> {
    Ok(scale(cursor.read_u8()?, 2.0))
}

/// A 24-bit value.
pub fn decode_pressure_u24(cursor: &mut FrameCursor<'_>) -> Result<u32> {
    cursor.read_u24()
}

/// A 16-bit value in steps of two.
pub fn decode_pressure_doubled(cursor: &mut FrameCursor<'_>) -> Result<u32> {
    Ok(cursor.read_u16()? as u32 * 2)
}

/// Man-down detection state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ManDownState {
    /// Nothing detected.
    Ok,
    /// Detection is sleeping.
    Sleeping,
    /// A fall is suspected.
    PreAlarm,
    /// Alarm raised.
    Alarm,
    /// Any other state value.
    Unknown(u8),
}

impl From<u8> for ManDownState {
    fn from(value: u8) -> Self {
        match value {
            0 => Self::Ok,
            1 => Self::Sleeping,
            2 => Self::PreAlarm,
            3 => Self::Alarm,
            other => Self::Unknown(other),
        }
    }
}

impl core::fmt::Display for ManDownState {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Ok => write!(f, "ok"),
            Self::Sleeping => write!(f, "sleeping"),
            Self::PreAlarm => write!(f, "preAlarm"),
            Self::Alarm => write!(f, "alarm"),
            Self::Unknown(value) => write!(f, "{value}"),
        }
    }
}

#[record]
/// A reader for the man-down status byte.
pub struct ManDownRecord {
    /// Return the raw state.
    #[bits(4)]
    state: u8,
    /// Returns `true` when the position alarm is raised.
    #[bits(1)]
    position_alarm: bool,
    /// Returns `true` when the movement alarm is raised.
    #[bits(1)]
    movement_alarm: bool,
    #[bits(2)]
    _reserved: u8,
}

/// Man-down reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ManDown {
    /// Full status.
    Status {
        /// Detection state.
        state: ManDownState,
        /// Position alarm.
        position_alarm: bool,
        /// Movement alarm.
        movement_alarm: bool,
    },
    /// Only whether the status byte is non-zero.
    Present(bool),
}

/// State nibble plus alarm bits.
pub fn decode_man_down_status(cursor: &mut FrameCursor<'_>) -> Result<ManDown> {
    let record = ManDownRecord::new(cursor.read_array::<1>()?)?;
    Ok(ManDown::Status {
        state: ManDownState::from(record.state()),
        position_alarm: record.position_alarm(),
        movement_alarm: record.movement_alarm(),
    })
}

/// A single non-zero flag byte.
pub fn decode_man_down_flag(cursor: &mut FrameCursor<'_>) -> Result<ManDown> {
    Ok(ManDown::Present(cursor.read_u8()? != 0))
}

#[record]
/// A reader for the tilt record.
/// ```notrust
/// +--------------+-------------------+------------------+-------------------+
/// | Current tilt | Current direction | Max tilt history | Direction history |
/// +--------------+-------------------+------------------+-------------------+
/// 0              2                   3                  5                   6
/// ```
pub struct TiltRecord {
    /// Return the current tilt in hundredths of a degree.
    current_tilt: u16,
    /// Return the current direction (full circle = 255).
    current_direction: u8,
    /// Return the maximum tilt in hundredths of a degree.
    maximum_tilt_history: u16,
    /// Return the direction of the maximum tilt (full circle = 255).
    direction_history: u8,
}

/// Tilt reading.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Tilt {
    /// Tilt angles and directions in degrees.
    Angles {
        /// Current tilt.
        current_tilt: f64,
        /// Direction of the current tilt.
        current_direction: u16,
        /// Maximum tilt over the device history.
        maximum_tilt_history: f64,
        /// Direction of the maximum tilt.
        direction_history: u16,
    },
    /// Only whether the tilt byte is non-zero.
    Present(bool),
}

/// Current and maximum tilt with directions.
pub fn decode_tilt_angles(cursor: &mut FrameCursor<'_>) -> Result<Tilt> {
    let record = TiltRecord::new(cursor.read_slice(TiltRecord::<&[u8]>::size())?)?;
    Ok(Tilt::Angles {
        current_tilt: scale(record.current_tilt(), 100.0),
        current_direction: byte_to_degrees(record.current_direction()),
        maximum_tilt_history: scale(record.maximum_tilt_history(), 100.0),
        direction_history: byte_to_degrees(record.direction_history()),
    })
}

/// A single non-zero flag byte.
pub fn decode_tilt_flag(cursor: &mut FrameCursor<'_>) -> Result<Tilt> {
    Ok(Tilt::Present(cursor.read_u8()? != 0))
}
