//! GPS fix closing a frame.

use tracker_macros::record;

use crate::codec::scale;
use crate::{FrameCursor, Result};

#[record]
#[derive(Debug)]
/// A reader for the 19-byte GPS record.
/// ```notrust
/// +---------+-----+-----+---------+------+------+-----+-----+------+---------+
/// | navStat | lat | lon | alt ref | hAcc | vAcc | sog | cog | hdop | num SVs |
/// +---------+-----+-----+---------+------+------+-----+-----+------+---------+
/// 0         1     5     9         11     12     13    15    17     18        19
/// ```
pub struct GpsRecord {
    /// Return the navigation status.
    nav_stat: u8,
    /// Return the latitude in units of 1e-7 degrees.
    latitude: i32,
    /// Return the longitude in units of 1e-7 degrees.
    longitude: i32,
    /// Return the reference altitude in decimetres.
    alt_ref: u16,
    /// Return the horizontal accuracy.
    h_acc: u8,
    /// Return the vertical accuracy.
    v_acc: u8,
    /// Return the speed over ground in tenths.
    sog: u16,
    /// Return the course over ground in tenths of a degree.
    cog: u16,
    /// Return the horizontal dilution of precision in tenths.
    hdop: u8,
    /// Return the number of satellites used.
    num_svs: u8,
}

/// A decoded GPS fix.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GpsFix {
    /// Navigation status.
    pub nav_stat: u8,
    /// Latitude in degrees.
    pub latitude: f64,
    /// Longitude in degrees.
    pub longitude: f64,
    /// Reference altitude in metres.
    pub alt_ref: f64,
    /// Horizontal accuracy.
    pub h_acc: u8,
    /// Vertical accuracy.
    pub v_acc: u8,
    /// Speed over ground.
    pub sog: f64,
    /// Course over ground in degrees.
    pub cog: f64,
    /// Horizontal dilution of precision.
    pub hdop: f64,
    /// Number of satellites used.
    pub num_svs: u8,
}

impl GpsFix {
    /// Scale the raw record values.
    pub fn parse<T: AsRef<[u8]>>(record: &GpsRecord<T>) -> Self {
        Self {
            nav_stat: record.nav_stat(),
            latitude: scale(record.latitude(), 1e7),
            longitude: scale(record.longitude(), 1e7),
            alt_ref: scale(record.alt_ref(), 10.0),
            h_acc: record.h_acc(),
            v_acc: record.v_acc(),
            sog: scale(record.sog(), 10.0),
            cog: scale(record.cog(), 10.0),
            hdop: scale(record.hdop(), 10.0),
            num_svs: record.num_svs(),
        }
    }

    /// Read a GPS record from the cursor.
    pub fn decode(cursor: &mut FrameCursor<'_>) -> Result<Self> {
        let record = GpsRecord::new(cursor.read_slice(GpsRecord::<&[u8]>::size())?)?;
        Ok(Self::parse(&record))
    }
}
