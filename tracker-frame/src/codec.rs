//! Numeric helpers shared by the field decoders.
//!
//! All multi-byte values on the wire are big endian.

use core::fmt;

/// Interpret a raw byte as a two's complement signed value.
pub const fn sign_extend_8(byte: u8) -> i8 {
    byte as i8
}

/// Assemble an unsigned 16-bit value from two big-endian bytes.
pub const fn u16_from_be(b: [u8; 2]) -> u16 {
    u16::from_be_bytes(b)
}

/// Assemble a signed 16-bit value from two big-endian bytes.
pub const fn i16_from_be(b: [u8; 2]) -> i16 {
    i16::from_be_bytes(b)
}

/// Assemble an unsigned 24-bit value from three big-endian bytes.
pub const fn u24_from_be(b: [u8; 3]) -> u32 {
    u32::from_be_bytes([0, b[0], b[1], b[2]])
}

/// Assemble a signed 32-bit value from four big-endian bytes.
pub const fn i32_from_be(b: [u8; 4]) -> i32 {
    i32::from_be_bytes(b)
}

/// Divide a raw fixed-point value by its scale.
pub fn scale(raw: impl Into<f64>, divisor: f64) -> f64 {
    raw.into() / divisor
}

/// Convert a direction byte (full circle = 255) to whole degrees, rounding
/// half up.
pub const fn byte_to_degrees(raw: u8) -> u16 {
    ((raw as u32 * 720 + 255) / 510) as u16
}

/// Decode a light value packed as a 4-bit exponent and a 12-bit mantissa.
pub fn light_from_exponent_mantissa(raw: u16) -> f64 {
    let exponent = (raw >> 12) & 0x0f;
    let mantissa = (raw & 0x0fff) as u32;
    (mantissa << exponent) as f64 / 100.0
}

/// Write bytes as lowercase hex, two digits per byte.
pub fn write_hex(f: &mut impl fmt::Write, bytes: &[u8]) -> fmt::Result {
    for b in bytes {
        write!(f, "{b:02x}")?;
    }
    Ok(())
}

/// Write 16 bytes as a `8-4-4-4-12` grouped UUID.
pub fn write_uuid(f: &mut impl fmt::Write, bytes: &[u8; 16]) -> fmt::Result {
    write_hex(f, &bytes[..4])?;
    for group in [&bytes[4..6], &bytes[6..8], &bytes[8..10], &bytes[10..]] {
        f.write_char('-')?;
        write_hex(f, group)?;
    }
    Ok(())
}

/// Write bytes as colon separated hex, e.g. a MAC address.
pub fn write_mac(f: &mut impl fmt::Write, bytes: &[u8]) -> fmt::Result {
    for (i, b) in bytes.iter().enumerate() {
        if i != 0 {
            f.write_char(':')?;
        }
        write!(f, "{b:02x}")?;
    }
    Ok(())
}

/// Raw bytes that render as lowercase hex.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HexBytes<const N: usize>(pub [u8; N]);

impl<const N: usize> HexBytes<N> {
    /// Return the raw bytes.
    pub const fn as_bytes(&self) -> &[u8; N] {
        &self.0
    }
}

impl<const N: usize> fmt::Display for HexBytes<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_hex(f, &self.0)
    }
}

/// A 128-bit identifier that renders as a grouped UUID.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Uuid(pub [u8; 16]);

impl fmt::Display for Uuid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_uuid(f, &self.0)
    }
}

/// A 48-bit MAC address.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MacAddress(pub [u8; 6]);

impl fmt::Display for MacAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_mac(f, &self.0)
    }
}
