//! Bounds-checked sequential reader over a frame buffer.

use crate::codec::{self, HexBytes};
use crate::{Error, Result};

/// A read position over an immutable frame buffer.
///
/// Every read advances the position by the width it consumed. A read that
/// needs more bytes than are left fails with
/// [`Error::UnexpectedEndOfFrame`] and leaves the position untouched, so
/// `position() <= len()` always holds.
#[derive(Debug)]
pub struct FrameCursor<'f> {
    buffer: &'f [u8],
    position: usize,
}

impl<'f> FrameCursor<'f> {
    /// Create a new cursor at the start of `buffer`.
    pub fn new(buffer: &'f [u8]) -> Self {
        Self {
            buffer,
            position: 0,
        }
    }

    /// Return the number of bytes consumed so far.
    pub fn position(&self) -> usize {
        self.position
    }

    /// Return the total length of the buffer.
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    /// Return the number of bytes that have not been read yet.
    pub fn remaining(&self) -> usize {
        self.buffer.len() - self.position
    }

    /// Consume `n` bytes and return them.
    pub fn read_slice(&mut self, n: usize) -> Result<&'f [u8]> {
        let remaining = self.remaining();
        if n > remaining {
            return Err(Error::UnexpectedEndOfFrame {
                requested: n,
                remaining,
            });
        }

        let slice = &self.buffer[self.position..][..n];
        self.position += n;
        Ok(slice)
    }

    /// Consume `N` bytes into an array.
    pub fn read_array<const N: usize>(&mut self) -> Result<[u8; N]> {
        let mut b = [0u8; N];
        b.copy_from_slice(self.read_slice(N)?);
        Ok(b)
    }

    /// Consume `n` bytes without interpreting them.
    pub fn skip(&mut self, n: usize) -> Result<()> {
        self.read_slice(n).map(|_| ())
    }

    /// Read an unsigned byte.
    pub fn read_u8(&mut self) -> Result<u8> {
        Ok(self.read_array::<1>()?[0])
    }

    /// Read a signed byte.
    pub fn read_i8(&mut self) -> Result<i8> {
        self.read_u8().map(codec::sign_extend_8)
    }

    /// Read a big-endian unsigned 16-bit value.
    pub fn read_u16(&mut self) -> Result<u16> {
        self.read_array().map(codec::u16_from_be)
    }

    /// Read a big-endian signed 16-bit value.
    pub fn read_i16(&mut self) -> Result<i16> {
        self.read_array().map(codec::i16_from_be)
    }

    /// Read a big-endian unsigned 24-bit value.
    pub fn read_u24(&mut self) -> Result<u32> {
        self.read_array().map(codec::u24_from_be)
    }

    /// Read a big-endian signed 32-bit value.
    pub fn read_i32(&mut self) -> Result<i32> {
        self.read_array().map(codec::i32_from_be)
    }

    /// Read `N` raw bytes that render as hex.
    pub fn read_hex<const N: usize>(&mut self) -> Result<HexBytes<N>> {
        self.read_array().map(HexBytes)
    }
}
