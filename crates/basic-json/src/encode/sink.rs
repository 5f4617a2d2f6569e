//! Byte destinations the encoder writes into.

use core::convert::Infallible;
use std::io;

use crate::error::Error;

/// An append-only byte destination.
///
/// The encoder only ever calls these two methods. Every call made by the
/// encoder carries a complete UTF-8 sequence, which is what lets [`FmtSink`]
/// forward to a `fmt::Write`.
pub trait Sink {
    type Error;

    fn write_byte(&mut self, byte: u8) -> Result<(), Self::Error>;

    fn write_bytes(&mut self, bytes: &[u8]) -> Result<(), Self::Error>;
}

impl<S: Sink + ?Sized> Sink for &mut S {
    type Error = S::Error;

    #[inline]
    fn write_byte(&mut self, byte: u8) -> Result<(), Self::Error> {
        (**self).write_byte(byte)
    }

    #[inline]
    fn write_bytes(&mut self, bytes: &[u8]) -> Result<(), Self::Error> {
        (**self).write_bytes(bytes)
    }
}

impl Sink for Vec<u8> {
    type Error = Infallible;

    #[inline]
    fn write_byte(&mut self, byte: u8) -> Result<(), Infallible> {
        self.push(byte);
        Ok(())
    }

    #[inline]
    fn write_bytes(&mut self, bytes: &[u8]) -> Result<(), Infallible> {
        self.extend_from_slice(bytes);
        Ok(())
    }
}

/// A fixed-capacity sink over a caller-owned buffer.
///
/// A write that does not fit fails with [`Error::Overflow`] and leaves the
/// buffer untouched from the current position on.
pub struct SliceSink<'a> {
    buf: &'a mut [u8],
    pos: usize,
}

impl<'a> SliceSink<'a> {
    pub fn new(buf: &'a mut [u8]) -> Self {
        Self { buf, pos: 0 }
    }

    /// Number of bytes written so far.
    pub fn position(&self) -> usize {
        self.pos
    }

    pub fn remaining(&self) -> usize {
        self.buf.len() - self.pos
    }

    pub fn written(&self) -> &[u8] {
        &self.buf[..self.pos]
    }
}

impl Sink for SliceSink<'_> {
    type Error = Error;

    fn write_byte(&mut self, byte: u8) -> Result<(), Error> {
        self.write_bytes(&[byte])
    }

    fn write_bytes(&mut self, bytes: &[u8]) -> Result<(), Error> {
        let remaining = self.remaining();
        if bytes.len() > remaining {
            return Err(Error::Overflow { needed: bytes.len(), remaining });
        }
        self.buf[self.pos..self.pos + bytes.len()].copy_from_slice(bytes);
        self.pos += bytes.len();
        Ok(())
    }
}

/// Adapts any `io::Write`. The writer's own `io::Error` is returned as is.
pub struct IoSink<W> {
    inner: W,
}

impl<W: io::Write> IoSink<W> {
    pub fn new(inner: W) -> Self {
        Self { inner }
    }

    pub fn get_ref(&self) -> &W {
        &self.inner
    }

    pub fn into_inner(self) -> W {
        self.inner
    }
}

impl<W: io::Write> Sink for IoSink<W> {
    type Error = io::Error;

    fn write_byte(&mut self, byte: u8) -> io::Result<()> {
        self.inner.write_all(&[byte])
    }

    fn write_bytes(&mut self, bytes: &[u8]) -> io::Result<()> {
        self.inner.write_all(bytes)
    }
}

/// Adapts a `fmt::Write`, used to implement `Display` for values.
pub struct FmtSink<'a, W: ?Sized> {
    inner: &'a mut W,
}

impl<'a, W: core::fmt::Write + ?Sized> FmtSink<'a, W> {
    pub fn new(inner: &'a mut W) -> Self {
        Self { inner }
    }
}

impl<W: core::fmt::Write + ?Sized> Sink for FmtSink<'_, W> {
    type Error = core::fmt::Error;

    fn write_byte(&mut self, byte: u8) -> core::fmt::Result {
        if !byte.is_ascii() {
            return Err(core::fmt::Error);
        }
        self.inner.write_char(byte as char)
    }

    fn write_bytes(&mut self, bytes: &[u8]) -> core::fmt::Result {
        let s = core::str::from_utf8(bytes).map_err(|_| core::fmt::Error)?;
        self.inner.write_str(s)
    }
}
