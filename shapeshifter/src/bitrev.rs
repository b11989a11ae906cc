//! Bit-order reversal applied to every byte stored on the module
//!
//! The module's storage shifts bits out in the opposite order from normal
//! byte semantics, so each byte in the dump has bit 7 and bit 0 swapped,
//! bit 6 and bit 1 swapped, and so on. The mapping is its own inverse.

use std::io::{self, Read, Seek, SeekFrom, Write};

/// Lookup table mapping each byte to its bit-reversed value
pub const REVERSE_BITS: [u8; 256] = build_table();

const fn build_table() -> [u8; 256] {
    let mut table = [0u8; 256];
    let mut i = 0;
    while i < 256 {
        table[i] = (i as u8).reverse_bits();
        i += 1;
    }
    table
}

/// Reverse the bit order of a single byte
#[inline]
pub fn reverse_byte(b: u8) -> u8 {
    REVERSE_BITS[b as usize]
}

/// Scratch size used when reversing outgoing bytes
const WRITE_CHUNK: usize = 1024;

/// Stream adapter that bit-reverses every data byte crossing it
///
/// Reads reverse bytes after they arrive from the inner stream; writes
/// reverse them before they leave. Seeks pass straight through.
#[derive(Debug)]
pub struct BitReversing<S> {
    inner: S,
}

impl<S> BitReversing<S> {
    pub fn new(inner: S) -> Self {
        Self { inner }
    }

    pub fn get_ref(&self) -> &S {
        &self.inner
    }

    pub fn get_mut(&mut self) -> &mut S {
        &mut self.inner
    }

    pub fn into_inner(self) -> S {
        self.inner
    }
}

impl<S: Read> Read for BitReversing<S> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        let n = self.inner.read(buf)?;
        for b in &mut buf[..n] {
            *b = reverse_byte(*b);
        }
        Ok(n)
    }
}

impl<S: Write> Write for BitReversing<S> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let len = buf.len().min(WRITE_CHUNK);
        let mut scratch = [0u8; WRITE_CHUNK];
        for (dst, src) in scratch.iter_mut().zip(&buf[..len]) {
            *dst = reverse_byte(*src);
        }
        self.inner.write(&scratch[..len])
    }

    fn flush(&mut self) -> io::Result<()> {
        self.inner.flush()
    }
}

impl<S: Seek> Seek for BitReversing<S> {
    fn seek(&mut self, pos: SeekFrom) -> io::Result<u64> {
        self.inner.seek(pos)
    }
}
