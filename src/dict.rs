//! Sliding-window dictionary for the decoder side.
//!
//! Decoded output lands in a bounded ring buffer that serves two roles
//! at once: it is the LZ77 history that back-references copy from, and
//! it is a FIFO that decouples the decode loop from the consumer that
//! drains decompressed bytes. Production and consumption run at
//! independent rates; once the buffer fills, writes fail with a
//! recoverable no-room condition until the consumer catches up.

use std::io;

use crate::error::{LzmaError, Result};

/// Ring-buffered decoder dictionary.
///
/// `dict_cap` is the logical history depth declared by the compressed
/// stream; `buf_cap` is the physical arena size and bounds how far
/// production may run ahead of consumption. The arena is fixed at
/// construction, so no operation reallocates.
pub struct DecoderDict {
    /// Fixed arena of `buf_cap` bytes, modulo-indexed.
    buf: Vec<u8>,
    /// Logical history capacity; valid match distances never exceed it.
    dict_cap: usize,
    /// Write cursor into the arena.
    wpos: usize,
    /// Read cursor into the arena.
    rpos: usize,
    /// Total bytes ever written, literal or match-expanded.
    total_written: u64,
    /// Total bytes delivered to the consumer.
    total_read: u64,
}

impl DecoderDict {
    /// Create a dictionary with logical capacity `dict_cap` inside a
    /// physical arena of `buf_cap` bytes.
    ///
    /// Fails with [`LzmaError::InvalidCapacity`] if `dict_cap` is zero
    /// or the arena is smaller than the history it must hold.
    pub fn new(dict_cap: usize, buf_cap: usize) -> Result<Self> {
        if dict_cap == 0 || buf_cap < dict_cap {
            return Err(LzmaError::InvalidCapacity { dict_cap, buf_cap });
        }
        Ok(Self {
            buf: vec![0; buf_cap],
            dict_cap,
            wpos: 0,
            rpos: 0,
            total_written: 0,
            total_read: 0,
        })
    }

    /// Reset for reuse without reallocating the arena.
    ///
    /// Arena contents are not cleared; reads are validated against the
    /// counters.
    pub fn reset(&mut self) {
        self.wpos = 0;
        self.rpos = 0;
        self.total_written = 0;
        self.total_read = 0;
    }

    /// Effective history depth: the valid range of backward distances.
    pub fn len(&self) -> usize {
        if self.total_written < self.dict_cap as u64 {
            self.total_written as usize
        } else {
            self.dict_cap
        }
    }

    /// Whether nothing has been written yet.
    pub fn is_empty(&self) -> bool {
        self.total_written == 0
    }

    /// Bytes produced but not yet delivered to the consumer.
    pub fn buffered(&self) -> usize {
        (self.total_written - self.total_read) as usize
    }

    /// Room left before writes start failing with no-room.
    pub fn available(&self) -> usize {
        self.buf.len() - self.buffered()
    }

    /// Total bytes ever written, literal or match-expanded.
    pub fn total_written(&self) -> u64 {
        self.total_written
    }

    /// Append one literal byte at the write cursor.
    ///
    /// Fails with [`LzmaError::NoRoom`] while the buffer is full; the
    /// caller drains via [`read`](Self::read) and retries.
    pub fn write_byte(&mut self, b: u8) -> Result<()> {
        if self.available() == 0 {
            return Err(LzmaError::NoRoom);
        }
        self.push(b);
        Ok(())
    }

    /// Append a whole slice of literal bytes.
    ///
    /// All-or-nothing: fails with [`LzmaError::NoRoom`] and writes
    /// nothing if the slice exceeds the available room.
    pub fn write(&mut self, p: &[u8]) -> Result<usize> {
        if p.len() > self.available() {
            return Err(LzmaError::NoRoom);
        }
        for &b in p {
            self.push(b);
        }
        Ok(p.len())
    }

    /// Expand a back-reference: copy `length` bytes starting `distance`
    /// bytes behind the write cursor.
    ///
    /// The copy advances byte by byte, so an overlapping match
    /// (`distance < length`) feeds on its own freshly written output.
    /// Distance, length and room are all validated before the first
    /// byte is written; a failed match leaves the buffer untouched.
    pub fn write_match(&mut self, distance: usize, length: usize) -> Result<()> {
        if distance == 0 || distance > self.len() {
            return Err(LzmaError::InvalidDistance {
                distance,
                history: self.len(),
            });
        }
        if length == 0 {
            return Err(LzmaError::InvalidMatchLen(length));
        }
        if length > self.available() {
            return Err(LzmaError::NoRoom);
        }

        let cap = self.buf.len();
        let mut src = (self.wpos + cap - distance) % cap;
        for _ in 0..length {
            let b = self.buf[src];
            src = (src + 1) % cap;
            self.push(b);
        }
        Ok(())
    }

    /// Byte `distance` positions behind the write cursor.
    ///
    /// Returns `0` outside `1..=len()`; never fails. Used for
    /// match-length extension lookahead.
    pub fn byte_at(&self, distance: usize) -> u8 {
        if distance == 0 || distance > self.len() {
            return 0;
        }
        let cap = self.buf.len();
        self.buf[(self.wpos + cap - distance) % cap]
    }

    /// Copy the oldest `p.len()` buffered bytes into `p` without
    /// advancing the read cursor.
    ///
    /// Fails with [`LzmaError::BufferTooSmall`] if fewer bytes are
    /// buffered than requested.
    pub fn peek(&self, p: &mut [u8]) -> Result<usize> {
        let have = self.buffered();
        if p.len() > have {
            return Err(LzmaError::BufferTooSmall {
                needed: p.len(),
                have,
            });
        }
        let cap = self.buf.len();
        let mut src = self.rpos;
        for slot in p.iter_mut() {
            *slot = self.buf[src];
            src = (src + 1) % cap;
        }
        Ok(p.len())
    }

    /// Deliver up to `p.len()` of the oldest buffered bytes in write
    /// order, advancing the read cursor.
    ///
    /// Returns the count actually delivered, which is less than
    /// requested when fewer bytes are buffered. A short or empty result
    /// is not an error; this mirrors a non-blocking stream read.
    pub fn read(&mut self, p: &mut [u8]) -> usize {
        let n = p.len().min(self.buffered());
        let cap = self.buf.len();
        for slot in p.iter_mut().take(n) {
            *slot = self.buf[self.rpos];
            self.rpos = (self.rpos + 1) % cap;
        }
        self.total_read += n as u64;
        n
    }

    /// Append one byte, advancing the write cursor. Room must have been
    /// checked by the caller.
    #[inline]
    fn push(&mut self, b: u8) {
        self.buf[self.wpos] = b;
        self.wpos = (self.wpos + 1) % self.buf.len();
        self.total_written += 1;
    }
}

impl io::Read for DecoderDict {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        Ok(DecoderDict::read(self, buf))
    }
}
