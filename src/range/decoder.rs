//! Range decoder for single bits.
//!
//! Mirror of the encoder: consumes the byte stream and reconstructs the
//! bit decisions. Initialization reads five bytes; the first must be
//! zero because a compliant encoder always emits a zero leading byte.

use std::io::Read;

use super::byte_limit::LimitedByteReader;
use super::prob::Prob;
use super::{NO_LIMIT, TOP};
use crate::error::{LzmaError, Result};

/// Range decoder reading a byte stream through a limited reader.
pub struct RangeDecoder<R> {
    r: LimitedByteReader<R>,
    /// Current interval width, kept in `[2^24, 2^32)` between bits.
    nrange: u32,
    /// Decode window; stays below `nrange` after init.
    code: u32,
}

impl<R: Read> RangeDecoder<R> {
    /// Create a decoder with no practical byte limit.
    ///
    /// Reads the five initialization bytes and therefore may fail.
    pub fn new(r: R) -> Result<Self> {
        let mut d = Self {
            r: LimitedByteReader::new(r, NO_LIMIT),
            nrange: 0xFFFF_FFFF,
            code: 0,
        };
        d.init()?;
        Ok(d)
    }

    /// Create a decoder that may consume at most `limit` bytes.
    ///
    /// Fails with [`LzmaError::LimitTooSmall`] for limits below 5.
    pub fn with_limit(r: R, limit: u64) -> Result<Self> {
        if limit < 5 {
            return Err(LzmaError::LimitTooSmall(limit));
        }
        let mut d = Self {
            r: LimitedByteReader::new(r, limit),
            nrange: 0xFFFF_FFFF,
            code: 0,
        };
        d.init()?;
        Ok(d)
    }

    /// Number of bytes read from the underlying reader so far.
    pub fn compressed(&self) -> u64 {
        self.r.count()
    }

    /// Whether the decoder may be at the flush tail of the stream.
    ///
    /// A hint, not authoritative: the caller's symbol layer decides
    /// when the stream actually ends.
    pub fn possibly_at_end(&self) -> bool {
        self.code == 0
    }

    /// Decode one bit with the adaptive probability `p`.
    #[inline]
    pub fn decode_bit(&mut self, p: &mut Prob) -> Result<bool> {
        let bound = p.bound(self.nrange);
        let bit = if self.code < bound {
            self.nrange = bound;
            p.on_zero();
            false
        } else {
            self.code -= bound;
            self.nrange -= bound;
            p.on_one();
            true
        };

        // code < nrange is maintained

        self.normalize()?;
        Ok(bit)
    }

    /// Decode one bit with a fixed 1/2 probability, touching no model.
    #[inline]
    pub fn decode_direct_bit(&mut self) -> Result<bool> {
        self.nrange >>= 1;
        self.code = self.code.wrapping_sub(self.nrange);
        let t = 0u32.wrapping_sub(self.code >> 31);
        self.code = self.code.wrapping_add(self.nrange & t);

        // code < nrange is maintained

        self.normalize()?;
        Ok(t.wrapping_add(1) & 1 == 1)
    }

    /// Read the five initialization bytes.
    fn init(&mut self) -> Result<()> {
        let b = self.r.read_byte()?;
        if b != 0 {
            return Err(LzmaError::InvalidLeadingByte(b));
        }

        for _ in 0..4 {
            self.update_code()?;
        }

        if self.code >= self.nrange {
            return Err(LzmaError::CodeOverflow);
        }

        Ok(())
    }

    /// Fold one input byte into the decode window.
    #[inline]
    fn update_code(&mut self) -> Result<()> {
        let b = self.r.read_byte()?;
        self.code = (self.code << 8) | u32::from(b);
        Ok(())
    }

    /// Widen the interval once it drops below one byte of precision.
    #[inline]
    fn normalize(&mut self) -> Result<()> {
        if self.nrange < TOP {
            self.nrange <<= 8;
            self.update_code()?;
        }
        Ok(())
    }
}
