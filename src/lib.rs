//! LZMA range-coding and history-window primitives.
//!
//! This crate is the entropy-coding core of an LZMA-family codec: an
//! adaptive binary range coder with byte-exact carry behavior, the
//! shared per-bit probability model, byte-budget stream adapters and a
//! sliding-window dictionary that resolves LZ77 back-references while
//! buffering output for a streaming consumer.
//!
//! It deliberately stops below the symbol layer. Container framing,
//! the literal/match state machine, length/distance slot tables and the
//! public streaming API are collaborators built on top of these
//! primitives, not part of this crate.
//!
//! ## Features
//! - Zero runtime dependencies
//! - Wire-compatible with the reference range coder, byte for byte
//! - Bounded output: byte limits surface as recoverable conditions
//! - Backpressure-aware dictionary buffering, no hidden reallocation
//!
//! ## Architecture
//!
//! The decode-side pipeline:
//!
//! ```text
//! Compressed Bytes
//!       ↓
//! ┌───────────────────┐
//! │ LimitedByteReader │ ← Byte counting and budget enforcement
//! └───────────────────┘
//!       ↓
//! ┌───────────────────┐
//! │ RangeDecoder      │ ← Reconstruct bits via Prob models
//! └───────────────────┘
//!       ↓  (symbol state machine, external)
//! ┌───────────────────┐
//! │ DecoderDict       │ ← Expand literals and back-references
//! └───────────────────┘
//!       ↓
//! Decompressed Bytes (read / peek)
//! ```
//!
//! The encode side mirrors it: external literal/match decisions drive
//! [`RangeEncoder`], which emits bytes through a [`LimitedByteWriter`].
//!
//! ## Example
//!
//! ```rust
//! use lzma_stream::{Prob, RangeDecoder, RangeEncoder};
//!
//! let mut model = Prob::new();
//! let mut enc = RangeEncoder::new(Vec::new());
//! for bit in [true, false, false, true] {
//!     enc.encode_bit(bit, &mut model).unwrap();
//! }
//! let data = enc.close().unwrap();
//!
//! let mut model = Prob::new();
//! let mut dec = RangeDecoder::new(&data[..]).unwrap();
//! for expected in [true, false, false, true] {
//!     assert_eq!(dec.decode_bit(&mut model).unwrap(), expected);
//! }
//! ```

pub mod dict;
pub mod error;
pub mod range;

pub use dict::DecoderDict;
pub use error::{LzmaError, Result};
pub use range::{LimitedByteReader, LimitedByteWriter, Prob, RangeDecoder, RangeEncoder};
