//! Branch-free Manchester line coding.
//!
//! Every data bit is expanded into a two-bit symbol, `10` for a one and
//! `01` for a zero (or the other way around with [`Polarity::Inverted`]).
//! This guarantees a transition in every bit period, which is what makes
//! the code self-clocking and DC-balanced on serial links.
//!
//! # Implementation
//!
//! Instead of walking individual bits, all bits of a word are spread
//! apart in parallel through a fixed sequence of shift, mask and OR
//! steps; one step per power-of-two doubling of the word width. The
//! polarity is then applied with a single XOR against an alternating
//! bit-pair mask. Decoding runs the same steps in reverse.
//!
//! Validation is a separate pairwise-parity check, decoding never
//! rejects malformed input on its own.
//!
//! Buffers are processed in chunks of a caller-selected [`Width`].
//! Chunks are always assembled in big-endian byte order so that the
//! produced byte stream does not depend on the chunk width.

#![deny(rust_2018_idioms, rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod bits;

mod buffer;

mod codec;
pub use codec::*;

mod error;
pub use error::*;

mod width;
pub use width::*;
