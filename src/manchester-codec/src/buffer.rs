//! Chunked coding of whole byte buffers.
//!
//! Every chunk is assembled into a word most significant byte first,
//! transformed on its own, and written back in the same order. Chunks
//! never depend on their neighbors, so disjoint chunk-aligned ranges
//! of a buffer may be processed independently.

use crate::{CodecError, Decode, Encode, Manchester, Width, Word};

type ChunkFn = fn(Manchester, &[u8], &mut [u8]);

fn size_mismatch(input: usize, output: usize, chunk: usize) -> CodecError {
    log::warn!("Rejecting buffers of {input} and {output} bytes for {chunk}-byte chunks");
    CodecError::SizeMismatch {
        input,
        output,
        chunk,
    }
}

impl Width {
    /// Checks that `input` payload bytes split into whole chunks and
    /// encode into exactly `output` bytes.
    ///
    /// # Errors
    ///
    /// [`CodecError::SizeMismatch`] when they don't.
    pub fn check_encode(self, input: usize, output: usize) -> Result<(), CodecError> {
        let chunk = self.bytes();
        if input % chunk == 0 && input.checked_mul(2) == Some(output) {
            Ok(())
        } else {
            Err(size_mismatch(input, output, chunk))
        }
    }

    /// Checks that `input` encoded bytes decode into exactly `output`
    /// bytes made of whole chunks.
    ///
    /// # Errors
    ///
    /// [`CodecError::SizeMismatch`] when they don't.
    pub fn check_decode(self, input: usize, output: usize) -> Result<(), CodecError> {
        let chunk = self.bytes();
        if output % chunk == 0 && output.checked_mul(2) == Some(input) {
            Ok(())
        } else {
            Err(size_mismatch(input, output, chunk))
        }
    }

    /// Checks that `len` encoded bytes split into whole encoded chunks.
    ///
    /// # Errors
    ///
    /// [`CodecError::SizeMismatch`] when they don't.
    pub fn check_encoded(self, len: usize) -> Result<(), CodecError> {
        let chunk = self.encoded_bytes();
        if len % chunk == 0 {
            Ok(())
        } else {
            Err(size_mismatch(len, 0, chunk))
        }
    }
}

impl Manchester {
    /// Encodes all of `src` into `dest` in chunks of `width`.
    ///
    /// `dest` must be exactly twice as long as `src` and the length of
    /// `src` must be a multiple of the chunk size. Nothing is written
    /// when these conditions are not met.
    ///
    /// # Errors
    ///
    /// - [`CodecError::UnsupportedWidth`] for [`Width::W64`].
    /// - [`CodecError::SizeMismatch`] for bad buffer sizes.
    pub fn encode_buffer(self, width: Width, src: &[u8], dest: &mut [u8]) -> Result<(), CodecError> {
        log::debug!(
            "Encoding {} bytes in {width} chunks with {} polarity",
            src.len(),
            self.polarity()
        );

        let encode: ChunkFn = match width {
            Width::W8 => Self::encode_chunks::<u8>,
            Width::W16 => Self::encode_chunks::<u16>,
            Width::W32 => Self::encode_chunks::<u32>,
            Width::W64 => return Err(CodecError::UnsupportedWidth(width.bits())),
        };

        width.check_encode(src.len(), dest.len())?;

        encode(self, src, dest);
        Ok(())
    }

    /// Decodes all of `src` into `dest` in chunks of `width`.
    ///
    /// `dest` must be exactly half as long as `src` and its length
    /// must be a multiple of the chunk size. Nothing is written when
    /// these conditions are not met.
    ///
    /// Like [`Manchester::decode`], this does not validate the input.
    ///
    /// # Errors
    ///
    /// [`CodecError::SizeMismatch`] for bad buffer sizes.
    pub fn decode_buffer(self, width: Width, src: &[u8], dest: &mut [u8]) -> Result<(), CodecError> {
        log::debug!(
            "Decoding {} bytes in {width} chunks with {} polarity",
            src.len(),
            self.polarity()
        );

        width.check_decode(src.len(), dest.len())?;

        match width {
            Width::W8 => self.decode_chunks::<u16>(src, dest),
            Width::W16 => self.decode_chunks::<u32>(src, dest),
            Width::W32 => self.decode_chunks::<u64>(src, dest),
            Width::W64 => self.decode_chunks::<u128>(src, dest),
        }

        Ok(())
    }

    /// Checks whether every encoded chunk of `width` in `src` is valid.
    ///
    /// Stops at the first invalid chunk.
    ///
    /// # Errors
    ///
    /// [`CodecError::SizeMismatch`] when the length of `src` is not a
    /// multiple of the encoded chunk size.
    pub fn is_valid_buffer(self, width: Width, src: &[u8]) -> Result<bool, CodecError> {
        self.first_invalid_chunk(width, src).map(|pos| pos.is_none())
    }

    /// Finds the byte offset of the first invalid encoded chunk of
    /// `width` in `src`, if any.
    ///
    /// # Errors
    ///
    /// [`CodecError::SizeMismatch`] when the length of `src` is not a
    /// multiple of the encoded chunk size.
    pub fn first_invalid_chunk(self, width: Width, src: &[u8]) -> Result<Option<usize>, CodecError> {
        width.check_encoded(src.len())?;

        let pos = match width {
            Width::W8 => self.find_invalid::<u16>(src),
            Width::W16 => self.find_invalid::<u32>(src),
            Width::W32 => self.find_invalid::<u64>(src),
            Width::W64 => self.find_invalid::<u128>(src),
        };

        if let Some(pos) = pos {
            log::debug!("Found invalid {width} chunk at offset {pos}");
        }

        Ok(pos)
    }

    fn encode_chunks<W: Encode>(self, src: &[u8], dest: &mut [u8]) {
        let chunks = src
            .chunks_exact(W::BYTES)
            .zip(dest.chunks_exact_mut(<W::Encoded as Word>::BYTES));

        for (input, output) in chunks {
            self.encode(W::read_be(input)).write_be(output);
        }
    }

    fn decode_chunks<E: Decode>(self, src: &[u8], dest: &mut [u8]) {
        let chunks = src
            .chunks_exact(E::BYTES)
            .zip(dest.chunks_exact_mut(<E::Decoded as Word>::BYTES));

        for (input, output) in chunks {
            self.decode(E::read_be(input)).write_be(output);
        }
    }

    fn find_invalid<E: Decode>(self, src: &[u8]) -> Option<usize> {
        src.chunks_exact(E::BYTES)
            .position(|chunk| !self.is_valid(E::read_be(chunk)))
            .map(|idx| idx * E::BYTES)
    }
}
