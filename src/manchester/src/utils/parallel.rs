//! Data-parallel coding of large buffers.
//!
//! Manchester chunks do not depend on each other, so buffers are cut
//! into chunk-aligned blocks which rayon workers code independently.

use manchester_codec::{CodecError, Manchester, Width};
use rayon::prelude::*;

/// The number of decoded bytes handed to a single worker at once.
///
/// This is a multiple of every supported chunk width.
pub const BLOCK_SIZE: usize = 64 * 1024;

/// Encodes `src` into a newly allocated buffer of twice its size.
pub fn encode_par(codec: Manchester, width: Width, src: &[u8]) -> Result<Vec<u8>, CodecError> {
    if !width.can_encode() {
        return Err(CodecError::UnsupportedWidth(width.bits()));
    }

    width.check_encode(src.len(), src.len() * 2)?;
    let mut dest = vec![0; src.len() * 2];

    src.par_chunks(BLOCK_SIZE)
        .zip(dest.par_chunks_mut(BLOCK_SIZE * 2))
        .try_for_each(|(input, output)| codec.encode_buffer(width, input, output))?;

    Ok(dest)
}

/// Decodes `src` into a newly allocated buffer of half its size.
///
/// This does not validate the input.
pub fn decode_par(codec: Manchester, width: Width, src: &[u8]) -> Result<Vec<u8>, CodecError> {
    width.check_decode(src.len(), src.len() / 2)?;
    let mut dest = vec![0; src.len() / 2];

    src.par_chunks(BLOCK_SIZE * 2)
        .zip(dest.par_chunks_mut(BLOCK_SIZE))
        .try_for_each(|(input, output)| codec.decode_buffer(width, input, output))?;

    Ok(dest)
}

/// Finds the byte offset of the first invalid encoded chunk in `src`.
pub fn first_invalid_par(
    codec: Manchester,
    width: Width,
    src: &[u8],
) -> Result<Option<usize>, CodecError> {
    width.check_encoded(src.len())?;

    let offsets = src
        .par_chunks(BLOCK_SIZE * 2)
        .enumerate()
        .map(|(idx, block)| {
            let base = idx * BLOCK_SIZE * 2;
            codec
                .first_invalid_chunk(width, block)
                .map(|pos| pos.map(|pos| base + pos))
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(offsets.into_iter().flatten().min())
}
