use std::{
    fmt,
    ops::{BitAnd, BitXor, Not, Shr},
};

use byteorder::{BigEndian, ByteOrder};

use crate::{bits, CodecError};

mod sealed {
    pub trait Sealed {}
}

/// An unsigned integer which takes part in Manchester coding, either
/// as a decoded payload or as its encoded counterpart.
///
/// This trait is sealed and implemented for `u8` through `u128`.
pub trait Word:
    sealed::Sealed
    + Copy
    + Eq
    + fmt::Debug
    + fmt::LowerHex
    + BitAnd<Output = Self>
    + BitXor<Output = Self>
    + Not<Output = Self>
    + Shr<u32, Output = Self>
    + Send
    + Sync
    + 'static
{
    /// The size of the word in bytes.
    const BYTES: usize;

    /// The alternating `0x55…` bit-pair pattern for this width.
    const PAIR_MASK: Self;

    /// Assembles a word from the first [`Self::BYTES`] bytes of `buf`,
    /// most significant byte first.
    fn read_be(buf: &[u8]) -> Self;

    /// Writes the word into the first [`Self::BYTES`] bytes of `buf`,
    /// most significant byte first.
    fn write_be(self, buf: &mut [u8]);
}

/// A decoded word which has an encoded representation of double width.
pub trait Encode: Word {
    /// The encoded counterpart of this word.
    type Encoded: Decode<Decoded = Self>;

    /// Duplicates every bit of `self` into an adjacent pair.
    ///
    /// See [`bits::duplicate`] for details.
    fn duplicate(self) -> Self::Encoded;
}

/// An encoded word which collapses into a decoded word of half width.
pub trait Decode: Word {
    /// The decoded counterpart of this word.
    type Decoded: Word;

    /// Collapses every bit pair of `self` into a single bit.
    ///
    /// See [`bits::compact`] for details.
    fn compact(self) -> Self::Decoded;
}

impl sealed::Sealed for u8 {}

impl Word for u8 {
    const BYTES: usize = 1;
    const PAIR_MASK: Self = bits::group_mask(1) as u8;

    #[inline]
    fn read_be(buf: &[u8]) -> Self {
        buf[0]
    }

    #[inline]
    fn write_be(self, buf: &mut [u8]) {
        buf[0] = self;
    }
}

macro_rules! impl_word {
    ($($ty:ty => $read:ident, $write:ident;)*) => {
        $(
            impl sealed::Sealed for $ty {}

            impl Word for $ty {
                const BYTES: usize = std::mem::size_of::<$ty>();
                const PAIR_MASK: Self = bits::group_mask(1) as $ty;

                #[inline]
                fn read_be(buf: &[u8]) -> Self {
                    BigEndian::$read(buf)
                }

                #[inline]
                fn write_be(self, buf: &mut [u8]) {
                    BigEndian::$write(buf, self)
                }
            }
        )*
    };
}

impl_word! {
    u16 => read_u16, write_u16;
    u32 => read_u32, write_u32;
    u64 => read_u64, write_u64;
    u128 => read_u128, write_u128;
}

/// The width of a decoded chunk in buffer operations.
///
/// Encoded chunks are always twice as wide. Encoding is supported for
/// all widths but [`Width::W64`], which is decode and validate only.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "u32", into = "u32"))]
pub enum Width {
    /// 8-bit chunks, encoded as 16 bits.
    #[default]
    W8,
    /// 16-bit chunks, encoded as 32 bits.
    W16,
    /// 32-bit chunks, encoded as 64 bits.
    W32,
    /// 64-bit chunks, encoded as 128 bits.
    W64,
}

impl Width {
    /// All supported widths, narrowest first.
    pub const ALL: [Width; 4] = [Self::W8, Self::W16, Self::W32, Self::W64];

    /// Gets the number of bits in a decoded chunk.
    #[inline]
    pub const fn bits(self) -> u32 {
        match self {
            Self::W8 => u8::BITS,
            Self::W16 => u16::BITS,
            Self::W32 => u32::BITS,
            Self::W64 => u64::BITS,
        }
    }

    /// Gets the number of bytes in a decoded chunk.
    #[inline]
    pub const fn bytes(self) -> usize {
        self.bits() as usize >> 3
    }

    /// Gets the number of bytes in an encoded chunk.
    #[inline]
    pub const fn encoded_bytes(self) -> usize {
        self.bytes() << 1
    }

    /// Whether chunks of this width can be encoded.
    #[inline]
    pub const fn can_encode(self) -> bool {
        !matches!(self, Self::W64)
    }
}

impl TryFrom<u32> for Width {
    type Error = CodecError;

    fn try_from(bits: u32) -> Result<Self, Self::Error> {
        match bits {
            8 => Ok(Self::W8),
            16 => Ok(Self::W16),
            32 => Ok(Self::W32),
            64 => Ok(Self::W64),
            _ => Err(CodecError::UnsupportedWidth(bits)),
        }
    }
}

impl From<Width> for u32 {
    fn from(value: Width) -> Self {
        value.bits()
    }
}

impl fmt::Display for Width {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-bit", self.bits())
    }
}
