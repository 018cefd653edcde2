use std::fmt;

use crate::{Decode, Encode, Word};

/// Which symbol represents a set bit.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Polarity {
    /// `1` is sent as `10`, `0` as `01`.
    #[default]
    Normal,
    /// `1` is sent as `01`, `0` as `10`.
    Inverted,
}

impl Polarity {
    /// Gets the mask which turns duplicated bits into symbol pairs
    /// of this polarity, sized to the encoded word `E`.
    #[inline]
    pub fn mask<E: Word>(self) -> E {
        match self {
            Self::Normal => E::PAIR_MASK,
            Self::Inverted => !E::PAIR_MASK,
        }
    }
}

impl fmt::Display for Polarity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Normal => "normal",
            Self::Inverted => "inverted",
        })
    }
}

/// A Manchester codec of fixed [`Polarity`].
///
/// The codec holds no state besides its polarity and can be freely
/// copied and shared between threads.
///
/// # Example
///
/// ```
/// use manchester_codec::Manchester;
///
/// let codec = Manchester::NORMAL;
///
/// let encoded = codec.encode(0xCC_u8);
/// assert_eq!(encoded, 0xA5A5);
///
/// assert!(codec.is_valid(encoded));
/// assert_eq!(codec.decode(encoded), 0xCC);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Manchester {
    polarity: Polarity,
}

impl Manchester {
    /// A codec with [`Polarity::Normal`].
    pub const NORMAL: Self = Self::new(Polarity::Normal);

    /// A codec with [`Polarity::Inverted`].
    pub const INVERTED: Self = Self::new(Polarity::Inverted);

    /// Creates a new codec for the given polarity.
    #[inline]
    pub const fn new(polarity: Polarity) -> Self {
        Self { polarity }
    }

    /// Gets the polarity of this codec.
    #[inline]
    pub const fn polarity(self) -> Polarity {
        self.polarity
    }

    /// Encodes a word into its Manchester representation of twice
    /// the width.
    ///
    /// This is a total function over all inputs.
    #[inline]
    pub fn encode<W: Encode>(self, decoded: W) -> W::Encoded {
        decoded.duplicate() ^ self.polarity.mask()
    }

    /// Decodes a Manchester word back into its payload.
    ///
    /// No validation is performed. Malformed input still produces a
    /// deterministic, albeit meaningless, value; use [`Self::is_valid`]
    /// first where this matters.
    #[inline]
    pub fn decode<E: Decode>(self, encoded: E) -> E::Decoded {
        (encoded ^ self.polarity.mask()).compact()
    }

    /// Checks that every bit pair in `encoded` is a valid symbol, i.e.
    /// consists of two different bits.
    ///
    /// Both symbols are valid under both polarities, so the outcome
    /// does not depend on the polarity of the codec.
    #[inline]
    pub fn is_valid<E: Decode>(self, encoded: E) -> bool {
        // The low bit of every pair becomes the XOR of both its bits.
        // The zero shifted in at the top only lands in the high bit of
        // the topmost pair, which the mask discards.
        let parity = (encoded ^ (encoded >> 1u32)) & E::PAIR_MASK;
        parity == E::PAIR_MASK
    }
}

impl From<Polarity> for Manchester {
    fn from(value: Polarity) -> Self {
        Self::new(value)
    }
}
