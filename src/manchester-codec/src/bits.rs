//! Bit duplication and compaction, the core of the coding transform.
//!
//! Both directions are implemented as a fixed, width-determined
//! sequence of shift, mask and OR steps. There are no branches and
//! no loops over individual bits, so the cost is the same for every
//! input pattern.
//!
//! Spreading a `w`-bit word starts by moving its upper half `w/2`
//! bits up, then the upper half of every resulting group `w/4` bits
//! up, and so on until every bit sits alone in the low bit of a pair:
//!
//! ```text
//! 0000_0000_abcd_efgh
//! 0000_abcd_0000_efgh   (v | v << 4) & 0x0F0F
//! 00ab_00cd_00ef_00gh   (v | v << 2) & 0x3333
//! 0a0b_0c0d_0e0f_0g0h   (v | v << 1) & 0x5555
//! aabb_ccdd_eeff_gghh    v | v << 1
//! ```
//!
//! A wider word needs exactly one extra leading step, which makes
//! the sequence compositional across widths.

use crate::{Decode, Encode};

/// Computes the mask which selects the low `shift` bits out of every
/// group of `2 * shift` bits.
///
/// `group_mask(1)` is `0x5555…`, `group_mask(2)` is `0x3333…`,
/// `group_mask(4)` is `0x0F0F…` and so on. Narrower masks are
/// obtained by truncating the result.
#[inline]
pub const fn group_mask(shift: u32) -> u128 {
    // 2^128 - 1 is divisible by 2^shift + 1 for every power-of-two
    // shift up to 64, with the quotient being the desired pattern.
    u128::MAX / ((1 << shift) + 1)
}

/// Maps each bit of `x` to an adjacent pair of identical bits.
///
/// The most significant input bit becomes the most significant pair
/// of the result.
#[inline]
pub fn duplicate<W: Encode>(x: W) -> W::Encoded {
    x.duplicate()
}

/// Collapses each bit pair of `x` back into a single bit.
///
/// Only the low bit of every pair is considered, so this is the exact
/// inverse of [`duplicate`] and deterministic on any other input.
#[inline]
pub fn compact<E: Decode>(x: E) -> E::Decoded {
    x.compact()
}

macro_rules! impl_duplicate {
    ($($narrow:ty => $wide:ty: [$($shift:literal),+];)*) => {
        $(
            impl Encode for $narrow {
                type Encoded = $wide;

                #[inline]
                fn duplicate(self) -> $wide {
                    let mut v = self as $wide;
                    $(
                        v = (v | (v << $shift)) & const { group_mask($shift) as $wide };
                    )+
                    v | (v << 1)
                }
            }
        )*
    };
}

macro_rules! impl_compact {
    ($($wide:ty => $narrow:ty: [$($shift:literal),+], $last:literal;)*) => {
        $(
            impl Decode for $wide {
                type Decoded = $narrow;

                #[inline]
                fn compact(self) -> $narrow {
                    let mut v = self & const { group_mask(1) as $wide };
                    $(
                        v = (v | (v >> $shift)) & const { group_mask($shift << 1) as $wide };
                    )+
                    // The upper half is garbage after the last step and
                    // gets truncated away.
                    (v | (v >> $last)) as $narrow
                }
            }
        )*
    };
}

impl_duplicate! {
    u8 => u16: [4, 2, 1];
    u16 => u32: [8, 4, 2, 1];
    u32 => u64: [16, 8, 4, 2, 1];
}

impl_compact! {
    u16 => u8: [1, 2], 4;
    u32 => u16: [1, 2, 4], 8;
    u64 => u32: [1, 2, 4, 8], 16;
    u128 => u64: [1, 2, 4, 8, 16], 32;
}
