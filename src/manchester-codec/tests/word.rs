use manchester_codec::{
    bits::{self, group_mask},
    Manchester, Polarity,
};

#[test]
fn group_masks() {
    assert_eq!(group_mask(1) as u16, 0x5555);
    assert_eq!(group_mask(2) as u16, 0x3333);
    assert_eq!(group_mask(4) as u16, 0x0F0F);
    assert_eq!(group_mask(8) as u32, 0x00FF_00FF);
    assert_eq!(group_mask(16) as u64, 0x0000_FFFF_0000_FFFF);
    assert_eq!(group_mask(32), 0x0000_0000_FFFF_FFFF_0000_0000_FFFF_FFFF);
}

#[test]
fn duplicate_bits() {
    assert_eq!(bits::duplicate(0xCC_u8), 0xF0F0);
    assert_eq!(bits::duplicate(0x80_u8), 0xC000);
    assert_eq!(bits::duplicate(0x01_u8), 0x0003);
    assert_eq!(bits::duplicate(0x8001_u16), 0xC000_0003);
    assert_eq!(bits::duplicate(0xFFFF_FFFF_u32), u64::MAX);
    assert_eq!(bits::duplicate(0x1234_5678_u32), 0x030C_0F30_333C_3FC0);
}

#[test]
fn compact_bits() {
    assert_eq!(bits::compact(0xF0F0_u16), 0xCC);
    assert_eq!(bits::compact(0xC000_0003_u32), 0x8001);
    assert_eq!(bits::compact(0x030C_0F30_333C_3FC0_u64), 0x1234_5678);
    assert_eq!(bits::compact(u128::MAX), u64::MAX);

    // Only the low bit of each pair counts.
    assert_eq!(bits::compact(0x5555_u16), 0xFF);
    assert_eq!(bits::compact(0xAAAA_u16), 0x00);
}

#[test]
fn encode_known_word() {
    let codec = Manchester::NORMAL;

    assert_eq!(codec.encode(0xCC_u8), 0xA5A5);
    assert_eq!(codec.decode(0xA5A5_u16), 0xCC);
    assert!(codec.is_valid(0xA5A5_u16));
}

#[test]
fn symbol_table() {
    // A set bit is `10` under normal polarity and `01` when inverted.
    assert_eq!(Manchester::NORMAL.encode(0xFF_u8), 0xAAAA);
    assert_eq!(Manchester::NORMAL.encode(0x00_u8), 0x5555);
    assert_eq!(Manchester::INVERTED.encode(0xFF_u8), 0x5555);
    assert_eq!(Manchester::INVERTED.encode(0x00_u8), 0xAAAA);
}

#[test]
fn all_zero_is_invalid() {
    assert!(!Manchester::NORMAL.is_valid(0x0000_u16));
    assert!(!Manchester::NORMAL.is_valid(0xFFFF_u16));
    assert!(!Manchester::INVERTED.is_valid(0x0000_u16));
}

#[test]
fn round_trip_exhaustive_8() {
    for codec in [Manchester::NORMAL, Manchester::INVERTED] {
        for d in 0..=u8::MAX {
            let e = codec.encode(d);
            assert!(codec.is_valid(e), "{e:#06x} from {d:#04x} is invalid");
            assert_eq!(codec.decode(e), d);
        }
    }
}

#[test]
fn round_trip_exhaustive_16() {
    for codec in [Manchester::NORMAL, Manchester::INVERTED] {
        for d in 0..=u16::MAX {
            let e = codec.encode(d);
            assert!(codec.is_valid(e));
            assert_eq!(codec.decode(e), d);
        }
    }
}

#[test]
fn widths_agree() {
    let codec = Manchester::NORMAL;

    // A wider word encodes to the concatenation of its narrower halves.
    let wide = codec.encode(0x1234_5678_u32);
    let hi = codec.encode(0x1234_u16) as u64;
    let lo = codec.encode(0x5678_u16) as u64;
    assert_eq!(wide, (hi << 32) | lo);

    let hi = codec.encode(0x12_u8) as u32;
    let lo = codec.encode(0x34_u8) as u32;
    assert_eq!(codec.encode(0x1234_u16), (hi << 16) | lo);
}

#[test]
fn decode_64_bit() {
    let codec = Manchester::NORMAL;

    let hi = codec.encode(0xDEAD_BEEF_u32) as u128;
    let lo = codec.encode(0x0BAD_F00D_u32) as u128;
    let encoded = (hi << 64) | lo;

    assert!(codec.is_valid(encoded));
    assert_eq!(codec.decode(encoded), 0xDEAD_BEEF_0BAD_F00D_u64);
}

#[test]
fn every_flipped_bit_is_detected() {
    for codec in [Manchester::NORMAL, Manchester::INVERTED] {
        for d in [0x00_u8, 0xFF, 0xCC, 0x5A, 0x81] {
            let e = codec.encode(d);
            for bit in 0..u16::BITS {
                let corrupted = e ^ (1 << bit);
                assert!(
                    !codec.is_valid(corrupted),
                    "flipping bit {bit} of {e:#06x} went unnoticed"
                );
            }
        }
    }
}

#[test]
fn topmost_pair_is_checked() {
    let codec = Manchester::NORMAL;

    // Everything valid but the most significant pair, which is `00`.
    assert!(!codec.is_valid(0x2AAA_u16));
    // Same, with `11`.
    assert!(!codec.is_valid(0xEAAA_u16));
    // Valid `01` and `10` top pairs.
    assert!(codec.is_valid(0x6AAA_u16));
    assert!(codec.is_valid(0xAAAA_u16));

    let valid = codec.encode(0x8000_0001_u32);
    assert!(codec.is_valid(valid));
    assert!(!codec.is_valid(valid ^ (1 << 63)));
    assert!(!codec.is_valid(valid ^ (1 << 62)));

    let valid = u128::MAX / 3;
    assert!(codec.is_valid(valid));
    assert!(!codec.is_valid(valid ^ (1 << 127)));
    assert!(!codec.is_valid(valid ^ (1 << 126)));
}

#[test]
fn cross_polarity() {
    let normal = Manchester::NORMAL;
    let inverted = Manchester::INVERTED;

    // Encodings of both polarities are bitwise complements.
    assert_eq!(normal.encode(0xCC_u8), !inverted.encode(0xCC_u8));
    assert_eq!(inverted.encode(0xCC_u8), 0x5A5A);

    // Pair validity holds regardless of polarity, but the payload of
    // a word decoded with the wrong polarity comes out inverted.
    assert!(inverted.is_valid(0xA5A5_u16));
    assert_eq!(inverted.decode(0xA5A5_u16), 0x33);
    assert_ne!(inverted.decode(0xA5A5_u16), normal.decode(0xA5A5_u16));
}

#[test]
fn decode_without_validation() {
    // Invalid input still decodes deterministically.
    let codec = Manchester::NORMAL;
    assert!(!codec.is_valid(0x0000_u16));
    assert_eq!(codec.decode(0x0000_u16), 0xFF);
    assert_eq!(codec.decode(0xFFFF_u16), 0x00);
}

#[test]
fn codec_polarity() {
    assert_eq!(Manchester::default(), Manchester::NORMAL);
    assert_eq!(Manchester::from(Polarity::Inverted), Manchester::INVERTED);
    assert_eq!(Manchester::INVERTED.polarity(), Polarity::Inverted);

    assert_eq!(Polarity::Normal.mask::<u16>(), 0x5555);
    assert_eq!(Polarity::Inverted.mask::<u32>(), 0xAAAA_AAAA);
    assert_eq!(Polarity::Inverted.to_string(), "inverted");
}
