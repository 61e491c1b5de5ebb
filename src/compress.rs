//! Nibble-spaced to dense mask conversion.
//!
//! The evaluator works on masks with one bit per 4-bit rank nibble. Results are
//! reported as dense 13-bit masks (bit 0 = Two .. bit 12 = Ace), which this module
//! produces with a shift-or-mask ladder:
//!
//! ```text
//! 000a 000b 000c 000d ...  x
//! 0000 00ab 0000 00cd ...  (x | x >> 3) & 0x0303..
//! 0000 0000 0000 abcd ...  (x | x >> 6) & 0x000f..
//! ...                      (x | x >> 12), (x | x >> 24)
//! ```

use crate::card::RANK_SHIFT;

/// Dense 13-bit rank mask.
pub const MASK13: u32 = (1u32 << 13) - 1;

/// Bit 0 of each of the 16 nibbles.
const NIBBLE_LOW: u64 = 0x1111_1111_1111_1111;

/// Gather bit `4*i` of `x` into bit `i`, for all 16 nibbles.
///
/// Every other bit of `x` is ignored.
#[inline(always)]
pub const fn compress_nibbles(x: u64) -> u16 {
    let mut x = x & NIBBLE_LOW;
    x = (x | (x >> 3)) & 0x0303_0303_0303_0303;
    x = (x | (x >> 6)) & 0x000f_000f_000f_000f;
    x = (x | (x >> 12)) & 0x0000_00ff_0000_00ff;
    x = (x | (x >> 24)) & 0x0000_0000_0000_ffff;
    x as u16
}

/// Rank nibbles (bit `4*rank + 8`) to a dense 13-bit rank mask.
#[inline(always)]
pub const fn pack_ranks(x: u64) -> u32 {
    ((compress_nibbles(x) as u32) >> (RANK_SHIFT / 4)) & MASK13
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::Rank;

    fn gather_by_loop(x: u64) -> u16 {
        let mut out = 0u16;
        for i in 0..16 {
            out |= (((x >> (4 * i)) & 1) as u16) << i;
        }
        out
    }

    #[test]
    fn single_nibbles() {
        for i in 0..16u32 {
            assert_eq!(compress_nibbles(1u64 << (4 * i)), 1u16 << i);
        }
    }

    #[test]
    fn ignores_high_bits_of_each_nibble() {
        assert_eq!(compress_nibbles(0xEEEE_EEEE_EEEE_EEEE), 0);
        assert_eq!(compress_nibbles(u64::MAX), u16::MAX);
    }

    #[test]
    fn matches_loop_gather() {
        let samples = [
            0u64,
            0x0100_0000_0000_0001,
            0x0111_1111_1111_1100,
            0x0101_0010_1000_0110,
            0xdead_beef_cafe_f00d,
            0x1234_5678_9abc_def0,
        ];
        for x in samples {
            assert_eq!(compress_nibbles(x), gather_by_loop(x), "{x:#x}");
        }
    }

    #[test]
    fn pack_ranks_drops_suit_and_extension_nibbles() {
        assert_eq!(pack_ranks(0x0000_0000_0000_0011), 0);
        for r in Rank::ALL {
            assert_eq!(pack_ranks(r.nibble_bit()), 1u32 << r.idx());
        }
        assert_eq!(pack_ranks(0x0111_1111_1111_1111), MASK13);
    }
}
