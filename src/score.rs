//! Packed u32 evaluation.
//!
//! Layout:
//! bits 28..31 : category (0..9), higher is better
//! bits 13..25 : value mask, dense 13-bit (bit 0 = Two .. bit 12 = Ace)
//! bits  0..12 : kicker mask, same shape
//!
//! Bits 26..27 are always zero. Comparing two evaluations as unsigned integers
//! ranks the hands; equal integers split the pot.

use std::fmt;

use crate::compress::MASK13;
use crate::error::EvalError;

const CATEGORY_SHIFT: u32 = 28;
const VALUE_SHIFT: u32 = 13;

/// Hand categories (higher is better).
///
/// Code 8 is unused so that a straight flush sits at 9.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub enum Category {
    HighCard = 0,
    OnePair = 1,
    TwoPair = 2,
    ThreeOfAKind = 3,
    Straight = 4,
    Flush = 5,
    FullHouse = 6,
    FourOfAKind = 7,
    StraightFlush = 9,
}

impl Category {
    pub const ALL: [Category; 9] = [
        Category::HighCard,
        Category::OnePair,
        Category::TwoPair,
        Category::ThreeOfAKind,
        Category::Straight,
        Category::Flush,
        Category::FullHouse,
        Category::FourOfAKind,
        Category::StraightFlush,
    ];

    #[inline(always)]
    pub const fn code(self) -> u8 {
        self as u8
    }

    pub const fn from_u8(x: u8) -> Option<Category> {
        match x {
            0 => Some(Category::HighCard),
            1 => Some(Category::OnePair),
            2 => Some(Category::TwoPair),
            3 => Some(Category::ThreeOfAKind),
            4 => Some(Category::Straight),
            5 => Some(Category::Flush),
            6 => Some(Category::FullHouse),
            7 => Some(Category::FourOfAKind),
            9 => Some(Category::StraightFlush),
            _ => None,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Category::HighCard => "High Card",
            Category::OnePair => "One Pair",
            Category::TwoPair => "Two Pair",
            Category::ThreeOfAKind => "Three of a Kind",
            Category::Straight => "Straight",
            Category::Flush => "Flush",
            Category::FullHouse => "Full House",
            Category::FourOfAKind => "Four of a Kind",
            Category::StraightFlush => "Straight Flush",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "u32", into = "u32")
)]
#[repr(transparent)]
#[derive(Copy, Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Evaluation(u32);

impl Evaluation {
    /// Pack a category with dense 13-bit value and kicker masks.
    #[inline(always)]
    pub const fn new(category: Category, value: u32, kicker: u32) -> Self {
        Evaluation(
            ((category as u32) << CATEGORY_SHIFT)
                | ((value & MASK13) << VALUE_SHIFT)
                | (kicker & MASK13),
        )
    }

    #[inline(always)]
    pub const fn raw(self) -> u32 {
        self.0
    }

    #[inline(always)]
    pub const fn category(self) -> Category {
        match Category::from_u8((self.0 >> CATEGORY_SHIFT) as u8) {
            Some(c) => c,
            None => Category::StraightFlush,
        }
    }

    /// Ranks that define the category (pair rank, set rank, straight top card, ...).
    #[inline(always)]
    pub const fn value_mask(self) -> u16 {
        ((self.0 >> VALUE_SHIFT) & MASK13) as u16
    }

    /// Tie-break ranks.
    #[inline(always)]
    pub const fn kicker_mask(self) -> u16 {
        (self.0 & MASK13) as u16
    }
}

impl TryFrom<u32> for Evaluation {
    type Error = EvalError;

    fn try_from(raw: u32) -> Result<Self, Self::Error> {
        let spare = raw & (0b11 << (VALUE_SHIFT + 13));
        if spare != 0 || Category::from_u8((raw >> CATEGORY_SHIFT) as u8).is_none() {
            return Err(EvalError::InvalidEvaluation(raw));
        }
        Ok(Evaluation(raw))
    }
}

impl From<Evaluation> for u32 {
    fn from(e: Evaluation) -> Self {
        e.0
    }
}

impl fmt::Display for Evaluation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({:#010x})", self.category(), self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pack_fields() {
        let e = Evaluation::new(Category::OnePair, 0x0800, 0x1208);
        assert_eq!(e.raw(), 1 << 28 | 0x0800 << 13 | 0x1208);
        assert_eq!(e.category(), Category::OnePair);
        assert_eq!(e.value_mask(), 0x0800);
        assert_eq!(e.kicker_mask(), 0x1208);
    }

    #[test]
    fn category_dominates_masks() {
        let weak_pair = Evaluation::new(Category::OnePair, 0x1FFF, 0x1FFF);
        let low_two_pair = Evaluation::new(Category::TwoPair, 0x0003, 0);
        assert!(low_two_pair > weak_pair);
    }

    #[test]
    fn category_codes() {
        for c in Category::ALL {
            assert_eq!(Category::from_u8(c.code()), Some(c));
        }
        assert_eq!(Category::from_u8(8), None);
        assert_eq!(Category::StraightFlush.code(), 9);
        assert_eq!(Category::ThreeOfAKind.to_string(), "Three of a Kind");
    }

    #[test]
    fn try_from_validates() {
        assert!(Evaluation::try_from(7 << 28 | 0x0002 << 13 | 0x0100).is_ok());
        assert_eq!(
            Evaluation::try_from(8 << 28),
            Err(EvalError::InvalidEvaluation(8 << 28))
        );
        assert_eq!(
            Evaluation::try_from(1 << 26),
            Err(EvalError::InvalidEvaluation(1 << 26))
        );
    }
}
