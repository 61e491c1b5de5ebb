//! Card types (Suit/Rank/Card) and the packed card encoding.
//!
//! A `Card` is a single `u64` with two independent regions:
//!
//! ```text
//! bits 56..59 : Ace nibble     ...     bits 8..11 : Two nibble
//! bits  4..7  : extension nibble (always empty in a card)
//! bits  0..3  : suit selector, exactly one of 1/2/4/8
//! ```
//!
//! Each rank owns a 4-bit nibble so that summing per-suit words counts ranks in
//! parallel. The extension nibble is where straight detection copies the Ace so
//! that A-2-3-4-5 is found with the same shift ladder as every other straight.

use std::fmt;
use std::str::FromStr;

use crate::error::{EvalError, ParseCardError};

/// Bit offset of the Two nibble.
pub const RANK_SHIFT: u32 = 8;
/// Low nibble holding the suit selector.
pub const SUIT_BITS: u64 = 0xF;
/// Bit 0 of every rank nibble (Two..Ace).
pub const RANK_BITS: u64 = 0x0111_1111_1111_1100;

/// A playing card suit.
///
/// The discriminant is the suit's position in the 52-card index order.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub enum Suit {
    Hearts = 0,
    Clubs = 1,
    Diamonds = 2,
    Spades = 3,
}

impl Suit {
    pub const ALL: [Suit; 4] = [Suit::Hearts, Suit::Clubs, Suit::Diamonds, Suit::Spades];

    #[inline(always)]
    pub const fn idx(self) -> usize {
        self as usize
    }

    #[inline(always)]
    pub const fn from_u8(x: u8) -> Suit {
        match x & 0x3 {
            0 => Suit::Hearts,
            1 => Suit::Clubs,
            2 => Suit::Diamonds,
            _ => Suit::Spades,
        }
    }

    /// The one-hot selector stored in the low nibble of a card.
    #[inline(always)]
    pub const fn selector(self) -> u64 {
        1u64 << (self as u64)
    }

    pub const fn to_char(self) -> char {
        match self {
            Suit::Hearts => 'h',
            Suit::Clubs => 'c',
            Suit::Diamonds => 'd',
            Suit::Spades => 's',
        }
    }

    pub fn from_char(c: char) -> Option<Suit> {
        match c.to_ascii_lowercase() {
            'h' => Some(Suit::Hearts),
            'c' => Some(Suit::Clubs),
            'd' => Some(Suit::Diamonds),
            's' => Some(Suit::Spades),
            _ => None,
        }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

/// A playing card rank.
///
/// Stored as 0..12 (Two..Ace), which is also the bit position of the rank in
/// every dense 13-bit mask produced by the evaluator.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub enum Rank {
    Two = 0,
    Three = 1,
    Four = 2,
    Five = 3,
    Six = 4,
    Seven = 5,
    Eight = 6,
    Nine = 7,
    Ten = 8,
    Jack = 9,
    Queen = 10,
    King = 11,
    Ace = 12,
}

impl Rank {
    pub const ALL: [Rank; 13] = [
        Rank::Two,
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
        Rank::Ace,
    ];

    #[inline(always)]
    pub const fn idx(self) -> u8 {
        self as u8
    }

    /// Convert 0..12 to a Rank (Two..Ace). Input is assumed valid.
    #[inline(always)]
    pub const fn from_u8(x: u8) -> Rank {
        match x {
            0 => Rank::Two,
            1 => Rank::Three,
            2 => Rank::Four,
            3 => Rank::Five,
            4 => Rank::Six,
            5 => Rank::Seven,
            6 => Rank::Eight,
            7 => Rank::Nine,
            8 => Rank::Ten,
            9 => Rank::Jack,
            10 => Rank::Queen,
            11 => Rank::King,
            _ => Rank::Ace,
        }
    }

    /// The bit set in this rank's nibble.
    #[inline(always)]
    pub const fn nibble_bit(self) -> u64 {
        1u64 << (4 * self as u32 + RANK_SHIFT)
    }

    pub const fn to_char(self) -> char {
        match self {
            Rank::Two => '2',
            Rank::Three => '3',
            Rank::Four => '4',
            Rank::Five => '5',
            Rank::Six => '6',
            Rank::Seven => '7',
            Rank::Eight => '8',
            Rank::Nine => '9',
            Rank::Ten => 'T',
            Rank::Jack => 'J',
            Rank::Queen => 'Q',
            Rank::King => 'K',
            Rank::Ace => 'A',
        }
    }

    pub fn from_char(c: char) -> Option<Rank> {
        match c.to_ascii_uppercase() {
            '2' => Some(Rank::Two),
            '3' => Some(Rank::Three),
            '4' => Some(Rank::Four),
            '5' => Some(Rank::Five),
            '6' => Some(Rank::Six),
            '7' => Some(Rank::Seven),
            '8' => Some(Rank::Eight),
            '9' => Some(Rank::Nine),
            'T' => Some(Rank::Ten),
            'J' => Some(Rank::Jack),
            'Q' => Some(Rank::Queen),
            'K' => Some(Rank::King),
            'A' => Some(Rank::Ace),
            _ => None,
        }
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

/// Encode card index 0..51 (`rank = index % 13`, `suit = index / 13`).
///
/// Indices outside 0..51 are a caller error and are not checked; use
/// [`Card::try_from_index`] at trust boundaries.
#[inline(always)]
pub const fn make_card(index: u8) -> Card {
    let rank = (index % 13) as u32;
    let suit = (index / 13) as u32;
    Card((1u64 << (4 * rank + RANK_SHIFT)) | (1u64 << suit))
}

/// A card in its packed evaluation form.
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "String", into = "String")
)]
#[repr(transparent)]
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct Card(u64);

impl Card {
    #[inline(always)]
    pub const fn new(rank: Rank, suit: Suit) -> Self {
        Card(rank.nibble_bit() | suit.selector())
    }

    #[inline(always)]
    pub const fn from_index(index: u8) -> Self {
        make_card(index)
    }

    pub const fn try_from_index(index: u8) -> Result<Self, EvalError> {
        if index >= 52 {
            return Err(EvalError::CardIndexOutOfRange(index));
        }
        Ok(make_card(index))
    }

    /// The raw packed word.
    #[inline(always)]
    pub const fn bits(self) -> u64 {
        self.0
    }

    /// Only the suit selector bits.
    #[inline(always)]
    pub const fn suit_bits(self) -> u64 {
        self.0 & SUIT_BITS
    }

    /// Only the rank nibble bit.
    #[inline(always)]
    pub const fn rank_bits(self) -> u64 {
        self.0 & !SUIT_BITS
    }

    pub const fn rank(self) -> Rank {
        let nibble = (self.rank_bits().trailing_zeros() - RANK_SHIFT) / 4;
        Rank::from_u8(nibble as u8)
    }

    pub const fn suit(self) -> Suit {
        Suit::from_u8(self.suit_bits().trailing_zeros() as u8)
    }

    /// Inverse of [`make_card`].
    pub const fn index(self) -> u8 {
        (self.suit() as u8) * 13 + (self.rank() as u8)
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank(), self.suit())
    }
}

impl FromStr for Card {
    type Err = ParseCardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        let (Some(r), Some(su), None) = (chars.next(), chars.next(), chars.next()) else {
            return Err(ParseCardError::InvalidLength(s.chars().count()));
        };
        let rank = Rank::from_char(r).ok_or(ParseCardError::InvalidRank(r))?;
        let suit = Suit::from_char(su).ok_or(ParseCardError::InvalidSuit(su))?;
        Ok(Card::new(rank, suit))
    }
}

impl TryFrom<String> for Card {
    type Error = ParseCardError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Card> for String {
    fn from(card: Card) -> Self {
        card.to_string()
    }
}

/// Parse a run of two-character cards such as `"AhKd 5c,Ts"`.
///
/// ASCII whitespace and commas between cards are ignored.
pub fn parse_cards(s: &str) -> Result<Vec<Card>, ParseCardError> {
    let chars: Vec<char> = s
        .chars()
        .filter(|c| !c.is_ascii_whitespace() && *c != ',')
        .collect();
    if chars.len() % 2 != 0 {
        return Err(ParseCardError::InvalidLength(chars.len()));
    }
    chars
        .chunks_exact(2)
        .map(|pair| {
            let rank = Rank::from_char(pair[0]).ok_or(ParseCardError::InvalidRank(pair[0]))?;
            let suit = Suit::from_char(pair[1]).ok_or(ParseCardError::InvalidSuit(pair[1]))?;
            Ok(Card::new(rank, suit))
        })
        .collect()
}

/// All 52 cards in index order.
pub fn full_deck() -> [Card; 52] {
    std::array::from_fn(|i| make_card(i as u8))
}
