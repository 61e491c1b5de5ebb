//! Hand accumulator: five `u64` slots folded from packed cards.
//!
//! A card's suit selector picks its slot (`card & 7`): Hearts→1, Clubs→2,
//! Diamonds→4, Spades→0. Slot 3 is never selected by a suit; it collects the
//! bitwise OR of every card and serves presence queries.
//!
//! Each suit slot receives `rank_bits + 1`, so its low nibble counts the cards
//! of that suit while the rank nibbles hold at most one bit each. Summing the
//! four suit slots therefore yields the exact per-rank count in every nibble.

use crate::card::{Card, Suit, RANK_BITS, SUIT_BITS};

/// Slot that ORs every added card.
pub const PRESENCE: usize = 3;

#[inline(always)]
const fn slot_of(selector: u64) -> usize {
    (selector & 7) as usize
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Default)]
pub struct Accumulator {
    slots: [u64; 5],
}

impl Accumulator {
    #[inline(always)]
    pub const fn new() -> Self {
        Self { slots: [0; 5] }
    }

    #[inline(always)]
    pub fn clear(&mut self) {
        self.slots = [0; 5];
    }

    #[inline]
    pub fn from_cards<I: IntoIterator<Item = Card>>(iter: I) -> Self {
        let mut acc = Self::new();
        for c in iter {
            acc.add(c);
        }
        acc
    }

    #[inline]
    pub fn from_indices(ids: &[u8]) -> Self {
        Self::from_cards(ids.iter().map(|&id| Card::from_index(id)))
    }

    /// Fold one card in. Adding the same card twice is not detected.
    #[inline(always)]
    pub fn add(&mut self, card: Card) {
        self.slots[slot_of(card.bits())] += card.rank_bits() + 1;
        self.slots[PRESENCE] |= card.bits();
    }

    #[inline(always)]
    pub const fn slots(&self) -> &[u64; 5] {
        &self.slots
    }

    /// OR of every card added: rank nibble bits plus the suit selectors seen.
    #[inline(always)]
    pub const fn presence(&self) -> u64 {
        self.slots[PRESENCE]
    }

    #[inline(always)]
    pub const fn suit_slot(&self, suit: Suit) -> u64 {
        self.slots[slot_of(suit.selector())]
    }

    /// Number of cards of `suit` added so far.
    #[inline(always)]
    pub const fn suit_len(&self, suit: Suit) -> u32 {
        (self.suit_slot(suit) & SUIT_BITS) as u32
    }

    /// Per-rank card counts, one count (0..4) per rank nibble.
    ///
    /// The low nibble holds the total number of cards.
    #[inline(always)]
    pub const fn rank_counts(&self) -> u64 {
        self.slots[0] + self.slots[1] + self.slots[2] + self.slots[4]
    }

    #[inline(always)]
    pub const fn len(&self) -> u32 {
        (self.rank_counts() & SUIT_BITS) as u32
    }

    #[inline(always)]
    pub const fn is_empty(&self) -> bool {
        self.presence() == 0
    }

    pub const fn contains(&self, card: Card) -> bool {
        self.suit_slot(card.suit()) & card.rank_bits() & RANK_BITS != 0
    }
}

impl FromIterator<Card> for Accumulator {
    fn from_iter<I: IntoIterator<Item = Card>>(iter: I) -> Self {
        Self::from_cards(iter)
    }
}

impl Extend<Card> for Accumulator {
    fn extend<I: IntoIterator<Item = Card>>(&mut self, iter: I) {
        for c in iter {
            self.add(c);
        }
    }
}
