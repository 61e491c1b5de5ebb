//! Bit-parallel classifier over an [`Accumulator`].
//!
//! Summing the four suit slots counts every rank at once (one count per
//! nibble). Two bits of each count nibble are enough to tell quads (bit 2),
//! sets (bits 1 and 0) and pairs (bit 1 alone) apart, so the whole decision
//! table runs on a handful of masks. Masks stay nibble-spaced until the result
//! is packed.

use tracing::debug;

use crate::accumulator::Accumulator;
use crate::card::{Card, Suit, RANK_BITS};
use crate::compress::pack_ranks;
use crate::error::EvalError;
use crate::score::{Category, Evaluation};

/// Bit 2 of every rank count nibble: count == 4.
const QUAD_BITS: u64 = RANK_BITS << 2;
/// Bit 1 of every rank count nibble: count is 2 or 3.
const PAIR_BITS: u64 = RANK_BITS << 1;
/// Bit 0 of the extension nibble, below the Two.
const LOW_ACE: u64 = 1 << 4;
/// Distance from the Ace nibble down to the extension nibble.
const ACE_DROP: u32 = 52;

/// Keep only the most significant bit.
#[inline(always)]
fn keep_highest(x: u64) -> u64 {
    if x == 0 {
        0
    } else {
        1 << (63 - x.leading_zeros())
    }
}

/// Keep the N most significant bits by clearing the lowest ones.
#[inline(always)]
fn keep_n(mut x: u64, n: u32) -> u64 {
    while x.count_ones() > n {
        x &= x - 1;
    }
    x
}

/// Top card of the best straight in a nibble-spaced rank set, or 0.
///
/// The Ace is copied into the extension nibble so the wheel is found by the
/// same ladder. A surviving bit at rank r certifies r-4..r all present; with
/// six or seven in a row several bits survive and the highest one wins.
#[inline(always)]
fn straight_top(ranks: u64) -> u64 {
    let ranks = ranks & RANK_BITS;
    let mut run = ranks | ((ranks >> ACE_DROP) & LOW_ACE);
    run &= run << 4;
    run &= run << 4;
    run &= run << 4;
    run &= run << 4;
    keep_highest(run)
}

#[inline(always)]
fn finish(category: Category, value: u64, kicker: u64) -> Evaluation {
    Evaluation::new(category, pack_ranks(value), pack_ranks(kicker))
}

/// Classify the 5..7 cards folded into `acc`.
///
/// Malformed input (fewer than 5 cards, duplicates) yields some deterministic
/// value without panicking.
#[inline]
pub fn evaluate(acc: &Accumulator) -> Evaluation {
    let counts = acc.rank_counts();
    let ranks = acc.presence() & RANK_BITS;

    let quads = (counts & QUAD_BITS) >> 2;
    if quads != 0 {
        return finish(Category::FourOfAKind, quads, keep_highest(ranks & !quads));
    }

    let doubled = (counts & PAIR_BITS) >> 1;
    let sets = counts & doubled;
    let pairs = doubled ^ sets;

    // Two sets: the lower one plays as the pair.
    if sets.count_ones() >= 2 {
        let top = keep_highest(sets);
        return finish(Category::FullHouse, top, sets ^ top);
    }
    // AAAKKQQ ranks the same as AAAKKQJ.
    if sets != 0 && pairs != 0 {
        return finish(Category::FullHouse, sets, keep_highest(pairs));
    }

    if let Some(suit) = Suit::ALL.into_iter().find(|&s| acc.suit_len(s) >= 5) {
        let suited = acc.suit_slot(suit) & RANK_BITS;
        let top = straight_top(suited);
        if top != 0 {
            return finish(Category::StraightFlush, top, 0);
        }
        return finish(Category::Flush, keep_n(suited, 5), 0);
    }

    let top = straight_top(ranks);
    if top != 0 {
        return finish(Category::Straight, top, 0);
    }

    if sets != 0 {
        return finish(Category::ThreeOfAKind, sets, keep_n(ranks ^ sets, 2));
    }

    if pairs.count_ones() >= 2 {
        let both = keep_n(pairs, 2);
        return finish(Category::TwoPair, both, keep_highest(ranks ^ both));
    }

    if pairs != 0 {
        return finish(Category::OnePair, pairs, keep_n(ranks ^ pairs, 3));
    }

    finish(Category::HighCard, 0, keep_n(ranks, 5))
}

/// Evaluate a hand of 5..7 distinct cards.
#[inline]
pub fn evaluate_cards(cards: &[Card]) -> Evaluation {
    evaluate(&Accumulator::from_cards(cards.iter().copied()))
}

/// Convenience: evaluate from a small slice of 0..51 card ids.
#[inline]
pub fn evaluate_indices(ids: &[u8]) -> Evaluation {
    evaluate(&Accumulator::from_indices(ids))
}

/// Like [`evaluate_cards`], but rejects hands outside 5..=7 cards or with a
/// repeated card instead of returning an unspecified value.
pub fn try_evaluate(cards: &[Card]) -> Result<Evaluation, EvalError> {
    let n = cards.len();
    if n < 5 {
        debug!(n, "Rejecting short hand");
        return Err(EvalError::TooFewCards(n));
    }
    if n > 7 {
        debug!(n, "Rejecting oversized hand");
        return Err(EvalError::TooManyCards(n));
    }

    let mut acc = Accumulator::new();
    for &card in cards {
        if acc.contains(card) {
            debug!(%card, "Rejecting hand with duplicate card");
            return Err(EvalError::DuplicateCard(card));
        }
        acc.add(card);
    }
    Ok(evaluate(&acc))
}
