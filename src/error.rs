use thiserror::Error;

use crate::card::Card;

#[derive(Error, Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum EvalError {
    #[error("A hand needs at least 5 cards, got {0}")]
    TooFewCards(usize),

    #[error("A hand holds at most 7 cards, got {0}")]
    TooManyCards(usize),

    #[error("Card {0} appears more than once")]
    DuplicateCard(Card),

    #[error("Card index {0} is outside 0..52")]
    CardIndexOutOfRange(u8),

    #[error("{0:#010x} is not a packed evaluation")]
    InvalidEvaluation(u32),

    #[error("Output holds {out} slots but {hands} hands were given")]
    LengthMismatch { hands: usize, out: usize },
}

#[derive(Error, Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum ParseCardError {
    #[error("Expected two characters per card, got {0}")]
    InvalidLength(usize),

    #[error("Unknown rank character {0:?}")]
    InvalidRank(char),

    #[error("Unknown suit character {0:?}")]
    InvalidSuit(char),
}
