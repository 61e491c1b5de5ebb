//! Bit-parallel 5-7 card poker hand evaluation.
//!
//! Cards are packed into `u64` words, folded into a five-slot [`Accumulator`],
//! and classified into a single [`Evaluation`] whose unsigned order is the
//! poker order of the hands.

pub mod card;
pub mod accumulator;
pub mod compress;
pub mod score;
pub mod evaluator;
pub mod batch;
pub mod error;

pub use card::{full_deck, make_card, parse_cards, Card, Rank, Suit};
pub use accumulator::Accumulator;
pub use compress::{compress_nibbles, pack_ranks, MASK13};
pub use evaluator::{evaluate, evaluate_cards, evaluate_indices, try_evaluate};
pub use score::{Category, Evaluation};
pub use error::{EvalError, ParseCardError};

pub use batch::{category_counts, eval_into, eval_sum, CategoryCounts};
#[cfg(feature = "parallel")]
pub use batch::{category_counts_par, eval_sum_par};
