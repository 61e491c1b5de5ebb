//! Batch evaluation helpers.
//!
//! Callers build accumulators (or stream them) and hand slices here. The
//! reductions avoid allocating an output array unless one is passed in.
//!
//! - `eval_sum` is a wrapping sum of packed evaluations; cheap for benchmarks
//!   since the work can't be optimized away.
//! - `category_counts` tallies how many hands land in each category.

use std::ops::AddAssign;

use tracing::instrument;

use crate::accumulator::Accumulator;
use crate::error::EvalError;
use crate::evaluator::evaluate;
use crate::score::{Category, Evaluation};

/// One tally per category code (0..=9, code 8 never used).
#[derive(Copy, Clone, Debug, Eq, PartialEq, Default)]
pub struct CategoryCounts {
    counts: [u64; 10],
}

impl CategoryCounts {
    pub const fn new() -> Self {
        Self { counts: [0; 10] }
    }

    #[inline(always)]
    pub fn record(&mut self, e: Evaluation) {
        self.counts[e.category().code() as usize] += 1;
    }

    pub const fn get(&self, category: Category) -> u64 {
        self.counts[category.code() as usize]
    }

    pub fn total(&self) -> u64 {
        self.counts.iter().sum()
    }

    pub fn merge(&mut self, other: &CategoryCounts) {
        for (a, b) in self.counts.iter_mut().zip(other.counts.iter()) {
            *a += b;
        }
    }

    /// `(category, count)` pairs from High Card up.
    pub fn iter(&self) -> impl Iterator<Item = (Category, u64)> + '_ {
        Category::ALL.into_iter().map(move |c| (c, self.get(c)))
    }
}

impl AddAssign for CategoryCounts {
    fn add_assign(&mut self, rhs: Self) {
        self.merge(&rhs);
    }
}

impl FromIterator<Evaluation> for CategoryCounts {
    fn from_iter<I: IntoIterator<Item = Evaluation>>(iter: I) -> Self {
        let mut counts = Self::new();
        for e in iter {
            counts.record(e);
        }
        counts
    }
}

/// Sequential: evaluate all hands and return a wrapping sum of packed evaluations.
#[inline]
pub fn eval_sum(hands: &[Accumulator]) -> u32 {
    let mut acc: u32 = 0;
    for h in hands {
        acc = acc.wrapping_add(evaluate(h).raw());
    }
    acc
}

/// Sequential: evaluate + write each result into `out`, and return a wrapping sum.
#[instrument(level = "trace", skip_all, fields(hands = hands.len()))]
pub fn eval_into(hands: &[Accumulator], out: &mut [Evaluation]) -> Result<u32, EvalError> {
    if hands.len() != out.len() {
        return Err(EvalError::LengthMismatch {
            hands: hands.len(),
            out: out.len(),
        });
    }
    let mut acc: u32 = 0;
    for (dst, h) in out.iter_mut().zip(hands) {
        let e = evaluate(h);
        *dst = e;
        acc = acc.wrapping_add(e.raw());
    }
    Ok(acc)
}

#[instrument(level = "trace", skip_all, fields(hands = hands.len()))]
pub fn category_counts(hands: &[Accumulator]) -> CategoryCounts {
    hands.iter().map(evaluate).collect()
}

#[cfg(feature = "parallel")]
mod par {
    use super::*;
    use rayon::prelude::*;

    /// Parallel: evaluate all hands and return a wrapping sum of packed evaluations.
    ///
    /// Best when `hands` is large (millions). For small N, overhead dominates.
    pub fn eval_sum_par(hands: &[Accumulator]) -> u32 {
        hands
            .par_iter()
            .map(|h| evaluate(h).raw())
            .reduce(|| 0u32, |a, b| a.wrapping_add(b))
    }

    #[instrument(level = "trace", skip_all, fields(hands = hands.len()))]
    pub fn category_counts_par(hands: &[Accumulator]) -> CategoryCounts {
        hands
            .par_iter()
            .fold(CategoryCounts::new, |mut counts, h| {
                counts.record(evaluate(h));
                counts
            })
            .reduce(CategoryCounts::new, |mut a, b| {
                a += b;
                a
            })
    }
}

#[cfg(feature = "parallel")]
pub use par::{category_counts_par, eval_sum_par};
