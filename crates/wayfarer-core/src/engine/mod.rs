//! Destination recommendation engine.
//!
//! Two stages with a deliberate seam between them:
//!
//! 1. **Scoring** ([`scoring`]): deterministic, baseline percentage plus
//!    fixed bonuses, clamped to 100, stable-sorted.
//! 2. **Sampling** ([`recommend`]): random by design, the top of the
//!    ranking becomes a candidate pool, which is shuffled and cut to a
//!    random size of two or three.
//!
//! Re-invoking [`recommend`] with identical inputs is expected to produce a
//! different subset or order; that is the "refresh" behavior, not a defect.
//! The random source is injected so callers can seed it: production passes
//! a thread rng, tests pass a seeded [`rand::rngs::StdRng`].

use rand::seq::SliceRandom;
use rand::Rng;

use crate::models::{Destination, EmotionProfile};

pub mod scoring;

pub use scoring::{rank, score};

/// Size of the top-ranked candidate pool sampled from.
pub const POOL_SIZE: usize = 6;

/// Smallest number of recommendations returned when the pool allows.
pub const MIN_PICKS: usize = 2;

/// Largest number of recommendations returned.
pub const MAX_PICKS: usize = 3;

/// Produces a small, varied, relevance-ranked subset of the catalog.
///
/// The top `min(6, catalog len)` destinations by recomputed score form the
/// candidate pool; the pool is uniformly shuffled and the first `k` entries
/// are returned, with `k` drawn uniformly from `{2, 3}` and capped at the
/// pool size. Returned copies carry their recomputed score in
/// `match_percentage`. An empty catalog yields an empty result.
pub fn recommend<R: Rng + ?Sized>(
    catalog: &[Destination],
    profile: &EmotionProfile,
    rng: &mut R,
) -> Vec<Destination> {
    let mut pool = rank(catalog, profile);
    pool.truncate(POOL_SIZE);

    if pool.is_empty() {
        return pool;
    }

    pool.shuffle(rng);
    let picks = rng.gen_range(MIN_PICKS..=MAX_PICKS).min(pool.len());
    pool.truncate(picks);
    pool
}
