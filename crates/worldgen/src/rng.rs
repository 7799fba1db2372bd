//! The random source threaded through generation.
//!
//! Every draw goes through a caller-supplied `Rng`, so a seeded source makes
//! a whole generation run reproducible.

use rand::SeedableRng;
use rand::distributions::{Distribution, WeightedIndex};
use rand::{Rng, seq::SliceRandom};
use rand_xoshiro::Xoshiro256PlusPlus;

/// Random source used by the CLI and the `Generator` facade.
pub type GenRng = Xoshiro256PlusPlus;

pub fn seeded_rng(seed: u64) -> GenRng {
    GenRng::seed_from_u64(seed)
}

pub fn entropy_rng() -> GenRng {
    GenRng::from_entropy()
}

/// Pick one item with probability proportional to `weight`, with replacement.
///
/// Returns `None` when `items` is empty or the weights are unusable
/// (negative, NaN, infinite, all zero, or summing past `f32::MAX`).
pub fn pick_weighted<'a, T, R, F>(rng: &mut R, items: &'a [T], weight: F) -> Option<&'a T>
where
    R: Rng + ?Sized,
    F: Fn(&T) -> f32,
{
    // WeightedIndex panics on a non-finite total instead of erroring.
    if !items.iter().map(&weight).sum::<f32>().is_finite() {
        return None;
    }
    let dist = WeightedIndex::new(items.iter().map(weight)).ok()?;
    items.get(dist.sample(rng))
}

/// Pick one item with equal weight for every candidate.
pub fn pick_uniform<'a, T, R>(rng: &mut R, items: &'a [T]) -> Option<&'a T>
where
    R: Rng + ?Sized,
{
    items.choose(rng)
}
