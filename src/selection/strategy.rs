//! Traits for parent and survivor selection.
//!
//! Parent selection produces the ordered parent pairs a generation breeds
//! from; survivor selection picks the individuals a replacement policy
//! drops when the population has to shrink back to its target size.
//! Different strategies can be combined freely at solver-construction time.

use std::fmt::Debug;

use crate::error::Result;
use crate::fitness::Fitness;
use crate::population::Population;
use crate::rng::RandomNumberGenerator;
use crate::square::MagicSquare;

/// Strategy for choosing parent pairs from a population.
///
/// # Errors
///
/// Implementations return an error if the population contains fewer than
/// two individuals, since no self-free pair can be formed from it.
pub trait ParentSelection: Debug + Send + Sync {
    /// Produces an ordered sequence of `(father, mother)` pairs drawn from
    /// the population.
    ///
    /// `n` is the size of the parent pool the pairs are formed from; a pool
    /// of `n` individuals yields `n / 2` pairs. No pair ever holds the same
    /// pool entry twice.
    fn select_parents(
        &self,
        n: usize,
        population: &Population,
        rng: &mut RandomNumberGenerator,
    ) -> Result<Vec<(MagicSquare, MagicSquare)>>;
}

/// Strategy for choosing which individuals to drop from an oversized
/// population.
///
/// # Errors
///
/// Implementations return an error when asked to remove more individuals
/// than the population contains.
pub trait SurvivorSelection: Debug + Send + Sync {
    /// Selects `n` individuals to remove, returned as `(fitness, square)`
    /// pairs matching entries currently present in the population.
    fn select_for_removal(
        &self,
        n: usize,
        population: &Population,
        rng: &mut RandomNumberGenerator,
    ) -> Result<Vec<(Fitness, MagicSquare)>>;
}

/// Pairs up a parent pool by repeatedly drawing two distinct random
/// indices and removing both entries, until fewer than two remain.
///
/// Resampling until the indices differ guarantees no individual is ever
/// paired with itself.
pub(crate) fn pair_up(
    mut pool: Vec<MagicSquare>,
    rng: &mut RandomNumberGenerator,
) -> Vec<(MagicSquare, MagicSquare)> {
    let mut pairs = Vec::with_capacity(pool.len() / 2);

    while pool.len() > 1 {
        let (first, second) = rng.distinct_pair(pool.len());
        // Remove the higher index first so the lower one stays valid.
        let (hi, lo) = if first > second {
            (first, second)
        } else {
            (second, first)
        };
        let mother = pool.swap_remove(hi);
        let father = pool.swap_remove(lo);
        pairs.push((father, mother));
    }

    pairs
}
