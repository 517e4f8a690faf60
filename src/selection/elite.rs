//! Elite parent selection.

use crate::error::{GeneticError, Result};
use crate::population::Population;
use crate::rng::RandomNumberGenerator;
use crate::selection::strategy::{pair_up, ParentSelection};
use crate::square::MagicSquare;

/// A selection strategy that fills the parent pool with the best
/// individuals only.
///
/// The pool is drained from the sorted fitness buckets low-to-high, so the
/// `n` lowest-fitness individuals become parents. Elitism keeps the best
/// solutions breeding every generation at the cost of diversity.
///
/// # Examples
///
/// ```
/// use magicga::population::Population;
/// use magicga::rng::RandomNumberGenerator;
/// use magicga::selection::{EliteSelection, ParentSelection};
/// use magicga::square::MagicSquare;
///
/// let mut rng = RandomNumberGenerator::from_seed(42);
/// let mut population = Population::new();
/// for fitness in [40, 30, 20, 10] {
///     population.insert(fitness, MagicSquare::random(3, &mut rng).unwrap());
/// }
///
/// let selection = EliteSelection::new();
/// let pairs = selection.select_parents(4, &population, &mut rng).unwrap();
/// assert_eq!(pairs.len(), 2);
/// ```
#[derive(Debug, Clone, Default)]
pub struct EliteSelection;

impl EliteSelection {
    /// Creates a new `EliteSelection` strategy.
    pub fn new() -> Self {
        Self
    }
}

/// Collects up to `n` individuals from the best fitness buckets upward.
pub(crate) fn elite_pool(n: usize, population: &Population) -> Vec<MagicSquare> {
    let mut pool = Vec::with_capacity(n);

    for (_, bucket) in population.buckets() {
        for square in bucket {
            if pool.len() >= n {
                return pool;
            }
            pool.push(square.clone());
        }
    }

    pool
}

impl ParentSelection for EliteSelection {
    fn select_parents(
        &self,
        n: usize,
        population: &Population,
        rng: &mut RandomNumberGenerator,
    ) -> Result<Vec<(MagicSquare, MagicSquare)>> {
        if population.len() < 2 {
            return Err(GeneticError::Selection(
                "Population should contain more than one individual".to_string(),
            ));
        }

        Ok(pair_up(elite_pool(n, population), rng))
    }
}
