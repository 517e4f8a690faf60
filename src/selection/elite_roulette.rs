//! Combined elite and roulette-wheel parent selection.

use crate::error::{GeneticError, Result};
use crate::population::Population;
use crate::rng::RandomNumberGenerator;
use crate::selection::elite::elite_pool;
use crate::selection::roulette::roulette_pool;
use crate::selection::strategy::{pair_up, ParentSelection};
use crate::square::MagicSquare;

/// A selection strategy that fills an elite fraction of the parent pool
/// from the best fitness buckets and roulette-samples the remainder.
///
/// The elite quantity is computed as a fraction of the requested pool size
/// `n`, not of the full population. The combined pool is then paired by
/// drawing distinct random indices until fewer than two entries remain.
///
/// # Examples
///
/// ```
/// use magicga::population::Population;
/// use magicga::rng::RandomNumberGenerator;
/// use magicga::selection::{EliteRouletteSelection, ParentSelection};
/// use magicga::square::MagicSquare;
///
/// let mut rng = RandomNumberGenerator::from_seed(42);
/// let mut population = Population::new();
/// for fitness in [10, 20, 30, 40, 50, 60] {
///     population.insert(fitness, MagicSquare::random(3, &mut rng).unwrap());
/// }
///
/// let selection = EliteRouletteSelection::new(0.5).unwrap();
/// let pairs = selection.select_parents(6, &population, &mut rng).unwrap();
/// assert_eq!(pairs.len(), 3);
/// ```
#[derive(Debug, Clone)]
pub struct EliteRouletteSelection {
    elite_fraction: f64,
}

impl EliteRouletteSelection {
    /// Creates a new `EliteRouletteSelection` with the given elite
    /// fraction.
    ///
    /// # Errors
    ///
    /// Returns an error if `elite_fraction` is outside `[0, 1]`.
    pub fn new(elite_fraction: f64) -> Result<Self> {
        if !(0.0..=1.0).contains(&elite_fraction) {
            return Err(GeneticError::Configuration(format!(
                "Elite fraction must be within [0, 1], got {}",
                elite_fraction
            )));
        }
        Ok(Self { elite_fraction })
    }
}

impl Default for EliteRouletteSelection {
    /// Defaults to a 10% elite share of the parent pool.
    fn default() -> Self {
        Self {
            elite_fraction: 0.1,
        }
    }
}

impl ParentSelection for EliteRouletteSelection {
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

        let elite_quantity = (self.elite_fraction * n as f64) as usize;
        let mut pool = elite_pool(elite_quantity, population);
        pool.extend(roulette_pool(n - pool.len(), population, rng)?);

        Ok(pair_up(pool, rng))
    }
}
