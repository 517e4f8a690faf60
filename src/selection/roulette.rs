//! Roulette-wheel parent selection.

use crate::error::{GeneticError, Result};
use crate::population::Population;
use crate::rng::RandomNumberGenerator;
use crate::selection::strategy::{pair_up, ParentSelection};
use crate::square::MagicSquare;

/// A selection strategy that samples parents with probability proportional
/// to the reciprocal of their fitness.
///
/// Lower fitness means a better square, so each individual is weighted by
/// `1 / fitness` and the pool is sampled with replacement using
/// cumulative-probability sampling. Individuals with fitness 0 dominate
/// the wheel in the limit; they are handled before the division by
/// sampling uniformly among them.
///
/// # Examples
///
/// ```
/// use magicga::population::Population;
/// use magicga::rng::RandomNumberGenerator;
/// use magicga::selection::{ParentSelection, RouletteWheelSelection};
/// use magicga::square::MagicSquare;
///
/// let mut rng = RandomNumberGenerator::from_seed(42);
/// let mut population = Population::new();
/// for fitness in [10, 20, 30, 40] {
///     population.insert(fitness, MagicSquare::random(3, &mut rng).unwrap());
/// }
///
/// let selection = RouletteWheelSelection::new();
/// let pairs = selection.select_parents(4, &population, &mut rng).unwrap();
/// assert_eq!(pairs.len(), 2);
/// ```
#[derive(Debug, Clone, Default)]
pub struct RouletteWheelSelection;

impl RouletteWheelSelection {
    /// Creates a new `RouletteWheelSelection` strategy.
    pub fn new() -> Self {
        Self
    }
}

/// Samples `n` individuals with replacement, weighted by reciprocal fitness.
pub(crate) fn roulette_pool(
    n: usize,
    population: &Population,
    rng: &mut RandomNumberGenerator,
) -> Result<Vec<MagicSquare>> {
    if population.is_empty() {
        return Err(GeneticError::EmptyPopulation);
    }

    // Fitness 0 squares take the whole wheel: their reciprocal weight is
    // unbounded, so sample uniformly among them instead of dividing.
    if population.contains_fitness(0) {
        let perfect: Vec<&MagicSquare> = population
            .iter()
            .filter(|&(fitness, _)| fitness == 0)
            .map(|(_, square)| square)
            .collect();
        return Ok((0..n)
            .map(|_| perfect[rng.gen_index(perfect.len())].clone())
            .collect());
    }

    let entries: Vec<(f64, &MagicSquare)> = population
        .iter()
        .map(|(fitness, square)| (1.0 / fitness as f64, square))
        .collect();
    let total: f64 = entries.iter().map(|(weight, _)| weight).sum();

    let mut cumulative = Vec::with_capacity(entries.len());
    let mut running = 0.0;
    for (weight, square) in &entries {
        running += weight / total;
        cumulative.push((running, *square));
    }
    // Guard the tail against floating-point shortfall.
    if let Some(last) = cumulative.last_mut() {
        last.0 = 1.0;
    }

    let mut pool = Vec::with_capacity(n);
    for _ in 0..n {
        let roll = rng.gen_probability();
        let chosen = cumulative
            .iter()
            .find(|(bound, _)| roll <= *bound)
            .map(|(_, square)| *square)
            .unwrap_or(cumulative[cumulative.len() - 1].1);
        pool.push(chosen.clone());
    }

    Ok(pool)
}

impl ParentSelection for RouletteWheelSelection {
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

        let pool = roulette_pool(n, population, rng)?;
        Ok(pair_up(pool, rng))
    }
}
