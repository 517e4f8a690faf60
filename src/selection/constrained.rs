//! Constrained-by-average parent selection.

use crate::error::{GeneticError, Result};
use crate::population::Population;
use crate::rng::RandomNumberGenerator;
use crate::selection::strategy::ParentSelection;
use crate::square::MagicSquare;

/// A selection strategy that biases a configurable share of the parent
/// pairs towards individuals at or below the population's mean fitness.
///
/// A sub-pool of all at-or-below-mean individuals is built first. A
/// `constrained_part` fraction of the pairs is drawn from that sub-pool,
/// the remainder uniformly from the whole population. Every pair is formed
/// from two distinct pool entries.
///
/// When the sub-pool holds fewer than two members it is padded by
/// duplicating an existing member rather than failing. This mirrors the
/// historical stopgap behaviour; it biases those draws towards a single
/// individual and is kept for compatibility, not because the bias is
/// desirable.
#[derive(Debug, Clone)]
pub struct ConstrainedSelection {
    constrained_part: f64,
}

impl ConstrainedSelection {
    /// Creates a new `ConstrainedSelection` drawing the given fraction of
    /// pairs from the at-or-below-mean sub-pool.
    ///
    /// # Errors
    ///
    /// Returns an error if `constrained_part` is outside `[0, 1]`.
    pub fn new(constrained_part: f64) -> Result<Self> {
        if !(0.0..=1.0).contains(&constrained_part) {
            return Err(GeneticError::Configuration(format!(
                "Constrained selection part must be within [0, 1], got {}",
                constrained_part
            )));
        }
        Ok(Self { constrained_part })
    }
}

impl Default for ConstrainedSelection {
    /// Defaults to drawing 30% of the pairs from the sub-pool.
    fn default() -> Self {
        Self {
            constrained_part: 0.3,
        }
    }
}

impl ParentSelection for ConstrainedSelection {
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

        let mean = population
            .mean_fitness()
            .ok_or(GeneticError::EmptyPopulation)?;

        let everyone: Vec<&MagicSquare> =
            population.iter().map(|(_, square)| square).collect();
        let mut sub_pool: Vec<&MagicSquare> = population
            .iter()
            .filter(|&(fitness, _)| fitness as f64 <= mean)
            .map(|(_, square)| square)
            .collect();

        // Stopgap padding: duplicate a member so distinct index draws stay
        // possible. The duplicated entry can be paired with itself's copy.
        while sub_pool.len() < 2 {
            let filler = sub_pool.first().copied().unwrap_or(everyone[0]);
            sub_pool.push(filler);
        }

        let total_pairs = n / 2;
        let constrained_pairs = (self.constrained_part * total_pairs as f64) as usize;

        let mut pairs = Vec::with_capacity(total_pairs);
        for _ in 0..constrained_pairs {
            let (i, j) = rng.distinct_pair(sub_pool.len());
            pairs.push((sub_pool[i].clone(), sub_pool[j].clone()));
        }
        for _ in constrained_pairs..total_pairs {
            let (i, j) = rng.distinct_pair(everyone.len());
            pairs.push((everyone[i].clone(), everyone[j].clone()));
        }

        Ok(pairs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fitness::Fitness;

    fn population_with_fitness(values: &[Fitness]) -> Population {
        let mut rng = RandomNumberGenerator::from_seed(7);
        let mut population = Population::new();
        for &fitness in values {
            population.insert(fitness, MagicSquare::random(3, &mut rng).unwrap());
        }
        population
    }

    #[test]
    fn test_invalid_constrained_part() {
        assert!(ConstrainedSelection::new(-0.5).is_err());
        assert!(ConstrainedSelection::new(1.1).is_err());
        assert!(ConstrainedSelection::new(0.0).is_ok());
    }

    #[test]
    fn test_select_parents_pair_count() {
        let mut rng = RandomNumberGenerator::from_seed(42);
        let population = population_with_fitness(&[10, 20, 30, 40, 50, 60]);

        let selection = ConstrainedSelection::new(0.5).unwrap();
        let pairs = selection.select_parents(6, &population, &mut rng).unwrap();
        assert_eq!(pairs.len(), 3);
    }

    #[test]
    fn test_fully_constrained_pairs_come_from_sub_pool() {
        let mut rng = RandomNumberGenerator::from_seed(42);
        let good = MagicSquare::ordered(3).unwrap();
        let other = MagicSquare::from_chromosome(vec![2, 7, 6, 9, 5, 1, 4, 3, 8]).unwrap();

        let mut population = Population::new();
        population.insert(1, good.clone());
        population.insert(2, other.clone());
        population.insert(1_000, MagicSquare::random(3, &mut rng).unwrap());
        population.insert(2_000, MagicSquare::random(3, &mut rng).unwrap());

        let selection = ConstrainedSelection::new(1.0).unwrap();
        let pairs = selection.select_parents(8, &population, &mut rng).unwrap();

        for (father, mother) in pairs {
            assert!(father == good || father == other);
            assert!(mother == good || mother == other);
        }
    }

    #[test]
    fn test_sub_pool_padding_with_single_eligible_member() {
        let mut rng = RandomNumberGenerator::from_seed(42);

        // One individual far below the mean, the rest clustered above it.
        let mut population = population_with_fitness(&[1, 5_000, 5_000, 5_000]);
        population.insert(5_000, MagicSquare::random(3, &mut rng).unwrap());

        let selection = ConstrainedSelection::new(1.0).unwrap();
        let pairs = selection.select_parents(4, &population, &mut rng).unwrap();
        assert_eq!(pairs.len(), 2);
    }
}
