//! # Population
//!
//! A multi-valued mapping from fitness score to the individuals holding
//! that score, backed by a `BTreeMap` so bucket keys are always available
//! in sorted order. Best-individual lookup walks the lowest bucket;
//! insertion order within a bucket is preserved and breaks ties
//! (first-inserted wins).
//!
//! ## Example
//!
//! ```rust
//! use magicga::population::Population;
//! use magicga::square::MagicSquare;
//!
//! let mut population = Population::new();
//! population.insert(180, MagicSquare::ordered(3).unwrap());
//! assert_eq!(population.len(), 1);
//!
//! let (fitness, best) = population.best().unwrap();
//! assert_eq!(fitness, 180);
//! assert_eq!(best.size(), 3);
//! ```

use std::collections::BTreeMap;

use crate::error::{GeneticError, Result};
use crate::fitness::Fitness;
use crate::square::MagicSquare;

/// The fitness-keyed multimap of candidate squares owned by the solver.
///
/// Outside of the merge-before-prune window within a generation, the total
/// individual count equals the configured population size.
#[derive(Debug, Clone, Default)]
pub struct Population {
    buckets: BTreeMap<Fitness, Vec<MagicSquare>>,
    count: usize,
}

impl Population {
    /// Creates an empty population.
    pub fn new() -> Self {
        Self {
            buckets: BTreeMap::new(),
            count: 0,
        }
    }

    /// Appends an individual into the bucket for `fitness`.
    pub fn insert(&mut self, fitness: Fitness, square: MagicSquare) {
        self.buckets.entry(fitness).or_default().push(square);
        self.count += 1;
    }

    /// Returns the total number of individuals across all buckets.
    pub fn len(&self) -> usize {
        self.count
    }

    /// Returns `true` if the population holds no individuals.
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Returns `true` if any individual has exactly the given fitness.
    ///
    /// `contains_fitness(0)` is the solver's fast perfect-square check.
    pub fn contains_fitness(&self, fitness: Fitness) -> bool {
        self.buckets.contains_key(&fitness)
    }

    /// Returns the minimum-fitness individual, with ties broken by
    /// insertion order, or `None` if the population is empty.
    pub fn best(&self) -> Option<(Fitness, &MagicSquare)> {
        self.buckets
            .iter()
            .next()
            .and_then(|(&fitness, bucket)| bucket.first().map(|square| (fitness, square)))
    }

    /// Returns the arithmetic mean of all fitness values, or `None` if the
    /// population is empty.
    pub fn mean_fitness(&self) -> Option<f64> {
        if self.count == 0 {
            return None;
        }

        let total: u128 = self
            .buckets
            .iter()
            .map(|(&fitness, bucket)| fitness as u128 * bucket.len() as u128)
            .sum();
        Some(total as f64 / self.count as f64)
    }

    /// Folds the contents of `other` into this population.
    pub fn merge(&mut self, other: Population) {
        for (fitness, bucket) in other.buckets {
            for square in bucket {
                self.insert(fitness, square);
            }
        }
    }

    /// Removes one individual equal to `square` from the bucket for
    /// `fitness`.
    ///
    /// # Errors
    ///
    /// Removing a pair that is not present is a programming error and
    /// surfaces as [`GeneticError::Population`] rather than being silently
    /// ignored.
    pub fn remove(&mut self, fitness: Fitness, square: &MagicSquare) -> Result<()> {
        let bucket = self.buckets.get_mut(&fitness).ok_or_else(|| {
            GeneticError::Population(format!(
                "No individual with fitness {} present in the population",
                fitness
            ))
        })?;

        let position = bucket.iter().position(|s| s == square).ok_or_else(|| {
            GeneticError::Population(format!(
                "Individual not present in the bucket for fitness {}",
                fitness
            ))
        })?;

        bucket.remove(position);
        if bucket.is_empty() {
            self.buckets.remove(&fitness);
        }
        self.count -= 1;
        Ok(())
    }

    /// Iterates over all `(fitness, individual)` entries in ascending
    /// fitness order, insertion order within a bucket.
    pub fn iter(&self) -> impl Iterator<Item = (Fitness, &MagicSquare)> {
        self.buckets
            .iter()
            .flat_map(|(&fitness, bucket)| bucket.iter().map(move |square| (fitness, square)))
    }

    /// Iterates over the fitness buckets in ascending key order.
    pub fn buckets(&self) -> impl Iterator<Item = (Fitness, &[MagicSquare])> {
        self.buckets
            .iter()
            .map(|(&fitness, bucket)| (fitness, bucket.as_slice()))
    }
}
