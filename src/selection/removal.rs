//! Worst-first survivor selection.

use crate::error::{GeneticError, Result};
use crate::fitness::Fitness;
use crate::population::Population;
use crate::rng::RandomNumberGenerator;
use crate::selection::strategy::SurvivorSelection;
use crate::square::MagicSquare;

/// A survivor selection strategy that removes the highest-fitness
/// individuals outright.
///
/// Buckets are drained from the worst fitness downward until `n`
/// individuals are collected. Deterministic and maximally greedy; the
/// randomized alternative is [`TournamentRemoval`](crate::selection::TournamentRemoval).
#[derive(Debug, Clone, Default)]
pub struct WorstFirstRemoval;

impl WorstFirstRemoval {
    /// Creates a new `WorstFirstRemoval` strategy.
    pub fn new() -> Self {
        Self
    }
}

impl SurvivorSelection for WorstFirstRemoval {
    fn select_for_removal(
        &self,
        n: usize,
        population: &Population,
        _rng: &mut RandomNumberGenerator,
    ) -> Result<Vec<(Fitness, MagicSquare)>> {
        if n > population.len() {
            return Err(GeneticError::Selection(format!(
                "Can't remove {} individuals from a population of {}",
                n,
                population.len()
            )));
        }

        let mut victims = Vec::with_capacity(n);
        let entries: Vec<(Fitness, &MagicSquare)> = population.iter().collect();
        for &(fitness, square) in entries.iter().rev() {
            if victims.len() >= n {
                break;
            }
            victims.push((fitness, square.clone()));
        }

        Ok(victims)
    }
}
