//! Panmixia (uniform random) parent selection.

use crate::error::{GeneticError, Result};
use crate::population::Population;
use crate::rng::RandomNumberGenerator;
use crate::selection::strategy::{pair_up, ParentSelection};
use crate::square::MagicSquare;

/// A selection strategy that ignores fitness entirely and forms pairs
/// uniformly at random from the whole population.
///
/// Panmixia applies no selection pressure of its own; the evolutionary
/// pressure has to come from the replacement policy instead, typically
/// [`MergeAndTrim`](crate::replacement::MergeAndTrim) with tournament
/// removal.
#[derive(Debug, Clone, Default)]
pub struct PanmixiaSelection;

impl PanmixiaSelection {
    /// Creates a new `PanmixiaSelection` strategy.
    pub fn new() -> Self {
        Self
    }
}

impl ParentSelection for PanmixiaSelection {
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

        let mut candidates: Vec<MagicSquare> =
            population.iter().map(|(_, square)| square.clone()).collect();
        rng.shuffle(&mut candidates);
        candidates.truncate(n);

        Ok(pair_up(candidates, rng))
    }
}
