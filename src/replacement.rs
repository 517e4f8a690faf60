//! # ReplacementPolicy
//!
//! Replacement policies decide how a generation's children combine with
//! the current population to form the next one while respecting the target
//! population size.

use std::fmt::Debug;

use crate::error::{GeneticError, Result};
use crate::population::Population;
use crate::rng::RandomNumberGenerator;
use crate::selection::strategy::SurvivorSelection;

/// Trait for generational replacement policies.
pub trait ReplacementPolicy: Debug + Send + Sync {
    /// Folds `children` into `population` and returns the next generation.
    fn next_generation(
        &self,
        population: Population,
        children: Population,
        rng: &mut RandomNumberGenerator,
    ) -> Result<Population>;
}

/// A replacement policy where the children entirely become the next
/// population.
///
/// Only meaningful when children are produced 1:1 with a configured
/// offspring count each generation; the next population's size equals the
/// number of children bred.
#[derive(Debug, Clone, Default)]
pub struct FullReplacement;

impl FullReplacement {
    /// Creates a new full-replacement policy.
    pub fn new() -> Self {
        Self
    }
}

impl ReplacementPolicy for FullReplacement {
    fn next_generation(
        &self,
        _population: Population,
        children: Population,
        _rng: &mut RandomNumberGenerator,
    ) -> Result<Population> {
        if children.is_empty() {
            return Err(GeneticError::Evolution(
                "Full replacement received an empty children generation".to_string(),
            ));
        }
        Ok(children)
    }
}

/// A replacement policy that merges children into the population and then
/// trims back to the original size.
///
/// The merged population temporarily exceeds the target; the configured
/// survivor selection then picks the individuals to drop, so genuinely
/// better children can displace weaker incumbents while population growth
/// stays bounded.
#[derive(Debug)]
pub struct MergeAndTrim {
    survivor: Box<dyn SurvivorSelection>,
}

impl MergeAndTrim {
    /// Creates a merge-and-trim policy that trims with the given survivor
    /// selection.
    pub fn new(survivor: Box<dyn SurvivorSelection>) -> Self {
        Self { survivor }
    }
}

impl ReplacementPolicy for MergeAndTrim {
    fn next_generation(
        &self,
        population: Population,
        children: Population,
        rng: &mut RandomNumberGenerator,
    ) -> Result<Population> {
        let target = population.len();

        let mut merged = population;
        merged.merge(children);

        let excess = merged.len().saturating_sub(target);
        if excess == 0 {
            return Ok(merged);
        }

        let victims = self.survivor.select_for_removal(excess, &merged, rng)?;
        for (fitness, square) in victims {
            merged.remove(fitness, &square)?;
        }

        Ok(merged)
    }
}
