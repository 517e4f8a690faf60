//! # SolverConfiguration
//!
//! The `SolverConfiguration` struct holds every parameter of a solve: the
//! generational limits, the operator probabilities, the strategy tunables,
//! and the variant tags that pick the concrete selection, crossover,
//! mutation, and replacement strategies at solver-construction time.
//!
//! Configurations are immutable once built. The builder validates the
//! parameter combination, so an invalid configuration never reaches the
//! solver.
//!
//! ## Example
//!
//! ```rust
//! use magicga::config::SolverConfiguration;
//!
//! let configuration = SolverConfiguration::builder()
//!     .max_generations(10_000)
//!     .population_size(200)
//!     .parent_pool_size(50)
//!     .crossover_probability(0.9)
//!     .mutation_probability(0.1)
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(configuration.population_size(), 200);
//! ```

use crate::error::{GeneticError, Result};

/// Tag selecting the parent selection strategy.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParentSelectionKind {
    /// Best individuals only, drained from the lowest fitness buckets.
    Elite,
    /// Reciprocal-fitness weighted sampling with replacement.
    Roulette,
    /// Elite fraction of the pool plus roulette-sampled remainder.
    EliteRoulette,
    /// A fraction of pairs drawn from the at-or-below-mean sub-pool.
    Constrained,
    /// Uniformly random pairs, no selection pressure.
    Panmixia,
}

/// Tag selecting the crossover operator.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CrossoverKind {
    /// Order crossover (OX).
    Order,
    /// Position-based crossover (PBX).
    Position,
}

/// Tag selecting the mutation operator.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MutationKind {
    /// Swap two random genes.
    GeneSwap,
    /// Swap two random rows.
    RowSwap,
    /// Swap two random columns.
    ColumnSwap,
    /// One of the three swaps per call, chosen by fixed thresholds.
    CompositeSwap,
}

/// Tag selecting the generational replacement policy.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReplacementKind {
    /// Children entirely become the next population.
    Full,
    /// Merge children in, then trim back to the target size.
    MergeAndTrim,
}

/// Tag selecting the survivor selection used by merge-and-trim.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SurvivorSelectionKind {
    /// Rank by tournament wins, drop the lowest-win tail.
    Tournament,
    /// Drop the highest-fitness individuals outright.
    WorstFirst,
}

/// Immutable configuration of one solve.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawConfiguration"))]
#[derive(Debug, Clone)]
pub struct SolverConfiguration {
    max_generations: usize,
    population_size: usize,
    parent_pool_size: usize,
    crossover_probability: f64,
    mutation_probability: f64,
    elite_fraction: f64,
    constrained_part: f64,
    tournament_size: usize,
    symmetry_weight: f64,
    report_interval: usize,
    parent_selection: ParentSelectionKind,
    crossover: CrossoverKind,
    mutation: MutationKind,
    replacement: ReplacementKind,
    survivor_selection: SurvivorSelectionKind,
}

impl SolverConfiguration {
    /// Returns a builder for creating a `SolverConfiguration`.
    pub fn builder() -> SolverConfigurationBuilder {
        SolverConfigurationBuilder::default()
    }

    /// The generation limit of the solve.
    pub fn max_generations(&self) -> usize {
        self.max_generations
    }

    /// The target number of individuals in the population.
    pub fn population_size(&self) -> usize {
        self.population_size
    }

    /// The number of individuals gathered into the parent pool each
    /// generation.
    pub fn parent_pool_size(&self) -> usize {
        self.parent_pool_size
    }

    /// The probability that a parent pair is recombined via crossover.
    pub fn crossover_probability(&self) -> f64 {
        self.crossover_probability
    }

    /// The probability that a child is mutated.
    pub fn mutation_probability(&self) -> f64 {
        self.mutation_probability
    }

    /// The elite share of the parent pool used by elite+roulette selection.
    pub fn elite_fraction(&self) -> f64 {
        self.elite_fraction
    }

    /// The fraction of pairs drawn from the sub-pool by constrained
    /// selection.
    pub fn constrained_part(&self) -> f64 {
        self.constrained_part
    }

    /// The number of head-to-head comparisons per entry in tournament
    /// removal.
    pub fn tournament_size(&self) -> usize {
        self.tournament_size
    }

    /// The symmetry penalty multiplier; 0 disables the penalty.
    pub fn symmetry_weight(&self) -> f64 {
        self.symmetry_weight
    }

    /// How many generations pass between progress snapshots.
    pub fn report_interval(&self) -> usize {
        self.report_interval
    }

    /// The configured parent selection variant.
    pub fn parent_selection(&self) -> ParentSelectionKind {
        self.parent_selection
    }

    /// The configured crossover variant.
    pub fn crossover(&self) -> CrossoverKind {
        self.crossover
    }

    /// The configured mutation variant.
    pub fn mutation(&self) -> MutationKind {
        self.mutation
    }

    /// The configured replacement variant.
    pub fn replacement(&self) -> ReplacementKind {
        self.replacement
    }

    /// The configured survivor selection variant.
    pub fn survivor_selection(&self) -> SurvivorSelectionKind {
        self.survivor_selection
    }
}

impl Default for SolverConfiguration {
    fn default() -> Self {
        // Safe to unwrap because the builder defaults are valid.
        SolverConfigurationBuilder::default().build().unwrap()
    }
}

/// Unvalidated wire shape of a configuration; deserialization is routed
/// through the builder so `build()`'s checks also guard decoded values.
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawConfiguration {
    max_generations: usize,
    population_size: usize,
    parent_pool_size: usize,
    crossover_probability: f64,
    mutation_probability: f64,
    elite_fraction: f64,
    constrained_part: f64,
    tournament_size: usize,
    symmetry_weight: f64,
    report_interval: usize,
    parent_selection: ParentSelectionKind,
    crossover: CrossoverKind,
    mutation: MutationKind,
    replacement: ReplacementKind,
    survivor_selection: SurvivorSelectionKind,
}

#[cfg(feature = "serde")]
impl TryFrom<RawConfiguration> for SolverConfiguration {
    type Error = GeneticError;

    fn try_from(raw: RawConfiguration) -> Result<Self> {
        SolverConfiguration::builder()
            .max_generations(raw.max_generations)
            .population_size(raw.population_size)
            .parent_pool_size(raw.parent_pool_size)
            .crossover_probability(raw.crossover_probability)
            .mutation_probability(raw.mutation_probability)
            .elite_fraction(raw.elite_fraction)
            .constrained_part(raw.constrained_part)
            .tournament_size(raw.tournament_size)
            .symmetry_weight(raw.symmetry_weight)
            .report_interval(raw.report_interval)
            .parent_selection(raw.parent_selection)
            .crossover(raw.crossover)
            .mutation(raw.mutation)
            .replacement(raw.replacement)
            .survivor_selection(raw.survivor_selection)
            .build()
    }
}

/// Builder for [`SolverConfiguration`].
///
/// Provides a fluent interface; `build()` validates the combination.
#[derive(Debug, Clone)]
pub struct SolverConfigurationBuilder {
    max_generations: usize,
    population_size: usize,
    parent_pool_size: usize,
    crossover_probability: f64,
    mutation_probability: f64,
    elite_fraction: f64,
    constrained_part: f64,
    tournament_size: usize,
    symmetry_weight: f64,
    report_interval: usize,
    parent_selection: ParentSelectionKind,
    crossover: CrossoverKind,
    mutation: MutationKind,
    replacement: ReplacementKind,
    survivor_selection: SurvivorSelectionKind,
}

impl Default for SolverConfigurationBuilder {
    fn default() -> Self {
        Self {
            max_generations: 1000,
            population_size: 1000,
            parent_pool_size: 250,
            crossover_probability: 0.8,
            mutation_probability: 0.4,
            elite_fraction: 0.1,
            constrained_part: 0.3,
            tournament_size: 50,
            symmetry_weight: 0.0,
            report_interval: 100,
            parent_selection: ParentSelectionKind::EliteRoulette,
            crossover: CrossoverKind::Order,
            mutation: MutationKind::CompositeSwap,
            replacement: ReplacementKind::MergeAndTrim,
            survivor_selection: SurvivorSelectionKind::Tournament,
        }
    }
}

impl SolverConfigurationBuilder {
    /// Sets the generation limit.
    pub fn max_generations(mut self, value: usize) -> Self {
        self.max_generations = value;
        self
    }

    /// Sets the target population size.
    pub fn population_size(mut self, value: usize) -> Self {
        self.population_size = value;
        self
    }

    /// Sets the parent pool size.
    pub fn parent_pool_size(mut self, value: usize) -> Self {
        self.parent_pool_size = value;
        self
    }

    /// Sets the crossover probability.
    pub fn crossover_probability(mut self, value: f64) -> Self {
        self.crossover_probability = value;
        self
    }

    /// Sets the mutation probability.
    pub fn mutation_probability(mut self, value: f64) -> Self {
        self.mutation_probability = value;
        self
    }

    /// Sets the elite fraction for elite+roulette selection.
    pub fn elite_fraction(mut self, value: f64) -> Self {
        self.elite_fraction = value;
        self
    }

    /// Sets the constrained selection part.
    pub fn constrained_part(mut self, value: f64) -> Self {
        self.constrained_part = value;
        self
    }

    /// Sets the tournament size for tournament removal.
    pub fn tournament_size(mut self, value: usize) -> Self {
        self.tournament_size = value;
        self
    }

    /// Sets the symmetry penalty multiplier.
    pub fn symmetry_weight(mut self, value: f64) -> Self {
        self.symmetry_weight = value;
        self
    }

    /// Sets the progress reporting interval in generations.
    pub fn report_interval(mut self, value: usize) -> Self {
        self.report_interval = value;
        self
    }

    /// Sets the parent selection variant.
    pub fn parent_selection(mut self, value: ParentSelectionKind) -> Self {
        self.parent_selection = value;
        self
    }

    /// Sets the crossover variant.
    pub fn crossover(mut self, value: CrossoverKind) -> Self {
        self.crossover = value;
        self
    }

    /// Sets the mutation variant.
    pub fn mutation(mut self, value: MutationKind) -> Self {
        self.mutation = value;
        self
    }

    /// Sets the replacement variant.
    pub fn replacement(mut self, value: ReplacementKind) -> Self {
        self.replacement = value;
        self
    }

    /// Sets the survivor selection variant.
    pub fn survivor_selection(mut self, value: SurvivorSelectionKind) -> Self {
        self.survivor_selection = value;
        self
    }

    /// Builds the configuration, validating the parameter combination.
    ///
    /// # Errors
    ///
    /// Returns a [`GeneticError::Configuration`] if the parent pool is
    /// larger than the population, any probability or fraction is outside
    /// `[0, 1]`, the symmetry weight is negative, the tournament size is
    /// zero, or the report interval is zero.
    pub fn build(self) -> Result<SolverConfiguration> {
        if self.parent_pool_size > self.population_size {
            return Err(GeneticError::Configuration(format!(
                "Parent pool size ({}) couldn't be more than population size ({})",
                self.parent_pool_size, self.population_size
            )));
        }
        for (name, value) in [
            ("crossover probability", self.crossover_probability),
            ("mutation probability", self.mutation_probability),
            ("elite fraction", self.elite_fraction),
            ("constrained part", self.constrained_part),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(GeneticError::Configuration(format!(
                    "{} must be within [0, 1], got {}",
                    name, value
                )));
            }
        }
        if self.symmetry_weight < 0.0 {
            return Err(GeneticError::Configuration(format!(
                "Symmetry weight must be non-negative, got {}",
                self.symmetry_weight
            )));
        }
        if self.tournament_size == 0 {
            return Err(GeneticError::Configuration(
                "Tournament size must be at least 1".to_string(),
            ));
        }
        if self.report_interval == 0 {
            return Err(GeneticError::Configuration(
                "Report interval must be at least 1".to_string(),
            ));
        }

        Ok(SolverConfiguration {
            max_generations: self.max_generations,
            population_size: self.population_size,
            parent_pool_size: self.parent_pool_size,
            crossover_probability: self.crossover_probability,
            mutation_probability: self.mutation_probability,
            elite_fraction: self.elite_fraction,
            constrained_part: self.constrained_part,
            tournament_size: self.tournament_size,
            symmetry_weight: self.symmetry_weight,
            report_interval: self.report_interval,
            parent_selection: self.parent_selection,
            crossover: self.crossover,
            mutation: self.mutation,
            replacement: self.replacement,
            survivor_selection: self.survivor_selection,
        })
    }
}
