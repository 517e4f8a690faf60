//! # Solver
//!
//! Orchestrates the generational loop: initialize the population, then
//! repeat select → vary → evaluate → replace until a perfect square is
//! found, the generation limit is reached, or the run is cancelled.
//!
//! The concrete selection, crossover, mutation, and replacement strategies
//! are picked from the variant tags of the [`SolverConfiguration`] at
//! construction time. The loop itself is single-threaded and CPU-bound;
//! only fitness evaluation of large batches is parallelized.
//!
//! ## Example
//!
//! ```rust
//! use magicga::config::SolverConfiguration;
//! use magicga::solver::Solver;
//!
//! let configuration = SolverConfiguration::builder()
//!     .max_generations(50)
//!     .population_size(40)
//!     .parent_pool_size(20)
//!     .build()
//!     .unwrap();
//!
//! let solver = Solver::new(3, configuration).unwrap();
//! let result = solver.solve().unwrap();
//! assert!(result.generation <= 50);
//! ```

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use rayon::prelude::*;
use tracing::{debug, info};

use crate::config::{
    CrossoverKind, MutationKind, ParentSelectionKind, ReplacementKind, SolverConfiguration,
    SurvivorSelectionKind,
};
use crate::error::{GeneticError, Result};
use crate::fitness::{Fitness, FitnessEvaluator};
use crate::operators::{
    ColumnSwapMutation, CompositeSwapMutation, CrossoverOperator, GeneSwapMutation,
    MutationOperator, OrderCrossover, PositionCrossover, RowSwapMutation,
};
use crate::population::Population;
use crate::progress::ProgressSink;
use crate::replacement::{FullReplacement, MergeAndTrim, ReplacementPolicy};
use crate::rng::RandomNumberGenerator;
use crate::selection::strategy::SurvivorSelection;
use crate::selection::{
    ConstrainedSelection, EliteRouletteSelection, EliteSelection, PanmixiaSelection,
    ParentSelection, RouletteWheelSelection, TournamentRemoval, WorstFirstRemoval,
};
use crate::square::MagicSquare;

/// Minimum batch size before fitness evaluation is parallelized.
const PARALLEL_EVAL_THRESHOLD: usize = 1000;

/// Snapshot of the best individual found so far.
///
/// Produced once per reporting interval and once at the end of a solve.
/// The snapshot is an owned, immutable copy: it never aliases the solver's
/// live population.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolverResult {
    /// The best square found.
    pub square: MagicSquare,
    /// Its fitness; 0 means a perfect magic square.
    pub fitness: Fitness,
    /// The generation index at which the snapshot was captured.
    pub generation: usize,
}

/// The genetic-algorithm solver for one square side length.
///
/// A solver owns its population exclusively for the lifetime of one
/// `solve` invocation. Cancellation is cooperative: the flag is checked
/// once per generation boundary, and a cancelled run returns the best
/// result found so far rather than an error.
pub struct Solver {
    square_size: usize,
    configuration: SolverConfiguration,
    evaluator: FitnessEvaluator,
    parent_selection: Box<dyn ParentSelection>,
    crossover: Box<dyn CrossoverOperator>,
    mutation: Box<dyn MutationOperator>,
    replacement: Box<dyn ReplacementPolicy>,
    progress: Option<Arc<dyn ProgressSink>>,
    cancel: Option<Arc<AtomicBool>>,
}

impl Solver {
    /// Creates a solver for squares of the given side length, with the
    /// strategy variants the configuration selects.
    ///
    /// # Errors
    ///
    /// Returns an error if `square_size` is zero or a strategy tunable in
    /// the configuration is invalid for the selected variant.
    pub fn new(square_size: usize, configuration: SolverConfiguration) -> Result<Self> {
        if square_size == 0 {
            return Err(GeneticError::Configuration(
                "Size of square should be positive".to_string(),
            ));
        }

        let parent_selection: Box<dyn ParentSelection> = match configuration.parent_selection() {
            ParentSelectionKind::Elite => Box::new(EliteSelection::new()),
            ParentSelectionKind::Roulette => Box::new(RouletteWheelSelection::new()),
            ParentSelectionKind::EliteRoulette => {
                Box::new(EliteRouletteSelection::new(configuration.elite_fraction())?)
            }
            ParentSelectionKind::Constrained => {
                Box::new(ConstrainedSelection::new(configuration.constrained_part())?)
            }
            ParentSelectionKind::Panmixia => Box::new(PanmixiaSelection::new()),
        };

        let crossover: Box<dyn CrossoverOperator> = match configuration.crossover() {
            CrossoverKind::Order => Box::new(OrderCrossover::new()),
            CrossoverKind::Position => Box::new(PositionCrossover::new()),
        };

        let mutation: Box<dyn MutationOperator> = match configuration.mutation() {
            MutationKind::GeneSwap => Box::new(GeneSwapMutation::new()),
            MutationKind::RowSwap => Box::new(RowSwapMutation::new()),
            MutationKind::ColumnSwap => Box::new(ColumnSwapMutation::new()),
            MutationKind::CompositeSwap => Box::new(CompositeSwapMutation::new()),
        };

        let replacement: Box<dyn ReplacementPolicy> = match configuration.replacement() {
            ReplacementKind::Full => Box::new(FullReplacement::new()),
            ReplacementKind::MergeAndTrim => {
                let survivor: Box<dyn SurvivorSelection> =
                    match configuration.survivor_selection() {
                        SurvivorSelectionKind::Tournament => {
                            Box::new(TournamentRemoval::new(configuration.tournament_size())?)
                        }
                        SurvivorSelectionKind::WorstFirst => Box::new(WorstFirstRemoval::new()),
                    };
                Box::new(MergeAndTrim::new(survivor))
            }
        };

        let evaluator = if configuration.symmetry_weight() > 0.0 {
            FitnessEvaluator::with_symmetry_weight(configuration.symmetry_weight())
        } else {
            FitnessEvaluator::new()
        };

        Ok(Self {
            square_size,
            configuration,
            evaluator,
            parent_selection,
            crossover,
            mutation,
            replacement,
            progress: None,
            cancel: None,
        })
    }

    /// Registers a progress sink receiving a snapshot once per reporting
    /// interval.
    pub fn with_progress(mut self, progress: Arc<dyn ProgressSink>) -> Self {
        self.progress = Some(progress);
        self
    }

    /// Registers a cooperative cancellation flag, checked once per
    /// generation boundary.
    pub fn with_cancel(mut self, cancel: Arc<AtomicBool>) -> Self {
        self.cancel = Some(cancel);
        self
    }

    /// Runs the evolutionary loop to completion with an entropy-seeded
    /// random number generator.
    pub fn solve(&self) -> Result<SolverResult> {
        let mut rng = RandomNumberGenerator::new();
        self.solve_with_rng(&mut rng)
    }

    /// Runs the evolutionary loop with the provided random number
    /// generator; seeding it makes the run reproducible.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured population cannot sustain the
    /// selected strategies, or any selection, variation, or replacement
    /// step fails.
    pub fn solve_with_rng(&self, rng: &mut RandomNumberGenerator) -> Result<SolverResult> {
        if self.configuration.population_size() < 2 {
            return Err(GeneticError::Configuration(
                "Population should contain more than one individual".to_string(),
            ));
        }

        info!(
            square_size = self.square_size,
            population_size = self.configuration.population_size(),
            max_generations = self.configuration.max_generations(),
            "starting magic square search"
        );

        let mut population = self.initial_population(rng)?;
        let mut generation = 0usize;

        loop {
            if population.contains_fitness(0) {
                info!(generation, "perfect magic square found");
                break;
            }
            if generation >= self.configuration.max_generations() {
                info!(generation, "generation limit reached");
                break;
            }
            if self.is_cancelled() {
                info!(generation, "solve cancelled, returning best so far");
                break;
            }

            if generation % self.configuration.report_interval() == 0 {
                let snapshot = best_of(&population, generation)?;
                debug!(
                    generation,
                    best_fitness = snapshot.fitness,
                    "progress snapshot"
                );
                if let Some(progress) = &self.progress {
                    progress.publish(&snapshot);
                }
            }

            generation += 1;

            let parents = self.parent_selection.select_parents(
                self.configuration.parent_pool_size(),
                &population,
                rng,
            )?;
            let children = self.breed(&parents, rng)?;

            population = self
                .replacement
                .next_generation(population, children, rng)?;
        }

        best_of(&population, generation)
    }

    /// Generates and evaluates the initial population of random squares.
    fn initial_population(&self, rng: &mut RandomNumberGenerator) -> Result<Population> {
        let squares: Vec<MagicSquare> = (0..self.configuration.population_size())
            .map(|_| MagicSquare::random(self.square_size, rng))
            .collect::<Result<_>>()?;

        let mut population = Population::new();
        for (fitness, square) in self.evaluate_batch(squares) {
            population.insert(fitness, square);
        }
        Ok(population)
    }

    /// Breeds one child per parent pair.
    ///
    /// With `crossover_probability` the child is recombined from the pair
    /// and then mutated with `mutation_probability`; otherwise a randomly
    /// chosen parent is mutated directly.
    fn breed(
        &self,
        parents: &[(MagicSquare, MagicSquare)],
        rng: &mut RandomNumberGenerator,
    ) -> Result<Population> {
        let mut offspring = Vec::with_capacity(parents.len());

        for (father, mother) in parents {
            if rng.gen_probability() < self.configuration.crossover_probability() {
                let mut child = self.crossover.crossover(father, mother, rng)?;
                if rng.gen_probability() < self.configuration.mutation_probability() {
                    child = self.mutation.mutate(&child, rng)?;
                }
                offspring.push(child);
            } else {
                let parent = if rng.gen_probability() < 0.5 {
                    father
                } else {
                    mother
                };
                offspring.push(self.mutation.mutate(parent, rng)?);
            }
        }

        let mut children = Population::new();
        for (fitness, square) in self.evaluate_batch(offspring) {
            children.insert(fitness, square);
        }
        Ok(children)
    }

    /// Evaluates a batch of squares, in parallel when the batch is large
    /// enough to benefit.
    fn evaluate_batch(&self, squares: Vec<MagicSquare>) -> Vec<(Fitness, MagicSquare)> {
        if squares.len() >= PARALLEL_EVAL_THRESHOLD {
            squares
                .into_par_iter()
                .map(|square| (self.evaluator.evaluate(&square), square))
                .collect()
        } else {
            squares
                .into_iter()
                .map(|square| (self.evaluator.evaluate(&square), square))
                .collect()
        }
    }

    fn is_cancelled(&self) -> bool {
        self.cancel
            .as_ref()
            .map(|flag| flag.load(Ordering::Relaxed))
            .unwrap_or(false)
    }
}

/// Captures the best individual of the population as an owned snapshot.
fn best_of(population: &Population, generation: usize) -> Result<SolverResult> {
    let (fitness, square) = population.best().ok_or(GeneticError::EmptyPopulation)?;
    Ok(SolverResult {
        square: square.clone(),
        fitness,
        generation,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::progress::SharedProgress;

    fn small_configuration() -> SolverConfiguration {
        SolverConfiguration::builder()
            .max_generations(200)
            .population_size(60)
            .parent_pool_size(30)
            .crossover_probability(0.9)
            .mutation_probability(0.3)
            .tournament_size(10)
            .build()
            .unwrap()
    }

    #[test]
    fn test_new_rejects_zero_square_size() {
        assert!(Solver::new(0, small_configuration()).is_err());
    }

    #[test]
    fn test_solve_rejects_tiny_population() {
        let configuration = SolverConfiguration::builder()
            .population_size(1)
            .parent_pool_size(1)
            .build()
            .unwrap();
        let solver = Solver::new(3, configuration).unwrap();
        assert!(solver.solve().is_err());
    }

    #[test]
    fn test_solve_terminates_within_generation_limit() {
        let solver = Solver::new(3, small_configuration()).unwrap();
        let mut rng = RandomNumberGenerator::from_seed(42);
        let result = solver.solve_with_rng(&mut rng).unwrap();

        assert!(result.generation <= 200);
        assert_eq!(result.square.size(), 3);
    }

    #[test]
    fn test_trivial_square_solves_at_initialization() {
        // A 1x1 square is trivially magic, so the loop terminates before
        // any selection happens.
        let solver = Solver::new(1, small_configuration()).unwrap();
        let result = solver.solve().unwrap();

        assert_eq!(result.fitness, 0);
        assert_eq!(result.generation, 0);
    }

    #[test]
    fn test_cancelled_solve_returns_best_so_far() {
        let cancel = Arc::new(AtomicBool::new(true));
        let solver = Solver::new(4, small_configuration()).unwrap().with_cancel(cancel);

        let mut rng = RandomNumberGenerator::from_seed(42);
        let result = solver.solve_with_rng(&mut rng).unwrap();
        // The flag was set before the first generation ran.
        assert_eq!(result.generation, 0);
    }

    #[test]
    fn test_progress_snapshots_are_published() {
        let progress = SharedProgress::new();
        let configuration = SolverConfiguration::builder()
            .max_generations(10)
            .population_size(20)
            .parent_pool_size(10)
            .report_interval(1)
            .build()
            .unwrap();
        let solver = Solver::new(4, configuration)
            .unwrap()
            .with_progress(Arc::new(progress.clone()));

        let mut rng = RandomNumberGenerator::from_seed(42);
        solver.solve_with_rng(&mut rng).unwrap();

        let snapshot = progress.latest().unwrap();
        assert!(snapshot.generation <= 10);
        assert_eq!(snapshot.square.size(), 4);
    }
}
