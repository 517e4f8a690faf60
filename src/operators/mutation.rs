//! Mutation operators.
//!
//! All mutations are swap-based and therefore permutation-preserving: a
//! mutated square holds exactly the same multiset of values as its source.

use std::fmt::Debug;

use crate::error::{GeneticError, Result};
use crate::rng::RandomNumberGenerator;
use crate::square::MagicSquare;

/// Trait for mutation operators producing a changed copy of a square.
pub trait MutationOperator: Debug + Send + Sync {
    /// Returns a mutated copy of `square`. The input is never modified.
    ///
    /// # Errors
    ///
    /// Returns an error if the square is too small for the swap to pick
    /// two distinct targets.
    fn mutate(&self, square: &MagicSquare, rng: &mut RandomNumberGenerator)
        -> Result<MagicSquare>;
}

fn check_swappable(count: usize, what: &str) -> Result<()> {
    if count < 2 {
        return Err(GeneticError::Mutation(format!(
            "Square needs at least two {} to swap",
            what
        )));
    }
    Ok(())
}

/// Swaps the values at two distinct chromosome indices.
#[derive(Debug, Clone, Default)]
pub struct GeneSwapMutation;

impl GeneSwapMutation {
    /// Creates a new gene-swap mutation operator.
    pub fn new() -> Self {
        Self
    }
}

impl MutationOperator for GeneSwapMutation {
    fn mutate(
        &self,
        square: &MagicSquare,
        rng: &mut RandomNumberGenerator,
    ) -> Result<MagicSquare> {
        let mut chromosome = square.chromosome().to_vec();
        check_swappable(chromosome.len(), "genes")?;

        let (i, j) = rng.distinct_pair(chromosome.len());
        chromosome.swap(i, j);

        MagicSquare::from_chromosome(chromosome)
    }
}

/// Swaps all values between two distinct rows.
#[derive(Debug, Clone, Default)]
pub struct RowSwapMutation;

impl RowSwapMutation {
    /// Creates a new row-swap mutation operator.
    pub fn new() -> Self {
        Self
    }
}

impl MutationOperator for RowSwapMutation {
    fn mutate(
        &self,
        square: &MagicSquare,
        rng: &mut RandomNumberGenerator,
    ) -> Result<MagicSquare> {
        let size = square.size();
        check_swappable(size, "rows")?;

        let (first, second) = rng.distinct_pair(size);
        let mut chromosome = square.chromosome().to_vec();
        for x in 0..size {
            chromosome.swap(first * size + x, second * size + x);
        }

        MagicSquare::from_chromosome(chromosome)
    }
}

/// Swaps all values between two distinct columns.
#[derive(Debug, Clone, Default)]
pub struct ColumnSwapMutation;

impl ColumnSwapMutation {
    /// Creates a new column-swap mutation operator.
    pub fn new() -> Self {
        Self
    }
}

impl MutationOperator for ColumnSwapMutation {
    fn mutate(
        &self,
        square: &MagicSquare,
        rng: &mut RandomNumberGenerator,
    ) -> Result<MagicSquare> {
        let size = square.size();
        check_swappable(size, "columns")?;

        let (first, second) = rng.distinct_pair(size);
        let mut chromosome = square.chromosome().to_vec();
        for y in 0..size {
            chromosome.swap(y * size + first, y * size + second);
        }

        MagicSquare::from_chromosome(chromosome)
    }
}

/// Applies exactly one of the three swap mutations per call, chosen by
/// fixed thresholds: below 0.3 a column swap, below 0.6 a row swap,
/// otherwise a gene swap.
///
/// # Examples
///
/// ```
/// use magicga::operators::{CompositeSwapMutation, MutationOperator};
/// use magicga::rng::RandomNumberGenerator;
/// use magicga::square::MagicSquare;
///
/// let mut rng = RandomNumberGenerator::from_seed(42);
/// let square = MagicSquare::random(4, &mut rng).unwrap();
///
/// let mutated = CompositeSwapMutation::new().mutate(&square, &mut rng).unwrap();
/// assert_eq!(mutated.size(), 4);
/// ```
#[derive(Debug, Clone, Default)]
pub struct CompositeSwapMutation {
    column_swap: ColumnSwapMutation,
    row_swap: RowSwapMutation,
    gene_swap: GeneSwapMutation,
}

impl CompositeSwapMutation {
    /// Creates a new composite swap mutation operator.
    pub fn new() -> Self {
        Self::default()
    }
}

impl MutationOperator for CompositeSwapMutation {
    fn mutate(
        &self,
        square: &MagicSquare,
        rng: &mut RandomNumberGenerator,
    ) -> Result<MagicSquare> {
        let roll = rng.gen_probability();
        if roll < 0.3 {
            self.column_swap.mutate(square, rng)
        } else if roll < 0.6 {
            self.row_swap.mutate(square, rng)
        } else {
            self.gene_swap.mutate(square, rng)
        }
    }
}
