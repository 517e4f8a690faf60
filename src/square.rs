//! # MagicSquare
//!
//! The `MagicSquare` struct is the permutation-encoded individual of the
//! engine: an `N x N` candidate square holding each of the integers
//! `1..=N*N` exactly once, stored in row-major cell order.
//!
//! A `MagicSquare` is immutable after construction. The genetic operators
//! never modify a square in place; they always build a new chromosome and
//! construct a fresh individual from it.
//!
//! ## Example
//!
//! ```rust
//! use magicga::square::MagicSquare;
//!
//! let square = MagicSquare::from_chromosome(vec![2, 7, 6, 9, 5, 1, 4, 3, 8]).unwrap();
//! assert_eq!(square.size(), 3);
//! assert_eq!(square.cell(0, 0), 2);
//! assert_eq!(square.cell(2, 1), 1);
//! ```

use std::fmt;

use crate::error::{GeneticError, Result};
use crate::rng::RandomNumberGenerator;

/// A permutation-based chromosome representing one candidate square.
///
/// Invariants, enforced at construction:
/// - the chromosome length is a perfect square `N * N` with `N > 0`,
/// - the chromosome is a permutation of `1..=N*N`.
///
/// Two squares are equal iff they have the same size and elementwise-equal
/// chromosomes.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawSquare"))]
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MagicSquare {
    size: usize,
    chromosome: Vec<u32>,
}

/// Unvalidated wire shape of a square; deserialization goes through
/// [`MagicSquare::from_chromosome`] so the permutation invariants hold for
/// every constructed square, decoded ones included.
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawSquare {
    size: usize,
    chromosome: Vec<u32>,
}

#[cfg(feature = "serde")]
impl TryFrom<RawSquare> for MagicSquare {
    type Error = GeneticError;

    fn try_from(raw: RawSquare) -> Result<Self> {
        let square = Self::from_chromosome(raw.chromosome)?;
        if square.size != raw.size {
            return Err(GeneticError::InvalidChromosome(format!(
                "Declared size {} does not match a chromosome of length {}",
                raw.size,
                square.chromosome.len()
            )));
        }
        Ok(square)
    }
}

impl MagicSquare {
    /// Creates the canonical ordered square of the given side length:
    /// `1..=N*N` in row-major order.
    ///
    /// # Errors
    ///
    /// Returns an error if `size` is zero.
    pub fn ordered(size: usize) -> Result<Self> {
        if size == 0 {
            return Err(GeneticError::InvalidChromosome(
                "Size of square should be positive".to_string(),
            ));
        }

        let chromosome = (1..=(size * size) as u32).collect();
        Ok(Self { size, chromosome })
    }

    /// Creates a square from an explicit chromosome.
    ///
    /// # Errors
    ///
    /// Returns an error if the chromosome is empty, its length is not a
    /// perfect square, or it is not a permutation of `1..=N*N`.
    pub fn from_chromosome(chromosome: Vec<u32>) -> Result<Self> {
        if chromosome.is_empty() {
            return Err(GeneticError::InvalidChromosome(
                "Chromosome must not be empty".to_string(),
            ));
        }

        let size = (chromosome.len() as f64).sqrt() as usize;
        if size * size != chromosome.len() {
            return Err(GeneticError::InvalidChromosome(format!(
                "Chromosome of length {} does not encode a square",
                chromosome.len()
            )));
        }

        let mut seen = vec![false; chromosome.len()];
        for &gene in &chromosome {
            if gene < 1 || gene as usize > chromosome.len() {
                return Err(GeneticError::InvalidChromosome(format!(
                    "Gene {} is outside the range 1..={}",
                    gene,
                    chromosome.len()
                )));
            }
            if seen[(gene - 1) as usize] {
                return Err(GeneticError::InvalidChromosome(format!(
                    "Gene {} appears more than once",
                    gene
                )));
            }
            seen[(gene - 1) as usize] = true;
        }

        Ok(Self { size, chromosome })
    }

    /// Creates a uniformly random square of the given side length by
    /// shuffling the canonical chromosome.
    ///
    /// # Errors
    ///
    /// Returns an error if `size` is zero.
    pub fn random(size: usize, rng: &mut RandomNumberGenerator) -> Result<Self> {
        let mut square = Self::ordered(size)?;
        rng.shuffle(&mut square.chromosome);
        Ok(square)
    }

    /// Returns the side length `N` of the square.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns the chromosome in row-major cell order.
    pub fn chromosome(&self) -> &[u32] {
        &self.chromosome
    }

    /// Returns the value of the cell at column `x`, row `y`.
    ///
    /// # Panics
    ///
    /// Panics if `x` or `y` is out of `0..size`.
    pub fn cell(&self, x: usize, y: usize) -> u32 {
        assert!(x < self.size, "cell x index {} out of range", x);
        assert!(y < self.size, "cell y index {} out of range", y);
        self.chromosome[y * self.size + x]
    }
}

impl fmt::Display for MagicSquare {
    /// Renders the square as `N` lines of space-separated cell values in
    /// row-major order.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in 0..self.size {
            for x in 0..self.size {
                if x > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{}", self.cell(x, y))?;
            }
            if y + 1 < self.size {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}
