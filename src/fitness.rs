//! # FitnessEvaluator
//!
//! Computes the deviation-from-magic score of a [`MagicSquare`]. The score
//! is the sum of squared differences between the magic sum
//! `N * (N^2 + 1) / 2` and the actual sum of every row, every column, the
//! main diagonal, and the anti-diagonal. A score of 0 means the square is a
//! true magic square; bigger fitness means a worse individual.
//!
//! An optional symmetry penalty can be enabled through a positive weight,
//! biasing the search towards point-symmetric squares.
//!
//! ## Example
//!
//! ```rust
//! use magicga::fitness::FitnessEvaluator;
//! use magicga::square::MagicSquare;
//!
//! let evaluator = FitnessEvaluator::new();
//! let magic = MagicSquare::from_chromosome(vec![2, 7, 6, 9, 5, 1, 4, 3, 8]).unwrap();
//! assert_eq!(evaluator.evaluate(&magic), 0);
//! ```

use crate::square::MagicSquare;

/// Non-negative deviation score of an individual. Lower is better; 0 marks
/// a perfect magic square.
pub type Fitness = u64;

/// Evaluates the fitness of candidate squares.
///
/// The evaluator is stateless apart from its configuration and may be
/// shared freely; evaluating the same square twice always yields the same
/// score.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone)]
pub struct FitnessEvaluator {
    /// Multiplier for the symmetry penalty. A weight of 0 disables the
    /// penalty entirely.
    symmetry_weight: f64,
}

impl FitnessEvaluator {
    /// Creates an evaluator that scores pure magic-sum deviation, without
    /// any symmetry penalty.
    pub fn new() -> Self {
        Self {
            symmetry_weight: 0.0,
        }
    }

    /// Creates an evaluator that adds a symmetry penalty scaled by `weight`.
    pub fn with_symmetry_weight(weight: f64) -> Self {
        Self {
            symmetry_weight: weight,
        }
    }

    /// Returns the magic sum every row, column, and diagonal of a perfect
    /// square of side length `size` must reach.
    pub fn magic_sum(size: usize) -> i64 {
        let n = size as i64;
        n * (n * n + 1) / 2
    }

    /// Computes the fitness of the given square.
    ///
    /// Sum of squared differences of the magic sum and each column, row,
    /// and diagonal, plus the weighted symmetry penalty when enabled.
    pub fn evaluate(&self, square: &MagicSquare) -> Fitness {
        let size = square.size();
        let magic = Self::magic_sum(size);

        let mut fitness: i64 = 0;
        for row in 0..size {
            fitness += squared_diff(magic, row_sum(square, row));
        }
        for column in 0..size {
            fitness += squared_diff(magic, column_sum(square, column));
        }
        fitness += squared_diff(magic, main_diagonal_sum(square));
        fitness += squared_diff(magic, anti_diagonal_sum(square));

        if self.symmetry_weight > 0.0 {
            fitness += (self.symmetry_weight * self.symmetry_penalty(square) as f64) as i64;
        }

        fitness as Fitness
    }

    /// Measures how far the square is from point symmetry.
    ///
    /// For every cell in the top-left quadrant, the squared difference
    /// between the cell and its point reflection is compared against the
    /// squared difference of the mirrored cell pair on the other quadrant
    /// axis; the squared gap between the two is accumulated.
    fn symmetry_penalty(&self, square: &MagicSquare) -> i64 {
        let size = square.size();
        let mut penalty: i64 = 0;

        for y in 0..size / 2 {
            for x in 0..size / 2 {
                let point = squared_diff(
                    square.cell(x, y) as i64,
                    square.cell(size - 1 - x, size - 1 - y) as i64,
                );
                let mirrored = squared_diff(
                    square.cell(size - 1 - x, y) as i64,
                    square.cell(x, size - 1 - y) as i64,
                );
                penalty += squared_diff(point, mirrored);
            }
        }

        penalty
    }
}

impl Default for FitnessEvaluator {
    fn default() -> Self {
        Self::new()
    }
}

fn squared_diff(x: i64, y: i64) -> i64 {
    (x - y) * (x - y)
}

fn row_sum(square: &MagicSquare, row: usize) -> i64 {
    (0..square.size()).map(|x| square.cell(x, row) as i64).sum()
}

fn column_sum(square: &MagicSquare, column: usize) -> i64 {
    (0..square.size())
        .map(|y| square.cell(column, y) as i64)
        .sum()
}

fn main_diagonal_sum(square: &MagicSquare) -> i64 {
    (0..square.size()).map(|i| square.cell(i, i) as i64).sum()
}

fn anti_diagonal_sum(square: &MagicSquare) -> i64 {
    let size = square.size();
    (0..size)
        .map(|i| square.cell(size - 1 - i, i) as i64)
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_magic_sum() {
        assert_eq!(FitnessEvaluator::magic_sum(3), 15);
        assert_eq!(FitnessEvaluator::magic_sum(4), 34);
        assert_eq!(FitnessEvaluator::magic_sum(5), 65);
    }

    #[test]
    fn test_perfect_square_has_zero_fitness() {
        let evaluator = FitnessEvaluator::new();
        let magic = MagicSquare::from_chromosome(vec![2, 7, 6, 9, 5, 1, 4, 3, 8]).unwrap();
        assert_eq!(evaluator.evaluate(&magic), 0);
    }

    #[test]
    fn test_ordered_square_fitness() {
        // The canonical 3x3 square 1..9: row deviations 81 + 0 + 81,
        // column deviations 9 + 0 + 9, both diagonals exact.
        let evaluator = FitnessEvaluator::new();
        let ordered = MagicSquare::ordered(3).unwrap();
        assert_eq!(evaluator.evaluate(&ordered), 180);
    }

    #[test]
    fn test_evaluation_is_idempotent() {
        let evaluator = FitnessEvaluator::new();
        let square = MagicSquare::ordered(4).unwrap();
        assert_eq!(evaluator.evaluate(&square), evaluator.evaluate(&square));
    }

    #[test]
    fn test_symmetry_weight_zero_matches_plain_evaluation() {
        let plain = FitnessEvaluator::new();
        let weighted = FitnessEvaluator::with_symmetry_weight(0.0);
        let square = MagicSquare::ordered(4).unwrap();
        assert_eq!(plain.evaluate(&square), weighted.evaluate(&square));
    }

    #[test]
    fn test_symmetry_penalty_is_additive() {
        let plain = FitnessEvaluator::new();
        let weighted = FitnessEvaluator::with_symmetry_weight(2.0);
        let square = MagicSquare::ordered(4).unwrap();
        assert!(weighted.evaluate(&square) >= plain.evaluate(&square));
    }
}
