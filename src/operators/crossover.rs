//! Crossover operators.
//!
//! Both operators recombine two parent permutations into a child that is
//! again a valid permutation: genes taken from the father are fixed first,
//! then the gaps are filled with the mother's genes in the order they
//! appear in her chromosome, skipping genes already used.

use std::fmt::Debug;

use crate::error::{GeneticError, Result};
use crate::rng::RandomNumberGenerator;
use crate::square::MagicSquare;

/// Trait for crossover operators producing a child from two parents.
pub trait CrossoverOperator: Debug + Send + Sync {
    /// Recombines `father` and `mother` into a new child square.
    ///
    /// # Errors
    ///
    /// Returns an error if the parents have mismatched sizes.
    fn crossover(
        &self,
        father: &MagicSquare,
        mother: &MagicSquare,
        rng: &mut RandomNumberGenerator,
    ) -> Result<MagicSquare>;
}

fn check_parents(father: &MagicSquare, mother: &MagicSquare) -> Result<()> {
    if father.size() != mother.size() {
        return Err(GeneticError::Crossover(format!(
            "Parents have unaligned sizes: {} vs {}",
            father.size(),
            mother.size()
        )));
    }
    Ok(())
}

/// Order crossover (OX).
///
/// Chooses a random cut point, takes the father's genes up to that point
/// verbatim, then appends the mother's remaining genes preserving the
/// order they appear in her chromosome.
///
/// # Examples
///
/// ```
/// use magicga::operators::{CrossoverOperator, OrderCrossover};
/// use magicga::rng::RandomNumberGenerator;
/// use magicga::square::MagicSquare;
///
/// let mut rng = RandomNumberGenerator::from_seed(42);
/// let father = MagicSquare::random(4, &mut rng).unwrap();
/// let mother = MagicSquare::random(4, &mut rng).unwrap();
///
/// let child = OrderCrossover::new().crossover(&father, &mother, &mut rng).unwrap();
/// assert_eq!(child.size(), 4);
/// ```
#[derive(Debug, Clone, Default)]
pub struct OrderCrossover;

impl OrderCrossover {
    /// Creates a new order crossover operator.
    pub fn new() -> Self {
        Self
    }
}

impl CrossoverOperator for OrderCrossover {
    fn crossover(
        &self,
        father: &MagicSquare,
        mother: &MagicSquare,
        rng: &mut RandomNumberGenerator,
    ) -> Result<MagicSquare> {
        check_parents(father, mother)?;

        let length = father.chromosome().len();
        let cross_point = rng.gen_range(1, length);

        let mut child = Vec::with_capacity(length);
        let mut used = vec![false; length];

        for &gene in &father.chromosome()[..cross_point] {
            child.push(gene);
            used[(gene - 1) as usize] = true;
        }

        for &gene in mother.chromosome() {
            if child.len() >= length {
                break;
            }
            if !used[(gene - 1) as usize] {
                child.push(gene);
                used[(gene - 1) as usize] = true;
            }
        }

        MagicSquare::from_chromosome(child)
    }
}

/// Position-based crossover (PBX).
///
/// Chooses a random non-empty subset of positions, fixes the father's
/// genes at those positions, and fills the remaining positions in
/// left-to-right order with the mother's genes that have not been used.
#[derive(Debug, Clone, Default)]
pub struct PositionCrossover;

impl PositionCrossover {
    /// Creates a new position-based crossover operator.
    pub fn new() -> Self {
        Self
    }
}

impl CrossoverOperator for PositionCrossover {
    fn crossover(
        &self,
        father: &MagicSquare,
        mother: &MagicSquare,
        rng: &mut RandomNumberGenerator,
    ) -> Result<MagicSquare> {
        check_parents(father, mother)?;

        let length = father.chromosome().len();

        let mut fixed = vec![false; length];
        for slot in fixed.iter_mut() {
            *slot = rng.gen_probability() < 0.5;
        }
        // The subset must be non-empty, otherwise the child is a clone of
        // the mother.
        if fixed.iter().all(|&f| !f) {
            fixed[rng.gen_index(length)] = true;
        }

        let mut child: Vec<u32> = vec![0; length];
        let mut used = vec![false; length];
        for (position, &is_fixed) in fixed.iter().enumerate() {
            if is_fixed {
                let gene = father.chromosome()[position];
                child[position] = gene;
                used[(gene - 1) as usize] = true;
            }
        }

        let mut donor = mother
            .chromosome()
            .iter()
            .filter(|&&gene| !used[(gene - 1) as usize]);
        for (position, &is_fixed) in fixed.iter().enumerate() {
            if !is_fixed {
                // The donor iterator holds exactly as many genes as there
                // are free positions.
                let gene = donor.next().ok_or_else(|| {
                    GeneticError::Crossover(
                        "Mother's chromosome exhausted before all positions were filled"
                            .to_string(),
                    )
                })?;
                child[position] = *gene;
            }
        }

        MagicSquare::from_chromosome(child)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_valid_permutation(square: &MagicSquare) {
        let mut genes = square.chromosome().to_vec();
        genes.sort_unstable();
        let expected: Vec<u32> = (1..=genes.len() as u32).collect();
        assert_eq!(genes, expected);
    }

    #[test]
    fn test_order_crossover_produces_valid_permutation() {
        let mut rng = RandomNumberGenerator::from_seed(42);
        for _ in 0..50 {
            let father = MagicSquare::random(4, &mut rng).unwrap();
            let mother = MagicSquare::random(4, &mut rng).unwrap();
            let child = OrderCrossover::new()
                .crossover(&father, &mother, &mut rng)
                .unwrap();
            assert_eq!(child.size(), 4);
            assert_valid_permutation(&child);
        }
    }

    #[test]
    fn test_order_crossover_keeps_father_prefix() {
        let mut rng = RandomNumberGenerator::from_seed(42);
        let father = MagicSquare::random(3, &mut rng).unwrap();
        let mother = MagicSquare::random(3, &mut rng).unwrap();

        let child = OrderCrossover::new()
            .crossover(&father, &mother, &mut rng)
            .unwrap();

        // At least the first gene always comes from the father.
        assert_eq!(child.chromosome()[0], father.chromosome()[0]);
    }

    #[test]
    fn test_position_crossover_produces_valid_permutation() {
        let mut rng = RandomNumberGenerator::from_seed(42);
        for _ in 0..50 {
            let father = MagicSquare::random(5, &mut rng).unwrap();
            let mother = MagicSquare::random(5, &mut rng).unwrap();
            let child = PositionCrossover::new()
                .crossover(&father, &mother, &mut rng)
                .unwrap();
            assert_eq!(child.size(), 5);
            assert_valid_permutation(&child);
        }
    }

    #[test]
    fn test_mismatched_parent_sizes() {
        let mut rng = RandomNumberGenerator::from_seed(42);
        let father = MagicSquare::random(3, &mut rng).unwrap();
        let mother = MagicSquare::random(4, &mut rng).unwrap();

        let order = OrderCrossover::new().crossover(&father, &mother, &mut rng);
        assert!(matches!(order, Err(GeneticError::Crossover(_))));

        let position = PositionCrossover::new().crossover(&father, &mother, &mut rng);
        assert!(matches!(position, Err(GeneticError::Crossover(_))));
    }

    #[test]
    fn test_identical_parents_reproduce_themselves() {
        let mut rng = RandomNumberGenerator::from_seed(42);
        let parent = MagicSquare::random(4, &mut rng).unwrap();

        let child = OrderCrossover::new()
            .crossover(&parent, &parent, &mut rng)
            .unwrap();
        assert_eq!(child, parent);

        let child = PositionCrossover::new()
            .crossover(&parent, &parent, &mut rng)
            .unwrap();
        assert_eq!(child, parent);
    }
}
