//! Tournament-based survivor selection.

use crate::error::{GeneticError, Result};
use crate::fitness::Fitness;
use crate::population::Population;
use crate::rng::RandomNumberGenerator;
use crate::selection::strategy::SurvivorSelection;
use crate::square::MagicSquare;

/// A survivor selection strategy that ranks every individual by tournament
/// wins and drops the weakest tail.
///
/// Every entry plays `tournament_size` head-to-head comparisons against
/// randomly drawn opponents (never against itself), counting a win
/// whenever the opponent has strictly worse, i.e. numerically higher,
/// fitness. All entries are then ranked by win count ascending and the
/// lowest-win tail is selected for removal.
///
/// Larger tournament sizes make the ranking track raw fitness more
/// closely; smaller ones leave more room for lucky survivors.
///
/// # Examples
///
/// ```
/// use magicga::population::Population;
/// use magicga::rng::RandomNumberGenerator;
/// use magicga::selection::{SurvivorSelection, TournamentRemoval};
/// use magicga::square::MagicSquare;
///
/// let mut rng = RandomNumberGenerator::from_seed(42);
/// let mut population = Population::new();
/// for fitness in [10, 20, 30, 40] {
///     population.insert(fitness, MagicSquare::random(3, &mut rng).unwrap());
/// }
///
/// let removal = TournamentRemoval::new(8).unwrap();
/// let victims = removal.select_for_removal(2, &population, &mut rng).unwrap();
/// assert_eq!(victims.len(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct TournamentRemoval {
    tournament_size: usize,
}

impl TournamentRemoval {
    /// Creates a new `TournamentRemoval` with the given tournament size.
    ///
    /// # Errors
    ///
    /// Returns an error if `tournament_size` is 0.
    pub fn new(tournament_size: usize) -> Result<Self> {
        if tournament_size == 0 {
            return Err(GeneticError::Configuration(
                "Tournament size must be at least 1".to_string(),
            ));
        }
        Ok(Self { tournament_size })
    }
}

impl Default for TournamentRemoval {
    fn default() -> Self {
        // Safe to unwrap because the default size is valid.
        Self::new(10).unwrap()
    }
}

impl SurvivorSelection for TournamentRemoval {
    fn select_for_removal(
        &self,
        n: usize,
        population: &Population,
        rng: &mut RandomNumberGenerator,
    ) -> Result<Vec<(Fitness, MagicSquare)>> {
        if n > population.len() {
            return Err(GeneticError::Selection(format!(
                "Can't remove {} individuals from a population of {}",
                n,
                population.len()
            )));
        }
        if population.len() < 2 {
            return Err(GeneticError::Selection(
                "Population should contain more than one individual".to_string(),
            ));
        }

        let entries: Vec<(Fitness, &MagicSquare)> = population.iter().collect();

        let mut ranked: Vec<(usize, usize)> = entries
            .iter()
            .enumerate()
            .map(|(idx, &(fitness, _))| {
                let mut wins = 0;
                for _ in 0..self.tournament_size {
                    let mut opponent = rng.gen_index(entries.len());
                    while opponent == idx {
                        opponent = rng.gen_index(entries.len());
                    }
                    if entries[opponent].0 > fitness {
                        wins += 1;
                    }
                }
                (idx, wins)
            })
            .collect();

        // Stable sort keeps insertion order among equal win counts.
        ranked.sort_by_key(|&(_, wins)| wins);

        Ok(ranked
            .into_iter()
            .take(n)
            .map(|(idx, _)| (entries[idx].0, entries[idx].1.clone()))
            .collect())
    }
}
