pub mod constrained;
pub mod elite;
pub mod elite_roulette;
pub mod panmixia;
pub mod removal;
pub mod roulette;
pub mod strategy;
pub mod tournament;

pub use constrained::ConstrainedSelection;
pub use elite::EliteSelection;
pub use elite_roulette::EliteRouletteSelection;
pub use panmixia::PanmixiaSelection;
pub use removal::WorstFirstRemoval;
pub use roulette::RouletteWheelSelection;
pub use strategy::{ParentSelection, SurvivorSelection};
pub use tournament::TournamentRemoval;
