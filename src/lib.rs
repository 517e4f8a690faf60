pub mod config;
pub mod error;
pub mod fitness;
pub mod operators;
pub mod population;
pub mod progress;
pub mod replacement;
pub mod rng;
pub mod selection;
pub mod solver;
pub mod square;

// Re-export commonly used types for convenience
pub use config::SolverConfiguration;
pub use error::{GeneticError, Result};
pub use fitness::FitnessEvaluator;
pub use population::Population;
pub use solver::{Solver, SolverResult};
pub use square::MagicSquare;
