//! # Error Types
//!
//! This module defines custom error types for the magic-square genetic
//! algorithm engine. It provides specific error variants for the failure
//! scenarios that may occur during a solve.
//!
//! ## Examples
//!
//! Using the `Result` type:
//!
//! ```rust
//! use magicga::error::{GeneticError, Result};
//!
//! fn some_function() -> Result<()> {
//!     // Function implementation
//!     Ok(())
//! }
//!
//! fn caller() {
//!     match some_function() {
//!         Ok(_) => println!("Success!"),
//!         Err(e) => println!("Error: {}", e),
//!     }
//! }
//! ```

use thiserror::Error;

/// Represents errors that can occur in the magic-square genetic algorithm engine.
///
/// This enum provides specific error variants for different failure scenarios
/// that may occur during the evolution process. Construction-time validation
/// failures and precondition violations are fatal: they abort the current
/// solve and are reported to the caller.
#[derive(Error, Debug)]
pub enum GeneticError {
    /// Error that occurs when an invalid configuration is provided.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Error that occurs when a chromosome does not encode a valid square
    /// permutation.
    #[error("Invalid chromosome: {0}")]
    InvalidChromosome(String),

    /// Error that occurs when an operation requires more individuals than
    /// the population contains.
    #[error("Empty population error: Cannot operate on an empty population")]
    EmptyPopulation,

    /// Error that occurs when a population bookkeeping operation fails,
    /// e.g. removing an individual that is not present.
    #[error("Population error: {0}")]
    Population(String),

    /// Error that occurs when parent or survivor selection fails.
    #[error("Selection error: {0}")]
    Selection(String),

    /// Error that occurs when a crossover operation fails.
    #[error("Crossover error: {0}")]
    Crossover(String),

    /// Error that occurs when a mutation operation fails.
    #[error("Mutation error: {0}")]
    Mutation(String),

    /// Error that occurs when the evolution process itself fails.
    #[error("Evolution error: {0}")]
    Evolution(String),
}

/// A specialized Result type for genetic algorithm operations.
///
/// This type is a convenience wrapper around `std::result::Result` with the
/// error type fixed to `GeneticError`.
///
/// ## Examples
///
/// ```rust
/// use magicga::error::{GeneticError, Result};
///
/// fn may_fail() -> Result<i32> {
///     // Some operation that might fail
///     Ok(42)
/// }
/// ```
pub type Result<T> = std::result::Result<T, GeneticError>;
