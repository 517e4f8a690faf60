pub mod crossover;
pub mod mutation;

pub use crossover::{CrossoverOperator, OrderCrossover, PositionCrossover};
pub use mutation::{
    ColumnSwapMutation, CompositeSwapMutation, GeneSwapMutation, MutationOperator,
    RowSwapMutation,
};
