//! Composable building blocks for evolutionary computation.
//!
//! Genetic algorithms, genetic programming and evolution strategies are
//! assembled from the same parts:
//!
//! - **Fitness** ([`base::Fitness`]): weighted multi-objective values with
//!   lexicographic ordering and Pareto dominance. Objective directions are
//!   encoded as signed weights on a static fitness kind ([`weights!`]).
//! - **Individuals** ([`base::Individual`], [`base::Chromosome`]): any genome
//!   paired with a fitness that is invalidated whenever the genome changes.
//! - **Toolbox** ([`base::Toolbox`]): the user's evaluation, crossover,
//!   mutation and selection operators plus an order-preserving map.
//! - **Algorithms** ([`algorithms`]): "or" variation and the (μ, λ)
//!   generational loop with lazy re-evaluation.
//! - **Records** ([`records`]): per-generation statistics and the logbook.
//!
//! # Architecture
//!
//! The engine owns no domain knowledge. Genome encoding, objective
//! functions, selection schemes, archives and statistics are injected
//! through traits; the loop only enforces the generational invariants.
//!
//! # Features
//!
//! - `parallel`: evaluate batches on the rayon thread pool via
//!   [`base::Mapper::Parallel`]
//! - `serde`: serialization of configuration and logbooks

pub mod algorithms;
pub mod base;
mod error;
pub mod records;

pub use error::{EvoError, Result};
