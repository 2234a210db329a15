//! Evolutionary algorithms assembled from [`base`](crate::base) building blocks.
//!
//! # Key Types
//!
//! - [`VarOr`]: "or" variation (crossover, mutation or reproduction per offspring)
//! - [`EaConfig`]: loop parameters (μ, λ, probabilities, seed)
//! - [`MuCommaLambda`]: the (μ, λ) generational loop
//! - [`EaResult`]: final population and logbook
//!
//! # References
//!
//! - Bäck, Fogel & Michalewicz (2000), *Evolutionary Computation 1: Basic
//!   Algorithms and Operators*

mod config;
mod mu_comma_lambda;
mod variation;

pub use config::EaConfig;
pub use mu_comma_lambda::{EaResult, MuCommaLambda};
pub use variation::{VarOr, Variation};
