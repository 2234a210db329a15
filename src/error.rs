//! Error types shared by the fitness model, variation and the evolution loop.

use thiserror::Error;

/// Errors raised by evokit.
///
/// Configuration errors are reported before any population state is touched.
/// Contract violations are reported at the call that would have broken an
/// invariant.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EvoError {
    /// A fitness kind was instantiated without objective weights.
    #[error("cannot instantiate a fitness whose weights are empty")]
    EmptyWeights,

    /// A fitness kind carries a zero weight.
    #[error("fitness weight at index {index} is zero")]
    ZeroWeight { index: usize },

    /// Assigned values do not match the number of objectives.
    #[error("expected {expected} fitness values (one per weight), got {actual}")]
    LengthMismatch { expected: usize, actual: usize },

    /// A crossover or mutation probability lies outside `[0, 1]`.
    #[error("{name} must lie in [0, 1] (got {value})")]
    InvalidProbability { name: &'static str, value: f64 },

    /// Crossover and mutation probabilities leave no valid reproduction mass.
    #[error("cx_prob + mut_prob must not exceed 1.0 (got {cx_prob} + {mut_prob})")]
    ProbabilitySum { cx_prob: f64, mut_prob: f64 },

    /// The (mu, lambda) scheme cannot select more survivors than offspring.
    #[error("offsprings ({offsprings}) must be greater than or equal to survivors ({survivors})")]
    OffspringsBelowSurvivors { offsprings: usize, survivors: usize },

    /// Offspring were requested from an empty population.
    #[error("cannot produce offspring from an empty population")]
    EmptyPopulation,

    /// The evaluation map returned a different number of results than inputs.
    #[error("map returned {actual} results for {expected} individuals")]
    MapMismatch { expected: usize, actual: usize },
}

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, EvoError>;
