//! Evolution loop configuration.
//!
//! [`EaConfig`] holds all parameters of the (μ, λ) generational loop.

use super::variation::VarOr;
use crate::error::{EvoError, Result};

/// Configuration for [`MuCommaLambda`](super::MuCommaLambda).
///
/// # Defaults
///
/// ```
/// use evokit::algorithms::EaConfig;
///
/// let config = EaConfig::default();
/// assert_eq!(config.generations, 100);
/// assert_eq!(config.survivors, 50);
/// assert_eq!(config.offsprings, 100);
/// ```
///
/// # Builder Pattern
///
/// ```
/// use evokit::algorithms::EaConfig;
///
/// let config = EaConfig::default()
///     .with_survivors(20)
///     .with_offsprings(140)
///     .with_cx_prob(0.6)
///     .with_mut_prob(0.3)
///     .with_seed(42);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EaConfig {
    /// Number of generations to run after the initial evaluation.
    pub generations: usize,

    /// μ: number of individuals selected from the offspring each generation.
    pub survivors: usize,

    /// λ: number of offspring produced each generation.
    ///
    /// Must be at least `survivors`.
    pub offsprings: usize,

    /// Probability that an offspring is produced by crossover (0.0–1.0).
    pub cx_prob: f64,

    /// Probability that an offspring is produced by mutation (0.0–1.0).
    ///
    /// `cx_prob + mut_prob` must not exceed 1.0; the remainder is the
    /// probability of verbatim reproduction.
    pub mut_prob: f64,

    /// Random seed for reproducibility.
    ///
    /// `None` uses a random seed.
    pub seed: Option<u64>,

    /// Log each logbook row at `info` level instead of `debug`.
    pub verbose: bool,
}

impl Default for EaConfig {
    fn default() -> Self {
        Self {
            generations: 100,
            survivors: 50,
            offsprings: 100,
            cx_prob: 0.6,
            mut_prob: 0.3,
            seed: None,
            verbose: false,
        }
    }
}

impl EaConfig {
    /// Sets the number of generations.
    pub fn with_generations(mut self, n: usize) -> Self {
        self.generations = n;
        self
    }

    /// Sets μ, the number of survivors.
    pub fn with_survivors(mut self, mu: usize) -> Self {
        self.survivors = mu;
        self
    }

    /// Sets λ, the number of offspring.
    pub fn with_offsprings(mut self, lambda: usize) -> Self {
        self.offsprings = lambda;
        self
    }

    /// Sets the crossover probability.
    pub fn with_cx_prob(mut self, p: f64) -> Self {
        self.cx_prob = p.clamp(0.0, 1.0);
        self
    }

    /// Sets the mutation probability.
    pub fn with_mut_prob(mut self, p: f64) -> Self {
        self.mut_prob = p.clamp(0.0, 1.0);
        self
    }

    /// Sets the random seed for reproducibility.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Enables or disables per-generation `info` logging.
    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    /// Validates the configuration.
    ///
    /// # Errors
    /// - [`EvoError::OffspringsBelowSurvivors`] if λ < μ
    /// - [`EvoError::InvalidProbability`] if a probability lies outside `[0, 1]`
    /// - [`EvoError::ProbabilitySum`] if `cx_prob + mut_prob > 1`
    pub fn validate(&self) -> Result<()> {
        if self.offsprings < self.survivors {
            return Err(EvoError::OffspringsBelowSurvivors {
                offsprings: self.offsprings,
                survivors: self.survivors,
            });
        }
        VarOr::new(self.cx_prob, self.mut_prob)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = EaConfig::default();
        assert_eq!(config.generations, 100);
        assert_eq!(config.survivors, 50);
        assert_eq!(config.offsprings, 100);
        assert!((config.cx_prob - 0.6).abs() < 1e-10);
        assert!((config.mut_prob - 0.3).abs() < 1e-10);
        assert!(config.seed.is_none());
        assert!(!config.verbose);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder_pattern() {
        let config = EaConfig::default()
            .with_generations(10)
            .with_survivors(4)
            .with_offsprings(8)
            .with_cx_prob(0.5)
            .with_mut_prob(0.2)
            .with_seed(7)
            .with_verbose(true);

        assert_eq!(config.generations, 10);
        assert_eq!(config.survivors, 4);
        assert_eq!(config.offsprings, 8);
        assert!((config.cx_prob - 0.5).abs() < 1e-10);
        assert!((config.mut_prob - 0.2).abs() < 1e-10);
        assert_eq!(config.seed, Some(7));
        assert!(config.verbose);
    }

    #[test]
    fn test_clamp_probabilities() {
        let config = EaConfig::default().with_cx_prob(-0.5).with_mut_prob(2.0);
        assert!((config.cx_prob - 0.0).abs() < 1e-10);
        assert!((config.mut_prob - 1.0).abs() < 1e-10);
    }

    #[test]
    fn test_validate_offsprings_below_survivors() {
        let config = EaConfig::default().with_survivors(10).with_offsprings(5);
        assert_eq!(
            config.validate().unwrap_err(),
            EvoError::OffspringsBelowSurvivors {
                offsprings: 5,
                survivors: 10
            }
        );
    }

    #[test]
    fn test_validate_equal_sizes_ok() {
        let config = EaConfig::default().with_survivors(10).with_offsprings(10);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_probability_sum() {
        let config = EaConfig::default().with_cx_prob(0.8).with_mut_prob(0.3);
        assert!(matches!(
            config.validate(),
            Err(EvoError::ProbabilitySum { .. })
        ));
    }

    #[test]
    fn test_validate_probability_range_on_raw_fields() {
        // fields set directly bypass the clamping builders
        let config = EaConfig {
            cx_prob: -0.5,
            mut_prob: 1.5,
            ..EaConfig::default()
        };
        assert_eq!(
            config.validate().unwrap_err(),
            EvoError::InvalidProbability {
                name: "cx_prob",
                value: -0.5
            }
        );
    }
}
