//! (μ, λ) evolutionary loop.
//!
//! [`MuCommaLambda`] orchestrates the generational process:
//! evaluate → archive → vary → re-evaluate → select survivors → record.
//!
//! Survivors are drawn **only from the offspring**: parents are discarded
//! every generation, however good. The archive is the place to keep the
//! best-ever individuals.
//!
//! # References
//!
//! - Schwefel (1981), *Numerical Optimization of Computer Models*
//! - Beyer & Schwefel (2002), "Evolution strategies – A comprehensive introduction"

use super::config::EaConfig;
use super::variation::VarOr;
use crate::base::{Archive, Individual, Toolbox};
use crate::error::{EvoError, Result};
use crate::records::{Logbook, Statistics};
use log::{debug, log, log_enabled, Level};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Result of a (μ, λ) run.
#[derive(Debug, Clone)]
pub struct EaResult<I> {
    /// The final population (μ survivors of the last generation).
    pub population: Vec<I>,

    /// One entry per generation, starting with generation 0.
    pub logbook: Logbook,
}

/// Executes the (μ, λ) evolutionary loop.
///
/// # Usage
///
/// ```ignore
/// let ea = MuCommaLambda::new(EaConfig::default().with_seed(42))?;
/// let result = ea.run(&toolbox, population, &mut hall_of_fame, &stats)?;
/// println!("{}", result.logbook);
/// ```
#[derive(Debug, Clone)]
pub struct MuCommaLambda {
    config: EaConfig,
    variation: VarOr,
}

impl MuCommaLambda {
    /// Creates the loop, validating the configuration up front.
    ///
    /// # Errors
    /// Any [`EaConfig::validate`] error.
    pub fn new(config: EaConfig) -> Result<Self> {
        config.validate()?;
        let variation = VarOr::new(config.cx_prob, config.mut_prob)?;
        Ok(Self { config, variation })
    }

    /// The configuration this loop was built with.
    pub fn config(&self) -> &EaConfig {
        &self.config
    }

    /// Runs the loop with an RNG seeded from the configuration.
    pub fn run<T, A, S>(
        &self,
        toolbox: &T,
        population: Vec<T::Individual>,
        archive: &mut A,
        stats: &S,
    ) -> Result<EaResult<T::Individual>>
    where
        T: Toolbox,
        A: Archive<T::Individual>,
        S: Statistics<T::Individual>,
    {
        let seed = self.config.seed.unwrap_or_else(rand::random);
        let mut rng = StdRng::seed_from_u64(seed);
        debug!("(mu, lambda) run seeded with {seed}");
        self.run_with_rng(toolbox, population, archive, stats, &mut rng)
    }

    /// Runs the loop drawing all randomness from `rng`.
    ///
    /// # Errors
    /// - [`EvoError::EmptyPopulation`] if offspring must be produced from an
    ///   empty population
    /// - [`EvoError::MapMismatch`] if the toolbox's map returns misaligned
    ///   results
    /// - [`EvoError::LengthMismatch`] if an evaluation returns the wrong
    ///   number of objectives
    pub fn run_with_rng<T, A, S, R>(
        &self,
        toolbox: &T,
        mut population: Vec<T::Individual>,
        archive: &mut A,
        stats: &S,
        rng: &mut R,
    ) -> Result<EaResult<T::Individual>>
    where
        T: Toolbox,
        A: Archive<T::Individual>,
        S: Statistics<T::Individual>,
        R: Rng,
    {
        let config = &self.config;
        debug!(
            "(mu, lambda): mu={} lambda={} cx_prob={} mut_prob={} generations={}",
            config.survivors, config.offsprings, config.cx_prob, config.mut_prob, config.generations
        );

        let mut logbook = Logbook::with_fields(stats.fields());

        // 1. Evaluate the initial population
        let nevals = evaluate_invalid(toolbox, &mut population)?;
        archive.update(&population);
        logbook.record(0, nevals, stats.compile(&population));
        self.emit(&mut logbook);

        // 2. Generational loop
        for gen in 1..=config.generations {
            let mut offspring =
                self.variation
                    .vary(toolbox, &population, config.offsprings, rng)?;

            let nevals = evaluate_invalid(toolbox, &mut offspring)?;
            archive.update(&offspring);

            // Parents are dropped here, survivors come from offspring only
            population = toolbox.select(&offspring, config.survivors, rng);
            if population.len() != config.survivors {
                debug!(
                    "generation {gen}: select returned {} individuals, expected {}",
                    population.len(),
                    config.survivors
                );
            }

            logbook.record(gen, nevals, stats.compile(&population));
            self.emit(&mut logbook);
        }

        Ok(EaResult {
            population,
            logbook,
        })
    }

    fn emit(&self, logbook: &mut Logbook) {
        let level = if self.config.verbose {
            Level::Info
        } else {
            Level::Debug
        };
        if !log_enabled!(level) {
            return;
        }
        let line = logbook.stream();
        log!(level, "{line}");
    }
}

/// Evaluates individuals whose fitness is invalid, returning how many were.
fn evaluate_invalid<T: Toolbox>(toolbox: &T, population: &mut [T::Individual]) -> Result<usize> {
    let invalid: Vec<usize> = population
        .iter()
        .enumerate()
        .filter(|(_, ind)| !ind.fitness().is_valid())
        .map(|(i, _)| i)
        .collect();
    if invalid.is_empty() {
        return Ok(0);
    }

    let batch: Vec<&T::Individual> = invalid.iter().map(|&i| &population[i]).collect();
    let results = toolbox.map_evaluate(&batch);
    if results.len() != invalid.len() {
        return Err(EvoError::MapMismatch {
            expected: invalid.len(),
            actual: results.len(),
        });
    }

    for (&i, values) in invalid.iter().zip(&results) {
        population[i].fitness_mut().set_values(values)?;
    }
    Ok(invalid.len())
}

// ============================================================================
// Tests
// ============================================================================
