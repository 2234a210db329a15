//! Offspring variation.
//!
//! [`VarOr`] creates each offspring by exactly one of crossover, mutation or
//! reproduction ("or" variation). The operator chosen for a slot is drawn
//! independently per offspring:
//!
//! ```text
//! 0 ───── cx_prob ───── cx_prob + mut_prob ───── 1
//!   crossover       mutation             reproduction
//! ```
//!
//! # References
//!
//! - Beyer & Schwefel (2002), "Evolution strategies – A comprehensive introduction"
//! - Fortin et al. (2012), "DEAP: Evolutionary Algorithms Made Easy", JMLR 13

use crate::base::{Individual, Toolbox};
use crate::error::{EvoError, Result};
use log::trace;
use rand::Rng;

/// The operator that produced an offspring.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Variation {
    /// Two parents mated; the first child is kept.
    Crossover,
    /// One parent mutated.
    Mutation,
    /// One parent cloned verbatim.
    Reproduction,
}

/// "Or" variation: crossover, mutation or reproduction per offspring.
///
/// ```
/// use evokit::algorithms::{VarOr, Variation};
///
/// let var = VarOr::new(0.5, 0.3).unwrap();
/// assert_eq!(var.choose(0.2), Variation::Crossover);
/// assert_eq!(var.choose(0.6), Variation::Mutation);
/// assert_eq!(var.choose(0.9), Variation::Reproduction);
///
/// assert!(VarOr::new(0.7, 0.4).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VarOr {
    cx_prob: f64,
    mut_prob: f64,
}

impl VarOr {
    /// Creates the operator.
    ///
    /// # Errors
    /// - [`EvoError::InvalidProbability`] if either probability (or NaN)
    ///   lies outside `[0, 1]`
    /// - [`EvoError::ProbabilitySum`] if `cx_prob + mut_prob` exceeds 1.0
    pub fn new(cx_prob: f64, mut_prob: f64) -> Result<Self> {
        check_probability("cx_prob", cx_prob)?;
        check_probability("mut_prob", mut_prob)?;
        if cx_prob + mut_prob > 1.0 {
            return Err(EvoError::ProbabilitySum { cx_prob, mut_prob });
        }
        Ok(Self { cx_prob, mut_prob })
    }

    /// Probability of producing an offspring by crossover.
    pub fn cx_prob(&self) -> f64 {
        self.cx_prob
    }

    /// Probability of producing an offspring by mutation.
    pub fn mut_prob(&self) -> f64 {
        self.mut_prob
    }

    /// Maps a uniform draw in `[0, 1)` to the operator it selects.
    pub fn choose(&self, draw: f64) -> Variation {
        if draw < self.cx_prob {
            Variation::Crossover
        } else if draw < self.cx_prob + self.mut_prob {
            Variation::Mutation
        } else {
            Variation::Reproduction
        }
    }

    /// Produces exactly `offsprings` children from `population`.
    ///
    /// Parents are drawn uniformly and cloned before any operator sees them.
    /// Crossover and mutation children have their fitness invalidated;
    /// reproduced children keep the parent's fitness.
    ///
    /// # Errors
    /// [`EvoError::EmptyPopulation`] if offspring are requested from an
    /// empty population.
    pub fn vary<T, R>(
        &self,
        toolbox: &T,
        population: &[T::Individual],
        offsprings: usize,
        rng: &mut R,
    ) -> Result<Vec<T::Individual>>
    where
        T: Toolbox,
        R: Rng,
    {
        if offsprings == 0 {
            return Ok(Vec::new());
        }
        if population.is_empty() {
            return Err(EvoError::EmptyPopulation);
        }

        let n = population.len();
        let mut offspring = Vec::with_capacity(offsprings);

        for slot in 0..offsprings {
            let variation = self.choose(rng.random::<f64>());
            trace!("offspring {slot}: {variation:?}");

            let child = match variation {
                Variation::Crossover => {
                    let (i, j) = distinct_pair(n, rng);
                    let (mut child, _) =
                        toolbox.mate(population[i].clone(), population[j].clone(), rng);
                    child.fitness_mut().invalidate();
                    child
                }
                Variation::Mutation => {
                    let parent = population[rng.random_range(0..n)].clone();
                    let mut child = toolbox.mutate(parent, rng);
                    child.fitness_mut().invalidate();
                    child
                }
                Variation::Reproduction => population[rng.random_range(0..n)].clone(),
            };
            offspring.push(child);
        }

        Ok(offspring)
    }
}

fn check_probability(name: &'static str, value: f64) -> Result<()> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(EvoError::InvalidProbability { name, value })
    }
}

/// Draws two distinct indices in `0..n`; `(0, 0)` when `n == 1`.
fn distinct_pair<R: Rng>(n: usize, rng: &mut R) -> (usize, usize) {
    if n < 2 {
        return (0, 0);
    }
    let i = rng.random_range(0..n);
    let mut j = rng.random_range(0..n - 1);
    if j >= i {
        j += 1;
    }
    (i, j)
}
