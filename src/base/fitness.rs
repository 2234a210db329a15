//! Weighted multi-objective fitness.
//!
//! A [`Fitness`] stores the *weighted* objective values of a solution,
//! `raw[i] * weights[i]`. A positive weight maximizes its objective and a
//! negative weight minimizes it, so one comparison routine covers any mix of
//! objective directions: larger weighted values are always better.
//!
//! The weights belong to a fitness *kind*, a zero-sized type implementing
//! [`Weights`], and are shared by every fitness of that kind. The
//! [`weights!`](crate::weights) macro declares a kind in one line.
//!
//! # Ordering vs. dominance
//!
//! `PartialOrd`/`PartialEq` compare the weighted values lexicographically.
//! This is what single-objective selection wants. Pareto-based code must use
//! [`Fitness::dominates`] instead; the two answer different questions.
//!
//! # References
//!
//! - Deb (2001), *Multi-Objective Optimization using Evolutionary Algorithms*
//! - Fortin et al. (2012), "DEAP: Evolutionary Algorithms Made Easy", JMLR 13

use crate::error::{EvoError, Result};
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;
use std::ops::Range;

/// A fitness kind: the objective weights shared by every [`Fitness`] of
/// this type.
///
/// Weights must be non-empty and non-zero; violations are reported when a
/// fitness of the kind is first instantiated.
///
/// ```
/// use evokit::base::Weights;
///
/// struct CostAndSpeed;
///
/// impl Weights for CostAndSpeed {
///     // minimize cost, maximize speed
///     const WEIGHTS: &'static [f64] = &[-1.0, 1.0];
/// }
/// ```
pub trait Weights: Send + Sync + 'static {
    /// One signed weight per objective.
    const WEIGHTS: &'static [f64];
}

/// Declares a zero-sized fitness kind implementing [`Weights`].
///
/// ```
/// evokit::weights!(pub Bicriteria = [-1.0, 1.0]);
///
/// let f = evokit::base::Fitness::<Bicriteria>::with_values(&[3.0, 4.0]).unwrap();
/// assert_eq!(f.wvalues(), &[-3.0, 4.0]);
/// ```
#[macro_export]
macro_rules! weights {
    ($(#[$meta:meta])* $vis:vis $name:ident = [$($w:expr),* $(,)?]) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
        $vis struct $name;

        impl $crate::base::Weights for $name {
            const WEIGHTS: &'static [f64] = &[$($w),*];
        }
    };
}

/// Quality measure of a solution, comparable under weighted objectives.
///
/// A fitness is *invalid* until values are assigned, and becomes invalid
/// again after [`invalidate`](Fitness::invalidate). Invalid fitnesses mark
/// individuals that need (re-)evaluation.
pub struct Fitness<W: Weights> {
    wvalues: Vec<f64>,
    kind: PhantomData<fn() -> W>,
}

impl<W: Weights> Fitness<W> {
    /// Creates an unassigned (invalid) fitness.
    ///
    /// # Errors
    /// [`EvoError::EmptyWeights`] or [`EvoError::ZeroWeight`] when the kind
    /// `W` is misconfigured.
    pub fn new() -> Result<Self> {
        check_weights(W::WEIGHTS)?;
        Ok(Self {
            wvalues: Vec::new(),
            kind: PhantomData,
        })
    }

    /// Creates a fitness holding the given raw values.
    pub fn with_values(values: &[f64]) -> Result<Self> {
        let mut fitness = Self::new()?;
        fitness.set_values(values)?;
        Ok(fitness)
    }

    /// The objective weights of this fitness kind.
    pub fn weights() -> &'static [f64] {
        W::WEIGHTS
    }

    /// Weighted values, empty while invalid.
    pub fn wvalues(&self) -> &[f64] {
        &self.wvalues
    }

    /// Assigns raw objective values, storing `values[i] * weights[i]`.
    ///
    /// # Errors
    /// [`EvoError::LengthMismatch`] if `values` does not have one entry per
    /// weight. The fitness is left unchanged in that case.
    pub fn set_values(&mut self, values: &[f64]) -> Result<()> {
        let weights = W::WEIGHTS;
        if values.len() != weights.len() {
            return Err(EvoError::LengthMismatch {
                expected: weights.len(),
                actual: values.len(),
            });
        }
        self.wvalues = values.iter().zip(weights).map(|(v, w)| v * w).collect();
        Ok(())
    }

    /// Raw objective values, or an empty vector while invalid.
    pub fn values(&self) -> Vec<f64> {
        if !self.is_valid() {
            return Vec::new();
        }
        self.wvalues
            .iter()
            .zip(W::WEIGHTS)
            .map(|(wv, w)| wv / w)
            .collect()
    }

    /// Clears the values; the fitness becomes invalid.
    pub fn invalidate(&mut self) {
        self.wvalues.clear();
    }

    /// Whether values have been assigned for every objective.
    pub fn is_valid(&self) -> bool {
        let n = W::WEIGHTS.len();
        n > 0 && self.wvalues.len() == n
    }

    /// Pareto dominance over all objectives.
    ///
    /// True iff `self` is no worse than `other` on every objective and
    /// strictly better on at least one. Equal fitnesses do not dominate each
    /// other.
    pub fn dominates(&self, other: &Self) -> bool {
        self.dominates_in(other, 0..usize::MAX)
    }

    /// Pareto dominance restricted to the objectives in `objectives`.
    ///
    /// Objectives are paired by position and the range is clamped to the
    /// paired length; an empty comparison never dominates.
    pub fn dominates_in(&self, other: &Self, objectives: Range<usize>) -> bool {
        let paired = self.wvalues.len().min(other.wvalues.len());
        let end = objectives.end.min(paired);
        let start = objectives.start.min(end);

        let mut strictly_better = false;
        for (a, b) in self.wvalues[start..end]
            .iter()
            .zip(&other.wvalues[start..end])
        {
            if a < b {
                return false;
            }
            if a != b {
                strictly_better = true;
            }
        }
        strictly_better
    }
}

/// Validates a weight vector for a fitness kind.
fn check_weights(weights: &[f64]) -> Result<()> {
    if weights.is_empty() {
        return Err(EvoError::EmptyWeights);
    }
    if let Some(index) = weights.iter().position(|&w| w == 0.0) {
        return Err(EvoError::ZeroWeight { index });
    }
    Ok(())
}

impl<W: Weights> Clone for Fitness<W> {
    fn clone(&self) -> Self {
        Self {
            wvalues: self.wvalues.clone(),
            kind: PhantomData,
        }
    }
}

impl<W: Weights> PartialEq for Fitness<W> {
    fn eq(&self, other: &Self) -> bool {
        self.wvalues == other.wvalues
    }
}

/// Equality is reflexive for every fitness built from non-NaN values, which
/// is what hashed containers rely on.
impl<W: Weights> Eq for Fitness<W> {}

impl<W: Weights> PartialOrd for Fitness<W> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.wvalues.partial_cmp(&other.wvalues)
    }
}

impl<W: Weights> Hash for Fitness<W> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.wvalues.len().hash(state);
        for &v in &self.wvalues {
            // -0.0 == 0.0, so they must hash alike
            let v = if v == 0.0 { 0.0f64 } else { v };
            v.to_bits().hash(state);
        }
    }
}

impl<W: Weights> fmt::Display for Fitness<W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let values = self.values();
        write!(f, "(")?;
        for (i, v) in values.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{v:?}")?;
        }
        if values.len() == 1 {
            write!(f, ",")?;
        }
        write!(f, ")")
    }
}

impl<W: Weights> fmt::Debug for Fitness<W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Fitness({self})")
    }
}
