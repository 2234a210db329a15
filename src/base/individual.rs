//! Individuals: a genome paired with its fitness.
//!
//! The evolution engine only needs to read and reset an individual's
//! fitness and to clone it. Anything else about the genome is the business
//! of the [`Toolbox`](super::Toolbox) operators.

use super::fitness::{Fitness, Weights};
use crate::error::Result;
use std::fmt;
use std::ops::{Deref, DerefMut};

/// A candidate solution owning exactly one [`Fitness`].
///
/// # Implementing
///
/// ```
/// use evokit::base::{Fitness, Individual};
///
/// evokit::weights!(Minimize = [-1.0]);
///
/// #[derive(Clone)]
/// struct Route {
///     stops: Vec<usize>,
///     fitness: Fitness<Minimize>,
/// }
///
/// impl Individual for Route {
///     type Weights = Minimize;
///     fn fitness(&self) -> &Fitness<Minimize> { &self.fitness }
///     fn fitness_mut(&mut self) -> &mut Fitness<Minimize> { &mut self.fitness }
/// }
/// ```
pub trait Individual: Clone + Send + Sync {
    /// The fitness kind (objective weights) of this individual.
    type Weights: Weights;

    /// Returns the fitness of this individual.
    fn fitness(&self) -> &Fitness<Self::Weights>;

    /// Returns the fitness for assignment or invalidation.
    fn fitness_mut(&mut self) -> &mut Fitness<Self::Weights>;
}

/// Generic individual: any genome `G` with a fitness of kind `W`.
///
/// Derefs to the genome, so list-like genomes can be indexed directly.
///
/// ```
/// use evokit::base::{Chromosome, Individual};
///
/// evokit::weights!(Max = [1.0]);
///
/// let mut c = Chromosome::<Vec<u8>, Max>::new(vec![0, 1, 1]).unwrap();
/// c[0] = 1;
/// assert_eq!(c.iter().sum::<u8>(), 3);
/// assert!(!c.fitness().is_valid());
/// ```
pub struct Chromosome<G, W: Weights> {
    /// The genome.
    pub genome: G,

    /// Fitness of the genome, invalid until evaluated.
    pub fitness: Fitness<W>,
}

impl<G, W: Weights> Chromosome<G, W> {
    /// Wraps a genome with an unassigned fitness.
    pub fn new(genome: G) -> Result<Self> {
        Ok(Self {
            genome,
            fitness: Fitness::new()?,
        })
    }

    /// Wraps a genome with an already known fitness.
    pub fn with_values(genome: G, values: &[f64]) -> Result<Self> {
        Ok(Self {
            genome,
            fitness: Fitness::with_values(values)?,
        })
    }

    /// Consumes the chromosome, returning its genome.
    pub fn into_genome(self) -> G {
        self.genome
    }
}

impl<G: Clone, W: Weights> Clone for Chromosome<G, W> {
    fn clone(&self) -> Self {
        Self {
            genome: self.genome.clone(),
            fitness: self.fitness.clone(),
        }
    }
}

impl<G: fmt::Debug, W: Weights> fmt::Debug for Chromosome<G, W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Chromosome")
            .field("genome", &self.genome)
            .field("fitness", &self.fitness)
            .finish()
    }
}

impl<G, W: Weights> Deref for Chromosome<G, W> {
    type Target = G;

    fn deref(&self) -> &G {
        &self.genome
    }
}

impl<G, W: Weights> DerefMut for Chromosome<G, W> {
    fn deref_mut(&mut self) -> &mut G {
        &mut self.genome
    }
}

impl<G, W> Individual for Chromosome<G, W>
where
    G: Clone + Send + Sync,
    W: Weights,
{
    type Weights = W;

    fn fitness(&self) -> &Fitness<W> {
        &self.fitness
    }

    fn fitness_mut(&mut self) -> &mut Fitness<W> {
        &mut self.fitness
    }
}
