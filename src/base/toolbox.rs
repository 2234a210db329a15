//! Operator registry and the collaborators the evolution loop consumes.
//!
//! - [`Toolbox`]: evaluation, crossover, mutation and survivor selection
//! - [`Mapper`]: order-preserving map used for batched evaluation
//! - [`Archive`]: hall-of-fame style retention of the best individuals seen

use super::individual::Individual;
use rand::Rng;

/// Order-preserving map strategy for batched evaluation.
///
/// Both variants return results aligned with their inputs, which is what
/// allows fitness values to be zipped back onto individuals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Mapper {
    /// Evaluate one item after another on the calling thread.
    #[default]
    Sequential,

    /// Evaluate on the rayon thread pool.
    ///
    /// Requires the `parallel` feature; without it this behaves like
    /// [`Mapper::Sequential`].
    Parallel,
}

impl Mapper {
    /// Applies `f` to every item, preserving order.
    pub fn map<T, U, F>(&self, f: F, items: &[T]) -> Vec<U>
    where
        T: Sync,
        U: Send,
        F: Fn(&T) -> U + Sync + Send,
    {
        match self {
            Mapper::Sequential => items.iter().map(f).collect(),
            Mapper::Parallel => parallel_map(f, items),
        }
    }
}

#[cfg(feature = "parallel")]
fn parallel_map<T, U, F>(f: F, items: &[T]) -> Vec<U>
where
    T: Sync,
    U: Send,
    F: Fn(&T) -> U + Sync + Send,
{
    use rayon::prelude::*;
    items.par_iter().map(f).collect()
}

#[cfg(not(feature = "parallel"))]
fn parallel_map<T, U, F>(f: F, items: &[T]) -> Vec<U>
where
    T: Sync,
    U: Send,
    F: Fn(&T) -> U + Sync + Send,
{
    items.iter().map(f).collect()
}

/// The operators an evolutionary algorithm is assembled from.
///
/// Implementors plug in the genome-specific logic; the engine handles the
/// generational bookkeeping. Variation operators receive *owned* clones, so
/// they may modify their arguments freely without touching the population
/// the parents were drawn from.
///
/// # Thread Safety
///
/// `Toolbox` must be `Send + Sync` because [`Mapper::Parallel`] may call
/// [`evaluate`](Toolbox::evaluate) from several threads.
pub trait Toolbox: Send + Sync {
    /// The individual type this toolbox operates on.
    type Individual: Individual;

    /// Computes the raw objective values of an individual, one per weight.
    fn evaluate(&self, individual: &Self::Individual) -> Vec<f64>;

    /// Recombines two parents into two children.
    ///
    /// The default implementation returns the parents unchanged.
    fn mate<R: Rng>(
        &self,
        first: Self::Individual,
        second: Self::Individual,
        _rng: &mut R,
    ) -> (Self::Individual, Self::Individual) {
        (first, second)
    }

    /// Perturbs an individual.
    ///
    /// The default implementation is a no-op.
    fn mutate<R: Rng>(&self, individual: Self::Individual, _rng: &mut R) -> Self::Individual {
        individual
    }

    /// Chooses `k` individuals from `population`.
    ///
    /// The engine trusts this to return exactly `k` individuals.
    fn select<R: Rng>(
        &self,
        population: &[Self::Individual],
        k: usize,
        rng: &mut R,
    ) -> Vec<Self::Individual>;

    /// The map strategy used by the default [`map_evaluate`](Toolbox::map_evaluate).
    fn mapper(&self) -> Mapper {
        Mapper::Sequential
    }

    /// Evaluates a batch of individuals, returning results in input order.
    ///
    /// Override to route evaluation through a custom executor; the result
    /// must stay aligned with `individuals`.
    fn map_evaluate(&self, individuals: &[&Self::Individual]) -> Vec<Vec<f64>> {
        self.mapper().map(|ind| self.evaluate(ind), individuals)
    }
}

/// Retains the best individuals seen over a run.
///
/// `update` may be called many times with overlapping individuals.
/// `()` is the archive that keeps nothing.
pub trait Archive<I> {
    /// Incorporates any qualifying individuals from `population`.
    fn update(&mut self, population: &[I]);
}

impl<I> Archive<I> for () {
    fn update(&mut self, _population: &[I]) {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::base::Chromosome;
    use rand::SeedableRng;

    crate::weights!(Max = [1.0]);

    type Ind = Chromosome<i64, Max>;

    struct Identity;

    impl Toolbox for Identity {
        type Individual = Ind;

        fn evaluate(&self, ind: &Ind) -> Vec<f64> {
            vec![ind.genome as f64]
        }

        fn select<R: Rng>(&self, population: &[Ind], k: usize, _rng: &mut R) -> Vec<Ind> {
            population.iter().take(k).cloned().collect()
        }
    }

    #[test]
    fn test_sequential_map_preserves_order() {
        let items: Vec<u32> = (0..100).collect();
        let out = Mapper::Sequential.map(|x| x * 2, &items);
        assert_eq!(out, (0..100).map(|x| x * 2).collect::<Vec<_>>());
    }

    #[test]
    fn test_parallel_map_preserves_order() {
        let items: Vec<u64> = (0..1000).collect();
        let out = Mapper::Parallel.map(|x| x * x, &items);
        assert_eq!(out, (0..1000u64).map(|x| x * x).collect::<Vec<_>>());
    }

    // Needs `--features parallel`; without it Parallel runs on the caller.
    #[cfg(feature = "parallel")]
    #[test]
    fn test_parallel_map_runs_on_rayon_pool() {
        let items: Vec<u32> = (0..64).collect();
        let on_pool = Mapper::Parallel.map(|_| rayon::current_thread_index().is_some(), &items);
        assert!(on_pool.iter().all(|&b| b));

        let on_caller = Mapper::Sequential.map(|_| rayon::current_thread_index().is_some(), &items);
        assert!(on_caller.iter().all(|&b| !b));
    }

    #[test]
    fn test_default_map_evaluate_aligned() {
        let pop: Vec<Ind> = (0..5).map(|g| Ind::new(g).unwrap()).collect();
        let refs: Vec<&Ind> = pop.iter().rev().collect();
        let out = Identity.map_evaluate(&refs);
        assert_eq!(out, vec![vec![4.0], vec![3.0], vec![2.0], vec![1.0], vec![0.0]]);
    }

    #[test]
    fn test_default_operators_are_identity() {
        let mut rng = rand::rngs::StdRng::seed_from_u64(42);
        let a = Ind::new(1).unwrap();
        let b = Ind::new(2).unwrap();
        let (c, d) = Identity.mate(a, b, &mut rng);
        assert_eq!((c.genome, d.genome), (1, 2));
        let m = Identity.mutate(c, &mut rng);
        assert_eq!(m.genome, 1);
    }

    #[test]
    fn test_unit_archive_accepts_anything() {
        let pop: Vec<Ind> = vec![Ind::new(3).unwrap()];
        Archive::<Ind>::update(&mut (), pop.as_slice());
    }
}
