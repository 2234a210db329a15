//! Per-generation statistics.

use std::collections::BTreeMap;

/// Compiles named scalar statistics from a population.
///
/// The evolution loop calls [`compile`](Statistics::compile) once per
/// generation and stores the result in the [`Logbook`](super::Logbook).
/// `()` compiles nothing.
///
/// ```
/// use std::collections::BTreeMap;
/// use evokit::records::Statistics;
///
/// struct Size;
///
/// impl<I> Statistics<I> for Size {
///     fn fields(&self) -> Vec<String> {
///         vec!["size".into()]
///     }
///     fn compile(&self, population: &[I]) -> BTreeMap<String, f64> {
///         BTreeMap::from([("size".to_string(), population.len() as f64)])
///     }
/// }
/// ```
pub trait Statistics<I> {
    /// Names of the compiled fields, in display order.
    fn fields(&self) -> Vec<String>;

    /// Computes the statistics of `population`.
    fn compile(&self, population: &[I]) -> BTreeMap<String, f64>;
}

impl<I> Statistics<I> for () {
    fn fields(&self) -> Vec<String> {
        Vec::new()
    }

    fn compile(&self, _population: &[I]) -> BTreeMap<String, f64> {
        BTreeMap::new()
    }
}
