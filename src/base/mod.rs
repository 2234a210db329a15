//! Core building blocks.
//!
//! - [`Fitness`] / [`Weights`]: weighted multi-objective fitness and its kinds
//! - [`Individual`] / [`Chromosome`]: candidate solutions owning a fitness
//! - [`Toolbox`] / [`Mapper`] / [`Archive`]: the collaborators an algorithm
//!   is assembled from

mod fitness;
mod individual;
mod toolbox;

pub use fitness::{Fitness, Weights};
pub use individual::{Chromosome, Individual};
pub use toolbox::{Archive, Mapper, Toolbox};
