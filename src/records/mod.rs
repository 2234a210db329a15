//! Run bookkeeping: statistics compilation and the generation logbook.

mod logbook;
mod statistics;

pub use logbook::{LogEntry, Logbook, GEN, NEVALS};
pub use statistics::Statistics;
