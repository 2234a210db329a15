//! Chronological record of an evolution run.

use std::collections::BTreeMap;
use std::fmt;

/// Built-in column holding the generation index.
pub const GEN: &str = "gen";

/// Built-in column holding the number of evaluations.
pub const NEVALS: &str = "nevals";

/// One logbook row: a generation and its statistics.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LogEntry {
    /// Generation index (0 = initial population).
    pub gen: usize,

    /// Number of fitness evaluations performed in this generation.
    pub nevals: usize,

    /// Compiled statistics.
    pub fields: BTreeMap<String, f64>,
}

impl LogEntry {
    /// Looks up a column, including the built-in `gen` and `nevals`.
    pub fn get(&self, key: &str) -> Option<f64> {
        match key {
            GEN => Some(self.gen as f64),
            NEVALS => Some(self.nevals as f64),
            _ => self.fields.get(key).copied(),
        }
    }
}

/// Ordered sequence of [`LogEntry`] rows, one per generation.
///
/// ```
/// use std::collections::BTreeMap;
/// use evokit::records::Logbook;
///
/// let mut log = Logbook::with_fields(vec!["max".into()]);
/// log.record(0, 10, BTreeMap::from([("max".to_string(), 3.0)]));
/// log.record(1, 7, BTreeMap::from([("max".to_string(), 5.0)]));
///
/// assert_eq!(log.header(), &["gen", "nevals", "max"]);
/// assert_eq!(log.select("max"), vec![Some(3.0), Some(5.0)]);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Logbook {
    header: Vec<String>,
    entries: Vec<LogEntry>,
    #[cfg_attr(feature = "serde", serde(skip))]
    streamed: usize,
}

impl Default for Logbook {
    fn default() -> Self {
        Self::with_fields(Vec::new())
    }
}

impl Logbook {
    /// Creates an empty logbook whose header is `gen`, `nevals`, then `fields`.
    pub fn with_fields(fields: Vec<String>) -> Self {
        let mut header = vec![GEN.to_string(), NEVALS.to_string()];
        header.extend(fields);
        Self {
            header,
            entries: Vec::new(),
            streamed: 0,
        }
    }

    /// Appends an entry.
    pub fn record(&mut self, gen: usize, nevals: usize, fields: BTreeMap<String, f64>) {
        self.entries.push(LogEntry {
            gen,
            nevals,
            fields,
        });
    }

    /// Column names, for display.
    pub fn header(&self) -> &[String] {
        &self.header
    }

    /// All entries in recording order.
    pub fn entries(&self) -> &[LogEntry] {
        &self.entries
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether nothing has been recorded.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The most recent entry.
    pub fn last(&self) -> Option<&LogEntry> {
        self.entries.last()
    }

    /// One column across all entries; `None` where an entry lacks the field.
    pub fn select(&self, key: &str) -> Vec<Option<f64>> {
        self.entries.iter().map(|e| e.get(key)).collect()
    }

    /// Renders the entries recorded since the previous call.
    ///
    /// The first call is prefixed with the header row.
    pub fn stream(&mut self) -> String {
        let mut lines = Vec::new();
        if self.streamed == 0 {
            lines.push(self.header.join("\t"));
        }
        for entry in &self.entries[self.streamed..] {
            lines.push(self.row(entry));
        }
        self.streamed = self.entries.len();
        lines.join("\n")
    }

    fn row(&self, entry: &LogEntry) -> String {
        self.header
            .iter()
            .map(|key| match key.as_str() {
                GEN => entry.gen.to_string(),
                NEVALS => entry.nevals.to_string(),
                _ => entry
                    .fields
                    .get(key)
                    .map(|v| format!("{v:.4}"))
                    .unwrap_or_default(),
            })
            .collect::<Vec<_>>()
            .join("\t")
    }
}

impl fmt::Display for Logbook {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.header.join("\t"))?;
        for entry in &self.entries {
            write!(f, "\n{}", self.row(entry))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stats(max: f64) -> BTreeMap<String, f64> {
        BTreeMap::from([("max".to_string(), max)])
    }

    #[test]
    fn test_default_header() {
        let log = Logbook::default();
        assert_eq!(log.header(), &["gen", "nevals"]);
        assert!(log.is_empty());
        assert!(log.last().is_none());
    }

    #[test]
    fn test_record_keeps_order() {
        let mut log = Logbook::with_fields(vec!["max".into()]);
        for gen in 0..4 {
            log.record(gen, 10 - gen, stats(gen as f64));
        }
        assert_eq!(log.len(), 4);
        let gens: Vec<usize> = log.entries().iter().map(|e| e.gen).collect();
        assert_eq!(gens, vec![0, 1, 2, 3]);
        assert_eq!(log.last().map(|e| e.nevals), Some(7));
    }

    #[test]
    fn test_select_builtin_and_missing() {
        let mut log = Logbook::with_fields(vec!["max".into()]);
        log.record(0, 4, stats(1.0));
        log.record(1, 2, BTreeMap::new());
        assert_eq!(log.select("nevals"), vec![Some(4.0), Some(2.0)]);
        assert_eq!(log.select("max"), vec![Some(1.0), None]);
        assert_eq!(log.select("avg"), vec![None, None]);
    }

    #[test]
    fn test_stream_incremental() {
        let mut log = Logbook::with_fields(vec!["max".into()]);
        log.record(0, 4, stats(1.5));
        assert_eq!(log.stream(), "gen\tnevals\tmax\n0\t4\t1.5000");

        log.record(1, 3, stats(2.0));
        assert_eq!(log.stream(), "1\t3\t2.0000");
        assert_eq!(log.stream(), "");
    }

    #[test]
    fn test_display_full_table() {
        let mut log = Logbook::default();
        log.record(0, 4, BTreeMap::new());
        log.record(1, 2, BTreeMap::new());
        assert_eq!(log.to_string(), "gen\tnevals\n0\t4\n1\t2");
    }
}
