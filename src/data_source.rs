//! Sources that produce the chart's [`RowSet`].
//!
//! A source is loaded exactly once per chart session, off the UI thread. It never touches the
//! scene; it only returns data or a [`ChartError`].

use crate::data_types::{CoercionPolicy, RawRecord, RowSet};
use crate::error::ChartError;

/// Trait for anything that can produce the chart's rows.
pub trait DataSource: Send + Sync {
    /// Reads and normalizes the table: value coercion, duplicate check, ascending sort.
    fn load(&self) -> Result<RowSet, ChartError>;

    /// Short human-readable origin, used in logs.
    fn describe(&self) -> String;
}

/// In-memory records, coerced on load like any tabular source.
pub struct VecDataSource {
    records: Vec<RawRecord>,
    policy: CoercionPolicy,
}

impl VecDataSource {
    pub fn new(records: Vec<RawRecord>) -> Self {
        Self {
            records,
            policy: CoercionPolicy::default(),
        }
    }

    /// Convenience for `(game, value)` pairs.
    pub fn from_pairs<'a>(pairs: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        Self::new(
            pairs
                .into_iter()
                .map(|(game, value)| RawRecord::new(game, value))
                .collect(),
        )
    }

    pub fn with_policy(mut self, policy: CoercionPolicy) -> Self {
        self.policy = policy;
        self
    }
}

impl DataSource for VecDataSource {
    fn load(&self) -> Result<RowSet, ChartError> {
        RowSet::from_records(self.records.iter().cloned(), self.policy)
    }

    fn describe(&self) -> String {
        format!("{} in-memory records", self.records.len())
    }
}
