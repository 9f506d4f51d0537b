use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use super::config::CoercionPolicy;
use crate::error::{ChartError, DataQualityIssue, QualityReason};

/// One ranked entry: a category and its non-negative value.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Row {
    pub category: String,
    pub value: f64,
}

impl Row {
    pub fn new(category: impl Into<String>, value: f64) -> Self {
        Self {
            category: category.into(),
            value,
        }
    }
}

/// A record as it comes out of the table, before the value column is coerced.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawRecord {
    pub game: String,
    pub value: Option<String>,
}

impl RawRecord {
    pub fn new(game: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            game: game.into(),
            value: Some(value.into()),
        }
    }
}

/// Rows sorted ascending by value, immutable once built.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RowSet {
    rows: Vec<Row>,
    issues: Vec<DataQualityIssue>,
}

impl RowSet {
    /// Builds a set from already-typed rows. Fails on duplicate categories and on any value
    /// that is not a finite, non-negative number.
    pub fn new(rows: Vec<Row>) -> Result<Self, ChartError> {
        let mut seen = HashSet::with_capacity(rows.len());
        for row in &rows {
            if let Err(reason) = check_value(row.value) {
                return Err(ChartError::InvalidValue {
                    category: row.category.clone(),
                    reason,
                });
            }
            if !seen.insert(row.category.as_str()) {
                return Err(ChartError::DuplicateCategory(row.category.clone()));
            }
        }

        let mut rows = rows;
        // Stable: equal values keep source order.
        rows.sort_by(|a, b| a.value.total_cmp(&b.value));
        Ok(Self {
            rows,
            issues: Vec::new(),
        })
    }

    /// Coerces the text value column and builds the set.
    ///
    /// Cells that do not produce a finite, non-negative number are handled per `policy` and
    /// recorded as [`DataQualityIssue`]s. Empty cells count as zero.
    pub fn from_records(
        records: impl IntoIterator<Item = RawRecord>,
        policy: CoercionPolicy,
    ) -> Result<Self, ChartError> {
        let mut rows = Vec::new();
        let mut issues = Vec::new();

        for (line, record) in records.into_iter().enumerate() {
            let raw = record.value.unwrap_or_default();
            match coerce_value(&raw) {
                Ok(value) => rows.push(Row::new(record.game, value)),
                Err(reason) => {
                    let issue = DataQualityIssue {
                        line,
                        category: record.game.clone(),
                        raw,
                        reason,
                    };
                    tracing::warn!("{issue}");
                    issues.push(issue);
                    if policy == CoercionPolicy::Zero {
                        rows.push(Row::new(record.game, 0.0));
                    }
                }
            }
        }

        let mut set = Self::new(rows)?;
        set.issues = issues;
        Ok(set)
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Row> {
        self.rows.iter()
    }

    /// Categories in set order (ascending value).
    pub fn categories(&self) -> impl Iterator<Item = &str> {
        self.rows.iter().map(|r| r.category.as_str())
    }

    /// Largest value, or 0 for an empty set.
    pub fn max_value(&self) -> f64 {
        self.rows.last().map(|r| r.value).unwrap_or(0.0)
    }

    pub fn get(&self, category: &str) -> Option<&Row> {
        self.rows.iter().find(|r| r.category == category)
    }

    pub fn issues(&self) -> &[DataQualityIssue] {
        &self.issues
    }
}

impl<'a> IntoIterator for &'a RowSet {
    type Item = &'a Row;
    type IntoIter = std::slice::Iter<'a, Row>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.iter()
    }
}

/// Text to number, accepting surrounding whitespace, exponents and `0x` literals.
pub fn coerce_value(raw: &str) -> Result<f64, QualityReason> {
    let text = raw.trim();
    if text.is_empty() {
        return Ok(0.0);
    }

    let parsed = match text
        .strip_prefix("0x")
        .or_else(|| text.strip_prefix("0X"))
    {
        Some(hex) => u64::from_str_radix(hex, 16).map(|v| v as f64).ok(),
        None => text.parse::<f64>().ok(),
    };

    parsed.map_or(Err(QualityReason::NotANumber), check_value)
}

fn check_value(value: f64) -> Result<f64, QualityReason> {
    if value.is_nan() {
        Err(QualityReason::NotANumber)
    } else if !value.is_finite() {
        Err(QualityReason::NotFinite)
    } else if value < 0.0 {
        Err(QualityReason::Negative)
    } else {
        Ok(value)
    }
}
