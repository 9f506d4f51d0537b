#![cfg(feature = "polars")]

use std::io::Cursor;
use std::path::PathBuf;
use std::sync::Arc;

use polars::prelude::*;

use crate::data_source::DataSource;
use crate::data_types::{CoercionPolicy, RawRecord, RowSet};
use crate::error::ChartError;

const CATEGORY_COLUMN: &str = "game";
const VALUE_COLUMN: &str = "value";

enum CsvOrigin {
    Path(PathBuf),
    Bytes(Arc<[u8]>),
}

/// CSV table with a `game` and a `value` column. Every column is read as text so the value
/// column goes through the same coercion as any other source.
pub struct CsvDataSource {
    origin: CsvOrigin,
    policy: CoercionPolicy,
}

impl CsvDataSource {
    pub fn from_path(path: impl Into<PathBuf>) -> Self {
        Self {
            origin: CsvOrigin::Path(path.into()),
            policy: CoercionPolicy::default(),
        }
    }

    pub fn from_bytes(bytes: impl Into<Arc<[u8]>>) -> Self {
        Self {
            origin: CsvOrigin::Bytes(bytes.into()),
            policy: CoercionPolicy::default(),
        }
    }

    pub fn with_policy(mut self, policy: CoercionPolicy) -> Self {
        self.policy = policy;
        self
    }

    fn read_bytes(&self) -> Result<Arc<[u8]>, ChartError> {
        match &self.origin {
            CsvOrigin::Path(path) => std::fs::read(path)
                .map(Arc::from)
                .map_err(|source| ChartError::Unreachable {
                    path: path.clone(),
                    source,
                }),
            CsvOrigin::Bytes(bytes) => Ok(bytes.clone()),
        }
    }

    fn read_frame(&self) -> Result<DataFrame, ChartError> {
        let bytes = self.read_bytes()?;
        let df = CsvReadOptions::default()
            .with_has_header(true)
            // No inference: every column stays a string.
            .with_infer_schema_length(Some(0))
            .into_reader_with_file_handle(Cursor::new(bytes))
            .finish()?;
        Ok(df)
    }
}

fn text_column<'a>(df: &'a DataFrame, name: &'static str) -> Result<&'a StringChunked, ChartError> {
    let column = df
        .column(name)
        .map_err(|_| ChartError::MissingColumn(name))?;
    Ok(column.str()?)
}

impl DataSource for CsvDataSource {
    fn load(&self) -> Result<RowSet, ChartError> {
        let df = self.read_frame()?;
        let games = text_column(&df, CATEGORY_COLUMN)?;
        let values = text_column(&df, VALUE_COLUMN)?;

        let records = games
            .into_iter()
            .zip(values.into_iter())
            .map(|(game, value)| RawRecord {
                game: game.unwrap_or_default().to_string(),
                value: value.map(str::to_string),
            });

        RowSet::from_records(records, self.policy)
    }

    fn describe(&self) -> String {
        match &self.origin {
            CsvOrigin::Path(path) => path.display().to_string(),
            CsvOrigin::Bytes(bytes) => format!("{} bytes of inline csv", bytes.len()),
        }
    }
}
