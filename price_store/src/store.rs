//! Loading and reshaping of the wide-format commodity price table

use crate::calendar;
use crate::error::{Result, StoreError};
use chrono::NaiveDate;
use polars::prelude::*;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use std::fs::File;
use std::path::Path;

/// One commodity's historical series, extracted from the store for a single
/// request. Points are `(month-end date, price)` pairs in chronological
/// order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommoditySeries {
    name: String,
    points: Vec<(NaiveDate, f64)>,
}

impl CommoditySeries {
    /// Name of the commodity this series belongs to
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The `(date, value)` pairs in chronological order
    pub fn points(&self) -> &[(NaiveDate, f64)] {
        &self.points
    }

    /// The values alone, in chronological order
    pub fn values(&self) -> Vec<f64> {
        self.points.iter().map(|(_, v)| *v).collect()
    }

    /// Number of observations in the series
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Check if the series is empty
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

/// Immutable calendar-indexed view of the raw commodity table.
///
/// Built once at startup: each raw row becomes a column keyed by commodity
/// name, aligned to a shared month-end index starting at the 2014-01 epoch,
/// with missing cells forward-filled per commodity. Read-only afterwards,
/// safe to share across concurrent request handlers.
#[derive(Debug, Clone)]
pub struct PriceStore {
    /// Shared month-end date index
    index: Vec<NaiveDate>,
    /// Commodity names in source row order
    names: Vec<String>,
    /// Forward-filled value columns; a leading missing run stays `None`
    columns: HashMap<String, Vec<Option<f64>>>,
}

impl PriceStore {
    /// Load and reshape the raw table from a CSV file.
    ///
    /// The first column must hold the commodity names; the remaining columns
    /// are monthly values in chronological order from the epoch.
    pub fn from_csv<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(path)?;
        let df = CsvReader::new(file)
            .infer_schema(None)
            .has_header(true)
            .finish()?;

        Self::from_dataframe(df)
    }

    /// Reshape an already-parsed raw table.
    pub fn from_dataframe(df: DataFrame) -> Result<Self> {
        if df.width() < 2 {
            return Err(StoreError::DataLoad(
                "Raw table needs a commodity-name column and at least one value column".to_string(),
            ));
        }

        let names = Self::commodity_names(&df)?;
        let periods = df.width() - 1;
        let index = calendar::epoch_index(periods);

        // Collect the value columns once, cast to f64. Column j holds month j
        // for every commodity.
        let mut month_columns = Vec::with_capacity(periods);
        for col in &df.get_columns()[1..] {
            let cast = col.cast(&DataType::Float64).map_err(|_| {
                StoreError::DataLoad(format!(
                    "Value column '{}' cannot be read as numbers",
                    col.name()
                ))
            })?;
            month_columns.push(cast);
        }

        // Transpose: one value vector per commodity, then forward-fill along
        // the time axis, each commodity independently.
        let mut columns = HashMap::with_capacity(names.len());
        for (row, name) in names.iter().enumerate() {
            let mut values = Vec::with_capacity(periods);
            for month in &month_columns {
                let cell = month.f64()?.get(row).filter(|v| v.is_finite());
                values.push(cell);
            }
            forward_fill(&mut values);
            columns.insert(name.clone(), values);
        }

        Ok(Self {
            index,
            names,
            columns,
        })
    }

    fn commodity_names(df: &DataFrame) -> Result<Vec<String>> {
        let name_col = &df.get_columns()[0];
        let ca = name_col.utf8().map_err(|_| {
            StoreError::DataLoad(format!(
                "First column '{}' must contain commodity names",
                name_col.name()
            ))
        })?;

        let mut names = Vec::with_capacity(df.height());
        let mut seen = HashSet::new();
        for (row, name) in ca.into_iter().enumerate() {
            let name = name.ok_or_else(|| {
                StoreError::DataLoad(format!("Missing commodity name in row {}", row))
            })?;
            if !seen.insert(name.to_string()) {
                return Err(StoreError::DataLoad(format!(
                    "Duplicate commodity name: {}",
                    name
                )));
            }
            names.push(name.to_string());
        }

        Ok(names)
    }

    /// All commodity names, in source row order
    pub fn commodities(&self) -> &[String] {
        &self.names
    }

    /// The shared month-end date index
    pub fn index(&self) -> &[NaiveDate] {
        &self.index
    }

    /// Number of months covered by the index
    pub fn periods(&self) -> usize {
        self.index.len()
    }

    /// Extract the full historical series for one commodity.
    ///
    /// Months that remain missing after forward-fill (a leading run before
    /// the first observation) are not part of the returned series.
    pub fn series(&self, name: &str) -> Result<CommoditySeries> {
        let column = self
            .columns
            .get(name)
            .ok_or_else(|| StoreError::UnknownCommodity(name.to_string()))?;

        let points = self
            .index
            .iter()
            .zip(column.iter())
            .filter_map(|(date, value)| value.map(|v| (*date, v)))
            .collect();

        Ok(CommoditySeries {
            name: name.to_string(),
            points,
        })
    }
}

/// Replace each missing cell with the most recent prior observation. Cells
/// before the first observation stay missing.
fn forward_fill(values: &mut [Option<f64>]) {
    let mut last = None;
    for value in values.iter_mut() {
        match value {
            Some(v) => last = Some(*v),
            None => *value = last,
        }
    }
}
