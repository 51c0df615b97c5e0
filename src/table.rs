//! Contains the `SnowTable` result container and its conversion to Polars.

use crate::error::MountainHubError;
use crate::types::snow_record::SnowRecord;
use log::debug;
use polars::prelude::*;

pub const COL_AUTHOR_NAME: &str = "author_name";
pub const COL_ID: &str = "id";
pub const COL_TIMESTAMP: &str = "timestamp"; // epoch milliseconds
pub const COL_DATE: &str = "date"; // wall clock in the client's zone
pub const COL_LAT: &str = "lat";
pub const COL_LONG: &str = "long";
pub const COL_TYPE: &str = "type";
pub const COL_SNOW_DEPTH: &str = "snow_depth";

/// Normalized snow observations in the order the API returned them.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SnowTable {
    records: Vec<SnowRecord>,
}

impl SnowTable {
    /// Collects records, dropping every incomplete one when `filter` is set.
    pub fn assemble(records: Vec<SnowRecord>, filter: bool) -> Self {
        if !filter {
            return Self { records };
        }
        let before = records.len();
        let records: Vec<SnowRecord> = records.into_iter().filter(SnowRecord::is_complete).collect();
        debug!(
            "Dropped {} of {} observations with missing fields",
            before - records.len(),
            before
        );
        Self { records }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn records(&self) -> &[SnowRecord] {
        &self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'_, SnowRecord> {
        self.records.iter()
    }

    pub fn into_records(self) -> Vec<SnowRecord> {
        self.records
    }

    /// Builds a Polars `DataFrame` with one row per record.
    ///
    /// Absent values become nulls. The `date` column is a millisecond
    /// `Datetime` without a zone, holding the wall-clock reading.
    pub fn to_dataframe(&self) -> Result<DataFrame, MountainHubError> {
        let rows = &self.records;
        let dates = Series::new(
            COL_DATE.into(),
            rows.iter()
                .map(|r| r.date.and_utc().timestamp_millis())
                .collect::<Vec<i64>>(),
        )
        .cast(&DataType::Datetime(TimeUnit::Milliseconds, None))?;

        let columns: Vec<Column> = vec![
            Series::new(
                COL_AUTHOR_NAME.into(),
                rows.iter().map(|r| r.author_name.clone()).collect::<Vec<Option<String>>>(),
            )
            .into(),
            Series::new(
                COL_ID.into(),
                rows.iter().map(|r| r.id.clone()).collect::<Vec<String>>(),
            )
            .into(),
            Series::new(
                COL_TIMESTAMP.into(),
                rows.iter().map(|r| r.timestamp).collect::<Vec<i64>>(),
            )
            .into(),
            dates.into(),
            Series::new(COL_LAT.into(), rows.iter().map(|r| r.lat).collect::<Vec<f64>>()).into(),
            Series::new(COL_LONG.into(), rows.iter().map(|r| r.long).collect::<Vec<f64>>()).into(),
            Series::new(
                COL_TYPE.into(),
                rows.iter()
                    .map(|r| r.observation_type.clone())
                    .collect::<Vec<String>>(),
            )
            .into(),
            Series::new(
                COL_SNOW_DEPTH.into(),
                rows.iter().map(|r| r.snow_depth).collect::<Vec<Option<f64>>>(),
            )
            .into(),
        ];
        Ok(DataFrame::new(columns)?)
    }

    /// Same as [`SnowTable::to_dataframe`], as a `LazyFrame` for further querying.
    pub fn lazy(&self) -> Result<LazyFrame, MountainHubError> {
        Ok(self.to_dataframe()?.lazy())
    }
}

impl IntoIterator for SnowTable {
    type Item = SnowRecord;
    type IntoIter = std::vec::IntoIter<SnowRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.into_iter()
    }
}

impl<'a> IntoIterator for &'a SnowTable {
    type Item = &'a SnowRecord;
    type IntoIter = std::slice::Iter<'a, SnowRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn record(id: &str, author: Option<&str>, depth: Option<f64>) -> SnowRecord {
        SnowRecord {
            author_name: author.map(str::to_string),
            id: id.to_string(),
            timestamp: 1_609_459_200_000,
            date: NaiveDate::from_ymd_opt(2021, 1, 1)
                .unwrap()
                .and_hms_opt(0, 0, 0)
                .unwrap(),
            lat: 39.0,
            long: -105.0,
            observation_type: "snow_conditions".to_string(),
            snow_depth: depth,
        }
    }

    fn sample() -> Vec<SnowRecord> {
        vec![
            record("a", Some("Ann"), Some(10.0)),
            record("b", None, Some(20.0)),
            record("c", Some("Cy"), None),
            record("d", Some("Di"), Some(0.0)),
        ]
    }

    #[test]
    fn test_filter_drops_incomplete() {
        let table = SnowTable::assemble(sample(), true);
        let ids: Vec<_> = table.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "d"]);
    }

    #[test]
    fn test_no_filter_keeps_all_in_order() {
        let table = SnowTable::assemble(sample(), false);
        let ids: Vec<_> = table.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "b", "c", "d"]);
        assert_eq!(table.records()[1].author_name, None);
        assert_eq!(table.records()[2].snow_depth, None);
    }

    #[test]
    fn test_dataframe_columns() -> Result<(), MountainHubError> {
        let df = SnowTable::assemble(sample(), false).to_dataframe()?;
        assert_eq!(df.height(), 4);
        let names: Vec<&str> = df.get_column_names().iter().map(|n| n.as_str()).collect();
        assert_eq!(
            names,
            vec!["author_name", "id", "timestamp", "date", "lat", "long", "type", "snow_depth"]
        );
        assert_eq!(
            df.column(COL_DATE)?.dtype(),
            &DataType::Datetime(TimeUnit::Milliseconds, None)
        );
        assert_eq!(df.column(COL_AUTHOR_NAME)?.null_count(), 1);
        assert_eq!(df.column(COL_SNOW_DEPTH)?.null_count(), 1);
        assert_eq!(df.column(COL_TIMESTAMP)?.i64()?.get(0), Some(1_609_459_200_000));

        let deep = SnowTable::assemble(sample(), false)
            .lazy()?
            .filter(col(COL_SNOW_DEPTH).gt(lit(5.0)))
            .collect()?;
        assert_eq!(deep.height(), 2);
        Ok(())
    }

    #[test]
    fn test_empty_table_frame() -> Result<(), MountainHubError> {
        let table = SnowTable::assemble(vec![], true);
        assert!(table.is_empty());
        let df = table.to_dataframe()?;
        assert_eq!(df.height(), 0);
        assert_eq!(df.width(), 8);
        Ok(())
    }
}
