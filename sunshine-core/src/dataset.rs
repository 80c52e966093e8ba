//! CSV loading for the sunshine dataset.
//!
//! Expected format (with headers): `city,month,lon,lat,sunshine`
//!
//! Columns are located by header name, so their order does not matter and
//! extra columns are ignored. Row order is preserved and defines each
//! record's [`RecordId`].
//!
//! # Example CSV
//! ```text
//! city,month,lon,lat,sunshine
//! Yuma,Jan,-114.62,32.69,242
//! Phoenix,Jan,-112.07,33.45,256
//! ```

use crate::error::LoadError;
use crate::month::MonthKey;
use crate::record::{Record, RecordId};
use csv::StringRecord;
use std::path::Path;

const CITY: &str = "city";
const MONTH: &str = "month";
const LON: &str = "lon";
const LAT: &str = "lat";
const SUNSHINE: &str = "sunshine";

/// Read and parse the dataset at `path`.
pub fn load_records(path: impl AsRef<Path>) -> Result<Vec<Record>, LoadError> {
    let path = path.as_ref();
    let csv_data = std::fs::read_to_string(path).map_err(|source| LoadError::read(path, source))?;
    parse_records(&csv_data)
}

/// Parse an in-memory CSV string into records, in file order.
pub fn parse_records(csv_data: &str) -> Result<Vec<Record>, LoadError> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(csv_data.as_bytes());

    let columns = Columns::locate(rdr.headers()?)?;

    let mut records = Vec::new();
    for (idx, result) in rdr.records().enumerate() {
        let row = result?;
        records.push(columns.record(RecordId(idx), &row)?);
    }
    log::info!("dataset: loaded {} records", records.len());
    Ok(records)
}

/// Header positions of the required columns.
struct Columns {
    city: usize,
    month: usize,
    lon: usize,
    lat: usize,
    sunshine: usize,
}

impl Columns {
    fn locate(headers: &StringRecord) -> Result<Columns, LoadError> {
        let find = |name: &'static str| {
            headers
                .iter()
                .position(|h| h == name)
                .ok_or(LoadError::MissingColumn(name))
        };
        Ok(Columns {
            city: find(CITY)?,
            month: find(MONTH)?,
            lon: find(LON)?,
            lat: find(LAT)?,
            sunshine: find(SUNSHINE)?,
        })
    }

    fn record(&self, id: RecordId, row: &StringRecord) -> Result<Record, LoadError> {
        let line = id.0 + 1;
        let month_str = row.get(self.month).unwrap_or("");
        let month = MonthKey::from_abbreviation(month_str).ok_or_else(|| LoadError::InvalidMonth {
            row: line,
            value: month_str.to_string(),
        })?;

        Ok(Record {
            id,
            city: row.get(self.city).unwrap_or("").to_string(),
            month,
            lon: parse_float(row, self.lon, LON, line)?,
            lat: parse_float(row, self.lat, LAT, line)?,
            sunshine: parse_float(row, self.sunshine, SUNSHINE, line)?,
        })
    }
}

fn parse_float(
    row: &StringRecord,
    idx: usize,
    column: &'static str,
    line: usize,
) -> Result<f64, LoadError> {
    let value = row.get(idx).unwrap_or("");
    match value.parse::<f64>() {
        Ok(v) if v.is_finite() => Ok(v),
        _ => Err(LoadError::InvalidNumber {
            row: line,
            column,
            value: value.to_string(),
        }),
    }
}

/// The loaded record sequence plus the selector option lists derived from it.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Dataset {
    records: Vec<Record>,
}

impl Dataset {
    pub fn new(records: Vec<Record>) -> Self {
        Self { records }
    }

    pub fn from_csv(csv_data: &str) -> Result<Self, LoadError> {
        parse_records(csv_data).map(Self::new)
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Distinct city names in order of first appearance.
    pub fn cities(&self) -> Vec<String> {
        let mut cities: Vec<String> = Vec::new();
        for record in &self.records {
            if !cities.contains(&record.city) {
                cities.push(record.city.clone());
            }
        }
        cities
    }

    /// Distinct months present in the data, in order of first appearance.
    pub fn months(&self) -> Vec<MonthKey> {
        let mut months: Vec<MonthKey> = Vec::new();
        for record in &self.records {
            if !months.contains(&record.month) {
                months.push(record.month);
            }
        }
        months
    }
}
