use crate::month::MonthKey;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Stable 0-based identifier of a record, assigned in load order.
///
/// The map trace drawn for a record carries the same id, so record/trace
/// correspondence never depends on incidental vector positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct RecordId(pub usize);

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

/// One row of the sunshine dataset.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct Record {
    pub id: RecordId,
    pub city: String,
    pub month: MonthKey,
    /// Longitude in decimal degrees
    pub lon: f64,
    /// Latitude in decimal degrees
    pub lat: f64,
    /// Hours of sunshine for the month
    pub sunshine: f64,
}
