//! Core types and dataset loading for the sunshine map.
//!
//! A dataset is a CSV of `city,month,lon,lat,sunshine` rows. Each row becomes
//! one immutable [`Record`](record::Record) identified by its load position
//! ([`RecordId`](record::RecordId)), which is also the identity of the map
//! trace drawn for it.

pub mod dataset;
pub mod error;
pub mod month;
pub mod record;

pub use dataset::{load_records, parse_records, Dataset};
pub use error::{LoadError, UnknownMonth};
pub use month::MonthKey;
pub use record::{Record, RecordId};
