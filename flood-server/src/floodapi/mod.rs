//! Environment Agency flood-monitoring API client.
//!
//! This module provides an HTTP client for the EA real-time flood
//! monitoring API (<https://environment.data.gov.uk/flood-monitoring>).
//!
//! Key characteristics of the API:
//! - Open access, no authentication
//! - Every response wraps its payload in an `items` field; the station
//!   list and readings return arrays, station detail returns an object
//! - Stations are addressed by their `notation` (e.g. `1029TH`), which is
//!   almost always the same value as `stationReference`
//! - Readings support `since=<ISO datetime>` and a `_sorted` flag that
//!   returns newest first

mod client;
mod convert;
mod error;
pub mod mock;
mod types;

pub use client::{FloodClient, FloodConfig};
pub use convert::{ConversionError, convert_reading, convert_station, convert_stations};
pub use error::FloodError;
pub use types::{
    MeasureItem, ReadingItem, ReadingsResponse, ScaleItem, ScaleRecordItem, StationDetailResponse,
    StationItem, StationsResponse,
};
