//! Domain types for flood-monitoring stations.
//!
//! These are the validated, API-agnostic types the rest of the crate works
//! with. Raw Environment Agency responses are converted into them by
//! `crate::floodapi::convert`.

mod reading;
mod station;

pub use reading::{Reading, ReadingPeriod};
pub use station::{InvalidStationId, Measure, Scale, ScaleRecord, Station, StationId};
