//! Flood-monitoring station server.
//!
//! A web application that serves the UK Environment Agency's real-time
//! flood-monitoring station data: a station list at `/`, per-station
//! detail at `/station/:id`, and a JSON API under `/api/`.

pub mod cache;
pub mod domain;
pub mod floodapi;
pub mod web;
