//! Mock flood API client for testing without network access.
//!
//! Loads canned station documents from JSON files and serves them as if
//! they were live API responses.

use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

use tokio::sync::RwLock;

use crate::domain::{Station, StationId};

use super::convert::convert_station;
use super::error::FloodError;
use super::types::StationDetailResponse;

/// Mock client that serves station data from JSON files.
///
/// Useful for development and tests that should not touch the live EA API.
#[derive(Clone)]
pub struct MockFloodClient {
    /// Pre-loaded stations, keyed by identifier.
    stations: Arc<RwLock<HashMap<StationId, Station>>>,
}

impl MockFloodClient {
    /// Create a mock client by loading JSON files from a directory.
    ///
    /// Expects files named `{id}.json` (e.g. `1029TH.json`), each holding
    /// a station detail document (`{"items": {...}}`).
    pub fn new(data_dir: impl AsRef<Path>) -> Result<Self, FloodError> {
        let data_dir = data_dir.as_ref();
        let mut stations = HashMap::new();

        let entries = std::fs::read_dir(data_dir).map_err(|e| FloodError::Api {
            status: 0,
            message: format!("failed to read mock data directory: {}", e),
        })?;

        for entry in entries {
            let entry = entry.map_err(|e| FloodError::Api {
                status: 0,
                message: format!("failed to read directory entry: {}", e),
            })?;

            let path = entry.path();
            if !path.is_file() || path.extension().and_then(|s| s.to_str()) != Some("json") {
                continue;
            }

            let json = std::fs::read_to_string(&path).map_err(|e| FloodError::Api {
                status: 0,
                message: format!("failed to read {:?}: {}", path, e),
            })?;

            let document: StationDetailResponse =
                serde_json::from_str(&json).map_err(|e| FloodError::Json {
                    message: format!("failed to parse {:?}: {}", path, e),
                    body: None,
                })?;

            let item = document.items.ok_or_else(|| FloodError::Json {
                message: format!("{:?} has no items", path),
                body: None,
            })?;

            let station = convert_station(&item).map_err(|e| FloodError::Json {
                message: format!("failed to convert {:?}: {}", path, e),
                body: None,
            })?;

            stations.insert(station.id.clone(), station);
        }

        if stations.is_empty() {
            return Err(FloodError::Api {
                status: 0,
                message: format!("no mock station files found in {:?}", data_dir),
            });
        }

        Ok(Self {
            stations: Arc::new(RwLock::new(stations)),
        })
    }

    /// Fetch the full station list.
    ///
    /// Mimics `FloodClient::fetch_stations`, post-conversion.
    pub async fn fetch_stations(&self) -> Result<Vec<Station>, FloodError> {
        let stations = self.stations.read().await;
        let mut all: Vec<Station> = stations.values().cloned().collect();
        all.sort_by(|a, b| a.label.cmp(&b.label));
        Ok(all)
    }

    /// Fetch a single station by identifier.
    pub async fn fetch_station(&self, id: &StationId) -> Result<Station, FloodError> {
        let stations = self.stations.read().await;
        stations.get(id).cloned().ok_or(FloodError::StationNotFound)
    }

    /// List identifiers available in the mock data.
    pub async fn available_stations(&self) -> Vec<StationId> {
        let stations = self.stations.read().await;
        stations.keys().cloned().collect()
    }
}
