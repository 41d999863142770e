//! Caching layer for flood API responses.
//!
//! The EA dataset updates roughly every 15 minutes, so responses are
//! cached for 15 minutes by default. Readings are keyed by station and
//! period so a 24-hour request never serves a cached 7-day window.
//!
//! Only successful upstream responses are cached; a transient upstream
//! failure must not pin an error for the full TTL.

use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;
use moka::future::Cache as MokaCache;

use crate::domain::{Reading, ReadingPeriod, Station, StationId};
use crate::floodapi::{
    FloodClient, FloodError, convert_reading, convert_station, convert_stations,
};

/// Configuration for the cache.
#[derive(Debug, Clone)]
pub struct CacheConfig {
    /// TTL for cached entries.
    pub ttl: Duration,

    /// Maximum number of cached detail/readings entries.
    pub max_capacity: u64,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            ttl: Duration::from_secs(900),
            max_capacity: 10_000,
        }
    }
}

/// Cache for flood API responses.
struct FloodCache {
    /// The full station list. Single entry, unit key.
    stations: MokaCache<(), Arc<Vec<Station>>>,

    /// Station detail, keyed by identifier.
    details: MokaCache<StationId, Arc<Station>>,

    /// Readings, keyed by (station, period).
    readings: MokaCache<(StationId, ReadingPeriod), Arc<Vec<Reading>>>,
}

impl FloodCache {
    fn new(config: &CacheConfig) -> Self {
        let stations = MokaCache::builder().time_to_live(config.ttl).max_capacity(1).build();

        let details = MokaCache::builder()
            .time_to_live(config.ttl)
            .max_capacity(config.max_capacity)
            .build();

        let readings = MokaCache::builder()
            .time_to_live(config.ttl)
            .max_capacity(config.max_capacity)
            .build();

        Self {
            stations,
            details,
            readings,
        }
    }

    fn entry_count(&self) -> u64 {
        self.stations.entry_count() + self.details.entry_count() + self.readings.entry_count()
    }

    fn invalidate_all(&self) {
        self.stations.invalidate_all();
        self.details.invalidate_all();
        self.readings.invalidate_all();
    }
}

/// Flood API client with caching.
///
/// Wraps a `FloodClient`, converts responses to domain types and caches
/// the converted results.
pub struct CachedFloodClient {
    client: FloodClient,
    cache: FloodCache,
}

impl CachedFloodClient {
    /// Create a new cached client.
    pub fn new(client: FloodClient, cache_config: &CacheConfig) -> Self {
        Self {
            client,
            cache: FloodCache::new(cache_config),
        }
    }

    /// Get the full station list, using the cache if available.
    pub async fn get_stations(&self) -> Result<Arc<Vec<Station>>, FloodError> {
        if let Some(cached) = self.cache.stations.get(&()).await {
            return Ok(cached);
        }

        let items = self.client.fetch_stations().await?;
        let entry = Arc::new(convert_stations(&items));

        self.cache.stations.insert((), entry.clone()).await;

        Ok(entry)
    }

    /// Get a single station, using the cache if available.
    pub async fn get_station(&self, id: &StationId) -> Result<Arc<Station>, FloodError> {
        if let Some(cached) = self.cache.details.get(id).await {
            return Ok(cached);
        }

        let item = self.client.fetch_station(id).await?;
        let station = convert_station(&item).map_err(|e| FloodError::Json {
            message: e.to_string(),
            body: None,
        })?;
        let entry = Arc::new(station);

        self.cache.details.insert(id.clone(), entry.clone()).await;

        Ok(entry)
    }

    /// Get readings for a station over the given period, newest first.
    ///
    /// Readings that fail conversion (no value, broken timestamp) are
    /// dropped; the EA feed occasionally contains such rows.
    pub async fn get_readings(
        &self,
        id: &StationId,
        period: ReadingPeriod,
    ) -> Result<Arc<Vec<Reading>>, FloodError> {
        let key = (id.clone(), period);

        if let Some(cached) = self.cache.readings.get(&key).await {
            return Ok(cached);
        }

        let since = period.since(Utc::now());
        let items = self.client.fetch_readings(id, since).await?;

        let readings: Vec<Reading> = items.iter().filter_map(|i| convert_reading(i).ok()).collect();
        let entry = Arc::new(readings);

        self.cache.readings.insert(key, entry.clone()).await;

        Ok(entry)
    }

    /// Access the underlying client for operations that bypass the cache.
    pub fn client(&self) -> &FloodClient {
        &self.client
    }

    /// Get cache statistics.
    pub fn cache_entry_count(&self) -> u64 {
        self.cache.entry_count()
    }

    /// Invalidate all cached entries.
    pub fn invalidate_cache(&self) {
        self.cache.invalidate_all();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::floodapi::FloodConfig;

    #[test]
    fn default_config() {
        let config = CacheConfig::default();
        assert_eq!(config.ttl, Duration::from_secs(900));
        assert_eq!(config.max_capacity, 10_000);
    }

    #[test]
    fn cache_creation() {
        let cache = FloodCache::new(&CacheConfig::default());
        assert_eq!(cache.entry_count(), 0);
    }

    #[test]
    fn readings_keys_distinguish_periods() {
        // A 24h request and a 7d request for the same station must not
        // share an entry.
        let id = StationId::parse("1029TH").unwrap();
        let key_day = (id.clone(), ReadingPeriod::Last24Hours);
        let key_week = (id, ReadingPeriod::Last7Days);
        assert_ne!(key_day, key_week);
    }

    #[tokio::test]
    async fn cached_client_starts_empty() {
        let client = FloodClient::new(FloodConfig::new()).unwrap();
        let cached = CachedFloodClient::new(client, &CacheConfig::default());
        assert_eq!(cached.cache_entry_count(), 0);
        cached.invalidate_cache();
        assert_eq!(cached.cache_entry_count(), 0);
    }
}
