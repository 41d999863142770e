//! Conversion from flood API DTOs to domain types.
//!
//! Raw EA records are patchy; conversion is lenient about missing optional
//! fields but strict about identity: a station with no usable identifier
//! cannot be linked to or queried, so it is skipped.

use chrono::{DateTime, Utc};

use crate::domain::{Measure, Reading, Scale, ScaleRecord, Station, StationId};

use super::types::{MeasureItem, ReadingItem, ScaleItem, StationItem};

/// Error during DTO to domain conversion.
#[derive(Debug, Clone, thiserror::Error)]
pub enum ConversionError {
    /// The record has neither a notation nor a station reference
    #[error("station has no identifier")]
    MissingIdentifier,

    /// The identifier is not a valid station id
    #[error("invalid station identifier: {0}")]
    InvalidIdentifier(String),

    /// Failed to parse a timestamp
    #[error("invalid timestamp: {0}")]
    InvalidTime(String),

    /// Missing required field
    #[error("missing required field: {0}")]
    MissingField(&'static str),
}

/// Convert a station list response to domain types.
///
/// Items that fail conversion are logged and skipped rather than failing
/// the whole list; the live dataset always contains a few broken records.
pub fn convert_stations(items: &[StationItem]) -> Vec<Station> {
    let mut stations = Vec::with_capacity(items.len());

    for item in items {
        match convert_station(item) {
            Ok(station) => stations.push(station),
            Err(e) => {
                tracing::warn!(
                    label = item.label.as_deref().unwrap_or("<unnamed>"),
                    error = %e,
                    "skipping station record"
                );
            }
        }
    }

    stations
}

/// Convert a single station record.
pub fn convert_station(item: &StationItem) -> Result<Station, ConversionError> {
    // The notation is the URL identifier; stationReference is the same
    // value in practice and serves as a fallback.
    let raw_id = item
        .notation
        .as_deref()
        .or(item.station_reference.as_deref())
        .ok_or(ConversionError::MissingIdentifier)?;

    let id = StationId::parse(raw_id)
        .map_err(|_| ConversionError::InvalidIdentifier(raw_id.to_string()))?;

    let measures = item
        .measures
        .as_deref()
        .unwrap_or(&[])
        .iter()
        .map(convert_measure)
        .collect();

    Ok(Station {
        label: item.label.clone().unwrap_or_else(|| id.to_string()),
        id,
        reference: item.station_reference.clone(),
        town: item.town.clone(),
        river_name: item.river_name.clone(),
        catchment_name: item.catchment_name.clone(),
        date_opened: item.date_opened.clone(),
        status: item.status.as_deref().map(status_label),
        status_reason: item.status_reason.clone(),
        status_date: item.status_date.clone(),
        rloi_id: item.rloi_id.clone(),
        wiski_id: item.wiski_id.clone(),
        lat: item.lat,
        long: item.longitude,
        easting: item.easting,
        northing: item.northing,
        measures,
        stage_scale: item.stage_scale.as_ref().map(convert_scale),
        downstage_scale: item.downstage_scale.as_ref().map(convert_scale),
    })
}

/// Convert a single reading.
pub fn convert_reading(item: &ReadingItem) -> Result<Reading, ConversionError> {
    let raw_time = item
        .date_time
        .as_deref()
        .ok_or(ConversionError::MissingField("dateTime"))?;

    let date_time: DateTime<Utc> = raw_time
        .parse()
        .map_err(|_| ConversionError::InvalidTime(raw_time.to_string()))?;

    let measure = item
        .measure
        .clone()
        .ok_or(ConversionError::MissingField("measure"))?;

    let value = item.value.ok_or(ConversionError::MissingField("value"))?;

    Ok(Reading {
        date_time,
        measure,
        value,
    })
}

fn convert_measure(item: &MeasureItem) -> Measure {
    Measure {
        parameter: item.parameter.clone(),
        parameter_name: item.parameter_name.clone(),
        qualifier: item.qualifier.clone(),
        unit_name: item.unit_name.clone(),
        period_secs: item.period,
    }
}

fn convert_scale(item: &ScaleItem) -> Scale {
    Scale {
        scale_max: item.scale_max,
        typical_range_high: item.typical_range_high,
        typical_range_low: item.typical_range_low,
        min_on_record: item.min_on_record.as_ref().map(|r| ScaleRecord {
            date_time: r.date_time.clone(),
            value: r.value,
        }),
        max_on_record: item.max_on_record.as_ref().map(|r| ScaleRecord {
            date_time: r.date_time.clone(),
            value: r.value,
        }),
        highest_recent: item.highest_recent.as_ref().map(|r| ScaleRecord {
            date_time: r.date_time.clone(),
            value: r.value,
        }),
    }
}

/// Shorten a status URI to its human label.
///
/// The API reports status as a URI like
/// `http://environment.data.gov.uk/flood-monitoring/def/core/statusActive`;
/// the display value is just `Active`. Values that don't match the pattern
/// pass through unchanged.
fn status_label(status: &str) -> String {
    let last_segment = status.rsplit('/').next().unwrap_or(status);
    match last_segment.strip_prefix("status") {
        Some(label) if !label.is_empty() => label.to_string(),
        _ => status.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn minimal_item(notation: Option<&str>, reference: Option<&str>) -> StationItem {
        StationItem {
            notation: notation.map(String::from),
            station_reference: reference.map(String::from),
            label: Some("Test Station".to_string()),
            town: None,
            river_name: None,
            catchment_name: None,
            date_opened: None,
            status: None,
            status_reason: None,
            status_date: None,
            rloi_id: None,
            wiski_id: None,
            lat: None,
            longitude: None,
            easting: None,
            northing: None,
            measures: None,
            stage_scale: None,
            downstage_scale: None,
        }
    }

    #[test]
    fn station_uses_notation() {
        let item = minimal_item(Some("1029TH"), Some("OTHER"));
        let station = convert_station(&item).unwrap();
        assert_eq!(station.id.as_str(), "1029TH");
        assert_eq!(station.label, "Test Station");
    }

    #[test]
    fn station_falls_back_to_reference() {
        let item = minimal_item(None, Some("E2043"));
        let station = convert_station(&item).unwrap();
        assert_eq!(station.id.as_str(), "E2043");
    }

    #[test]
    fn station_without_identifier_is_error() {
        let item = minimal_item(None, None);
        assert!(matches!(
            convert_station(&item),
            Err(ConversionError::MissingIdentifier)
        ));
    }

    #[test]
    fn station_without_label_uses_id() {
        let mut item = minimal_item(Some("52119"), None);
        item.label = None;
        let station = convert_station(&item).unwrap();
        assert_eq!(station.label, "52119");
    }

    #[test]
    fn convert_stations_skips_broken_records() {
        let items = vec![
            minimal_item(Some("1029TH"), None),
            minimal_item(None, None),
            minimal_item(Some("E2043"), None),
        ];
        let stations = convert_stations(&items);
        assert_eq!(stations.len(), 2);
        assert_eq!(stations[0].id.as_str(), "1029TH");
        assert_eq!(stations[1].id.as_str(), "E2043");
    }

    #[test]
    fn status_label_shortens_uri() {
        assert_eq!(
            status_label("http://environment.data.gov.uk/flood-monitoring/def/core/statusActive"),
            "Active"
        );
        assert_eq!(
            status_label(
                "http://environment.data.gov.uk/flood-monitoring/def/core/statusSuspended"
            ),
            "Suspended"
        );
    }

    #[test]
    fn status_label_passes_through_unknown_values() {
        assert_eq!(status_label("Active"), "Active");
        assert_eq!(status_label("http://example.com/status"), "http://example.com/status");
    }

    #[test]
    fn reading_conversion() {
        let item = ReadingItem {
            date_time: Some("2024-03-15T10:15:00Z".to_string()),
            measure: Some("http://example.com/measures/m1".to_string()),
            value: Some(0.32),
        };
        let reading = convert_reading(&item).unwrap();
        assert_eq!(reading.value, 0.32);
        assert_eq!(reading.measure, "http://example.com/measures/m1");
        assert_eq!(reading.date_time.to_rfc3339(), "2024-03-15T10:15:00+00:00");
    }

    #[test]
    fn reading_missing_value_is_error() {
        let item = ReadingItem {
            date_time: Some("2024-03-15T10:15:00Z".to_string()),
            measure: Some("m".to_string()),
            value: None,
        };
        assert!(matches!(
            convert_reading(&item),
            Err(ConversionError::MissingField("value"))
        ));
    }

    #[test]
    fn reading_bad_timestamp_is_error() {
        let item = ReadingItem {
            date_time: Some("yesterday".to_string()),
            measure: Some("m".to_string()),
            value: Some(1.0),
        };
        assert!(matches!(
            convert_reading(&item),
            Err(ConversionError::InvalidTime(_))
        ));
    }
}
