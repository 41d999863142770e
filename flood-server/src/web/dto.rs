//! Data transfer objects for JSON API responses.

use serde::{Deserialize, Serialize};

use crate::domain::{Measure, Reading, Scale, ScaleRecord, Station};

/// Query parameters for `/api/readings/:id`.
#[derive(Debug, Deserialize)]
pub struct ReadingsQuery {
    /// Reading window: "24h" (default), "7d", "week" or "7days"
    pub period: Option<String>,
}

/// A station in API responses.
#[derive(Debug, Serialize)]
pub struct StationResult {
    /// Station identifier (EA notation)
    pub id: String,

    /// Human-readable station name
    pub label: String,

    /// EA station reference
    pub station_reference: Option<String>,

    /// Town the station is in
    pub town: Option<String>,

    /// River the station measures
    pub river_name: Option<String>,

    /// Catchment area name
    pub catchment_name: Option<String>,

    /// Date the station opened
    pub date_opened: Option<String>,

    /// Operational status ("Active", "Suspended", ...)
    pub status: Option<String>,

    /// Reason for the current status
    pub status_reason: Option<String>,

    /// When the status last changed
    pub status_date: Option<String>,

    /// River Levels On the Internet identifier
    pub rloi_id: Option<String>,

    /// WISKI identifier
    pub wiski_id: Option<String>,

    /// WGS84 latitude
    pub lat: Option<f64>,

    /// WGS84 longitude
    pub long: Option<f64>,

    /// British National Grid easting
    pub easting: Option<f64>,

    /// British National Grid northing
    pub northing: Option<f64>,

    /// Measures recorded at this station
    pub measures: Vec<MeasureResult>,

    /// Stage scale
    pub stage_scale: Option<ScaleResult>,

    /// Downstream stage scale
    pub downstage_scale: Option<ScaleResult>,
}

impl StationResult {
    /// Create from a domain Station.
    pub fn from_station(station: &Station) -> Self {
        Self {
            id: station.id.to_string(),
            label: station.label.clone(),
            station_reference: station.reference.clone(),
            town: station.town.clone(),
            river_name: station.river_name.clone(),
            catchment_name: station.catchment_name.clone(),
            date_opened: station.date_opened.clone(),
            status: station.status.clone(),
            status_reason: station.status_reason.clone(),
            status_date: station.status_date.clone(),
            rloi_id: station.rloi_id.clone(),
            wiski_id: station.wiski_id.clone(),
            lat: station.lat,
            long: station.long,
            easting: station.easting,
            northing: station.northing,
            measures: station.measures.iter().map(MeasureResult::from_measure).collect(),
            stage_scale: station.stage_scale.as_ref().map(ScaleResult::from_scale),
            downstage_scale: station.downstage_scale.as_ref().map(ScaleResult::from_scale),
        }
    }
}

/// A measure in API responses.
#[derive(Debug, Serialize)]
pub struct MeasureResult {
    pub parameter: Option<String>,
    pub parameter_name: Option<String>,
    pub qualifier: Option<String>,
    pub unit_name: Option<String>,
    pub period_secs: Option<f64>,
}

impl MeasureResult {
    fn from_measure(measure: &Measure) -> Self {
        Self {
            parameter: measure.parameter.clone(),
            parameter_name: measure.parameter_name.clone(),
            qualifier: measure.qualifier.clone(),
            unit_name: measure.unit_name.clone(),
            period_secs: measure.period_secs,
        }
    }
}

/// Scale information in API responses.
#[derive(Debug, Serialize)]
pub struct ScaleResult {
    pub scale_max: Option<f64>,
    pub typical_range_high: Option<f64>,
    pub typical_range_low: Option<f64>,
    pub min_on_record: Option<ScaleRecordResult>,
    pub max_on_record: Option<ScaleRecordResult>,
    pub highest_recent: Option<ScaleRecordResult>,
}

impl ScaleResult {
    fn from_scale(scale: &Scale) -> Self {
        Self {
            scale_max: scale.scale_max,
            typical_range_high: scale.typical_range_high,
            typical_range_low: scale.typical_range_low,
            min_on_record: scale.min_on_record.as_ref().map(ScaleRecordResult::from_record),
            max_on_record: scale.max_on_record.as_ref().map(ScaleRecordResult::from_record),
            highest_recent: scale.highest_recent.as_ref().map(ScaleRecordResult::from_record),
        }
    }
}

/// A dated extreme value in API responses.
#[derive(Debug, Serialize)]
pub struct ScaleRecordResult {
    pub date_time: Option<String>,
    pub value: Option<f64>,
}

impl ScaleRecordResult {
    fn from_record(record: &ScaleRecord) -> Self {
        Self {
            date_time: record.date_time.clone(),
            value: record.value,
        }
    }
}

/// Response for the station list.
#[derive(Debug, Serialize)]
pub struct StationsApiResponse {
    /// All known stations
    pub stations: Vec<StationResult>,
}

/// A reading in API responses.
#[derive(Debug, Serialize)]
pub struct ReadingResult {
    /// When the reading was taken (RFC 3339)
    pub date_time: String,

    /// URI of the measure this reading belongs to
    pub measure: String,

    /// The recorded value
    pub value: f64,
}

impl ReadingResult {
    /// Create from a domain Reading.
    pub fn from_reading(reading: &Reading) -> Self {
        Self {
            date_time: reading.date_time.to_rfc3339(),
            measure: reading.measure.clone(),
            value: reading.value,
        }
    }
}

/// Response for station readings.
#[derive(Debug, Serialize)]
pub struct ReadingsApiResponse {
    /// The station the readings belong to
    pub station: String,

    /// The period the readings cover ("24h" or "7d")
    pub period: String,

    /// The readings, newest first
    pub readings: Vec<ReadingResult>,
}

/// Error body returned by the JSON API.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::StationId;
    use chrono::{TimeZone, Utc};

    fn sample_station() -> Station {
        Station {
            id: StationId::parse("1029TH").unwrap(),
            label: "Bourton Dickler".to_string(),
            reference: Some("1029TH".to_string()),
            town: Some("Little Rissington".to_string()),
            river_name: Some("Dikler".to_string()),
            catchment_name: None,
            date_opened: Some("1994-01-01".to_string()),
            status: Some("Active".to_string()),
            status_reason: None,
            status_date: None,
            rloi_id: Some("7041".to_string()),
            wiski_id: None,
            lat: Some(51.874767),
            long: Some(-1.740083),
            easting: Some(417990.0),
            northing: Some(219610.0),
            measures: vec![Measure {
                parameter: Some("level".to_string()),
                parameter_name: Some("Water Level".to_string()),
                qualifier: Some("Stage".to_string()),
                unit_name: Some("mASD".to_string()),
                period_secs: Some(900.0),
            }],
            stage_scale: Some(Scale {
                scale_max: Some(2.0),
                typical_range_high: Some(0.609),
                typical_range_low: Some(0.166),
                min_on_record: None,
                max_on_record: Some(ScaleRecord {
                    date_time: Some("2012-11-25T05:00:00Z".to_string()),
                    value: Some(1.155),
                }),
                highest_recent: None,
            }),
            downstage_scale: None,
        }
    }

    #[test]
    fn station_result_carries_identity() {
        let result = StationResult::from_station(&sample_station());
        assert_eq!(result.id, "1029TH");
        assert_eq!(result.label, "Bourton Dickler");
        assert_eq!(result.measures.len(), 1);
        assert_eq!(result.stage_scale.unwrap().typical_range_high, Some(0.609));
    }

    #[test]
    fn station_result_serializes() {
        let result = StationResult::from_station(&sample_station());
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["id"], "1029TH");
        assert_eq!(json["river_name"], "Dikler");
        assert_eq!(json["measures"][0]["unit_name"], "mASD");
    }

    #[test]
    fn reading_result_formats_rfc3339() {
        let reading = Reading {
            date_time: Utc.with_ymd_and_hms(2024, 3, 15, 10, 15, 0).unwrap(),
            measure: "m1".to_string(),
            value: 0.32,
        };
        let result = ReadingResult::from_reading(&reading);
        assert_eq!(result.date_time, "2024-03-15T10:15:00+00:00");
        assert_eq!(result.value, 0.32);
    }
}
