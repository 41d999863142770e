//! Flood-monitoring API response DTOs.
//!
//! These types map directly to the EA flood-monitoring JSON responses.
//! They use `Option` liberally because the API omits fields rather than
//! sending nulls, and real station records are patchy.

use serde::Deserialize;

/// Response from `/id/stations?_view=full`.
#[derive(Debug, Clone, Deserialize)]
pub struct StationsResponse {
    /// The station records. Missing when the query matched nothing.
    pub items: Option<Vec<StationItem>>,
}

/// Response from `/id/stations/{id}.json`.
///
/// Unlike the list endpoint, `items` here is a single object.
#[derive(Debug, Clone, Deserialize)]
pub struct StationDetailResponse {
    pub items: Option<StationItem>,
}

/// Response from `/id/stations/{id}/readings`.
#[derive(Debug, Clone, Deserialize)]
pub struct ReadingsResponse {
    pub items: Option<Vec<ReadingItem>>,
}

/// A station record as returned by the API.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StationItem {
    /// Station identifier used in URLs.
    pub notation: Option<String>,

    /// EA station reference (almost always equal to `notation`).
    pub station_reference: Option<String>,

    /// Human-readable station name.
    pub label: Option<String>,

    /// Town the station is in.
    pub town: Option<String>,

    /// River the station measures.
    pub river_name: Option<String>,

    /// Catchment area name.
    pub catchment_name: Option<String>,

    /// Date the station opened (ISO 8601 date).
    pub date_opened: Option<String>,

    /// Status URI, e.g. `.../def/core/statusActive`.
    pub status: Option<String>,

    /// Free-text reason for the current status.
    pub status_reason: Option<String>,

    /// When the status last changed.
    pub status_date: Option<String>,

    /// River Levels On the Internet identifier.
    #[serde(rename = "RLOIid")]
    pub rloi_id: Option<String>,

    /// WISKI hydrology database identifier.
    #[serde(rename = "wiskiID")]
    pub wiski_id: Option<String>,

    /// WGS84 latitude.
    pub lat: Option<f64>,

    /// WGS84 longitude. `long` is a Rust keyword, hence the rename.
    #[serde(rename = "long")]
    pub longitude: Option<f64>,

    /// British National Grid easting.
    pub easting: Option<f64>,

    /// British National Grid northing.
    pub northing: Option<f64>,

    /// Measures recorded at this station.
    pub measures: Option<Vec<MeasureItem>>,

    /// Stage scale (typical/record ranges for the upstream gauge).
    pub stage_scale: Option<ScaleItem>,

    /// Downstream stage scale.
    pub downstage_scale: Option<ScaleItem>,
}

/// A measure attached to a station.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MeasureItem {
    /// Short parameter code ("level", "flow", "rainfall").
    pub parameter: Option<String>,

    /// Human-readable parameter name.
    pub parameter_name: Option<String>,

    /// Qualifier ("Stage", "Downstream Stage", "Tidal Level").
    pub qualifier: Option<String>,

    /// Unit name ("mASD", "m3/s", "mm").
    pub unit_name: Option<String>,

    /// Sampling period in seconds.
    pub period: Option<f64>,
}

/// Scale information for a station gauge.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScaleItem {
    pub scale_max: Option<f64>,
    pub typical_range_high: Option<f64>,
    pub typical_range_low: Option<f64>,
    pub min_on_record: Option<ScaleRecordItem>,
    pub max_on_record: Option<ScaleRecordItem>,
    pub highest_recent: Option<ScaleRecordItem>,
}

/// A dated extreme value on a gauge scale.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScaleRecordItem {
    pub date_time: Option<String>,
    pub value: Option<f64>,
}

/// A single reading.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReadingItem {
    /// When the reading was taken (ISO 8601 datetime, always UTC).
    pub date_time: Option<String>,

    /// URI of the measure this reading belongs to.
    pub measure: Option<String>,

    /// The recorded value.
    pub value: Option<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserialize_station_item() {
        let json = r#"{
            "@id": "http://environment.data.gov.uk/flood-monitoring/id/stations/1029TH",
            "notation": "1029TH",
            "stationReference": "1029TH",
            "label": "Bourton Dickler",
            "town": "Little Rissington",
            "riverName": "Dikler",
            "catchmentName": "Thames from Evenlode",
            "dateOpened": "1994-01-01",
            "status": "http://environment.data.gov.uk/flood-monitoring/def/core/statusActive",
            "RLOIid": "7041",
            "wiskiID": "1029TH",
            "lat": 51.874767,
            "long": -1.740083,
            "easting": 417990,
            "northing": 219610,
            "measures": [{
                "parameter": "level",
                "parameterName": "Water Level",
                "qualifier": "Stage",
                "unitName": "mASD",
                "period": 900
            }],
            "stageScale": {
                "scaleMax": 2,
                "typicalRangeHigh": 0.609,
                "typicalRangeLow": 0.166,
                "maxOnRecord": {
                    "dateTime": "2012-11-25T05:00:00Z",
                    "value": 1.155
                }
            }
        }"#;

        let item: StationItem = serde_json::from_str(json).unwrap();
        assert_eq!(item.notation.as_deref(), Some("1029TH"));
        assert_eq!(item.label.as_deref(), Some("Bourton Dickler"));
        assert_eq!(item.rloi_id.as_deref(), Some("7041"));
        assert_eq!(item.longitude, Some(-1.740083));
        assert_eq!(item.easting, Some(417990.0));

        let measures = item.measures.unwrap();
        assert_eq!(measures.len(), 1);
        assert_eq!(measures[0].parameter_name.as_deref(), Some("Water Level"));
        assert_eq!(measures[0].period, Some(900.0));

        let scale = item.stage_scale.unwrap();
        assert_eq!(scale.typical_range_high, Some(0.609));
        assert_eq!(scale.max_on_record.unwrap().value, Some(1.155));
    }

    #[test]
    fn deserialize_sparse_station_item() {
        // Rainfall stations carry almost none of the river-gauge fields
        let json = r#"{"notation": "E24195", "label": "Hullbridge Raine"}"#;
        let item: StationItem = serde_json::from_str(json).unwrap();
        assert_eq!(item.notation.as_deref(), Some("E24195"));
        assert!(item.town.is_none());
        assert!(item.measures.is_none());
        assert!(item.stage_scale.is_none());
    }

    #[test]
    fn deserialize_readings_response() {
        let json = r#"{
            "items": [
                {
                    "dateTime": "2024-03-15T10:15:00Z",
                    "measure": "http://environment.data.gov.uk/flood-monitoring/id/measures/1029TH-level-stage-i-15_min-mASD",
                    "value": 0.32
                },
                {
                    "dateTime": "2024-03-15T10:00:00Z",
                    "measure": "http://environment.data.gov.uk/flood-monitoring/id/measures/1029TH-level-stage-i-15_min-mASD",
                    "value": 0.31
                }
            ]
        }"#;

        let response: ReadingsResponse = serde_json::from_str(json).unwrap();
        let items = response.items.unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].value, Some(0.32));
    }

    #[test]
    fn deserialize_empty_items() {
        let response: StationsResponse = serde_json::from_str("{}").unwrap();
        assert!(response.items.is_none());
    }
}
