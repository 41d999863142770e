//! Askama templates and view models for the HTML pages.

use askama::Template;

use crate::domain::{Measure, Reading, Scale, Station};

// ============================================================================
// Page Templates (extend base.html)
// ============================================================================

/// Station list page (the application entry point).
#[derive(Template)]
#[template(path = "station_list.html")]
pub struct StationListTemplate {
    pub stations: Vec<StationRowView>,
    pub error: Option<String>,
}

/// Station detail page.
#[derive(Template)]
#[template(path = "station_detail.html")]
pub struct StationDetailTemplate {
    pub station: StationDetailView,
    pub readings: Vec<ReadingRowView>,
}

// ============================================================================
// View Models (for templates)
// ============================================================================

/// One row in the station list.
#[derive(Debug, Clone)]
pub struct StationRowView {
    pub id: String,
    pub label: String,
    pub town: String,
    pub river_name: String,
    pub status: String,
}

impl StationRowView {
    /// Create from a domain Station.
    pub fn from_station(station: &Station) -> Self {
        Self {
            id: station.id.to_string(),
            label: station.label.clone(),
            town: station.town.clone().unwrap_or_default(),
            river_name: station.river_name.clone().unwrap_or_default(),
            status: station.status.clone().unwrap_or_default(),
        }
    }
}

/// Full station record for the detail page.
///
/// Everything is pre-formatted into display strings; the template only
/// interpolates.
#[derive(Debug, Clone)]
pub struct StationDetailView {
    pub id: String,
    pub label: String,
    pub reference: String,
    pub town: String,
    pub river_name: String,
    pub catchment_name: String,
    pub date_opened: String,
    pub status: String,
    pub status_reason: String,
    pub status_date: String,
    pub rloi_id: String,
    pub wiski_id: String,
    pub coordinates: String,
    pub grid_reference: String,
    pub measures: Vec<MeasureRowView>,
    pub stage_scale: Option<ScaleView>,
    pub downstage_scale: Option<ScaleView>,
}

impl StationDetailView {
    /// Create from a domain Station.
    pub fn from_station(station: &Station) -> Self {
        let coordinates = match (station.lat, station.long) {
            (Some(lat), Some(long)) => format!("{}, {}", lat, long),
            _ => String::new(),
        };

        let grid_reference = match (station.easting, station.northing) {
            (Some(e), Some(n)) => format!("Easting {}, Northing {}", e, n),
            _ => String::new(),
        };

        Self {
            id: station.id.to_string(),
            label: station.label.clone(),
            reference: station.reference.clone().unwrap_or_default(),
            town: station.town.clone().unwrap_or_default(),
            river_name: station.river_name.clone().unwrap_or_default(),
            catchment_name: station.catchment_name.clone().unwrap_or_default(),
            date_opened: station.date_opened.clone().unwrap_or_default(),
            status: station.status.clone().unwrap_or_default(),
            status_reason: station.status_reason.clone().unwrap_or_default(),
            status_date: station.status_date.clone().unwrap_or_default(),
            rloi_id: station.rloi_id.clone().unwrap_or_default(),
            wiski_id: station.wiski_id.clone().unwrap_or_default(),
            coordinates,
            grid_reference,
            measures: station.measures.iter().map(MeasureRowView::from_measure).collect(),
            stage_scale: station.stage_scale.as_ref().map(ScaleView::from_scale),
            downstage_scale: station.downstage_scale.as_ref().map(ScaleView::from_scale),
        }
    }
}

/// One measure line on the detail page.
#[derive(Debug, Clone)]
pub struct MeasureRowView {
    pub parameter_name: String,
    pub parameter: String,
    pub qualifier: String,
    pub unit_name: String,
    pub period: String,
}

impl MeasureRowView {
    /// Create from a domain Measure.
    pub fn from_measure(measure: &Measure) -> Self {
        Self {
            parameter_name: measure.parameter_name.clone().unwrap_or_default(),
            parameter: measure.parameter.clone().unwrap_or_default(),
            qualifier: measure.qualifier.clone().unwrap_or_default(),
            unit_name: measure.unit_name.clone().unwrap_or_default(),
            period: measure
                .period_secs
                .map(|p| format!("{}", p))
                .unwrap_or_default(),
        }
    }

    /// One-line summary, e.g.
    /// "Water Level (level) - Period: 900 seconds, Qualifier: Stage, Unit: mASD"
    pub fn summary(&self) -> String {
        format!(
            "{} ({}) - Period: {} seconds, Qualifier: {}, Unit: {}",
            self.parameter_name, self.parameter, self.period, self.qualifier, self.unit_name
        )
    }
}

/// Scale information on the detail page.
#[derive(Debug, Clone)]
pub struct ScaleView {
    pub typical_range: String,
    pub scale_max: String,
    pub max_on_record: String,
    pub min_on_record: String,
}

impl ScaleView {
    /// Create from a domain Scale.
    pub fn from_scale(scale: &Scale) -> Self {
        let typical_range = match (scale.typical_range_low, scale.typical_range_high) {
            (Some(low), Some(high)) => format!("{} to {}", low, high),
            (Some(low), None) => format!("from {}", low),
            (None, Some(high)) => format!("up to {}", high),
            (None, None) => String::new(),
        };

        Self {
            typical_range,
            scale_max: scale.scale_max.map(|v| v.to_string()).unwrap_or_default(),
            max_on_record: format_record(scale.max_on_record.as_ref()),
            min_on_record: format_record(scale.min_on_record.as_ref()),
        }
    }
}

fn format_record(record: Option<&crate::domain::ScaleRecord>) -> String {
    let Some(record) = record else {
        return String::new();
    };

    match (record.value, record.date_time.as_deref()) {
        (Some(v), Some(at)) => format!("{} ({})", v, at),
        (Some(v), None) => v.to_string(),
        (None, Some(at)) => format!("({})", at),
        (None, None) => String::new(),
    }
}

/// One reading row on the detail page.
#[derive(Debug, Clone)]
pub struct ReadingRowView {
    pub taken_at: String,
    pub measure: String,
    pub value: String,
}

impl ReadingRowView {
    /// Create from a domain Reading.
    pub fn from_reading(reading: &Reading) -> Self {
        Self {
            taken_at: reading.date_time.format("%Y-%m-%d %H:%M UTC").to_string(),
            measure: measure_label(&reading.measure),
            value: reading.value.to_string(),
        }
    }
}

/// Shorten a measure URI to its last path segment for display.
///
/// `.../id/measures/1029TH-level-stage-i-15_min-mASD` reads better as
/// `1029TH-level-stage-i-15_min-mASD`.
fn measure_label(measure: &str) -> String {
    measure.rsplit('/').next().unwrap_or(measure).to_string()
}
