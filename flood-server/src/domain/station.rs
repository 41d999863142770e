//! Station identifier and station record types.

use std::fmt;

/// Error returned when parsing an invalid station identifier.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid station id: {reason}")]
pub struct InvalidStationId {
    reason: &'static str,
}

/// Maximum accepted identifier length.
///
/// Real Environment Agency notations are short ("1029TH", "E2043"); the
/// bound exists so an arbitrary path segment cannot be smuggled into
/// upstream request URLs.
const MAX_LEN: usize = 64;

/// A validated flood-monitoring station identifier.
///
/// This is the EA "notation" (also exposed as `stationReference`), the
/// value that appears in upstream URLs like `/id/stations/{id}.json`.
/// Identifiers are non-empty, at most 64 characters, and restricted to
/// ASCII alphanumerics plus `_`, `-` and `.`, so any `StationId` value is
/// URL-safe by construction.
///
/// # Examples
///
/// ```
/// use flood_server::domain::StationId;
///
/// let id = StationId::parse("1029TH").unwrap();
/// assert_eq!(id.as_str(), "1029TH");
///
/// // Path separators are rejected
/// assert!(StationId::parse("1029/readings").is_err());
///
/// // Empty input is rejected
/// assert!(StationId::parse("").is_err());
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct StationId(String);

impl StationId {
    /// Parse a station identifier from a string.
    ///
    /// The input must be 1 to 64 characters, each an ASCII alphanumeric,
    /// `_`, `-` or `.`.
    pub fn parse(s: &str) -> Result<Self, InvalidStationId> {
        if s.is_empty() {
            return Err(InvalidStationId {
                reason: "must not be empty",
            });
        }

        if s.len() > MAX_LEN {
            return Err(InvalidStationId {
                reason: "must be at most 64 characters",
            });
        }

        for b in s.bytes() {
            if !(b.is_ascii_alphanumeric() || b == b'_' || b == b'-' || b == b'.') {
                return Err(InvalidStationId {
                    reason: "must contain only ASCII alphanumerics, '_', '-' or '.'",
                });
            }
        }

        Ok(StationId(s.to_string()))
    }

    /// Returns the identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for StationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "StationId({})", self.0)
    }
}

impl fmt::Display for StationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A monitoring station record.
///
/// Fields are `Option` where the upstream data is genuinely patchy: many
/// stations have no town, no river name, or no scale information.
#[derive(Debug, Clone, PartialEq)]
pub struct Station {
    /// Station identifier (EA notation).
    pub id: StationId,

    /// Human-readable station name.
    pub label: String,

    /// EA station reference (usually identical to the notation).
    pub reference: Option<String>,

    /// Town the station is in.
    pub town: Option<String>,

    /// River the station measures.
    pub river_name: Option<String>,

    /// Catchment area name.
    pub catchment_name: Option<String>,

    /// Date the station opened (ISO 8601 date).
    pub date_opened: Option<String>,

    /// Operational status ("Active", "Suspended", "Closed", ...).
    pub status: Option<String>,

    /// Free-text reason for the current status.
    pub status_reason: Option<String>,

    /// When the status last changed.
    pub status_date: Option<String>,

    /// River Levels On the Internet identifier.
    pub rloi_id: Option<String>,

    /// WISKI hydrology database identifier.
    pub wiski_id: Option<String>,

    /// WGS84 latitude.
    pub lat: Option<f64>,

    /// WGS84 longitude.
    pub long: Option<f64>,

    /// British National Grid easting.
    pub easting: Option<f64>,

    /// British National Grid northing.
    pub northing: Option<f64>,

    /// Measures (parameters) recorded at this station.
    pub measures: Vec<Measure>,

    /// Stage (upstream) scale, if the station has one.
    pub stage_scale: Option<Scale>,

    /// Downstream stage scale, if the station has one.
    pub downstage_scale: Option<Scale>,
}

/// A measure recorded at a station (e.g. water level every 15 minutes).
#[derive(Debug, Clone, PartialEq)]
pub struct Measure {
    /// Short parameter code ("level", "flow", "rainfall").
    pub parameter: Option<String>,

    /// Human-readable parameter name ("Water Level").
    pub parameter_name: Option<String>,

    /// Qualifier distinguishing measures of the same parameter
    /// ("Stage", "Downstream Stage", "Tidal Level").
    pub qualifier: Option<String>,

    /// Unit name ("mASD", "m3/s", "mm").
    pub unit_name: Option<String>,

    /// Sampling period in seconds.
    pub period_secs: Option<f64>,
}

/// Typical and recorded ranges for a station's gauge.
#[derive(Debug, Clone, PartialEq)]
pub struct Scale {
    /// Upper bound of the gauge scale.
    pub scale_max: Option<f64>,

    /// Top of the typical range.
    pub typical_range_high: Option<f64>,

    /// Bottom of the typical range.
    pub typical_range_low: Option<f64>,

    /// Lowest level on record.
    pub min_on_record: Option<ScaleRecord>,

    /// Highest level on record.
    pub max_on_record: Option<ScaleRecord>,

    /// Highest recent level.
    pub highest_recent: Option<ScaleRecord>,
}

/// A dated extreme value on a gauge scale.
#[derive(Debug, Clone, PartialEq)]
pub struct ScaleRecord {
    /// When the value was recorded (ISO 8601 datetime).
    pub date_time: Option<String>,

    /// The recorded value.
    pub value: Option<f64>,
}
