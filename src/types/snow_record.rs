use chrono::NaiveDateTime;
use serde::Serialize;

/// A single normalized snow observation.
///
/// `date` is the wall-clock reading of `timestamp` in the client's time zone,
/// at whole-second precision.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SnowRecord {
    pub author_name: Option<String>,
    pub id: String,
    /// Milliseconds since the Unix epoch.
    pub timestamp: i64,
    pub date: NaiveDateTime,
    pub lat: f64,
    pub long: f64,
    #[serde(rename = "type")]
    pub observation_type: String,
    pub snow_depth: Option<f64>,
}

impl SnowRecord {
    /// True when no field is absent.
    pub fn is_complete(&self) -> bool {
        self.author_name.is_some() && self.snow_depth.is_some()
    }
}
