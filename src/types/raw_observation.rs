//! Wire shapes returned by the MountainHub timeline API.
//!
//! Every field is optional here; which of them are actually required is
//! decided during normalization so that a missing field is reported by name.

use serde::Deserialize;
use serde_json::{Map, Value};

/// One entry of the `results` list: who reported, and what.
#[derive(Debug, Clone, Deserialize)]
pub struct RawObservation {
    pub actor: Option<Map<String, Value>>,
    pub observation: Option<ObservationBody>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ObservationBody {
    #[serde(rename = "_id")]
    pub id: Option<Value>,
    /// Milliseconds since the epoch, as text or as a number.
    pub reported_at: Option<Value>,
    /// `[longitude, latitude]`
    pub location: Option<Vec<f64>>,
    #[serde(rename = "type")]
    pub observation_type: Option<String>,
    /// Only the first element is read; later ones may have any shape.
    pub details: Option<Vec<Value>>,
}
