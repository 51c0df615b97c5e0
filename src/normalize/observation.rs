//! Turns raw timeline envelopes into [`SnowRecord`]s.

use crate::normalize::error::RecordError;
use crate::time::millis_to_wall_clock;
use crate::types::raw_observation::{ObservationBody, RawObservation};
use crate::types::snow_record::SnowRecord;
use chrono::TimeZone;
use serde_json::{Map, Value};

/// Actor keys holding the reporter's name, in order of preference.
/// Both spellings occur in API responses.
pub const AUTHOR_NAME_KEYS: [&str; 2] = ["full_name", "fullName"];

const SNOWPACK_DEPTH_KEY: &str = "snowpack_depth";
const UNDEFINED_MARKER: &str = "undefined";

/// Normalizes one envelope from the `results` list.
///
/// Missing optional fields become `None`. A missing or unusable `_id`,
/// `reported_at`, `location` or `type` is an error.
pub fn normalize_observation<Tz: TimeZone>(
    value: Value,
    tz: &Tz,
) -> Result<SnowRecord, RecordError> {
    let raw: RawObservation = serde_json::from_value(value).map_err(RecordError::Shape)?;
    let author_name = raw.actor.as_ref().and_then(author_name);
    let obs = raw
        .observation
        .ok_or(RecordError::MissingField("observation"))?;

    let id = required(obs.id.as_ref(), "_id").and_then(|v| opaque_id(v, "_id"))?;
    let timestamp = required(obs.reported_at.as_ref(), "reported_at")
        .and_then(|v| coerce_millis(v, "reported_at"))?;
    let date = millis_to_wall_clock(tz, timestamp).ok_or(RecordError::InvalidField {
        field: "reported_at",
        value: Value::from(timestamp),
    })?;
    let (long, lat) = coordinates(obs.location.as_deref())?;
    let snow_depth = snow_depth(&obs)?;
    let observation_type = obs
        .observation_type
        .ok_or(RecordError::MissingField("type"))?;

    Ok(SnowRecord {
        author_name,
        id,
        timestamp,
        date,
        lat,
        long,
        observation_type,
        snow_depth,
    })
}

fn required<'a>(value: Option<&'a Value>, field: &'static str) -> Result<&'a Value, RecordError> {
    match value {
        None | Some(Value::Null) => Err(RecordError::MissingField(field)),
        Some(v) => Ok(v),
    }
}

fn invalid(field: &'static str, value: &Value) -> RecordError {
    RecordError::InvalidField {
        field,
        value: value.clone(),
    }
}

fn author_name(actor: &Map<String, Value>) -> Option<String> {
    AUTHOR_NAME_KEYS
        .iter()
        .filter_map(|key| actor.get(*key).and_then(Value::as_str))
        .find(|name| !name.is_empty())
        .map(str::to_string)
}

fn opaque_id(value: &Value, field: &'static str) -> Result<String, RecordError> {
    match value {
        Value::String(s) => Ok(s.clone()),
        Value::Number(n) => Ok(n.to_string()),
        other => Err(invalid(field, other)),
    }
}

fn coerce_millis(value: &Value, field: &'static str) -> Result<i64, RecordError> {
    match value {
        Value::String(s) => s.trim().parse::<i64>().map_err(|_| invalid(field, value)),
        Value::Number(n) => n
            .as_i64()
            .or_else(|| n.as_f64().filter(|f| f.is_finite()).map(|f| f.trunc() as i64))
            .ok_or_else(|| invalid(field, value)),
        other => Err(invalid(field, other)),
    }
}

/// Returns `(longitude, latitude)` from a `[longitude, latitude]` pair.
fn coordinates(location: Option<&[f64]>) -> Result<(f64, f64), RecordError> {
    match location {
        None => Err(RecordError::MissingField("location")),
        Some([long, lat, ..]) => Ok((*long, *lat)),
        Some(other) => Err(RecordError::InvalidField {
            field: "location",
            value: Value::from(other.to_vec()),
        }),
    }
}

fn snow_depth(obs: &ObservationBody) -> Result<Option<f64>, RecordError> {
    let first = match obs.details.as_deref() {
        Some([Value::Object(first), ..]) => first,
        Some([Value::Null, ..]) | Some([]) | None => return Ok(None),
        Some([other, ..]) => return Err(invalid("details", other)),
    };
    let depth = match first.get(SNOWPACK_DEPTH_KEY) {
        None | Some(Value::Null) => None,
        Some(Value::String(s)) if s == UNDEFINED_MARKER => None,
        Some(Value::String(s)) => Some(
            s.trim()
                .parse::<f64>()
                .map_err(|_| invalid(SNOWPACK_DEPTH_KEY, &Value::from(s.as_str())))?,
        ),
        Some(Value::Number(n)) => n.as_f64(),
        Some(other) => return Err(invalid(SNOWPACK_DEPTH_KEY, other)),
    };
    // "NaN" parses as a float but is a missing value.
    Ok(depth.filter(|d| !d.is_nan()))
}
