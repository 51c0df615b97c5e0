//! Delivery of a built query to the timeline API.

pub mod http;

use crate::error::MountainHubError;
use crate::types::query_params::QueryParams;
use log::warn;
use serde_json::Value;

pub const TIMELINE_URL: &str = "https://api.mountainhub.com/timeline";
pub const ACCEPT_VERSION_HEADER: &str = "Accept-version";
pub const ACCEPT_VERSION: &str = "1";

/// Sends one timeline request and returns the decoded JSON body.
///
/// Implementations perform exactly one request and never retry. A body that
/// cannot be decoded as JSON is a [`MountainHubError::Request`].
pub trait Transport {
    fn get_timeline(&self, params: &QueryParams) -> Result<Value, MountainHubError>;
}

/// Pulls the observation envelopes out of a decoded timeline body.
///
/// A body without a `results` list is returned whole inside
/// [`MountainHubError::MalformedResponse`], whatever the HTTP status was.
pub fn take_results(body: Value) -> Result<Vec<Value>, MountainHubError> {
    match body {
        Value::Object(mut map) => match map.remove("results") {
            Some(Value::Array(results)) => Ok(results),
            Some(other) => {
                map.insert("results".to_string(), other);
                Err(malformed(Value::Object(map)))
            }
            None => Err(malformed(Value::Object(map))),
        },
        other => Err(malformed(other)),
    }
}

fn malformed(body: Value) -> MountainHubError {
    warn!("Timeline response has no 'results' list: {}", body);
    MountainHubError::MalformedResponse(body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_take_results() {
        let results = take_results(json!({"results": [{"a": 1}, {"b": 2}], "next": null})).unwrap();
        assert_eq!(results, vec![json!({"a": 1}), json!({"b": 2})]);
    }

    #[test]
    fn test_missing_results_keeps_body() {
        let body = json!({"error": "bad request"});
        match take_results(body.clone()) {
            Err(MountainHubError::MalformedResponse(v)) => assert_eq!(v, body),
            other => panic!("unexpected: {:?}", other),
        }
    }

    #[test]
    fn test_results_not_a_list() {
        let body = json!({"results": "nope"});
        match take_results(body.clone()) {
            Err(MountainHubError::MalformedResponse(v)) => assert_eq!(v, body),
            other => panic!("unexpected: {:?}", other),
        }
        assert!(matches!(
            take_results(json!([1, 2, 3])),
            Err(MountainHubError::MalformedResponse(_))
        ));
    }
}
