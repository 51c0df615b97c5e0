//! Builds the timeline query string from a [`SnowQuery`].

use crate::time::wall_clock_to_millis;
use crate::types::query_params::QueryParams;
use crate::types::snow_query::SnowQuery;
use chrono::TimeZone;

pub const PUBLISHER: &str = "all";
pub const OBS_TYPE_SNOW: &str = "snow_conditions";

pub const KEY_PUBLISHER: &str = "publisher";
pub const KEY_OBS_TYPE: &str = "obs_type";
pub const KEY_LIMIT: &str = "limit";
pub const KEY_SINCE: &str = "since";
pub const KEY_BEFORE: &str = "before";
pub const KEY_NORTH_EAST_LAT: &str = "north_east_lat";
pub const KEY_NORTH_EAST_LNG: &str = "north_east_lng";
pub const KEY_SOUTH_WEST_LAT: &str = "south_west_lat";
pub const KEY_SOUTH_WEST_LNG: &str = "south_west_lng";

/// Converts filter options into query parameters, omitting unset options.
///
/// `start` and `end` are read as wall-clock times in `tz`.
pub fn build_query_params<Tz: TimeZone>(query: &SnowQuery, tz: &Tz) -> QueryParams {
    let mut params = QueryParams::new();
    params.insert(KEY_PUBLISHER, PUBLISHER);
    params.insert(KEY_OBS_TYPE, OBS_TYPE_SNOW);
    params.insert(KEY_LIMIT, query.limit);
    params.insert_opt(KEY_SINCE, query.start.map(|s| wall_clock_to_millis(tz, &s)));
    params.insert_opt(KEY_BEFORE, query.end.map(|e| wall_clock_to_millis(tz, &e)));

    if let Some(bbox) = query.bounding_box {
        params.insert(KEY_NORTH_EAST_LAT, bbox.max_lat);
        params.insert(KEY_NORTH_EAST_LNG, bbox.max_lon);
        params.insert(KEY_SOUTH_WEST_LAT, bbox.min_lat);
        params.insert(KEY_SOUTH_WEST_LNG, bbox.min_lon);
    }
    params
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::location::BoundingBox;
    use crate::types::query_params::QueryValue;
    use chrono::{FixedOffset, NaiveDate, Utc};

    const BOX_KEYS: [&str; 4] = [
        KEY_NORTH_EAST_LAT,
        KEY_NORTH_EAST_LNG,
        KEY_SOUTH_WEST_LAT,
        KEY_SOUTH_WEST_LNG,
    ];

    #[test]
    fn test_defaults_only_fixed_keys() {
        let params = build_query_params(&SnowQuery::default(), &Utc);
        let keys: Vec<_> = params.keys().collect();
        assert_eq!(keys, vec!["limit", "obs_type", "publisher"]);
        assert_eq!(params.get("publisher"), Some(&QueryValue::from("all")));
        assert_eq!(
            params.get("obs_type"),
            Some(&QueryValue::from("snow_conditions"))
        );
        assert_eq!(params.get("limit"), Some(&QueryValue::Integer(100)));
    }

    #[test]
    fn test_no_time_keys_without_range() {
        for limit in [1, 100, 10_000] {
            let query = SnowQuery::builder()
                .limit(limit)
                .bounding_box(BoundingBox::new(1.0, 2.0, 3.0, 4.0))
                .build();
            let params = build_query_params(&query, &Utc);
            assert!(!params.contains_key(KEY_SINCE));
            assert!(!params.contains_key(KEY_BEFORE));
            assert_eq!(params.get("limit"), Some(&QueryValue::Integer(i64::from(limit))));
        }
    }

    #[test]
    fn test_time_range_in_zone() {
        let start = NaiveDate::from_ymd_opt(2021, 1, 1)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap();
        let end = NaiveDate::from_ymd_opt(2021, 2, 1)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap();
        let query = SnowQuery::builder().start(start).end(end).build();

        let utc = build_query_params(&query, &Utc);
        assert_eq!(utc.get(KEY_SINCE), Some(&QueryValue::Integer(1_609_459_200_000)));
        assert_eq!(utc.get(KEY_BEFORE), Some(&QueryValue::Integer(1_612_137_600_000)));

        let mst = build_query_params(&query, &FixedOffset::west_opt(7 * 3600).unwrap());
        assert_eq!(mst.get(KEY_SINCE), Some(&QueryValue::Integer(1_609_484_400_000)));
    }

    #[test]
    fn test_bounding_box_keys() {
        let boxes = [
            BoundingBox::new(39.0, 40.5, -106.25, -105.0),
            BoundingBox::new(-45.5, -44.0, 168.0, 169.75),
            BoundingBox::new(0.0, 0.0, 0.0, 0.0),
        ];
        for bbox in boxes {
            let query = SnowQuery::builder().bounding_box(bbox).build();
            let params = build_query_params(&query, &Utc);
            assert_eq!(params.get(KEY_NORTH_EAST_LAT), Some(&QueryValue::Float(bbox.max_lat)));
            assert_eq!(params.get(KEY_NORTH_EAST_LNG), Some(&QueryValue::Float(bbox.max_lon)));
            assert_eq!(params.get(KEY_SOUTH_WEST_LAT), Some(&QueryValue::Float(bbox.min_lat)));
            assert_eq!(params.get(KEY_SOUTH_WEST_LNG), Some(&QueryValue::Float(bbox.min_lon)));
            // fixed keys + limit + four corners
            assert_eq!(params.len(), 7);
        }
    }

    #[test]
    fn test_no_box_keys_without_box() {
        let params = build_query_params(&SnowQuery::default(), &Utc);
        assert!(BOX_KEYS.iter().all(|k| !params.contains_key(k)));
    }
}
