pub mod location;
pub mod query_params;
pub mod raw_observation;
pub mod snow_query;
pub mod snow_record;
