mod error;
mod mountainhub;
mod normalize;
mod params;
mod table;
mod time;
mod transport;
mod types;

pub use error::MountainHubError;
pub use mountainhub::*;

pub use normalize::error::RecordError;
pub use normalize::observation::{normalize_observation, AUTHOR_NAME_KEYS};
pub use params::build_query_params;
pub use table::*;
pub use time::{millis_to_wall_clock, wall_clock_to_millis};
pub use transport::http::HttpTransport;
pub use transport::{take_results, Transport, ACCEPT_VERSION, ACCEPT_VERSION_HEADER, TIMELINE_URL};

pub use types::location::{BoundingBox, LatLon};
pub use types::query_params::{QueryParams, QueryValue};
pub use types::raw_observation::{ObservationBody, RawObservation};
pub use types::snow_query::{SnowQuery, DEFAULT_LIMIT};
pub use types::snow_record::SnowRecord;
