//! This module provides the main entry point for fetching MountainHub snow
//! observations. A [`MountainHub`] client builds the timeline query, sends
//! it, and normalizes the response into a [`SnowTable`].

use crate::error::MountainHubError;
use crate::normalize::observation::normalize_observation;
use crate::params::build_query_params;
use crate::table::SnowTable;
use crate::transport::http::HttpTransport;
use crate::transport::{take_results, Transport};
use crate::types::location::BoundingBox;
use crate::types::snow_query::{SnowQuery, DEFAULT_LIMIT};
use crate::types::snow_record::SnowRecord;
use bon::bon;
use chrono::{Local, NaiveDateTime, TimeZone};
use log::{info, warn};

/// The client for the MountainHub timeline API.
///
/// The client owns one time zone. Query bounds are read as wall-clock times in
/// that zone, and the `date` of every returned record is expressed in it.
/// [`MountainHub::new`] uses the host's local zone.
///
/// # Examples
///
/// ```no_run
/// # use mountainhub::{MountainHub, MountainHubError};
/// # fn main() -> Result<(), MountainHubError> {
/// let client = MountainHub::new()?;
/// let table = client.snow_data().limit(10).call()?;
/// println!("{}", table.to_dataframe()?);
/// # Ok(())
/// # }
/// ```
pub struct MountainHub<Tz: TimeZone = Local> {
    timezone: Tz,
    transport: Box<dyn Transport>,
}

impl MountainHub<Local> {
    /// Creates a client for the public endpoint using the host's local zone.
    ///
    /// # Errors
    ///
    /// Returns [`MountainHubError::ClientBuild`] if the HTTP client cannot be created.
    pub fn new() -> Result<Self, MountainHubError> {
        Self::with_timezone(Local)
    }
}

#[bon]
impl<Tz: TimeZone> MountainHub<Tz> {
    /// Creates a client for the public endpoint with an explicit time zone.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// # use mountainhub::{MountainHub, MountainHubError};
    /// use chrono::FixedOffset;
    /// # fn main() -> Result<(), MountainHubError> {
    /// let mountain_standard = FixedOffset::west_opt(7 * 3600).unwrap();
    /// let client = MountainHub::with_timezone(mountain_standard)?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn with_timezone(timezone: Tz) -> Result<Self, MountainHubError> {
        Ok(Self::with_transport(timezone, HttpTransport::new()?))
    }

    /// Creates a client that sends its requests through `transport`.
    pub fn with_transport(timezone: Tz, transport: impl Transport + 'static) -> Self {
        Self {
            timezone,
            transport: Box::new(transport),
        }
    }

    pub fn timezone(&self) -> &Tz {
        &self.timezone
    }

    /// Fetches snow observations.
    ///
    /// This method uses a builder pattern.
    ///
    /// # Arguments
    ///
    /// * `.limit(u32)`: Optional. Maximum number of observations to request. Defaults to `100`.
    /// * `.start(NaiveDateTime)`: Optional. Only observations reported from this wall-clock time on.
    /// * `.end(NaiveDateTime)`: Optional. Only observations reported before this wall-clock time.
    /// * `.bounding_box(BoundingBox)`: Optional. Only observations inside this area.
    /// * `.filter(bool)`: Optional. Drop observations with a missing author or snow depth. Defaults to `true`.
    ///
    /// # Errors
    ///
    /// * [`MountainHubError::Request`] if the request fails or the body is not JSON.
    /// * [`MountainHubError::MalformedResponse`] if the body has no `results` list.
    /// * [`MountainHubError::MalformedRecord`] for the first observation missing a required field.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// # use mountainhub::{BoundingBox, LatLon, MountainHub, MountainHubError};
    /// use chrono::NaiveDate;
    /// # fn main() -> Result<(), MountainHubError> {
    /// let client = MountainHub::new()?;
    /// let table = client
    ///     .snow_data()
    ///     .limit(500)
    ///     .start(NaiveDate::from_ymd_opt(2021, 1, 1).unwrap().and_hms_opt(0, 0, 0).unwrap())
    ///     .bounding_box(BoundingBox::from_corners(LatLon(39.0, -106.5), LatLon(40.5, -105.0)))
    ///     .filter(false)
    ///     .call()?;
    /// println!("{} observations", table.len());
    /// # Ok(())
    /// # }
    /// ```
    #[builder]
    pub fn snow_data(
        &self,
        #[builder(default = DEFAULT_LIMIT)] limit: u32,
        start: Option<NaiveDateTime>,
        end: Option<NaiveDateTime>,
        bounding_box: Option<BoundingBox>,
        #[builder(default = true)] filter: bool,
    ) -> Result<SnowTable, MountainHubError> {
        self.fetch(&SnowQuery {
            limit,
            start,
            end,
            bounding_box,
            filter,
        })
    }

    /// Runs one query; the non-builder form of [`MountainHub::snow_data`].
    pub fn fetch(&self, query: &SnowQuery) -> Result<SnowTable, MountainHubError> {
        let params = build_query_params(query, &self.timezone);
        let body = self.transport.get_timeline(&params)?;
        let results = take_results(body)?;
        info!("Received {} snow observations", results.len());

        let records = results
            .into_iter()
            .enumerate()
            .map(|(index, value)| {
                normalize_observation(value, &self.timezone).map_err(|source| {
                    warn!("Observation {} is malformed: {}", index, source);
                    MountainHubError::MalformedRecord { index, source }
                })
            })
            .collect::<Result<Vec<SnowRecord>, MountainHubError>>()?;

        let table = SnowTable::assemble(records, query.filter);
        info!("Returning {} snow observations", table.len());
        Ok(table)
    }
}
