//! Caller-supplied filter options for a snow data request.

use crate::types::location::BoundingBox;
use bon::Builder;
use chrono::NaiveDateTime;

pub const DEFAULT_LIMIT: u32 = 100;

/// Filter options for one timeline request.
///
/// `start` and `end` are wall-clock readings; they are interpreted in the
/// time zone of the [`crate::MountainHub`] client that sends the query.
///
/// # Examples
///
/// ```
/// use mountainhub::{BoundingBox, SnowQuery};
/// use chrono::NaiveDate;
///
/// let query = SnowQuery::builder()
///     .limit(20)
///     .start(NaiveDate::from_ymd_opt(2021, 1, 1).unwrap().and_hms_opt(0, 0, 0).unwrap())
///     .bounding_box(BoundingBox::new(39.0, 40.0, -106.0, -105.0))
///     .build();
///
/// assert_eq!(query.limit, 20);
/// assert!(query.end.is_none());
/// assert!(query.filter);
/// ```
#[derive(Debug, Clone, PartialEq, Builder)]
pub struct SnowQuery {
    /// Maximum number of observations to request. Not bounded client side.
    #[builder(default = DEFAULT_LIMIT)]
    pub limit: u32,
    pub start: Option<NaiveDateTime>,
    pub end: Option<NaiveDateTime>,
    pub bounding_box: Option<BoundingBox>,
    /// Drop rows that have any absent field.
    #[builder(default = true)]
    pub filter: bool,
}

impl Default for SnowQuery {
    fn default() -> Self {
        SnowQuery::builder().build()
    }
}
