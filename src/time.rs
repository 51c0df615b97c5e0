//! Conversions between wall-clock readings and epoch milliseconds.
//!
//! Both directions take the zone explicitly. A query built in one zone and a
//! response decoded in another will disagree, so the client keeps a single
//! zone and hands it to both.

use chrono::{DateTime, LocalResult, NaiveDateTime, Offset, TimeDelta, TimeZone};

/// Interprets `wall` in `tz` and returns whole epoch seconds times 1000.
///
/// Sub-second precision is discarded. Ambiguous readings (clocks turned back)
/// resolve to the earlier instant. Readings that fall in a gap (clocks turned
/// forward) use the offset in effect before the gap, which moves them forward.
pub fn wall_clock_to_millis<Tz: TimeZone>(tz: &Tz, wall: &NaiveDateTime) -> i64 {
    let seconds = match tz.from_local_datetime(wall) {
        LocalResult::Single(dt) => dt.timestamp(),
        LocalResult::Ambiguous(earliest, _) => earliest.timestamp(),
        LocalResult::None => {
            let before_gap = tz.offset_from_utc_datetime(&(*wall - TimeDelta::days(1)));
            let offset = i64::from(before_gap.fix().local_minus_utc());
            (*wall - TimeDelta::seconds(offset)).and_utc().timestamp()
        }
    };
    seconds * 1000
}

/// Converts epoch milliseconds to the wall-clock reading in `tz`, truncated to
/// whole seconds. `None` if the instant is outside chrono's range.
pub fn millis_to_wall_clock<Tz: TimeZone>(tz: &Tz, millis: i64) -> Option<NaiveDateTime> {
    DateTime::from_timestamp(millis.div_euclid(1000), 0)
        .map(|utc| utc.with_timezone(tz).naive_local())
}
