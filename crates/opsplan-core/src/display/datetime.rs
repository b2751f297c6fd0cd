//! Timestamp rendering for plan output.

use std::fmt;

use jiff::{tz::TimeZone, Timestamp};

/// Renders a stored UTC timestamp in the operator's local timezone.
///
/// Plans are read at a console during a shift, so wall-clock local time
/// with a timezone abbreviation (`YYYY-MM-DD HH:MM:SS TZ`) reads better
/// than the RFC 3339 form the database stores.
pub struct LocalDateTime<'a>(pub &'a Timestamp);

impl<'a> fmt::Display for LocalDateTime<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            self.0
                .to_zoned(TimeZone::system())
                .strftime("%Y-%m-%d %H:%M:%S %Z")
        )
    }
}
