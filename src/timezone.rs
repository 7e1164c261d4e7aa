use time::{OffsetDateTime, UtcOffset};
use time_tz::{Offset, TimeZone, Tz};

use crate::Error;

/// Get the timezone for a canonical timezone name, e.g. "Pacific/Auckland".
pub fn get_timezone(canonical_timezone: &str) -> Option<&'static Tz> {
    time_tz::timezones::get_by_name(canonical_timezone)
}

/// Like [get_timezone], but logs and returns an error for unknown names.
pub fn resolve_timezone(canonical_timezone: &str) -> Result<&'static Tz, Error> {
    get_timezone(canonical_timezone).ok_or_else(|| {
        tracing::error!("Invalid timezone {}", canonical_timezone);
        Error::InvalidTimezone(canonical_timezone.to_owned())
    })
}

/// The UTC offset `timezone` had at `timestamp`, daylight saving included.
pub fn offset_at(timezone: &Tz, timestamp: OffsetDateTime) -> UtcOffset {
    timezone.get_offset_utc(&timestamp).to_utc()
}

#[cfg(test)]
mod tests {
    use time::{UtcOffset, macros::datetime};

    use crate::Error;

    use super::{get_timezone, offset_at, resolve_timezone};

    #[test]
    fn utc_has_zero_offset() {
        let utc = get_timezone("Etc/UTC").unwrap();

        assert_eq!(
            offset_at(utc, datetime!(2020-04-20 18:22:01 UTC)),
            UtcOffset::UTC
        );
    }

    #[test]
    fn offset_follows_daylight_saving() {
        let auckland = resolve_timezone("Pacific/Auckland").unwrap();

        assert_eq!(
            offset_at(auckland, datetime!(2020-01-15 11:30 UTC)),
            UtcOffset::from_hms(13, 0, 0).unwrap()
        );
        assert_eq!(
            offset_at(auckland, datetime!(2020-06-30 11:30 UTC)),
            UtcOffset::from_hms(12, 0, 0).unwrap()
        );
    }

    #[test]
    fn unknown_timezone_is_an_error() {
        assert_eq!(
            resolve_timezone("Mars/Olympus_Mons"),
            Err(Error::InvalidTimezone("Mars/Olympus_Mons".to_owned()))
        );
    }
}
