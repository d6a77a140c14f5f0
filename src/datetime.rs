//! Fixed-format date and time scalars used throughout the feed.
//!
//! The wire contract mandates exactly one text layout per scalar type
//! (https://developers.google.com/hotels/hotel-prices/xml-reference/datetime):
//! `YYYY-MM-DD` for dates, `HH:MM` for times of day and RFC 3339 for
//! timestamps. The formats are constants captured by the types below, so
//! there is no mutable process-wide format state to race on.

use std::fmt;
use std::str::FromStr;

use chrono::{FixedOffset, NaiveDate, NaiveTime, SecondsFormat};
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

use crate::error::FormatError;

/// Layout of a calendar date on the wire.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Layout of a time of day on the wire.
pub const TIME_FORMAT: &str = "%H:%M";

/// A calendar date with no time of day or zone, e.g. `2018-07-03`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Date(pub NaiveDate);

impl FromStr for Date {
    type Err = FormatError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        let reject = || FormatError {
            text: text.to_string(),
            format_name: "date",
            format: "YYYY-MM-DD",
        };
        let date = NaiveDate::parse_from_str(text, DATE_FORMAT).map_err(|_| reject())?;
        // chrono accepts unpadded fields ("2018-7-3"); the feed does not.
        if date.format(DATE_FORMAT).to_string() != text {
            return Err(reject());
        }
        Ok(Date(date))
    }
}

impl fmt::Display for Date {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(DATE_FORMAT))
    }
}

impl From<NaiveDate> for Date {
    fn from(date: NaiveDate) -> Self {
        Date(date)
    }
}

/// An instant with zone offset in RFC 3339 form, e.g.
/// `2017-07-23T16:20:00-04:00`. UTC instants are written with a `Z` suffix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DateTime(pub chrono::DateTime<FixedOffset>);

impl FromStr for DateTime {
    type Err = FormatError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        chrono::DateTime::parse_from_rfc3339(text)
            .map(DateTime)
            .map_err(|_| FormatError {
                text: text.to_string(),
                format_name: "datetime",
                format: "RFC 3339",
            })
    }
}

impl fmt::Display for DateTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.to_rfc3339_opts(SecondsFormat::Secs, true))
    }
}

impl From<chrono::DateTime<FixedOffset>> for DateTime {
    fn from(instant: chrono::DateTime<FixedOffset>) -> Self {
        DateTime(instant)
    }
}

/// A time of day in the local time of the hotel, e.g. `16:00`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimeOfDay(pub NaiveTime);

impl FromStr for TimeOfDay {
    type Err = FormatError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        let reject = || FormatError {
            text: text.to_string(),
            format_name: "time",
            format: "HH:MM",
        };
        let time = NaiveTime::parse_from_str(text, TIME_FORMAT).map_err(|_| reject())?;
        if time.format(TIME_FORMAT).to_string() != text {
            return Err(reject());
        }
        Ok(TimeOfDay(time))
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(TIME_FORMAT))
    }
}

impl From<NaiveTime> for TimeOfDay {
    fn from(time: NaiveTime) -> Self {
        TimeOfDay(time)
    }
}

// The scalars travel both as element text and as attribute values, so serde
// support delegates to the Display/FromStr codecs above.
macro_rules! impl_scalar_serde {
    ($type:ty) => {
        impl Serialize for $type {
            fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.collect_str(self)
            }
        }

        impl<'de> Deserialize<'de> for $type {
            fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                let text = String::deserialize(deserializer)?;
                text.parse().map_err(de::Error::custom)
            }
        }
    };
}

impl_scalar_serde!(Date);
impl_scalar_serde!(DateTime);
impl_scalar_serde!(TimeOfDay);

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test]
    fn parse_date() {
        let date: Date = "2018-07-03".parse().unwrap();
        assert_eq!(date.0, NaiveDate::from_ymd_opt(2018, 7, 3).unwrap());
        assert_eq!(date.to_string(), "2018-07-03");
    }

    #[test_case("2018/07/03"; "wrong separator")]
    #[test_case("07-03-2018"; "wrong field order")]
    #[test_case("2018-7-3"; "unpadded fields")]
    #[test_case("2018-07-03 "; "trailing whitespace")]
    #[test_case("2018-07-03T00:00:00Z"; "datetime instead of date")]
    #[test_case("2018-13-01"; "month out of range")]
    #[test_case(""; "empty")]
    fn reject_malformed_date(text: &str) {
        let err = text.parse::<Date>().unwrap_err();
        assert_eq!(err.text, text);
        assert_eq!(err.format_name, "date");
    }

    #[test]
    fn date_round_trip() {
        for text in ["2018-07-03", "2020-02-29", "1999-12-31"] {
            let date: Date = text.parse().unwrap();
            assert_eq!(date.to_string(), text);
            assert_eq!(date.to_string().parse::<Date>().unwrap(), date);
        }
    }

    #[test]
    fn parse_datetime_utc() {
        let ts: DateTime = "2019-06-03T22:59:48Z".parse().unwrap();
        assert_eq!(ts.to_string(), "2019-06-03T22:59:48Z");
    }

    #[test]
    fn parse_datetime_keeps_offset() {
        let ts: DateTime = "2017-07-23T16:20:00-04:00".parse().unwrap();
        assert_eq!(ts.0.offset().local_minus_utc(), -4 * 3600);
        assert_eq!(ts.to_string(), "2017-07-23T16:20:00-04:00");
    }

    #[test_case("2019-06-03 22:59:48Z"; "space separator")]
    #[test_case("2019-06-03T22:59:48"; "missing offset")]
    #[test_case("2019-06-03"; "date only")]
    #[test_case("22:59:48Z"; "time only")]
    fn reject_malformed_datetime(text: &str) {
        let err = text.parse::<DateTime>().unwrap_err();
        assert_eq!(err.format_name, "datetime");
    }

    #[test]
    fn datetime_round_trip() {
        for text in ["2019-06-03T22:59:48Z", "2020-07-23T16:20:00-04:00"] {
            let ts: DateTime = text.parse().unwrap();
            assert_eq!(ts.to_string().parse::<DateTime>().unwrap(), ts);
        }
    }

    #[test]
    fn parse_time_of_day() {
        let time: TimeOfDay = "16:00".parse().unwrap();
        assert_eq!(time.0, NaiveTime::from_hms_opt(16, 0, 0).unwrap());
        assert_eq!(time.to_string(), "16:00");
    }

    #[test_case("4:00 PM"; "twelve hour clock")]
    #[test_case("16:00:00"; "with seconds")]
    #[test_case("24:00"; "hour out of range")]
    fn reject_malformed_time(text: &str) {
        let err = text.parse::<TimeOfDay>().unwrap_err();
        assert_eq!(err.format_name, "time");
    }
}
