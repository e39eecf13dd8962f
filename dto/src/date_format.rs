//! Dates exchanged with the backend come either as plain `YYYY-MM-DD` values (form inputs)
//! or as RFC 3339 timestamps (stored records). Both shapes are accepted everywhere.

use chrono::{DateTime, NaiveDate, NaiveTime, SecondsFormat, Utc};

pub const DATE_FORMAT: &str = "%Y-%m-%d";
const ITALIAN_DATE_FORMAT: &str = "%-d/%-m/%Y";

/// Parse a date, ignoring the time part of a timestamp.
pub fn parse_date(value: &str) -> Option<NaiveDate> {
    let value = value.trim();
    NaiveDate::parse_from_str(value, DATE_FORMAT)
        .ok()
        .or_else(|| {
            DateTime::parse_from_rfc3339(value)
                .ok()
                .map(|date_time| date_time.with_timezone(&Utc).date_naive())
        })
}

/// Parse an instant. A plain date is read as midnight UTC.
pub fn parse_datetime(value: &str) -> Option<DateTime<Utc>> {
    let value = value.trim();
    DateTime::parse_from_rfc3339(value)
        .ok()
        .map(|date_time| date_time.with_timezone(&Utc))
        .or_else(|| {
            NaiveDate::parse_from_str(value, DATE_FORMAT)
                .ok()
                .map(start_of_day)
        })
}

pub fn start_of_day(date: NaiveDate) -> DateTime<Utc> {
    date.and_time(NaiveTime::MIN).and_utc()
}

/// Short Italian rendering of a date, e.g. `15/2/2024`.
pub fn format_date(date: &NaiveDate) -> String {
    date.format(ITALIAN_DATE_FORMAT).to_string()
}

fn format_datetime(date_time: &DateTime<Utc>) -> String {
    date_time.to_rfc3339_opts(SecondsFormat::Millis, true)
}

pub mod option_naive_date {
    use super::{DATE_FORMAT, parse_date};
    use chrono::NaiveDate;
    use serde::de::Error;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(
        date: &Option<NaiveDate>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        match date {
            Some(date) => serializer.serialize_some(&date.format(DATE_FORMAT).to_string()),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<NaiveDate>, D::Error> {
        match Option::<String>::deserialize(deserializer)? {
            None => Ok(None),
            Some(value) if value.trim().is_empty() => Ok(None),
            Some(value) => parse_date(&value)
                .map(Some)
                .ok_or_else(|| D::Error::custom(format!("invalid date: {value}"))),
        }
    }
}

pub mod option_utc_datetime {
    use super::{format_datetime, parse_datetime};
    use chrono::{DateTime, Utc};
    use serde::de::Error;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(
        date_time: &Option<DateTime<Utc>>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        match date_time {
            Some(date_time) => serializer.serialize_some(&format_datetime(date_time)),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<DateTime<Utc>>, D::Error> {
        match Option::<String>::deserialize(deserializer)? {
            None => Ok(None),
            Some(value) if value.trim().is_empty() => Ok(None),
            Some(value) => parse_datetime(&value)
                .map(Some)
                .ok_or_else(|| D::Error::custom(format!("invalid date: {value}"))),
        }
    }
}
