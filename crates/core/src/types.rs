/// All database primary keys are PostgreSQL BIGSERIAL.
pub type DbId = i64;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;

/// Serde helper rendering a [`Timestamp`] with millisecond precision and a
/// `Z` suffix, e.g. `2020-10-16T05:03:00.000Z`.
///
/// Use with `#[serde(serialize_with = "ncnews_core::types::serialize_millis")]`.
pub fn serialize_millis<S>(ts: &Timestamp, serializer: S) -> Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    serializer.collect_str(&ts.format("%Y-%m-%dT%H:%M:%S%.3fZ"))
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;
    use serde::Serialize;

    use super::*;

    #[derive(Serialize)]
    struct Wrapper {
        #[serde(serialize_with = "serialize_millis")]
        at: Timestamp,
    }

    #[test]
    fn whole_seconds_get_three_zero_millis() {
        let at = chrono::Utc.with_ymd_and_hms(2020, 10, 16, 5, 3, 0).unwrap();
        let json = serde_json::to_value(Wrapper { at }).unwrap();
        assert_eq!(json["at"], "2020-10-16T05:03:00.000Z");
    }

    #[test]
    fn sub_second_precision_is_truncated_to_millis() {
        let at = chrono::Utc.timestamp_micros(1_594_325_460_123_456).unwrap();
        let json = serde_json::to_value(Wrapper { at }).unwrap();
        assert_eq!(json["at"], "2020-07-09T20:11:00.123Z");
    }
}
