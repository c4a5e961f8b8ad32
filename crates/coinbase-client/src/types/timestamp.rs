/*
[INPUT]:  ISO-8601 timestamp strings with explicit UTC offsets
[OUTPUT]: Instant-comparable Timestamp values that keep their original offset text
[POS]:    Data layer - timestamp codec
[UPDATE]: When the API changes its timestamp format
*/

use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use chrono::{DateTime, FixedOffset, Utc};
use serde::de::{self, Deserializer};
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};

use crate::http::{CoinbaseError, Result};

/// An instant in time plus the offset it was originally expressed in.
///
/// Comparison is on the absolute instant: `08:41:19-07:00` equals
/// `09:41:19-06:00`. Serialization reproduces the original text, so the
/// offset (including a literal `Z`) survives a decode/encode round trip.
#[derive(Debug, Clone)]
pub struct Timestamp {
    raw: String,
    instant: DateTime<FixedOffset>,
}

impl Timestamp {
    /// Parse an ISO-8601 timestamp with an explicit offset.
    pub fn parse(raw: &str) -> Result<Self> {
        raw.parse()
    }

    /// The absolute instant, with the original offset.
    pub fn instant(&self) -> DateTime<FixedOffset> {
        self.instant
    }

    /// The timestamp exactly as it appeared on the wire.
    pub fn as_str(&self) -> &str {
        &self.raw
    }
}

impl FromStr for Timestamp {
    type Err = CoinbaseError;

    fn from_str(raw: &str) -> Result<Self> {
        let instant = DateTime::parse_from_rfc3339(raw).map_err(|_| {
            CoinbaseError::MalformedTimestamp {
                raw: raw.to_string(),
            }
        })?;
        Ok(Self {
            raw: raw.to_string(),
            instant,
        })
    }
}

impl From<DateTime<FixedOffset>> for Timestamp {
    fn from(instant: DateTime<FixedOffset>) -> Self {
        Self {
            raw: instant.to_rfc3339(),
            instant,
        }
    }
}

impl From<DateTime<Utc>> for Timestamp {
    fn from(instant: DateTime<Utc>) -> Self {
        instant.fixed_offset().into()
    }
}

impl PartialEq for Timestamp {
    fn eq(&self, other: &Self) -> bool {
        self.instant == other.instant
    }
}

impl Eq for Timestamp {}

impl PartialOrd for Timestamp {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Timestamp {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.instant.cmp(&other.instant)
    }
}

impl Hash for Timestamp {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.instant.with_timezone(&Utc).hash(state);
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

impl Serialize for Timestamp {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.raw)
    }
}

impl<'de> Deserialize<'de> for Timestamp {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn equal_instants_with_different_offsets_compare_equal() {
        let pacific = Timestamp::parse("2014-05-07T08:41:19-07:00").unwrap();
        let mountain = Timestamp::parse("2014-05-07T09:41:19-06:00").unwrap();
        assert_eq!(pacific, mountain);
    }

    #[test]
    fn serialization_preserves_original_offset_text() {
        let pacific = Timestamp::parse("2014-05-07T08:41:19-07:00").unwrap();
        let mountain = Timestamp::parse("2014-05-07T09:41:19-06:00").unwrap();
        assert_eq!(
            serde_json::to_string(&pacific).unwrap(),
            "\"2014-05-07T08:41:19-07:00\""
        );
        assert_eq!(
            serde_json::to_string(&mountain).unwrap(),
            "\"2014-05-07T09:41:19-06:00\""
        );
    }

    #[test]
    fn zulu_offset_survives_round_trip() {
        let ts = Timestamp::parse("2014-05-07T15:41:19Z").unwrap();
        let text = serde_json::to_string(&ts).unwrap();
        assert_eq!(text, "\"2014-05-07T15:41:19Z\"");
        let back: Timestamp = serde_json::from_str(&text).unwrap();
        assert_eq!(back, ts);
    }

    #[rstest]
    #[case("2014-05-07")]
    #[case("2014-05-07T08:41:19")]
    #[case("not a timestamp")]
    #[case("")]
    fn rejects_timestamps_without_explicit_offset(#[case] raw: &str) {
        let err = Timestamp::parse(raw).expect_err("should fail");
        assert!(matches!(err, CoinbaseError::MalformedTimestamp { .. }));
    }

    #[test]
    fn ordering_follows_the_instant() {
        let earlier = Timestamp::parse("2013-02-27T23:28:18-08:00").unwrap();
        let later = Timestamp::parse("2013-03-05T18:00:00-08:00").unwrap();
        assert!(earlier < later);
    }

    #[test]
    fn construction_from_utc_formats_rfc3339() {
        let utc: DateTime<Utc> = "2014-05-07T15:41:19Z".parse().unwrap();
        let ts = Timestamp::from(utc);
        assert_eq!(ts, Timestamp::parse("2014-05-07T15:41:19Z").unwrap());
    }
}
