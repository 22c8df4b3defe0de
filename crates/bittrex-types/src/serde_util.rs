//! Serde helpers for exchange timestamps.
//!
//! Bittrex sends times as naive ISO 8601 strings in UTC, e.g.
//! `"2014-07-09T07:19:30.15"`. The fractional part is sometimes missing and a
//! few endpoints append a `Z`.

const FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.f";

fn parse(raw: &str) -> Result<chrono::NaiveDateTime, chrono::ParseError> {
    chrono::NaiveDateTime::parse_from_str(raw.trim_end_matches('Z'), FORMAT)
}

/// `NaiveDateTime` as an exchange timestamp string.
pub mod timestamp {
    use chrono::NaiveDateTime;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(value: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&value.format(super::FORMAT).to_string())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDateTime, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        super::parse(&raw)
            .map_err(|e| serde::de::Error::custom(format!("Invalid timestamp {:?}: {}", raw, e)))
    }
}

/// Nullable variant of [`timestamp`]. Use together with `#[serde(default)]`.
pub mod timestamp_opt {
    use chrono::NaiveDateTime;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(value: &Option<NaiveDateTime>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            Some(value) => super::timestamp::serialize(value, serializer),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<NaiveDateTime>, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Option::<String>::deserialize(deserializer)? {
            Some(raw) => super::parse(&raw).map(Some).map_err(|e| {
                serde::de::Error::custom(format!("Invalid timestamp {:?}: {}", raw, e))
            }),
            None => Ok(None),
        }
    }
}
