//! Serde helper storing an optional `chrono::Duration` as whole seconds.

use chrono::Duration;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

pub fn serialize<S>(value: &Option<Duration>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    value.map(|d| d.num_seconds()).serialize(serializer)
}

pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<Duration>, D::Error>
where
    D: Deserializer<'de>,
{
    let secs = Option::<i64>::deserialize(deserializer)?;
    secs.map(|s| {
        Duration::try_seconds(s)
            .ok_or_else(|| serde::de::Error::custom(format!("duration out of range: {s}s")))
    })
    .transpose()
}
