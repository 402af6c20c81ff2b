//! Lenient field deserializers.
//!
//! Browser forms frequently submit numeric fields as strings (`"3"` instead of `3`), so
//! integer fields in request bodies accept either shape.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

pub fn deserialize_opt_i64_lax<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let v = Option::<Value>::deserialize(deserializer)?;

    match v {
        None | Some(Value::Null) => Ok(None),
        Some(Value::Number(n)) => n
            .as_i64()
            .map(Some)
            .ok_or_else(|| serde::de::Error::custom("expected an integer")),
        Some(Value::String(s)) => s
            .trim()
            .parse::<i64>()
            .map(Some)
            .map_err(|_| serde::de::Error::custom("expected an integer or a numeric string")),
        Some(_) => Err(serde::de::Error::custom(
            "expected an integer or a numeric string",
        )),
    }
}
