//! Attribute codec for schemaless columns.
//!
//! Tags and metrics live in TEXT columns as JSON. Encoding is total; decoding
//! is tolerant: a missing, empty or malformed payload yields the type's empty
//! default and a `warn` event, so a corrupted row degrades to "no tags" /
//! "no metrics" instead of failing the read.

use serde::de::DeserializeOwned;
use serde::Serialize;
use std::collections::BTreeMap;

/// Free-form metrics attached to a model version
pub type Metrics = BTreeMap<String, serde_json::Value>;

/// Serialize an attribute to its stored text form
pub fn encode<T: Serialize + ?Sized>(value: &T) -> String {
    serde_json::to_string(value).unwrap_or_default()
}

/// Deserialize a stored attribute, substituting `T::default()` on failure
pub fn decode_or_default<T>(raw: Option<&str>, column: &str) -> T
where
    T: DeserializeOwned + Default,
{
    let Some(raw) = raw.map(str::trim).filter(|s| !s.is_empty()) else {
        return T::default();
    };

    match serde_json::from_str(raw) {
        Ok(value) => value,
        Err(e) => {
            tracing::warn!(column, error = %e, "malformed stored attribute, using empty default");
            T::default()
        }
    }
}

/// Encode a tag list
pub fn encode_tags(tags: &[String]) -> String {
    encode(tags)
}

/// Decode a tag list, tolerating malformed payloads
pub fn decode_tags(raw: Option<&str>) -> Vec<String> {
    decode_or_default(raw, "tags")
}

/// Encode a metrics map
pub fn encode_metrics(metrics: &Metrics) -> String {
    encode(metrics)
}

/// Decode a metrics map, tolerating malformed payloads
pub fn decode_metrics(raw: Option<&str>) -> Metrics {
    decode_or_default(raw, "metrics")
}

/// Stored form of a single tag, used as a substring probe over encoded lists
pub fn tag_probe(tag: &str) -> String {
    encode(tag)
}
