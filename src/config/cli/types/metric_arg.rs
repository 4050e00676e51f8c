//! `key=value` metric arguments.

use serde_json::Value;

/// One metric given on the command line as `key=value`.
///
/// The value is read as JSON when it parses (`0.93`, `true`, `[1,2]`) and
/// kept as a plain string otherwise (`imdb`).
#[derive(Debug, Clone, PartialEq)]
pub struct MetricArg {
    pub key: String,
    pub value: Value,
}

impl std::str::FromStr for MetricArg {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (key, raw) = s
            .split_once('=')
            .ok_or_else(|| format!("Invalid metric '{s}': expected key=value"))?;
        let key = key.trim();
        if key.is_empty() {
            return Err(format!("Invalid metric '{s}': key must not be empty"));
        }

        let value = serde_json::from_str(raw).unwrap_or_else(|_| Value::String(raw.to_string()));
        Ok(MetricArg { key: key.to_string(), value })
    }
}
