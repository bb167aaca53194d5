//! Named annotations attached to a resource record (`ip`, `asn`, `latlong`,
//! ...). Each builder validates its own input and returns either a meta entry
//! or the reason it could not be built.

use serde_json::{json, Value};
use std::collections::{BTreeMap, HashMap};
use std::net::IpAddr;
use std::num::ParseFloatError;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum MetaError {
    #[error("wrong ip")]
    InvalidIp,

    #[error("latlong invalid format")]
    LatLongFormat,

    #[error("lat is invalid: {0}")]
    InvalidLatitude(#[source] ParseFloatError),

    #[error("long is invalid: {0}")]
    InvalidLongitude(#[source] ParseFloatError),

    #[error("lat is invalid: {0} is not a finite number")]
    NonFiniteLatitude(f64),

    #[error("long is invalid: {0} is not a finite number")]
    NonFiniteLongitude(f64),

    #[error("cidrLabels is empty")]
    EmptyCidrLabels,

    #[error("cidrLabels key or value is empty")]
    InvalidCidrLabel,
}

pub type MetaResult = Result<RecordMeta, MetaError>;

#[derive(Debug, Clone, PartialEq)]
pub struct RecordMeta {
    name: String,
    value: Value,
}

impl RecordMeta {
    pub fn new(name: impl Into<String>, value: impl Into<Value>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn value(&self) -> &Value {
        &self.value
    }

    pub fn into_parts(self) -> (String, Value) {
        (self.name, self.value)
    }

    /// Entries with no name, a null value or an empty string value are
    /// never attached.
    pub fn is_blank(&self) -> bool {
        self.name.is_empty() || self.value.is_null() || self.value.as_str() == Some("")
    }

    /// Every entry must parse as an IPv4 or IPv6 address.
    pub fn ip<S: AsRef<str>>(ips: &[S]) -> MetaResult {
        if ips.iter().any(|ip| ip.as_ref().parse::<IpAddr>().is_err()) {
            return Err(MetaError::InvalidIp);
        }
        let ips: Vec<&str> = ips.iter().map(AsRef::as_ref).collect();
        Ok(Self::new("ip", json!(ips)))
    }

    pub fn asn(asns: &[u64]) -> MetaResult {
        Ok(Self::new("asn", json!(asns)))
    }

    /// Accepts `lat,long` optionally wrapped in `()`, `[]` or `{}`; spaces
    /// anywhere are ignored.
    pub fn latlong(latlong: &str) -> MetaResult {
        let trimmed = latlong
            .trim_start_matches(['(', '[', '{'])
            .trim_end_matches([')', ']', '}'])
            .replace(' ', "");

        let parts: Vec<&str> = trimmed.split(',').collect();
        let [lat, long] = parts.as_slice() else {
            return Err(MetaError::LatLongFormat);
        };

        let lat: f64 = lat.parse().map_err(MetaError::InvalidLatitude)?;
        let long: f64 = long.parse().map_err(MetaError::InvalidLongitude)?;
        if !lat.is_finite() {
            return Err(MetaError::NonFiniteLatitude(lat));
        }
        if !long.is_finite() {
            return Err(MetaError::NonFiniteLongitude(long));
        }

        Ok(Self::new("latlong", json!([lat, long])))
    }

    pub fn notes<S: AsRef<str>>(notes: &[S]) -> MetaResult {
        Ok(Self::new("notes", string_list(notes)))
    }

    pub fn countries<S: AsRef<str>>(countries: &[S]) -> MetaResult {
        Ok(Self::new("countries", string_list(countries)))
    }

    pub fn continents<S: AsRef<str>>(continents: &[S]) -> MetaResult {
        Ok(Self::new("continents", string_list(continents)))
    }

    pub fn default_flag() -> MetaResult {
        Ok(Self::new("default", true))
    }

    /// Non-empty map of non-empty labels to non-negative weights.
    pub fn cidr_labels(labels: &HashMap<String, i64>) -> MetaResult {
        if labels.is_empty() {
            return Err(MetaError::EmptyCidrLabels);
        }
        if labels.iter().any(|(label, weight)| label.is_empty() || *weight < 0) {
            return Err(MetaError::InvalidCidrLabel);
        }

        let ordered: BTreeMap<&str, i64> =
            labels.iter().map(|(k, v)| (k.as_str(), *v)).collect();
        Ok(Self::new("cidr_labels", json!(ordered)))
    }
}

fn string_list<S: AsRef<str>>(items: &[S]) -> Value {
    Value::Array(
        items
            .iter()
            .map(|s| Value::String(s.as_ref().to_string()))
            .collect(),
    )
}
