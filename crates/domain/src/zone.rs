use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListZones {
    #[serde(default)]
    pub zones: Vec<Zone>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Zone {
    pub name: String,
    #[serde(default)]
    pub records: Vec<ZoneRecord>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ZoneRecord {
    pub name: String,
    #[serde(rename = "type")]
    pub record_type: String,
    pub ttl: u32,
    #[serde(default)]
    pub short_answers: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddZone {
    pub name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Strips a single trailing dot from a fully qualified name.
pub fn normalize_name(name: &str) -> &str {
    name.strip_suffix('.').unwrap_or(name)
}

/// True when `name` is the zone apex or a name below it.
pub fn is_in_zone(name: &str, zone: &str) -> bool {
    let name = normalize_name(name).to_ascii_lowercase();
    let zone = normalize_name(zone).to_ascii_lowercase();
    if zone.is_empty() {
        return false;
    }
    name == zone || name.ends_with(&format!(".{}", zone))
}
