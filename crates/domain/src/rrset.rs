use crate::dns_record::ResourceRecord;
use crate::errors::DomainError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FilterType {
    #[serde(rename = "geodns")]
    GeoDns,
    #[serde(rename = "geodistance")]
    GeoDistance,
    #[serde(rename = "default")]
    Default,
    #[serde(rename = "first_n")]
    FirstN,
}

impl FilterType {
    pub fn as_str(&self) -> &'static str {
        match self {
            FilterType::GeoDns => "geodns",
            FilterType::GeoDistance => "geodistance",
            FilterType::Default => "default",
            FilterType::FirstN => "first_n",
        }
    }
}

impl FromStr for FilterType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "geodns" => Ok(FilterType::GeoDns),
            "geodistance" => Ok(FilterType::GeoDistance),
            "default" => Ok(FilterType::Default),
            "first_n" => Ok(FilterType::FirstN),
            _ => Err(DomainError::InvalidFilterType(s.to_string())),
        }
    }
}

/// Server-side answer selection applied to an RRSet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordFilter {
    pub limit: u32,
    #[serde(rename = "type")]
    pub filter_type: FilterType,
    pub strict: bool,
}

impl RecordFilter {
    pub fn new(filter_type: FilterType, limit: u32, strict: bool) -> Self {
        Self {
            limit,
            filter_type,
            strict,
        }
    }

    pub fn geodns(limit: u32, strict: bool) -> Self {
        Self::new(FilterType::GeoDns, limit, strict)
    }

    pub fn geodistance(limit: u32, strict: bool) -> Self {
        Self::new(FilterType::GeoDistance, limit, strict)
    }

    pub fn default_filter(limit: u32, strict: bool) -> Self {
        Self::new(FilterType::Default, limit, strict)
    }

    pub fn first_n(limit: u32, strict: bool) -> Self {
        Self::new(FilterType::FirstN, limit, strict)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RRSet {
    #[serde(rename = "type", default, skip_serializing_if = "String::is_empty")]
    pub record_type: String,

    #[serde(default)]
    pub ttl: u32,

    #[serde(rename = "resource_records", default)]
    pub records: Vec<ResourceRecord>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub filters: Vec<RecordFilter>,
}

impl RRSet {
    pub fn new(ttl: u32, records: Vec<ResourceRecord>) -> Self {
        Self {
            ttl,
            records,
            ..Self::default()
        }
    }

    pub fn add_filter(&mut self, filters: impl IntoIterator<Item = RecordFilter>) -> &mut Self {
        self.filters.extend(filters);
        self
    }

    pub fn is_type(&self, record_type: &str) -> bool {
        self.record_type.eq_ignore_ascii_case(record_type)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RRSets {
    #[serde(default)]
    pub rrsets: Vec<RRSet>,
}
