use super::coercion::{parse_int, parse_int_or_zero};
use super::{ContentValue, RecordContent};
use crate::RecordType;
use std::str::FromStr;
use tracing::debug;

const MX_FIELDS: usize = 2;
const CAA_MIN_FIELDS: usize = 3;
const SRV_FIELDS: usize = 4;

/// Decoder selected for a record type that is not routed to the SVCB grammar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentFormat {
    Mx,
    Caa,
    Srv,
    Any,
}

impl ContentFormat {
    /// Case-insensitive lookup; unknown names fall back to `Any`.
    pub fn for_record_type(record_type: &str) -> Self {
        match RecordType::from_str(record_type) {
            Ok(RecordType::MX) => ContentFormat::Mx,
            Ok(RecordType::CAA) => ContentFormat::Caa,
            Ok(RecordType::SRV) => ContentFormat::Srv,
            _ => ContentFormat::Any,
        }
    }

    pub fn decode(&self, raw: &str) -> Option<RecordContent> {
        match self {
            ContentFormat::Mx => decode_mx(raw),
            ContentFormat::Caa => decode_caa(raw),
            ContentFormat::Srv => decode_srv(raw),
            ContentFormat::Any => Some(decode_any(raw)),
        }
    }
}

fn fields(raw: &str) -> Vec<&str> {
    raw.split(' ').filter(|p| !p.is_empty()).collect()
}

/// `PRIORITY TARGET`; a non-integer priority yields nothing.
pub fn decode_mx(raw: &str) -> Option<RecordContent> {
    let parts = fields(raw);
    if parts.len() != MX_FIELDS {
        debug!(fields = parts.len(), "MX content needs exactly 2 fields");
        return None;
    }

    let priority = parse_int(parts[0])?;
    Some(RecordContent::new(vec![
        ContentValue::Int(priority),
        ContentValue::text(parts[1]),
    ]))
}

/// `FLAG TAG VALUE...`; the value keeps its inner spaces.
pub fn decode_caa(raw: &str) -> Option<RecordContent> {
    let parts = fields(raw);
    if parts.len() < CAA_MIN_FIELDS {
        debug!(fields = parts.len(), "CAA content needs at least 3 fields");
        return None;
    }

    Some(RecordContent::new(vec![
        ContentValue::Int(parse_int_or_zero(parts[0])),
        ContentValue::text(parts[1]),
        ContentValue::Text(parts[2..].join(" ")),
    ]))
}

/// `PRIORITY WEIGHT PORT TARGET`.
pub fn decode_srv(raw: &str) -> Option<RecordContent> {
    let parts = fields(raw);
    if parts.len() != SRV_FIELDS {
        debug!(fields = parts.len(), "SRV content needs exactly 4 fields");
        return None;
    }

    Some(RecordContent::new(vec![
        ContentValue::Int(parse_int_or_zero(parts[0])),
        ContentValue::Int(parse_int_or_zero(parts[1])),
        ContentValue::Int(parse_int_or_zero(parts[2])),
        ContentValue::text(parts[3]),
    ]))
}

pub fn decode_any(raw: &str) -> RecordContent {
    RecordContent::new(vec![ContentValue::text(raw)])
}
