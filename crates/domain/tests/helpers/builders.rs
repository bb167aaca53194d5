#![allow(dead_code)]
use zonectl_domain::{ContentValue, RecordContent};

/// Text element.
pub fn text(s: &str) -> ContentValue {
    ContentValue::text(s)
}

/// Parameter entry `[key, values...]` with text values.
pub fn entry(parts: &[&str]) -> ContentValue {
    ContentValue::List(parts.iter().map(|p| ContentValue::text(*p)).collect())
}

/// Parameter entry whose values are already typed.
pub fn entry_with(key: &str, values: Vec<ContentValue>) -> ContentValue {
    let mut items = vec![ContentValue::text(key)];
    items.extend(values);
    ContentValue::List(items)
}

pub fn content(values: Vec<ContentValue>) -> RecordContent {
    RecordContent::new(values)
}

pub struct ResourceRecordBuilder {
    record_type: String,
    value: String,
    enabled: bool,
}

impl ResourceRecordBuilder {
    pub fn new() -> Self {
        Self {
            record_type: "TXT".to_string(),
            value: "acme".to_string(),
            enabled: true,
        }
    }

    pub fn record_type(mut self, record_type: &str) -> Self {
        self.record_type = record_type.to_string();
        self
    }

    pub fn value(mut self, value: &str) -> Self {
        self.value = value.to_string();
        self
    }

    pub fn enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    pub fn build(self) -> zonectl_domain::ResourceRecord {
        let mut record = zonectl_domain::ResourceRecord::from_text(&self.record_type, &self.value);
        record.set_enabled(self.enabled);
        record
    }
}

impl Default for ResourceRecordBuilder {
    fn default() -> Self {
        Self::new()
    }
}
