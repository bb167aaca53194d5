use crate::record_content::{self, RecordContent};
use crate::record_meta::{MetaResult, RecordMeta};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use tracing::warn;

/// One record of an RRSet as exchanged with the management API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResourceRecord {
    #[serde(default)]
    pub content: RecordContent,

    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub meta: BTreeMap<String, Value>,

    #[serde(default = "default_enabled")]
    pub enabled: bool,
}

fn default_enabled() -> bool {
    true
}

impl Default for ResourceRecord {
    fn default() -> Self {
        Self {
            content: RecordContent::default(),
            meta: BTreeMap::new(),
            enabled: default_enabled(),
        }
    }
}

impl ResourceRecord {
    pub fn new(content: RecordContent) -> Self {
        Self {
            content,
            ..Self::default()
        }
    }

    /// Builds a record from presentation text; empty content when the text
    /// does not fit the record type.
    pub fn from_text(record_type: &str, raw: &str) -> Self {
        let mut record = Self::default();
        record.set_content(record_type, raw);
        record
    }

    pub fn set_content(&mut self, record_type: &str, raw: &str) -> &mut Self {
        self.content = record_content::decode(record_type, raw).unwrap_or_default();
        self
    }

    pub fn set_enabled(&mut self, enabled: bool) -> &mut Self {
        self.enabled = enabled;
        self
    }

    /// Last write wins for a repeated name. Blank entries are ignored.
    pub fn add_meta(&mut self, meta: RecordMeta) -> &mut Self {
        if meta.is_blank() {
            return self;
        }
        let (name, value) = meta.into_parts();
        self.meta.insert(name, value);
        self
    }

    /// Attaches the meta when the builder succeeded; a failure is dropped.
    pub fn try_add_meta(&mut self, meta: MetaResult) -> &mut Self {
        match meta {
            Ok(meta) => self.add_meta(meta),
            Err(e) => {
                warn!(error = %e, "Skipping invalid record meta");
                self
            }
        }
    }

    pub fn has_content(&self) -> bool {
        !self.content.is_empty()
    }

    pub fn content_string(&self) -> String {
        self.content.to_string()
    }
}
