use serde::{Deserialize, Serialize};
use std::fmt;

/// One element of a record's content.
///
/// Serializes untagged, so a content sequence travels as a plain JSON array
/// whose nested arrays are SVCB parameter entries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ContentValue {
    Bool(bool),
    U16(u16),
    Int(i64),
    /// Integers above `i64::MAX`; only produced when deserializing.
    U64(u64),
    Float(f64),
    Text(String),
    List(Vec<ContentValue>),
}

impl ContentValue {
    pub fn text(s: impl Into<String>) -> Self {
        ContentValue::Text(s.into())
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            ContentValue::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[ContentValue]> {
        match self {
            ContentValue::List(items) => Some(items),
            _ => None,
        }
    }
}

impl From<&str> for ContentValue {
    fn from(s: &str) -> Self {
        ContentValue::Text(s.to_string())
    }
}

impl From<String> for ContentValue {
    fn from(s: String) -> Self {
        ContentValue::Text(s)
    }
}

impl From<u16> for ContentValue {
    fn from(v: u16) -> Self {
        ContentValue::U16(v)
    }
}

impl From<i64> for ContentValue {
    fn from(v: i64) -> Self {
        ContentValue::Int(v)
    }
}

impl From<f64> for ContentValue {
    fn from(v: f64) -> Self {
        ContentValue::Float(v)
    }
}

impl From<bool> for ContentValue {
    fn from(v: bool) -> Self {
        ContentValue::Bool(v)
    }
}

impl From<Vec<ContentValue>> for ContentValue {
    fn from(items: Vec<ContentValue>) -> Self {
        ContentValue::List(items)
    }
}

/// Plain textual form. Lists are comma-joined without a key split; the
/// parameter-entry layout is handled by the renderer.
impl fmt::Display for ContentValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ContentValue::Bool(v) => write!(f, "{}", v),
            ContentValue::U16(v) => write!(f, "{}", v),
            ContentValue::Int(v) => write!(f, "{}", v),
            ContentValue::U64(v) => write!(f, "{}", v),
            ContentValue::Float(v) => write!(f, "{}", v),
            ContentValue::Text(s) => f.write_str(s),
            ContentValue::List(items) => {
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(",")?;
                    }
                    write!(f, "{}", item)?;
                }
                Ok(())
            }
        }
    }
}

/// Ordered content of a single resource record.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordContent(Vec<ContentValue>);

impl RecordContent {
    pub fn new(values: Vec<ContentValue>) -> Self {
        Self(values)
    }

    pub fn values(&self) -> &[ContentValue] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&ContentValue> {
        self.0.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ContentValue> {
        self.0.iter()
    }
}

impl From<Vec<ContentValue>> for RecordContent {
    fn from(values: Vec<ContentValue>) -> Self {
        Self(values)
    }
}

impl std::ops::Index<usize> for RecordContent {
    type Output = ContentValue;

    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl<'a> IntoIterator for &'a RecordContent {
    type Item = &'a ContentValue;
    type IntoIter = std::slice::Iter<'a, ContentValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl fmt::Display for RecordContent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&super::render(self.values()))
    }
}
