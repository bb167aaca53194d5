//! Presentation-format grammar for SVCB and HTTPS record content.
//!
//! `PRIORITY TARGET [KEY[=VALUE] ...]` is transcribed as-is: nothing here
//! rejects unknown keys, repeated keys or values of the wrong shape.

use super::coercion::coerce_number;
use super::{ContentValue, RecordContent};
use std::fmt;

/// Service parameter keys with a dedicated value rule.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum SvcParamKey {
    Mandatory,
    Alpn,
    NoDefaultAlpn,
    Port,
    Ipv4Hint,
    Ech,
    Ipv6Hint,
    /// Unregistered or misspelt keys, including the empty key.
    Other(String),
}

/// How the text after `=` is turned into parameter values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ValueRule {
    CommaList,
    Number,
    Opaque,
}

impl SvcParamKey {
    pub fn parse(key: &str) -> Self {
        match key {
            "mandatory" => SvcParamKey::Mandatory,
            "alpn" => SvcParamKey::Alpn,
            "no-default-alpn" => SvcParamKey::NoDefaultAlpn,
            "port" => SvcParamKey::Port,
            "ipv4hint" => SvcParamKey::Ipv4Hint,
            "ech" => SvcParamKey::Ech,
            "ipv6hint" => SvcParamKey::Ipv6Hint,
            other => SvcParamKey::Other(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            SvcParamKey::Mandatory => "mandatory",
            SvcParamKey::Alpn => "alpn",
            SvcParamKey::NoDefaultAlpn => "no-default-alpn",
            SvcParamKey::Port => "port",
            SvcParamKey::Ipv4Hint => "ipv4hint",
            SvcParamKey::Ech => "ech",
            SvcParamKey::Ipv6Hint => "ipv6hint",
            SvcParamKey::Other(key) => key,
        }
    }

    fn value_rule(&self) -> ValueRule {
        match self {
            SvcParamKey::Mandatory
            | SvcParamKey::Alpn
            | SvcParamKey::Ipv4Hint
            | SvcParamKey::Ipv6Hint => ValueRule::CommaList,
            SvcParamKey::Port => ValueRule::Number,
            SvcParamKey::NoDefaultAlpn | SvcParamKey::Ech | SvcParamKey::Other(_) => {
                ValueRule::Opaque
            }
        }
    }

    /// Only `alpn` values are quoted when rendered.
    pub fn quotes_rendered_value(&self) -> bool {
        matches!(self, SvcParamKey::Alpn)
    }
}

impl fmt::Display for SvcParamKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One `KEY[=VALUE]` token after decoding.
#[derive(Debug, Clone, PartialEq)]
pub struct SvcParam {
    pub key: SvcParamKey,
    pub values: Vec<ContentValue>,
}

impl SvcParam {
    /// Splits on the first `=` only, so values may contain `=`.
    pub fn parse(token: &str) -> Self {
        let Some((key, value)) = token.split_once('=') else {
            return Self {
                key: SvcParamKey::parse(token),
                values: Vec::new(),
            };
        };

        let key = SvcParamKey::parse(key);
        let values = match key.value_rule() {
            ValueRule::CommaList => unquote(value)
                .split(',')
                .map(ContentValue::text)
                .collect(),
            ValueRule::Number => vec![coerce_number(value)],
            ValueRule::Opaque => vec![ContentValue::text(value)],
        };

        Self { key, values }
    }

    /// The nested `[key, values...]` form carried in record content.
    pub fn into_entry(self) -> ContentValue {
        let mut entry = Vec::with_capacity(self.values.len() + 1);
        entry.push(ContentValue::Text(self.key.as_str().to_string()));
        entry.extend(self.values);
        ContentValue::List(entry)
    }
}

fn unquote(value: &str) -> &str {
    value
        .strip_prefix('"')
        .and_then(|v| v.strip_suffix('"'))
        .unwrap_or(value)
}

/// Decodes SVCB/HTTPS content. Never fails: fewer than two tokens yields
/// the raw text as the only element.
pub fn decode_svcb(raw: &str) -> RecordContent {
    let tokens: Vec<&str> = raw.split(' ').filter(|t| !t.is_empty()).collect();
    if tokens.len() < 2 {
        return RecordContent::new(vec![ContentValue::text(raw)]);
    }

    let mut content = Vec::with_capacity(tokens.len());
    content.push(coerce_number(tokens[0]));
    content.push(ContentValue::text(tokens[1]));
    content.extend(
        tokens[2..]
            .iter()
            .map(|token| SvcParam::parse(token).into_entry()),
    );

    RecordContent::new(content)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_round_trips_through_str() {
        for key in [
            "mandatory",
            "alpn",
            "no-default-alpn",
            "port",
            "ipv4hint",
            "ech",
            "ipv6hint",
            "key65000",
            "",
        ] {
            assert_eq!(SvcParamKey::parse(key).as_str(), key);
        }
    }

    #[test]
    fn test_only_alpn_is_quoted() {
        assert!(SvcParamKey::Alpn.quotes_rendered_value());
        assert!(!SvcParamKey::Mandatory.quotes_rendered_value());
        assert!(!SvcParamKey::Other("alpn2".into()).quotes_rendered_value());
    }

    #[test]
    fn test_unquote_requires_both_quotes() {
        assert_eq!(unquote("\"h2,h3\""), "h2,h3");
        assert_eq!(unquote("\"h2"), "\"h2");
        assert_eq!(unquote("h2"), "h2");
        assert_eq!(unquote("\""), "\"");
    }

    #[test]
    fn test_bare_key_has_no_values() {
        let param = SvcParam::parse("no-default-alpn");
        assert_eq!(param.key, SvcParamKey::NoDefaultAlpn);
        assert!(param.values.is_empty());
    }
}
