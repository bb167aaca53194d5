use super::svcb::SvcParamKey;
use super::ContentValue;

/// Renders content for display: elements joined by single spaces, nested
/// parameter entries as `key`, `key=v1,v2` or `alpn="v1,v2"`.
pub fn render(content: &[ContentValue]) -> String {
    content
        .iter()
        .filter_map(render_element)
        .collect::<Vec<_>>()
        .join(" ")
}

fn render_element(value: &ContentValue) -> Option<String> {
    match value {
        ContentValue::List(entry) => render_entry(entry),
        scalar => Some(scalar.to_string()),
    }
}

fn render_entry(entry: &[ContentValue]) -> Option<String> {
    let (key, values) = entry.split_first()?;
    let key = key.to_string();
    if values.is_empty() {
        return Some(key);
    }

    let joined = values
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(",");

    if SvcParamKey::parse(&key).quotes_rendered_value() {
        Some(format!("{}=\"{}\"", key, joined))
    } else {
        Some(format!("{}={}", key, joined))
    }
}
