pub mod coercion;
pub mod fixed_arity;
pub mod render;
pub mod svcb;
pub mod value;

pub use coercion::coerce_number;
pub use fixed_arity::ContentFormat;
pub use render::render;
pub use svcb::{decode_svcb, SvcParam, SvcParamKey};
pub use value::{ContentValue, RecordContent};

use crate::RecordType;
use std::str::FromStr;

/// Decodes presentation text for `record_type` into API content.
///
/// SVCB and HTTPS go through the parameter grammar; everything else is
/// dispatched by [`ContentFormat`]. `None` means the text does not fit the
/// record type and nothing should be sent.
pub fn decode(record_type: &str, raw: &str) -> Option<RecordContent> {
    match RecordType::from_str(record_type) {
        Ok(rt) if rt.is_svcb_family() => Some(decode_svcb(raw)),
        _ => ContentFormat::for_record_type(record_type).decode(raw),
    }
}
