//! zonectl domain layer: record-content codec, record meta and API DTOs.
pub mod config;
pub mod dns_record;
pub mod errors;
pub mod record_content;
pub mod record_meta;
pub mod rrset;
pub mod zone;

pub use config::{CliOverrides, Config, ConfigError};
pub use dns_record::{RecordType, ResourceRecord};
pub use errors::DomainError;
pub use record_content::{decode, render, ContentFormat, ContentValue, RecordContent};
pub use record_meta::{MetaError, MetaResult, RecordMeta};
pub use rrset::{FilterType, RRSet, RRSets, RecordFilter};
pub use zone::{AddZone, CreateResponse, ListZones, Zone, ZoneRecord};
