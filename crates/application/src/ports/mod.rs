mod zone_api;

pub use zone_api::ZoneApi;
