pub mod mock_zone_api;

pub use mock_zone_api::*;
