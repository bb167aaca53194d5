pub mod api;
pub mod errors;
pub mod logging;
pub mod records;
pub mod root;

pub use api::ApiConfig;
pub use errors::ConfigError;
pub use logging::{LogFormat, LoggingConfig};
pub use records::RecordsConfig;
pub use root::{CliOverrides, Config};
