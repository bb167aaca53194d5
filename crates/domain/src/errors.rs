use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum DomainError {
    #[error("Unknown record type: {0}")]
    InvalidRecordType(String),

    #[error("Unknown filter type: {0}")]
    InvalidFilterType(String),

    #[error("Record has no content: {0}")]
    EmptyContent(String),

    #[error("Record {name} is not in zone {zone}")]
    RecordNotInZone { name: String, zone: String },

    #[error("RRSet not found: {0}")]
    RRSetNotFound(String),

    #[error("{status_code}: {message}")]
    Api { status_code: u16, message: String },

    #[error("{context}: {source}")]
    Request {
        context: String,
        #[source]
        source: Box<DomainError>,
    },

    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl DomainError {
    /// Wraps an error with the request that produced it.
    pub fn context(self, context: impl Into<String>) -> Self {
        DomainError::Request {
            context: context.into(),
            source: Box::new(self),
        }
    }
}
