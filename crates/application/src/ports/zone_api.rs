use async_trait::async_trait;
use zonectl_domain::{DomainError, RRSet};

/// Record-management API as seen by the use cases.
///
/// Names are passed without a trailing dot. `rrset` returns `Ok(None)` when
/// the RRSet does not exist; transport failures are reported as
/// [`DomainError::Api`].
#[async_trait]
pub trait ZoneApi: Send + Sync {
    async fn zone_rrsets(&self, zone: &str) -> Result<Vec<RRSet>, DomainError>;

    async fn rrset(
        &self,
        zone: &str,
        name: &str,
        record_type: &str,
    ) -> Result<Option<RRSet>, DomainError>;

    async fn create_rrset(
        &self,
        zone: &str,
        name: &str,
        record_type: &str,
        rrset: &RRSet,
    ) -> Result<(), DomainError>;

    async fn update_rrset(
        &self,
        zone: &str,
        name: &str,
        record_type: &str,
        rrset: &RRSet,
    ) -> Result<(), DomainError>;

    async fn delete_rrset(
        &self,
        zone: &str,
        name: &str,
        record_type: &str,
    ) -> Result<(), DomainError>;
}
